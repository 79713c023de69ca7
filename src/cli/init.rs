use crate::cli::CliContext;
use crate::core::store;
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Args, Debug)]
pub struct InitArgs {}

pub fn run(ctx: &CliContext, _args: InitArgs) -> Result<()> {
    store::init(&ctx.store_path, Utc::now())?;
    println!("Created new password store at {}", ctx.store_path.display());
    Ok(())
}
