use crate::cli::CliContext;
use crate::core::export::{self, ExportFormat};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
}

pub fn run(ctx: &CliContext, args: ExportArgs) -> Result<()> {
    let store = ctx.load()?;
    let written = export::export(&store, args.format, &args.out, &ctx.store_path)?;
    println!("Exported {} entries to {}", written, args.out.display());
    Ok(())
}
