use crate::cli::{CliContext, OutputFormat};
use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::Args;
use serde::Serialize;

fn parse_site(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("site cannot be empty".into());
    }
    Ok(s.to_string())
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Site name (case-sensitive, unique)
    #[arg(value_parser = parse_site)]
    pub site: String,

    /// Username for the site
    pub username: String,

    /// Password for the site (stored in plaintext)
    pub password: String,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Site name
    pub site: String,

    /// Output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Site name
    pub site: String,

    /// New username
    #[arg(long)]
    pub username: Option<String>,

    /// New password
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Site name
    pub site: String,
}

#[derive(Serialize)]
struct EntryView<'a> {
    site: &'a str,
    username: &'a str,
    password: &'a str,
    last_updated: String,
}

pub fn run_add(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let mut store = ctx.load()?;
    store.add(&args.site, &args.username, &args.password, Utc::now())?;
    ctx.save(&store)?;
    println!("Added: {} ({})", args.site, args.username);
    Ok(())
}

pub fn run_get(ctx: &CliContext, args: GetArgs) -> Result<()> {
    let store = ctx.load()?;
    let entry = store.get(&args.site)?;
    let view = EntryView {
        site: &args.site,
        username: &entry.username,
        password: &entry.password,
        last_updated: entry.last_updated.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    };

    if args.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&view).context("serialize entry")?;
        println!("{}", json);
        return Ok(());
    }

    println!("site: {}", view.site);
    println!("username: {}", view.username);
    println!("password: {}", view.password);
    println!("last_updated: {}", view.last_updated);
    Ok(())
}

pub fn run_update(ctx: &CliContext, args: UpdateArgs) -> Result<()> {
    let mut store = ctx.load()?;
    let changed = store.update(
        &args.site,
        args.username.as_deref(),
        args.password.as_deref(),
        Utc::now(),
    )?;
    ctx.save(&store)?;
    println!("Updated: {} ({})", args.site, changed.names().join(", "));
    Ok(())
}

pub fn run_delete(ctx: &CliContext, args: DeleteArgs) -> Result<()> {
    let mut store = ctx.load()?;
    store.delete(&args.site, Utc::now())?;
    ctx.save(&store)?;
    println!("Deleted: {}", args.site);
    Ok(())
}
