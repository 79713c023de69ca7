use crate::cli::{CliContext, OutputFormat};
use crate::core::entries::SortKey;
use crate::models::entry::EntryRow;
use anyhow::{Context, Result};
use chrono::SecondsFormat;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Sort by site (default) or last_updated
    #[arg(long, value_enum, default_value_t = SortKey::Site)]
    pub sort: SortKey,

    /// Output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keyword to match against site and username (case-insensitive)
    pub keyword: String,

    /// Output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub(crate) fn rows_table(rows: &[EntryRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Site").add_attribute(Attribute::Bold),
        Cell::new("Username").add_attribute(Attribute::Bold),
        Cell::new("Last Updated").add_attribute(Attribute::Bold),
    ]);
    for row in rows {
        table.add_row(vec![
            row.site.clone(),
            row.username.clone(),
            row.last_updated.to_rfc3339_opts(SecondsFormat::Secs, true),
        ]);
    }
    table
}

fn print_json(rows: &[EntryRow]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows).context("serialize entries")?;
    println!("{}", json);
    Ok(())
}

pub fn run_list(ctx: &CliContext, args: ListArgs) -> Result<()> {
    let store = ctx.load()?;
    let rows = store.list(args.sort);

    if args.format == OutputFormat::Json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    println!("{}", rows_table(&rows));
    Ok(())
}

pub fn run_search(ctx: &CliContext, args: SearchArgs) -> Result<()> {
    let store = ctx.load()?;
    let rows = store.search(&args.keyword);

    if args.format == OutputFormat::Json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No matches for '{}'.", args.keyword);
        return Ok(());
    }

    println!("{}", rows_table(&rows));
    println!("\n{} matches.", rows.len());
    Ok(())
}
