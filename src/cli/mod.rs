//! CLI routing and command dispatch.

use crate::constants;
use crate::core::store;
use crate::models::store_file::StoreFile;
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

pub mod entry;
pub mod export;
pub mod init;
pub mod list;
pub mod stats;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub store_path: PathBuf,
}

impl CliContext {
    pub fn load(&self) -> Result<StoreFile> {
        Ok(store::load(&self.store_path)?)
    }

    pub fn save(&self, store: &StoreFile) -> Result<()> {
        Ok(store::save(&self.store_path, store)?)
    }
}

/// Output format for read commands.
///
/// `text` renders listings as tables and single records as `key: value` lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(alias = "table")]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "passkeep",
    version,
    about = "Simple password manager over a local JSON file (educational use only, plaintext storage)"
)]
pub struct Cli {
    /// Path to the JSON store file
    #[arg(
        long,
        short = 'f',
        global = true,
        value_name = "PATH",
        default_value = constants::DEFAULT_STORE_FILE
    )]
    pub file: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        debug!(
            command = self.command.name(),
            file = %self.file.display(),
            "dispatching"
        );
        let ctx = CliContext {
            store_path: self.file,
        };

        match self.command {
            Commands::Init(args) => init::run(&ctx, args),
            Commands::Add(args) => entry::run_add(&ctx, args),
            Commands::Get(args) => entry::run_get(&ctx, args),
            Commands::Update(args) => entry::run_update(&ctx, args),
            Commands::Delete(args) => entry::run_delete(&ctx, args),
            Commands::List(args) => list::run_list(&ctx, args),
            Commands::Search(args) => list::run_search(&ctx, args),
            Commands::Export(args) => export::run(&ctx, args),
            Commands::Stats(args) => stats::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new password store file
    Init(init::InitArgs),
    /// Add a new entry
    Add(entry::AddArgs),
    /// Show an entry by site
    Get(entry::GetArgs),
    /// Update username and/or password for a site
    Update(entry::UpdateArgs),
    /// Delete an entry by site
    Delete(entry::DeleteArgs),
    /// List all entries
    List(list::ListArgs),
    /// Search site names and usernames
    Search(list::SearchArgs),
    /// Export entries to a file
    Export(export::ExportArgs),
    /// Show basic statistics
    Stats(stats::StatsArgs),
}

impl Commands {
    /// Command name for log lines.
    pub fn name(&self) -> &str {
        match self {
            Commands::Init(_) => "init",
            Commands::Add(_) => "add",
            Commands::Get(_) => "get",
            Commands::Update(_) => "update",
            Commands::Delete(_) => "delete",
            Commands::List(_) => "list",
            Commands::Search(_) => "search",
            Commands::Export(_) => "export",
            Commands::Stats(_) => "stats",
        }
    }
}
