use crate::cli::{CliContext, OutputFormat};
use crate::core::entries::Stats;
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Args;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn timestamp_or_dash(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "-".to_string())
}

fn stats_lines(stats: &Stats) -> Vec<String> {
    vec![
        format!("entries: {}", stats.entries_count),
        format!("oldest: {}", timestamp_or_dash(stats.oldest)),
        format!("newest: {}", timestamp_or_dash(stats.newest)),
        format!("avg password length: {:.1}", stats.avg_password_length),
    ]
}

pub fn run(ctx: &CliContext, args: StatsArgs) -> Result<()> {
    let store = ctx.load()?;
    let stats = store.stats();

    if args.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&stats).context("serialize stats")?;
        println!("{}", json);
        return Ok(());
    }

    for line in stats_lines(&stats) {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_lines_for_empty_store() {
        let stats = Stats {
            entries_count: 0,
            oldest: None,
            newest: None,
            avg_password_length: 0.0,
        };
        assert_eq!(
            stats_lines(&stats),
            vec![
                "entries: 0",
                "oldest: -",
                "newest: -",
                "avg password length: 0.0",
            ]
        );
    }
}
