use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use crate::collector::collect_daily_digest;
use crate::config::RunConfig;
use crate::utils::get_projects_dir;

#[derive(Parser, Debug)]
#[command(name = "daily-digest")]
#[command(version = "0.1.0")]
#[command(about = "Summarize one day of Claude Code conversations as JSON", long_about = None)]
pub struct Cli {
    /// Day to summarize (YYYY-MM-DD), defaults to today in local time
    #[arg(value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

impl Cli {
    /// Build the run configuration; the only place the clock and HOME are read
    pub fn run_config(&self) -> Result<RunConfig> {
        let projects_dir = get_projects_dir()?;
        Ok(match self.date {
            Some(date) => RunConfig::new(date, projects_dir),
            None => RunConfig::for_today(projects_dir),
        })
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.run_config()?;

    let digest = collect_daily_digest(&config)?;
    let json = digest.to_pretty_json().context("Failed to serialize daily digest")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write to stdout")?;

    Ok(())
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// The input must be the date's canonical zero-padded form, so the digest's `date`
/// header always reads back exactly as it was given.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}', expected YYYY-MM-DD: {}", s, e))?;
    if date.format("%Y-%m-%d").to_string() != s {
        return Err(format!("invalid date '{}', expected YYYY-MM-DD", s));
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(parse_date("2024-06-01"), Ok(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert_eq!(parse_date("2024-02-29"), Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("06/01/2024").is_err());
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_date_requires_zero_padding() {
        assert!(parse_date("2024-6-1").is_err());
        assert!(parse_date("2024-06-1").is_err());
        assert!(parse_date("2024-6-01").is_err());
        assert!(parse_date("02024-06-01").is_err());
    }

    #[test]
    fn test_cli_parses_optional_date() {
        let cli = Cli::try_parse_from(["daily-digest", "2024-06-01"]).unwrap();
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 6, 1));

        let cli = Cli::try_parse_from(["daily-digest"]).unwrap();
        assert!(cli.date.is_none());
    }

    #[test]
    fn test_cli_rejects_bad_date_and_extra_args() {
        assert!(Cli::try_parse_from(["daily-digest", "June 1st"]).is_err());
        assert!(Cli::try_parse_from(["daily-digest", "2024-06-01", "2024-06-02"]).is_err());
    }
}
