//! `vital-calc` — compute derived record fields from the command line.
//!
//! ```text
//! vital-calc age --start 1950-06-15 --end 2024-06-10
//! vital-calc duration --start 2015-03-20 --end 2023-01-05 --json
//! ```

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use vital_calc::{
    compute_age_at_event_with_policy, compute_calendar_duration, parse_form_date, PLACEHOLDER,
};

use crate::config::Config;
use crate::logging::{init_logging, Verbosity};

#[derive(Parser, Debug)]
#[command(name = "vital-calc", version, about = "Age at death and marriage duration from record dates")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print results as JSON (`null` when no result can be computed).
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Age at an event (e.g., birth → death), auto-scaled to hours, days, months or years.
    Age(RangeArgs),
    /// Calendar duration in years, months and days (e.g., marriage → divorce).
    Duration(RangeArgs),
}

#[derive(Args, Debug)]
struct RangeArgs {
    /// Earlier date (YYYY-MM-DD, ISO 8601 date-time, or RFC 3339).
    #[arg(long)]
    start: String,

    /// Later date, same formats as --start.
    #[arg(long)]
    end: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    let config = Config::load_from(cli.config.as_deref())?;
    let json = cli.json || config.output.json;
    debug!(?config, "configuration loaded");

    match &cli.command {
        Command::Age(range) => {
            let (start, end) = parse_range(range)?;
            let age = compute_age_at_event_with_policy(start, end, &config.policy);
            print_result(age, json)
        }
        Command::Duration(range) => {
            let (start, end) = parse_range(range)?;
            let duration = compute_calendar_duration(start.date(), end.date());
            print_result(duration, json)
        }
    }
}

fn parse_range(range: &RangeArgs) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let start = parse_form_date(&range.start).context("invalid --start date")?;
    let end = parse_form_date(&range.end).context("invalid --end date")?;
    Ok((start, end))
}

fn print_result<T: Serialize + std::fmt::Display>(result: Option<T>, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
        println!("{out}");
        return Ok(());
    }

    match result {
        Some(value) => println!("{value}"),
        None => println!("{PLACEHOLDER}"),
    }
    Ok(())
}
