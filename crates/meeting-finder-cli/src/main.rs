//! `meeting-finder` CLI — find free time two calendars share.
//!
//! ## Usage
//!
//! ```sh
//! # Common free windows of at least 30 minutes
//! meeting-finder find --calendar1 alice.json --calendar2 bob.json --duration "[00:30]"
//!
//! # Only the earliest window, as JSON
//! meeting-finder find -a alice.json -b bob.json -d "[01:00]" --first --format json
//!
//! # Check a calendar file (reads stdin when -i is omitted)
//! meeting-finder validate -i alice.json
//! ```
//!
//! Set `RUST_LOG=debug` or pass `-v` to see each window as it is found.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};

use meeting_finder::{find_first_gap, find_gaps, parse_calendar, Gap, MeetingDuration};

#[derive(Parser)]
#[command(
    name = "meeting-finder",
    version,
    about = "Find common free meeting slots between two calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log each step at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find free windows shared by two calendars
    Find {
        /// First calendar JSON file
        #[arg(short = 'a', long)]
        calendar1: String,
        /// Second calendar JSON file
        #[arg(short = 'b', long)]
        calendar2: String,
        /// Minimum meeting length as [HH:MM]
        #[arg(short, long)]
        duration: String,
        /// Report only the earliest window
        #[arg(long)]
        first: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Validate a calendar JSON file
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One `HH:MM-HH:MM` window per line
    Text,
    /// JSON array of `[start, end]` pairs
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Find {
            calendar1,
            calendar2,
            duration,
            first,
            format,
        } => {
            let calendar1 = parse_calendar(&read_input(Some(&calendar1))?)
                .with_context(|| format!("Invalid calendar: {}", calendar1))?;
            let calendar2 = parse_calendar(&read_input(Some(&calendar2))?)
                .with_context(|| format!("Invalid calendar: {}", calendar2))?;
            let duration: MeetingDuration = duration
                .parse()
                .with_context(|| format!("Invalid duration: {}", duration))?;

            let gaps: Vec<Gap> = if first {
                find_first_gap(&calendar1, &calendar2, duration)
                    .into_iter()
                    .collect()
            } else {
                find_gaps(&calendar1, &calendar2, duration)
            };
            log::info!("found {} free windows of at least {}", gaps.len(), duration);

            print_gaps(&gaps, format)?;
        }
        Commands::Validate { input } => {
            let json = read_input(input.as_deref())?;
            let calendar = parse_calendar(&json).context("Calendar is not valid")?;
            let hours = calendar.working_hours();
            println!(
                "valid: working hours {}-{}, {} planned meetings",
                hours.start(),
                hours.end(),
                calendar.meetings().len()
            );
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn print_gaps(gaps: &[Gap], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if gaps.is_empty() {
                eprintln!("No common free time found.");
            }
            for gap in gaps {
                println!("{}-{}", gap.start, gap.end);
            }
        }
        OutputFormat::Json => {
            let pairs: Vec<(String, String)> = gaps.iter().map(Gap::to_pair).collect();
            println!("{}", serde_json::to_string(&pairs)?);
        }
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
