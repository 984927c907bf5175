use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gedcal_core::Calendar;

/// GEDCOM date parser and calendar converter.
#[derive(Parser)]
#[command(
    name = "gedcal",
    version,
    about = "Parse GEDCOM dates and convert between calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a settings file (defaults to an optional `gedcal.toml`).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse dates and print their structure.
    Parse(ParseArgs),
    /// Convert a date to the Gregorian calendar.
    Convert {
        /// Date to convert.
        date: String,
    },
    /// Order two dates: prints -1, 0, or 1.
    Compare {
        a: String,
        b: String,
    },
    /// Whole years between two dates.
    Between {
        a: String,
        b: String,
    },
    /// Check that every day exists in its month.
    Validate {
        /// Dates to check.
        #[arg(required = true)]
        dates: Vec<String>,
    },
    /// Julian Day Number of a calendar date.
    #[command(allow_negative_numbers = true)]
    Jdn(JdnArgs),
    /// Calendar date of a Julian Day Number.
    #[command(allow_negative_numbers = true)]
    FromJdn {
        /// Calendar name, e.g. `julian` or `"FRENCH R"`.
        calendar: Calendar,
        jdn: i64,
    },
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Dates to parse.
    #[arg(required = true)]
    pub dates: Vec<String>,

    /// Also print the Gregorian conversion.
    #[arg(short, long)]
    pub gregorian: bool,
}

/// Arguments for the `jdn` subcommand.
#[derive(clap::Args)]
pub struct JdnArgs {
    /// Calendar name, e.g. `hebrew` or `"FRENCH R"`.
    pub calendar: Calendar,
    /// Astronomical year for Gregorian and Julian (1 BC is 0).
    pub year: i32,
    pub month: u32,
    pub day: u32,
}
