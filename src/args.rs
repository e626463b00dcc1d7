// src/args.rs
use std::path::PathBuf;

use bbcheck_domain::LED_THRESHOLD;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueHint};

use crate::options::OutputFormat;
use crate::parsers;

#[derive(Parser, Debug)]
#[command(
    name = "bbcheck",
    version,
    about = "Range classification, threshold gates and black-box suites for them"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true, help_heading = "Output")]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(long, value_hint = ValueHint::FilePath, global = true, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Output")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a value with the age table or a table file
    Classify {
        #[arg(value_parser = parsers::parse_i64, allow_negative_numbers = true)]
        value: i64,

        /// Range table file (.json, .yaml, .yml)
        #[arg(long, value_hint = ValueHint::FilePath)]
        table: Option<PathBuf>,
    },

    /// Decide on/off for a reading and drive the logging output
    Gate {
        #[arg(value_parser = parsers::parse_i64, allow_negative_numbers = true)]
        reading: i64,

        #[arg(long, default_value_t = LED_THRESHOLD, value_parser = parsers::parse_i64, allow_negative_numbers = true)]
        threshold: i64,
    },

    /// List the boundary and partition cases for a table or threshold
    Cases(SuiteOptions),

    /// Run the designed cases against the built-in subject
    Run(SuiteOptions),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SuiteOptions {
    /// Range table file; defaults to the built-in age table
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "threshold")]
    pub table: Option<PathBuf>,

    /// Design cases around this gate threshold instead of a table
    #[arg(long, value_parser = parsers::parse_i64, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Keep only the first N cases
    #[arg(long, value_parser = parsers::parse_positive_usize)]
    pub max_cases: Option<usize>,
}
