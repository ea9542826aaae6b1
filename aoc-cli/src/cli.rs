//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers against local inputs", version)]
pub struct Args {
    /// Day to run (runs every registered day of the year if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..))]
    pub part: Option<u8>,

    /// Use the full puzzle input instead of the sample
    #[arg(short, long)]
    pub input: bool,

    /// Puzzle year
    #[arg(short, long, default_value_t = 2025)]
    pub year: u16,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/day{DD}/` input folders
    #[arg(long, env = "AOC_INPUTS_DIR", default_value = "inputs")]
    pub inputs_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Debug logging for the solver crates (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
