use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input file, see --mode for the expected format
    #[arg(value_name = "INPUT")]
    pub input_file: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "pack")]
    pub mode: Mode,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Write a visualization of the packed strip to this file (pack mode only)
    #[arg(long, value_name = "FILE")]
    pub svg: Option<PathBuf>,
    /// Print the result as JSON instead of the line format
    #[arg(long)]
    pub json: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Pack rectangles into a single strip: a count followed by `width height` lines
    Pack,
    /// Aggregate interval rates: sample points followed by `name start stop count` lines
    Rates,
}
