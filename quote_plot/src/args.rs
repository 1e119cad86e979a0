//! Command-line arguments for the histogram plotter.
use std::path::PathBuf;

use clap::Parser;
use quote_common::net::{DEFAULT_HISTOGRAM_FILE, DEFAULT_QUOTES_FILE};

use crate::histogram::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON store to read.
    #[clap(long, default_value = DEFAULT_QUOTES_FILE)]
    pub quotes_file: PathBuf,

    /// PNG file the chart is written to.
    #[clap(long, default_value = DEFAULT_HISTOGRAM_FILE)]
    pub output: PathBuf,

    /// Chart width in pixels.
    #[clap(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Chart height in pixels.
    #[clap(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}
