//! Quote Plot — renders a labelled bar chart of quote counts per author from the JSON
//! store.
//!
//! Usage example (CLI):
//! ```bash
//! quote_plot --quotes-file quotes.json --output histogram.png
//! ```
#![warn(missing_docs)]
mod args;
mod histogram;

use clap::Parser;
use log::{info, warn};
use quote_common::{QuoteError, Result, store};

use crate::args::Args;
use crate::histogram::{AuthorCount, author_counts, render_histogram};

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

/// Load the store and write the chart.
///
/// Returns the plotted counts, or `None` when the store is missing or empty and
/// nothing was written.
fn run(args: &Args) -> Result<Option<Vec<AuthorCount>>> {
    let quotes = store::load_quotes(&args.quotes_file)?;
    if quotes.is_empty() {
        warn!("No quotes available in {}", args.quotes_file.display());
        return Ok(None);
    }

    let counts = author_counts(&quotes);
    render_histogram(&counts, &args.output, args.width, args.height)?;
    info!("Histogram saved to {}", args.output.display());
    Ok(Some(counts))
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
