//! Quote Scraper — asks for a student identifier, harvests the quote IDs hidden in the
//! personalised page, downloads the quotes into a JSON store and renders each one into
//! a PNG image.
//!
//! Usage example (CLI):
//! ```bash
//! quote_scraper --student-id p24099 --output quotes.json --images-dir quotes
//! ```
//!
//! Without `--student-id` the identifier is read from stdin.
use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{info, warn};
use quote_common::{QuoteError, Result};
use quote_scraper::args::Args;
use quote_scraper::pipeline::{self, Outcome};
use quote_scraper::HttpClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let student_id = match args.student_id.as_deref() {
        Some(id) => id.trim().to_string(),
        None => prompt_student_id()?,
    };

    let client = HttpClient::new(args.timeout())?;
    match pipeline::run(&client, &args.config(), &student_id).await? {
        Outcome::NoQuoteIds => warn!("No valid quote IDs found. Check the student id."),
        Outcome::NoQuotes => warn!("No quotes retrieved. Check the quote IDs and the API."),
        Outcome::Completed { quotes, images, saved } => info!(
            "Finished: {} quotes{}, {} images",
            quotes,
            if saved { " saved" } else { " (not saved)" },
            images
        ),
    }
    Ok(())
}

fn prompt_student_id() -> Result<String, QuoteError> {
    print!("Student id: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
