//! Command-line arguments for the quote scraper.
//!
//! This module defines the CLI interface using `clap` and the conversion into the
//! plain configuration structs consumed by the pipeline.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{DEFAULT_IMAGES_DIR, DEFAULT_QUOTES_FILE, IMAGE_URL, PAGE_URL, QUOTES_URL};

use crate::pipeline::{Endpoints, ScrapeConfig};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Student identifier used to personalise the generated page.
    /// Prompted for on stdin when omitted.
    #[clap(long)]
    pub student_id: Option<String>,

    /// JSON file the fetched quotes are written to.
    #[clap(long, default_value = DEFAULT_QUOTES_FILE)]
    pub output: PathBuf,

    /// Directory receiving one PNG per quote.
    #[clap(long, default_value = DEFAULT_IMAGES_DIR)]
    pub images_dir: PathBuf,

    /// Per-request timeout in seconds. No timeout when omitted.
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Page producing the quote IDs and the color scheme.
    #[clap(long, default_value = PAGE_URL)]
    pub page_url: String,

    /// Base URL of the quotes API.
    #[clap(long, default_value = QUOTES_URL)]
    pub quotes_url: String,

    /// Base URL of the image generator.
    #[clap(long, default_value = IMAGE_URL)]
    pub image_url: String,
}

impl Args {
    /// Per-request timeout, if one was requested.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Pipeline configuration derived from the arguments.
    pub fn config(&self) -> ScrapeConfig {
        ScrapeConfig {
            endpoints: Endpoints {
                page_url: trim_slash(&self.page_url),
                quotes_url: trim_slash(&self.quotes_url),
                image_url: trim_slash(&self.image_url),
            },
            quotes_file: self.output.clone(),
            images_dir: self.images_dir.clone(),
        }
    }
}

fn trim_slash(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_services() {
        let args = Args::parse_from(["quote_scraper"]);
        let config = args.config();
        assert_eq!(args.student_id, None);
        assert_eq!(args.timeout(), None);
        assert_eq!(config.endpoints, Endpoints::default());
        assert_eq!(config.quotes_file, PathBuf::from("quotes.json"));
        assert_eq!(config.images_dir, PathBuf::from("quotes"));
    }

    #[test]
    fn overrides_drop_trailing_slashes() {
        let args = Args::parse_from([
            "quote_scraper",
            "--student-id",
            "p24099",
            "--quotes-url",
            "http://127.0.0.1:9000/quotes/",
            "--timeout-secs",
            "5",
        ]);
        assert_eq!(args.student_id.as_deref(), Some("p24099"));
        assert_eq!(args.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(args.config().endpoints.quotes_url, "http://127.0.0.1:9000/quotes");
    }
}
