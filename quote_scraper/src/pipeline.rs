//! Scrape pipeline: harvest IDs, fetch quotes, persist, resolve colors, render images.
//!
//! Every stage runs to completion before the next starts and every request is awaited
//! before the next one is sent.
use std::path::PathBuf;

use log::{error, info, warn};
use quote_common::net::{IMAGE_URL, PAGE_URL, QUOTES_URL};
use quote_common::{Result, store};

use crate::colors::resolve_color_scheme;
use crate::fetcher::fetch_quotes;
use crate::harvester::fetch_quote_ids;
use crate::http::HttpClient;
use crate::renderer::render_quote_images;

/// Base URLs of the three remote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Personalised page, queried with `?id=<student id>`.
    pub page_url: String,
    /// Quotes API; a record lives at `{quotes_url}/{id}`.
    pub quotes_url: String,
    /// Image generator, extended with `/{bg}/{fg}?text=..`.
    pub image_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            page_url: String::from(PAGE_URL),
            quotes_url: String::from(QUOTES_URL),
            image_url: String::from(IMAGE_URL),
        }
    }
}

impl Endpoints {
    /// All three services mounted under one host, as `/generate`, `/quotes` and
    /// `/image/1200x200`.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Endpoints {
            page_url: format!("{}/generate", base),
            quotes_url: format!("{}/quotes", base),
            image_url: format!("{}/image/1200x200", base),
        }
    }

    /// URL of the quote record with `id`.
    pub fn quote_url(&self, id: u64) -> String {
        format!("{}/{}", self.quotes_url, id)
    }
}

/// Everything a pipeline run needs besides the student id.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Remote services to talk to.
    pub endpoints: Endpoints,
    /// JSON store to overwrite.
    pub quotes_file: PathBuf,
    /// Directory receiving the rendered images.
    pub images_dir: PathBuf,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The page could not be fetched or held no IDs.
    NoQuoteIds,
    /// None of the IDs produced a quote.
    NoQuotes,
    /// All stages ran.
    Completed {
        /// Quotes fetched.
        quotes: usize,
        /// Images written.
        images: usize,
        /// Whether the store was written.
        saved: bool,
    },
}

/// Run the whole pipeline for `student_id`.
pub async fn run(client: &HttpClient, config: &ScrapeConfig, student_id: &str) -> Result<Outcome> {
    let endpoints = &config.endpoints;

    let ids = match fetch_quote_ids(client, endpoints, student_id).await {
        Ok(ids) if ids.is_empty() => {
            warn!("The page for {} contains no quote IDs", student_id);
            return Ok(Outcome::NoQuoteIds);
        }
        Ok(ids) => ids,
        Err(e) => {
            error!("Failed to fetch the page for {}: {}", student_id, e);
            return Ok(Outcome::NoQuoteIds);
        }
    };
    info!("Quote IDs: {:?}", ids);

    let quotes = fetch_quotes(client, endpoints, &ids).await;
    if quotes.is_empty() {
        warn!("No quotes could be retrieved; check the IDs and the quotes API");
        return Ok(Outcome::NoQuotes);
    }

    let saved = match store::save_quotes(&config.quotes_file, &quotes) {
        Ok(()) => {
            info!("Quotes saved to {}", config.quotes_file.display());
            true
        }
        Err(e) => {
            error!("Failed to save quotes to {}: {}", config.quotes_file.display(), e);
            false
        }
    };

    let colors = resolve_color_scheme(client, endpoints, student_id).await;
    let report = render_quote_images(client, endpoints, &quotes, &colors, &config.images_dir).await?;
    info!(
        "Done: {} images in {}/ ({} failed)",
        report.written.len(),
        config.images_dir.display(),
        report.failed.len()
    );

    Ok(Outcome::Completed {
        quotes: quotes.len(),
        images: report.written.len(),
        saved,
    })
}
