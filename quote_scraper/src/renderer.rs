//! Quote image rendering through the remote image generator.
//!
//! Each quote is burned into a PNG by the generator and written to
//! `{images_dir}/{id}.png`. Failures are per quote: they are logged and the loop
//! moves on; files already written stay in place.
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};
use quote_common::net::IMAGE_FONT_SIZE;
use quote_common::{Quote, Result};

use crate::colors::ColorPair;
use crate::http::HttpClient;
use crate::pipeline::Endpoints;

/// Outcome of a rendering pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Files written, in quote order.
    pub written: Vec<PathBuf>,
    /// Quote ids whose image could not be fetched or saved.
    pub failed: Vec<u64>,
}

/// Generator URL for `quote` drawn in `colors`.
pub fn image_url(endpoints: &Endpoints, quote: &Quote, colors: &ColorPair) -> String {
    format!(
        "{}/{}/{}?text={}&fontSize={}",
        endpoints.image_url,
        colors.background,
        colors.foreground,
        encode_text(&quote.quote),
        IMAGE_FONT_SIZE
    )
}

/// Percent-encode everything outside the unreserved set; a space becomes `%20`.
fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for b in text.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char)
            }
            _ => {
                let _ = write!(out, "%{:02X}", b);
            }
        }
    }
    out
}

/// Path of the image for the quote with `id`.
pub fn image_path(images_dir: &Path, id: u64) -> PathBuf {
    images_dir.join(format!("{}.png", id))
}

/// Fetch and store one image per quote, creating `images_dir` when needed.
///
/// Only the directory creation can fail the whole pass.
pub async fn render_quote_images(
    client: &HttpClient,
    endpoints: &Endpoints,
    quotes: &[Quote],
    colors: &ColorPair,
    images_dir: &Path,
) -> Result<RenderReport> {
    fs::create_dir_all(images_dir)?;
    let mut report = RenderReport::default();

    for quote in quotes {
        match render_one(client, endpoints, quote, colors, images_dir).await {
            Ok(path) => {
                info!("Image {} created", path.display());
                report.written.push(path);
            }
            Err(e) => {
                error!("Failed to create image for quote {}: {}", quote.id, e);
                report.failed.push(quote.id);
            }
        }
    }
    Ok(report)
}

async fn render_one(
    client: &HttpClient,
    endpoints: &Endpoints,
    quote: &Quote,
    colors: &ColorPair,
    images_dir: &Path,
) -> Result<PathBuf> {
    let bytes = client.get_bytes(&image_url(endpoints, quote, colors)).await?;
    let path = image_path(images_dir, quote.id);
    fs::write(&path, bytes)?;
    Ok(path)
}
