//! Error types shared by the scraper, API and plotter.
//!
//! The `QuoteError` enum unifies common failure cases for I/O, serialization,
//! HTTP transport, HTML parsing and image encoding, allowing crates to propagate a
//! single error type. The HTTP and image variants exist only with the `http` and
//! `image` features, so crates that never touch them do not build those stacks.
use std::io;

use thiserror::Error;

/// Unified error type shared by every binary in the workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library (files, directories, stdin).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Transport failure or non-success status reported by the HTTP client.
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A CSS selector could not be compiled.
    #[error("HTML selector error: {0}")]
    Html(String),

    /// Failure while encoding or writing an image.
    #[cfg(feature = "image")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
