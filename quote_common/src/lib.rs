//!
//! Common types and utilities shared by the quote scraper, query API and plotter.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` record exchanged by every program.
//! - `store` — loading and saving the JSON quote store.
//! - `net` — remote endpoints, default paths and ports.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod result;
pub mod store;

pub use error::QuoteError;
pub use quote::Quote;
pub use result::Result;
