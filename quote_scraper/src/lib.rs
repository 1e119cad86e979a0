//! Quote scraper library.
//!
//! Turns a student identifier into a JSON quote store and a directory of rendered
//! quote images. The stages live in their own modules and are chained by `pipeline`:
//!
//! - `harvester` — numeric quote IDs from the personalised page.
//! - `fetcher` — quote records from the quotes API.
//! - `colors` — background/foreground pair from the same page.
//! - `renderer` — one PNG per quote from the image generator.
//! - `http` — single-attempt HTTP client shared by every stage.
//! - `args` — command-line interface.
pub mod args;
pub mod colors;
pub mod fetcher;
pub mod harvester;
pub mod http;
pub mod pipeline;
pub mod renderer;

pub use colors::ColorPair;
pub use http::HttpClient;
pub use pipeline::{Endpoints, Outcome, ScrapeConfig};
