//! Command-line arguments for the quotes API.
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use quote_common::net::{API_HOST, API_PORT, DEFAULT_QUOTES_FILE};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON store the quotes are served from. Re-read on every request.
    #[clap(long, default_value = DEFAULT_QUOTES_FILE)]
    pub quotes_file: PathBuf,

    /// Address the HTTP server binds to.
    #[clap(long, default_value_t = SocketAddr::from((API_HOST, API_PORT)))]
    pub bind: SocketAddr,
}
