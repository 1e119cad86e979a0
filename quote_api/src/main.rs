//! Quotes API — serves the quotes of the JSON store over HTTP, filtered by author.
//!
//! Usage example (CLI):
//! ```bash
//! quote_api --quotes-file quotes.json --bind 127.0.0.1:8000
//! curl 'http://127.0.0.1:8000/quotes?author=Plato'
//! ```
#![warn(missing_docs)]
mod args;
mod routes;

use clap::Parser;
use log::info;
use quote_common::{QuoteError, Result};

use crate::args::Args;
use crate::routes::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let app = router(AppState::new(args.quotes_file.clone()));
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(
        "Serving {} on http://{}",
        args.quotes_file.display(),
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Ctrl+C received. Shutting down server...");
    }
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
