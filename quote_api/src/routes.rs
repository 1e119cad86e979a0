//! HTTP routes of the quotes API.
//!
//! `GET /quotes?author=NAME` answers with the text of every stored quote whose author
//! matches `NAME` case-insensitively, in store order.
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{debug, error};
use quote_common::{Quote, store};
use serde::Deserialize;
use serde_json::json;

/// State shared by the handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store path injected at startup.
    pub quotes_file: Arc<PathBuf>,
}

impl AppState {
    /// State serving quotes from `quotes_file`.
    pub fn new(quotes_file: PathBuf) -> Self {
        Self {
            quotes_file: Arc::new(quotes_file),
        }
    }
}

/// Query string of `GET /quotes`.
#[derive(Debug, Deserialize)]
pub struct AuthorQuery {
    /// Author name, compared case-insensitively.
    pub author: String,
}

/// Build the router with every endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/quotes", get(quotes_by_author))
        .with_state(state)
}

/// Quote texts attributed to `author`.
pub fn select_by_author(quotes: &[Quote], author: &str) -> Vec<String> {
    quotes
        .iter()
        .filter(|q| q.is_by(author))
        .map(|q| q.quote.clone())
        .collect()
}

async fn quotes_by_author(
    Query(params): Query<AuthorQuery>,
    State(state): State<AppState>,
) -> Response {
    match store::load_quotes(&state.quotes_file) {
        Ok(quotes) => {
            let selected = select_by_author(&quotes, &params.author);
            debug!("{} quotes by {:?}", selected.len(), params.author);
            Json(selected).into_response()
        }
        Err(e) => {
            error!("Failed to load {}: {}", state.quotes_file.display(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
