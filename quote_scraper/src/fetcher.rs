//! Quote retrieval from the public quotes API.
use log::{debug, info, warn};
use quote_common::{Quote, QuoteError, Result};

use crate::http::HttpClient;
use crate::pipeline::Endpoints;

/// Fetch a single quote by id.
///
/// Fails on transport errors, non-2xx statuses and bodies that are not an object
/// carrying `id`, `quote` and `author`.
pub async fn fetch_quote(client: &HttpClient, endpoints: &Endpoints, id: u64) -> Result<Quote> {
    client.get_json(&endpoints.quote_url(id)).await
}

/// Fetch every id in turn, skipping the ones that fail, and sort the result by id.
///
/// An empty result means nothing could be retrieved.
pub async fn fetch_quotes(client: &HttpClient, endpoints: &Endpoints, ids: &[u64]) -> Vec<Quote> {
    let mut quotes = Vec::with_capacity(ids.len());

    for &id in ids {
        match fetch_quote(client, endpoints, id).await {
            Ok(quote) => quotes.push(quote),
            Err(QuoteError::SerdeJson(e)) => debug!("Dropping malformed quote {}: {}", id, e),
            Err(e) => warn!("Failed to fetch quote {}: {}", id, e),
        }
    }

    quotes.sort_by_key(|q| q.id);
    info!("Fetched {} of {} quotes", quotes.len(), ids.len());
    quotes
}
