//! Thin async HTTP client wrapping reqwest.
//!
//! Every call is a single attempt: no retries, no backoff. A non-2xx status is
//! turned into an error so callers only ever see successful bodies.

use std::time::Duration;

use quote_common::Result;
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("quote_scraper/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by every pipeline stage.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Build a client. `timeout` is applied per request when set; by default there is none.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET `url` with the given query pairs and return the body as text.
    pub async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?)
    }

    /// GET `url` and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET `url` and return the raw body.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.bytes().await?.to_vec())
    }
}
