//! Color scheme lookup.
//!
//! The personalised page carries a `<div id="colors" data-bg=".." data-color="..">`
//! element. Missing pieces fall back to black on white.
use log::{info, warn};
use quote_common::{QuoteError, Result};
use scraper::{Html, Selector};

use crate::http::HttpClient;
use crate::pipeline::Endpoints;

const DEFAULT_BACKGROUND: &str = "000000";
const DEFAULT_FOREGROUND: &str = "FFFFFF";

/// Background/foreground pair as bare hex strings (no `#`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPair {
    /// Image background, e.g. `000000`.
    pub background: String,
    /// Text color, e.g. `FFFFFF`.
    pub foreground: String,
}

impl Default for ColorPair {
    fn default() -> Self {
        ColorPair {
            background: String::from(DEFAULT_BACKGROUND),
            foreground: String::from(DEFAULT_FOREGROUND),
        }
    }
}

/// Read the color pair from `div#colors`.
///
/// `None` when the element is absent. An element lacking one attribute keeps the
/// default for that attribute only.
pub fn parse_color_scheme(html: &str) -> Result<Option<ColorPair>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("div#colors").map_err(|e| QuoteError::Html(e.to_string()))?;

    Ok(document.select(&selector).next().map(|div| {
        let attr = |name: &str, default: &str| {
            div.value()
                .attr(name)
                .unwrap_or(default)
                .replace('#', "")
        };
        ColorPair {
            background: attr("data-bg", DEFAULT_BACKGROUND),
            foreground: attr("data-color", DEFAULT_FOREGROUND),
        }
    }))
}

/// Fetch the page for `student_id` and look up its color pair.
pub async fn fetch_color_scheme(
    client: &HttpClient,
    endpoints: &Endpoints,
    student_id: &str,
) -> Result<Option<ColorPair>> {
    let html = client
        .get_text(&endpoints.page_url, &[("id", student_id)])
        .await?;
    parse_color_scheme(&html)
}

/// Like [`fetch_color_scheme`] but never fails: every problem degrades to the defaults.
pub async fn resolve_color_scheme(
    client: &HttpClient,
    endpoints: &Endpoints,
    student_id: &str,
) -> ColorPair {
    match fetch_color_scheme(client, endpoints, student_id).await {
        Ok(Some(colors)) => {
            info!("Color scheme: bg={} fg={}", colors.background, colors.foreground);
            colors
        }
        Ok(None) => {
            warn!("No color scheme on the page, using defaults");
            ColorPair::default()
        }
        Err(e) => {
            warn!("Failed to fetch color scheme, using defaults: {}", e);
            ColorPair::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn reads_and_strips_both_attributes() {
        let html = r##"<body><div id="colors" data-bg="#1a2B3c" data-color="#FFEE00"></div></body>"##;
        let colors = parse_color_scheme(html).unwrap().unwrap();
        assert_eq!(colors.background, "1a2B3c");
        assert_eq!(colors.foreground, "FFEE00");
    }

    #[test]
    fn values_without_hash_are_kept() {
        let html = r#"<div id="colors" data-bg="123456" data-color="abcdef"></div>"#;
        let colors = parse_color_scheme(html).unwrap().unwrap();
        assert_eq!(colors, ColorPair {
            background: "123456".into(),
            foreground: "abcdef".into(),
        });
    }

    #[test]
    fn missing_attribute_falls_back_individually() {
        let html = r##"<div id="colors" data-bg="#336699"></div>"##;
        let colors = parse_color_scheme(html).unwrap().unwrap();
        assert_eq!(colors.background, "336699");
        assert_eq!(colors.foreground, "FFFFFF");
    }

    #[test]
    fn page_without_element_is_none() {
        let html = r##"<div id="palette" data-bg="#111111"></div><span id="colors"></span>"##;
        assert_eq!(parse_color_scheme(html).unwrap(), None);
    }

    #[tokio::test]
    async fn resolve_defaults_when_element_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>1 2 3</p>"))
            .mount(&server)
            .await;

        let endpoints = Endpoints::with_base(&server.uri());
        let client = HttpClient::new(None).unwrap();
        let colors = resolve_color_scheme(&client, &endpoints, "42").await;
        assert_eq!(colors.background, "000000");
        assert_eq!(colors.foreground, "FFFFFF");
    }

    #[tokio::test]
    async fn fetch_distinguishes_failure_from_absence() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let endpoints = Endpoints::with_base(&server.uri());
        let client = HttpClient::new(None).unwrap();
        assert!(fetch_color_scheme(&client, &endpoints, "42").await.is_err());
        assert_eq!(
            resolve_color_scheme(&client, &endpoints, "42").await,
            ColorPair::default()
        );
    }
}
