//! Quote ID harvesting from the personalised page.
//!
//! The page hides the quote IDs in the text of ordinary elements. Every element
//! named in [`TextTag`] is read, its text split on whitespace, and the purely
//! numeric tokens collected into a sorted, deduplicated, bounded set.
use std::collections::BTreeSet;

use log::{debug, info};
use quote_common::{QuoteError, Result};
use scraper::{ElementRef, Html, Selector};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

use crate::http::HttpClient;
use crate::pipeline::Endpoints;

/// Upper bound on the number of IDs handed to the fetcher.
pub const MAX_QUOTE_IDS: usize = 50;

/// Elements whose text may carry quote IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TextTag {
    P,
    Span,
    Div,
    Li,
    Td,
}

impl TextTag {
    /// Group selector matching every whitelisted tag, e.g. `p, span, div, li, td`.
    pub fn selector() -> Result<Selector> {
        let group = Self::iter()
            .map(|tag| tag.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(", ");
        Selector::parse(&group).map_err(|e| QuoteError::Html(e.to_string()))
    }
}

/// Fetch the page for `student_id` and extract its quote IDs.
///
/// A transport failure or non-2xx status is an `Err`; a page without any numbers is
/// `Ok` with an empty list.
pub async fn fetch_quote_ids(
    client: &HttpClient,
    endpoints: &Endpoints,
    student_id: &str,
) -> Result<Vec<u64>> {
    let html = client
        .get_text(&endpoints.page_url, &[("id", student_id)])
        .await?;
    debug!("Fetched page for {} ({} bytes)", student_id, html.len());
    let ids = extract_quote_ids(&html)?;
    info!("Harvested {} quote IDs", ids.len());
    Ok(ids)
}

/// Collect the numeric tokens found in whitelisted elements of `html`.
///
/// Sorted ascending, without duplicates, at most [`MAX_QUOTE_IDS`] long.
pub fn extract_quote_ids(html: &str) -> Result<Vec<u64>> {
    let document = Html::parse_document(html);
    let selector = TextTag::selector()?;
    let mut ids = BTreeSet::new();

    for element in document.select(&selector) {
        let text = stripped_text(element);
        ids.extend(text.split_whitespace().filter_map(parse_id));
    }
    Ok(ids.into_iter().take(MAX_QUOTE_IDS).collect())
}

/// Elements whose text is code or inert markup rather than page content.
const NON_CONTENT: [&str; 3] = ["script", "style", "template"];

/// Descendant text nodes, each trimmed, concatenated without a separator.
///
/// Text anywhere below a [`NON_CONTENT`] element is left out.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter(|node| {
            !node
                .ancestors()
                .filter_map(|a| a.value().as_element())
                .any(|a| NON_CONTENT.contains(&a.name()))
        })
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .collect()
}

fn parse_id(token: &str) -> Option<u64> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn selector_covers_every_tag() {
        let html = Html::parse_document(
            "<table><tr><td>a</td></tr></table><p>b</p><span>c</span><div>d</div><ul><li>e</li></ul><em>f</em>",
        );
        let names: Vec<_> = html
            .select(&TextTag::selector().unwrap())
            .map(|e| e.value().name().to_owned())
            .collect();
        assert_eq!(names, ["td", "p", "span", "div", "li"]);
    }

    #[test]
    fn keeps_only_numeric_tokens_inside_whitelisted_tags() {
        let html = r#"
            <html><head><title>42</title></head><body>
              <p>Quote 17 and 3</p>
              <span>x5 5x 8</span>
              <h1>99</h1>
              <ul><li> 12 </li><li>-4 +6 7.5</li></ul>
              <table><tr><td>30</td></tr></table>
            </body></html>"#;
        assert_eq!(extract_quote_ids(html).unwrap(), vec![3, 8, 12, 17, 30]);
    }

    #[test]
    fn output_is_sorted_and_deduplicated() {
        let html = "<p>9 1 9</p><span>1 4</span><li>4</li>";
        assert_eq!(extract_quote_ids(html).unwrap(), vec![1, 4, 9]);
    }

    #[test]
    fn nested_elements_glue_child_text() {
        // The div sees "9 1 9" + "1 4" as "9 1 91 4"; its children are read on their own too.
        let html = "<div><p>9 1 9</p><span>1 4</span></div>";
        assert_eq!(extract_quote_ids(html).unwrap(), vec![1, 4, 9, 91]);
    }

    #[test]
    fn caps_at_fifty_smallest() {
        let body: String = (1..=80).rev().map(|n| format!("<p>{n}</p>")).collect();
        let ids = extract_quote_ids(&body).unwrap();
        assert_eq!(ids.len(), MAX_QUOTE_IDS);
        assert_eq!(ids, (1..=50).collect::<Vec<u64>>());
    }

    #[test]
    fn text_pieces_are_joined_without_separator() {
        // "12 " and "34" are trimmed and concatenated, yielding a single token.
        let html = "<p>12 <b>34</b></p>";
        assert_eq!(extract_quote_ids(html).unwrap(), vec![1234]);
    }

    #[test]
    fn script_and_style_text_is_ignored() {
        let html = "<div><script>var n = 7;</script><p>3</p><style>p { z-index: 9 }</style></div>";
        assert_eq!(extract_quote_ids(html).unwrap(), vec![3]);
    }

    #[test]
    fn template_text_is_ignored() {
        // The span inside the template is still matched, but its text does not count.
        let html = "<div>5<template><span>11</span></template></div>";
        assert_eq!(extract_quote_ids(html).unwrap(), vec![5]);
    }

    #[test]
    fn oversized_numbers_are_skipped() {
        let html = "<p>99999999999999999999999 5</p>";
        assert_eq!(extract_quote_ids(html).unwrap(), vec![5]);
    }

    #[test]
    fn page_without_numbers_is_empty() {
        assert!(extract_quote_ids("<p>nothing here</p>").unwrap().is_empty());
        assert!(extract_quote_ids("").unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_passes_student_id_as_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/generate"))
            .and(query_param("id", "p24099"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<li>2</li><li>1</li>"))
            .expect(1)
            .mount(&server)
            .await;

        let endpoints = Endpoints::with_base(&server.uri());
        let client = HttpClient::new(None).unwrap();
        let ids = fetch_quote_ids(&client, &endpoints, "p24099").await.unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn fetch_failure_is_an_error_not_an_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let endpoints = Endpoints::with_base(&server.uri());
        let client = HttpClient::new(None).unwrap();
        let result = fetch_quote_ids(&client, &endpoints, "p24099").await;
        assert!(matches!(result, Err(QuoteError::Http(_))));
    }
}
