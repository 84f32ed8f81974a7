//! Read-only snapshot of the request a documentation document is written for.
//!
//! Title and description resolvers and the mappers only ever see this
//! snapshot; nothing here touches the transport that produced it.

use http::header::{HeaderMap, HeaderName, ACCEPT_LANGUAGE};
use url::Url;

/// Request data needed to resolve and render a documentation document.
#[derive(Debug, Clone, Default)]
pub struct RequestInfo {
    headers: HeaderMap,
    server_url: Option<Url>,
    application_url: Option<Url>,
}

impl RequestInfo {
    #[must_use]
    pub fn new(headers: HeaderMap) -> Self {
        RequestInfo {
            headers,
            server_url: None,
            application_url: None,
        }
    }

    #[must_use]
    pub fn with_server_url(mut self, url: Url) -> Self {
        self.server_url = Some(url);
        self
    }

    #[must_use]
    pub fn with_application_url(mut self, url: Url) -> Self {
        self.application_url = Some(url);
        self
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of header `name`, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    #[must_use]
    pub fn server_url(&self) -> Option<&Url> {
        self.server_url.as_ref()
    }

    #[must_use]
    pub fn application_url(&self) -> Option<&Url> {
        self.application_url.as_ref()
    }

    /// Language tags from `Accept-Language`, most preferred first.
    ///
    /// Tags with `q=0` are dropped; tags with equal weight keep header order.
    /// Tags are lower-cased, `*` is kept as-is.
    #[must_use]
    pub fn languages(&self) -> Vec<String> {
        let mut weighted: Vec<(String, f32)> = self
            .headers
            .get_all(ACCEPT_LANGUAGE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .filter_map(parse_language_range)
            .filter(|(_, weight)| *weight > 0.0)
            .collect();

        // sort_by is stable, ties keep header order
        weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        weighted.into_iter().map(|(tag, _)| tag).collect()
    }
}

fn parse_language_range(range: &str) -> Option<(String, f32)> {
    let mut parts = range.split(';');
    let tag = parts.next()?.trim();
    if tag.is_empty() {
        return None;
    }

    let weight = parts
        .filter_map(|param| param.trim().strip_prefix("q="))
        .find_map(|q| q.trim().parse::<f32>().ok())
        .unwrap_or(1.0);

    Some((tag.to_ascii_lowercase(), weight))
}
