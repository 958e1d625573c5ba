use crate::error::{Error, Result};
use log::warn;
use models::{catalog::CatalogEntry, outline::OutlineData};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upstream course-outline catalog endpoint
pub const BASE_URL: &str = "http://www.sfu.ca/bin/wcm/course-outlines";

/// HTTP client for the course-outline catalog.
///
/// Every level of the catalog is addressed through the same endpoint; the
/// query string is the raw slash-separated ancestor path (`?2024/fall/cmpt`).
/// Timed-out requests are retried a bounded number of times before the
/// failure is reported.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl CatalogClient {
    /// Per-request timeout
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Total attempts per request; only timeouts are retried
    const MAX_ATTEMPTS: u32 = 3;

    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Points the client at a different catalog root, e.g. a local fixture server
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        CatalogClient {
            http: Client::new(),
            base_url: base_url.into(),
            timeout: Self::REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches the listing of catalog entries below an ancestor path.
    ///
    /// # Arguments
    /// * `path` - Slash-separated ancestor natural keys; empty for the root
    ///   year listing
    ///
    /// # Returns
    /// The entries at that level; an empty vector when the endpoint reports
    /// that no entries exist (HTTP 404)
    pub async fn fetch_listing(&self, path: &str) -> Result<Vec<CatalogEntry>> {
        Ok(self.get_json(path).await?.unwrap_or_default())
    }

    /// Fetches the course outline at a fully-resolved five-segment path.
    ///
    /// # Returns
    /// `None` when the section has no published outline
    pub async fn fetch_outline(&self, path: &str) -> Result<Option<OutlineData>> {
        self.get_json(path).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.url_for(path);
        let response = self.get_with_retry(&url).await?;

        // The endpoint answers 404 when nothing exists below the path
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status(),
                path: path.to_owned(),
            });
        }

        Ok(Some(response.json().await?))
    }

    async fn get_with_retry(&self, url: &str) -> Result<reqwest::Response> {
        let mut attempt = 1;

        loop {
            match self.http.get(url).timeout(self.timeout).send().await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_timeout() && attempt < Self::MAX_ATTEMPTS => {
                    warn!(
                        "request timed out (attempt {attempt}/{}): {url}",
                        Self::MAX_ATTEMPTS
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn url_for(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}?{}", self.base_url, path)
        }
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_root_listing() {
        let client = CatalogClient::new();
        assert_eq!(client.url_for(""), BASE_URL);
    }

    #[test]
    fn test_url_for_ancestor_path() {
        let client = CatalogClient::with_base_url("http://127.0.0.1:9999/outlines");
        assert_eq!(
            client.url_for("2024/fall/cmpt"),
            "http://127.0.0.1:9999/outlines?2024/fall/cmpt"
        );
    }
}
