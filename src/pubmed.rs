//! NCBI E-utilities client.
//!
//! Two plain GET calls: `esearch` turns a query into PMIDs, `efetch` returns
//! the article XML for those PMIDs. No retries or rate limiting are applied.

use crate::config::{eutils, Config};
use crate::error::{FetcherError, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

/// Client for the esearch and efetch endpoints
pub struct PubmedClient {
    client: Client,
    esearch_url: String,
    efetch_url: String,
    max_results: usize,
}

impl PubmedClient {
    /// Create a new PubmedClient
    ///
    /// # Errors
    ///
    /// Returns `FetcherError::Config` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| FetcherError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            esearch_url: config.esearch_url.clone(),
            efetch_url: config.efetch_url.clone(),
            max_results: config.max_results,
        })
    }

    /// Search PubMed and return matching PMIDs in service order.
    ///
    /// A body without `esearchresult.idlist` yields an empty list.
    pub async fn search(&self, query: &str) -> Result<Vec<String>> {
        debug!(query = query, "Searching PubMed");

        let retmax = self.max_results.to_string();
        let body = self
            .get(
                &self.esearch_url,
                &[
                    ("db", eutils::DATABASE),
                    ("term", query),
                    ("retmode", "json"),
                    ("retmax", retmax.as_str()),
                ],
            )
            .await?;

        let ids = parse_search_response(&body);
        debug!(count = ids.len(), "Found papers");
        Ok(ids)
    }

    /// Fetch article XML for the given PMIDs in a single request.
    pub async fn fetch(&self, ids: &[String]) -> Result<String> {
        let joined = ids.join(",");
        debug!(count = ids.len(), "Fetching article details");

        self.get(
            &self.efetch_url,
            &[
                ("db", eutils::DATABASE),
                ("id", joined.as_str()),
                ("retmode", "xml"),
            ],
        )
        .await
    }

    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<String> {
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), url = url, "E-utilities error");
            return Err(FetcherError::Api {
                code: status.as_u16(),
                message: format!("E-utilities error: {} - {}", status, error_text.trim()),
            });
        }

        response.text().await.map_err(FetcherError::Network)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    esearchresult: Option<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    idlist: Vec<serde_json::Value>,
}

/// Extract `esearchresult.idlist` from an esearch JSON body.
///
/// Malformed bodies and missing keys degrade to an empty list.
pub fn parse_search_response(body: &str) -> Vec<String> {
    let response: SearchResponse = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Unreadable esearch response, treating as no results");
            return Vec::new();
        }
    };

    let Some(result) = response.esearchresult else {
        warn!("esearch response has no esearchresult, treating as no results");
        return Vec::new();
    };

    result
        .idlist
        .into_iter()
        .filter_map(|id| match id {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"{"header":{"type":"esearch","version":"0.3"},
            "esearchresult":{"count":"2","retmax":"2","retstart":"0",
            "idlist":["39012345","39012346"]}}"#;
        assert_eq!(parse_search_response(body), ["39012345", "39012346"]);
    }

    #[test]
    fn test_parse_search_response_soft_fails() {
        assert!(parse_search_response("{}").is_empty());
        assert!(parse_search_response(r#"{"esearchresult":{}}"#).is_empty());
        assert!(parse_search_response("<html>Bad Gateway</html>").is_empty());
        assert!(parse_search_response(r#"{"esearchresult":{"ERROR":"Empty term"}}"#).is_empty());
    }

    #[test]
    fn test_parse_search_response_skips_non_strings() {
        let body = r#"{"esearchresult":{"idlist":["1",2,null,"3"]}}"#;
        assert_eq!(parse_search_response(body), ["1", "3"]);
    }

    #[test]
    fn test_client_builds_without_timeout() {
        assert!(PubmedClient::new(&Config::default()).is_ok());
    }
}
