//! Runtime configuration: E-utilities endpoints and classification policies.

use crate::classifier::KeywordSet;
use crate::error::{FetcherError, Result};
use crate::report::InclusionPolicy;
use std::time::Duration;
use url::Url;

/// NCBI E-utilities constants.
pub mod eutils {
    /// Base URL for the E-utilities API.
    pub const BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Search endpoint, relative to the base URL.
    pub const ESEARCH: &str = "esearch.fcgi";

    /// Detail endpoint, relative to the base URL.
    pub const EFETCH: &str = "efetch.fcgi";

    /// Database queried by both endpoints.
    pub const DATABASE: &str = "pubmed";

    /// Result cap for a single search.
    pub const MAX_RESULTS: usize = 20;

    /// Environment variable overriding `BASE_URL`.
    pub const BASE_URL_ENV: &str = "PUBMED_EUTILS_URL";
}

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full esearch URL.
    pub esearch_url: String,

    /// Full efetch URL.
    pub efetch_url: String,

    /// `retmax` sent to esearch.
    pub max_results: usize,

    /// Per-request timeout. `None` leaves the transport unbounded.
    pub request_timeout: Option<Duration>,

    /// Academic keyword list used by the default classifier.
    pub keyword_set: KeywordSet,

    /// Which classified records reach the report.
    pub inclusion: InclusionPolicy,
}

impl Config {
    /// Build a configuration pointing at a custom E-utilities base URL.
    ///
    /// # Errors
    ///
    /// Returns `FetcherError::Config` if `base_url` is not an absolute URL.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| FetcherError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(FetcherError::Config(format!(
                "Base URL '{}' cannot hold endpoint paths",
                base_url
            )));
        }

        let base = base_url.trim_end_matches('/');
        Ok(Self {
            esearch_url: format!("{}/{}", base, eutils::ESEARCH),
            efetch_url: format!("{}/{}", base, eutils::EFETCH),
            max_results: eutils::MAX_RESULTS,
            request_timeout: None,
            keyword_set: KeywordSet::default(),
            inclusion: InclusionPolicy::default(),
        })
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `PUBMED_EUTILS_URL`; falls back to the public NCBI endpoint.
    pub fn from_env() -> Result<Self> {
        match std::env::var(eutils::BASE_URL_ENV) {
            Ok(base) if !base.trim().is_empty() => Self::with_base_url(base.trim()),
            _ => Ok(Self::default()),
        }
    }

    /// Configuration for mock servers, with a short timeout.
    pub fn for_testing(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            esearch_url: format!("{}/{}", base, eutils::ESEARCH),
            efetch_url: format!("{}/{}", base, eutils::EFETCH),
            max_results: eutils::MAX_RESULTS,
            request_timeout: Some(Duration::from_secs(5)),
            keyword_set: KeywordSet::default(),
            inclusion: InclusionPolicy::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            esearch_url: format!("{}/{}", eutils::BASE_URL, eutils::ESEARCH),
            efetch_url: format!("{}/{}", eutils::BASE_URL, eutils::EFETCH),
            max_results: eutils::MAX_RESULTS,
            request_timeout: None,
            keyword_set: KeywordSet::default(),
            inclusion: InclusionPolicy::default(),
        }
    }
}
