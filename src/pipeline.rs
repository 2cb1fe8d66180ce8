//! Search → fetch → classify → output.

use crate::article::parse_articles;
use crate::classifier::{AffiliationClassifier, KeywordClassifier};
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::pubmed::PubmedClient;
use crate::report::{build_report, InclusionPolicy};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Message printed when the search returns no identifiers
pub const NO_PAPERS_MESSAGE: &str = "No papers found.";

/// Message printed when no fetched record passes the inclusion policy
pub const NO_MATCHES_MESSAGE: &str = "No matching records found.";

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// esearch returned no identifiers; efetch was not called
    NoPapers,
    /// Articles were fetched but none qualified
    NoMatches { fetched: usize },
    /// Report written to a CSV file
    Written { path: PathBuf, rows: usize },
    /// Report printed to the console writer
    Printed { rows: usize },
}

pub struct Pipeline {
    client: PubmedClient,
    classifier: Box<dyn AffiliationClassifier>,
    inclusion: InclusionPolicy,
}

impl Pipeline {
    /// Build a pipeline using the keyword classifier selected in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let classifier = KeywordClassifier::new(config.keyword_set);
        debug!(keywords = ?classifier.keywords(), "Using keyword classifier");
        Self::with_classifier(config, Box::new(classifier))
    }

    /// Build a pipeline around a custom classification strategy.
    pub fn with_classifier(
        config: &Config,
        classifier: Box<dyn AffiliationClassifier>,
    ) -> Result<Self> {
        Ok(Self {
            client: PubmedClient::new(config)?,
            classifier,
            inclusion: config.inclusion,
        })
    }

    /// Run every stage for `query`.
    ///
    /// User-facing messages and console rows go to `console`. When
    /// `output_file` is set, rows go to that CSV file instead.
    pub async fn run<W: Write>(
        &self,
        query: &str,
        output_file: Option<&Path>,
        console: &mut W,
    ) -> Result<PipelineOutcome> {
        let ids = self.client.search(query).await?;
        if ids.is_empty() {
            writeln!(console, "{}", NO_PAPERS_MESSAGE)?;
            return Ok(PipelineOutcome::NoPapers);
        }

        let xml = self.client.fetch(&ids).await?;
        let articles = parse_articles(&xml)?;
        debug!(ids = ids.len(), articles = articles.len(), "Parsed efetch response");

        let records = build_report(&articles, self.classifier.as_ref(), self.inclusion);
        debug!(
            fetched = articles.len(),
            kept = records.len(),
            "Classified articles"
        );

        if records.is_empty() {
            writeln!(console, "{}", NO_MATCHES_MESSAGE)?;
            return Ok(PipelineOutcome::NoMatches {
                fetched: articles.len(),
            });
        }

        match output_file {
            Some(path) => {
                output::save_csv(path, &records)?;
                Ok(PipelineOutcome::Written {
                    path: path.to_path_buf(),
                    rows: records.len(),
                })
            }
            None => {
                output::print_records(console, &records)?;
                Ok(PipelineOutcome::Printed {
                    rows: records.len(),
                })
            }
        }
    }
}
