//! # pubmed-fetcher
//!
//! Searches PubMed and reports papers with at least one author from a
//! non-academic (industry) organisation.
//!
//! ## Modules
//!
//! - [`pubmed`] - esearch/efetch client for NCBI E-utilities
//! - [`article`] - efetch XML parsing
//! - [`classifier`] - academic keyword heuristic and email extraction
//! - [`report`] - per-article row assembly and inclusion policy
//! - [`output`] - CSV and console output
//! - [`pipeline`] - runs the stages in order
//! - [`config`] - endpoints and policy toggles
//! - [`error`] - Custom error types
//! - [`logging`] - stderr tracing subscriber
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pubmed_fetcher::{config::Config, pipeline::Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pipeline = Pipeline::new(&Config::default())?;
//!     let outcome = pipeline.run("crispr cancer", None, &mut std::io::stdout()).await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod article;
pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod pubmed;
pub mod report;

pub use error::{FetcherError, Result};
