//! pubmed-fetcher - PubMed papers with non-academic authors
//!
//! ## Usage
//!
//! ```bash
//! pubmed-fetcher "cancer immunotherapy" --file results.csv --debug
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pubmed_fetcher::classifier::KeywordSet;
use pubmed_fetcher::config::Config;
use pubmed_fetcher::logging;
use pubmed_fetcher::pipeline::Pipeline;
use pubmed_fetcher::report::InclusionPolicy;
use std::path::PathBuf;
use tracing::debug;

// ============================================================================
// CLI Definition
// ============================================================================

/// Fetch PubMed papers with non-academic authors.
#[derive(Parser)]
#[command(name = "pubmed-fetcher")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Search query for PubMed
    query: String,

    /// CSV file to write output (prints to the console when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Academic keyword list used to detect non-academic affiliations
    #[arg(long, value_enum, default_value_t = KeywordArg::Extended)]
    keywords: KeywordArg,

    /// Keep every fetched paper, even without non-academic authors
    #[arg(long)]
    include_all: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum KeywordArg {
    Minimal,
    Extended,
}

impl From<KeywordArg> for KeywordSet {
    fn from(arg: KeywordArg) -> Self {
        match arg {
            KeywordArg::Minimal => KeywordSet::Minimal,
            KeywordArg::Extended => KeywordSet::Extended,
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.debug);

    let mut config = Config::from_env().context("Invalid PubMed configuration")?;
    config.keyword_set = cli.keywords.into();
    if cli.include_all {
        config.inclusion = InclusionPolicy::All;
    }
    debug!(config = ?config, "Loaded configuration");

    let pipeline = Pipeline::new(&config).context("Failed to initialise pipeline")?;
    let mut stdout = std::io::stdout();

    let outcome = pipeline
        .run(&cli.query, cli.file.as_deref(), &mut stdout)
        .await
        .context("PubMed pipeline failed")?;

    debug!(outcome = ?outcome, "Pipeline complete");
    Ok(())
}
