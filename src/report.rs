//! Report assembly.
//!
//! Runs each parsed article through an [`AffiliationClassifier`] and builds
//! the six-column [`ClassifiedRecord`] rows written by [`crate::output`].

use crate::article::Article;
use crate::classifier::{extract_email, AffiliationClassifier, AffiliationKind};
use serde::{Deserialize, Serialize};

/// Placeholder for articles without a `PubDate/Year`
pub const UNKNOWN_YEAR: &str = "Unknown";

/// Separator for multi-valued columns
pub const LIST_SEPARATOR: &str = "; ";

/// CSV column order
pub const REPORT_COLUMNS: &[&str] = &[
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// One output row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl ClassifiedRecord {
    pub fn has_non_academic_authors(&self) -> bool {
        !self.non_academic_authors.is_empty()
    }
}

/// Which classified records are kept in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InclusionPolicy {
    /// Keep only records with at least one non-academic author
    #[default]
    NonAcademicOnly,
    /// Keep every fetched record (legacy output)
    All,
}

impl InclusionPolicy {
    pub fn includes(self, record: &ClassifiedRecord) -> bool {
        match self {
            Self::NonAcademicOnly => record.has_non_academic_authors(),
            Self::All => true,
        }
    }
}

/// Classify the authors of one article.
///
/// Authors without an affiliation are skipped. The email is the first one
/// found in any affiliation, academic or not, in author order.
pub fn classify_article(article: &Article, classifier: &dyn AffiliationClassifier) -> ClassifiedRecord {
    let mut names: Vec<String> = Vec::new();
    let mut companies: Vec<&str> = Vec::new();
    let mut email: Option<String> = None;

    for author in &article.authors {
        let Some(affiliation) = author.affiliation.as_deref() else {
            continue;
        };

        if classifier.classify(affiliation) == AffiliationKind::NonAcademic {
            let full_name = author.full_name();
            if !full_name.is_empty() {
                names.push(full_name);
            }
            companies.push(affiliation);
        }

        if email.is_none() {
            email = extract_email(affiliation);
        }
    }

    ClassifiedRecord {
        pubmed_id: article.pmid.clone(),
        title: article.title.clone().unwrap_or_default(),
        publication_date: article
            .year
            .clone()
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
        non_academic_authors: names.join(LIST_SEPARATOR),
        company_affiliations: dedup_preserving_order(&companies).join(LIST_SEPARATOR),
        corresponding_email: email.unwrap_or_default(),
    }
}

/// Classify every article and apply the inclusion policy, keeping fetch order.
pub fn build_report(
    articles: &[Article],
    classifier: &dyn AffiliationClassifier,
    policy: InclusionPolicy,
) -> Vec<ClassifiedRecord> {
    articles
        .iter()
        .map(|article| classify_article(article, classifier))
        .filter(|record| policy.includes(record))
        .collect()
}

fn dedup_preserving_order<'a>(items: &[&'a str]) -> Vec<&'a str> {
    let mut unique: Vec<&str> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(item) {
            unique.push(*item);
        }
    }
    unique
}
