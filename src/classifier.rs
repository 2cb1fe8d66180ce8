//! Affiliation classification and email extraction.
//!
//! The shipped classifier is a keyword denylist: an affiliation that mentions
//! any academic keyword (case-insensitive substring) is academic, everything
//! else is treated as industry. Other strategies plug in through
//! [`AffiliationClassifier`].

/// Keywords from the first iteration of the heuristic.
pub const MINIMAL_KEYWORDS: &[&str] =
    &["university", "college", "institute", "school", "hospital", "lab"];

/// Keywords used by default.
pub const EXTENDED_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "hospital",
    "lab",
    "dept",
    "center",
    "centre",
    "faculty",
    "public health",
    "government",
    "nhs",
    ".edu",
    ".ac.",
    ".gov",
    ".org",
    "medical center",
    "foundation",
];

/// Result of classifying one affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffiliationKind {
    Academic,
    NonAcademic,
}

/// Which built-in keyword list to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordSet {
    /// Six-keyword list, kept to reproduce legacy reports
    Minimal,
    #[default]
    Extended,
}

impl KeywordSet {
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Minimal => MINIMAL_KEYWORDS,
            Self::Extended => EXTENDED_KEYWORDS,
        }
    }
}

/// Strategy deciding whether an affiliation is academic.
pub trait AffiliationClassifier: Send + Sync {
    fn classify(&self, affiliation: &str) -> AffiliationKind;
}

/// Denylist classifier over lower-cased keywords.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    pub fn new(set: KeywordSet) -> Self {
        Self::with_keywords(set.keywords().iter().copied())
    }

    /// Build a classifier from a custom keyword list. Empty keywords are ignored.
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(KeywordSet::default())
    }
}

impl AffiliationClassifier for KeywordClassifier {
    fn classify(&self, affiliation: &str) -> AffiliationKind {
        let text = affiliation.to_lowercase();
        if self.keywords.iter().any(|k| text.contains(k.as_str())) {
            AffiliationKind::Academic
        } else {
            AffiliationKind::NonAcademic
        }
    }
}

/// First whitespace-separated token containing `@`, with trailing `;`/`,` removed.
pub fn extract_email(affiliation: &str) -> Option<String> {
    affiliation
        .split_whitespace()
        .find(|token| token.contains('@'))
        .map(|token| token.trim_end_matches([';', ',']))
        .filter(|email| !email.is_empty())
        .map(str::to_string)
}
