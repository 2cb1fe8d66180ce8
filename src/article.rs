//! PubMed efetch XML parsing.
//!
//! Turns a `PubmedArticleSet` document into [`Article`] records. Only the
//! handful of elements the report needs are read; everything else is ignored.

use crate::error::Result;
use roxmltree::{Document, Node, ParsingOptions};

/// One author entry from an article's author list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub fore_name: Option<String>,
    pub last_name: Option<String>,
    /// First `AffiliationInfo/Affiliation` text
    pub affiliation: Option<String>,
}

impl Author {
    /// Forename and last name joined by a space, skipping missing parts.
    pub fn full_name(&self) -> String {
        [self.fore_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Bibliographic record parsed from a `PubmedArticle` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub pmid: String,
    pub title: Option<String>,
    /// `PubDate/Year`
    pub year: Option<String>,
    pub authors: Vec<Author>,
}

/// Parse an efetch response body.
///
/// # Errors
///
/// Returns `FetcherError::Xml` if the document is not well-formed.
pub fn parse_articles(xml: &str) -> Result<Vec<Article>> {
    // efetch responses start with a DOCTYPE declaration
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(xml, options)?;

    let articles = document
        .descendants()
        .filter(|n| n.has_tag_name("PubmedArticle"))
        .map(parse_article)
        .collect();

    Ok(articles)
}

fn parse_article(node: Node<'_, '_>) -> Article {
    let pmid = find_descendant(node, "PMID")
        .and_then(direct_text)
        .unwrap_or_default();

    let title = find_descendant(node, "ArticleTitle").and_then(full_text);

    let year = node
        .descendants()
        .filter(|n| n.has_tag_name("PubDate"))
        .find_map(|pub_date| find_child(pub_date, "Year").and_then(direct_text));

    let authors = node
        .descendants()
        .filter(|n| n.has_tag_name("Author"))
        .map(parse_author)
        .collect();

    Article {
        pmid,
        title,
        year,
        authors,
    }
}

fn parse_author(node: Node<'_, '_>) -> Author {
    let affiliation = node
        .descendants()
        .filter(|n| n.has_tag_name("AffiliationInfo"))
        .find_map(|info| find_child(info, "Affiliation").and_then(full_text));

    Author {
        fore_name: find_child(node, "ForeName").and_then(direct_text),
        last_name: find_child(node, "LastName").and_then(direct_text),
        affiliation,
    }
}

fn find_descendant<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants().skip(1).find(|n| n.has_tag_name(name))
}

fn find_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

/// Text directly inside the element, trimmed; `None` when blank.
fn direct_text(node: Node<'_, '_>) -> Option<String> {
    non_blank(node.text().unwrap_or_default())
}

/// All descendant text, for elements that carry inline markup (`<i>`, `<sup>`).
fn full_text(node: Node<'_, '_>) -> Option<String> {
    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    non_blank(&text)
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetcherError;

    const SAMPLE: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2025//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_250101.dtd">
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
      <PMID Version="1">38000001</PMID>
      <Article PubModel="Print">
        <Journal>
          <JournalIssue CitedMedium="Internet">
            <PubDate><Year>2023</Year><Month>Nov</Month></PubDate>
          </JournalIssue>
        </Journal>
        <ArticleTitle>Targeting <i>KRAS</i> in lung cancer.</ArticleTitle>
        <AuthorList CompleteYN="Y">
          <Author ValidYN="Y">
            <LastName>Doe</LastName>
            <ForeName>Jane</ForeName>
            <Initials>J</Initials>
            <AffiliationInfo>
              <Affiliation>Acme Corp, jane@acme.com</Affiliation>
            </AffiliationInfo>
          </Author>
          <Author ValidYN="Y">
            <CollectiveName>KRAS Study Group</CollectiveName>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation>
      <PMID Version="1">38000002</PMID>
      <Article>
        <Journal>
          <JournalIssue>
            <PubDate><MedlineDate>2022 Winter</MedlineDate></PubDate>
          </JournalIssue>
        </Journal>
        <ArticleTitle>Second paper</ArticleTitle>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

    #[test]
    fn test_parse_sample() {
        let articles = parse_articles(SAMPLE).expect("sample parses");
        assert_eq!(articles.len(), 2);

        let first = &articles[0];
        assert_eq!(first.pmid, "38000001");
        assert_eq!(first.title.as_deref(), Some("Targeting KRAS in lung cancer."));
        assert_eq!(first.year.as_deref(), Some("2023"));
        assert_eq!(first.authors.len(), 2);
        assert_eq!(first.authors[0].full_name(), "Jane Doe");
        assert_eq!(
            first.authors[0].affiliation.as_deref(),
            Some("Acme Corp, jane@acme.com")
        );
        assert_eq!(first.authors[1], Author::default());

        let second = &articles[1];
        assert_eq!(second.pmid, "38000002");
        assert_eq!(second.year, None);
        assert!(second.authors.is_empty());
    }

    #[test]
    fn test_full_name_partial() {
        let author = Author {
            last_name: Some("Curie".to_string()),
            ..Author::default()
        };
        assert_eq!(author.full_name(), "Curie");
        assert_eq!(Author::default().full_name(), "");
    }

    #[test]
    fn test_empty_set() {
        let articles = parse_articles("<PubmedArticleSet></PubmedArticleSet>").expect("parses");
        assert!(articles.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let result = parse_articles("<PubmedArticleSet><PubmedArticle>");
        assert!(matches!(result, Err(FetcherError::Xml(_))));
    }
}
