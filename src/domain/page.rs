// SPDX-License-Identifier: MPL-2.0
//! One page of the album listing and the request that produced it.

use super::album::Album;
use serde::{Deserialize, Serialize};

/// Parameters of a single page fetch.
///
/// Pagination is purely sequential: the API has no total count and no
/// continuation token, only a 1-based page number and a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Creates a request; both values are clamped to at least 1.
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: page.max(1),
            size: size.max(1),
        }
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }
}

/// Response body of the listing endpoint.
///
/// An empty `errors` list means `result` is authoritative for the page. An
/// empty `result` together with empty `errors` marks the end of the data.
/// `Result` is required: a body without it is not a listing document and
/// must not be mistaken for the end of the data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    #[serde(rename = "Result")]
    pub result: Vec<Album>,

    #[serde(rename = "Errors", default)]
    pub errors: Vec<String>,
}

/// What a page means for pagination, once errors have been taken into account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// The server reported one or more application-level errors.
    Failed(Vec<String>),
    /// A successful page with at least one album.
    Albums(Vec<Album>),
    /// A successful page with no albums: the list is exhausted.
    Exhausted,
}

impl ListPage {
    /// Builds a successful page.
    #[must_use]
    pub fn albums(result: Vec<Album>) -> Self {
        Self {
            result,
            errors: Vec::new(),
        }
    }

    /// Builds a page carrying application-level errors.
    #[must_use]
    pub fn failed<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            result: Vec::new(),
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// Classifies the page. Errors win over any albums that came with them.
    #[must_use]
    pub fn into_content(self) -> PageContent {
        if !self.errors.is_empty() {
            PageContent::Failed(self.errors)
        } else if self.result.is_empty() {
            PageContent::Exhausted
        } else {
            PageContent::Albums(self.result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_clamps_zero_values() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page(), 1);
        assert_eq!(request.size(), 1);
    }

    #[test]
    fn page_parses_result_and_errors() {
        let json = r#"{ "Result": [{ "AlbumName": "A" }], "Errors": [] }"#;
        let page: ListPage = serde_json::from_str(json).expect("page should parse");
        assert_eq!(page.result.len(), 1);
        assert!(page.errors.is_empty());
    }

    #[test]
    fn missing_errors_default_to_empty() {
        let page: ListPage = serde_json::from_str(r#"{ "Result": [] }"#).expect("page should parse");
        assert_eq!(page.into_content(), PageContent::Exhausted);
    }

    #[test]
    fn body_without_result_is_rejected() {
        assert!(serde_json::from_str::<ListPage>("{}").is_err());
        assert!(serde_json::from_str::<ListPage>(r#"{ "result": [], "errors": [] }"#).is_err());
    }

    #[test]
    fn errors_take_precedence_over_albums() {
        let page = ListPage {
            result: vec![Album::new("A", "")],
            errors: vec!["server error".to_string()],
        };
        assert_eq!(
            page.into_content(),
            PageContent::Failed(vec!["server error".to_string()])
        );
    }

    #[test]
    fn non_empty_page_is_albums() {
        let page = ListPage::albums(vec![Album::new("A", "")]);
        assert!(matches!(page.into_content(), PageContent::Albums(albums) if albums.len() == 1));
    }
}
