// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the album listing endpoint.
//!
//! [`HttpAlbumSource`] implements [`AlbumSource`] on top of a shared
//! `reqwest::Client`. The same client also downloads cover and gallery image
//! bytes through [`HttpAlbumSource::image_fetcher`].
//!
//! Wire contract: `GET {base_url}?size={size}&page={page}` answering
//! `{ "Result": [...], "Errors": [...] }`.

use crate::application::port::AlbumSource;
use crate::domain::{ListPage, PageRequest};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Upper bound on a single request, connection included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Album source backed by the remote listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpAlbumSource {
    client: Client,
    base_url: Url,
}

impl HttpAlbumSource {
    /// Builds a source for `base_url` with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL does not parse and
    /// [`Error::Http`] if the client cannot be built.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| Error::Config(format!("invalid API URL '{base_url}': {err}")))?;

        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the listing endpoint for `request`.
    ///
    /// Existing query parameters on the base URL are kept.
    #[must_use]
    pub fn page_url(&self, request: PageRequest) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("size", &request.size().to_string())
            .append_pair("page", &request.page().to_string());
        url
    }

    /// Returns a cheap handle that downloads image bytes with this source's
    /// client.
    #[must_use]
    pub fn image_fetcher(&self) -> ImageFetcher {
        ImageFetcher {
            client: self.client.clone(),
        }
    }
}

impl AlbumSource for HttpAlbumSource {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, Result<ListPage>> {
        let client = self.client.clone();
        let url = self.page_url(request);

        Box::pin(async move {
            debug!(%url, "GET album page");
            let body = client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            decode_page(&body)
        })
    }
}

/// Decodes a listing response body.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the body is not a valid listing document.
pub fn decode_page(body: &str) -> Result<ListPage> {
    Ok(serde_json::from_str(body)?)
}

/// Downloads raw image bytes.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    /// Fetches the bytes at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failures and non-2xx statuses.
    pub async fn fetch(self, url: String) -> Result<Vec<u8>> {
        debug!(%url, "GET image");
        let bytes = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> HttpAlbumSource {
        HttpAlbumSource::new(base, "album_gallery-tests").expect("valid base URL")
    }

    #[test]
    fn page_url_appends_size_then_page() {
        let source = source("https://api.example.com/albums");
        let url = source.page_url(PageRequest::new(3, 10));
        assert_eq!(url.as_str(), "https://api.example.com/albums?size=10&page=3");
    }

    #[test]
    fn page_url_keeps_existing_query() {
        let source = source("https://api.example.com/albums?key=abc");
        let url = source.page_url(PageRequest::new(1, 2));
        assert_eq!(
            url.as_str(),
            "https://api.example.com/albums?key=abc&size=2&page=1"
        );
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let err = HttpAlbumSource::new("not a url", "ua").expect_err("should fail");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn decodes_listing_document() {
        let body = r#"{
            "Result": [
                {
                    "AlbumName": "Holidays",
                    "AlbumCover": "https://img.example/holidays.jpg",
                    "Images": [
                        { "ContentURL": "https://img.example/1.jpg" },
                        { "ContentURL": "https://img.example/2.jpg" }
                    ]
                }
            ],
            "Errors": []
        }"#;

        let page = decode_page(body).expect("valid document");

        assert!(page.errors.is_empty());
        assert_eq!(page.result.len(), 1);
        let album = &page.result[0];
        assert_eq!(album.name, "Holidays");
        assert_eq!(album.cover_image_url, "https://img.example/holidays.jpg");
        assert_eq!(album.images[1].content_url, "https://img.example/2.jpg");
    }

    #[test]
    fn body_without_result_is_a_decode_error() {
        for body in ["{}", r#"{"result": [{"AlbumName": "A"}], "errors": []}"#] {
            let err = decode_page(body).expect_err("should fail");
            assert!(matches!(err, Error::Decode(_)), "{body}");
        }
    }

    #[test]
    fn missing_errors_default_to_empty() {
        let page = decode_page(r#"{"Result": []}"#).expect("valid document");
        assert_eq!(page, ListPage::default());
    }

    #[test]
    fn decodes_server_errors() {
        let page = decode_page(r#"{"Result": [], "Errors": ["server error"]}"#)
            .expect("valid document");
        assert_eq!(page.errors, ["server error"]);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_page("<html>502 Bad Gateway</html>").expect_err("should fail");
        assert!(matches!(err, Error::Decode(_)));
    }
}
