//! HTTP client for the TMDB search API.
//!
//! Wraps a `reqwest` client configured with bearer authentication and
//! conservative timeouts. Error mapping follows the application taxonomy: a
//! missing token fails before any network activity, catalog rejections carry
//! the remote `status_message` when present, and transport or decoding
//! failures collapse into a stable generic message.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;

use crate::catalog::CatalogClient;
use crate::domain::{CinescopeError, Result, SearchPage};
use crate::Config;

/// Default API base used when `CINESCOPE_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

/// Message surfaced when no API token is configured.
pub const MISSING_TOKEN_MESSAGE: &str =
    "TMDB token is not set. Export CINESCOPE_TMDB_TOKEN to enable search.";

/// Fallback message for rejections without a usable `status_message`.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies.";

/// Message for transport failures and malformed responses.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Error envelope the catalog returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    status_message: Option<String>,
}

/// Movie catalog client backed by the TMDB REST API.
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    has_token: bool,
}

impl TmdbClient {
    /// Builds a client from the application configuration.
    ///
    /// A missing token is not an error here; searches fail with a
    /// configuration message instead, so the application can start and show
    /// the problem in context.
    ///
    /// # Errors
    ///
    /// Returns an error when the token contains bytes that cannot form an
    /// `Authorization` header or when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = &config.api_token {
            let mut value = header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|err| CinescopeError::Config(format!("invalid API token: {err}")))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                CinescopeError::Unknown(format!("failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            has_token: config.api_token.is_some(),
        })
    }
}

#[async_trait]
impl CatalogClient for TmdbClient {
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage> {
        if !self.has_token {
            return Err(CinescopeError::Config(MISSING_TOKEN_MESSAGE.to_string()));
        }

        let url = format!("{}/search/movie", self.base_url);
        let page_param = page.to_string();
        tracing::debug!(query = %query, page, "requesting search page");

        let response = self
            .http
            .get(&url)
            .query(&[("query", query), ("page", page_param.as_str())])
            .send()
            .await
            .map_err(|err| {
                tracing::debug!(error = %err, "search request failed in transport");
                CinescopeError::Unknown(UNEXPECTED_ERROR_MESSAGE.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.status_message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string());
            tracing::debug!(status = %status, message = %message, "catalog rejected search");
            return Err(CinescopeError::Request(message));
        }

        response.json::<SearchPage>().await.map_err(|err| {
            tracing::debug!(error = %err, "search response failed to deserialize");
            CinescopeError::Unknown(UNEXPECTED_ERROR_MESSAGE.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use httpmock::prelude::*;
    use serde_json::json;

    fn test_config(server: &MockServer, token: Option<&str>) -> Config {
        Config {
            api_token: token.map(str::to_string),
            api_base: server.base_url(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn search_deserializes_success_page() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/movie")
                .query_param("query", "batman")
                .query_param("page", "2")
                .header("authorization", "Bearer test-token");
            then.status(200).json_body(json!({
                "page": 2,
                "results": [
                    {"id": 414906, "title": "The Batman", "vote_average": 7.7},
                    {"id": 268, "title": "Batman", "vote_average": 7.2, "release_date": "1989-06-21"}
                ],
                "total_pages": 7,
                "total_results": 130
            }));
        });

        let client = TmdbClient::new(&test_config(&server, Some("test-token"))).unwrap();
        let page = client.search("batman", 2).await.unwrap();

        mock.assert();
        assert_eq!(page.page, 2);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].release_year(), Some(1989));
        assert_eq!(page.total_results, 130);
    }

    #[tokio::test]
    async fn rejection_carries_remote_status_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/search/movie");
            then.status(401).json_body(json!({
                "status_code": 7,
                "status_message": "Invalid API key: You must be granted a valid key."
            }));
        });

        let client = TmdbClient::new(&test_config(&server, Some("bad-token"))).unwrap();
        let error = client.search("batman", 1).await.unwrap_err();

        match error {
            CinescopeError::Request(message) => {
                assert_eq!(message, "Invalid API key: You must be granted a valid key.");
            }
            other => panic!("expected Request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejection_without_message_uses_fallback() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/search/movie");
            then.status(502).body("upstream unavailable");
        });

        let client = TmdbClient::new(&test_config(&server, Some("token"))).unwrap();
        let error = client.search("batman", 1).await.unwrap_err();

        match error {
            CinescopeError::Request(message) => assert_eq!(message, FETCH_FAILED_MESSAGE),
            other => panic!("expected Request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_token_fails_before_any_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200);
        });

        let client = TmdbClient::new(&test_config(&server, None)).unwrap();
        let error = client.search("batman", 1).await.unwrap_err();

        mock.assert_hits(0);
        match error {
            CinescopeError::Config(message) => assert_eq!(message, MISSING_TOKEN_MESSAGE),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_success_body_maps_to_unknown() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/search/movie");
            then.status(200).body("<html>definitely not json</html>");
        });

        let client = TmdbClient::new(&test_config(&server, Some("token"))).unwrap();
        let error = client.search("batman", 1).await.unwrap_err();

        match error {
            CinescopeError::Unknown(message) => assert_eq!(message, UNEXPECTED_ERROR_MESSAGE),
            other => panic!("expected Unknown error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failure_maps_to_unknown() {
        let config = Config {
            api_token: Some("token".to_string()),
            api_base: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };

        let client = TmdbClient::new(&config).unwrap();
        let error = client.search("batman", 1).await.unwrap_err();

        assert!(matches!(error, CinescopeError::Unknown(_)));
    }
}
