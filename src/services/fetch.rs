//! Outbound HTTP capability used by the loader
//!
//! The loader never builds its own client. It is handed an `HttpFetch`, so the
//! page-data service runs on `reqwest` while tests substitute canned responses.

use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::error::AppResult;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests.
///
/// Only transport failures are errors. A response with any status, including
/// 4xx and 5xx, comes back as `Ok` and the caller decides what it means.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get(&self, url: &str) -> AppResult<FetchResponse>;
}

#[derive(Clone)]
pub struct ReqwestFetcher {
    http_client: HttpClient,
}

impl ReqwestFetcher {
    /// Builds a fetcher, optionally bounding every request by `timeout`
    pub fn new(timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str) -> AppResult<FetchResponse> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(
            url = %url,
            status = status,
            bytes = body.len(),
            "Upstream response received"
        );

        Ok(FetchResponse { status, body })
    }
}
