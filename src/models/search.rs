use reqwest::Url;

use crate::error::{AppError, AppResult};

/// Default base URL of the search API proxy
pub const API_BASE: &str = "https://unyil-api-proxy.scienc-co.workers.dev/api/v2";

const INITIAL_QUERY: &str = "indo";
const INITIAL_PAGE: u32 = 1;
const PER_PAGE: u32 = 10;
const THUMB_SIZE: &str = "big";
const ORDER: &str = "top-weekly";
const RESPONSE_FORMAT: &str = "json";

/// Parameters of a `/video/search/` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub per_page: u32,
    pub page: u32,
    pub thumbsize: String,
    pub order: String,
    /// Content filter flag, 0 excludes the category
    pub gay: u8,
    /// Low-quality filter flag
    pub lq: u8,
    pub format: String,
}

impl SearchRequest {
    /// The fixed search issued on page load
    pub fn initial() -> Self {
        Self {
            query: INITIAL_QUERY.to_string(),
            per_page: PER_PAGE,
            page: INITIAL_PAGE,
            thumbsize: THUMB_SIZE.to_string(),
            order: ORDER.to_string(),
            gay: 0,
            lq: 0,
            format: RESPONSE_FORMAT.to_string(),
        }
    }

    /// Builds the request URL against `api_base`.
    ///
    /// Parameter order is fixed. The query term is form-encoded.
    pub fn url(&self, api_base: &str) -> AppResult<Url> {
        let endpoint = format!("{}/video/search/", api_base.trim_end_matches('/'));
        let mut url = Url::parse(&endpoint).map_err(|e| {
            AppError::InvalidInput(format!("Invalid API base URL {}: {}", api_base, e))
        })?;

        url.query_pairs_mut()
            .append_pair("query", &self.query)
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("page", &self.page.to_string())
            .append_pair("thumbsize", &self.thumbsize)
            .append_pair("order", &self.order)
            .append_pair("gay", &self.gay.to_string())
            .append_pair("lq", &self.lq.to_string())
            .append_pair("format", &self.format);

        Ok(url)
    }
}
