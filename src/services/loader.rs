//! Initial-results loader
//!
//! Runs the single search issued when the page loads. The fallible form
//! (`try_fetch_initial_videos`) keeps the failure reason; the page-facing
//! forms (`fetch_initial_videos`, `load`) log it and degrade to an empty list.

use std::sync::Arc;

use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{InitialPageData, SearchEnvelope, SearchRequest, VideoRecord},
    services::fetch::HttpFetch,
};

#[derive(Clone)]
pub struct InitialVideosLoader {
    fetcher: Arc<dyn HttpFetch>,
    api_base: String,
    request: SearchRequest,
}

impl InitialVideosLoader {
    pub fn new(fetcher: Arc<dyn HttpFetch>, api_base: impl Into<String>) -> Self {
        Self {
            fetcher,
            api_base: api_base.into(),
            request: SearchRequest::initial(),
        }
    }

    /// Fetches the first page of results, reporting why it failed if it did.
    ///
    /// A body without a `videos` field is a successful empty result.
    #[instrument(skip(self), fields(query = %self.request.query, page = self.request.page))]
    pub async fn try_fetch_initial_videos(&self) -> AppResult<Vec<VideoRecord>> {
        let url = self.request.url(&self.api_base)?;

        let response = self.fetcher.get(url.as_str()).await?;
        if !response.is_success() {
            return Err(AppError::UpstreamStatus(response.status));
        }

        let envelope: SearchEnvelope = serde_json::from_str(&response.body)?;
        let videos = envelope.into_videos();

        tracing::info!(results = videos.len(), "Initial videos fetched");

        Ok(videos)
    }

    /// Same as `try_fetch_initial_videos`, but any failure is logged and
    /// replaced by an empty list.
    pub async fn fetch_initial_videos(&self) -> Vec<VideoRecord> {
        match self.try_fetch_initial_videos().await {
            Ok(videos) => videos,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch initial videos");
                Vec::new()
            }
        }
    }

    /// Page-load hook
    pub async fn load(&self) -> InitialPageData {
        InitialPageData {
            initial_videos: self.fetch_initial_videos().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::API_BASE;
    use crate::services::fetch::{FetchResponse, MockHttpFetch};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_test::{assert_err, assert_ok};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    const EXPECTED_URL: &str = "https://unyil-api-proxy.scienc-co.workers.dev/api/v2/video/search/?query=indo&per_page=10&page=1&thumbsize=big&order=top-weekly&gay=0&lq=0&format=json";

    const ONE_VIDEO: &str = r#"{"videos":[{"id":"1","title":"A","embed":"e","length_min":"5","rate":"4.2","views":"100","keywords":"k"}]}"#;

    fn create_test_loader(mock: MockHttpFetch) -> InitialVideosLoader {
        InitialVideosLoader::new(Arc::new(mock), API_BASE)
    }

    fn mock_responding(status: u16, body: &'static str) -> MockHttpFetch {
        let mut mock = MockHttpFetch::new();
        mock.expect_get()
            .times(1)
            .returning(move |_| Ok(FetchResponse::new(status, body)));
        mock
    }

    /// A client-side `reqwest` failure standing in for an unreachable host
    fn transport_error() -> AppError {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        AppError::HttpClient(err)
    }

    /// Counts ERROR-level events
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[tokio::test]
    async fn test_requests_fixed_url() {
        let mut mock = MockHttpFetch::new();
        mock.expect_get()
            .withf(|url| url.to_string() == EXPECTED_URL)
            .times(1)
            .returning(|_| Ok(FetchResponse::new(200, ONE_VIDEO)));

        let loader = create_test_loader(mock);
        let videos = loader.fetch_initial_videos().await;
        assert_eq!(videos.len(), 1);
    }

    #[tokio::test]
    async fn test_single_record_returned_verbatim() {
        let loader = create_test_loader(mock_responding(200, ONE_VIDEO));

        let videos = assert_ok!(loader.try_fetch_initial_videos().await);
        assert_eq!(videos.len(), 1);

        let video = &videos[0];
        assert_eq!(video.id(), Some("1"));
        assert_eq!(video.title(), Some("A"));
        assert_eq!(video.embed(), Some("e"));
        assert_eq!(video.length_min(), Some("5"));
        assert_eq!(video.rate(), Some("4.2"));
        assert_eq!(video.views(), Some("100"));
        assert_eq!(video.keywords(), Some("k"));
    }

    #[tokio::test]
    async fn test_numeric_fields_returned_unchanged() {
        let body = r#"{"videos":[{"id":"1","title":"A","embed":"e","length_min":5,"rate":4.2,"views":100,"keywords":"k"}]}"#;
        let loader = create_test_loader(mock_responding(200, body));

        let videos = assert_ok!(loader.try_fetch_initial_videos().await);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].field("views"), Some(&json!(100)));
        assert_eq!(videos[0].field("rate"), Some(&json!(4.2)));

        let expected: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(videos[0].clone().into_value(), expected["videos"][0]);
    }

    #[tokio::test]
    async fn test_missing_fields_returned_unchanged() {
        let body = r#"{"videos":[{"id":"1","title":"A","embed":"e"},{"id":"2"}]}"#;
        let loader = create_test_loader(mock_responding(200, body));

        let videos = loader.fetch_initial_videos().await;
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].keywords(), None);
        assert_eq!(videos[1].id(), Some("2"));
        assert_eq!(videos[1].clone().into_value(), json!({"id": "2"}));
    }

    #[tokio::test]
    async fn test_order_preserved() {
        let body = r#"{"videos":[
            {"id":"c","title":"C","embed":"","length_min":"1","rate":"1","views":"1","keywords":""},
            {"id":"a","title":"A","embed":"","length_min":"2","rate":"2","views":"2","keywords":""},
            {"id":"b","title":"B","embed":"","length_min":"3","rate":"3","views":"3","keywords":""}
        ]}"#;
        let loader = create_test_loader(mock_responding(200, body));

        let ids: Vec<String> = loader
            .fetch_initial_videos()
            .await
            .into_iter()
            .map(|v| v.id().unwrap_or_default().to_string())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_error_status_degrades_to_empty() {
        for status in [400, 404, 429, 500, 503] {
            let loader = create_test_loader(mock_responding(status, ONE_VIDEO));
            assert!(loader.fetch_initial_videos().await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_error_status_reported_by_try_fetch() {
        let loader = create_test_loader(mock_responding(502, ""));
        let err = assert_err!(loader.try_fetch_initial_videos().await);
        assert!(matches!(err, AppError::UpstreamStatus(502)));
    }

    #[tokio::test]
    async fn test_invalid_json_degrades_to_empty() {
        let loader = create_test_loader(mock_responding(200, "<html>oops</html>"));
        let err = assert_err!(loader.try_fetch_initial_videos().await);
        assert!(matches!(err, AppError::Parse(_)));

        let loader = create_test_loader(mock_responding(200, "<html>oops</html>"));
        assert!(loader.fetch_initial_videos().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_videos_field_is_empty_success() {
        let loader = create_test_loader(mock_responding(200, r#"{"count":0,"videos":null}"#));
        let videos = assert_ok!(loader.try_fetch_initial_videos().await);
        assert!(videos.is_empty());

        let loader = create_test_loader(mock_responding(200, r#"{"total_count":0}"#));
        let videos = assert_ok!(loader.try_fetch_initial_videos().await);
        assert!(videos.is_empty());
    }

    #[test]
    fn test_network_error_logs_once() {
        let mut mock = MockHttpFetch::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Err(transport_error()));
        let loader = create_test_loader(mock);

        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));

        let videos = tracing::subscriber::with_default(subscriber, || {
            tokio_test::block_on(loader.fetch_initial_videos())
        });

        assert!(videos.is_empty());
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_success_logs_no_error() {
        let loader = create_test_loader(mock_responding(200, ONE_VIDEO));

        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));

        let videos = tracing::subscriber::with_default(subscriber, || {
            tokio_test::block_on(loader.fetch_initial_videos())
        });

        assert_eq!(videos.len(), 1);
        assert_eq!(errors.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_invalid_base_makes_no_request_and_logs_once() {
        let mut mock = MockHttpFetch::new();
        mock.expect_get().never();
        let loader = InitialVideosLoader::new(Arc::new(mock), "::nope::");

        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));

        let page = tracing::subscriber::with_default(subscriber, || {
            tokio_test::block_on(loader.load())
        });

        assert!(page.initial_videos.is_empty());
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_wraps_videos() {
        let loader = create_test_loader(mock_responding(200, ONE_VIDEO));
        let page = loader.load().await;
        assert_eq!(page.initial_videos.len(), 1);
        assert_eq!(page.initial_videos[0].id(), Some("1"));
    }
}
