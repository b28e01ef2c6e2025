//! Search panel state
//!
//! Owns the query, the last results, and the loading/error flags. The panel
//! never performs I/O itself: `submit` hands back the request to run and
//! `finish` applies its outcome, so the iced app and the CLI drive it the same
//! way.

use crate::backend::types::{SearchRequest, SearchResult};
use crate::error::SearchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanel {
    query: String,
    results: Vec<SearchResult>,
    loading: bool,
    error: String,
    backend_available: bool,
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            loading: false,
            error: String::new(),
            backend_available: true,
        }
    }
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Empty when there is no error to show
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn backend_available(&self) -> bool {
        self.backend_available
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_backend_available(&mut self, available: bool) {
        self.backend_available = available;
    }

    /// Start a search for the current query.
    ///
    /// Returns the request to send, or `None` when nothing should go out:
    /// a request is already in flight, or the backend was marked unavailable
    /// (in which case the error is set instead).
    pub fn submit(&mut self) -> Option<SearchRequest> {
        if self.loading {
            tracing::debug!("Ignoring submit while a search is in flight");
            return None;
        }

        if !self.backend_available {
            self.error = SearchError::Unavailable.to_string();
            return None;
        }

        self.loading = true;
        self.error.clear();
        Some(SearchRequest::new(self.query.clone()))
    }

    /// Apply the outcome of the request started by [`submit`](Self::submit).
    ///
    /// Results are replaced wholesale; failures clear them. Loading always ends.
    pub fn finish(&mut self, outcome: Result<Vec<SearchResult>, SearchError>) {
        match outcome {
            Ok(results) => {
                self.results = results;
                self.error.clear();
            }
            Err(err) => {
                self.results.clear();
                self.error = err.to_string();
            }
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::api::SearchClient;
    use crate::error::SEARCH_FAILED;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn run_search(panel: &mut SearchPanel, client: &SearchClient) {
        let request = panel.submit().expect("panel should accept the submit");
        assert!(panel.is_loading());
        let outcome = client.search(&request).await;
        panel.finish(outcome);
    }

    async fn backend_responding(template: ResponseTemplate) -> (MockServer, SearchClient) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/search"))
            .respond_with(template)
            .mount(&server)
            .await;
        let client = SearchClient::new(&format!("{}/api", server.uri()));
        (server, client)
    }

    fn sample_result() -> SearchResult {
        SearchResult {
            url: "a".to_string(),
            description: "b".to_string(),
            what_can_it_do: "c".to_string(),
            why_is_it_useful: "d".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_renders_single_result() {
        let (_server, client) = backend_responding(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "url": "a", "description": "b", "what_can_it_do": "c", "why_is_it_useful": "d" }]
        })))
        .await;

        let mut panel = SearchPanel::new();
        panel.set_query("best servers for web search".to_string());
        run_search(&mut panel, &client).await;

        assert_eq!(panel.results(), &[sample_result()]);
        assert!(!panel.is_loading());
        assert_eq!(panel.error(), "");
    }

    #[tokio::test]
    async fn test_server_error_message_from_body() {
        let (_server, client) =
            backend_responding(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" }))).await;

        let mut panel = SearchPanel::new();
        panel.finish(Ok(vec![sample_result()]));
        panel.set_query("x".to_string());
        run_search(&mut panel, &client).await;

        assert_eq!(panel.error(), "boom");
        assert!(panel.results().is_empty());
        assert!(!panel.is_loading());
    }

    #[tokio::test]
    async fn test_server_error_without_message_uses_fallback() {
        let (_server, client) =
            backend_responding(ResponseTemplate::new(500).set_body_json(json!({}))).await;

        let mut panel = SearchPanel::new();
        panel.set_query("x".to_string());
        run_search(&mut panel, &client).await;

        assert_eq!(panel.error(), SEARCH_FAILED);
        assert!(!panel.is_loading());
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_error_message() {
        // Bind then drop a listener so the port is closed
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let client = SearchClient::new(&format!("http://{}/api", addr));

        let mut panel = SearchPanel::new();
        panel.set_query("x".to_string());
        let request = panel.submit().unwrap();
        let outcome = client.search(&request).await;
        let expected = outcome.as_ref().unwrap_err().to_string();
        panel.finish(outcome);

        assert!(!expected.is_empty());
        assert_eq!(panel.error(), expected);
        assert!(!panel.is_loading());
        assert!(panel.results().is_empty());
    }

    #[test]
    fn test_double_submit_while_loading_is_ignored() {
        let mut panel = SearchPanel::new();
        panel.set_query("first".to_string());

        let first = panel.submit();
        assert_eq!(first.map(|r| r.query), Some("first".to_string()));
        assert!(!panel.can_submit());

        panel.set_query("second".to_string());
        let before = panel.clone();
        assert!(panel.submit().is_none());
        assert_eq!(panel, before);

        panel.finish(Ok(Vec::new()));
        assert!(panel.can_submit());
        assert_eq!(panel.submit().map(|r| r.query), Some("second".to_string()));
    }

    #[test]
    fn test_submit_clears_previous_error_and_keeps_results_until_done() {
        let mut panel = SearchPanel::new();
        panel.finish(Ok(vec![sample_result()]));
        panel.finish(Err(SearchError::Transport("offline".to_string())));
        assert_eq!(panel.error(), "offline");

        panel.finish(Ok(vec![sample_result()]));
        panel.submit();
        assert_eq!(panel.error(), "");
        assert_eq!(panel.results().len(), 1);
    }

    #[test]
    fn test_success_replaces_results_wholesale() {
        let mut panel = SearchPanel::new();
        panel.finish(Ok(vec![sample_result(), sample_result()]));
        panel.submit();
        panel.finish(Ok(vec![SearchResult {
            url: "z".to_string(),
            ..Default::default()
        }]));
        assert_eq!(panel.results().len(), 1);
        assert_eq!(panel.results()[0].url, "z");
    }

    #[test]
    fn test_unavailable_backend_blocks_request() {
        let mut panel = SearchPanel::new();
        panel.set_backend_available(false);
        panel.set_query("x".to_string());

        assert!(panel.submit().is_none());
        assert!(!panel.is_loading());
        assert_eq!(panel.error(), SearchError::Unavailable.to_string());
    }

    #[test]
    fn test_request_uses_fixed_top_k() {
        let mut panel = SearchPanel::new();
        panel.set_query(String::new());
        let request = panel.submit().unwrap();
        assert_eq!(request.top_k, 3);
        assert_eq!(request.query, "");
    }
}
