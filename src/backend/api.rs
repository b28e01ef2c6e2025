//! HTTP client for the search backend

use reqwest::{Client, Response};

use super::types::{ErrorBody, HealthResponse, SearchRequest, SearchResponse, SearchResult};
use crate::error::{SearchError, SEARCH_FAILED};

/// Client for the external search API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /health`. Any 2xx counts as healthy; the reported status
    /// text is only logged.
    pub async fn ensure_healthy(&self) -> Result<(), SearchError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let status = response.status();
        let body = response.bytes().await?;
        match serde_json::from_slice::<HealthResponse>(&body) {
            Ok(HealthResponse { status: Some(reported) }) => {
                tracing::debug!("Health check {}: {}", status, reported);
            }
            _ => tracing::debug!("Health check {} without a status field", status),
        }
        Ok(())
    }

    /// Run one search and return the backend's results unchanged
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!("POST {} query={:?} top_k={}", url, request.query, request.top_k);

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;
        tracing::debug!(
            "Backend answered {:?} with {} results",
            parsed.query.as_deref().unwrap_or(&request.query),
            parsed.results.len()
        );
        Ok(parsed.results)
    }
}

/// Turn a non-success response into a [`SearchError::Status`].
///
/// The message comes from the body's `error` field when there is one.
async fn error_from_response(response: Response) -> SearchError {
    let status = response.status().as_u16();
    let message = match response.bytes().await {
        Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| SEARCH_FAILED.to_string()),
        Err(e) => {
            tracing::debug!("Could not read error body: {}", e);
            SEARCH_FAILED.to_string()
        }
    };
    SearchError::Status { status, message }
}
