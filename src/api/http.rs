//! reqwest client for the reviews backend.
//!
//! Thin HTTP wrapper for `/api/reviews/suggest` and `/api/reviews/analyze`.
//! Status handling and body decoding live in pure functions for testability.

use super::types::{AnalysisResult, AnalyzeRequest, ErrorBody, Suggestion};
use super::{ApiError, ReviewsApi};
use crate::config::{ClientConfig, ClientTimeouts};

const SUGGEST_PATH: &str = "/api/reviews/suggest";
const ANALYZE_PATH: &str = "/api/reviews/analyze";

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpReviewsApi {
    http: reqwest::Client,
    base_url: String,
    timeouts: ClientTimeouts,
}

impl HttpReviewsApi {
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend cannot initialize.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.timeouts.connect)
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), timeouts: config.timeouts })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait::async_trait]
impl ReviewsApi for HttpReviewsApi {
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        let request = self
            .http
            .get(self.url(SUGGEST_PATH))
            .query(&[("q", query)])
            .timeout(self.timeouts.suggest);
        let (status, text) = send(request).await?;
        check_status(status, &text)?;
        parse_suggestions(&text)
    }

    async fn analyze(&self, app_name: &str) -> Result<AnalysisResult, ApiError> {
        let request = self
            .http
            .post(self.url(ANALYZE_PATH))
            .json(&AnalyzeRequest { app_name })
            .timeout(self.timeouts.analyze);
        let (status, text) = send(request).await?;
        check_status(status, &text)?;
        parse_analysis(&text)
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<(u16, String), ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    Ok((status, text))
}

// =============================================================================
// PARSING
// =============================================================================

fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message);
    Err(ApiError::Status { status, detail })
}

fn parse_suggestions(json: &str) -> Result<Vec<Suggestion>, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))
}

fn parse_analysis(json: &str) -> Result<AnalysisResult, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
