//! Reviews backend access.
//!
//! DESIGN
//! ======
//! Controllers depend on the [`ReviewsApi`] trait only. [`http::HttpReviewsApi`]
//! is the production implementation; tests substitute scripted fakes so they
//! can decide when, and in which order, replies arrive.

pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use http::HttpReviewsApi;
use types::GENERIC_ERROR_MESSAGE;
pub use types::{AnalysisResult, AppInfo, ReviewSample, Sentiment, SentimentSummary, Suggestion};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by reviews backend calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A configuration value could not be used.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect failure, timeout, reset).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// Text for the analysis error banner: the backend's own message when it
    /// sent one, otherwise [`GENERIC_ERROR_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }

    /// Whether repeating the same request could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// The two backend endpoints the client talks to. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ReviewsApi: Send + Sync {
    /// `GET /api/reviews/suggest?q=<query>`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, ApiError>;

    /// `POST /api/reviews/analyze` with `{ "appName": app_name }`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body. Non-2xx errors carry the backend's message.
    async fn analyze(&self, app_name: &str) -> Result<AnalysisResult, ApiError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
