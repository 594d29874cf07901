//! Wire types for the reviews backend.
//!
//! Field names follow the backend's camelCase JSON. Values are immutable once
//! decoded; controllers hand them to the view store as-is.

use serde::{Deserialize, Deserializer, Serialize};

/// Number of review samples the presentation layer shows per analysis.
pub const DISPLAYED_SAMPLE_COUNT: usize = 5;

/// Fallback shown when a failed request carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to fetch data";

// =============================================================================
// SUGGESTIONS
// =============================================================================

/// One autocomplete entry returned by `GET /api/reviews/suggest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub title: String,
    pub app_id: String,
}

// =============================================================================
// ANALYSIS
// =============================================================================

/// Sentiment label attached to a single review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    /// Also absorbs any label the backend invents; it counts those as neutral too.
    #[default]
    #[serde(other)]
    Neutral,
}

/// Store metadata for the analyzed application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub name: String,
    #[serde(default)]
    pub package_name: Option<String>,
    pub developer: String,
    /// Icon URL.
    pub icon: String,
    /// The backend sends this as a string, `"None"` for unrated apps; numbers
    /// are accepted too. Null and non-numeric strings decode to `None`.
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,
}

/// Aggregate sentiment over all analyzed reviews. Percentages sum to ~100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSummary {
    pub average_score: f64,
    pub review_count: u64,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
    #[serde(default)]
    pub date: Option<String>,
}

/// A single scored review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSample {
    pub id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_image: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    /// Store star rating left by the reviewer.
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub thumbs_up_count: Option<u64>,
    #[serde(default)]
    pub review_created_version: Option<String>,
    #[serde(default)]
    pub at: Option<String>,
    #[serde(default)]
    pub reply_content: Option<String>,
    #[serde(default)]
    pub reply_at: Option<String>,
}

/// Full payload of one successful `POST /api/reviews/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub app_info: AppInfo,
    pub sentiment_data: SentimentSummary,
    pub review_samples: Vec<ReviewSample>,
}

impl AnalysisResult {
    /// Leading review samples, in backend order, capped at [`DISPLAYED_SAMPLE_COUNT`].
    #[must_use]
    pub fn displayed_samples(&self) -> &[ReviewSample] {
        let end = self.review_samples.len().min(DISPLAYED_SAMPLE_COUNT);
        &self.review_samples[..end]
    }
}

// =============================================================================
// REQUEST / ERROR BODIES
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalyzeRequest<'a> {
    pub(crate) app_name: &'a str,
}

/// Error body of a non-2xx response. Route errors use `detail`; the backend's
/// catch-all handler uses `message`. Validation errors put an array in `detail`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) detail: Option<serde_json::Value>,
    #[serde(default)]
    pub(crate) message: Option<String>,
}

impl ErrorBody {
    /// The human-readable message, if the body carries one.
    pub(crate) fn into_message(self) -> Option<String> {
        let detail = match self.detail {
            Some(serde_json::Value::String(detail)) => Some(detail),
            _ => None,
        };
        detail
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.message.filter(|s| !s.trim().is_empty()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRating {
    Number(f64),
    Text(String),
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawRating>::deserialize(deserializer)? {
        Some(RawRating::Number(n)) => Some(n),
        Some(RawRating::Text(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        None => None,
    })
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
