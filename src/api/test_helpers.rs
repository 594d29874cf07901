//! Scripted in-memory backend for controller tests.
//!
//! Replies are registered per query/app name. A gated reply parks the call
//! until the test sends the outcome, which lets a test choose the order in
//! which overlapping responses arrive.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::oneshot;

use super::types::{AnalysisResult, AppInfo, ReviewSample, Sentiment, SentimentSummary, Suggestion};
use super::{ApiError, ReviewsApi};

type Gate<T> = oneshot::Sender<Result<T, ApiError>>;

enum Reply<T> {
    Ready(Result<T, ApiError>),
    Gated(oneshot::Receiver<Result<T, ApiError>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, ApiError> {
        match self {
            Self::Ready(result) => result,
            Self::Gated(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Request("gate dropped".into()))),
        }
    }
}

struct Script<T> {
    calls: Vec<String>,
    replies: HashMap<String, VecDeque<Reply<T>>>,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self { calls: Vec::new(), replies: HashMap::new() }
    }
}

impl<T> Script<T> {
    fn push(&mut self, key: &str, reply: Reply<T>) {
        self.replies.entry(key.to_owned()).or_default().push_back(reply);
    }

    fn take(&mut self, key: &str) -> Option<Reply<T>> {
        self.calls.push(key.to_owned());
        self.replies.get_mut(key).and_then(VecDeque::pop_front)
    }
}

#[derive(Default)]
pub(crate) struct ScriptedApi {
    suggest: Mutex<Script<Vec<Suggestion>>>,
    analyze: Mutex<Script<AnalysisResult>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().expect("script mutex should lock")
}

impl ScriptedApi {
    pub(crate) fn reply_suggest(&self, query: &str, result: Result<Vec<Suggestion>, ApiError>) {
        lock(&self.suggest).push(query, Reply::Ready(result));
    }

    pub(crate) fn gate_suggest(&self, query: &str) -> Gate<Vec<Suggestion>> {
        let (tx, rx) = oneshot::channel();
        lock(&self.suggest).push(query, Reply::Gated(rx));
        tx
    }

    pub(crate) fn reply_analyze(&self, app_name: &str, result: Result<AnalysisResult, ApiError>) {
        lock(&self.analyze).push(app_name, Reply::Ready(result));
    }

    pub(crate) fn gate_analyze(&self, app_name: &str) -> Gate<AnalysisResult> {
        let (tx, rx) = oneshot::channel();
        lock(&self.analyze).push(app_name, Reply::Gated(rx));
        tx
    }

    pub(crate) fn suggest_calls(&self) -> Vec<String> {
        lock(&self.suggest).calls.clone()
    }

    pub(crate) fn analyze_calls(&self) -> Vec<String> {
        lock(&self.analyze).calls.clone()
    }
}

#[async_trait::async_trait]
impl ReviewsApi for ScriptedApi {
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        let reply = lock(&self.suggest).take(query);
        match reply {
            Some(reply) => reply.resolve().await,
            None => Ok(Vec::new()),
        }
    }

    async fn analyze(&self, app_name: &str) -> Result<AnalysisResult, ApiError> {
        let reply = lock(&self.analyze).take(app_name);
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(ApiError::Request("no scripted reply".into())),
        }
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub(crate) fn suggestions(titles: &[&str]) -> Vec<Suggestion> {
    titles
        .iter()
        .map(|title| Suggestion { title: (*title).to_owned(), app_id: format!("com.{}", title.to_lowercase()) })
        .collect()
}

pub(crate) fn analysis_named(name: &str) -> AnalysisResult {
    AnalysisResult {
        app_info: AppInfo {
            name: name.to_owned(),
            package_name: Some(format!("com.{}", name.to_lowercase())),
            developer: "Example Dev".into(),
            icon: "https://i.example/icon.png".into(),
            rating: Some(4.3),
        },
        sentiment_data: SentimentSummary {
            average_score: 64.0,
            review_count: 1,
            positive_percentage: 100.0,
            negative_percentage: 0.0,
            neutral_percentage: 0.0,
            date: None,
        },
        review_samples: vec![ReviewSample {
            id: "r1".into(),
            user_name: Some("Ana".into()),
            user_image: None,
            content: Some("works well".into()),
            sentiment: Sentiment::Positive,
            sentiment_score: 0.8,
            score: Some(5),
            thumbs_up_count: None,
            review_created_version: None,
            at: None,
            reply_content: None,
            reply_at: None,
        }],
    }
}

/// Let spawned tasks run to their next suspension point.
pub(crate) async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}
