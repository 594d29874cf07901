//! One client instance: a view store plus the controllers that feed it.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{ApiError, HttpReviewsApi, ReviewsApi};
use crate::config::ClientConfig;
use crate::controllers::{AnalysisController, SuggestionController};
use crate::state::{ViewState, ViewStore};

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub struct ReviewSession {
    store: ViewStore,
    suggestions: SuggestionController,
    analysis: AnalysisController,
}

impl ReviewSession {
    #[must_use]
    pub fn new(api: Arc<dyn ReviewsApi>, config: &ClientConfig) -> Self {
        let store = ViewStore::new();
        Self {
            suggestions: SuggestionController::new(Arc::clone(&api), store.clone(), config),
            analysis: AnalysisController::new(api, store.clone()),
            store,
        }
    }

    /// Session backed by the HTTP client for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn connect(config: &ClientConfig) -> Result<Self, ApiError> {
        let api = HttpReviewsApi::new(config)?;
        Ok(Self::new(Arc::new(api), config))
    }

    pub fn on_query_changed(&self, text: &str) {
        self.suggestions.on_query_changed(text);
    }

    pub fn select_suggestion(&self, title: &str) {
        self.suggestions.select_suggestion(title);
    }

    pub fn analyze(&self, app_name: &str) -> JoinHandle<()> {
        self.analysis.analyze(app_name)
    }

    /// Analyze whatever is currently in the search box.
    pub fn analyze_query(&self) -> JoinHandle<()> {
        let query = self.store.snapshot().query;
        self.analysis.analyze(&query)
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.store.snapshot()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.store.subscribe()
    }
}
