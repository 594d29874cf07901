//! Analysis request state machine: idle -> loading -> success | error.
//!
//! Resubmitting while a request is in flight does not abort it; the older
//! request's token goes stale and its outcome is dropped on arrival.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::ReviewsApi;
use crate::state::ViewStore;
use crate::token::{RequestToken, TokenMint};

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

pub struct AnalysisController {
    api: Arc<dyn ReviewsApi>,
    store: ViewStore,
    tokens: Arc<TokenMint>,
}

impl AnalysisController {
    #[must_use]
    pub fn new(api: Arc<dyn ReviewsApi>, store: ViewStore) -> Self {
        Self { api, store, tokens: Arc::new(TokenMint::new()) }
    }

    /// Start analyzing `app_name`. The name is sent as-is, empty or not.
    ///
    /// The outcome lands in the view store; the returned handle only reports
    /// when the request has settled. Dropping it does not cancel anything.
    pub fn analyze(&self, app_name: &str) -> JoinHandle<()> {
        let token = self.tokens.mint();
        self.store.update(|state| state.analysis.begin());
        debug!(app_name, ?token, "analysis requested");

        tokio::spawn(run(
            Arc::clone(&self.api),
            self.store.clone(),
            Arc::clone(&self.tokens),
            token,
            app_name.to_owned(),
        ))
    }
}

async fn run(
    api: Arc<dyn ReviewsApi>,
    store: ViewStore,
    tokens: Arc<TokenMint>,
    token: RequestToken,
    app_name: String,
) {
    let outcome = api.analyze(&app_name).await;

    let applied = store.update_if(|state| {
        if !tokens.is_current(token) {
            return false;
        }
        match &outcome {
            Ok(result) => state.analysis.succeed(result.clone()),
            Err(e) => state.analysis.fail(e.user_message()),
        }
        true
    });

    if !applied {
        debug!(%app_name, ?token, "discarding superseded analysis");
        return;
    }
    match outcome {
        Ok(result) => info!(
            %app_name,
            resolved = %result.app_info.name,
            reviews = result.sentiment_data.review_count,
            "analysis complete"
        ),
        Err(e) => warn!(%app_name, error = %e, retryable = e.retryable(), "analysis failed"),
    }
}
