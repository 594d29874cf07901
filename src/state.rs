//! Render-ready client state.
//!
//! DESIGN
//! ======
//! `ViewState` is the only thing the presentation layer reads. Controllers
//! write into it through a shared [`ViewStore`], which wraps a
//! `tokio::sync::watch` channel so renderers can await changes instead of
//! polling. Staleness checks run inside the store's write lock, so a check and
//! the write it guards can never be split by another controller's update.

use std::sync::Arc;

use tokio::sync::watch;

use crate::api::{AnalysisResult, Suggestion};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

// =============================================================================
// ANALYSIS STATE
// =============================================================================

/// Lifecycle of the analysis panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Analysis panel state.
///
/// A previous `result` stays in place while a new request is loading and when
/// it fails; only a newer success replaces it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisState {
    pub status: AnalysisStatus,
    pub result: Option<AnalysisResult>,
    pub error_message: Option<String>,
}

impl AnalysisState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == AnalysisStatus::Loading
    }

    pub(crate) fn begin(&mut self) {
        self.status = AnalysisStatus::Loading;
        self.error_message = None;
    }

    pub(crate) fn succeed(&mut self, result: AnalysisResult) {
        self.status = AnalysisStatus::Success;
        self.result = Some(result);
        self.error_message = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.status = AnalysisStatus::Error;
        self.error_message = Some(message);
    }
}

// =============================================================================
// VIEW STATE
// =============================================================================

/// Everything the presentation layer renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Raw search text, updated on every keystroke.
    pub query: String,
    /// Suggestions for the latest query, in backend order.
    pub suggestions: Vec<Suggestion>,
    pub analysis: AnalysisState,
}

// =============================================================================
// VIEW STORE
// =============================================================================

/// Shared handle to one client's [`ViewState`]. Clones share the same state.
#[derive(Clone, Debug)]
pub struct ViewStore {
    tx: Arc<watch::Sender<ViewState>>,
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStore {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    /// Receiver notified after every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    /// Apply `f` and notify subscribers. Works with zero subscribers.
    pub fn update(&self, f: impl FnOnce(&mut ViewState)) {
        self.tx.send_modify(f);
    }

    /// Apply `f`; subscribers are notified only when it returns `true`.
    pub fn update_if(&self, f: impl FnOnce(&mut ViewState) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }
}
