//! Debounced, race-safe autocomplete.
//!
//! DESIGN
//! ======
//! Every handled keystroke mints a new [`RequestToken`] and (re)arms the
//! debounce slot. When the slot fires, the lookup runs on its own task under
//! the token minted for that keystroke. A reply is applied only while its token
//! is still the newest, so the last *request* wins no matter which reply
//! arrives last. Minting per keystroke rather than per fire also discards a
//! reply that lands while a newer query is still debouncing.
//!
//! ERROR HANDLING
//! ==============
//! Suggestions are a convenience. Lookup failures are logged and leave the
//! current list untouched.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, warn};

use crate::api::ReviewsApi;
use crate::config::ClientConfig;
use crate::schedule::ScheduledTask;
use crate::state::ViewStore;
use crate::token::{RequestToken, TokenMint};

#[cfg(test)]
#[path = "suggestions_test.rs"]
mod suggestions_test;

pub struct SuggestionController {
    api: Arc<dyn ReviewsApi>,
    store: ViewStore,
    debounce: ScheduledTask,
    tokens: Arc<TokenMint>,
    /// Held across mint, query write and re-arm so concurrent callers cannot
    /// leave an older token's timer armed behind a newer token.
    input: Mutex<()>,
    delay: Duration,
    min_query_len: usize,
}

impl SuggestionController {
    #[must_use]
    pub fn new(api: Arc<dyn ReviewsApi>, store: ViewStore, config: &ClientConfig) -> Self {
        Self {
            api,
            store,
            debounce: ScheduledTask::new(),
            tokens: Arc::new(TokenMint::new()),
            input: Mutex::new(()),
            delay: config.debounce,
            min_query_len: config.min_query_len,
        }
    }

    /// Handle a keystroke. Short queries clear the list at once; longer ones
    /// schedule a lookup after the debounce window.
    pub fn on_query_changed(&self, text: &str) {
        let _input = self.input_lock();
        let token = self.tokens.mint();
        let query = text.to_owned();

        if text.chars().count() < self.min_query_len {
            self.debounce.cancel();
            self.store.update(|state| {
                state.query = query;
                state.suggestions.clear();
            });
            return;
        }

        self.store.update(|state| state.query.clone_from(&query));
        debug!(%query, ?token, delay = ?self.delay, "suggestion lookup armed");

        let api = Arc::clone(&self.api);
        let store = self.store.clone();
        let tokens = Arc::clone(&self.tokens);
        self.debounce.schedule(self.delay, move || {
            tokio::spawn(lookup(api, store, tokens, token, query));
        });
    }

    /// Accept a suggestion: the title becomes the query and the list closes.
    /// No lookup is issued and any pending or in-flight one is dropped.
    pub fn select_suggestion(&self, title: &str) {
        let _input = self.input_lock();
        self.tokens.mint();
        self.debounce.cancel();
        let title = title.to_owned();
        self.store.update(|state| {
            state.query = title;
            state.suggestions.clear();
        });
    }

    /// `true` while a lookup is waiting out the debounce window.
    #[must_use]
    pub fn is_debouncing(&self) -> bool {
        self.debounce.is_pending()
    }

    fn input_lock(&self) -> MutexGuard<'_, ()> {
        self.input.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn lookup(
    api: Arc<dyn ReviewsApi>,
    store: ViewStore,
    tokens: Arc<TokenMint>,
    token: RequestToken,
    query: String,
) {
    if !tokens.is_current(token) {
        debug!(%query, ?token, "suggestion lookup superseded before sending");
        return;
    }

    match api.suggest(&query).await {
        Ok(list) => {
            let count = list.len();
            let applied = store.update_if(|state| {
                if !tokens.is_current(token) {
                    return false;
                }
                state.suggestions = list;
                true
            });
            if applied {
                debug!(%query, count, "suggestions updated");
            } else {
                debug!(%query, ?token, "discarding stale suggestions");
            }
        }
        Err(e) => {
            warn!(%query, error = %e, "suggestion lookup failed");
        }
    }
}
