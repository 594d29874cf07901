//! Review-sentiment client core.
//!
//! ARCHITECTURE
//! ============
//! Keystrokes go to the [`SuggestionController`] (debounce, lookup, staleness
//! check); submits go to the [`AnalysisController`] (loading, result or
//! error). Both write into one [`ViewStore`], and the presentation layer only
//! ever reads the [`ViewState`] it holds. Backend access sits behind the
//! [`ReviewsApi`] trait.

pub mod api;
pub mod config;
pub mod controllers;
pub mod schedule;
pub mod session;
pub mod state;
pub mod terminal;
pub mod token;

pub use api::{ApiError, HttpReviewsApi, ReviewsApi};
pub use config::ClientConfig;
pub use controllers::{AnalysisController, SuggestionController};
pub use schedule::ScheduledTask;
pub use session::ReviewSession;
pub use state::{AnalysisState, AnalysisStatus, ViewState, ViewStore};
pub use token::{RequestToken, TokenMint};
