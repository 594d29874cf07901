//! Request orchestration.
//!
//! ARCHITECTURE
//! ============
//! Each controller owns its own token mint and writes into the shared
//! [`ViewStore`](crate::state::ViewStore). Neither returns errors: every
//! outcome, including failure, ends up as a state transition.

pub mod analysis;
pub mod suggestions;

pub use analysis::AnalysisController;
pub use suggestions::SuggestionController;
