//! Request generations for discarding superseded responses.
//!
//! Each controller owns one [`TokenMint`]. A response may touch the view only
//! while the token it was issued under is still the newest one minted.

use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

/// Opaque, monotonically increasing request generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Issues [`RequestToken`]s and remembers the newest one.
#[derive(Debug, Default)]
pub struct TokenMint {
    latest: AtomicU64,
}

impl TokenMint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a token newer than every token minted before it.
    pub fn mint(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// `true` while no newer token has been minted.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}
