//! Liveness token for asynchronous completions
//!
//! An in-flight lookup cannot be aborted; its eventual effect can only be
//! suppressed. Every reconciler operation captures the token current at
//! entry and checks it before each state write.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Revocable liveness flag shared between the session owner and its
/// in-flight operations
///
/// Cloning is cheap and clones observe the same flag. Revocation is
/// permanent for a given token; the owner installs a fresh token when a new
/// session generation begins.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    live: Arc<AtomicBool>,
}

impl LivenessToken {
    #[must_use]
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)) }
    }

    /// Whether completions holding this token may still publish state
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Permanently revoke the token
    pub fn revoke(&self) {
        self.live.store(false, Ordering::Release);
    }
}

impl Default for LivenessToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = LivenessToken::new();
        let held = token.clone();
        assert!(held.is_live());

        token.revoke();
        assert!(!held.is_live());
    }

    #[test]
    fn revocation_is_permanent() {
        let token = LivenessToken::new();
        token.revoke();
        token.revoke();
        assert!(!token.is_live());
    }
}
