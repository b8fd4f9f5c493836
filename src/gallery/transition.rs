// SPDX-License-Identifier: MPL-2.0
//! Generation tokens for deferred work.
//!
//! Timers and image decodes finish in any order. Each request is tagged with
//! a token; only the most recently issued token is current, and results
//! carrying any other token are dropped.

/// Identifies one deferred request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

impl TransitionToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues tokens and remembers which one is current.
#[derive(Debug, Clone, Default)]
pub struct TransitionTracker {
    issued: u64,
    current: Option<TransitionToken>,
}

impl TransitionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh token, superseding every earlier one.
    pub fn issue(&mut self) -> TransitionToken {
        self.issued = self.issued.wrapping_add(1);
        let token = TransitionToken(self.issued);
        self.current = Some(token);
        token
    }

    /// Supersedes the current token without issuing a new one.
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn is_current(&self, token: TransitionToken) -> bool {
        self.current == Some(token)
    }

    #[must_use]
    pub fn current(&self) -> Option<TransitionToken> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_token_supersedes_older() {
        let mut tracker = TransitionTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();

        assert_ne!(first, second);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn invalidate_leaves_no_current_token() {
        let mut tracker = TransitionTracker::new();
        let token = tracker.issue();
        tracker.invalidate();

        assert!(!tracker.is_current(token));
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn tokens_are_not_reused_after_invalidate() {
        let mut tracker = TransitionTracker::new();
        let first = tracker.issue();
        tracker.invalidate();
        let second = tracker.issue();
        assert!(second.value() > first.value());
        assert!(!tracker.is_current(first));
    }
}
