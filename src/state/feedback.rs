//! Transient "Copied!" indicator timing.
//!
//! Policy: every successful copy restarts the 2-second window, so rapid
//! consecutive copies keep the indicator shown continuously and it clears
//! 2 seconds after the last copy.

use std::time::Instant;

use crate::config::COPY_FEEDBACK_DURATION;

#[derive(Default)]
pub struct CopyFeedback {
    expires_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful copy, extending the visibility window.
    pub fn mark(&mut self, now: Instant) {
        self.expires_at = Some(now + COPY_FEEDBACK_DURATION);
    }

    /// Whether the indicator should still be shown at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now < deadline)
    }

    /// Clears the indicator regardless of remaining time.
    pub fn clear(&mut self) {
        self.expires_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn activates_on_copy_and_expires_after_window() {
        let mut feedback = CopyFeedback::new();
        let t0 = Instant::now();
        assert!(!feedback.is_active(t0));

        feedback.mark(t0);
        assert!(feedback.is_active(t0 + Duration::from_millis(1999)));
        assert!(!feedback.is_active(t0 + Duration::from_millis(2000)));
    }

    #[test]
    fn second_copy_within_window_extends_it() {
        let mut feedback = CopyFeedback::new();
        let t0 = Instant::now();

        feedback.mark(t0);
        feedback.mark(t0 + Duration::from_secs(1));

        // Continuously active through the original deadline, and for a
        // full window after the second copy.
        assert!(feedback.is_active(t0 + Duration::from_millis(2500)));
        assert!(!feedback.is_active(t0 + Duration::from_millis(3001)));
    }

    #[test]
    fn clear_hides_immediately() {
        let mut feedback = CopyFeedback::new();
        let t0 = Instant::now();
        feedback.mark(t0);
        feedback.clear();
        assert!(!feedback.is_active(t0));
    }
}
