//! Extractor pipeline state: scan status with last-input-wins handling.
//!
//! Each new scan takes an incrementing token. In-flight scans are never
//! cancelled; instead a completing scan only applies its result if its
//! token is still the latest, so overlapping inputs resolve to the most
//! recent one.

use log::debug;

/// Outcome of the current (or last) scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanStatus {
    #[default]
    Idle,
    Pending,
    Decoded(String),
    Failed(String),
}

#[derive(Default)]
pub struct ExtractorState {
    seq: u64,
    status: ScanStatus,
}

impl ExtractorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new scan: clears any previous result or error and returns
    /// the token the worker must present when completing.
    pub fn begin_scan(&mut self) -> u64 {
        self.seq += 1;
        self.status = ScanStatus::Pending;
        debug!("Scan {} started", self.seq);
        self.seq
    }

    /// Applies a scan outcome if `token` still identifies the latest
    /// input. Returns whether the result was applied; stale results are
    /// discarded.
    pub fn complete_scan(
        &mut self,
        token: u64,
        outcome: std::result::Result<String, String>,
    ) -> bool {
        if token != self.seq {
            debug!("Scan {} result discarded (latest is {})", token, self.seq);
            return false;
        }

        self.status = match outcome {
            Ok(text) => ScanStatus::Decoded(text),
            Err(reason) => ScanStatus::Failed(reason),
        };
        true
    }

    /// Clears everything back to idle. Bumps the token so any scan still
    /// in flight resolves as stale.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.status = ScanStatus::Idle;
    }

    pub fn status(&self) -> &ScanStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_input_wins_over_stale_result() {
        let mut state = ExtractorState::new();
        let first = state.begin_scan();
        let second = state.begin_scan();

        // The first scan finishes late; its result must be discarded.
        assert!(!state.complete_scan(first, Ok("stale".to_string())));
        assert_eq!(state.status(), &ScanStatus::Pending);

        assert!(state.complete_scan(second, Ok("fresh".to_string())));
        assert_eq!(state.status(), &ScanStatus::Decoded("fresh".to_string()));
    }

    #[test]
    fn new_scan_clears_previous_failure() {
        let mut state = ExtractorState::new();
        let token = state.begin_scan();
        state.complete_scan(token, Err("no symbol".to_string()));
        assert!(matches!(state.status(), ScanStatus::Failed(_)));

        state.begin_scan();
        assert_eq!(state.status(), &ScanStatus::Pending);
    }

    #[test]
    fn reset_invalidates_in_flight_scan() {
        let mut state = ExtractorState::new();
        let token = state.begin_scan();
        state.reset();

        assert!(!state.complete_scan(token, Ok("late".to_string())));
        assert_eq!(state.status(), &ScanStatus::Idle);
    }

    #[test]
    fn completed_token_cannot_apply_twice() {
        let mut state = ExtractorState::new();
        let token = state.begin_scan();
        assert!(state.complete_scan(token, Ok("first".to_string())));

        let newer = state.begin_scan();
        assert!(!state.complete_scan(token, Ok("again".to_string())));
        assert!(state.complete_scan(newer, Err("gone".to_string())));
    }
}
