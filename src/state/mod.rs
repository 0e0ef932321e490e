//! State management for the QR tools application.
//!
//! Each pipeline owns its state independently so switching tabs preserves
//! whatever the user last did in either one.

use std::sync::{Arc, Mutex};

pub mod extractor;
pub mod feedback;
pub mod generator;

pub use extractor::{ExtractorState, ScanStatus};
pub use feedback::CopyFeedback;
pub use generator::GeneratorState;

/// Application-wide state container.
pub struct AppState {
    pub generator: Arc<Mutex<GeneratorState>>,
    pub extractor: Arc<Mutex<ExtractorState>>,
    pub copy_feedback: Arc<Mutex<CopyFeedback>>,
    /// One-shot timer that clears the "Copied!" indicator.
    pub copy_feedback_timer: Arc<Mutex<Option<slint::Timer>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            generator: Arc::new(Mutex::new(GeneratorState::new())),
            extractor: Arc::new(Mutex::new(ExtractorState::new())),
            copy_feedback: Arc::new(Mutex::new(CopyFeedback::new())),
            copy_feedback_timer: Arc::new(Mutex::new(None)),
        }
    }
}
