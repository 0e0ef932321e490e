//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: async UI work that must stay on the main
//!   thread (file dialogs)
//! - `rayon::spawn`: CPU-intensive work (image decode, QR detection,
//!   file writes)
//! - `slint::invoke_from_event_loop`: returning worker results to the
//!   UI thread

pub mod handlers;
pub mod scan_flow;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
