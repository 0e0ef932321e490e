//! Service layer for business logic.
//!
//! Separates clipboard and export operations from UI handlers for better
//! testability and maintainability.

pub mod clipboard_service;
pub mod export_service;

pub use clipboard_service::ClipboardService;
pub use export_service::ExportService;
