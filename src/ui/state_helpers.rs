//! Helper functions to set multiple UI properties in a grouped manner.
//!
//! Instead of calling individual setters scattered through the handlers,
//! these functions group related property updates per pipeline so a UI
//! transition always happens as one consistent step.

use log::error;
use slint::ComponentHandle;

/// Shows a freshly generated QR code in the generator preview.
pub fn set_generator_preview(ui: &crate::AppWindow, image: slint::Image) {
    let generator = ui.global::<crate::GeneratorView>();
    generator.set_preview(image);
    generator.set_has_preview(true);
    generator.set_error_message("".into());
}

/// Clears the generator preview (empty text or failed generation).
pub fn clear_generator_preview(ui: &crate::AppWindow) {
    let generator = ui.global::<crate::GeneratorView>();
    generator.set_preview(slint::Image::default());
    generator.set_has_preview(false);
}

/// Reports a generator-side error. Logs it and shows it inline.
pub fn set_generator_error(ui: &crate::AppWindow, error: String) {
    error!("Generator error: {}", error);
    ui.global::<crate::GeneratorView>()
        .set_error_message(error.into());
}

/// Puts the extractor into the scanning state, clearing prior results.
pub fn set_scan_pending(ui: &crate::AppWindow) {
    let extractor = ui.global::<crate::ExtractorView>();
    extractor.set_scanning(true);
    extractor.set_has_result(false);
    extractor.set_extracted_text("".into());
    extractor.set_error_message("".into());
}

/// Shows the source image being scanned.
pub fn set_extractor_preview(ui: &crate::AppWindow, image: slint::Image) {
    let extractor = ui.global::<crate::ExtractorView>();
    extractor.set_preview(image);
    extractor.set_has_image(true);
}

/// Shows a successful scan result.
pub fn set_scan_success(ui: &crate::AppWindow, text: &str) {
    let extractor = ui.global::<crate::ExtractorView>();
    extractor.set_scanning(false);
    extractor.set_extracted_text(text.into());
    extractor.set_has_result(true);
    extractor.set_error_message("".into());
}

/// Reports an extractor-side error. Logs it and shows it inline.
pub fn set_scan_error(ui: &crate::AppWindow, error: String) {
    error!("Extractor error: {}", error);
    let extractor = ui.global::<crate::ExtractorView>();
    extractor.set_scanning(false);
    extractor.set_has_result(false);
    extractor.set_extracted_text("".into());
    extractor.set_error_message(error.into());
}

/// Returns the extractor to its initial empty state.
pub fn clear_extractor(ui: &crate::AppWindow) {
    let extractor = ui.global::<crate::ExtractorView>();
    extractor.set_preview(slint::Image::default());
    extractor.set_has_image(false);
    extractor.set_scanning(false);
    extractor.set_extracted_text("".into());
    extractor.set_has_result(false);
    extractor.set_error_message("".into());
}

/// Toggles the shared "Copied!" indicator.
pub fn set_copy_feedback(ui: &crate::AppWindow, active: bool) {
    ui.global::<crate::ViewState>().set_copy_feedback(active);
}
