//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (request_generate, pick_image,
//! paste_image, the copy actions, etc.) using the appropriate threading
//! model for each operation type.

use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::config;
use crate::encoder::EncodeRequest;
use crate::error::AppError;
use crate::image_loader;
use crate::services::{ClipboardService, ExportService};
use crate::state::{AppState, CopyFeedback, GeneratorState, ScanStatus};
use crate::ui::scan_flow::{self, ScanSource};
use crate::ui::state_helpers;

/// Reads the generator parameters from the UI, regenerates the QR code,
/// and updates the preview. Generation is cheap enough to run inline on
/// the UI thread.
fn regenerate(ui: &crate::AppWindow, generator: &Arc<Mutex<GeneratorState>>) {
    let props = ui.global::<crate::GeneratorView>();
    let request = EncodeRequest {
        text: props.get_text().to_string(),
        size_px: props.get_size_px().round() as u32,
        fg_color: props.get_fg_color().to_string(),
        bg_color: props.get_bg_color().to_string(),
    };

    let mut generator = generator.lock().unwrap();
    match generator.apply(request) {
        Ok(Some(encoded)) => {
            let image = image_loader::create_slint_image(&encoded.rgba, encoded.width, encoded.height);
            state_helpers::set_generator_preview(ui, image);
        }
        Ok(None) => {
            state_helpers::clear_generator_preview(ui);
            ui.global::<crate::GeneratorView>()
                .set_error_message("".into());
        }
        Err(e) => {
            state_helpers::clear_generator_preview(ui);
            state_helpers::set_generator_error(ui, e.to_string());
        }
    }
}

/// Shows the "Copied!" indicator and (re)starts the one-shot timer that
/// clears it. A copy within the window restarts the timer, so the
/// indicator stays on continuously and clears 2 seconds after the last
/// copy.
fn trigger_copy_feedback(ui: &crate::AppWindow, state: &AppState) {
    state.copy_feedback.lock().unwrap().mark(Instant::now());
    state_helpers::set_copy_feedback(ui, true);

    let ui_handle = ui.as_weak();
    let feedback: Arc<Mutex<CopyFeedback>> = state.copy_feedback.clone();

    let mut timer_slot = state.copy_feedback_timer.lock().unwrap();
    let timer = timer_slot.get_or_insert_with(slint::Timer::default);
    timer.start(
        slint::TimerMode::SingleShot,
        config::COPY_FEEDBACK_DURATION,
        move || {
            let mut feedback = feedback.lock().unwrap();
            if !feedback.is_active(Instant::now()) {
                feedback.clear();
                if let Some(ui) = ui_handle.upgrade() {
                    state_helpers::set_copy_feedback(&ui, false);
                }
            }
        },
    );
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: AppState) {
    let state = Arc::new(state);

    // Regeneration on any parameter change
    ui.global::<crate::Logic>().on_request_generate({
        let ui_handle = ui.as_weak();
        let generator = state.generator.clone();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                regenerate(&ui, &generator);
            }
        }
    });

    // Quick-example buttons populate the text field and regenerate
    ui.global::<crate::Logic>().on_use_example({
        let ui_handle = ui.as_weak();
        let generator = state.generator.clone();
        move |text| {
            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<crate::GeneratorView>().set_text(text);
                regenerate(&ui, &generator);
            }
        }
    });

    // Save generated PNG to disk
    // Uses slint::spawn_local because AsyncFileDialog must run on the main thread
    ui.global::<crate::Logic>().on_save_qr({
        let ui_handle = ui.as_weak();
        let generator = state.generator.clone();
        move || {
            let Some(png) = generator.lock().unwrap().export_png() else {
                return;
            };
            let ui_handle = ui_handle.clone();
            let _ = slint::spawn_local(async move {
                let Some(file_handle) = AsyncFileDialog::new()
                    .set_file_name(config::EXPORT_FILE_NAME)
                    .add_filter("PNG image", &["png"])
                    .save_file()
                    .await
                else {
                    return;
                };

                let path = file_handle.path().to_path_buf();
                rayon::spawn(move || {
                    if let Err(e) = ExportService::new().save_png(&path, &png) {
                        let _ = slint::invoke_from_event_loop(move || {
                            if let Some(ui) = ui_handle.upgrade() {
                                state_helpers::set_generator_error(&ui, e.to_string());
                            }
                        });
                    }
                });
            });
        }
    });

    // Copy generated QR image to the clipboard
    ui.global::<crate::Logic>().on_copy_qr_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else { return };

            let result = {
                let generator = state.generator.lock().unwrap();
                generator.result().map(|encoded| {
                    ClipboardService::new().copy_image(&encoded.rgba, encoded.width, encoded.height)
                })
            };

            match result {
                Some(Ok(())) => trigger_copy_feedback(&ui, &state),
                Some(Err(e)) => state_helpers::set_generator_error(&ui, e.to_string()),
                None => {}
            }
        }
    });

    // Open an image file and scan it
    ui.global::<crate::Logic>().on_pick_image({
        let ui_handle = ui.as_weak();
        let extractor = state.extractor.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let extractor = extractor.clone();
            let _ = slint::spawn_local(async move {
                let Some(file_handle) = AsyncFileDialog::new()
                    .add_filter("Images", &config::SUPPORTED_IMAGE_EXTENSIONS)
                    .pick_file()
                    .await
                else {
                    return;
                };

                let path = file_handle.path().to_path_buf();

                // Reject non-image files before any decode attempt
                if !crate::file_utils::is_supported_image(&path) {
                    if let Some(ui) = ui_handle.upgrade() {
                        state_helpers::set_scan_error(&ui, AppError::UnsupportedFile.to_string());
                    }
                    return;
                }

                scan_flow::scan_and_display(ui_handle, extractor, ScanSource::File(path));
            });
        }
    });

    // Scan an image pasted on the clipboard
    ui.global::<crate::Logic>().on_paste_image({
        let ui_handle = ui.as_weak();
        let extractor = state.extractor.clone();
        move || {
            scan_flow::scan_and_display(ui_handle.clone(), extractor.clone(), ScanSource::Clipboard);
        }
    });

    // Copy the decoded payload to the clipboard
    ui.global::<crate::Logic>().on_copy_extracted_text({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else { return };

            let result = {
                let extractor = state.extractor.lock().unwrap();
                match extractor.status() {
                    ScanStatus::Decoded(text) => Some(ClipboardService::new().copy_text(text)),
                    _ => None,
                }
            };

            match result {
                Some(Ok(())) => trigger_copy_feedback(&ui, &state),
                Some(Err(e)) => state_helpers::set_scan_error(&ui, e.to_string()),
                None => {}
            }
        }
    });

    // Reset the extractor to its initial state
    ui.global::<crate::Logic>().on_reset_extractor({
        let ui_handle = ui.as_weak();
        let extractor = state.extractor.clone();
        move || {
            extractor.lock().unwrap().reset();
            if let Some(ui) = ui_handle.upgrade() {
                state_helpers::clear_extractor(&ui);
            }
        }
    });
}
