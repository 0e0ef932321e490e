//! Scan orchestration: decoding a QR code from a file or the clipboard.
//!
//! Uses `rayon::spawn` for the CPU-intensive image decode and QR
//! detection, then `slint::invoke_from_event_loop` to publish the result
//! back on the UI thread. The result is only applied if no newer scan
//! was started in the meantime (see [`ExtractorState`]).

use log::warn;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::ADVISORY_MAX_INPUT_BYTES;
use crate::error::{AppError, Result};
use crate::image_loader;
use crate::scanner;
use crate::services::ClipboardService;
use crate::state::ExtractorState;
use crate::ui::state_helpers;

/// Where the next scan input comes from.
pub enum ScanSource {
    File(PathBuf),
    Clipboard,
}

/// Source pixels plus the decode attempt over them.
struct ScanOutcome {
    /// RGBA preview of the scanned image, when the source was readable.
    preview: Option<(Vec<u8>, u32, u32)>,
    decoded: Result<String>,
}

/// Resolves the source into pixels and runs QR detection. Runs on a
/// worker thread.
fn run_scan(source: ScanSource) -> ScanOutcome {
    let pixels = match source {
        ScanSource::File(path) => read_file_pixels(&path),
        ScanSource::Clipboard => ClipboardService::new()
            .read_image()
            .map(|img| (img.rgba, img.width, img.height))
            .map_err(|e| AppError::Clipboard(e.to_string())),
    };

    match pixels {
        Ok((rgba, width, height)) => {
            let decoded = scanner::decode_rgba(&rgba, width, height);
            ScanOutcome {
                preview: Some((rgba, width, height)),
                decoded,
            }
        }
        Err(e) => ScanOutcome {
            preview: None,
            decoded: Err(e),
        },
    }
}

/// Reads and rasterizes an image file into RGBA pixels.
fn read_file_pixels(path: &PathBuf) -> Result<(Vec<u8>, u32, u32)> {
    let bytes = std::fs::read(path)?;

    if bytes.len() as u64 > ADVISORY_MAX_INPUT_BYTES {
        warn!(
            "Input file {} is {} bytes, over the {} byte advisory limit",
            path.display(),
            bytes.len(),
            ADVISORY_MAX_INPUT_BYTES
        );
    }

    let img = image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok((img.into_raw(), width, height))
}

/// Starts a scan for the given source and updates the UI when it
/// completes.
///
/// Must be called from the UI thread. Takes a fresh scan token first, so
/// any scan still in flight resolves as stale and is discarded.
pub fn scan_and_display(
    ui: slint::Weak<crate::AppWindow>,
    extractor: Arc<Mutex<ExtractorState>>,
    source: ScanSource,
) {
    let token = extractor.lock().unwrap().begin_scan();

    if let Some(ui) = ui.upgrade() {
        state_helpers::set_scan_pending(&ui);
    }

    rayon::spawn(move || {
        let outcome = run_scan(source);

        let _ = slint::invoke_from_event_loop(move || {
            let applied = extractor.lock().unwrap().complete_scan(
                token,
                outcome
                    .decoded
                    .as_ref()
                    .map(|text| text.clone())
                    .map_err(|e| e.to_string()),
            );
            // A newer input replaced this scan; its own completion will
            // update the UI.
            if !applied {
                return;
            }

            let Some(ui) = ui.upgrade() else { return };

            if let Some((rgba, width, height)) = outcome.preview {
                let image = image_loader::create_slint_image(&rgba, width, height);
                state_helpers::set_extractor_preview(&ui, image);
            }

            match outcome.decoded {
                Ok(text) => state_helpers::set_scan_success(&ui, &text),
                Err(e) => state_helpers::set_scan_error(&ui, e.to_string()),
            }
        });
    });
}
