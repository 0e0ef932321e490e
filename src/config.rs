//! Application configuration constants.

use std::time::Duration;

/// Supported image file extensions for decode input.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Bounds for the generated QR raster, in pixels.
pub const MIN_SIZE_PX: u32 = 128;
pub const MAX_SIZE_PX: u32 = 512;
pub const SIZE_STEP_PX: u32 = 32;

/// Quiet zone around the symbol, in modules per side.
pub const QUIET_ZONE_MODULES: u32 = 2;

/// Default generator colors.
pub const DEFAULT_FG_COLOR: &str = "#000000";
pub const DEFAULT_BG_COLOR: &str = "#ffffff";

/// Advisory limit for decode input files. Oversized files are logged,
/// not rejected.
pub const ADVISORY_MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// How long the "Copied!" indicator stays visible after a copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Default file name offered when saving a generated QR code.
pub const EXPORT_FILE_NAME: &str = "qrcode.png";
