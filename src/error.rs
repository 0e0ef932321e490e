//! Unified error types for the QR tools application.
//!
//! `Display` output is shown to the user verbatim, so the decode-side
//! variants carry the exact wording the UI expects. Underlying details
//! stay available through `Debug` for logging.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Text could not be encoded into a QR symbol (e.g. over capacity)
    QrEncode(String),
    /// A color parameter is not a valid hex color string
    InvalidColor(String),
    /// Error encoding the generated raster as PNG
    PngEncode(String),
    /// The selected file is not an image type
    UnsupportedFile,
    /// The image bytes could not be decoded into pixels
    ImageLoad(String),
    /// The image decoded fine but contains no readable QR symbol
    NoQrFound,
    /// Clipboard read/write failed
    Clipboard(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::QrEncode(msg) => write!(f, "Failed to generate QR code: {}", msg),
            AppError::InvalidColor(value) => write!(f, "Invalid color value: {}", value),
            AppError::PngEncode(msg) => write!(f, "Failed to encode PNG: {}", msg),
            AppError::UnsupportedFile => write!(f, "Please upload a valid image file"),
            AppError::ImageLoad(_) => write!(f, "Failed to load image"),
            AppError::NoQrFound => {
                write!(f, "No QR code found in the image. Please try another image.")
            }
            AppError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<qrcode::types::QrError> for AppError {
    fn from(err: qrcode::types::QrError) -> Self {
        AppError::QrEncode(err.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
