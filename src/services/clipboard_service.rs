//! Clipboard service bridging generated and decoded artifacts to the OS
//! clipboard.
//!
//! Uses `arboard` on all platforms: plain text for decoded payloads,
//! RGBA image data for generated QR codes, and image reads for the
//! paste-to-extract flow.

use arboard::{Clipboard, ImageData};
use log::info;
use std::borrow::Cow;
use std::fmt;

/// Errors that can occur during clipboard operations.
#[derive(Debug)]
pub enum ClipboardError {
    /// The system clipboard could not be opened.
    Unavailable(String),
    /// Reading or writing the clipboard failed.
    Access(String),
    /// A paste was requested but the clipboard holds no image.
    NoImage,
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            Self::Access(msg) => write!(f, "{}", msg),
            Self::NoImage => write!(f, "No image found in the clipboard"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// An image read from the clipboard, as raw RGBA pixels.
pub struct ClipboardImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Service for managing clipboard operations.
pub struct ClipboardService;

impl ClipboardService {
    /// Creates a new clipboard service.
    pub fn new() -> Self {
        Self
    }

    fn open() -> Result<Clipboard, ClipboardError> {
        Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }

    /// Copies plain text to the clipboard.
    pub fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = Self::open()?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Access(e.to_string()))?;

        info!("Copied {} byte(s) of text to clipboard", text.len());
        Ok(())
    }

    /// Copies an RGBA image to the clipboard.
    pub fn copy_image(&self, rgba: &[u8], width: u32, height: u32) -> Result<(), ClipboardError> {
        let mut clipboard = Self::open()?;
        let image = ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Borrowed(rgba),
        };
        clipboard
            .set_image(image)
            .map_err(|e| ClipboardError::Access(e.to_string()))?;

        info!("Copied {}x{} image to clipboard", width, height);
        Ok(())
    }

    /// Reads an image from the clipboard, if one is present.
    pub fn read_image(&self) -> Result<ClipboardImage, ClipboardError> {
        let mut clipboard = Self::open()?;
        let image = clipboard.get_image().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => ClipboardError::NoImage,
            other => ClipboardError::Access(other.to_string()),
        })?;

        info!(
            "Read {}x{} image from clipboard",
            image.width, image.height
        );
        Ok(ClipboardImage {
            rgba: image.bytes.into_owned(),
            width: image.width as u32,
            height: image.height as u32,
        })
    }
}
