//! Export service: saving the generated QR code as a PNG file.

use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur while exporting.
#[derive(Debug)]
pub enum ExportError {
    /// Writing the file failed.
    Write(PathBuf, String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write(path, msg) => write!(f, "Failed to save {}: {}", path.display(), msg),
        }
    }
}

impl std::error::Error for ExportError {}

/// Service for writing export artifacts to disk.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Writes PNG bytes to the given path.
    pub fn save_png(&self, path: &Path, png: &[u8]) -> Result<(), ExportError> {
        std::fs::write(path, png)
            .map_err(|e| ExportError::Write(path.to_path_buf(), e.to_string()))?;

        info!("Saved {} byte(s) to {}", png.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_bytes_to_disk() {
        let dir = std::env::temp_dir().join("slint-qr-tools-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("qrcode.png");

        ExportService::new().save_png(&path, b"png-bytes").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"png-bytes");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn reports_unwritable_path() {
        let result =
            ExportService::new().save_png(Path::new("/nonexistent-dir/qrcode.png"), b"x");
        assert!(matches!(result, Err(ExportError::Write(_, _))));
    }
}
