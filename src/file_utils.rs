use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use std::path::Path;

/// Checks whether a path has a supported image extension.
///
/// The extractor rejects anything else before attempting a decode.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn accepts_supported_extensions_case_insensitively() {
        for name in ["qr.png", "photo.JPG", "scan.jpeg", "anim.gif", "pic.WebP", "old.bmp"] {
            assert!(is_supported_image(&PathBuf::from(name)), "{name}");
        }
    }

    #[test]
    fn rejects_non_image_files() {
        for name in ["notes.txt", "qr.pdf", "archive.zip", "no_extension"] {
            assert!(!is_supported_image(&PathBuf::from(name)), "{name}");
        }
    }
}
