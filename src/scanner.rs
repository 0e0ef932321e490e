//! Decode pipeline: image bytes in, extracted QR text out.
//!
//! Symbol detection and decoding (finder patterns, perspective
//! correction, Reed-Solomon) are delegated to `rqrr`; this module only
//! normalizes the input into a grayscale frame and invokes it. The
//! decoded payload is returned verbatim, with no post-processing.

use image::GrayImage;
use log::debug;

use crate::error::{AppError, Result};

/// Decodes a QR code from compressed image bytes (PNG/JPEG/GIF/WebP/BMP).
pub fn decode_bytes(bytes: &[u8]) -> Result<String> {
    let img = image::load_from_memory(bytes)?;
    decode_luma(img.to_luma8())
}

/// Decodes a QR code from raw RGBA pixels (clipboard paste path).
pub fn decode_rgba(rgba: &[u8], width: u32, height: u32) -> Result<String> {
    let buffer = image::RgbaImage::from_raw(width, height, rgba.to_vec())
        .ok_or_else(|| AppError::ImageLoad("pixel buffer size mismatch".to_string()))?;
    decode_luma(image::DynamicImage::ImageRgba8(buffer).to_luma8())
}

/// Runs detection over a full grayscale frame and decodes the first grid
/// found. An undecodable grid counts as "no QR code" as far as the user
/// is concerned.
fn decode_luma(gray: GrayImage) -> Result<String> {
    let (width, height) = gray.dimensions();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        width as usize,
        height as usize,
        |x, y| gray.get_pixel(x as u32, y as u32)[0],
    );

    let grids = prepared.detect_grids();
    debug!("Detected {} grid(s) in {}x{} frame", grids.len(), width, height);

    let grid = grids.first().ok_or(AppError::NoQrFound)?;
    let (_meta, text) = grid.decode().map_err(|_| AppError::NoQrFound)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{self, EncodeRequest};

    fn generated(text: &str) -> crate::encoder::EncodedQr {
        encoder::generate(&EncodeRequest {
            text: text.to_string(),
            ..EncodeRequest::default()
        })
        .unwrap()
    }

    #[test]
    fn round_trips_generated_png() {
        let qr = generated("https://github.com");
        assert_eq!(decode_bytes(&qr.png).unwrap(), "https://github.com");
    }

    #[test]
    fn wifi_payload_passes_through_verbatim() {
        let payload = "WIFI:T:WPA;S:MyNetwork;P:MyPassword;;";
        let qr = generated(payload);
        assert_eq!(decode_bytes(&qr.png).unwrap(), payload);
    }

    #[test]
    fn round_trips_raw_rgba_pixels() {
        let qr = generated("hello clipboard");
        let text = decode_rgba(&qr.rgba, qr.width, qr.height).unwrap();
        assert_eq!(text, "hello clipboard");
    }

    #[test]
    fn blank_image_reports_no_symbol() {
        let blank = image::RgbaImage::from_pixel(256, 256, image::Rgba([255, 255, 255, 255]));
        let mut png = Vec::new();
        image::DynamicImage::ImageRgba8(blank)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        assert!(matches!(decode_bytes(&png), Err(AppError::NoQrFound)));
    }

    #[test]
    fn garbage_bytes_report_load_failure() {
        let result = decode_bytes(b"definitely not an image");
        assert!(matches!(result, Err(AppError::ImageLoad(_))));
    }

    #[test]
    fn load_failure_and_no_symbol_have_distinct_messages() {
        assert_eq!(AppError::ImageLoad(String::new()).to_string(), "Failed to load image");
        assert_eq!(
            AppError::NoQrFound.to_string(),
            "No QR code found in the image. Please try another image."
        );
    }

    #[test]
    fn mismatched_rgba_buffer_is_a_load_failure() {
        assert!(matches!(
            decode_rgba(&[0u8; 16], 100, 100),
            Err(AppError::ImageLoad(_))
        ));
    }
}
