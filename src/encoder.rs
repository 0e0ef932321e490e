//! Encode pipeline: text in, rendered QR raster + exportable PNG out.
//!
//! Symbol encoding is delegated to the `qrcode` crate (automatic version
//! selection, default error correction). This module only rasterizes the
//! module grid at the requested pixel size with a fixed quiet zone and
//! PNG-encodes the result. Preview pixels and export bytes are produced
//! from the same raster so they can never diverge.

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use qrcode::{Color, QrCode};
use std::io::Cursor;

use crate::config::{MAX_SIZE_PX, MIN_SIZE_PX, QUIET_ZONE_MODULES, SIZE_STEP_PX};
use crate::error::{AppError, Result};

/// Parameters for one generation pass. Any field change triggers a full
/// regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeRequest {
    pub text: String,
    pub size_px: u32,
    pub fg_color: String,
    pub bg_color: String,
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            size_px: 256,
            fg_color: crate::config::DEFAULT_FG_COLOR.to_string(),
            bg_color: crate::config::DEFAULT_BG_COLOR.to_string(),
        }
    }
}

/// A generated QR code: raw RGBA pixels for on-screen preview plus the
/// PNG encoding of the same raster for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedQr {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Clamps a requested size into `[MIN_SIZE_PX, MAX_SIZE_PX]` and rounds
/// to the nearest `SIZE_STEP_PX` multiple. Keeps regeneration idempotent
/// while the UI slider reports continuous values.
pub fn snap_size(size_px: u32) -> u32 {
    let clamped = size_px.clamp(MIN_SIZE_PX, MAX_SIZE_PX);
    let offset = clamped - MIN_SIZE_PX;
    let steps = (offset + SIZE_STEP_PX / 2) / SIZE_STEP_PX;
    (MIN_SIZE_PX + steps * SIZE_STEP_PX).min(MAX_SIZE_PX)
}

/// Parses a `#rgb` or `#rrggbb` hex color string.
///
/// Colors are validated here rather than forwarded blindly to the
/// renderer, so a bad value fails generation with a reportable error.
pub fn parse_hex_color(value: &str) -> Result<Rgba<u8>> {
    let invalid = || AppError::InvalidColor(value.to_string());

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let channels = match hex.len() {
        3 => hex
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| (d * 16 + d) as u8)
                    .ok_or_else(invalid)
            })
            .collect::<Result<Vec<u8>>>()?,
        6 => (0..3)
            .map(|i| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid()))
            .collect::<std::result::Result<Vec<u8>, _>>()?,
        _ => return Err(invalid()),
    };

    Ok(Rgba([channels[0], channels[1], channels[2], 255]))
}

/// Generates a QR code for the request.
///
/// Deterministic: identical requests yield byte-identical output. The
/// caller is responsible for skipping generation on empty text.
pub fn generate(request: &EncodeRequest) -> Result<EncodedQr> {
    let fg = parse_hex_color(&request.fg_color)?;
    let bg = parse_hex_color(&request.bg_color)?;
    let size = snap_size(request.size_px);

    let code = QrCode::new(request.text.as_bytes())?;
    let modules = code.width() as u32;
    let total = modules + 2 * QUIET_ZONE_MODULES;

    // Map each output pixel back onto the module grid, quiet zone included.
    let raster: RgbaImage = ImageBuffer::from_fn(size, size, |x, y| {
        let mx = x * total / size;
        let my = y * total / size;
        let in_symbol = (QUIET_ZONE_MODULES..QUIET_ZONE_MODULES + modules).contains(&mx)
            && (QUIET_ZONE_MODULES..QUIET_ZONE_MODULES + modules).contains(&my);
        let dark = in_symbol
            && code[(
                (mx - QUIET_ZONE_MODULES) as usize,
                (my - QUIET_ZONE_MODULES) as usize,
            )] == Color::Dark;
        if dark { fg } else { bg }
    });

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(raster.clone())
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| AppError::PngEncode(e.to_string()))?;

    Ok(EncodedQr {
        rgba: raster.into_raw(),
        width: size,
        height: size,
        png,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> EncodeRequest {
        EncodeRequest {
            text: text.to_string(),
            ..EncodeRequest::default()
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let req = request("https://github.com");
        let first = generate(&req).unwrap();
        let second = generate(&req).unwrap();
        assert_eq!(first.png, second.png);
        assert_eq!(first.rgba, second.rgba);
    }

    #[test]
    fn export_is_a_valid_png_at_requested_size() {
        let result = generate(&request("https://github.com")).unwrap();
        assert_eq!(result.width, 256);
        assert_eq!(result.height, 256);
        let decoded = image::load_from_memory(&result.png).unwrap();
        assert_eq!(decoded.width(), 256);
        assert_eq!(decoded.height(), 256);
    }

    #[test]
    fn over_capacity_text_fails() {
        let result = generate(&request(&"a".repeat(4000)));
        assert!(matches!(result, Err(AppError::QrEncode(_))));
    }

    #[test]
    fn invalid_color_is_rejected_before_encoding() {
        let mut req = request("hello");
        req.fg_color = "not-a-color".to_string();
        assert!(matches!(generate(&req), Err(AppError::InvalidColor(_))));
    }

    #[test]
    fn parses_short_and_long_hex_colors() {
        assert_eq!(parse_hex_color("#000000").unwrap(), Rgba([0, 0, 0, 255]));
        assert_eq!(
            parse_hex_color("#ffffff").unwrap(),
            Rgba([255, 255, 255, 255])
        );
        assert_eq!(parse_hex_color("#f00").unwrap(), Rgba([255, 0, 0, 255]));
        assert_eq!(
            parse_hex_color("#1A2B3C").unwrap(),
            Rgba([0x1a, 0x2b, 0x3c, 255])
        );
        assert!(parse_hex_color("ffffff").is_err());
        assert!(parse_hex_color("#ffff").is_err());
        assert!(parse_hex_color("#gggggg").is_err());
        assert!(parse_hex_color("#aéaaa").is_err());
    }

    #[test]
    fn sizes_snap_to_step_within_bounds() {
        assert_eq!(snap_size(0), 128);
        assert_eq!(snap_size(128), 128);
        assert_eq!(snap_size(250), 256);
        assert_eq!(snap_size(260), 256);
        assert_eq!(snap_size(512), 512);
        assert_eq!(snap_size(9999), 512);
    }

    #[test]
    fn custom_colors_fill_the_raster() {
        let mut req = request("hi");
        req.fg_color = "#102030".to_string();
        req.bg_color = "#f0e0d0".to_string();
        let result = generate(&req).unwrap();

        // Corner pixel sits in the quiet zone, so it must be background.
        assert_eq!(&result.rgba[0..4], &[0xf0, 0xe0, 0xd0, 255]);
        // The foreground color must appear somewhere in the symbol.
        let has_fg = result
            .rgba
            .chunks_exact(4)
            .any(|px| px == [0x10, 0x20, 0x30, 255]);
        assert!(has_fg);
    }
}
