use slint::{Image, Rgba8Pixel, SharedPixelBuffer};

/// Wraps raw RGBA pixel data into a Slint image for on-screen display.
pub fn create_slint_image(data: &[u8], width: u32, height: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(data, width, height);
    Image::from_rgba8(buffer)
}
