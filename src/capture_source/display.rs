use crate::frame::Frame;
use image::RgbImage;

/// Copies a captured frame into a display-ready image, swapping capture
/// order (blue, green, red) into red, green, blue.
pub fn to_display_image(frame: &Frame) -> RgbImage {
    let data = frame
        .data()
        .chunks_exact(3)
        .flat_map(|px| [px[2], px[1], px[0]])
        .collect();

    RgbImage::from_raw(frame.width(), frame.height(), data)
        .unwrap_or_else(|| RgbImage::new(frame.width(), frame.height()))
}
