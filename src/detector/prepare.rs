use crate::frame::Frame;
use image::GrayImage;
use imageproc::filter::box_filter;

// Fixed-point luma weights, scaled by 2^14.
const WEIGHT_R: u32 = 4899;
const WEIGHT_G: u32 = 9617;
const WEIGHT_B: u32 = 1868;
const SHIFT: u32 = 14;

pub fn to_gray(frame: &Frame) -> GrayImage {
    let data = frame
        .data()
        .chunks_exact(3)
        .map(|px| {
            let (b, g, r) = (px[0] as u32, px[1] as u32, px[2] as u32);
            ((r * WEIGHT_R + g * WEIGHT_G + b * WEIGHT_B + (1 << (SHIFT - 1))) >> SHIFT) as u8
        })
        .collect();

    GrayImage::from_raw(frame.width(), frame.height(), data)
        .unwrap_or_else(|| GrayImage::new(frame.width(), frame.height()))
}

/// Converts to intensity and smooths with a `kernel_size` square mean filter
/// so edge detection is not dominated by pixel noise.
pub fn prepare(frame: &Frame, kernel_size: u32) -> GrayImage {
    let gray = to_gray(frame);
    let radius = kernel_size / 2;
    if radius == 0 || gray.width() == 0 || gray.height() == 0 {
        return gray;
    }
    box_filter(&gray, radius, radius)
}
