use image::{GrayImage, ImageBuffer, Rgb, RgbImage};
use thiserror::Error;

pub const CHANNELS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("frame buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("unsupported channel count {0}")]
    UnsupportedChannels(usize),
}

/// One captured image, three interleaved bytes per pixel in capture order
/// (blue, green, red).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    pub fn from_bgr(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(FrameError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Accepts gray, BGR or BGRA buffers and normalizes them to BGR.
    #[cfg_attr(not(feature = "opencv"), allow(dead_code))]
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: usize,
        data: &[u8],
    ) -> Result<Self, FrameError> {
        if !matches!(channels, 1 | 3 | 4) {
            return Err(FrameError::UnsupportedChannels(channels));
        }
        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(FrameError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        let bgr = match channels {
            1 => data.iter().flat_map(|&v| [v, v, v]).collect(),
            4 => data
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            _ => data.to_vec(),
        };

        Self::from_bgr(width, height, bgr)
    }

    pub fn from_gray_image(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.as_raw().iter().flat_map(|&v| [v, v, v]).collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The buffer as an image whose pixel channels stay in capture order.
    pub(crate) fn to_bgr_buffer(&self) -> RgbImage {
        ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| RgbImage::new(self.width, self.height))
    }

    pub(crate) fn from_bgr_buffer(buffer: RgbImage) -> Self {
        let (width, height) = buffer.dimensions();
        Self {
            width,
            height,
            data: buffer.into_raw(),
        }
    }
}
