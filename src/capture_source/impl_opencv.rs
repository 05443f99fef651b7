use crate::capture_source::interface::CaptureSource;
use crate::frame::Frame;
use crate::library::logger::interface::Logger;
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};
use std::sync::Arc;

pub struct CaptureSourceOpenCv {
    capture: Option<VideoCapture>,
    buffer: Mat,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CaptureSourceOpenCv {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            capture: None,
            buffer: Mat::default(),
            logger: logger.with_namespace("capture_source").with_namespace("opencv"),
        }
    }

    fn mat_to_frame(mat: &Mat) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>> {
        let continuous;
        let mat = if mat.is_continuous() {
            mat
        } else {
            continuous = mat.try_clone()?;
            &continuous
        };
        let frame = Frame::from_raw(
            mat.cols() as u32,
            mat.rows() as u32,
            mat.channels() as usize,
            mat.data_bytes()?,
        )?;
        Ok(frame)
    }
}

impl CaptureSource for CaptureSourceOpenCv {
    fn open(&mut self, device_index: i32) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.capture.is_some() {
            return Err("a camera is already open".into());
        }

        self.logger
            .info(&format!("Opening camera {}", device_index))?;
        let capture = VideoCapture::new(device_index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(format!("camera {} could not be opened", device_index).into());
        }

        self.capture = Some(capture);
        self.logger.info("Camera opened")?;
        Ok(())
    }

    fn read(&mut self) -> Option<Frame> {
        let capture = self.capture.as_mut()?;

        match capture.read(&mut self.buffer) {
            Ok(true) if !self.buffer.empty() => {}
            Ok(_) => return None,
            Err(e) => {
                let _ = self.logger.warn(&format!("Frame read failed: {}", e));
                return None;
            }
        }

        match Self::mat_to_frame(&self.buffer) {
            Ok(frame) => Some(frame),
            Err(e) => {
                let _ = self.logger.warn(&format!("Unusable frame: {}", e));
                None
            }
        }
    }

    fn release(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            if let Err(e) = capture.release() {
                let _ = self
                    .logger
                    .warn(&format!("Failed to release camera: {}", e));
            }
            let _ = self.logger.info("Camera released");
        }
    }

    fn is_opened(&self) -> bool {
        self.capture.is_some()
    }
}

impl Drop for CaptureSourceOpenCv {
    fn drop(&mut self) {
        self.release();
    }
}
