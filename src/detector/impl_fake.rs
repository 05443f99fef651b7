use crate::detector::interface::{Circle, CircleDetector, RadiusBounds};
use image::GrayImage;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Hands out scripted detections in order, then nothing.
pub struct CircleDetectorFake {
    scripted: Mutex<VecDeque<Vec<Circle>>>,
    seen_bounds: Mutex<Vec<RadiusBounds>>,
}

impl CircleDetectorFake {
    pub fn new(scripted: impl IntoIterator<Item = Vec<Circle>>) -> Self {
        Self {
            scripted: Mutex::new(scripted.into_iter().collect()),
            seen_bounds: Mutex::new(Vec::new()),
        }
    }

    /// `count` circles spaced along the top of the frame.
    pub fn circles(count: usize) -> Vec<Circle> {
        (0..count)
            .map(|i| Circle {
                x: 10.0 + 20.0 * i as f32,
                y: 10.0,
                radius: 5.0,
            })
            .collect()
    }

    pub fn seen_bounds(&self) -> Vec<RadiusBounds> {
        self.seen_bounds
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl CircleDetector for CircleDetectorFake {
    fn detect_circles(
        &self,
        _gray: &GrayImage,
        _threshold: f32,
        bounds: RadiusBounds,
    ) -> Vec<Circle> {
        if let Ok(mut seen) = self.seen_bounds.lock() {
            seen.push(bounds);
        }
        self.scripted
            .lock()
            .ok()
            .and_then(|mut scripted| scripted.pop_front())
            .unwrap_or_default()
    }
}
