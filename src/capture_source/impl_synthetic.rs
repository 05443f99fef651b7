use crate::capture_source::interface::CaptureSource;
use crate::config::SyntheticCameraConfig;
use crate::frame::Frame;
use crate::library::logger::interface::Logger;
use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_circle_mut;
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;

const BACKGROUND: u8 = 60;
const BOLT: u8 = 210;
const BOLT_SPACING: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bolt {
    x: i32,
    y: i32,
    radius: i32,
}

/// Stands in for a webcam: renders bright discs on a noisy background and
/// moves them around every few seconds.
pub struct CaptureSourceSynthetic {
    config: SyntheticCameraConfig,
    logger: Arc<dyn Logger + Send + Sync>,
    opened: Option<i32>,
    bolts: Vec<Bolt>,
    arranged_at: Option<Instant>,
}

impl CaptureSourceSynthetic {
    pub fn new(config: SyntheticCameraConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("capture_source").with_namespace("synthetic"),
            opened: None,
            bolts: Vec::new(),
            arranged_at: None,
        }
    }

    fn arrange(&self) -> Vec<Bolt> {
        let mut rng = rand::rng();
        let (width, height) = (self.config.width as i32, self.config.height as i32);
        let (min_radius, max_radius) = self.config.bolt_radius_range;
        let target = rng.random_range(0..=self.config.max_bolts);

        let mut bolts: Vec<Bolt> = Vec::with_capacity(target);
        for _ in 0..target * 20 {
            if bolts.len() == target {
                break;
            }
            let radius = rng.random_range(min_radius..=max_radius.max(min_radius)) as i32;
            let margin = radius + BOLT_SPACING;
            if width <= 2 * margin || height <= 2 * margin {
                continue;
            }
            let candidate = Bolt {
                x: rng.random_range(margin..width - margin),
                y: rng.random_range(margin..height - margin),
                radius,
            };
            let overlaps = bolts.iter().any(|bolt| {
                let (dx, dy) = (bolt.x - candidate.x, bolt.y - candidate.y);
                let reach = bolt.radius + candidate.radius + BOLT_SPACING;
                dx * dx + dy * dy < reach * reach
            });
            if !overlaps {
                bolts.push(candidate);
            }
        }
        bolts
    }

    fn render(&self) -> Frame {
        let mut rng = rand::rng();
        let mut image = GrayImage::from_fn(self.config.width, self.config.height, |_, _| {
            Luma([BACKGROUND + rng.random_range(0..8)])
        });
        for bolt in &self.bolts {
            draw_filled_circle_mut(&mut image, (bolt.x, bolt.y), bolt.radius, Luma([BOLT]));
        }
        Frame::from_gray_image(&image)
    }
}

impl CaptureSource for CaptureSourceSynthetic {
    fn open(&mut self, device_index: i32) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.opened.is_some() {
            return Err("synthetic camera is already open".into());
        }
        self.logger
            .info(&format!("Opening synthetic device {}", device_index))?;
        self.opened = Some(device_index);
        self.arranged_at = None;
        Ok(())
    }

    fn read(&mut self) -> Option<Frame> {
        self.opened?;

        let now = Instant::now();
        let stale = self
            .arranged_at
            .map_or(true, |at| now.duration_since(at) >= self.config.rearrange_every);
        if stale {
            self.bolts = self.arrange();
            self.arranged_at = Some(now);
        }

        Some(self.render())
    }

    fn release(&mut self) {
        if let Some(device_index) = self.opened.take() {
            let _ = self
                .logger
                .info(&format!("Released synthetic device {}", device_index));
        }
    }

    fn is_opened(&self) -> bool {
        self.opened.is_some()
    }
}
