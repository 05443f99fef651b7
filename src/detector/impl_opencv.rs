use crate::config::HoughConfig;
use crate::detector::interface::{Circle, CircleDetector, RadiusBounds};
use crate::library::logger::interface::Logger;
use image::GrayImage;
use opencv::core::{Mat, Vec3f, Vector};
use opencv::imgproc;
use opencv::prelude::*;
use std::sync::Arc;

/// Hands the prepared image to OpenCV's gradient Hough transform.
pub struct HoughCircleDetectorOpenCv {
    config: HoughConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl HoughCircleDetectorOpenCv {
    pub fn new(config: HoughConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("detector").with_namespace("opencv"),
        }
    }

    fn hough_circles(
        &self,
        gray: &GrayImage,
        threshold: f32,
        bounds: RadiusBounds,
    ) -> Result<Vec<Circle>, Box<dyn std::error::Error + Send + Sync>> {
        let mat = Mat::new_rows_cols_with_data(
            gray.height() as i32,
            gray.width() as i32,
            gray.as_raw().as_slice(),
        )?;
        let min_dist = gray.height() as f64 / self.config.min_dist_divisor.max(1) as f64;

        let mut found = Vector::<Vec3f>::new();
        imgproc::hough_circles(
            &*mat,
            &mut found,
            imgproc::HOUGH_GRADIENT,
            self.config.accumulator_ratio as f64,
            min_dist,
            threshold as f64,
            self.config.accumulator_threshold as f64,
            bounds.min,
            bounds.max,
        )?;

        Ok(found
            .iter()
            .map(|c| Circle {
                x: c[0],
                y: c[1],
                radius: c[2],
            })
            .collect())
    }
}

impl CircleDetector for HoughCircleDetectorOpenCv {
    fn detect_circles(
        &self,
        gray: &GrayImage,
        threshold: f32,
        bounds: RadiusBounds,
    ) -> Vec<Circle> {
        if gray.width() == 0 || gray.height() == 0 {
            return vec![];
        }
        let bounds = RadiusBounds {
            min: bounds.min.max(0),
            max: bounds.max,
        };
        if bounds.max > 0 && bounds.max < bounds.min {
            return vec![];
        }

        match self.hough_circles(gray, threshold, bounds) {
            Ok(circles) => circles,
            Err(e) => {
                let _ = self.logger.warn(&format!("Circle detection failed: {}", e));
                vec![]
            }
        }
    }
}
