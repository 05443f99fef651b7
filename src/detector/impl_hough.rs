use crate::config::HoughConfig;
use crate::detector::interface::{Circle, CircleDetector, RadiusBounds};
use image::GrayImage;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

/// Gradient Hough transform: every edge pixel votes for centers along its
/// gradient line, strong accumulator peaks become candidate centers, and each
/// surviving center gets the radius best supported by the edge pixels.
/// Matches the smoothing `imageproc::edges::canny` applies before its own
/// gradient pass.
const EDGE_SIGMA: f32 = 1.4;

#[cfg_attr(feature = "opencv", allow(dead_code))]
pub struct HoughCircleDetector {
    config: HoughConfig,
}

impl HoughCircleDetector {
    #[cfg_attr(feature = "opencv", allow(dead_code))]
    pub fn new(config: HoughConfig) -> Self {
        Self { config }
    }
}

struct Accumulator {
    width: usize,
    height: usize,
    votes: Vec<u32>,
}

/// A center candidate: the vote-weighted centroid of a 3×3 block, in
/// accumulator cells, with the block's total votes.
struct Peak {
    x: f32,
    y: f32,
    score: u32,
}

impl Accumulator {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            votes: vec![0; width * height],
        }
    }

    /// Votes for the cell nearest to (x, y).
    fn vote(&mut self, x: f32, y: f32) -> bool {
        let (x, y) = (x + 0.5, y + 0.5);
        if x < 0.0 || y < 0.0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }
        self.votes[y * self.width + x] += 1;
        true
    }

    /// Sum of the 3×3 block around every interior cell; border cells score 0.
    fn block_scores(&self) -> Vec<u32> {
        let mut scores = vec![0; self.votes.len()];
        for y in 1..self.height.saturating_sub(1) {
            for x in 1..self.width.saturating_sub(1) {
                scores[y * self.width + x] = (y - 1..=y + 1)
                    .flat_map(|by| (x - 1..=x + 1).map(move |bx| (bx, by)))
                    .map(|(bx, by)| self.votes[by * self.width + bx])
                    .sum();
            }
        }
        scores
    }

    fn centroid(&self, x: usize, y: usize) -> (f32, f32) {
        let (mut sx, mut sy, mut total) = (0.0, 0.0, 0.0);
        for by in y - 1..=y + 1 {
            for bx in x - 1..=x + 1 {
                let v = self.votes[by * self.width + bx] as f32;
                sx += v * bx as f32;
                sy += v * by as f32;
                total += v;
            }
        }
        if total == 0.0 {
            return (x as f32, y as f32);
        }
        (sx / total, sy / total)
    }

    /// Local maxima of the block scores above `threshold`, strongest first.
    fn peaks(&self, threshold: u32) -> Vec<Peak> {
        let mut peaks = Vec::new();
        if self.width < 5 || self.height < 5 {
            return peaks;
        }
        let scores = self.block_scores();
        for y in 2..self.height - 2 {
            for x in 2..self.width - 2 {
                let i = y * self.width + x;
                let v = scores[i];
                if v > threshold
                    && v > scores[i - 1]
                    && v >= scores[i + 1]
                    && v > scores[i - self.width]
                    && v >= scores[i + self.width]
                {
                    let (cx, cy) = self.centroid(x, y);
                    peaks.push(Peak {
                        x: cx,
                        y: cy,
                        score: v,
                    });
                }
            }
        }
        peaks.sort_by(|a, b| b.score.cmp(&a.score));
        peaks
    }
}

/// Bins distances to whole multiples of `bin_width` and picks the bin whose
/// three-bin window has the most support per unit radius. Returns the mean
/// distance inside that window and how many distances fell into it.
fn best_radius(distances: &[f32], bin_width: f32) -> Option<(f32, usize)> {
    let farthest = distances.iter().copied().reduce(f32::max)?;
    let bins = (farthest / bin_width).round() as usize + 2;
    let mut counts = vec![0usize; bins];
    let mut sums = vec![0.0f32; bins];
    for &d in distances {
        let k = (d / bin_width).round() as usize;
        counts[k] += 1;
        sums[k] += d;
    }

    let window = |k: usize| k.saturating_sub(1)..=(k + 1).min(bins - 1);
    let mut best: Option<(f32, usize)> = None;
    for k in 0..bins {
        let support: usize = counts[window(k)].iter().sum();
        if support == 0 {
            continue;
        }
        let score = support as f32 / (k.max(1) as f32 * bin_width);
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, k));
        }
    }

    best.map(|(_, k)| {
        let support: usize = counts[window(k)].iter().sum();
        let total: f32 = sums[window(k)].iter().sum();
        (total / support as f32, support)
    })
}

impl CircleDetector for HoughCircleDetector {
    fn detect_circles(
        &self,
        gray: &GrayImage,
        threshold: f32,
        bounds: RadiusBounds,
    ) -> Vec<Circle> {
        let (width, height) = gray.dimensions();
        if width == 0 || height == 0 {
            return vec![];
        }

        let min_radius = bounds.min.max(0) as f32;
        let max_radius = if bounds.max <= 0 {
            width.max(height) as f32
        } else {
            bounds.max as f32
        };
        if max_radius < min_radius {
            return vec![];
        }

        let dp = self.config.accumulator_ratio.max(1.0);
        let idp = 1.0 / dp;
        let min_dist = (height as f32 / self.config.min_dist_divisor.max(1) as f32).max(dp);

        // Gradients come from the same smoothing the edge detector applies, so
        // edge pixels and their directions agree.
        let edges = canny(gray, threshold / 2.0, threshold);
        let smoothed = gaussian_blur_f32(gray, EDGE_SIGMA);
        let dx = horizontal_sobel(&smoothed);
        let dy = vertical_sobel(&smoothed);

        let mut accumulator = Accumulator::new(
            (width as f32 * idp).ceil() as usize,
            (height as f32 * idp).ceil() as usize,
        );
        let mut edge_points = Vec::new();

        for (x, y, edge) in edges.enumerate_pixels() {
            if edge.0[0] == 0 {
                continue;
            }
            let vx = dx.get_pixel(x, y).0[0] as f32;
            let vy = dy.get_pixel(x, y).0[0] as f32;
            let magnitude = (vx * vx + vy * vy).sqrt();
            if magnitude < 1.0 {
                continue;
            }
            edge_points.push((x as f32, y as f32));

            let (step_x, step_y) = (vx / magnitude * idp, vy / magnitude * idp);
            for direction in [1.0f32, -1.0] {
                let (sx, sy) = (step_x * direction, step_y * direction);
                let mut cx = x as f32 * idp + sx * min_radius;
                let mut cy = y as f32 * idp + sy * min_radius;
                let mut r = min_radius;
                while r <= max_radius {
                    if !accumulator.vote(cx, cy) {
                        break;
                    }
                    cx += sx;
                    cy += sy;
                    r += 1.0;
                }
            }
        }

        if edge_points.is_empty() {
            return vec![];
        }

        let min_dist_sq = min_dist * min_dist;
        let (min_r_sq, max_r_sq) = (min_radius * min_radius, max_radius * max_radius);
        let mut circles: Vec<Circle> = Vec::new();
        let mut distances = Vec::with_capacity(edge_points.len());

        for peak in accumulator.peaks(self.config.accumulator_threshold) {
            let (x, y) = (peak.x * dp, peak.y * dp);

            let too_close = circles.iter().any(|c| {
                let (ddx, ddy) = (c.x - x, c.y - y);
                ddx * ddx + ddy * ddy < min_dist_sq
            });
            if too_close {
                continue;
            }

            distances.clear();
            distances.extend(edge_points.iter().filter_map(|&(px, py)| {
                let d_sq = (px - x) * (px - x) + (py - y) * (py - y);
                (d_sq >= min_r_sq && d_sq <= max_r_sq).then(|| d_sq.sqrt())
            }));

            if let Some((radius, support)) = best_radius(&distances, dp) {
                if support > self.config.accumulator_threshold as usize {
                    circles.push(Circle { x, y, radius });
                }
            }
        }

        circles
    }
}
