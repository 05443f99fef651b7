use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct HoughConfig {
    /// Inverse ratio of accumulator resolution to image resolution.
    pub accumulator_ratio: f32,
    /// Minimum distance between centers is the image height divided by this.
    pub min_dist_divisor: u32,
    /// High threshold handed to the edge detector; the low one is half of it.
    pub edge_threshold: f32,
    pub accumulator_threshold: u32,
}

impl Default for HoughConfig {
    fn default() -> Self {
        Self {
            accumulator_ratio: 1.0,
            min_dist_divisor: 12,
            edge_threshold: 100.0,
            accumulator_threshold: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Capture channel order (blue, green, red).
    pub color: [u8; 3],
    pub thickness: u32,
    pub radius_scale: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: [0, 255, 0],
            thickness: 4,
            radius_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SyntheticCameraConfig {
    pub width: u32,
    pub height: u32,
    pub max_bolts: usize,
    pub bolt_radius_range: (u32, u32),
    pub rearrange_every: Duration,
}

impl Default for SyntheticCameraConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_bolts: 6,
            bolt_radius_range: (18, 36),
            rearrange_every: Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub logger_timezone: chrono::FixedOffset,
    pub hough: HoughConfig,
    pub blur_kernel_size: u32,
    pub overlay: OverlayStyle,
    pub default_device_index: i32,
    pub synthetic_camera: SyntheticCameraConfig,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(33),
            logger_timezone: local_offset(),
            hough: HoughConfig::default(),
            blur_kernel_size: 3,
            overlay: OverlayStyle::default(),
            default_device_index: 0,
            synthetic_camera: SyntheticCameraConfig::default(),
            window_title: "Real-Time Bolt Counting".to_string(),
            window_size: [800.0, 500.0],
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
