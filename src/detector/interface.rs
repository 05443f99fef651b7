use image::GrayImage;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Radius search range in pixels, as typed by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusBounds {
    pub min: i32,
    pub max: i32,
}

pub trait CircleDetector {
    /// Finds circles in a prepared single-channel image. `threshold` is the
    /// high edge threshold. The order of the result carries no meaning.
    fn detect_circles(&self, gray: &GrayImage, threshold: f32, bounds: RadiusBounds)
        -> Vec<Circle>;
}
