use crate::config::OverlayStyle;
use crate::detector::interface::Circle;
use crate::frame::Frame;
use image::Rgb;
use imageproc::drawing::draw_hollow_circle_mut;

/// Returns a copy of `frame` with every circle outlined. The radius drawn is
/// `radius * radius_scale`, truncated to whole pixels.
pub fn draw_overlay(
    frame: &Frame,
    circles: &[Circle],
    radius_scale: f32,
    style: &OverlayStyle,
) -> Frame {
    let mut canvas = frame.to_bgr_buffer();
    let color = Rgb(style.color);
    let thickness = style.thickness.max(1) as i32;

    for circle in circles {
        let center = (circle.x.round() as i32, circle.y.round() as i32);
        let radius = (circle.radius * radius_scale) as i32;
        let inner = radius - thickness / 2;
        for ring in inner..inner + thickness {
            if ring >= 0 {
                draw_hollow_circle_mut(&mut canvas, center, ring, color);
            }
        }
    }

    Frame::from_bgr_buffer(canvas)
}
