use crate::bolt_counter::core::{Effect, Event};
use crate::bolt_counter::error::SessionError;
use crate::bolt_counter::main::BoltCounter;
use crate::capture_source::display::to_display_image;
use crate::detector::overlay::draw_overlay;
use crate::detector::prepare::prepare;
use crate::frame::Frame;

impl BoltCounter {
    /// A zero-sized frame counts as an empty read.
    fn read_frame(&mut self) -> Option<Frame> {
        self.capture_source.read().filter(|frame| !frame.is_empty())
    }

    pub(super) fn run_effect(&mut self, effect: Effect) -> Option<Event> {
        if !effect.is_periodic() {
            let _ = self
                .logger
                .info(&format!("Running effect: {}", effect.to_display_string()));
        }

        match effect {
            Effect::OpenCamera { device_index } => {
                let result = self.capture_source.open(device_index);
                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .warn(&format!("Camera {} failed to open: {}", device_index, e));
                }
                Some(Event::CameraOpenDone {
                    device_index,
                    result,
                })
            }
            Effect::CaptureFirstFrame { device_index } => {
                let frame = self.read_frame();
                if frame.is_none() {
                    let _ = self
                        .logger
                        .warn(&SessionError::EmptyFrame { device_index }.to_string());
                }
                Some(Event::FirstFrameCaptured {
                    device_index,
                    frame,
                })
            }
            Effect::CaptureFrame { input } => Some(Event::FrameCaptured {
                frame: self.read_frame(),
                input,
            }),
            Effect::ProcessFrame { frame, bounds } => {
                let gray = prepare(&frame, self.config.blur_kernel_size);
                let circles = self.detector.detect_circles(
                    &gray,
                    self.config.hough.edge_threshold,
                    bounds,
                );
                let annotated = draw_overlay(
                    &frame,
                    &circles,
                    self.config.overlay.radius_scale,
                    &self.config.overlay,
                );
                Some(Event::FrameProcessed {
                    circles,
                    annotated: to_display_image(&annotated),
                })
            }
            Effect::ReleaseCamera => {
                if self.capture_source.is_opened() {
                    self.capture_source.release();
                }
                None
            }
        }
    }
}
