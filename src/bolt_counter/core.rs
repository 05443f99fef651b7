use crate::bolt_counter::error::SessionError;
use crate::bolt_counter::session_log::SessionLog;
use crate::bolt_counter::validate::{parse_bounds, validate_radius_input, RadiusInput};
use crate::capture_source::display::to_display_image;
use crate::detector::interface::{Circle, RadiusBounds};
use crate::frame::Frame;
use image::RgbImage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Running {
        device_index: i32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub state: SessionState,
    pub displayed_count: u32,
    /// What the live-view panel shows; the panel is hidden while `None`.
    pub live_view: Option<RgbImage>,
    pub log: SessionLog,
    pub notice: Option<SessionError>,
    pub device_prompt_open: bool,
}

impl Model {
    pub fn count_label(&self) -> String {
        format!("Circle Count: {}", self.displayed_count)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running { .. })
    }
}

#[derive(Debug)]
pub enum Event {
    StartRequested {
        input: RadiusInput,
    },
    DeviceIndexEntered {
        input: RadiusInput,
        device_index: String,
    },
    DeviceIndexCancelled,
    CameraOpenDone {
        device_index: i32,
        result: Result<(), Box<dyn std::error::Error + Send + Sync>>,
    },
    FirstFrameCaptured {
        device_index: i32,
        frame: Option<Frame>,
    },
    Tick {
        input: RadiusInput,
    },
    FrameCaptured {
        frame: Option<Frame>,
        input: RadiusInput,
    },
    FrameProcessed {
        circles: Vec<Circle>,
        annotated: RgbImage,
    },
    StopRequested,
    ConfirmCountRequested,
    NoticeDismissed,
}

fn describe_frame(frame: &Option<Frame>) -> String {
    match frame {
        Some(frame) => format!("Some({}x{})", frame.width(), frame.height()),
        None => "None".to_string(),
    }
}

impl Event {
    /// Ticks and the per-frame results they produce.
    pub fn is_periodic(&self) -> bool {
        matches!(
            self,
            Event::Tick { .. } | Event::FrameCaptured { .. } | Event::FrameProcessed { .. }
        )
    }

    pub fn to_display_string(&self) -> String {
        match self {
            Event::FirstFrameCaptured {
                device_index,
                frame,
            } => format!(
                "FirstFrameCaptured {{ device_index: {}, frame: {} }}",
                device_index,
                describe_frame(frame)
            ),
            Event::FrameCaptured { frame, input } => format!(
                "FrameCaptured {{ frame: {}, input: {:?} }}",
                describe_frame(frame),
                input
            ),
            Event::FrameProcessed { circles, annotated } => format!(
                "FrameProcessed {{ circles: {}, annotated: {}x{} }}",
                circles.len(),
                annotated.width(),
                annotated.height()
            ),
            event => format!("{:?}", event),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    OpenCamera { device_index: i32 },
    CaptureFirstFrame { device_index: i32 },
    CaptureFrame { input: RadiusInput },
    ProcessFrame { frame: Frame, bounds: RadiusBounds },
    ReleaseCamera,
}

impl Effect {
    pub fn is_periodic(&self) -> bool {
        matches!(self, Effect::CaptureFrame { .. } | Effect::ProcessFrame { .. })
    }

    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ProcessFrame { frame, bounds } => format!(
                "ProcessFrame {{ frame: {}x{}, bounds: {:?} }}",
                frame.width(),
                frame.height(),
                bounds
            ),
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match (model.state, event) {
        // Starting
        (SessionState::Idle, Event::StartRequested { input }) => {
            match validate_radius_input(&input) {
                Ok(_) => (
                    Model {
                        device_prompt_open: true,
                        ..model
                    },
                    vec![],
                ),
                Err(e) => (
                    Model {
                        notice: Some(e.into()),
                        ..model
                    },
                    vec![],
                ),
            }
        }
        (
            SessionState::Idle,
            Event::DeviceIndexEntered {
                input,
                device_index,
            },
        ) => {
            let model = Model {
                device_prompt_open: false,
                ..model
            };
            if let Err(e) = validate_radius_input(&input) {
                return (
                    Model {
                        notice: Some(e.into()),
                        ..model
                    },
                    vec![],
                );
            }
            match device_index.trim().parse::<i32>() {
                Ok(device_index) => (model, vec![Effect::OpenCamera { device_index }]),
                Err(_) => (
                    Model {
                        notice: Some(SessionError::InvalidDeviceIndex(device_index)),
                        ..model
                    },
                    vec![],
                ),
            }
        }
        (_, Event::DeviceIndexCancelled) => (
            Model {
                device_prompt_open: false,
                ..model
            },
            vec![],
        ),
        (
            SessionState::Idle,
            Event::CameraOpenDone {
                device_index,
                result,
            },
        ) => match result {
            Ok(()) => (model, vec![Effect::CaptureFirstFrame { device_index }]),
            Err(e) => (
                Model {
                    notice: Some(SessionError::DeviceOpen {
                        device_index,
                        reason: e.to_string(),
                    }),
                    ..model
                },
                vec![],
            ),
        },
        (
            SessionState::Idle,
            Event::FirstFrameCaptured {
                device_index,
                frame,
            },
        ) => match frame {
            Some(frame) => (
                Model {
                    state: SessionState::Running { device_index },
                    displayed_count: 0,
                    live_view: Some(to_display_image(&frame)),
                    ..model
                },
                vec![],
            ),
            None => (model, vec![Effect::ReleaseCamera]),
        },

        // Running
        (SessionState::Running { .. }, Event::Tick { input }) => {
            (model, vec![Effect::CaptureFrame { input }])
        }
        (
            SessionState::Running { .. },
            Event::FrameCaptured {
                frame: Some(frame),
                input,
            },
        ) => match parse_bounds(&input) {
            Ok(bounds) => (model, vec![Effect::ProcessFrame { frame, bounds }]),
            Err(_) => (model, vec![]),
        },
        (SessionState::Running { .. }, Event::FrameProcessed { circles, annotated }) => (
            Model {
                displayed_count: circles.len() as u32,
                live_view: Some(annotated),
                ..model
            },
            vec![],
        ),
        (SessionState::Running { .. }, Event::StopRequested) => (
            Model {
                state: SessionState::Idle,
                displayed_count: 0,
                live_view: None,
                ..model
            },
            vec![Effect::ReleaseCamera],
        ),

        // Any state
        (_, Event::ConfirmCountRequested) => {
            let mut model = model;
            model.log.append(model.displayed_count);
            (model, vec![])
        }
        (_, Event::NoticeDismissed) => (
            Model {
                notice: None,
                ..model
            },
            vec![],
        ),

        _ => (model, vec![]),
    }
}
