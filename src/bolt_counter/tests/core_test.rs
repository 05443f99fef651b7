#[cfg(test)]
mod core_test {
    use crate::bolt_counter::core::{init, transition, Effect, Event, Model, SessionState};
    use crate::bolt_counter::error::{SessionError, ValidationError};
    use crate::bolt_counter::validate::RadiusInput;
    use crate::detector::interface::{Circle, RadiusBounds};
    use crate::frame::Frame;
    use image::RgbImage;

    fn frame() -> Frame {
        Frame::from_bgr(4, 2, vec![7; 4 * 2 * 3]).unwrap()
    }

    fn input(min: &str, max: &str) -> RadiusInput {
        RadiusInput::new(min, max)
    }

    fn running() -> Model {
        Model {
            state: SessionState::Running { device_index: 0 },
            live_view: Some(RgbImage::new(4, 2)),
            ..Model::default()
        }
    }

    fn circles(count: usize) -> Vec<Circle> {
        vec![
            Circle {
                x: 1.0,
                y: 1.0,
                radius: 1.0
            };
            count
        ]
    }

    #[test]
    fn test_init() {
        let (model, effects) = init();

        assert_eq!(model.state, SessionState::Idle);
        assert_eq!(model.count_label(), "Circle Count: 0");
        assert!(model.live_view.is_none());
        assert!(model.log.is_empty());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_start_with_valid_input_opens_prompt() {
        let (model, effects) = transition(
            Model::default(),
            Event::StartRequested {
                input: input("5", "50"),
            },
        );

        assert!(model.device_prompt_open);
        assert_eq!(model.notice, None);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_start_with_invalid_input_sets_notice() {
        let cases = [
            (input("", "50"), ValidationError::MissingRadius),
            (input("5", "abc"), ValidationError::NonNumericRadius),
            (input("50", "5"), ValidationError::RadiusOrder),
        ];

        for (input, expected) in cases {
            let (model, effects) = transition(Model::default(), Event::StartRequested { input });

            assert_eq!(model.state, SessionState::Idle);
            assert!(!model.device_prompt_open);
            assert_eq!(model.notice, Some(SessionError::Validation(expected)));
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn test_device_index_opens_camera() {
        let model = Model {
            device_prompt_open: true,
            ..Model::default()
        };

        let (model, effects) = transition(
            model,
            Event::DeviceIndexEntered {
                input: input("5", "50"),
                device_index: " 2 ".to_string(),
            },
        );

        assert!(!model.device_prompt_open);
        assert_eq!(effects, vec![Effect::OpenCamera { device_index: 2 }]);
    }

    #[test]
    fn test_negative_device_index_is_passed_to_camera() {
        let (_, effects) = transition(
            Model::default(),
            Event::DeviceIndexEntered {
                input: input("5", "50"),
                device_index: "-1".to_string(),
            },
        );

        assert_eq!(effects, vec![Effect::OpenCamera { device_index: -1 }]);
    }

    #[test]
    fn test_non_integer_device_index_sets_notice() {
        let (model, effects) = transition(
            Model::default(),
            Event::DeviceIndexEntered {
                input: input("5", "50"),
                device_index: "front".to_string(),
            },
        );

        assert_eq!(
            model.notice,
            Some(SessionError::InvalidDeviceIndex("front".to_string()))
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_input_is_validated_again_when_index_entered() {
        let (model, effects) = transition(
            Model::default(),
            Event::DeviceIndexEntered {
                input: input("", "50"),
                device_index: "0".to_string(),
            },
        );

        assert_eq!(
            model.notice,
            Some(SessionError::Validation(ValidationError::MissingRadius))
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_cancelled_prompt_closes() {
        let model = Model {
            device_prompt_open: true,
            ..Model::default()
        };

        let (model, effects) = transition(model, Event::DeviceIndexCancelled);

        assert!(!model.device_prompt_open);
        assert_eq!(model.state, SessionState::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_camera_open_flow() {
        let (model, effects) = transition(
            Model::default(),
            Event::CameraOpenDone {
                device_index: 1,
                result: Ok(()),
            },
        );
        assert_eq!(effects, vec![Effect::CaptureFirstFrame { device_index: 1 }]);

        let (model, effects) = transition(
            model,
            Event::FirstFrameCaptured {
                device_index: 1,
                frame: Some(frame()),
            },
        );

        assert_eq!(model.state, SessionState::Running { device_index: 1 });
        assert_eq!(model.displayed_count, 0);
        let live_view = model.live_view.unwrap();
        assert_eq!(live_view.dimensions(), (4, 2));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_camera_open_failure_stays_idle() {
        let (model, effects) = transition(
            Model::default(),
            Event::CameraOpenDone {
                device_index: 3,
                result: Err("no such device".into()),
            },
        );

        assert_eq!(model.state, SessionState::Idle);
        assert_eq!(
            model.notice,
            Some(SessionError::DeviceOpen {
                device_index: 3,
                reason: "no such device".to_string()
            })
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_empty_first_frame_releases_camera_without_notice() {
        let (model, effects) = transition(
            Model::default(),
            Event::FirstFrameCaptured {
                device_index: 0,
                frame: None,
            },
        );

        assert_eq!(model, Model::default());
        assert_eq!(effects, vec![Effect::ReleaseCamera]);
    }

    #[test]
    fn test_tick_captures_frame_with_current_input() {
        let (_, effects) = transition(
            running(),
            Event::Tick {
                input: input("7", "9"),
            },
        );

        assert_eq!(
            effects,
            vec![Effect::CaptureFrame {
                input: input("7", "9")
            }]
        );
    }

    #[test]
    fn test_tick_while_idle_does_nothing() {
        let (model, effects) = transition(
            Model::default(),
            Event::Tick {
                input: input("5", "50"),
            },
        );

        assert_eq!(model, Model::default());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_captured_frame_is_processed_with_unvalidated_bounds() {
        let (_, effects) = transition(
            running(),
            Event::FrameCaptured {
                frame: Some(frame()),
                input: input("60", "10"),
            },
        );

        assert_eq!(
            effects,
            vec![Effect::ProcessFrame {
                frame: frame(),
                bounds: RadiusBounds { min: 60, max: 10 },
            }]
        );
    }

    #[test]
    fn test_unparsable_bounds_skip_the_tick() {
        let (model, effects) = transition(
            running(),
            Event::FrameCaptured {
                frame: Some(frame()),
                input: input("", "10"),
            },
        );

        assert_eq!(model, running());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_empty_frame_leaves_model_unchanged() {
        let before = Model {
            displayed_count: 4,
            ..running()
        };

        let (model, effects) = transition(
            before.clone(),
            Event::FrameCaptured {
                frame: None,
                input: input("5", "50"),
            },
        );

        assert_eq!(model, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_processed_frame_updates_count_and_view() {
        let (model, effects) = transition(
            running(),
            Event::FrameProcessed {
                circles: circles(3),
                annotated: RgbImage::new(8, 8),
            },
        );

        assert_eq!(model.count_label(), "Circle Count: 3");
        assert_eq!(model.live_view.unwrap().dimensions(), (8, 8));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_stop_resets_and_releases() {
        let model = Model {
            displayed_count: 9,
            ..running()
        };

        let (model, effects) = transition(model, Event::StopRequested);

        assert_eq!(model.state, SessionState::Idle);
        assert_eq!(model.displayed_count, 0);
        assert!(model.live_view.is_none());
        assert_eq!(effects, vec![Effect::ReleaseCamera]);
    }

    #[test]
    fn test_stop_while_idle_does_nothing() {
        let (model, effects) = transition(Model::default(), Event::StopRequested);

        assert_eq!(model, Model::default());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_confirm_appends_displayed_count() {
        let model = Model {
            displayed_count: 3,
            ..running()
        };

        let (model, _) = transition(model, Event::ConfirmCountRequested);
        let (model, effects) = transition(
            Model {
                displayed_count: 2,
                ..model
            },
            Event::ConfirmCountRequested,
        );

        let sums: Vec<(u32, u64)> = model
            .log
            .entries()
            .iter()
            .map(|entry| (entry.count, entry.cumulative_sum))
            .collect();
        assert_eq!(sums, vec![(3, 3), (2, 5)]);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_notice_dismissed() {
        let model = Model {
            notice: Some(SessionError::Validation(ValidationError::RadiusOrder)),
            ..Model::default()
        };

        let (model, _) = transition(model, Event::NoticeDismissed);

        assert_eq!(model.notice, None);
    }

    #[test]
    fn test_display_strings_elide_frames() {
        let event = Event::FrameCaptured {
            frame: Some(frame()),
            input: input("5", "50"),
        };
        let effect = Effect::ProcessFrame {
            frame: frame(),
            bounds: RadiusBounds { min: 5, max: 50 },
        };

        assert!(event.to_display_string().contains("Some(4x2)"));
        assert!(effect.to_display_string().contains("frame: 4x2"));
        assert!(!effect.to_display_string().contains("data"));
    }
}
