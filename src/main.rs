use bolt_counter::main::BoltCounter;
use bolt_counter::render::BoltCounterWindow;
use capture_source::interface::CaptureSource;
use config::Config;
#[cfg(not(feature = "opencv"))]
use detector::impl_hough::HoughCircleDetector;
use detector::interface::CircleDetector;
use eframe::egui;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use std::sync::Arc;

mod bolt_counter;
mod capture_source;
mod config;
mod detector;
mod frame;
mod library;

#[cfg(feature = "opencv")]
fn build_capture_source(
    _config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Box<dyn CaptureSource> {
    Box::new(capture_source::impl_opencv::CaptureSourceOpenCv::new(logger))
}

#[cfg(not(feature = "opencv"))]
fn build_capture_source(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Box<dyn CaptureSource> {
    Box::new(capture_source::impl_synthetic::CaptureSourceSynthetic::new(
        config.synthetic_camera.clone(),
        logger,
    ))
}

#[cfg(feature = "opencv")]
fn build_detector(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn CircleDetector + Send + Sync> {
    Arc::new(detector::impl_opencv::HoughCircleDetectorOpenCv::new(
        config.hough.clone(),
        logger,
    ))
}

#[cfg(not(feature = "opencv"))]
fn build_detector(
    config: &Config,
    _logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn CircleDetector + Send + Sync> {
    Arc::new(HoughCircleDetector::new(config.hough.clone()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let capture_source = build_capture_source(&config, logger.clone());

    let detector = build_detector(&config, logger.clone());

    let bolt_counter = BoltCounter::new(config.clone(), logger.clone(), capture_source, detector);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    let _ = logger.info(&format!("Starting {}", config.window_title));

    let window = BoltCounterWindow::new(bolt_counter);
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Box::new(window)),
    )?;

    Ok(())
}
