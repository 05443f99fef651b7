use crate::bolt_counter::core::{init, Model};
use crate::capture_source::interface::CaptureSource;
use crate::config::Config;
use crate::detector::interface::CircleDetector;
use crate::library::logger::interface::Logger;
use crate::library::ticker::Ticker;
use std::sync::Arc;

/// Owns the session model and the devices its effects run against.
pub struct BoltCounter {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub capture_source: Box<dyn CaptureSource>,
    pub detector: Arc<dyn CircleDetector + Send + Sync>,
    pub(super) model: Model,
    pub(super) ticker: Ticker,
}

impl BoltCounter {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        capture_source: Box<dyn CaptureSource>,
        detector: Arc<dyn CircleDetector + Send + Sync>,
    ) -> Self {
        let (model, effects) = init();
        let ticker = Ticker::new(config.tick_rate);

        let mut bolt_counter = Self {
            config,
            logger: logger.with_namespace("bolt_counter"),
            capture_source,
            detector,
            model,
            ticker,
        };
        bolt_counter.run_effects(effects);
        bolt_counter
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}
