use crate::bolt_counter::core::{transition, Effect, Event};
use crate::bolt_counter::main::BoltCounter;
use crate::bolt_counter::validate::RadiusInput;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

impl BoltCounter {
    /// Feeds `event` through the state machine and keeps going until every
    /// effect it caused has reported back.
    pub fn dispatch(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            if !event.is_periodic() {
                let _ = self
                    .logger
                    .info(&format!("event: {}", event.to_display_string()));
            }

            let was_running = self.model.is_running();
            let model = std::mem::take(&mut self.model);
            let (model, effects) = transition(model, event);
            self.model = model;

            match (was_running, self.model.is_running()) {
                (false, true) => {
                    let _ = self
                        .logger
                        .info(&format!("Session started: {:?}", self.model.state));
                    self.ticker.start(Instant::now());
                }
                (true, false) => {
                    let _ = self.logger.info("Session stopped");
                    self.ticker.stop();
                }
                _ => {}
            }

            for effect in effects {
                if let Some(event) = self.run_effect(effect) {
                    queue.push_back(event);
                }
            }
        }
    }

    pub(super) fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            if let Some(event) = self.run_effect(effect) {
                self.dispatch(event);
            }
        }
    }

    /// Runs one tick when due. Returns how long until the next one, or `None`
    /// while no session is running.
    pub fn poll(&mut self, now: Instant, input: &RadiusInput) -> Option<Duration> {
        if !self.ticker.is_active() {
            return None;
        }
        if self.ticker.poll(now) {
            self.dispatch(Event::Tick {
                input: input.clone(),
            });
        }
        self.ticker.time_until_due(now)
    }
}
