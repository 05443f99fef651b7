use crate::capture_source::interface::CaptureSource;
use crate::frame::Frame;
use crate::library::logger::interface::Logger;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureCalls {
    pub open_attempts: Vec<i32>,
    pub reads: usize,
    pub releases: usize,
}

pub struct CaptureSourceFake {
    logger: Arc<dyn Logger + Send + Sync>,
    available_devices: Vec<i32>,
    frames: VecDeque<Option<Frame>>,
    opened: Option<i32>,
    calls: Arc<Mutex<CaptureCalls>>,
}

impl CaptureSourceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, available_devices: Vec<i32>) -> Self {
        Self {
            logger: logger.with_namespace("capture_source").with_namespace("fake"),
            available_devices,
            frames: VecDeque::new(),
            opened: None,
            calls: Arc::new(Mutex::new(CaptureCalls::default())),
        }
    }

    /// Queues what successive reads return; `None` plays an empty read.
    pub fn with_frames(mut self, frames: impl IntoIterator<Item = Option<Frame>>) -> Self {
        self.frames.extend(frames);
        self
    }

    pub fn calls(&self) -> Arc<Mutex<CaptureCalls>> {
        self.calls.clone()
    }

    fn record(&self, f: impl FnOnce(&mut CaptureCalls)) {
        if let Ok(mut calls) = self.calls.lock() {
            f(&mut calls);
        }
    }
}

impl CaptureSource for CaptureSourceFake {
    fn open(&mut self, device_index: i32) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(|calls| calls.open_attempts.push(device_index));
        if !self.available_devices.contains(&device_index) {
            return Err(format!("no device at index {}", device_index).into());
        }
        self.logger.info(&format!("Opened device {}", device_index))?;
        self.opened = Some(device_index);
        Ok(())
    }

    fn read(&mut self) -> Option<Frame> {
        self.record(|calls| calls.reads += 1);
        self.opened?;
        self.frames.pop_front().flatten()
    }

    fn release(&mut self) {
        if self.opened.take().is_some() {
            self.record(|calls| calls.releases += 1);
            let _ = self.logger.info("Released device");
        }
    }

    fn is_opened(&self) -> bool {
        self.opened.is_some()
    }
}
