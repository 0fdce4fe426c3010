use std::{cell::RefCell, rc::Rc};

use crate::{foundation::core::Rgb8, volume::calc::VolumeResult};

/// Host text/indicator outputs.
pub trait ResultSink {
    /// Called after every volume recomputation.
    fn show_volume(&mut self, result: &VolumeResult);

    /// Called whenever a measured-fps window closes.
    fn show_measured_fps(&mut self, fps: u32);

    /// Called when the active variant's background changes; hosts may tint around the surface.
    fn show_background(&mut self, _color: Rgb8) {}
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl ResultSink for NullSink {
    fn show_volume(&mut self, _result: &VolumeResult) {}

    fn show_measured_fps(&mut self, _fps: u32) {}
}

/// Emits results as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ResultSink for TracingSink {
    fn show_volume(&mut self, result: &VolumeResult) {
        tracing::info!(
            frame = %result.displayed_frame_value,
            total = %result.displayed_total_value,
            alert = result.alert_triggered,
            "data volume"
        );
    }

    fn show_measured_fps(&mut self, fps: u32) {
        tracing::info!(fps, "measured fps");
    }

    fn show_background(&mut self, color: Rgb8) {
        tracing::debug!(background = %color.to_hex(), "background");
    }
}

#[derive(Clone, Debug, Default)]
pub struct SinkLog {
    pub volumes: Vec<VolumeResult>,
    pub measured_fps: Vec<u32>,
    pub backgrounds: Vec<Rgb8>,
}

/// Keeps every reported value. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    log: Rc<RefCell<SinkLog>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_volume(&self) -> Option<VolumeResult> {
        self.log.borrow().volumes.last().cloned()
    }

    pub fn volume_updates(&self) -> usize {
        self.log.borrow().volumes.len()
    }

    pub fn measured_fps(&self) -> Vec<u32> {
        self.log.borrow().measured_fps.clone()
    }

    pub fn last_background(&self) -> Option<Rgb8> {
        self.log.borrow().backgrounds.last().copied()
    }
}

impl ResultSink for RecordingSink {
    fn show_volume(&mut self, result: &VolumeResult) {
        self.log.borrow_mut().volumes.push(result.clone());
    }

    fn show_measured_fps(&mut self, fps: u32) {
        self.log.borrow_mut().measured_fps.push(fps);
    }

    fn show_background(&mut self, color: Rgb8) {
        self.log.borrow_mut().backgrounds.push(color);
    }
}
