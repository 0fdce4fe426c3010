//! Frame-paced playback state machine.
//!
//! ```text
//! Stopped --play--> Playing --pause | duration cap--> Stopped
//!    ^                                                   |
//!    +------------------- reset (from any state) --------+
//! ```

use crate::{
    foundation::core::FrameIndex,
    foundation::error::RawscopeResult,
    params::model::ParameterModel,
    playback::clock::{TickHandle, TickSource},
};

const FPS_WINDOW_MS: f64 = 1000.0;

/// What happens once playback has run for the configured duration.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EndPolicy {
    /// Self-pause once elapsed time exceeds the duration.
    StopAfterDuration,
    /// Keep playing and report measured fps over rolling 1 s windows.
    #[default]
    RunIndefinitely,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Stopped,
    Playing,
}

/// Snapshot of the scheduler's mutable state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleState {
    pub is_playing: bool,
    pub frame_index: FrameIndex,
    pub last_frame_ms: f64,
    pub playback_start_ms: f64,
    /// Last measured frames per second; only tracked under [`EndPolicy::RunIndefinitely`].
    pub measured_fps: Option<u32>,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            is_playing: false,
            frame_index: FrameIndex(0),
            last_frame_ms: 0.0,
            playback_start_ms: 0.0,
            measured_fps: None,
        }
    }
}

impl ScheduleState {
    pub fn phase(&self) -> PlaybackPhase {
        if self.is_playing {
            PlaybackPhase::Playing
        } else {
            PlaybackPhase::Stopped
        }
    }
}

/// Pacing derived from the parameter model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub interval_ms: f64,
    pub duration_ms: f64,
}

impl Timing {
    pub fn from_model(model: &ParameterModel) -> Self {
        Self {
            interval_ms: model.frame_interval_ms(),
            duration_ms: f64::from(model.duration_secs()) * 1000.0,
        }
    }
}

/// Result of handing one host tick to the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; the tick was stale and ignored.
    Idle,
    /// Too early for the next frame.
    Dropped,
    /// `frame` was rendered. `measured_fps` is set when a measurement window closed.
    Admitted {
        frame: FrameIndex,
        measured_fps: Option<u32>,
    },
    /// The duration cap was exceeded and playback stopped.
    Finished,
}

#[derive(Clone, Copy, Debug, Default)]
struct FpsMeter {
    window_start_ms: f64,
    frames: u32,
}

impl FpsMeter {
    fn restart(&mut self, now_ms: f64) {
        self.window_start_ms = now_ms;
        self.frames = 0;
    }

    fn record(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        let window = now_ms - self.window_start_ms;
        if window < FPS_WINDOW_MS {
            return None;
        }
        let fps = (1000.0 / window * f64::from(self.frames)).round() as u32;
        self.restart(now_ms);
        Some(fps)
    }
}

/// Owns play/pause/reset state and admits host ticks at the target frame rate.
///
/// At most one tick request is outstanding at a time; `pause` and `reset`
/// cancel it so no stale tick renders after a stop.
pub struct PlaybackScheduler {
    policy: EndPolicy,
    timing: Timing,
    state: ScheduleState,
    meter: FpsMeter,
    ticks: Box<dyn TickSource>,
    pending: Option<TickHandle>,
}

impl std::fmt::Debug for PlaybackScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackScheduler")
            .field("policy", &self.policy)
            .field("timing", &self.timing)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl PlaybackScheduler {
    pub fn new(policy: EndPolicy, timing: Timing, ticks: Box<dyn TickSource>) -> Self {
        Self {
            policy,
            timing,
            state: ScheduleState::default(),
            meter: FpsMeter::default(),
            ticks,
            pending: None,
        }
    }

    pub fn state(&self) -> ScheduleState {
        self.state
    }

    pub fn policy(&self) -> EndPolicy {
        self.policy
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    pub fn has_pending_tick(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts playback from frame 0. Returns `false` if already playing.
    pub fn play(&mut self, now_ms: f64) -> bool {
        if self.state.is_playing {
            return false;
        }
        self.state.is_playing = true;
        self.state.frame_index = FrameIndex(0);
        self.state.playback_start_ms = now_ms;
        self.state.last_frame_ms = now_ms;
        self.meter.restart(now_ms);
        self.request();
        tracing::debug!(now_ms, "playback started");
        true
    }

    /// Stops playback, keeping the frame index. Returns `false` if already stopped.
    pub fn pause(&mut self) -> bool {
        if let Some(h) = self.pending.take() {
            self.ticks.cancel_tick(h);
        }
        if !self.state.is_playing {
            return false;
        }
        self.state.is_playing = false;
        tracing::debug!(frame = self.state.frame_index.0, "playback paused");
        true
    }

    /// Pauses and rewinds to frame 0.
    pub fn reset(&mut self) {
        self.pause();
        self.state.frame_index = FrameIndex(0);
        tracing::debug!("playback reset");
    }

    /// Rewinds the frame counter without changing the play state.
    pub fn restart_count(&mut self) {
        self.state.frame_index = FrameIndex(0);
    }

    /// Handles one host tick at `now_ms`, calling `render` for an admitted frame.
    ///
    /// A render error stops playback and is returned as-is; nothing is retried.
    pub fn tick<F>(&mut self, now_ms: f64, render: F) -> RawscopeResult<TickOutcome>
    where
        F: FnOnce(FrameIndex) -> RawscopeResult<()>,
    {
        // The fired handle is normally this one; cancelling it is then a no-op.
        if let Some(h) = self.pending.take() {
            self.ticks.cancel_tick(h);
        }
        if !self.state.is_playing {
            return Ok(TickOutcome::Idle);
        }

        if self.policy == EndPolicy::StopAfterDuration
            && now_ms - self.state.playback_start_ms > self.timing.duration_ms
        {
            self.pause();
            tracing::debug!(
                frames = self.state.frame_index.0,
                "duration reached, playback stopped"
            );
            return Ok(TickOutcome::Finished);
        }

        let elapsed = now_ms - self.state.last_frame_ms;
        let outcome = if elapsed >= self.timing.interval_ms {
            let frame = self.state.frame_index;
            if let Err(e) = render(frame) {
                self.pause();
                return Err(e);
            }
            self.state.frame_index = frame.next();
            self.state.last_frame_ms = now_ms;

            let measured_fps = match self.policy {
                EndPolicy::RunIndefinitely => self.meter.record(now_ms),
                EndPolicy::StopAfterDuration => None,
            };
            if measured_fps.is_some() {
                self.state.measured_fps = measured_fps;
            }
            TickOutcome::Admitted {
                frame,
                measured_fps,
            }
        } else {
            tracing::trace!(elapsed, "tick dropped");
            TickOutcome::Dropped
        };

        self.request();
        Ok(outcome)
    }

    fn request(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.ticks.request_tick());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scheduler.rs"]
mod tests;
