use crate::{
    foundation::core::FrameIndex,
    foundation::error::RawscopeResult,
    params::model::{ClampedField, ParameterModel, RawParameters},
    playback::{
        clock::{Clock, TickSource},
        scheduler::{PlaybackScheduler, ScheduleState, TickOutcome, Timing},
    },
    render::{frame::FrameCtx, ops::DrawSurface, ops::execute_ops},
    schema::config::SimulatorConfig,
    session::sink::ResultSink,
    volume::calc::{VolumeCalculator, VolumeResult},
};

/// Host-facing entry point.
///
/// The host owns event wiring and forwards control changes as
/// [`Simulator::set_parameters`], button presses as [`Simulator::play`] /
/// [`Simulator::pause`] / [`Simulator::reset`], and every fired tick as
/// [`Simulator::tick`]. Everything runs on the caller's thread.
pub struct Simulator<S: DrawSurface> {
    config: SimulatorConfig,
    model: ParameterModel,
    calculator: VolumeCalculator,
    volume: VolumeResult,
    scheduler: PlaybackScheduler,
    clock: Box<dyn Clock>,
    sink: Box<dyn ResultSink>,
    surface: S,
}

impl<S: DrawSurface> Simulator<S> {
    /// Builds a simulator at the configured defaults and renders frame 0.
    pub fn new(
        config: SimulatorConfig,
        surface: S,
        ticks: impl TickSource + 'static,
        clock: impl Clock + 'static,
        sink: impl ResultSink + 'static,
    ) -> RawscopeResult<Self> {
        let model = config.default_model()?;
        let calculator = VolumeCalculator::new(config.capacity);
        let volume = calculator.compute(&model);
        let scheduler = PlaybackScheduler::new(
            config.end_policy,
            Timing::from_model(&model),
            Box::new(ticks),
        );

        let mut sim = Self {
            config,
            model,
            calculator,
            volume,
            scheduler,
            clock: Box::new(clock),
            sink: Box::new(sink),
            surface,
        };
        sim.sink.show_volume(&sim.volume);
        sim.sink.show_background(sim.model.variant().background());
        sim.surface.resize(sim.model.canvas())?;
        sim.render(FrameIndex(0))?;
        Ok(sim)
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn parameters(&self) -> &ParameterModel {
        &self.model
    }

    /// getVolumeResult
    pub fn volume_result(&self) -> &VolumeResult {
        &self.volume
    }

    /// getScheduleState
    pub fn schedule_state(&self) -> ScheduleState {
        self.scheduler.state()
    }

    pub fn has_pending_tick(&self) -> bool {
        self.scheduler.has_pending_tick()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Replaces the parameter snapshot.
    ///
    /// The surface is resized first; if that fails nothing else changes.
    /// Volume is then recomputed. Switching animation variant implies
    /// [`Simulator::reset`]; any other change rewinds the frame counter and,
    /// while stopped, redraws the current frame.
    pub fn set_parameters(&mut self, model: ParameterModel) -> RawscopeResult<()> {
        self.surface.resize(model.canvas())?;
        let variant_changed = model.variant() != self.model.variant();
        self.apply_model(model);
        if variant_changed {
            self.sink.show_background(self.model.variant().background());
            self.scheduler.reset();
            return self.render(FrameIndex(0));
        }

        self.scheduler.restart_count();
        if !self.scheduler.state().is_playing {
            self.render(self.scheduler.state().frame_index)?;
        }
        Ok(())
    }

    /// Validates host control values and applies them; reports clamped fields.
    pub fn set_raw_parameters(&mut self, raw: &RawParameters) -> RawscopeResult<Vec<ClampedField>> {
        let (model, clamped) = ParameterModel::from_raw_with_report(raw)?;
        self.set_parameters(model)?;
        Ok(clamped)
    }

    /// Starts playback; no-op when already playing.
    pub fn play(&mut self) -> bool {
        let now = self.clock.now_ms();
        self.scheduler.play(now)
    }

    /// Stops playback and cancels the pending tick; idempotent.
    pub fn pause(&mut self) -> bool {
        self.scheduler.pause()
    }

    /// Pauses, rewinds to frame 0, resizes the surface and renders frame 0.
    pub fn reset(&mut self) -> RawscopeResult<()> {
        self.scheduler.reset();
        self.surface.resize(self.model.canvas())?;
        self.render(FrameIndex(0))
    }

    /// [`Simulator::reset`] plus restoring every parameter to the configured defaults.
    pub fn reset_all(&mut self) -> RawscopeResult<()> {
        let defaults = self.config.default_model()?;
        self.scheduler.reset();
        self.surface.resize(defaults.canvas())?;
        self.apply_model(defaults);
        self.sink.show_background(self.model.variant().background());
        self.render(FrameIndex(0))
    }

    /// Handles one host tick at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> RawscopeResult<TickOutcome> {
        let model = &self.model;
        let surface = &mut self.surface;
        let outcome = self
            .scheduler
            .tick(now_ms, |frame| render_into(surface, model, frame))?;
        if let TickOutcome::Admitted {
            measured_fps: Some(fps),
            ..
        } = outcome
        {
            self.sink.show_measured_fps(fps);
        }
        Ok(outcome)
    }

    /// [`Simulator::tick`] at the clock's current time.
    pub fn tick_now(&mut self) -> RawscopeResult<TickOutcome> {
        let now = self.clock.now_ms();
        self.tick(now)
    }

    fn apply_model(&mut self, model: ParameterModel) {
        self.model = model;
        self.volume = self.calculator.compute(&self.model);
        self.scheduler.set_timing(Timing::from_model(&self.model));
        self.sink.show_volume(&self.volume);
    }

    fn render(&mut self, frame: FrameIndex) -> RawscopeResult<()> {
        render_into(&mut self.surface, &self.model, frame)
    }
}

/// Renders `frame` of the model's variant onto `surface`.
#[tracing::instrument(level = "trace", skip(surface, model), fields(variant = %model.variant()))]
pub fn render_into<S: DrawSurface + ?Sized>(
    surface: &mut S,
    model: &ParameterModel,
    frame: FrameIndex,
) -> RawscopeResult<()> {
    let ctx = FrameCtx::from_model(model, frame);
    let ops = model.variant().render(&ctx);
    execute_ops(surface, &ops)
}

#[cfg(test)]
#[path = "../../tests/unit/session/simulator.rs"]
mod tests;
