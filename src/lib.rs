//! Rawscope computes the exact uncompressed data volume of a video stream and
//! previews what a given bit depth does to moving imagery.
//!
//! The public API is session-oriented:
//!
//! - Build a [`ParameterModel`] (or load a [`SimulatorConfig`])
//! - Create a [`Simulator`] over any [`DrawSurface`]
//! - Forward control changes, play/pause/reset, and host ticks to it
//!
//! [`VolumeCalculator`] and the variant registry are also usable on their own.
#![forbid(unsafe_code)]

mod foundation;

/// Validated parameter snapshot.
pub mod params;
/// Playback pacing.
pub mod playback;
/// Rendering backends and the animation registry.
pub mod render;
pub(crate) mod schema;
/// Host-facing session API.
pub mod session;
/// Exact volume arithmetic and unit formatting.
pub mod volume;

pub use crate::foundation::core::{Canvas, FrameIndex, Point, Rect, Rgb8, Vec2};
pub use crate::foundation::error::{RawscopeError, RawscopeResult};

pub use crate::params::model::{
    BITS_RANGE, ClampedField, ColorMode, DURATION_RANGE, FPS_RANGE, HEIGHT_RANGE, ParamRange,
    ParameterModel, RawParameters, WIDTH_RANGE,
};
pub use crate::playback::clock::{
    Clock, ManualClock, ManualTicks, SystemClock, TickHandle, TickSource,
};
pub use crate::playback::scheduler::{
    EndPolicy, PlaybackPhase, PlaybackScheduler, ScheduleState, TickOutcome, Timing,
};
pub use crate::render::cpu::{CpuSurface, FrameRgba};
pub use crate::render::frame::FrameCtx;
pub use crate::render::ops::{DrawOp, DrawSurface, execute_ops};
pub use crate::render::quantize::{levels_for_bits, quantize};
pub use crate::render::recording::RecordingSurface;
pub use crate::render::registry::{AnimationVariant, VariantFamily};
pub use crate::schema::config::SimulatorConfig;
pub use crate::session::simulator::{Simulator, render_into};
pub use crate::session::sink::{NullSink, RecordingSink, ResultSink, TracingSink};
pub use crate::volume::calc::{Capacity, VolumeCalculator, VolumeResult};
pub use crate::volume::units::{ByteUnit, DisplayUnit, format_bits};
