//! Validated parameter snapshot driving both the volume calculation and the preview.

use std::str::FromStr;

use crate::{
    foundation::core::Canvas,
    foundation::error::{RawscopeError, RawscopeResult},
    render::{quantize::levels_for_bits, registry::AnimationVariant},
    volume::units::DisplayUnit,
};

/// Inclusive bounds of a numeric control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamRange {
    pub min: u32,
    pub max: u32,
}

impl ParamRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Clamps `v` into the range. The flag is `true` when `v` was out of bounds.
    pub fn clamp(self, v: i64) -> (u32, bool) {
        let lo = i64::from(self.min);
        let hi = i64::from(self.max);
        let c = v.clamp(lo, hi);
        (c as u32, c != v)
    }
}

pub const WIDTH_RANGE: ParamRange = ParamRange::new(1, 7680);
pub const HEIGHT_RANGE: ParamRange = ParamRange::new(1, 4320);
pub const FPS_RANGE: ParamRange = ParamRange::new(1, 120);
pub const DURATION_RANGE: ParamRange = ParamRange::new(1, 3600);
pub const BITS_RANGE: ParamRange = ParamRange::new(1, 8);

/// Monochrome (one channel) or RGB color (three channels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Mono,
    Color,
}

impl ColorMode {
    pub fn channels(self) -> u32 {
        match self {
            Self::Mono => 1,
            Self::Color => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Color => "color",
        }
    }

    /// Human-readable channel count, e.g. `"3 channels"`.
    pub fn channel_label(self) -> &'static str {
        match self {
            Self::Mono => "1 channel",
            Self::Color => "3 channels",
        }
    }
}

impl FromStr for ColorMode {
    type Err = RawscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mono" => Ok(Self::Mono),
            "color" => Ok(Self::Color),
            other => Err(RawscopeError::configuration(format!(
                "unknown color mode '{other}' (expected 'mono' or 'color')"
            ))),
        }
    }
}

/// Unvalidated control values exactly as the host read them.
///
/// Numeric fields are wide signed integers so that out-of-range input (including
/// negatives) can be clamped rather than rejected. Enum fields are string keys so
/// that unknown keys surface as configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawParameters {
    pub width: i64,
    pub height: i64,
    pub fps: i64,
    pub duration: i64,
    pub bits: i64,
    pub color_mode: String,
    pub animation: String,
    pub unit: String,
}

impl Default for RawParameters {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            fps: 1,
            duration: 5,
            bits: 1,
            color_mode: ColorMode::Mono.name().to_string(),
            animation: AnimationVariant::Bouncing.name().to_string(),
            unit: DisplayUnit::Auto.name().to_string(),
        }
    }
}

/// A numeric field that was pulled back into its documented range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClampedField {
    pub field: &'static str,
    pub requested: i64,
    pub applied: u32,
}

/// Validated, immutable snapshot of every control value.
///
/// Numeric fields are always within their ranges; the only way to build one is
/// through clamping constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ParameterModel {
    width: u32,
    height: u32,
    fps: u32,
    duration_secs: u32,
    bits_per_channel: u8,
    color_mode: ColorMode,
    variant: AnimationVariant,
    unit: DisplayUnit,
}

impl Default for ParameterModel {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            fps: 1,
            duration_secs: 5,
            bits_per_channel: 1,
            color_mode: ColorMode::Mono,
            variant: AnimationVariant::Bouncing,
            unit: DisplayUnit::Auto,
        }
    }
}

impl ParameterModel {
    /// Validates host input, clamping numbers and parsing enum keys.
    pub fn from_raw(raw: &RawParameters) -> RawscopeResult<Self> {
        Ok(Self::from_raw_with_report(raw)?.0)
    }

    /// Like [`ParameterModel::from_raw`], also returning which fields were clamped.
    pub fn from_raw_with_report(
        raw: &RawParameters,
    ) -> RawscopeResult<(Self, Vec<ClampedField>)> {
        let color_mode = ColorMode::from_str(&raw.color_mode)?;
        let variant = AnimationVariant::from_str(&raw.animation)?;
        let unit = DisplayUnit::from_str(&raw.unit)?;

        let mut clamped = Vec::new();
        let mut take = |field: &'static str, range: ParamRange, v: i64| -> u32 {
            let (applied, was_clamped) = range.clamp(v);
            if was_clamped {
                tracing::debug!(field, requested = v, applied, "clamped parameter");
                clamped.push(ClampedField {
                    field,
                    requested: v,
                    applied,
                });
            }
            applied
        };

        let model = Self {
            width: take("width", WIDTH_RANGE, raw.width),
            height: take("height", HEIGHT_RANGE, raw.height),
            fps: take("fps", FPS_RANGE, raw.fps),
            duration_secs: take("duration", DURATION_RANGE, raw.duration),
            bits_per_channel: take("bits", BITS_RANGE, raw.bits) as u8,
            color_mode,
            variant,
            unit,
        };
        Ok((model, clamped))
    }

    /// Inverse of [`ParameterModel::from_raw`]; useful for persisting host state.
    pub fn to_raw(&self) -> RawParameters {
        RawParameters {
            width: i64::from(self.width),
            height: i64::from(self.height),
            fps: i64::from(self.fps),
            duration: i64::from(self.duration_secs),
            bits: i64::from(self.bits_per_channel),
            color_mode: self.color_mode.name().to_string(),
            animation: self.variant.name().to_string(),
            unit: self.unit.name().to_string(),
        }
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.width = WIDTH_RANGE.clamp(width).0;
        self.height = HEIGHT_RANGE.clamp(height).0;
        self
    }

    pub fn with_fps(mut self, fps: i64) -> Self {
        self.fps = FPS_RANGE.clamp(fps).0;
        self
    }

    pub fn with_duration_secs(mut self, secs: i64) -> Self {
        self.duration_secs = DURATION_RANGE.clamp(secs).0;
        self
    }

    pub fn with_bits_per_channel(mut self, bits: i64) -> Self {
        self.bits_per_channel = BITS_RANGE.clamp(bits).0 as u8;
        self
    }

    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    pub fn with_variant(mut self, variant: AnimationVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_display_unit(mut self, unit: DisplayUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn bits_per_channel(&self) -> u8 {
        self.bits_per_channel
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn variant(&self) -> AnimationVariant {
        self.variant
    }

    pub fn display_unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn channels(&self) -> u32 {
        self.color_mode.channels()
    }

    /// Representable levels per channel, `2^bits_per_channel`.
    pub fn quantization_levels(&self) -> u32 {
        levels_for_bits(self.bits_per_channel)
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Target interval between admitted frames, in milliseconds.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.fps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
