use std::str::FromStr;

use num_bigint::BigUint;

use crate::{
    foundation::error::RawscopeError,
    params::model::ParameterModel,
    volume::units::{bits_to_bytes, format_bits, group_thousands},
};

/// Storage capacity, in bytes, above which the data-volume alert fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Capacity(pub u64);

impl Capacity {
    /// Generic "this is a lot of data" threshold (100 MB).
    pub const LARGE: Self = Self(100_000_000);
    /// Single-layer DVD (4.7 GB).
    pub const DVD: Self = Self(4_700_000_000);

    pub fn bytes(self) -> u64 {
        self.0
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::LARGE
    }
}

impl FromStr for Capacity {
    type Err = RawscopeError;

    /// Accepts `large`, `dvd`, or a plain byte count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "large" => Ok(Self::LARGE),
            "dvd" => Ok(Self::DVD),
            other => other.parse::<u64>().map(Self).map_err(|_| {
                RawscopeError::configuration(format!(
                    "unknown capacity '{other}' (expected 'large', 'dvd' or a byte count)"
                ))
            }),
        }
    }
}

/// Exact data volume derived from one [`ParameterModel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VolumeResult {
    pub model: ParameterModel,
    pub capacity: Capacity,
    pub frame_pixels: BigUint,
    pub frame_bits: BigUint,
    pub frame_bytes: BigUint,
    pub total_frames: BigUint,
    pub total_bits: BigUint,
    pub total_bytes: BigUint,
    pub displayed_frame_value: String,
    pub displayed_total_value: String,
    pub alert_triggered: bool,
}

impl VolumeResult {
    /// The two explanatory lines shown next to the numbers.
    ///
    /// ```text
    /// 1,920 px × 1,080 px × 8 bit × 3 channels = 6.22 MB
    /// 6.22 MB × 30 fps × 60 s = 11.19 GB
    /// ```
    pub fn breakdown(&self) -> [String; 2] {
        let m = &self.model;
        let grouped = |v: u32| group_thousands(&v.to_string());
        [
            format!(
                "{} px × {} px × {} bit × {} = {}",
                grouped(m.width()),
                grouped(m.height()),
                m.bits_per_channel(),
                m.color_mode().channel_label(),
                self.displayed_frame_value
            ),
            format!(
                "{} × {} fps × {} s = {}",
                self.displayed_frame_value,
                grouped(m.fps()),
                grouped(m.duration_secs()),
                self.displayed_total_value
            ),
        ]
    }
}

/// Derives frame and total sizes with arbitrary-precision integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VolumeCalculator {
    capacity: Capacity,
}

impl VolumeCalculator {
    pub fn new(capacity: Capacity) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn compute(&self, model: &ParameterModel) -> VolumeResult {
        let frame_pixels = BigUint::from(model.width()) * BigUint::from(model.height());
        let frame_bits = &frame_pixels
            * BigUint::from(model.bits_per_channel())
            * BigUint::from(model.channels());
        let total_frames = BigUint::from(model.fps()) * BigUint::from(model.duration_secs());
        let total_bits = &frame_bits * &total_frames;

        let frame_bytes = bits_to_bytes(&frame_bits);
        let total_bytes = bits_to_bytes(&total_bits);
        let alert_triggered = total_bytes > BigUint::from(self.capacity.bytes());

        let unit = model.display_unit();
        let displayed_frame_value = format_bits(&frame_bits, unit);
        let displayed_total_value = format_bits(&total_bits, unit);

        tracing::debug!(
            total_bytes = %total_bytes,
            alert_triggered,
            "volume recomputed"
        );

        VolumeResult {
            model: *model,
            capacity: self.capacity,
            frame_pixels,
            frame_bits,
            frame_bytes,
            total_frames,
            total_bits,
            total_bytes,
            displayed_frame_value,
            displayed_total_value,
            alert_triggered,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/volume/calc.rs"]
mod tests;
