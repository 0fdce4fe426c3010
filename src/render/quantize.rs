/// Lowest level count that still has a non-zero step.
pub const MIN_LEVELS: u32 = 2;
/// One level per 8-bit code value.
pub const MAX_LEVELS: u32 = 256;

/// Snaps an 8-bit intensity to a ladder of `levels` values spaced `256 / (levels - 1)` apart.
///
/// The top rung lands on 256 and is clamped to 255, so full depth is within one
/// code value of the identity rather than exact.
///
/// `levels` outside `[2, 256]` is clamped into that range, so a bit depth of zero
/// can never divide by zero. NaN maps to black.
pub fn quantize(value: f64, levels: u32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let levels = levels.clamp(MIN_LEVELS, MAX_LEVELS);
    let step = 256.0 / f64::from(levels - 1);
    let snapped = ((value / step).round() * step).round();
    snapped.clamp(0.0, 255.0) as u8
}

/// Levels representable with `bits` bits per channel.
pub fn levels_for_bits(bits: u8) -> u32 {
    1u32 << u32::from(bits.min(8))
}

#[cfg(test)]
#[path = "../../tests/unit/render/quantize.rs"]
mod tests;
