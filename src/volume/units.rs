//! Unit scaling and text formatting for exact bit counts.
//!
//! All scaling is exact big-integer division. The only lossy step is the final
//! truncation to two decimal places, which is performed on integers as well:
//! values are scaled to hundredths before dividing, then rendered as digits.

use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::foundation::error::RawscopeError;

const BITS_PER_BYTE: u32 = 8;
const DECIMAL_STEP: u32 = 1000;

/// Unit requested by the host for displaying sizes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    Bit,
    Byte,
    Kb,
    Mb,
    Gb,
    /// Pick the largest byte unit that keeps the value below 1000.
    #[default]
    Auto,
}

impl DisplayUnit {
    pub const ALL: [Self; 6] = [
        Self::Bit,
        Self::Byte,
        Self::Kb,
        Self::Mb,
        Self::Gb,
        Self::Auto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bit => "bit",
            Self::Byte => "byte",
            Self::Kb => "kb",
            Self::Mb => "mb",
            Self::Gb => "gb",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for DisplayUnit {
    type Err = RawscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.name() == s)
            .ok_or_else(|| RawscopeError::configuration(format!("unknown display unit '{s}'")))
    }
}

/// Byte-based units, in decimal (SI) steps of 1000.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByteUnit {
    Bytes,
    Kb,
    Mb,
    Gb,
    Tb,
}

impl ByteUnit {
    pub const ALL: [Self; 5] = [Self::Bytes, Self::Kb, Self::Mb, Self::Gb, Self::Tb];

    /// Number of ×1000 steps above bytes.
    pub fn exponent(self) -> u32 {
        match self {
            Self::Bytes => 0,
            Self::Kb => 1,
            Self::Mb => 2,
            Self::Gb => 3,
            Self::Tb => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bytes => "Bytes",
            Self::Kb => "KB",
            Self::Mb => "MB",
            Self::Gb => "GB",
            Self::Tb => "TB",
        }
    }

    fn divisor(self) -> BigUint {
        pow1000(self.exponent())
    }
}

fn pow1000(exp: u32) -> BigUint {
    let step = BigUint::from(DECIMAL_STEP);
    let mut out = BigUint::from(1u32);
    for _ in 0..exp {
        out *= &step;
    }
    out
}

/// Exact bits to bytes, truncating any partial byte.
pub fn bits_to_bytes(bits: &BigUint) -> BigUint {
    bits / &BigUint::from(BITS_PER_BYTE)
}

/// Largest byte unit whose scaled value is still below 1000, or [`ByteUnit::Tb`].
pub fn select_auto_unit(bytes: &BigUint) -> ByteUnit {
    let step = BigUint::from(DECIMAL_STEP);
    let mut remaining = bytes.clone();
    let mut idx = 0;
    while remaining >= step && idx < ByteUnit::ALL.len() - 1 {
        remaining = &remaining / &step;
        idx += 1;
    }
    ByteUnit::ALL[idx]
}

/// A value scaled into a unit, kept as an exact count of hundredths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scaled {
    pub hundredths: BigUint,
    pub label: &'static str,
}

impl Scaled {
    fn new(value: &BigUint, divisor: &BigUint, label: &'static str) -> Self {
        let hundredths = (value * &BigUint::from(100u32)) / divisor;
        Self { hundredths, label }
    }

    /// Integer part of the scaled value.
    pub fn whole(&self) -> BigUint {
        &self.hundredths / &BigUint::from(100u32)
    }

    /// Lossy view of the scaled value; for display only.
    pub fn to_f64(&self) -> f64 {
        self.hundredths.to_f64().unwrap_or(f64::INFINITY) / 100.0
    }

    fn fraction_digits(&self) -> String {
        let frac = &self.hundredths % &BigUint::from(100u32);
        format!("{:0>2}", frac.to_string())
    }

    /// `"12.34 MB"`, with thousands separators in the integer part.
    pub fn with_decimals(&self) -> String {
        format!(
            "{}.{} {}",
            group_thousands(&self.whole().to_string()),
            self.fraction_digits(),
            self.label
        )
    }

    /// `"1,234,567 MB"`, dropping the fractional part.
    pub fn grouped(&self) -> String {
        format!("{} {}", group_thousands(&self.whole().to_string()), self.label)
    }
}

/// Scales an exact bit count into the requested unit.
pub fn scale_bits(bits: &BigUint, unit: DisplayUnit) -> Scaled {
    let one = BigUint::from(1u32);
    match unit {
        DisplayUnit::Bit => Scaled::new(bits, &one, "bits"),
        DisplayUnit::Byte => Scaled::new(&bits_to_bytes(bits), &one, ByteUnit::Bytes.label()),
        DisplayUnit::Kb => scale_bytes(&bits_to_bytes(bits), ByteUnit::Kb),
        DisplayUnit::Mb => scale_bytes(&bits_to_bytes(bits), ByteUnit::Mb),
        DisplayUnit::Gb => scale_bytes(&bits_to_bytes(bits), ByteUnit::Gb),
        DisplayUnit::Auto => {
            let bytes = bits_to_bytes(bits);
            let unit = select_auto_unit(&bytes);
            scale_bytes(&bytes, unit)
        }
    }
}

fn scale_bytes(bytes: &BigUint, unit: ByteUnit) -> Scaled {
    Scaled::new(bytes, &unit.divisor(), unit.label())
}

/// Formats an exact bit count for display.
///
/// Fixed units show two decimals below 1000 and a grouped integer above; auto
/// mode always shows two decimals. Zero renders as `"0 <unit>"`.
pub fn format_bits(bits: &BigUint, unit: DisplayUnit) -> String {
    let scaled = scale_bits(bits, unit);
    if bits.is_zero() {
        return format!("0 {}", scaled.label);
    }
    match unit {
        DisplayUnit::Auto => scaled.with_decimals(),
        _ if scaled.whole() < BigUint::from(DECIMAL_STEP) => scaled.with_decimals(),
        _ => scaled.grouped(),
    }
}

/// Inserts `,` every three digits from the right of a plain digit string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/volume/units.rs"]
mod tests;
