//! KNX 2-byte float shape
//!
//! ## Format
//!
//! ```text
//! Byte 0: MEEE EMMM
//! Byte 1: MMMM MMMM
//!
//! E = Exponent (bits 14-11: 4 bits, unsigned, range 0-15)
//! M = Mantissa (bit 15 + bits 10-0: 12 bits, two's complement, -2048..=2047)
//!
//! Value = 0.01 * M * 2^E
//! ```
//!
//! Bit 15 is both the sign of the value and the top bit of the two's
//! complement mantissa, so a negative mantissa `m` is stored as
//! `0x8000 | (m + 2048)` in its 12 mantissa bits.
//!
//! ## Range
//!
//! - Min: -671088.64 (`0xF800`)
//! - Max: +670760.96 (`0x7FFF`)
//! - Resolution: `0.01 * 2^E`, i.e. 0.01 at exponent 0 and 327.68 at exponent 15
//!
//! ## Reference values
//!
//! | Bytes | Value |
//! |-------|-------|
//! | `0x0C 0x38` | 21.6 |
//! | `0x0A 0xF0` | 15.04 |
//! | `0x86 0x0C` | -5.0 |
//! | `0x8A 0x24` | -30.0 |

use super::{expect_len, round_half_away};
use crate::error::Result;

/// Wire width in bytes
pub const WIDTH: usize = 2;

const MANTISSA_MIN: i32 = -2048;
const MANTISSA_MAX: i32 = 2047;
const EXPONENT_MAX: u8 = 15;

const SIGN_BIT: u16 = 0x8000;
const EXPONENT_MASK: u16 = 0x0F;
const MANTISSA_MASK: u16 = 0x07FF;

/// A decomposed KNX 2-byte float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Float16 {
    mantissa: i16,
    exponent: u8,
}

impl Float16 {
    /// Split a raw 16-bit wire word into mantissa and exponent.
    pub const fn from_raw(raw: u16) -> Self {
        let exponent = ((raw >> 11) & EXPONENT_MASK) as u8;
        let low = (raw & MANTISSA_MASK) as i16;

        let mantissa = if raw & SIGN_BIT != 0 { low - 2048 } else { low };

        Self { mantissa, exponent }
    }

    /// Assemble the raw 16-bit wire word.
    pub const fn to_raw(self) -> u16 {
        let sign = if self.mantissa < 0 { SIGN_BIT } else { 0 };
        // i16 -> u16 keeps the two's complement pattern; the mask drops bits 11-15
        let low = (self.mantissa as u16) & MANTISSA_MASK;

        sign | ((self.exponent as u16) << 11) | low
    }

    /// Find the encoding of `value` with the smallest exponent whose
    /// rounded mantissa fits in 12 bits.
    ///
    /// Values beyond the format's range saturate at exponent 15. NaN encodes
    /// as zero.
    pub fn from_value(value: f32) -> Self {
        let hundredths = value * 100.0;
        let mut exponent = 0u8;

        loop {
            let mantissa = round_half_away(hundredths / (1u32 << exponent) as f32);

            if (MANTISSA_MIN..=MANTISSA_MAX).contains(&mantissa) {
                return Self {
                    mantissa: mantissa as i16,
                    exponent,
                };
            }

            if exponent == EXPONENT_MAX {
                dpt_log!(warn, "float16 overflow, saturating {}", value);
                return Self {
                    mantissa: mantissa.clamp(MANTISSA_MIN, MANTISSA_MAX) as i16,
                    exponent,
                };
            }

            exponent += 1;
        }
    }

    /// Real value represented by this encoding.
    pub fn to_value(self) -> f32 {
        // The integer product is exact in f32 (|m| < 2^12, 2^E <= 2^15)
        (f32::from(self.mantissa) * (1u32 << self.exponent) as f32) / 100.0
    }

    /// Signed mantissa, `-2048..=2047`
    pub const fn mantissa(self) -> i16 {
        self.mantissa
    }

    /// Exponent, `0..=15`
    pub const fn exponent(self) -> u8 {
        self.exponent
    }

    /// Distance between adjacent values at this exponent (`0.01 * 2^E`)
    pub fn resolution(self) -> f32 {
        (1u32 << self.exponent) as f32 / 100.0
    }

    /// Step the mantissa one unit toward zero.
    const fn toward_zero(self) -> Self {
        let mantissa = if self.mantissa > 0 {
            self.mantissa - 1
        } else if self.mantissa < 0 {
            self.mantissa + 1
        } else {
            0
        };

        Self {
            mantissa,
            exponent: self.exponent,
        }
    }
}

/// Pack a real number into the KNX 2-byte float format.
///
/// The encoder has no notion of semantic range; callers clip first.
pub fn pack_f16(value: f32) -> [u8; WIDTH] {
    Float16::from_value(value).to_raw().to_be_bytes()
}

/// Pack a real number so that the result decodes inside `[min, max]`.
///
/// Uses the nearest encoding unless that falls just outside the bounds
/// (e.g. 670760 rounds to `0x7FFF` = 670760.96), in which case the mantissa
/// is stepped toward zero. Requires `min <= 0 <= max` and `value` already
/// clipped to the bounds.
pub fn pack_f16_within(value: f32, min: f32, max: f32) -> [u8; WIDTH] {
    let mut encoded = Float16::from_value(value);

    let decoded = encoded.to_value();
    if decoded > max || decoded < min {
        encoded = encoded.toward_zero();
    }

    encoded.to_raw().to_be_bytes()
}

/// Unpack a KNX 2-byte float.
pub fn unpack_f16(data: &[u8]) -> Result<f32> {
    let bytes = expect_len::<WIDTH>(data)?;
    Ok(Float16::from_raw(u16::from_be_bytes(bytes)).to_value())
}
