//! DPT 5.xxx - 8-bit Unsigned Value (1 byte)
//!
//! 8-bit unsigned datapoint types map a bounded real range onto the byte
//! range 0-255.
//!
//! ## Format
//!
//! - 8 bits: unsigned value (0-255)
//!
//! ## Supported Subtypes
//!
//! | DPT | Range | Encode | Decode | Unit |
//! |-----|-------|--------|--------|------|
//! | **5.001** Scaling | 0-100 | `round(v * 255 / 100)` | `raw * 100 / 255` | `%` |
//! | **5.003** Angle | 0-360 | `round(v * 255 / 360)` | `raw * 360 / 255` | `°` |
//! | **5.004** Percent_U8 | 0-255 | `v as u8` | `raw` | `%` |
//!
//! Encoding clips to the range first and never fails.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{Dpt5, DptDecode, DptEncode};
//!
//! // Encode percentage (0-100%)
//! let byte = Dpt5::Scaling.encode_to_byte(75.0); // 0xBF = 191
//! assert_eq!(byte, 0xBF);
//!
//! // Decode
//! let value = Dpt5::Scaling.decode(&[0xBF])?; // ~74.9
//! assert!((value - 74.9).abs() < 0.1);
//!
//! // Angle (0-360°), clipped on encode
//! assert_eq!(Dpt5::Angle.encode(400.0), [0xFF]);
//! # Ok::<(), knx_dpt::DptError>(())
//! ```

use core::fmt;

use crate::dpt::{clip, Datapoint, DptDecode, DptEncode, Payload};
use crate::error::{DptError, Result};
use crate::primitive::{pack_u8, round_half_away, unpack_u8, unsigned};

/// DPT 5.xxx 8-bit unsigned types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dpt5 {
    /// DPT 5.001 - Scaling (0-100%)
    Scaling,
    /// DPT 5.003 - Angle (0-360°)
    Angle,
    /// DPT 5.004 - Percent_U8 (0-255%)
    PercentU8,
}

impl Dpt5 {
    /// Wire width in bytes
    pub const WIRE_LEN: usize = unsigned::WIDTH;

    /// All supported subtypes
    pub const ALL: [Dpt5; 3] = [Dpt5::Scaling, Dpt5::Angle, Dpt5::PercentU8];

    /// Get the DPT identifier string (e.g., "5.001")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt5::Scaling => "5.001",
            Dpt5::Angle => "5.003",
            Dpt5::PercentU8 => "5.004",
        }
    }

    /// Get the unit string for this DPT
    pub const fn unit(&self) -> &'static str {
        match self {
            Dpt5::Scaling | Dpt5::PercentU8 => "%",
            Dpt5::Angle => "°",
        }
    }

    /// Get the valid semantic range for this DPT (min, max)
    pub const fn range(&self) -> (f32, f32) {
        match self {
            Dpt5::Scaling => (0.0, 100.0),
            Dpt5::Angle => (0.0, 360.0),
            Dpt5::PercentU8 => (0.0, 255.0),
        }
    }

    /// Text between the number and the unit when rendering
    const fn unit_separator(&self) -> &'static str {
        match self {
            Dpt5::Scaling => "",
            Dpt5::Angle | Dpt5::PercentU8 => " ",
        }
    }

    /// Encode a value to a byte
    ///
    /// Values are clipped to [`range()`](Self::range) first. Scaling and
    /// Angle round to the nearest step; PercentU8 truncates.
    pub fn encode_to_byte(&self, value: f32) -> u8 {
        let (min, max) = self.range();
        let value = clip(self.identifier(), value, min, max);

        match self {
            // Computed as v * 255 / max so the half-way point stays exact
            Dpt5::Scaling | Dpt5::Angle => round_half_away(value * 255.0 / max) as u8,
            Dpt5::PercentU8 => value as u8,
        }
    }

    /// Decode a raw byte to the semantic value
    ///
    /// # Errors
    /// Returns a range error if the scaled value exceeds the upper bound
    pub fn decode_byte(&self, raw: u8) -> Result<f32> {
        let (min, max) = self.range();

        let value = match self {
            Dpt5::Scaling | Dpt5::Angle => f32::from(raw) * max / 255.0,
            Dpt5::PercentU8 => f32::from(raw),
        };

        if value > max {
            dpt_log!(debug, "DPT {}: decoded {} above {}", self.identifier(), value, max);
            return Err(DptError::out_of_range(self.identifier(), value, min, max));
        }

        Ok(value)
    }
}

impl DptEncode<f32> for Dpt5 {
    fn encode(&self, value: f32) -> Payload {
        Payload::from(pack_u8(self.encode_to_byte(value)))
    }
}

impl DptDecode<f32> for Dpt5 {
    fn decode(&self, data: &[u8]) -> Result<f32> {
        self.decode_byte(unpack_u8(data)?)
    }
}

/// A scaled 8-bit reading tagged with its DPT 5.xxx subtype.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledValue {
    dpt: Dpt5,
    value: f32,
}

impl ScaledValue {
    /// Wrap a semantic value; out-of-range values are kept as given and
    /// clipped only when packed.
    pub const fn new(dpt: Dpt5, value: f32) -> Self {
        Self { dpt, value }
    }

    /// Decode a fresh value from wire bytes
    pub fn from_bytes(dpt: Dpt5, data: &[u8]) -> Result<Self> {
        Ok(Self::new(dpt, dpt.decode(data)?))
    }

    pub const fn dpt(&self) -> Dpt5 {
        self.dpt
    }

    pub const fn value(&self) -> f32 {
        self.value
    }
}

impl Datapoint for ScaledValue {
    fn identifier(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn unit(&self) -> &'static str {
        self.dpt.unit()
    }

    fn pack(&self) -> Payload {
        self.dpt.encode(self.value)
    }

    fn unpack(&mut self, data: &[u8]) -> Result<()> {
        self.value = self.dpt.decode(data)?;
        Ok(())
    }
}

impl fmt::Display for ScaledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}{}{}",
            self.value,
            self.dpt.unit_separator(),
            self.dpt.unit()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
        assert!((a - b).abs() <= epsilon, "Expected {} ≈ {}", a, b);
    }

    #[test]
    fn test_scaling_encode() {
        assert_eq!(Dpt5::Scaling.encode(0.0), [0x00]);
        // round(50 * 2.55) = round(127.5) = 128
        assert_eq!(Dpt5::Scaling.encode(50.0), [0x80]);
        assert_eq!(Dpt5::Scaling.encode(75.0), [0xBF]);
        assert_eq!(Dpt5::Scaling.encode(100.0), [0xFF]);
    }

    #[test]
    fn test_scaling_encode_clips() {
        assert_eq!(Dpt5::Scaling.encode(-10.0), [0x00]);
        assert_eq!(Dpt5::Scaling.encode(100.5), [0xFF]);
        assert_eq!(Dpt5::Scaling.encode(f32::INFINITY), [0xFF]);
        assert_eq!(Dpt5::Scaling.encode(f32::NAN), [0x00]);
    }

    #[test]
    fn test_scaling_decode() {
        assert_eq!(Dpt5::Scaling.decode(&[0x00]).unwrap(), 0.0);
        assert_eq!(Dpt5::Scaling.decode(&[0xFF]).unwrap(), 100.0);
        assert_float_eq(Dpt5::Scaling.decode(&[0x80]).unwrap(), 50.196, 0.001);
        assert_float_eq(Dpt5::Scaling.decode(&[0xBF]).unwrap(), 74.902, 0.001);
    }

    #[test]
    fn test_angle_encode() {
        assert_eq!(Dpt5::Angle.encode(0.0), [0x00]);
        // 180 / 360 * 255 = 127.5 -> 128
        assert_eq!(Dpt5::Angle.encode(180.0), [0x80]);
        assert_eq!(Dpt5::Angle.encode(360.0), [0xFF]);
        assert_eq!(Dpt5::Angle.encode(-1.0), [0x00]);
        assert_eq!(Dpt5::Angle.encode(720.0), [0xFF]);
    }

    #[test]
    fn test_angle_decode() {
        assert_eq!(Dpt5::Angle.decode(&[0x00]).unwrap(), 0.0);
        assert_eq!(Dpt5::Angle.decode(&[0xFF]).unwrap(), 360.0);
        assert_float_eq(Dpt5::Angle.decode(&[127]).unwrap(), 179.294, 0.001);
    }

    #[test]
    fn test_angle_decode_never_exceeds_range() {
        for raw in 0..=u8::MAX {
            let value = Dpt5::Angle.decode(&[raw]).unwrap();
            assert!((0.0..=360.0).contains(&value));
        }
    }

    #[test]
    fn test_percent_u8_encode() {
        assert_eq!(Dpt5::PercentU8.encode(0.0), [0]);
        assert_eq!(Dpt5::PercentU8.encode(128.0), [128]);
        assert_eq!(Dpt5::PercentU8.encode(128.9), [128]);
        assert_eq!(Dpt5::PercentU8.encode(255.0), [255]);
        assert_eq!(Dpt5::PercentU8.encode(300.0), [255]);
        assert_eq!(Dpt5::PercentU8.encode(-3.0), [0]);
    }

    #[test]
    fn test_percent_u8_decode() {
        assert_eq!(Dpt5::PercentU8.decode(&[0]).unwrap(), 0.0);
        assert_eq!(Dpt5::PercentU8.decode(&[128]).unwrap(), 128.0);
        assert_eq!(Dpt5::PercentU8.decode(&[255]).unwrap(), 255.0);
    }

    #[test]
    fn test_decode_wrong_length() {
        for dpt in Dpt5::ALL {
            assert!(dpt.decode(&[]).unwrap_err().is_length());
            assert!(dpt.decode(&[0x01, 0x02]).unwrap_err().is_length());
        }
    }

    #[test]
    fn test_round_trip_scaling() {
        for value in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let decoded = Dpt5::Scaling.decode(&Dpt5::Scaling.encode(value)).unwrap();
            // Half a step of 100 / 255
            assert_float_eq(decoded, value, 0.2);
        }
    }

    #[test]
    fn test_round_trip_angle() {
        for value in [0.0, 90.0, 180.0, 270.0, 360.0] {
            let decoded = Dpt5::Angle.decode(&Dpt5::Angle.encode(value)).unwrap();
            assert_float_eq(decoded, value, 360.0 / 255.0);
        }
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Dpt5::Scaling.identifier(), "5.001");
        assert_eq!(Dpt5::Angle.identifier(), "5.003");
        assert_eq!(Dpt5::PercentU8.identifier(), "5.004");
    }

    #[test]
    fn test_unit() {
        assert_eq!(Dpt5::Scaling.unit(), "%");
        assert_eq!(Dpt5::Angle.unit(), "°");
        assert_eq!(Dpt5::PercentU8.unit(), "%");
    }

    #[test]
    fn test_range() {
        assert_eq!(Dpt5::Scaling.range(), (0.0, 100.0));
        assert_eq!(Dpt5::Angle.range(), (0.0, 360.0));
        assert_eq!(Dpt5::PercentU8.range(), (0.0, 255.0));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(ScaledValue::new(Dpt5::Scaling, 50.0).to_string(), "50.00%");
        assert_eq!(ScaledValue::new(Dpt5::Angle, 90.5).to_string(), "90.50 °");
        assert_eq!(ScaledValue::new(Dpt5::PercentU8, 12.0).to_string(), "12.00 %");
    }

    #[test]
    fn test_value_pack_unpack() {
        let mut value = ScaledValue::new(Dpt5::Angle, 0.0);
        value.unpack(&[0xFF]).unwrap();
        assert_eq!(value.value(), 360.0);
        assert_eq!(value.pack(), [0xFF]);

        assert!(value.unpack(&[]).is_err());
        assert_eq!(value.value(), 360.0);
    }

    #[test]
    fn test_value_from_bytes() {
        let value = ScaledValue::from_bytes(Dpt5::PercentU8, &[42]).unwrap();
        assert_eq!(value.dpt(), Dpt5::PercentU8);
        assert_eq!(value.value(), 42.0);
        assert_eq!(value.identifier(), "5.004");
    }
}
