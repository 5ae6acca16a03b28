//! DPT 9.xxx - 2-byte Float (16-bit floating point)
//!
//! 2-byte floating point datapoint types wrap the KNX float format (see
//! [`primitive::float16`](crate::primitive::float16)) with a semantic range:
//! values are clipped into the range on encode and checked on decode, since
//! the wire format can carry values outside any given type's domain.
//!
//! ## Supported Subtypes
//!
//! | DPT | Range | Unit |
//! |-----|-------|------|
//! | **9.001** Temperature | -273 to 670760 | `°C` |
//! | **9.004** Illumination | 0 to 670760 | `lux` |
//!
//! The largest wire value, `0x7FFF` (670760.96), is just above both upper
//! bounds; encoding 670760 therefore yields `0x7FFE` (670433.28).
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{Dpt9, DptDecode, DptEncode};
//!
//! // Encode temperature
//! let bytes = Dpt9::Temperature.encode_to_bytes(21.6);
//! assert_eq!(bytes, [0x0C, 0x38]);
//!
//! // Decode
//! let temp = Dpt9::Temperature.decode(&bytes)?;
//! assert!((temp - 21.6).abs() < 0.01);
//!
//! // Negative illumination is rejected
//! assert!(Dpt9::Illumination.decode(&[0x86, 0x0C]).is_err());
//! # Ok::<(), knx_dpt::DptError>(())
//! ```

use core::fmt;

use crate::dpt::{clip, Datapoint, DptDecode, DptEncode, Payload};
use crate::error::{DptError, Result};
use crate::primitive::{float16, pack_f16_within, unpack_f16};

/// DPT 9.xxx 2-byte float types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dpt9 {
    /// DPT 9.001 - Temperature (°C)
    Temperature,
    /// DPT 9.004 - Illumination (lux)
    Illumination,
}

impl Dpt9 {
    /// Wire width in bytes
    pub const WIRE_LEN: usize = float16::WIDTH;

    /// All supported subtypes
    pub const ALL: [Dpt9; 2] = [Dpt9::Temperature, Dpt9::Illumination];

    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt9::Temperature => "9.001",
            Dpt9::Illumination => "9.004",
        }
    }

    /// Get the unit string
    pub const fn unit(&self) -> &'static str {
        match self {
            Dpt9::Temperature => "°C",
            Dpt9::Illumination => "lux",
        }
    }

    /// Get the valid semantic range for this DPT (min, max)
    pub const fn range(&self) -> (f32, f32) {
        match self {
            Dpt9::Temperature => (-273.0, 670_760.0),
            Dpt9::Illumination => (0.0, 670_760.0),
        }
    }

    /// Encode a value to the 2-byte KNX float format
    ///
    /// The value is clipped to [`range()`](Self::range) first; the result
    /// always decodes back inside the range.
    pub fn encode_to_bytes(&self, value: f32) -> [u8; 2] {
        let (min, max) = self.range();
        let value = clip(self.identifier(), value, min, max);

        pack_f16_within(value, min, max)
    }

    /// Decode 2-byte KNX float format to f32
    ///
    /// # Errors
    /// - Length error unless `bytes` is exactly 2 bytes long
    /// - Range error if the decoded value is outside [`range()`](Self::range)
    pub fn decode_from_bytes(&self, bytes: &[u8]) -> Result<f32> {
        let value = unpack_f16(bytes)?;
        let (min, max) = self.range();

        if !(min..=max).contains(&value) {
            dpt_log!(debug, "DPT {}: decoded {} out of range", self.identifier(), value);
            return Err(DptError::out_of_range(self.identifier(), value, min, max));
        }

        Ok(value)
    }
}

impl DptEncode<f32> for Dpt9 {
    fn encode(&self, value: f32) -> Payload {
        Payload::from(self.encode_to_bytes(value))
    }
}

impl DptDecode<f32> for Dpt9 {
    fn decode(&self, data: &[u8]) -> Result<f32> {
        self.decode_from_bytes(data)
    }
}

/// A 2-byte float reading tagged with its DPT 9.xxx subtype.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatValue {
    dpt: Dpt9,
    value: f32,
}

impl FloatValue {
    pub const fn new(dpt: Dpt9, value: f32) -> Self {
        Self { dpt, value }
    }

    /// Decode a fresh value from wire bytes
    pub fn from_bytes(dpt: Dpt9, data: &[u8]) -> Result<Self> {
        Ok(Self::new(dpt, dpt.decode(data)?))
    }

    pub const fn dpt(&self) -> Dpt9 {
        self.dpt
    }

    pub const fn value(&self) -> f32 {
        self.value
    }
}

impl Datapoint for FloatValue {
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

impl fmt::Display for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.dpt.unit())
    }
}
