//! KNX Datapoint Types (DPT)
//!
//! This module provides encoding and decoding for KNX Datapoint Types.
//! DPTs define how to interpret the data payload in KNX telegrams.
//!
//! ## Supported DPT Families
//!
//! - **DPT 1.xxx** - Boolean (1 bit): 1.001, 1.002, 1.003, 1.009, 1.010
//! - **DPT 5.xxx** - 8-bit unsigned: 5.001, 5.003, 5.004
//! - **DPT 9.xxx** - 2-byte float: 9.001, 9.004
//!
//! Each family is an enum whose variants are table data (identifier, unit,
//! range, labels) over one shared primitive encoder. Encoding never fails:
//! out-of-range input is clipped. Decoding checks the wire width and the
//! semantic range.
//!
//! ## Usage
//!
//! ```rust
//! use knx_dpt::dpt::{Dpt1, Dpt5, Dpt9, DptDecode, DptEncode};
//!
//! // Boolean value
//! let data = Dpt1::Switch.encode(true);
//! assert_eq!(data, [0x01]);
//! assert!(Dpt1::Switch.decode(&data)?);
//!
//! // Percentage (0-100%)
//! let data = Dpt5::Scaling.encode(50.0);
//! assert_eq!(data, [0x80]);
//!
//! // Temperature (°C)
//! let data = Dpt9::Temperature.encode(21.6);
//! assert_eq!(data, [0x0C, 0x38]);
//! let temp = Dpt9::Temperature.decode(&data)?;
//! assert!((temp - 21.6).abs() < 0.01);
//! # Ok::<(), knx_dpt::DptError>(())
//! ```

use core::ops::Deref;

use crate::error::Result;

pub mod dpt1;
pub mod dpt5;
pub mod dpt9;
pub mod value;

// Re-export common types
#[doc(inline)]
pub use dpt1::{BooleanValue, Dpt1};
#[doc(inline)]
pub use dpt5::{Dpt5, ScaledValue};
#[doc(inline)]
pub use dpt9::{Dpt9, FloatValue};
#[doc(inline)]
pub use value::{Datapoint, DatapointValue, RENDER_CAPACITY};

/// Widest wire encoding of any supported DPT, in bytes
pub const MAX_PAYLOAD_LEN: usize = 2;

/// Encoded datapoint bytes.
///
/// Fixed-capacity and `Copy`; dereferences to the encoded slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Payload {
    bytes: [u8; MAX_PAYLOAD_LEN],
    len: u8,
}

impl Payload {
    /// Single-byte payload
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            bytes: [byte, 0],
            len: 1,
        }
    }

    /// Two-byte payload
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self { bytes, len: 2 }
    }

    /// Encoded bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Encoded length in bytes
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false` for payloads produced by this crate
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for Payload {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<[u8; 1]> for Payload {
    fn from([byte]: [u8; 1]) -> Self {
        Self::from_byte(byte)
    }
}

impl From<[u8; 2]> for Payload {
    fn from(bytes: [u8; 2]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Payload {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<[u8]> for Payload {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

/// Trait for encoding values to KNX data format
pub trait DptEncode<T> {
    /// Encode a value to its KNX byte representation
    ///
    /// Never fails: values outside the semantic range are clipped to the
    /// nearest bound first.
    fn encode(&self, value: T) -> Payload;
}

/// Trait for decoding KNX data to values
pub trait DptDecode<T> {
    /// Decode KNX byte representation to a value
    ///
    /// # Errors
    /// - [`DptError::Length`](crate::DptError::Length) if `data` is not
    ///   exactly the wire width of the type
    /// - [`DptError::Range`](crate::DptError::Range) if the decoded value
    ///   falls outside the semantic range of the type
    fn decode(&self, data: &[u8]) -> Result<T>;
}

/// Bound `value` to `[min, max]`; NaN is treated as 0.
#[inline]
pub(crate) fn clip(dpt: &'static str, value: f32, min: f32, max: f32) -> f32 {
    let value = if value.is_nan() { 0.0 } else { value };
    let clipped = value.clamp(min, max);

    if clipped != value {
        dpt_log!(trace, "DPT {}: clipping {} to {}", dpt, value, clipped);
    }

    clipped
}
