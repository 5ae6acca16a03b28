#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # knx-dpt
//!
//! KNX datapoint type codecs for embedded and hosted systems.
//!
//! ## Features
//!
//! - Primitive wire shapes: 1-bit, 8-bit unsigned, 2-byte KNX float
//! - DPT 1.xxx, 5.xxx and 9.xxx value types with clipping and range checks
//! - `no_std`, no allocation, no state between calls
//! - Optional `log`/`defmt` logging and `serde` support

// Macro modules (must be declared before use)
#[macro_use]
mod logging;

pub mod dpt;
pub mod error;
pub mod primitive;

// Re-export commonly used types
#[doc(inline)]
pub use dpt::{
    BooleanValue, Datapoint, DatapointValue, Dpt1, Dpt5, Dpt9, DptDecode, DptEncode, FloatValue,
    Payload, ScaledValue,
};
#[doc(inline)]
pub use error::{DptError, LengthError, RangeError, Result};
