//! Primitive wire shapes
//!
//! Low-level converters between a byte buffer and one underlying wire shape.
//! They know nothing about the semantic range of any datapoint type; the
//! [`dpt`](crate::dpt) module layers clipping and range checks on top.
//!
//! | Shape | Width | Payload |
//! |-------|-------|---------|
//! | [`bit`] | 1 byte | boolean in bit 0 |
//! | [`unsigned`] | 1 byte | `u8` as-is |
//! | [`float16`] | 2 bytes | `SEEE EMMM MMMM MMMM` KNX float |

use crate::error::{DptError, Result};

pub mod bit;
pub mod float16;
pub mod unsigned;

#[doc(inline)]
pub use bit::{pack_b1, unpack_b1};
#[doc(inline)]
pub use float16::{pack_f16, pack_f16_within, unpack_f16, Float16};
#[doc(inline)]
pub use unsigned::{pack_u8, unpack_u8};

/// Copy `data` into a fixed-width array, failing unless it is exactly `N` bytes.
#[inline]
pub(crate) fn expect_len<const N: usize>(data: &[u8]) -> Result<[u8; N]> {
    if data.len() != N {
        dpt_log!(debug, "expected {} bytes, got {}", N, data.len());
        return Err(DptError::length(N, data.len()));
    }

    let mut buf = [0u8; N];
    buf.copy_from_slice(data);
    Ok(buf)
}

/// Round half away from zero.
///
/// `f32::round` lives in `std`; this gets the same result from a truncating
/// cast, which is exact for the fractional part. Out-of-range inputs
/// saturate at `i32::MIN`/`i32::MAX`, NaN yields 0.
#[inline]
pub(crate) fn round_half_away(value: f32) -> i32 {
    let truncated = value as i32;
    let fraction = value - truncated as f32;

    if fraction >= 0.5 {
        truncated.saturating_add(1)
    } else if fraction <= -0.5 {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}
