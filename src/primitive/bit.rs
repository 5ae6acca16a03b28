//! 1-bit boolean shape
//!
//! One byte on the wire; only the least significant bit carries data.

use super::expect_len;
use crate::error::Result;

/// Wire width in bytes
pub const WIDTH: usize = 1;

/// Pack a boolean into a single byte (`0x00` or `0x01`).
#[inline]
pub const fn pack_b1(value: bool) -> [u8; WIDTH] {
    [value as u8]
}

/// Unpack a boolean from a single byte.
///
/// Upper bits are ignored.
#[inline]
pub fn unpack_b1(data: &[u8]) -> Result<bool> {
    let [byte] = expect_len::<WIDTH>(data)?;
    Ok(byte & 0x01 != 0)
}
