//! 8-bit unsigned shape

use super::expect_len;
use crate::error::Result;

/// Wire width in bytes
pub const WIDTH: usize = 1;

/// Pack an unsigned byte (1:1 copy).
#[inline]
pub const fn pack_u8(value: u8) -> [u8; WIDTH] {
    [value]
}

/// Unpack an unsigned byte.
#[inline]
pub fn unpack_u8(data: &[u8]) -> Result<u8> {
    let [byte] = expect_len::<WIDTH>(data)?;
    Ok(byte)
}
