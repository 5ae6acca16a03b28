//! Error types for datapoint encoding and decoding.
//!
//! Encoding never fails: out-of-range values are clipped before they reach
//! the wire. Decoding fails in exactly two ways, each carried by its own
//! structured error type (with a backtrace when `std` is enabled).

use core::fmt;

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// Result type alias for DPT operations.
pub type Result<T> = core::result::Result<T, DptError>;

// =============================================================================
// Main Error Type
// =============================================================================

/// Datapoint decoding error.
///
/// This is the error type returned by every `unpack`/`decode` operation.
#[derive(Debug)]
pub enum DptError {
    /// The input buffer does not have the fixed wire width of the type
    Length(LengthError),
    /// The decoded value lies outside the semantic range of the type
    Range(RangeError),
}

// =============================================================================
// Structured Error Types
// =============================================================================

/// Wire width mismatch with optional backtrace
#[derive(Debug)]
pub struct LengthError {
    expected: usize,
    actual: usize,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl LengthError {
    pub(crate) fn new(expected: usize, actual: usize) -> Self {
        Self {
            expected,
            actual,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Wire width the type requires, in bytes
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Length of the buffer that was supplied
    pub fn actual(&self) -> usize {
        self.actual
    }

    /// Backtrace captured when the error was created
    #[cfg(feature = "std")]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

/// Semantic range violation with optional backtrace
#[derive(Debug)]
pub struct RangeError {
    dpt: &'static str,
    value: f32,
    min: f32,
    max: f32,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl RangeError {
    pub(crate) fn new(dpt: &'static str, value: f32, min: f32, max: f32) -> Self {
        Self {
            dpt,
            value,
            min,
            max,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Identifier of the DPT that rejected the value (e.g. `"9.001"`)
    pub fn dpt(&self) -> &'static str {
        self.dpt
    }

    /// The decoded value that was rejected
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Declared semantic range `(min, max)` of the DPT
    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Backtrace captured when the error was created
    #[cfg(feature = "std")]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

// =============================================================================
// Convenience Constructors for DptError
// =============================================================================

impl DptError {
    pub(crate) fn length(expected: usize, actual: usize) -> Self {
        Self::Length(LengthError::new(expected, actual))
    }

    pub(crate) fn out_of_range(dpt: &'static str, value: f32, min: f32, max: f32) -> Self {
        Self::Range(RangeError::new(dpt, value, min, max))
    }

    /// Check if the input buffer had the wrong length
    pub fn is_length(&self) -> bool {
        matches!(self, DptError::Length(_))
    }

    /// Check if the decoded value is out of range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, DptError::Range(_))
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} bytes, got {}", self.expected, self.actual)
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DPT {}: value \"{:.2}\" outside range [{}, {}]",
            self.dpt, self.value, self.min, self.max
        )
    }
}

impl fmt::Display for DptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DptError::Length(e) => write!(f, "Length error: {e}"),
            DptError::Range(e) => write!(f, "Range error: {e}"),
        }
    }
}

// Backtrace is not defmt-formattable, so this is written out by hand
#[cfg(feature = "defmt")]
impl defmt::Format for DptError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DptError::Length(e) => {
                defmt::write!(f, "Length error: expected {} bytes, got {}", e.expected, e.actual);
            }
            DptError::Range(e) => {
                defmt::write!(
                    f,
                    "Range error: DPT {}: value {} outside range [{}, {}]",
                    e.dpt,
                    e.value,
                    e.min,
                    e.max
                );
            }
        }
    }
}

// Implement std::error::Error for std-based applications
#[cfg(feature = "std")]
impl std::error::Error for LengthError {}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

#[cfg(feature = "std")]
impl std::error::Error for DptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DptError::Length(e) => Some(e),
            DptError::Range(e) => Some(e),
        }
    }
}
