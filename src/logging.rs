//! Unified Logging Macro for KNX-DPT
//!
//! This module provides a single logging entry point that selects between
//! `log::` and `defmt::` based on the active feature flags, and compiles to
//! nothing when neither backend is enabled.
//!
//! # Usage
//!
//! ```text
//! dpt_log!(debug, "Received {} bytes", n);
//! dpt_log!(warn, "Mantissa saturated");
//! ```
//!
//! # Feature Flags
//!
//! - `log` - Uses the `log` crate (takes precedence when both are enabled)
//! - `defmt` - Uses `defmt::` (embedded targets)
//! - Neither - Arguments are evaluated by reference and discarded
//!
//! Format strings must stay within the subset both backends accept: plain
//! `{}` placeholders, no precision or width specifiers.

/// Unified logging macro - selects log:: or defmt:: based on features
#[cfg(feature = "log")]
macro_rules! dpt_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! dpt_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! dpt_log {
    ($level:ident, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}
