//! DPT 1.xxx - Boolean (1-bit)
//!
//! Boolean datapoint types represent binary states (on/off, true/false, etc.)
//! encoded as a single bit (LSB of the data byte).
//!
//! ## Format
//!
//! - 7 bits: unused (written as 0, ignored on decode)
//! - 1 bit: data
//!   - `0` = false/off/disable/...
//!   - `1` = true/on/enable/...
//!
//! ## Supported Subtypes
//!
//! - **1.001** - Switch (Off/On)
//! - **1.002** - Bool (False/True)
//! - **1.003** - Enable (Disable/Enable)
//! - **1.009** - OpenClose (Open/Close)
//! - **1.010** - Start (Stop/Start)
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{BooleanValue, Datapoint, Dpt1, DptDecode, DptEncode};
//!
//! // Turn on a switch
//! let data = Dpt1::Switch.encode(true); // [0x01]
//!
//! // Decode
//! let state = Dpt1::Switch.decode(&data)?; // true
//! assert!(state);
//!
//! // As a value object
//! let door = BooleanValue::new(Dpt1::OpenClose, true);
//! assert_eq!(door.render().as_str(), "Close");
//! # Ok::<(), knx_dpt::DptError>(())
//! ```

use core::fmt;

use crate::dpt::{Datapoint, DptDecode, DptEncode, Payload};
use crate::error::Result;
use crate::primitive::{bit, pack_b1, unpack_b1};

/// DPT 1.xxx Boolean types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dpt1 {
    /// DPT 1.001 - Switch (Off/On)
    Switch,
    /// DPT 1.002 - Bool (False/True)
    Bool,
    /// DPT 1.003 - Enable (Disable/Enable)
    Enable,
    /// DPT 1.009 - OpenClose (Open/Close)
    OpenClose,
    /// DPT 1.010 - Start (Stop/Start)
    Start,
}

impl Dpt1 {
    /// Wire width in bytes
    pub const WIRE_LEN: usize = bit::WIDTH;

    /// All supported subtypes
    pub const ALL: [Dpt1; 5] = [
        Dpt1::Switch,
        Dpt1::Bool,
        Dpt1::Enable,
        Dpt1::OpenClose,
        Dpt1::Start,
    ];

    /// Get the DPT identifier string (e.g., "1.001")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt1::Switch => "1.001",
            Dpt1::Bool => "1.002",
            Dpt1::Enable => "1.003",
            Dpt1::OpenClose => "1.009",
            Dpt1::Start => "1.010",
        }
    }

    /// Boolean types are unitless
    pub const fn unit(&self) -> &'static str {
        ""
    }

    /// Get display labels for false/true values
    ///
    /// Returns a tuple (false_label, true_label)
    pub const fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Dpt1::Switch => ("Off", "On"),
            Dpt1::Bool => ("False", "True"),
            Dpt1::Enable => ("Disable", "Enable"),
            Dpt1::OpenClose => ("Open", "Close"),
            Dpt1::Start => ("Stop", "Start"),
        }
    }

    /// Label for a given state
    pub const fn label(&self, value: bool) -> &'static str {
        let (off, on) = self.labels();
        if value {
            on
        } else {
            off
        }
    }
}

impl DptEncode<bool> for Dpt1 {
    fn encode(&self, value: bool) -> Payload {
        Payload::from(pack_b1(value))
    }
}

impl DptDecode<bool> for Dpt1 {
    fn decode(&self, data: &[u8]) -> Result<bool> {
        unpack_b1(data)
    }
}

/// A boolean reading tagged with its DPT 1.xxx subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BooleanValue {
    dpt: Dpt1,
    value: bool,
}

impl BooleanValue {
    pub const fn new(dpt: Dpt1, value: bool) -> Self {
        Self { dpt, value }
    }

    /// Decode a fresh value from wire bytes
    pub fn from_bytes(dpt: Dpt1, data: &[u8]) -> Result<Self> {
        Ok(Self::new(dpt, dpt.decode(data)?))
    }

    pub const fn dpt(&self) -> Dpt1 {
        self.dpt
    }

    pub const fn value(&self) -> bool {
        self.value
    }
}

impl Datapoint for BooleanValue {
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

impl fmt::Display for BooleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dpt.label(self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DptError;

    #[test]
    fn test_encode_false() {
        assert_eq!(Dpt1::Switch.encode(false), [0x00]);
    }

    #[test]
    fn test_encode_true() {
        assert_eq!(Dpt1::Switch.encode(true), [0x01]);
    }

    #[test]
    fn test_decode_false() {
        let result = Dpt1::Switch.decode(&[0x00]).unwrap();
        assert_eq!(result, false);
    }

    #[test]
    fn test_decode_true() {
        let result = Dpt1::Switch.decode(&[0x01]).unwrap();
        assert_eq!(result, true);
    }

    #[test]
    fn test_decode_with_upper_bits_set() {
        // Upper bits should be ignored
        assert_eq!(Dpt1::Switch.decode(&[0xFF]).unwrap(), true);
        assert_eq!(Dpt1::Switch.decode(&[0xFE]).unwrap(), false);
    }

    #[test]
    fn test_decode_empty_data() {
        let result = Dpt1::Switch.decode(&[]);
        assert!(matches!(result, Err(DptError::Length(_))));
    }

    #[test]
    fn test_decode_too_long() {
        let result = Dpt1::Start.decode(&[0x01, 0x00]);
        assert!(matches!(result, Err(DptError::Length(_))));
    }

    #[test]
    fn test_round_trip_all_subtypes() {
        for dpt in Dpt1::ALL {
            for state in [false, true] {
                let encoded = dpt.encode(state);
                assert_eq!(encoded.len(), Dpt1::WIRE_LEN);
                assert_eq!(dpt.decode(&encoded).unwrap(), state);
            }
        }
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Dpt1::Switch.identifier(), "1.001");
        assert_eq!(Dpt1::Bool.identifier(), "1.002");
        assert_eq!(Dpt1::Enable.identifier(), "1.003");
        assert_eq!(Dpt1::OpenClose.identifier(), "1.009");
        assert_eq!(Dpt1::Start.identifier(), "1.010");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Dpt1::Switch.labels(), ("Off", "On"));
        assert_eq!(Dpt1::Bool.labels(), ("False", "True"));
        assert_eq!(Dpt1::Enable.labels(), ("Disable", "Enable"));
        assert_eq!(Dpt1::OpenClose.labels(), ("Open", "Close"));
        assert_eq!(Dpt1::Start.labels(), ("Stop", "Start"));
    }

    #[test]
    fn test_unit_is_empty() {
        for dpt in Dpt1::ALL {
            assert_eq!(dpt.unit(), "");
        }
    }

    #[test]
    fn test_value_display() {
        assert_eq!(BooleanValue::new(Dpt1::Switch, true).to_string(), "On");
        assert_eq!(BooleanValue::new(Dpt1::Switch, false).to_string(), "Off");
        assert_eq!(BooleanValue::new(Dpt1::OpenClose, true).to_string(), "Close");
        assert_eq!(BooleanValue::new(Dpt1::Start, false).to_string(), "Stop");
    }

    #[test]
    fn test_value_unpack_keeps_state_on_error() {
        let mut value = BooleanValue::new(Dpt1::Enable, true);
        assert!(value.unpack(&[]).is_err());
        assert!(value.value());

        value.unpack(&[0x00]).unwrap();
        assert!(!value.value());
        assert_eq!(value.pack(), [0x00]);
    }

    #[test]
    fn test_semantic_interpretation() {
        // Same binary representation, different meaning
        let switch_on = BooleanValue::new(Dpt1::Switch, true);
        let door_close = BooleanValue::new(Dpt1::OpenClose, true);

        assert_eq!(switch_on.pack(), door_close.pack());
        assert_eq!(switch_on.to_string(), "On");
        assert_eq!(door_close.to_string(), "Close");
    }
}
