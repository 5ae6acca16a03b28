//! Datapoint values
//!
//! A value pairs one scalar with the DPT that gives it meaning. All value
//! types share one capability set, expressed by [`Datapoint`]; the tagged
//! [`DatapointValue`] enum dispatches over them when the type is only known
//! at runtime.

use core::fmt::{self, Write};

use crate::dpt::{BooleanValue, FloatValue, Payload, ScaledValue};
use crate::error::Result;

/// Capacity of [`Datapoint::render`] output; fits any finite `f32` with unit
pub const RENDER_CAPACITY: usize = 64;

/// Common capability set of every datapoint value.
pub trait Datapoint: fmt::Display {
    /// DPT identifier (e.g. `"9.001"`)
    fn identifier(&self) -> &'static str;

    /// Unit string, empty for unitless types
    fn unit(&self) -> &'static str;

    /// Encode the current value, clipping it into range first
    fn pack(&self) -> Payload;

    /// Replace the current value with one decoded from `data`
    ///
    /// On error the value is left unchanged.
    fn unpack(&mut self, data: &[u8]) -> Result<()>;

    /// Display text in a fixed-capacity buffer
    fn render(&self) -> heapless::String<RENDER_CAPACITY> {
        let mut out = heapless::String::new();
        // Only non-finite or huge unclipped values can come close to the capacity
        if write!(out, "{self}").is_err() {
            dpt_log!(warn, "DPT {}: rendered text truncated", self.identifier());
        }
        out
    }
}

/// A datapoint value of any supported type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DatapointValue {
    /// DPT 1.xxx
    Boolean(BooleanValue),
    /// DPT 5.xxx
    Scaled(ScaledValue),
    /// DPT 9.xxx
    Float(FloatValue),
}

impl DatapointValue {
    fn inner(&self) -> &dyn Datapoint {
        match self {
            DatapointValue::Boolean(v) => v,
            DatapointValue::Scaled(v) => v,
            DatapointValue::Float(v) => v,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Datapoint {
        match self {
            DatapointValue::Boolean(v) => v,
            DatapointValue::Scaled(v) => v,
            DatapointValue::Float(v) => v,
        }
    }

    /// Boolean payload, if this is a DPT 1.xxx value
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            DatapointValue::Boolean(v) => Some(v.value()),
            _ => None,
        }
    }

    /// Numeric payload, if this is a DPT 5.xxx or 9.xxx value
    pub const fn as_f32(&self) -> Option<f32> {
        match self {
            DatapointValue::Scaled(v) => Some(v.value()),
            DatapointValue::Float(v) => Some(v.value()),
            DatapointValue::Boolean(_) => None,
        }
    }
}

impl Datapoint for DatapointValue {
    fn identifier(&self) -> &'static str {
        self.inner().identifier()
    }

    fn unit(&self) -> &'static str {
        self.inner().unit()
    }

    fn pack(&self) -> Payload {
        self.inner().pack()
    }

    fn unpack(&mut self, data: &[u8]) -> Result<()> {
        self.inner_mut().unpack(data)
    }
}

impl fmt::Display for DatapointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl From<BooleanValue> for DatapointValue {
    fn from(value: BooleanValue) -> Self {
        DatapointValue::Boolean(value)
    }
}

impl From<ScaledValue> for DatapointValue {
    fn from(value: ScaledValue) -> Self {
        DatapointValue::Scaled(value)
    }
}

impl From<FloatValue> for DatapointValue {
    fn from(value: FloatValue) -> Self {
        DatapointValue::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dpt::{Dpt1, Dpt5, Dpt9};

    fn samples() -> [DatapointValue; 4] {
        [
            BooleanValue::new(Dpt1::Switch, true).into(),
            ScaledValue::new(Dpt5::Scaling, 50.0).into(),
            ScaledValue::new(Dpt5::Angle, 180.0).into(),
            FloatValue::new(Dpt9::Temperature, 21.6).into(),
        ]
    }

    #[test]
    fn test_dispatch_identifier_and_unit() {
        let ids: Vec<_> = samples().iter().map(Datapoint::identifier).collect();
        assert_eq!(ids, ["1.001", "5.001", "5.003", "9.001"]);

        let units: Vec<_> = samples().iter().map(Datapoint::unit).collect();
        assert_eq!(units, ["", "%", "°", "°C"]);
    }

    #[test]
    fn test_dispatch_pack() {
        let [switch, scaling, angle, temp] = samples();
        assert_eq!(switch.pack(), [0x01]);
        assert_eq!(scaling.pack(), [0x80]);
        assert_eq!(angle.pack(), [0x80]);
        assert_eq!(temp.pack(), [0x0C, 0x38]);
    }

    #[test]
    fn test_dispatch_unpack() {
        let mut value = DatapointValue::from(FloatValue::new(Dpt9::Illumination, 0.0));
        value.unpack(&[0x0C, 0x38]).unwrap();
        assert!((value.as_f32().unwrap() - 21.6).abs() < 0.01);

        // Range error leaves the previous reading in place
        assert!(value.unpack(&[0x86, 0x0C]).unwrap_err().is_out_of_range());
        assert!((value.as_f32().unwrap() - 21.6).abs() < 0.01);
        assert_eq!(value.as_bool(), None);
    }

    #[test]
    fn test_render_matches_display() {
        for value in samples() {
            assert_eq!(value.render().as_str(), value.to_string());
        }
        assert_eq!(samples()[0].render().as_str(), "On");
        assert_eq!(samples()[3].render().as_str(), "21.60 °C");
    }

    #[test]
    fn test_render_extreme_values_fit() {
        let huge = FloatValue::new(Dpt9::Temperature, f32::MAX);
        assert_eq!(huge.render().as_str(), huge.to_string());

        let tiny = FloatValue::new(Dpt9::Temperature, f32::MIN);
        assert_eq!(tiny.render().as_str(), tiny.to_string());
    }
}
