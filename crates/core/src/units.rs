//! Units accepted on the wire and the two conversions the calculator applies.
//!
//! Everything downstream works in meters, cubic meters and kg/s.

use serde::Deserialize;

/// Cubic feet to cubic meters.
pub const FT3_TO_M3: f64 = 0.0283168;

/// Unit attached to a manually entered volume.
///
/// Unknown unit strings are kept and treated as cubic meters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum VolumeUnit {
    #[default]
    CubicMeters,
    CubicFeet,
    Other(String),
}

impl VolumeUnit {
    pub fn to_cubic_meters(&self, value: f64) -> f64 {
        match self {
            VolumeUnit::CubicFeet => value * FT3_TO_M3,
            VolumeUnit::CubicMeters | VolumeUnit::Other(_) => value,
        }
    }
}

impl From<String> for VolumeUnit {
    fn from(s: String) -> Self {
        match s.as_str() {
            "m3" => VolumeUnit::CubicMeters,
            "ft3" => VolumeUnit::CubicFeet,
            _ => VolumeUnit::Other(s),
        }
    }
}

/// Unit attached to a vapor mass flow rate.
///
/// Anything not recognised is read as kg/s.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum FlowRateUnit {
    #[default]
    KgPerSecond,
    KgPerMinute,
    KgPerHour,
    Other(String),
}

impl FlowRateUnit {
    pub fn to_kg_per_s(&self, value: f64) -> f64 {
        match self {
            FlowRateUnit::KgPerMinute => value / 60.0,
            FlowRateUnit::KgPerHour => value / 3600.0,
            FlowRateUnit::KgPerSecond | FlowRateUnit::Other(_) => value,
        }
    }
}

impl From<String> for FlowRateUnit {
    fn from(s: String) -> Self {
        match s.as_str() {
            "kg/s" => FlowRateUnit::KgPerSecond,
            "kg/min" => FlowRateUnit::KgPerMinute,
            "kg/h" => FlowRateUnit::KgPerHour,
            _ => FlowRateUnit::Other(s),
        }
    }
}

/// Apply an optional multiplicative length scale. Absent or zero means 1.
pub fn scale_length(value: f64, factor: Option<f64>) -> f64 {
    match factor {
        Some(f) if f != 0.0 => value * f,
        _ => value,
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
