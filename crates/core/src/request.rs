use serde::Deserialize;

use crate::geometry::{HeadType, Shape};
use crate::units::{FlowRateUnit, VolumeUnit};
use crate::wire;

/// Which inventories a request asks for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Phase {
    Liquid,
    Vapor,
    Both,
    Other(String),
}

impl Phase {
    pub fn includes_liquid(&self) -> bool {
        matches!(self, Phase::Liquid | Phase::Both)
    }

    pub fn includes_vapor(&self) -> bool {
        matches!(self, Phase::Vapor | Phase::Both)
    }
}

impl From<String> for Phase {
    fn from(s: String) -> Self {
        match s.as_str() {
            "liquid" => Phase::Liquid,
            "vapor" => Phase::Vapor,
            "both" => Phase::Both,
            _ => Phase::Other(s),
        }
    }
}

/// A single inventory calculation request, as posted by the sizing form.
///
/// Field names follow the form's JSON keys. Every field is optional on the
/// wire; the calculator decides which ones a given branch needs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub shape: Option<Shape>,
    #[serde(default)]
    pub phase: Option<Phase>,

    #[serde(default, deserialize_with = "wire::flag")]
    pub manual: bool,
    #[serde(rename = "volumeInput", default, deserialize_with = "wire::number")]
    pub volume_input: Option<f64>,
    #[serde(rename = "volumeUnit", default)]
    pub volume_unit: Option<VolumeUnit>,

    #[serde(rename = "inv_diameter", default, deserialize_with = "wire::number")]
    pub diameter: Option<f64>,
    #[serde(rename = "inv_length", default, deserialize_with = "wire::number")]
    pub length: Option<f64>,
    #[serde(rename = "inv_diameterUnit", default, deserialize_with = "wire::number")]
    pub diameter_scale: Option<f64>,
    #[serde(rename = "inv_lengthUnit", default, deserialize_with = "wire::number")]
    pub length_scale: Option<f64>,

    #[serde(rename = "addHead", default, deserialize_with = "wire::flag")]
    pub add_head: bool,
    #[serde(rename = "headType", default)]
    pub head_type: Option<HeadType>,
    #[serde(rename = "headCount", default, deserialize_with = "wire::count")]
    pub head_count: Option<u32>,

    #[serde(rename = "equipmentType", default)]
    pub equipment_type: Option<String>,
    #[serde(rename = "customPercent", default, deserialize_with = "wire::number")]
    pub custom_percent: Option<f64>,
    #[serde(default, deserialize_with = "wire::number")]
    pub density: Option<f64>,

    #[serde(rename = "flowRate", default, deserialize_with = "wire::number")]
    pub flow_rate: Option<f64>,
    #[serde(rename = "flowRateUnit", default)]
    pub flow_rate_unit: Option<FlowRateUnit>,
}
