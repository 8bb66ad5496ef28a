//! Volume and inventory calculation.
//!
//! Pure and deterministic: the same request always produces the same result.

use serde::{Deserialize, Serialize};

use crate::equipment::resolve_liquid_fraction;
use crate::error::{CalcError, CalcResult, MISSING_DENSITY_OR_PERCENT};
use crate::geometry::{Heads, Shape, VesselGeometry};
use crate::request::{CalculationRequest, Phase};
use crate::units::{round2, scale_length};

/// Converts a normalised vapor flow (kg/s) into a vapor inventory.
pub const VAPOR_INVENTORY_FACTOR: f64 = 180.0;

/// Outcome of a calculation. Inventories not asked for by the phase are `None`
/// and serialize as `null`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub volume: f64,
    pub liquid_inventory: Option<f64>,
    pub vapor_inventory: Option<f64>,
}

/// Run a calculation.
///
/// The reported volume is rounded to two decimals, and the liquid inventory
/// is derived from that reported value.
pub fn compute(request: &CalculationRequest) -> CalcResult<CalculationResult> {
    let volume = round2(finite(resolve_volume(request)?, "volume")?);
    let phase = request.phase.as_ref();

    let liquid_inventory = match phase {
        Some(p) if p.includes_liquid() => Some(liquid_inventory(request, volume)?),
        _ => None,
    };
    let vapor_inventory = match phase {
        Some(p) if p.includes_vapor() => Some(vapor_inventory(request)?),
        _ => None,
    };

    Ok(CalculationResult {
        volume,
        liquid_inventory,
        vapor_inventory,
    })
}

/// Volume in cubic meters, before rounding.
///
/// Manual entry wins over geometry. Geometry is skipped for vapor-only
/// requests; those and unrecognised shapes give 0.
pub fn resolve_volume(request: &CalculationRequest) -> CalcResult<f64> {
    if request.manual {
        let input = request
            .volume_input
            .ok_or_else(|| CalcError::not_a_number("volumeInput"))?;
        let unit = request.volume_unit.clone().unwrap_or_default();
        return Ok(unit.to_cubic_meters(input));
    }

    let Some(shape) = request.shape.as_ref() else {
        return Ok(0.0);
    };
    if request.phase == Some(Phase::Vapor) {
        return Ok(0.0);
    }

    match geometry(shape, request)? {
        Some(g) => Ok(g.volume()),
        None => Ok(0.0),
    }
}

fn geometry(shape: &Shape, request: &CalculationRequest) -> CalcResult<Option<VesselGeometry>> {
    let geometry = match shape {
        Shape::Cylinder => {
            let heads = request
                .add_head
                .then(|| Heads::new(request.head_type.clone(), request.head_count));
            VesselGeometry::Cylinder {
                diameter: diameter(request)?,
                length: length(request)?,
                heads,
            }
        }
        Shape::Sphere => VesselGeometry::Sphere {
            diameter: diameter(request)?,
        },
        Shape::Other(_) => return Ok(None),
    };
    Ok(Some(geometry))
}

fn diameter(request: &CalculationRequest) -> CalcResult<f64> {
    let d = request
        .diameter
        .ok_or_else(|| CalcError::not_a_number("inv_diameter"))?;
    Ok(scale_length(d, request.diameter_scale))
}

fn length(request: &CalculationRequest) -> CalcResult<f64> {
    let l = request
        .length
        .ok_or_else(|| CalcError::not_a_number("inv_length"))?;
    Ok(scale_length(l, request.length_scale))
}

fn liquid_inventory(request: &CalculationRequest, volume: f64) -> CalcResult<f64> {
    let percent = resolve_liquid_fraction(request.equipment_type.as_deref(), request.custom_percent);
    let density = request.density.filter(|d| *d != 0.0);

    match density {
        Some(density) if percent != 0.0 => {
            Ok(round2(finite(volume * percent * density, "liquidInventory")?))
        }
        _ => Err(CalcError::validation(MISSING_DENSITY_OR_PERCENT)),
    }
}

// Sign and magnitude of the flow rate are not checked.
fn vapor_inventory(request: &CalculationRequest) -> CalcResult<f64> {
    let flow = request
        .flow_rate
        .ok_or_else(|| CalcError::not_a_number("flowRate"))?;
    let unit = request.flow_rate_unit.clone().unwrap_or_default();
    let inventory = unit.to_kg_per_s(flow) * VAPOR_INVENTORY_FACTOR;
    Ok(round2(finite(inventory, "vaporInventory")?))
}

fn finite(value: f64, what: &str) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::fault(format!("{what} is not a finite number")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HeadType;
    use crate::units::{FlowRateUnit, VolumeUnit};
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn cylinder(d: f64, l: f64, phase: Phase) -> CalculationRequest {
        CalculationRequest {
            shape: Some(Shape::Cylinder),
            phase: Some(phase),
            diameter: Some(d),
            length: Some(l),
            ..Default::default()
        }
    }

    #[test]
    fn drum_cylinder_liquid_inventory() {
        let req = CalculationRequest {
            equipment_type: Some("DRUM".into()),
            density: Some(1000.0),
            ..cylinder(2.0, 5.0, Phase::Liquid)
        };

        let out = compute(&req).unwrap();
        assert_eq!(out.volume, 15.71);
        assert_eq!(out.liquid_inventory, Some(7855.0));
        assert_eq!(out.vapor_inventory, None);
    }

    #[test]
    fn manual_cubic_feet_vapor_inventory() {
        let req = CalculationRequest {
            manual: true,
            volume_input: Some(100.0),
            volume_unit: Some(VolumeUnit::CubicFeet),
            phase: Some(Phase::Vapor),
            flow_rate: Some(60.0),
            flow_rate_unit: Some(FlowRateUnit::KgPerMinute),
            ..Default::default()
        };

        let out = compute(&req).unwrap();
        assert_eq!(out.volume, 2.83);
        assert_eq!(out.liquid_inventory, None);
        assert_eq!(out.vapor_inventory, Some(180.0));
    }

    #[test]
    fn manual_ignores_shape_and_unknown_units_pass_through() {
        let req = CalculationRequest {
            manual: true,
            volume_input: Some(12.344),
            volume_unit: Some(VolumeUnit::Other("litre".into())),
            shape: Some(Shape::Sphere),
            diameter: Some(10.0),
            ..Default::default()
        };
        assert_eq!(compute(&req).unwrap().volume, 12.34);
    }

    #[test]
    fn scale_factors_apply_to_dimensions() {
        let req = CalculationRequest {
            diameter_scale: Some(0.5),
            length_scale: Some(2.0),
            ..cylinder(4.0, 2.5, Phase::Other(String::new()))
        };
        // d = 2, l = 5
        assert_eq!(compute(&req).unwrap().volume, 15.71);
    }

    #[test]
    fn heads_are_added_to_cylinders() {
        let req = CalculationRequest {
            add_head: true,
            head_type: Some(HeadType::Hemispherical),
            ..cylinder(2.0, 5.0, Phase::Liquid)
        };
        let expected = round2(5.0 * PI + 2.0 * (2.0 / 3.0) * PI);
        assert_eq!(resolve_volume(&req).map(round2), Ok(expected));

        let three = CalculationRequest {
            head_count: Some(3),
            ..req.clone()
        };
        let expected = round2(5.0 * PI + 3.0 * (2.0 / 3.0) * PI);
        assert_eq!(resolve_volume(&three).map(round2), Ok(expected));
    }

    #[test]
    fn head_settings_are_ignored_for_spheres() {
        let req = CalculationRequest {
            shape: Some(Shape::Sphere),
            phase: Some(Phase::Liquid),
            diameter: Some(2.0),
            add_head: true,
            head_type: Some(HeadType::Hemispherical),
            ..Default::default()
        };
        assert_eq!(resolve_volume(&req), Ok(4.0 / 3.0 * PI));
    }

    #[test]
    fn vapor_only_geometry_gives_zero_volume() {
        let req = CalculationRequest {
            flow_rate: Some(1.0),
            ..cylinder(2.0, 5.0, Phase::Vapor)
        };
        let out = compute(&req).unwrap();
        assert_eq!(out.volume, 0.0);
        assert_eq!(out.vapor_inventory, Some(180.0));
    }

    #[test]
    fn unrecognised_or_missing_shape_gives_zero_volume() {
        let cone = CalculationRequest {
            shape: Some(Shape::Other("cone".into())),
            ..Default::default()
        };
        assert_eq!(resolve_volume(&cone), Ok(0.0));
        assert_eq!(resolve_volume(&CalculationRequest::default()), Ok(0.0));
    }

    #[test]
    fn compressor_is_rejected_not_zero() {
        let req = CalculationRequest {
            equipment_type: Some("COMP".into()),
            density: Some(1000.0),
            ..cylinder(2.0, 5.0, Phase::Liquid)
        };
        assert_eq!(
            compute(&req),
            Err(CalcError::Validation(MISSING_DENSITY_OR_PERCENT.into()))
        );
    }

    #[test]
    fn missing_density_is_rejected() {
        let req = CalculationRequest {
            equipment_type: Some("PUMP".into()),
            ..cylinder(2.0, 5.0, Phase::Both)
        };
        assert!(compute(&req).unwrap_err().is_validation());

        let zero = CalculationRequest {
            density: Some(0.0),
            ..req
        };
        assert!(compute(&zero).unwrap_err().is_validation());
    }

    #[test]
    fn custom_percent_drives_liquid_fraction() {
        let req = CalculationRequest {
            equipment_type: Some("custom".into()),
            custom_percent: Some(40.0),
            density: Some(500.0),
            ..cylinder(2.0, 5.0, Phase::Liquid)
        };
        assert_eq!(compute(&req).unwrap().liquid_inventory, Some(round2(15.71 * 0.4 * 500.0)));

        let without = CalculationRequest {
            custom_percent: None,
            ..req
        };
        assert!(compute(&without).unwrap_err().is_validation());
    }

    #[test]
    fn both_phase_reports_both_inventories() {
        let req = CalculationRequest {
            equipment_type: Some("REACTOR".into()),
            density: Some(800.0),
            flow_rate: Some(7200.0),
            flow_rate_unit: Some(FlowRateUnit::KgPerHour),
            ..cylinder(2.0, 5.0, Phase::Both)
        };
        let out = compute(&req).unwrap();
        assert_eq!(out.liquid_inventory, Some(round2(15.71 * 0.15 * 800.0)));
        assert_eq!(out.vapor_inventory, Some(360.0));
    }

    #[test]
    fn negative_flow_is_accepted() {
        let req = CalculationRequest {
            phase: Some(Phase::Vapor),
            flow_rate: Some(-2.0),
            ..Default::default()
        };
        assert_eq!(compute(&req).unwrap().vapor_inventory, Some(-360.0));
    }

    #[test]
    fn missing_numbers_are_faults() {
        let no_flow = CalculationRequest {
            phase: Some(Phase::Vapor),
            ..Default::default()
        };
        assert_eq!(compute(&no_flow), Err(CalcError::not_a_number("flowRate")));

        let no_length = CalculationRequest {
            length: None,
            ..cylinder(2.0, 5.0, Phase::Liquid)
        };
        assert_eq!(compute(&no_length), Err(CalcError::not_a_number("inv_length")));

        let no_volume = CalculationRequest {
            manual: true,
            ..Default::default()
        };
        assert_eq!(compute(&no_volume), Err(CalcError::not_a_number("volumeInput")));
    }

    #[test]
    fn overflow_is_a_fault() {
        let req = cylinder(1.0e200, 1.0e200, Phase::Other(String::new()));
        assert!(matches!(compute(&req), Err(CalcError::Fault(_))));
    }

    #[test]
    fn phase_without_inventories_still_reports_volume() {
        let out = compute(&cylinder(2.0, 5.0, Phase::Other("gas".into()))).unwrap();
        assert_eq!(out.volume, 15.71);
        assert_eq!(out.liquid_inventory, None);
        assert_eq!(out.vapor_inventory, None);
    }

    #[test]
    fn result_serializes_absent_inventories_as_null() {
        let out = CalculationResult {
            volume: 2.83,
            liquid_inventory: None,
            vapor_inventory: Some(180.0),
        };
        let v = serde_json::to_value(out).unwrap();
        assert_eq!(
            v,
            serde_json::json!({ "volume": 2.83, "liquidInventory": null, "vaporInventory": 180.0 })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Same request, same answer.
        #[test]
        fn compute_is_idempotent(d in 0.1f64..20.0, l in 0.1f64..50.0, density in 1.0f64..2000.0) {
            let req = CalculationRequest {
                equipment_type: Some("HEX".into()),
                density: Some(density),
                ..cylinder(d, l, Phase::Liquid)
            };
            prop_assert_eq!(compute(&req), compute(&req));
        }

        #[test]
        fn liquid_inventory_follows_table(d in 0.1f64..20.0, l in 0.1f64..50.0, density in 1.0f64..2000.0) {
            for (kind, fraction) in crate::equipment::LIQUID_FRACTIONS {
                if fraction == 0.0 {
                    continue;
                }
                let req = CalculationRequest {
                    equipment_type: Some(kind.as_str().into()),
                    density: Some(density),
                    ..cylinder(d, l, Phase::Liquid)
                };
                let out = compute(&req).unwrap();
                prop_assert_eq!(out.volume, round2(PI * (d / 2.0).powi(2) * l));
                prop_assert_eq!(out.liquid_inventory, Some(round2(out.volume * fraction * density)));
            }
        }

        #[test]
        fn manual_volume_rounds_input(v in 0.0f64..1.0e6) {
            let req = CalculationRequest {
                manual: true,
                volume_input: Some(v),
                ..Default::default()
            };
            prop_assert_eq!(compute(&req).unwrap().volume, round2(v));
        }

        #[test]
        fn vapor_units_divide_flow(flow in 0.0f64..1.0e5) {
            let per_min = CalculationRequest {
                phase: Some(Phase::Vapor),
                flow_rate: Some(flow),
                flow_rate_unit: Some(FlowRateUnit::KgPerMinute),
                ..Default::default()
            };
            prop_assert_eq!(compute(&per_min).unwrap().vapor_inventory, Some(round2(flow / 60.0 * 180.0)));

            let unitless = CalculationRequest { flow_rate_unit: None, ..per_min };
            prop_assert_eq!(compute(&unitless).unwrap().vapor_inventory, Some(round2(flow * 180.0)));
        }
    }
}
