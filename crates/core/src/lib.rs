//! `holdup-core`: vessel volume and inventory calculation.
//!
//! This crate is **pure domain** logic: no IO, no HTTP, no process state.

pub mod calculator;
pub mod equipment;
pub mod error;
pub mod geometry;
pub mod request;
pub mod units;
pub mod wire;

pub use calculator::{CalculationResult, compute};
pub use equipment::EquipmentType;
pub use error::{CalcError, CalcResult};
pub use geometry::{HeadType, Shape, VesselGeometry};
pub use request::{CalculationRequest, Phase};
pub use units::{FlowRateUnit, VolumeUnit};
