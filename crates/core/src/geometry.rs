//! Vessel shapes, end heads and their internal volumes.

use std::f64::consts::PI;

use serde::Deserialize;

/// Number of heads assumed on a cylinder when none is given.
pub const DEFAULT_HEAD_COUNT: u32 = 2;

/// Vessel body shape as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Shape {
    Cylinder,
    Sphere,
    Other(String),
}

impl From<String> for Shape {
    fn from(s: String) -> Self {
        match s.as_str() {
            "cylinder" => Shape::Cylinder,
            "sphere" => Shape::Sphere,
            _ => Shape::Other(s),
        }
    }
}

/// End-cap geometry for a cylindrical vessel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum HeadType {
    Hemispherical,
    Torispherical,
    Ellipsoidal,
    Other(String),
}

impl HeadType {
    /// Volume of one head on a shell of diameter `d`.
    ///
    /// Unrecognised head types contribute nothing.
    pub fn volume(&self, d: f64) -> f64 {
        let r = d / 2.0;
        match self {
            HeadType::Hemispherical => (2.0 / 3.0) * PI * r.powi(3),
            HeadType::Torispherical => 0.9 * PI * r.powi(2) * (d / 4.0),
            HeadType::Ellipsoidal => (PI / 24.0) * d.powi(3),
            HeadType::Other(_) => 0.0,
        }
    }
}

impl From<String> for HeadType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "hemihead" => HeadType::Hemispherical,
            "torispherical" => HeadType::Torispherical,
            "ellipsoidalhead" => HeadType::Ellipsoidal,
            _ => HeadType::Other(s),
        }
    }
}

/// Heads fitted to a cylinder.
#[derive(Debug, Clone, PartialEq)]
pub struct Heads {
    pub kind: Option<HeadType>,
    pub count: u32,
}

impl Heads {
    /// A zero count is treated the same as no count.
    pub fn new(kind: Option<HeadType>, count: Option<u32>) -> Self {
        Self {
            kind,
            count: count.filter(|c| *c != 0).unwrap_or(DEFAULT_HEAD_COUNT),
        }
    }

    pub fn volume(&self, d: f64) -> f64 {
        let single = self.kind.as_ref().map_or(0.0, |k| k.volume(d));
        f64::from(self.count) * single
    }
}

/// Resolved vessel geometry, dimensions already in meters.
#[derive(Debug, Clone, PartialEq)]
pub enum VesselGeometry {
    Cylinder {
        diameter: f64,
        length: f64,
        heads: Option<Heads>,
    },
    Sphere {
        diameter: f64,
    },
}

impl VesselGeometry {
    /// Internal volume in cubic meters.
    pub fn volume(&self) -> f64 {
        match self {
            VesselGeometry::Cylinder {
                diameter,
                length,
                heads,
            } => {
                let shell = cylinder_volume(*diameter, *length);
                shell + heads.as_ref().map_or(0.0, |h| h.volume(*diameter))
            }
            VesselGeometry::Sphere { diameter } => sphere_volume(*diameter),
        }
    }
}

pub fn cylinder_volume(d: f64, l: f64) -> f64 {
    PI * (d / 2.0).powi(2) * l
}

pub fn sphere_volume(d: f64) -> f64 {
    (4.0 / 3.0) * PI * (d / 2.0).powi(3)
}
