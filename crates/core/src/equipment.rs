//! Equipment types and the liquid-volume fraction each one is assumed to hold.

use core::str::FromStr;

/// Key that selects a user-supplied percentage instead of the table.
pub const CUSTOM_KEY: &str = "custom";

/// Equipment categories with a tabulated liquid-volume fraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EquipmentType {
    ColumnTop,
    ColumnMiddle,
    ColumnBottom,
    Drum,
    KnockOutDrum,
    Compressor,
    Pump,
    HeatExchanger,
    FinFan,
    Filter,
    Pipe,
    Reactor,
}

/// Fraction of vessel volume occupied by liquid, per equipment type.
///
/// `Compressor` is deliberately 0; a zero fraction is rejected downstream the
/// same way a missing one is.
pub const LIQUID_FRACTIONS: [(EquipmentType, f64); 12] = [
    (EquipmentType::ColumnTop, 0.25),
    (EquipmentType::ColumnMiddle, 0.25),
    (EquipmentType::ColumnBottom, 0.37),
    (EquipmentType::Drum, 0.50),
    (EquipmentType::KnockOutDrum, 0.10),
    (EquipmentType::Compressor, 0.0),
    (EquipmentType::Pump, 1.0),
    (EquipmentType::HeatExchanger, 0.50),
    (EquipmentType::FinFan, 0.25),
    (EquipmentType::Filter, 1.0),
    (EquipmentType::Pipe, 1.0),
    (EquipmentType::Reactor, 0.15),
];

impl EquipmentType {
    pub const ALL: [EquipmentType; 12] = [
        EquipmentType::ColumnTop,
        EquipmentType::ColumnMiddle,
        EquipmentType::ColumnBottom,
        EquipmentType::Drum,
        EquipmentType::KnockOutDrum,
        EquipmentType::Compressor,
        EquipmentType::Pump,
        EquipmentType::HeatExchanger,
        EquipmentType::FinFan,
        EquipmentType::Filter,
        EquipmentType::Pipe,
        EquipmentType::Reactor,
    ];

    /// Wire key, as submitted in `equipmentType`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::ColumnTop => "COLTOP",
            EquipmentType::ColumnMiddle => "COLMID",
            EquipmentType::ColumnBottom => "COLBTM",
            EquipmentType::Drum => "DRUM",
            EquipmentType::KnockOutDrum => "KODRUM",
            EquipmentType::Compressor => "COMP",
            EquipmentType::Pump => "PUMP",
            EquipmentType::HeatExchanger => "HEX",
            EquipmentType::FinFan => "FINFAN",
            EquipmentType::Filter => "FILTER",
            EquipmentType::Pipe => "PIPE",
            EquipmentType::Reactor => "REACTOR",
        }
    }

    pub fn liquid_fraction(&self) -> f64 {
        LIQUID_FRACTIONS
            .iter()
            .find(|(kind, _)| kind == self)
            .map_or(0.0, |(_, fraction)| *fraction)
    }
}

impl core::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown equipment type: {s}"))
    }
}

/// Resolve the liquid fraction for an `equipmentType` key.
///
/// `custom` reads `custom_percent` (0–100). Unknown or missing keys, and a
/// missing custom percentage, resolve to 0.
pub fn resolve_liquid_fraction(equipment_type: Option<&str>, custom_percent: Option<f64>) -> f64 {
    match equipment_type {
        Some(CUSTOM_KEY) => custom_percent.map_or(0.0, |p| p / 100.0),
        Some(key) => key
            .parse::<EquipmentType>()
            .map_or(0.0, |kind| kind.liquid_fraction()),
        None => 0.0,
    }
}
