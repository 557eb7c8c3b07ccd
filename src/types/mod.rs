pub use uom::si::f64::{Length, Mass};
pub use uom::si::length::{centimeter, meter, millimeter};
pub use uom::si::mass::{kilogram, ton};

use serde::{Deserialize, Serialize};

/// Linear unit accepted for user-entered dimensions.
///
/// All calculation happens in metres; these exist so callers can pass
/// whatever the tape measure said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionUnit {
    #[serde(rename = "m")]
    Metres,
    #[serde(rename = "cm")]
    Centimetres,
    #[serde(rename = "mm")]
    Millimetres,
}

impl DimensionUnit {
    /// Convert a raw value in this unit to metres.
    pub fn to_metres(self, value: f64) -> f64 {
        let length = match self {
            DimensionUnit::Metres => Length::new::<meter>(value),
            DimensionUnit::Centimetres => Length::new::<centimeter>(value),
            DimensionUnit::Millimetres => Length::new::<millimeter>(value),
        };
        length.get::<meter>()
    }

    /// Parse a unit label as entered by a user.
    pub fn parse(unit: &str) -> Option<Self> {
        match unit {
            "m" | "M" | "metre" | "Metre" | "metres" | "Metres" | "meter" | "Meter" | "meters"
            | "Meters" => Some(DimensionUnit::Metres),
            "cm" | "Cm" | "CM" | "centimetre" | "Centimetre" | "centimetres" | "Centimetres"
            | "centimeter" | "Centimeter" | "centimeters" | "Centimeters" => {
                Some(DimensionUnit::Centimetres)
            }
            "mm" | "Mm" | "MM" | "millimetre" | "Millimetre" | "millimetres" | "Millimetres"
            | "millimeter" | "Millimeter" | "millimeters" | "Millimeters" => {
                Some(DimensionUnit::Millimetres)
            }
            _ => None,
        }
    }
}

/// Round to 2 decimal places (user-facing angles, factors, weights in kg).
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places (volumes in m³, weights in tonnes).
#[inline]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
