//! Reference densities for common lifted materials.
//!
//! Immutable catalog data, versioned with the crate. Densities are bulk
//! figures in kg/m³ for estimating purposes, not lab values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialCategory {
    Metals,
    Construction,
    Timber,
    Liquids,
    Aggregates,
    Other,
}

impl MaterialCategory {
    pub const ALL: [MaterialCategory; 6] = [
        MaterialCategory::Metals,
        MaterialCategory::Construction,
        MaterialCategory::Timber,
        MaterialCategory::Liquids,
        MaterialCategory::Aggregates,
        MaterialCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MaterialCategory::Metals => "Metals",
            MaterialCategory::Construction => "Construction",
            MaterialCategory::Timber => "Timber",
            MaterialCategory::Liquids => "Liquids",
            MaterialCategory::Aggregates => "Aggregates",
            MaterialCategory::Other => "Other",
        }
    }
}

/// One catalog material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub id: &'static str,
    pub name: &'static str,

    /// Bulk density, kg/m³.
    pub density: f64,

    pub category: MaterialCategory,
    pub notes: Option<&'static str>,
    pub safety_notes: Option<&'static str>,
}

pub const MATERIALS: &[Material] = &[
    // Metals
    Material {
        id: "steel_mild",
        name: "Mild Steel",
        density: 7850.0,
        category: MaterialCategory::Metals,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "steel_stainless",
        name: "Stainless Steel",
        density: 8000.0,
        category: MaterialCategory::Metals,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "cast_iron",
        name: "Cast Iron",
        density: 7200.0,
        category: MaterialCategory::Metals,
        notes: Some("Brittle; avoid shock loading"),
        safety_notes: Some("Cast iron cracks under impact. Lift and land gently."),
    },
    Material {
        id: "aluminium",
        name: "Aluminium",
        density: 2700.0,
        category: MaterialCategory::Metals,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "copper",
        name: "Copper",
        density: 8960.0,
        category: MaterialCategory::Metals,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "brass",
        name: "Brass",
        density: 8500.0,
        category: MaterialCategory::Metals,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "lead",
        name: "Lead",
        density: 11340.0,
        category: MaterialCategory::Metals,
        notes: Some("Very dense for its size"),
        safety_notes: Some("Lead is toxic. Wear gloves and wash hands after handling."),
    },
    Material {
        id: "zinc",
        name: "Zinc",
        density: 7135.0,
        category: MaterialCategory::Metals,
        notes: None,
        safety_notes: None,
    },
    // Construction
    Material {
        id: "concrete",
        name: "Concrete",
        density: 2400.0,
        category: MaterialCategory::Construction,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "concrete_reinforced",
        name: "Reinforced Concrete",
        density: 2500.0,
        category: MaterialCategory::Construction,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "brick",
        name: "Brick",
        density: 1920.0,
        category: MaterialCategory::Construction,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "glass",
        name: "Glass",
        density: 2500.0,
        category: MaterialCategory::Construction,
        notes: None,
        safety_notes: Some("Fragile load. Use softeners and keep personnel clear."),
    },
    Material {
        id: "asphalt",
        name: "Asphalt",
        density: 2322.0,
        category: MaterialCategory::Construction,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "plasterboard",
        name: "Plasterboard",
        density: 950.0,
        category: MaterialCategory::Construction,
        notes: None,
        safety_notes: None,
    },
    // Timber
    Material {
        id: "pine",
        name: "Pine (softwood)",
        density: 500.0,
        category: MaterialCategory::Timber,
        notes: Some("Density varies with moisture content"),
        safety_notes: None,
    },
    Material {
        id: "oak",
        name: "Oak",
        density: 750.0,
        category: MaterialCategory::Timber,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "hardwood",
        name: "Hardwood (dense)",
        density: 900.0,
        category: MaterialCategory::Timber,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "plywood",
        name: "Plywood",
        density: 600.0,
        category: MaterialCategory::Timber,
        notes: None,
        safety_notes: None,
    },
    // Liquids
    Material {
        id: "water",
        name: "Water",
        density: 1000.0,
        category: MaterialCategory::Liquids,
        notes: None,
        safety_notes: Some("Free surface effect: part-filled containers shift mid-lift."),
    },
    Material {
        id: "diesel",
        name: "Diesel",
        density: 850.0,
        category: MaterialCategory::Liquids,
        notes: None,
        safety_notes: Some("Flammable. Keep ignition sources away from the lift zone."),
    },
    Material {
        id: "hydraulic_oil",
        name: "Hydraulic Oil",
        density: 870.0,
        category: MaterialCategory::Liquids,
        notes: None,
        safety_notes: None,
    },
    // Aggregates
    Material {
        id: "sand_dry",
        name: "Sand (dry)",
        density: 1600.0,
        category: MaterialCategory::Aggregates,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "sand_wet",
        name: "Sand (wet)",
        density: 1920.0,
        category: MaterialCategory::Aggregates,
        notes: Some("Wet sand is roughly 20% heavier than dry"),
        safety_notes: None,
    },
    Material {
        id: "gravel",
        name: "Gravel",
        density: 1680.0,
        category: MaterialCategory::Aggregates,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "soil",
        name: "Soil",
        density: 1400.0,
        category: MaterialCategory::Aggregates,
        notes: None,
        safety_notes: None,
    },
    // Other
    Material {
        id: "ice",
        name: "Ice",
        density: 917.0,
        category: MaterialCategory::Other,
        notes: None,
        safety_notes: Some("Slippery and melting; rig for a shifting load."),
    },
    Material {
        id: "rubber",
        name: "Rubber",
        density: 1100.0,
        category: MaterialCategory::Other,
        notes: None,
        safety_notes: None,
    },
    Material {
        id: "polyethylene",
        name: "Polyethylene",
        density: 950.0,
        category: MaterialCategory::Other,
        notes: None,
        safety_notes: None,
    },
];

/// Look up a material by catalog id.
pub fn material_by_id(id: &str) -> Option<&'static Material> {
    MATERIALS.iter().find(|m| m.id == id)
}

/// All materials in a category, in catalog order.
pub fn materials_by_category(category: MaterialCategory) -> Vec<&'static Material> {
    MATERIALS.iter().filter(|m| m.category == category).collect()
}
