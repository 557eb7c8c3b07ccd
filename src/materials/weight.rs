use crate::materials::catalog::{Material, MaterialCategory, material_by_id};
use crate::types::{DimensionUnit, Mass, kilogram, round2, round3, ton};

/// User-entered box dimensions in a single linear unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDimensions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub unit: DimensionUnit,
}

impl BoxDimensions {
    pub fn new(width: f64, height: f64, length: f64, unit: DimensionUnit) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            length: Some(length),
            unit,
        }
    }
}

/// Estimated weight of a rectangular load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightResult {
    /// Volume in m³, rounded to 3 decimals.
    pub volume_m3: f64,

    /// Weight in kg, rounded to 2 decimals.
    pub weight_kg: f64,

    /// Weight in tonnes, rounded to 3 decimals.
    pub weight_tonnes: f64,

    pub material: &'static Material,
}

/// Estimate the weight of a box of the given material.
///
/// Returns `None` for an unknown material id or any missing/non-positive
/// dimension.
pub fn calculate_load_weight(dims: &BoxDimensions, material_id: &str) -> Option<WeightResult> {
    let material = material_by_id(material_id)?;

    let width = positive(dims.width)?;
    let height = positive(dims.height)?;
    let length = positive(dims.length)?;

    let volume = dims.unit.to_metres(width) * dims.unit.to_metres(height) * dims.unit.to_metres(length);
    let weight = Mass::new::<kilogram>(volume * material.density);

    Some(WeightResult {
        volume_m3: round3(volume),
        weight_kg: round2(weight.get::<kilogram>()),
        weight_tonnes: round3(weight.get::<ton>()),
        material,
    })
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Display a weight in the unit a rigger expects: tonnes from 1000 kg up,
/// kilograms below.
pub fn format_weight(weight_kg: f64) -> String {
    if weight_kg >= 1000.0 {
        format!("{:.2} tonnes", weight_kg / 1000.0)
    } else {
        format!("{:.1} kg", weight_kg)
    }
}

/// Display a volume in cm³, litres, or m³ depending on scale.
pub fn format_volume(volume_m3: f64) -> String {
    if volume_m3 < 0.001 {
        format!("{:.0} cm³", volume_m3 * 1_000_000.0)
    } else if volume_m3 < 1.0 {
        format!("{:.1} litres", volume_m3 * 1000.0)
    } else {
        format!("{:.3} m³", volume_m3)
    }
}

/// Weight above which the very-heavy-load advisory applies, kg.
pub const VERY_HEAVY_THRESHOLD_KG: f64 = 5000.0;

/// Weight above which the heavy-load advisory applies, kg.
pub const HEAVY_THRESHOLD_KG: f64 = 1000.0;

/// Advisories for lifting this material at this weight.
///
/// Fixed order: material-specific note, then weight tier, then category
/// handling advice.
pub fn get_safety_recommendations(material: &Material, weight_kg: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(notes) = material.safety_notes {
        recommendations.push(notes.to_string());
    }

    if weight_kg > VERY_HEAVY_THRESHOLD_KG {
        recommendations.push(
            "Very heavy load: confirm crane and rigging capacity with a lift supervisor before proceeding."
                .to_string(),
        );
    } else if weight_kg > HEAVY_THRESHOLD_KG {
        recommendations
            .push("Heavy load: check the working load limit of all rigging components.".to_string());
    }

    match material.category {
        MaterialCategory::Metals => {
            recommendations
                .push("Metal loads often have sharp edges. Protect slings at contact points.".to_string());
        }
        MaterialCategory::Liquids => {
            recommendations.push(
                "Check container integrity before lifting and have spill containment in place."
                    .to_string(),
            );
        }
        MaterialCategory::Aggregates => {
            recommendations.push(
                "Loose material spills easily. Lift in a container rated for the load.".to_string(),
            );
        }
        MaterialCategory::Construction if material.name.contains("Concrete") => {
            recommendations
                .push("Check for exposed reinforcement before attaching slings.".to_string());
        }
        _ => {}
    }

    recommendations
}

/// Factor applied to the load weight to get the minimum rigging capacity.
pub const DEFAULT_SAFETY_FACTOR: f64 = 2.0;

/// Minimum and recommended rigging capacity for a load, kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityRequirement {
    pub min_capacity_kg: f64,
    pub recommended_capacity_kg: f64,
}

/// Capacity a rigging arrangement must carry for the given load weight.
///
/// The recommended figure adds half a safety factor of headroom on top of
/// the minimum.
pub fn calculate_required_capacity(weight_kg: f64, safety_factor: f64) -> CapacityRequirement {
    CapacityRequirement {
        min_capacity_kg: (weight_kg * safety_factor).ceil(),
        recommended_capacity_kg: (weight_kg * (safety_factor + 0.5)).ceil(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_cubic_metre_of_steel() {
        let dims = BoxDimensions::new(1.0, 1.0, 1.0, DimensionUnit::Metres);
        let result = calculate_load_weight(&dims, "steel_mild").unwrap();

        assert_relative_eq!(result.volume_m3, 1.0);
        assert_relative_eq!(result.weight_kg, 7850.0);
        assert_relative_eq!(result.weight_tonnes, 7.85);
    }

    #[test]
    fn test_centimetre_input() {
        // 100 cm cube is 1 m³
        let dims = BoxDimensions::new(100.0, 100.0, 100.0, DimensionUnit::Centimetres);
        let result = calculate_load_weight(&dims, "water").unwrap();

        assert_relative_eq!(result.volume_m3, 1.0);
        assert_relative_eq!(result.weight_kg, 1000.0);
        assert_relative_eq!(result.weight_tonnes, 1.0);
    }

    #[test]
    fn test_millimetre_input_rounding() {
        // 400 mm × 300 mm × 200 mm of mild steel = 0.024 m³ → 188.4 kg
        let dims = BoxDimensions::new(400.0, 300.0, 200.0, DimensionUnit::Millimetres);
        let result = calculate_load_weight(&dims, "steel_mild").unwrap();

        assert_relative_eq!(result.volume_m3, 0.024);
        assert_relative_eq!(result.weight_kg, 188.4);
        assert_relative_eq!(result.weight_tonnes, 0.188);
    }

    #[test]
    fn test_unknown_material() {
        let dims = BoxDimensions::new(1.0, 1.0, 1.0, DimensionUnit::Metres);
        assert!(calculate_load_weight(&dims, "kryptonite").is_none());
    }

    #[test]
    fn test_missing_or_non_positive_dimension() {
        let mut dims = BoxDimensions::new(1.0, 1.0, 1.0, DimensionUnit::Metres);
        dims.height = None;
        assert!(calculate_load_weight(&dims, "steel_mild").is_none());

        let dims = BoxDimensions::new(1.0, 0.0, 1.0, DimensionUnit::Metres);
        assert!(calculate_load_weight(&dims, "steel_mild").is_none());

        let dims = BoxDimensions::new(1.0, -2.0, 1.0, DimensionUnit::Metres);
        assert!(calculate_load_weight(&dims, "steel_mild").is_none());
    }

    #[test]
    fn test_format_weight_threshold() {
        assert_eq!(format_weight(7850.0), "7.85 tonnes");
        assert_eq!(format_weight(1000.0), "1.00 tonnes");
        assert_eq!(format_weight(999.9), "999.9 kg");
        assert_eq!(format_weight(500.0), "500.0 kg");
    }

    #[test]
    fn test_format_volume_bands() {
        assert_eq!(format_volume(0.0005), "500 cm³");
        assert_eq!(format_volume(0.5), "500.0 litres");
        assert_eq!(format_volume(2.125), "2.125 m³");
    }

    #[test]
    fn test_recommendation_order() {
        let lead = material_by_id("lead").unwrap();
        let recs = get_safety_recommendations(lead, 6000.0);

        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("toxic"));
        assert!(recs[1].contains("Very heavy load"));
        assert!(recs[2].contains("sharp edges"));
    }

    #[test]
    fn test_heavy_tier_is_exclusive() {
        let steel = material_by_id("steel_mild").unwrap();

        let recs = get_safety_recommendations(steel, 2000.0);
        assert!(recs.iter().any(|r| r.contains("Heavy load")));
        assert!(!recs.iter().any(|r| r.contains("Very heavy load")));

        let recs = get_safety_recommendations(steel, 800.0);
        assert!(!recs.iter().any(|r| r.contains("load:")));
    }

    #[test]
    fn test_concrete_reinforcement_advice() {
        let reinforced = material_by_id("concrete_reinforced").unwrap();
        let recs = get_safety_recommendations(reinforced, 100.0);
        assert!(recs.iter().any(|r| r.contains("reinforcement")));

        let brick = material_by_id("brick").unwrap();
        let recs = get_safety_recommendations(brick, 100.0);
        assert!(recs.iter().all(|r| !r.contains("reinforcement")));
    }

    #[test]
    fn test_liquid_and_aggregate_advice() {
        let water = material_by_id("water").unwrap();
        let recs = get_safety_recommendations(water, 100.0);
        assert!(recs.iter().any(|r| r.contains("container integrity")));

        let sand = material_by_id("sand_dry").unwrap();
        let recs = get_safety_recommendations(sand, 100.0);
        assert!(recs.iter().any(|r| r.contains("container rated")));
    }

    #[test]
    fn test_required_capacity() {
        let req = calculate_required_capacity(1000.0, DEFAULT_SAFETY_FACTOR);
        assert_relative_eq!(req.min_capacity_kg, 2000.0);
        assert_relative_eq!(req.recommended_capacity_kg, 2500.0);

        // ceilings round part-kilograms up
        let req = calculate_required_capacity(333.3, DEFAULT_SAFETY_FACTOR);
        assert_relative_eq!(req.min_capacity_kg, 667.0);
        assert_relative_eq!(req.recommended_capacity_kg, 834.0);
    }
}
