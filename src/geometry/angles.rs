use crate::geometry::triangle::{TriangleDimensions, complete_dimensions};
use crate::types::round2;

/// Safety classification of the included angle between two sling legs.
///
/// Thresholds are inclusive on the upper bound: 60° is still safe, 90° is
/// still caution, 120° is still warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyLevel {
    Safe,
    Caution,
    Warning,
    Danger,
}

impl SafetyLevel {
    /// Classify an included angle in degrees.
    pub fn classify(included_angle: f64) -> Self {
        match included_angle {
            a if a <= 60.0 => SafetyLevel::Safe,
            a if a <= 90.0 => SafetyLevel::Caution,
            a if a <= 120.0 => SafetyLevel::Warning,
            _ => SafetyLevel::Danger,
        }
    }

    /// Fixed advisory shown alongside the classification.
    pub fn message(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "Safe angle range. Load factor is minimal.",
            SafetyLevel::Caution => {
                "Caution: Moderate sling angle. Verify sling capacity before lifting."
            }
            SafetyLevel::Warning => {
                "Warning: High sling angle. Leg tension is significantly increased."
            }
            SafetyLevel::Danger => "Danger: Extreme sling angle. Do not lift!",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "Safe",
            SafetyLevel::Caution => "Caution",
            SafetyLevel::Warning => "Warning",
            SafetyLevel::Danger => "Danger",
        }
    }

    pub fn colour(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "green",
            SafetyLevel::Caution => "amber",
            SafetyLevel::Warning => "orange",
            SafetyLevel::Danger => "red",
        }
    }
}

/// Solved sling geometry for a lifting triangle.
///
/// All numeric fields are rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleResult {
    /// Angle between the two sling legs, degrees.
    pub included_angle: f64,

    /// Angle of each leg measured from vertical, degrees.
    pub angle_from_vertical: f64,

    /// Tension multiplier per leg relative to a vertical hang: 1/cos(angle).
    pub load_factor: f64,

    pub safety_level: SafetyLevel,
    pub safety_message: &'static str,

    /// Tension per leg when a total load was supplied, same mass unit as
    /// the load.
    pub load_per_leg: Option<f64>,
}

/// Solve the sling angles for a lifting triangle.
///
/// Needs at least two of the three dimensions present and positive; the
/// third is completed internally. Returns `None` for insufficient input or
/// a triangle that cannot close (non-positive derived height).
pub fn sling_angles(dims: &TriangleDimensions, total_load: Option<f64>) -> Option<AngleResult> {
    if dims.known_count() < 2 {
        return None;
    }

    let completed = complete_dimensions(dims);
    let width = completed.width?;
    let height = completed.height?;
    completed.length?;

    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let angle_from_vertical = ((width / 2.0) / height).atan();
    let included_angle = 2.0 * angle_from_vertical.to_degrees();
    let load_factor = 1.0 / angle_from_vertical.cos();

    let included_rounded = round2(included_angle);
    let safety_level = SafetyLevel::classify(included_rounded);

    Some(AngleResult {
        included_angle: included_rounded,
        angle_from_vertical: round2(angle_from_vertical.to_degrees()),
        load_factor: round2(load_factor),
        safety_level,
        safety_message: safety_level.message(),
        load_per_leg: total_load.map(|load| load_per_leg(load, included_angle)),
    })
}

/// Tension in each of two legs sharing a total load at the given included
/// angle (degrees).
///
/// Degenerate geometry (angle `<= 0` or `>= 180`) yields 0 rather than a
/// meaningless or infinite tension.
pub fn load_per_leg(total_load: f64, included_angle: f64) -> f64 {
    if included_angle <= 0.0 || included_angle >= 180.0 {
        return 0.0;
    }

    let half_angle = (included_angle / 2.0).to_radians();
    round2(total_load * (1.0 / half_angle.cos()) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_three_four_five_triangle() {
        let dims = TriangleDimensions::new(Some(6.0), Some(4.0), None);
        let result = sling_angles(&dims, None).unwrap();

        assert_relative_eq!(result.included_angle, 73.74);
        assert_relative_eq!(result.angle_from_vertical, 36.87);
        assert_relative_eq!(result.load_factor, 1.25);
        assert_eq!(result.safety_level, SafetyLevel::Caution);
        assert!(result.load_per_leg.is_none());
    }

    #[test]
    fn test_load_per_leg_included_in_result() {
        let dims = TriangleDimensions::new(Some(6.0), Some(4.0), None);
        let result = sling_angles(&dims, Some(1000.0)).unwrap();

        // load factor 1.25 shared over two legs
        assert_relative_eq!(result.load_per_leg.unwrap(), 625.0);
    }

    #[test]
    fn test_solves_from_width_and_length() {
        let dims = TriangleDimensions::new(Some(6.0), None, Some(5.0));
        let result = sling_angles(&dims, None).unwrap();
        assert_relative_eq!(result.included_angle, 73.74);
    }

    #[test]
    fn test_insufficient_input() {
        assert!(sling_angles(&TriangleDimensions::new(Some(6.0), None, None), None).is_none());
        assert!(sling_angles(&TriangleDimensions::default(), None).is_none());
    }

    #[test]
    fn test_invalid_triangle() {
        // leg shorter than half the width
        let dims = TriangleDimensions::new(Some(10.0), None, Some(4.0));
        assert!(sling_angles(&dims, None).is_none());
    }

    #[test]
    fn test_non_positive_input_not_counted() {
        let dims = TriangleDimensions::new(Some(-6.0), Some(4.0), None);
        assert!(sling_angles(&dims, None).is_none());
    }

    #[test]
    fn test_safety_boundaries_inclusive_upper() {
        assert_eq!(SafetyLevel::classify(60.00), SafetyLevel::Safe);
        assert_eq!(SafetyLevel::classify(60.01), SafetyLevel::Caution);
        assert_eq!(SafetyLevel::classify(90.00), SafetyLevel::Caution);
        assert_eq!(SafetyLevel::classify(90.01), SafetyLevel::Warning);
        assert_eq!(SafetyLevel::classify(120.00), SafetyLevel::Warning);
        assert_eq!(SafetyLevel::classify(120.01), SafetyLevel::Danger);
    }

    #[test]
    fn test_danger_message() {
        assert_eq!(
            SafetyLevel::classify(150.0).message(),
            "Danger: Extreme sling angle. Do not lift!"
        );
    }

    #[test]
    fn test_load_per_leg_at_sixty_degrees() {
        // 1/cos(30°) = 1.1547
        assert_relative_eq!(load_per_leg(1000.0, 60.0), 577.35);
    }

    #[test]
    fn test_load_per_leg_vertical_pair() {
        // near-vertical legs each carry half the load
        assert_relative_eq!(load_per_leg(1000.0, 0.1), 500.0, epsilon = 0.01);
    }

    #[test]
    fn test_load_per_leg_degenerate() {
        assert_relative_eq!(load_per_leg(1000.0, 0.0), 0.0);
        assert_relative_eq!(load_per_leg(1000.0, -10.0), 0.0);
        assert_relative_eq!(load_per_leg(1000.0, 180.0), 0.0);
        assert_relative_eq!(load_per_leg(1000.0, 195.0), 0.0);
    }
}
