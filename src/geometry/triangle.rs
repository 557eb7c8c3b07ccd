/// Dimensions of a symmetric two-leg lifting triangle, in metres.
///
/// The load hangs centred below two equal sling legs, so each leg is the
/// hypotenuse of a right triangle with base `width / 2` and rise `height`:
///
/// `length² = (width / 2)² + height²`
///
/// Any field may be unknown; a `None` in a derived result means the inputs
/// could not form a valid triangle, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TriangleDimensions {
    /// Horizontal distance between the two attachment points.
    pub width: Option<f64>,

    /// Vertical distance from the attachment plane up to the hook.
    pub height: Option<f64>,

    /// Length of each sling leg.
    pub length: Option<f64>,
}

impl TriangleDimensions {
    pub fn new(width: Option<f64>, height: Option<f64>, length: Option<f64>) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Number of fields that are present and positive.
    pub fn known_count(&self) -> usize {
        [self.width, self.height, self.length]
            .iter()
            .filter(|d| matches!(d, Some(v) if *v > 0.0))
            .count()
    }
}

/// Fill in whichever single dimension is missing from the Pythagorean
/// relation on the half-width right triangle.
///
/// An infeasible pair (e.g. a leg shorter than half the width when solving
/// for height) leaves the missing field `None`.
pub fn complete_dimensions(dims: &TriangleDimensions) -> TriangleDimensions {
    let mut out = *dims;

    match (dims.width, dims.height, dims.length) {
        (Some(w), Some(h), None) if w > 0.0 && h > 0.0 => {
            out.length = Some(((w / 2.0).powi(2) + h.powi(2)).sqrt());
        }
        (Some(w), None, Some(l)) if w > 0.0 && l > 0.0 => {
            if l > w / 2.0 {
                out.height = Some((l.powi(2) - (w / 2.0).powi(2)).sqrt());
            }
        }
        (None, Some(h), Some(l)) if h > 0.0 && l > 0.0 => {
            if l > h {
                out.width = Some(2.0 * (l.powi(2) - h.powi(2)).sqrt());
            }
        }
        _ => {}
    }

    out
}

/// Outcome of a triangle feasibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionCheck {
    pub is_valid: bool,
    pub error: Option<&'static str>,
}

impl DimensionCheck {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn invalid(error: &'static str) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }
}

/// Tolerance for agreement between an entered height and the height implied
/// by the other two dimensions, in metres.
pub const CONSISTENCY_TOLERANCE: f64 = 0.01;

/// Check that a fully-specified triangle is geometrically feasible.
///
/// With fewer than three dimensions present only positivity is checked;
/// feasibility of partial input is the solver's job.
pub fn validate_dimensions(dims: &TriangleDimensions) -> DimensionCheck {
    for value in [dims.width, dims.height, dims.length].into_iter().flatten() {
        if value <= 0.0 {
            return DimensionCheck::invalid("Dimensions must be positive");
        }
    }

    let (Some(w), Some(h), Some(l)) = (dims.width, dims.height, dims.length) else {
        return DimensionCheck::valid();
    };

    if l <= w / 2.0 {
        return DimensionCheck::invalid("Sling length must be greater than half the width");
    }
    if l <= h {
        return DimensionCheck::invalid("Sling length must be greater than the height");
    }

    let implied_height = (l.powi(2) - (w / 2.0).powi(2)).sqrt();
    if (implied_height - h).abs() > CONSISTENCY_TOLERANCE {
        return DimensionCheck::invalid("Dimensions do not form a consistent lifting triangle");
    }

    DimensionCheck::valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_complete_length_from_width_and_height() {
        // 3-4-5 triangle on the half width
        let dims = TriangleDimensions::new(Some(6.0), Some(4.0), None);
        let completed = complete_dimensions(&dims);
        assert_relative_eq!(completed.length.unwrap(), 5.0);
    }

    #[test]
    fn test_complete_height_from_width_and_length() {
        let dims = TriangleDimensions::new(Some(6.0), None, Some(5.0));
        let completed = complete_dimensions(&dims);
        assert_relative_eq!(completed.height.unwrap(), 4.0);
    }

    #[test]
    fn test_complete_width_from_height_and_length() {
        let dims = TriangleDimensions::new(None, Some(4.0), Some(5.0));
        let completed = complete_dimensions(&dims);
        assert_relative_eq!(completed.width.unwrap(), 6.0);
    }

    #[test]
    fn test_leg_shorter_than_half_width_is_unsolvable() {
        // length <= width/2 cannot close the triangle
        let dims = TriangleDimensions::new(Some(10.0), None, Some(4.0));
        let completed = complete_dimensions(&dims);
        assert!(completed.height.is_none());
    }

    #[test]
    fn test_leg_shorter_than_height_is_unsolvable() {
        let dims = TriangleDimensions::new(None, Some(6.0), Some(5.0));
        let completed = complete_dimensions(&dims);
        assert!(completed.width.is_none());
    }

    #[test]
    fn test_nothing_to_complete() {
        let dims = TriangleDimensions::new(Some(6.0), Some(4.0), Some(5.0));
        assert_eq!(complete_dimensions(&dims), dims);

        let sparse = TriangleDimensions::new(Some(6.0), None, None);
        assert_eq!(complete_dimensions(&sparse), sparse);
    }

    #[test]
    fn test_validate_consistent_triangle() {
        let check = validate_dimensions(&TriangleDimensions::new(Some(6.0), Some(4.0), Some(5.0)));
        assert!(check.is_valid);
        assert!(check.error.is_none());
    }

    #[test]
    fn test_validate_rejects_short_leg() {
        let check = validate_dimensions(&TriangleDimensions::new(Some(10.0), Some(4.0), Some(4.0)));
        assert!(!check.is_valid);
    }

    #[test]
    fn test_validate_rejects_inconsistent_height() {
        // implied height is 4.0, entered height is 4.5
        let check = validate_dimensions(&TriangleDimensions::new(Some(6.0), Some(4.5), Some(5.0)));
        assert!(!check.is_valid);
    }

    #[test]
    fn test_validate_tolerates_small_drift() {
        let check =
            validate_dimensions(&TriangleDimensions::new(Some(6.0), Some(4.005), Some(5.0)));
        assert!(check.is_valid);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let check = validate_dimensions(&TriangleDimensions::new(Some(-6.0), Some(4.0), None));
        assert!(!check.is_valid);
        assert_eq!(check.error, Some("Dimensions must be positive"));
    }

    #[test]
    fn test_partial_input_is_valid() {
        let check = validate_dimensions(&TriangleDimensions::new(Some(6.0), Some(4.0), None));
        assert!(check.is_valid);
    }
}
