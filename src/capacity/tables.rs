//! Working load limit reference tables.
//!
//! Manufacturer/standard-rated capacities in tonnes, keyed by sling type,
//! size, and leg/angle configuration. These are published reference values
//! and must be looked up exactly, never interpolated: a size that is not in
//! the table has no rated capacity.
//!
//! Chain and wire rope sizes are nominal diameters in millimetres; synthetic
//! sling sizes are the standard colour code.

/// The ten leg/angle configurations every table is published against, in
/// display order. Angles are measured from the horizontal.
pub const CONFIGURATIONS: [&str; 10] = [
    "Straight Sling",
    "2-Leg @ 60°",
    "2-Leg @ 45°",
    "2-Leg @ 30°",
    "3-Leg @ 60°",
    "3-Leg @ 45°",
    "3-Leg @ 30°",
    "4-Leg @ 60°",
    "4-Leg @ 45°",
    "4-Leg @ 30°",
];

/// How a sling type's sizes are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    /// Nominal diameter in millimetres.
    DiameterMm,

    /// Colour code (synthetic slings).
    Colour,
}

/// One sling type's WLL table.
///
/// Each row is a size key plus the rated tonnes for the ten configurations
/// in [`CONFIGURATIONS`] order.
#[derive(Debug, Clone, Copy)]
pub struct SlingTypeTable {
    pub id: &'static str,
    pub name: &'static str,
    pub size_kind: SizeKind,
    pub rows: &'static [(&'static str, [f64; 10])],
}

pub const SLING_TYPES: &[SlingTypeTable] = &[
    SlingTypeTable {
        id: "chainGrade80",
        name: "Chain Sling (Grade 80)",
        size_kind: SizeKind::DiameterMm,
        rows: &[
            ("6", [1.12, 1.9, 1.57, 1.12, 2.8, 2.35, 1.68, 3.81, 3.14, 2.24]),
            ("7", [1.5, 2.55, 2.1, 1.5, 3.75, 3.15, 2.25, 5.1, 4.2, 3.0]),
            ("8", [2.0, 3.4, 2.8, 2.0, 5.0, 4.2, 3.0, 6.8, 5.6, 4.0]),
            ("10", [3.15, 5.36, 4.41, 3.15, 7.88, 6.62, 4.73, 10.71, 8.82, 6.3]),
            ("13", [5.3, 9.01, 7.42, 5.3, 13.25, 11.13, 7.95, 18.02, 14.84, 10.6]),
            ("16", [8.0, 13.6, 11.2, 8.0, 20.0, 16.8, 12.0, 27.2, 22.4, 16.0]),
            ("20", [12.5, 21.25, 17.5, 12.5, 31.25, 26.25, 18.75, 42.5, 35.0, 25.0]),
            ("22", [15.0, 25.5, 21.0, 15.0, 37.5, 31.5, 22.5, 51.0, 42.0, 30.0]),
            ("26", [21.2, 36.04, 29.68, 21.2, 53.0, 44.52, 31.8, 72.08, 59.36, 42.4]),
            ("32", [31.5, 53.55, 44.1, 31.5, 78.75, 66.15, 47.25, 107.1, 88.2, 63.0]),
        ],
    },
    SlingTypeTable {
        id: "chainGrade100",
        name: "Chain Sling (Grade 100)",
        size_kind: SizeKind::DiameterMm,
        rows: &[
            ("6", [1.4, 2.38, 1.96, 1.4, 3.5, 2.94, 2.1, 4.76, 3.92, 2.8]),
            ("7", [1.9, 3.23, 2.66, 1.9, 4.75, 3.99, 2.85, 6.46, 5.32, 3.8]),
            ("8", [2.5, 4.25, 3.5, 2.5, 6.25, 5.25, 3.75, 8.5, 7.0, 5.0]),
            ("10", [4.0, 6.8, 5.6, 4.0, 10.0, 8.4, 6.0, 13.6, 11.2, 8.0]),
            ("13", [6.7, 11.39, 9.38, 6.7, 16.75, 14.07, 10.05, 22.78, 18.76, 13.4]),
            ("16", [10.0, 17.0, 14.0, 10.0, 25.0, 21.0, 15.0, 34.0, 28.0, 20.0]),
            ("20", [16.0, 27.2, 22.4, 16.0, 40.0, 33.6, 24.0, 54.4, 44.8, 32.0]),
            ("22", [19.0, 32.3, 26.6, 19.0, 47.5, 39.9, 28.5, 64.6, 53.2, 38.0]),
            ("26", [26.5, 45.05, 37.1, 26.5, 66.25, 55.65, 39.75, 90.1, 74.2, 53.0]),
            ("32", [40.0, 68.0, 56.0, 40.0, 100.0, 84.0, 60.0, 136.0, 112.0, 80.0]),
        ],
    },
    SlingTypeTable {
        id: "wireRope",
        name: "Wire Rope Sling",
        size_kind: SizeKind::DiameterMm,
        rows: &[
            ("8", [0.7, 1.19, 0.98, 0.7, 1.75, 1.47, 1.05, 2.38, 1.96, 1.4]),
            ("10", [1.05, 1.79, 1.47, 1.05, 2.63, 2.21, 1.58, 3.57, 2.94, 2.1]),
            ("12", [1.55, 2.64, 2.17, 1.55, 3.88, 3.26, 2.33, 5.27, 4.34, 3.1]),
            ("14", [2.1, 3.57, 2.94, 2.1, 5.25, 4.41, 3.15, 7.14, 5.88, 4.2]),
            ("16", [2.7, 4.59, 3.78, 2.7, 6.75, 5.67, 4.05, 9.18, 7.56, 5.4]),
            ("18", [3.4, 5.78, 4.76, 3.4, 8.5, 7.14, 5.1, 11.56, 9.52, 6.8]),
            ("20", [4.2, 7.14, 5.88, 4.2, 10.5, 8.82, 6.3, 14.28, 11.76, 8.4]),
            ("22", [5.1, 8.67, 7.14, 5.1, 12.75, 10.71, 7.65, 17.34, 14.28, 10.2]),
        ],
    },
    SlingTypeTable {
        id: "roundSling",
        name: "Round Sling",
        size_kind: SizeKind::Colour,
        rows: &[
            ("Violet", [1.0, 1.7, 1.4, 1.0, 2.5, 2.1, 1.5, 3.4, 2.8, 2.0]),
            ("Green", [2.0, 3.4, 2.8, 2.0, 5.0, 4.2, 3.0, 6.8, 5.6, 4.0]),
            ("Yellow", [3.0, 5.1, 4.2, 3.0, 7.5, 6.3, 4.5, 10.2, 8.4, 6.0]),
            ("Grey", [4.0, 6.8, 5.6, 4.0, 10.0, 8.4, 6.0, 13.6, 11.2, 8.0]),
            ("Red", [5.0, 8.5, 7.0, 5.0, 12.5, 10.5, 7.5, 17.0, 14.0, 10.0]),
            ("Brown", [6.0, 10.2, 8.4, 6.0, 15.0, 12.6, 9.0, 20.4, 16.8, 12.0]),
            ("Blue", [8.0, 13.6, 11.2, 8.0, 20.0, 16.8, 12.0, 27.2, 22.4, 16.0]),
            ("Orange", [10.0, 17.0, 14.0, 10.0, 25.0, 21.0, 15.0, 34.0, 28.0, 20.0]),
        ],
    },
    SlingTypeTable {
        id: "webbingSling",
        name: "Webbing Sling",
        size_kind: SizeKind::Colour,
        rows: &[
            ("Violet", [1.0, 1.7, 1.4, 1.0, 2.5, 2.1, 1.5, 3.4, 2.8, 2.0]),
            ("Green", [2.0, 3.4, 2.8, 2.0, 5.0, 4.2, 3.0, 6.8, 5.6, 4.0]),
            ("Yellow", [3.0, 5.1, 4.2, 3.0, 7.5, 6.3, 4.5, 10.2, 8.4, 6.0]),
            ("Grey", [4.0, 6.8, 5.6, 4.0, 10.0, 8.4, 6.0, 13.6, 11.2, 8.0]),
            ("Red", [5.0, 8.5, 7.0, 5.0, 12.5, 10.5, 7.5, 17.0, 14.0, 10.0]),
            ("Brown", [6.0, 10.2, 8.4, 6.0, 15.0, 12.6, 9.0, 20.4, 16.8, 12.0]),
            ("Blue", [8.0, 13.6, 11.2, 8.0, 20.0, 16.8, 12.0, 27.2, 22.4, 16.0]),
            ("Orange", [10.0, 17.0, 14.0, 10.0, 25.0, 21.0, 15.0, 34.0, 28.0, 20.0]),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_type_ids_unique() {
        let mut seen = HashSet::new();
        for table in SLING_TYPES {
            assert!(seen.insert(table.id), "duplicate sling type {}", table.id);
        }
    }

    #[test]
    fn test_size_keys_unique_per_type() {
        for table in SLING_TYPES {
            let mut seen = HashSet::new();
            for (size, _) in table.rows {
                assert!(seen.insert(size), "duplicate size {} in {}", size, table.id);
            }
        }
    }

    #[test]
    fn test_all_ratings_positive() {
        for table in SLING_TYPES {
            for (size, ratings) in table.rows {
                for rating in ratings {
                    assert!(*rating > 0.0, "{} size {} has bad rating", table.id, size);
                }
            }
        }
    }

    #[test]
    fn test_single_leg_never_exceeds_multi_leg_sixty() {
        // straight sling is always the lowest 60° rating in a row
        for table in SLING_TYPES {
            for (size, ratings) in table.rows {
                assert!(
                    ratings[0] <= ratings[1] && ratings[0] <= ratings[4],
                    "{} size {} rating ordering",
                    table.id,
                    size
                );
            }
        }
    }
}
