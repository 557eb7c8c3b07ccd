use crate::capacity::tables::{CONFIGURATIONS, SLING_TYPES, SlingTypeTable};

/// Find a sling type's table by id.
pub fn sling_type(sling_type_id: &str) -> Option<&'static SlingTypeTable> {
    SLING_TYPES.iter().find(|t| t.id == sling_type_id)
}

/// All sling types in catalog order, for building pickers.
pub fn sling_types() -> &'static [SlingTypeTable] {
    SLING_TYPES
}

/// Rated WLL in tonnes for an exact (type, size, configuration) triple.
///
/// Strict lookup: an unknown type, a size not in that type's table, or a
/// configuration not in the published list yields `None`. A near-miss size
/// must not be approximated from its neighbours.
pub fn calculate_wll(sling_type_id: &str, size: &str, configuration: &str) -> Option<f64> {
    let table = sling_type(sling_type_id)?;
    let (_, ratings) = table.rows.iter().find(|(s, _)| *s == size)?;
    let index = CONFIGURATIONS.iter().position(|c| *c == configuration)?;
    Some(ratings[index])
}

/// Size keys populated for a sling type, in table order. Empty for an
/// unknown type.
pub fn get_available_sizes(sling_type_id: &str) -> Vec<&'static str> {
    match sling_type(sling_type_id) {
        Some(table) => table.rows.iter().map(|(size, _)| *size).collect(),
        None => Vec::new(),
    }
}

/// The configuration list a sling type is rated against. Empty for an
/// unknown type.
pub fn get_available_configurations(sling_type_id: &str) -> Vec<&'static str> {
    match sling_type(sling_type_id) {
        Some(_) => CONFIGURATIONS.to_vec(),
        None => Vec::new(),
    }
}
