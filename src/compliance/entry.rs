use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::compliance::schedule::{RugbyTag, calculate_rugby_tags, calculate_test_dates};

/// Catalog of gear types under compliance tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    ChainSling,
    WireRopeSling,
    RoundSling,
    WebbingSling,
    Shackle,
    Hook,
    EyeBolt,
    PlateClamp,
    BeamClamp,
    ChainBlock,
    LeverHoist,
    SpreaderBeam,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 12] = [
        EquipmentType::ChainSling,
        EquipmentType::WireRopeSling,
        EquipmentType::RoundSling,
        EquipmentType::WebbingSling,
        EquipmentType::Shackle,
        EquipmentType::Hook,
        EquipmentType::EyeBolt,
        EquipmentType::PlateClamp,
        EquipmentType::BeamClamp,
        EquipmentType::ChainBlock,
        EquipmentType::LeverHoist,
        EquipmentType::SpreaderBeam,
    ];

    /// Human label, also used in exports.
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::ChainSling => "Chain Sling",
            EquipmentType::WireRopeSling => "Wire Rope Sling",
            EquipmentType::RoundSling => "Round Sling",
            EquipmentType::WebbingSling => "Webbing Sling",
            EquipmentType::Shackle => "Shackle",
            EquipmentType::Hook => "Hook",
            EquipmentType::EyeBolt => "Eye Bolt",
            EquipmentType::PlateClamp => "Plate Clamp",
            EquipmentType::BeamClamp => "Beam Clamp",
            EquipmentType::ChainBlock => "Chain Block",
            EquipmentType::LeverHoist => "Lever Hoist",
            EquipmentType::SpreaderBeam => "Spreader Beam",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Quarterly,
    Annual,
}

/// Outcome of an inspection or proof test.
///
/// A `Fail` is recorded in the history but does not retire the entry or
/// change its status; pulling failed gear from service is a site process,
/// not tracked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResult {
    Pass,
    Fail,
}

/// One test event. Immutable once appended to an entry's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub test_type: TestType,
    pub authority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub result: TestResult,
}

/// One piece of rigging gear under compliance tracking.
///
/// Serialized field names match the persisted JSON document format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,

    /// Working load limit, tonnes.
    pub wll: f64,

    pub manufacturer: String,
    pub size: String,
    pub last_test_date: NaiveDate,
    pub test_authority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date_added: NaiveDate,

    /// Always "active". Kept in the document for forward compatibility.
    pub status: String,

    pub next_quarterly_date: NaiveDate,
    pub next_annual_date: NaiveDate,
    pub rugby_tag: RugbyTag,
    pub next_rugby_tag: RugbyTag,
    #[serde(default)]
    pub test_history: Vec<TestRecord>,
}

/// Form input for a new entry; everything optional so validation can report
/// per-field errors instead of failing on the first hole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentDraft {
    pub id: String,
    pub equipment_type: Option<EquipmentType>,
    pub wll: Option<f64>,
    pub manufacturer: String,
    pub size: String,
    pub last_test_date: Option<NaiveDate>,
    pub test_authority: String,
    pub notes: Option<String>,
}

pub const MAX_ID_LEN: usize = 20;
pub const MAX_MANUFACTURER_LEN: usize = 30;
pub const MAX_SIZE_LEN: usize = 30;
pub const MAX_AUTHORITY_LEN: usize = 40;
pub const MAX_NOTES_LEN: usize = 200;

/// Field-level validation result. Errors are data, keyed by field name;
/// nothing here is a hard failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: BTreeMap<&'static str, String>,
}

/// Validate a draft entry.
///
/// Length limits on the free-text fields apply only when the field was
/// actually provided.
pub fn validate_equipment_entry(draft: &EquipmentDraft, today: NaiveDate) -> ValidationOutcome {
    let mut errors = BTreeMap::new();

    if draft.equipment_type.is_none() {
        errors.insert("type", "Equipment type is required".to_string());
    }

    if draft.id.is_empty() {
        errors.insert("id", "Equipment ID is required".to_string());
    } else if draft.id.chars().count() > MAX_ID_LEN {
        errors.insert(
            "id",
            format!("Equipment ID must be {MAX_ID_LEN} characters or less"),
        );
    }

    match draft.wll {
        None => {
            errors.insert("wll", "WLL is required".to_string());
        }
        Some(wll) if wll <= 0.0 => {
            errors.insert("wll", "WLL must be greater than zero".to_string());
        }
        _ => {}
    }

    match draft.last_test_date {
        None => {
            errors.insert("lastTestDate", "Last test date is required".to_string());
        }
        Some(date) if date > today => {
            errors.insert(
                "lastTestDate",
                "Last test date cannot be in the future".to_string(),
            );
        }
        _ => {}
    }

    if draft.manufacturer.chars().count() > MAX_MANUFACTURER_LEN {
        errors.insert(
            "manufacturer",
            format!("Manufacturer must be {MAX_MANUFACTURER_LEN} characters or less"),
        );
    }

    if draft.size.chars().count() > MAX_SIZE_LEN {
        errors.insert(
            "size",
            format!("Size must be {MAX_SIZE_LEN} characters or less"),
        );
    }

    if draft.test_authority.chars().count() > MAX_AUTHORITY_LEN {
        errors.insert(
            "testAuthority",
            format!("Test authority must be {MAX_AUTHORITY_LEN} characters or less"),
        );
    }

    if let Some(notes) = &draft.notes {
        if notes.chars().count() > MAX_NOTES_LEN {
            errors.insert(
                "notes",
                format!("Notes must be {MAX_NOTES_LEN} characters or less"),
            );
        }
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Build a full entry from a draft, computing every derived field.
///
/// Returns `None` when a required field is missing; callers validate first.
pub fn create_equipment_entry(draft: &EquipmentDraft, today: NaiveDate) -> Option<EquipmentEntry> {
    let equipment_type = draft.equipment_type?;
    let wll = draft.wll?;
    let last_test_date = draft.last_test_date?;
    if draft.id.is_empty() {
        return None;
    }

    let (next_quarterly_date, next_annual_date) = calculate_test_dates(last_test_date);
    let (rugby_tag, next_rugby_tag) = calculate_rugby_tags(last_test_date);

    Some(EquipmentEntry {
        id: draft.id.clone(),
        equipment_type,
        wll,
        manufacturer: draft.manufacturer.clone(),
        size: draft.size.clone(),
        last_test_date,
        test_authority: draft.test_authority.clone(),
        notes: draft.notes.clone(),
        date_added: today,
        status: "active".to_string(),
        next_quarterly_date,
        next_annual_date,
        rugby_tag,
        next_rugby_tag,
        test_history: Vec::new(),
    })
}
