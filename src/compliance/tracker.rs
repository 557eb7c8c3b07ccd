use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::compliance::entry::{
    EquipmentDraft, EquipmentEntry, EquipmentType, TestRecord, create_equipment_entry,
};
use crate::compliance::schedule::{
    ComplianceStatus, StatusInfo, calculate_rugby_tags, calculate_test_dates, status_for_due_date,
};
use crate::compliance::store::KeyValueStore;

/// The single store key holding the whole serialized equipment list.
pub const EQUIPMENT_STORE_KEY: &str = "equipment_register";

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Equipment ID already exists")]
    DuplicateId(String),

    #[error("Equipment not found")]
    NotFound(String),

    #[error("Equipment entry is missing required fields")]
    IncompleteDraft,

    #[error("Failed to load equipment data: {0}")]
    Load(String),

    #[error("Failed to save equipment data: {0}")]
    Save(String),
}

/// Partial update to an existing entry. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentUpdate {
    pub equipment_type: Option<EquipmentType>,
    pub wll: Option<f64>,
    pub manufacturer: Option<String>,
    pub size: Option<String>,
    pub last_test_date: Option<NaiveDate>,
    pub test_authority: Option<String>,
    pub notes: Option<String>,
}

/// CRUD and test-history operations over the persisted equipment register.
///
/// Every mutation loads the entire list from the store, changes it in
/// memory, and writes the entire list back under [`EQUIPMENT_STORE_KEY`].
/// There is no locking or version check: two concurrent writers can lose
/// the first writer's change. The host application is expected to
/// serialize access.
pub struct EquipmentTracker<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> EquipmentTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Read the full register. An absent document is an empty register.
    pub fn load_entries(&self) -> Result<Vec<EquipmentEntry>, TrackerError> {
        let document = self
            .store
            .get(EQUIPMENT_STORE_KEY)
            .map_err(|e| TrackerError::Load(e.to_string()))?;

        match document {
            None => Ok(Vec::new()),
            Some(json) => {
                let entries: Vec<EquipmentEntry> = serde_json::from_str(&json).map_err(|e| {
                    warn!(error = %e, "equipment document failed to parse");
                    TrackerError::Load(e.to_string())
                })?;
                debug!(count = entries.len(), "loaded equipment register");
                Ok(entries)
            }
        }
    }

    fn save_entries(&mut self, entries: &[EquipmentEntry]) -> Result<(), TrackerError> {
        let json =
            serde_json::to_string(entries).map_err(|e| TrackerError::Save(e.to_string()))?;
        self.store
            .set(EQUIPMENT_STORE_KEY, &json)
            .map_err(|e| TrackerError::Save(e.to_string()))?;
        debug!(count = entries.len(), "saved equipment register");
        Ok(())
    }

    /// Add a new entry. A duplicate id is rejected before anything is
    /// written, leaving the stored list untouched.
    pub fn add_equipment_entry(
        &mut self,
        draft: &EquipmentDraft,
        today: NaiveDate,
    ) -> Result<EquipmentEntry, TrackerError> {
        let mut entries = self.load_entries()?;

        if entries.iter().any(|e| e.id == draft.id) {
            return Err(TrackerError::DuplicateId(draft.id.clone()));
        }

        let entry = create_equipment_entry(draft, today).ok_or(TrackerError::IncompleteDraft)?;
        entries.push(entry.clone());
        self.save_entries(&entries)?;

        debug!(id = %entry.id, "added equipment entry");
        Ok(entry)
    }

    /// Merge an update into an existing entry.
    ///
    /// A changed last test date recomputes the due dates and both tag
    /// colours before the merge is persisted.
    pub fn update_equipment_entry(
        &mut self,
        id: &str,
        updates: &EquipmentUpdate,
    ) -> Result<EquipmentEntry, TrackerError> {
        let mut entries = self.load_entries()?;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))?;

        if let Some(date) = updates.last_test_date {
            if date != entry.last_test_date {
                apply_test_date(entry, date);
            }
        }
        if let Some(equipment_type) = updates.equipment_type {
            entry.equipment_type = equipment_type;
        }
        if let Some(wll) = updates.wll {
            entry.wll = wll;
        }
        if let Some(manufacturer) = &updates.manufacturer {
            entry.manufacturer = manufacturer.clone();
        }
        if let Some(size) = &updates.size {
            entry.size = size.clone();
        }
        if let Some(authority) = &updates.test_authority {
            entry.test_authority = authority.clone();
        }
        if let Some(notes) = &updates.notes {
            entry.notes = Some(notes.clone());
        }

        let updated = entry.clone();
        self.save_entries(&entries)?;

        debug!(id = %updated.id, "updated equipment entry");
        Ok(updated)
    }

    /// Remove an entry by id.
    pub fn delete_equipment_entry(&mut self, id: &str) -> Result<(), TrackerError> {
        let mut entries = self.load_entries()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            return Err(TrackerError::NotFound(id.to_string()));
        }

        self.save_entries(&entries)?;
        debug!(id, "deleted equipment entry");
        Ok(())
    }

    /// Record a test against an entry.
    ///
    /// The record is always appended to the history; the entry's current
    /// test state (last test date, authority, due dates, tags) moves only
    /// when the new test is strictly more recent than the one on file.
    /// Back-dated paperwork never rolls the schedule backwards.
    pub fn record_test(
        &mut self,
        equipment_id: &str,
        record: TestRecord,
    ) -> Result<EquipmentEntry, TrackerError> {
        let mut entries = self.load_entries()?;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == equipment_id)
            .ok_or_else(|| TrackerError::NotFound(equipment_id.to_string()))?;

        let is_newer = record.date > entry.last_test_date;
        if is_newer {
            apply_test_date(entry, record.date);
            entry.test_authority = record.authority.clone();
        }
        entry.test_history.push(record);

        let updated = entry.clone();
        self.save_entries(&entries)?;

        debug!(id = %updated.id, advanced = is_newer, "recorded test");
        Ok(updated)
    }
}

fn apply_test_date(entry: &mut EquipmentEntry, date: NaiveDate) {
    entry.last_test_date = date;
    let (quarterly, annual) = calculate_test_dates(date);
    entry.next_quarterly_date = quarterly;
    entry.next_annual_date = annual;
    let (current, next) = calculate_rugby_tags(date);
    entry.rugby_tag = current;
    entry.next_rugby_tag = next;
}

/// Derived compliance status of one entry.
pub fn get_equipment_status(entry: &EquipmentEntry, today: NaiveDate) -> StatusInfo {
    status_for_due_date(entry.next_quarterly_date, today)
}

/// Register-level counts by derived status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquipmentSummary {
    pub total: usize,
    pub current: usize,
    pub due_soon: usize,
    pub overdue: usize,
}

pub fn get_equipment_summary(entries: &[EquipmentEntry], today: NaiveDate) -> EquipmentSummary {
    let mut summary = EquipmentSummary {
        total: entries.len(),
        ..Default::default()
    };

    for entry in entries {
        match get_equipment_status(entry, today).status {
            ComplianceStatus::Current => summary.current += 1,
            ComplianceStatus::DueSoon => summary.due_soon += 1,
            ComplianceStatus::Overdue => summary.overdue += 1,
        }
    }

    summary
}

/// Entries matching a status; `None` passes everything through.
pub fn filter_equipment_by_status<'a>(
    entries: &'a [EquipmentEntry],
    status: Option<ComplianceStatus>,
    today: NaiveDate,
) -> Vec<&'a EquipmentEntry> {
    entries
        .iter()
        .filter(|e| match status {
            None => true,
            Some(wanted) => get_equipment_status(e, today).status == wanted,
        })
        .collect()
}

/// Entries of a type; `None` passes everything through.
pub fn filter_equipment_by_type(
    entries: &[EquipmentEntry],
    equipment_type: Option<EquipmentType>,
) -> Vec<&EquipmentEntry> {
    entries
        .iter()
        .filter(|e| match equipment_type {
            None => true,
            Some(wanted) => e.equipment_type == wanted,
        })
        .collect()
}
