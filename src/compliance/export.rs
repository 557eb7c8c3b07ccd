use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::compliance::entry::EquipmentEntry;
use crate::compliance::tracker::get_equipment_status;

/// Export column order. Fixed; downstream spreadsheets key off it.
pub const CSV_HEADERS: [&str; 12] = [
    "ID",
    "Type",
    "WLL",
    "Manufacturer",
    "Size",
    "Last Test Date",
    "Next Quarterly",
    "Next Annual",
    "Status",
    "Rugby Tag",
    "Test Authority",
    "Notes",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render the register as CSV with every field quoted.
///
/// Status is derived against `today`, and the type column carries the
/// human label rather than the stored id.
pub fn generate_csv_export(
    entries: &[EquipmentEntry],
    today: NaiveDate,
) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;

    for entry in entries {
        let status = get_equipment_status(entry, today);
        let record = [
            entry.id.clone(),
            entry.equipment_type.label().to_string(),
            entry.wll.to_string(),
            entry.manufacturer.clone(),
            entry.size.clone(),
            entry.last_test_date.to_string(),
            entry.next_quarterly_date.to_string(),
            entry.next_annual_date.to_string(),
            status.status.label().to_string(),
            entry.rugby_tag.label().to_string(),
            entry.test_authority.clone(),
            entry.notes.clone().unwrap_or_default(),
        ];
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
