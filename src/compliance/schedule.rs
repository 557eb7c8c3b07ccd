use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour-coded tag indicating the calendar quarter a piece of gear was
/// last tested, for at-a-glance compliance checks on site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RugbyTag {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Tag colour per calendar quarter: Jan–Mar red, Apr–Jun green, Jul–Sep
/// blue, Oct–Dec yellow.
pub const RUGBY_TAG_CYCLE: [RugbyTag; 4] = [
    RugbyTag::Red,
    RugbyTag::Green,
    RugbyTag::Blue,
    RugbyTag::Yellow,
];

impl RugbyTag {
    pub fn label(&self) -> &'static str {
        match self {
            RugbyTag::Red => "Red",
            RugbyTag::Green => "Green",
            RugbyTag::Blue => "Blue",
            RugbyTag::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for RugbyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current and next tag colours for a test date.
///
/// This is the quarter-of-year convention: the colour depends on which
/// calendar quarter the test fell in, not on elapsed time since the test.
pub fn calculate_rugby_tags(last_test_date: NaiveDate) -> (RugbyTag, RugbyTag) {
    let quarter = (last_test_date.month0() / 3) as usize;
    (RUGBY_TAG_CYCLE[quarter], RUGBY_TAG_CYCLE[(quarter + 1) % 4])
}

/// Next quarterly and annual test due dates: 3 and 12 calendar months after
/// the last test.
///
/// Month arithmetic clamps at month end rather than spilling over: Jan 31
/// plus 3 months is Apr 30.
pub fn calculate_test_dates(last_test_date: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        last_test_date + Months::new(3),
        last_test_date + Months::new(12),
    )
}

/// Days inside which an upcoming quarterly test counts as due soon.
pub const DUE_SOON_WINDOW_DAYS: i64 = 30;

/// Derived compliance state of an entry, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    #[serde(rename = "overdue")]
    Overdue,
    #[serde(rename = "due-soon")]
    DueSoon,
    #[serde(rename = "current")]
    Current,
}

impl ComplianceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Overdue => "Overdue",
            ComplianceStatus::DueSoon => "Due Soon",
            ComplianceStatus::Current => "Current",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ComplianceStatus::Overdue => "alert-circle",
            ComplianceStatus::DueSoon => "clock",
            ComplianceStatus::Current => "check-circle",
        }
    }

    pub fn colour(&self) -> &'static str {
        match self {
            ComplianceStatus::Overdue => "red",
            ComplianceStatus::DueSoon => "amber",
            ComplianceStatus::Current => "green",
        }
    }
}

/// Compliance status plus the signed day count that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
    pub status: ComplianceStatus,

    /// Days from `today` to the next quarterly due date; negative when
    /// overdue.
    pub days_until_due: i64,
}

/// Classify a quarterly due date against today.
pub fn status_for_due_date(next_quarterly_date: NaiveDate, today: NaiveDate) -> StatusInfo {
    let days_until_due = (next_quarterly_date - today).num_days();
    let status = match days_until_due {
        d if d < 0 => ComplianceStatus::Overdue,
        d if d <= DUE_SOON_WINDOW_DAYS => ComplianceStatus::DueSoon,
        _ => ComplianceStatus::Current,
    };

    StatusInfo {
        status,
        days_until_due,
    }
}
