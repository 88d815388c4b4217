use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::time_entry::EntryStatus;
use super::{EmployeeId, ProjectId};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    Manual,
    Derived,
}

/// The single authoritative hours record per employee per day after
/// merging manual and clock-derived sources. Manual rows always win.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciledEntry {
    pub employee_id: EmployeeId,
    pub entry_date: NaiveDate,
    pub hours: Decimal,
    pub status: EntryStatus,
    pub source: EntrySource,
    pub project_id: Option<ProjectId>,
}
