use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{EmployeeId, ProjectId};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    Approved,
    Rejected,
}

impl EntryStatus {
    /// Convert enum → store string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "pending",
            EntryStatus::Approved => "approved",
            EntryStatus::Rejected => "rejected",
        }
    }

    /// Convert store string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(EntryStatus::Pending),
            "approved" => Some(EntryStatus::Approved),
            "rejected" => Some(EntryStatus::Rejected),
            _ => None,
        }
    }
}

/// A manually entered timesheet row. Created and moved through the
/// approval workflow outside this crate; read-only here.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub employee_id: EmployeeId,
    pub entry_date: NaiveDate,
    pub hours: Decimal,
    pub overtime_hours: Option<Decimal>,
    pub status: EntryStatus,
    pub project_id: Option<ProjectId>,
}

impl TimeEntry {
    /// Regular plus overtime hours.
    pub fn total_hours(&self) -> Decimal {
        self.hours + self.overtime_hours.unwrap_or_default()
    }
}
