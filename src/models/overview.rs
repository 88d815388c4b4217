use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::reconciled::EntrySource;
use super::time_entry::EntryStatus;
use super::{EmployeeId, ProjectId};

/// One row of the dashboard "recent entries" table.
#[derive(Debug, Clone, Serialize)]
pub struct RecentEntry {
    pub entry_date: NaiveDate,
    pub employee_id: EmployeeId,
    pub employee_name: Option<String>,
    pub hours: Decimal,
    pub hourly_rate: Option<Decimal>,
    /// None when the employee has no configured rate: "no cost", which is
    /// not the same thing as a zero-dollar cost.
    pub cost: Option<Decimal>,
    pub status: EntryStatus,
    pub source: EntrySource,
    pub project_id: Option<ProjectId>,
}

/// Approved labor cost attributed to one project bucket.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCost {
    /// None collects approved entries not tied to any project.
    pub project_id: Option<ProjectId>,
    pub total_cost: Decimal,
}

/// Company-wide labor dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct LaborOverview {
    pub pending_hours: Decimal,
    pub approved_hours: Decimal,
    /// Employees currently on the clock.
    pub active_employee_count: usize,
    /// Approved entries with a configured rate only; entries whose cost
    /// is unavailable are excluded rather than counted as zero.
    pub total_labor_cost: Decimal,
    pub cost_by_project: Vec<ProjectCost>,
    pub recent_entries: Vec<RecentEntry>,
}
