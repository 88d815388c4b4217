use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::event_kind::ClockKind;
use super::{EmployeeId, ProjectId};

/// A single punch recorded by the field app. Immutable once stored;
/// ordering by timestamp is the only meaningful relation between rows.
/// Nothing guarantees strict in/out alternation.
#[derive(Debug, Clone, Serialize)]
pub struct ClockEvent {
    pub id: i64,
    pub employee_id: EmployeeId,
    pub kind: ClockKind,
    /// Company-local timestamp. Converting the wall-clock instant into
    /// company-local time is the persistence layer's concern.
    pub timestamp: NaiveDateTime,
    pub project_id: Option<ProjectId>,
    pub notes: Option<String>,
}

impl ClockEvent {
    /// Calendar day of the punch in the company's local calendar.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
