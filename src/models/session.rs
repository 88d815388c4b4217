use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use super::{EmployeeId, ProjectId};
use crate::utils::time::hours_from_duration;

/// A paired or open clock-in/clock-out interval representing continuous
/// work. Constructed transiently per aggregation request, never stored.
#[derive(Debug, Clone)]
pub struct WorkSession {
    pub employee_id: EmployeeId,
    pub start: NaiveDateTime,
    /// None while the session is still open; its duration then runs to
    /// the `now` supplied by the caller.
    pub end: Option<NaiveDateTime>,
    pub duration: Duration,
    pub project_id: Option<ProjectId>,
}

impl WorkSession {
    pub fn closed(
        employee_id: EmployeeId,
        start: NaiveDateTime,
        end: NaiveDateTime,
        project_id: Option<ProjectId>,
    ) -> Self {
        Self {
            employee_id,
            start,
            end: Some(end),
            duration: clamped(start, end),
            project_id,
        }
    }

    pub fn open(
        employee_id: EmployeeId,
        start: NaiveDateTime,
        now: NaiveDateTime,
        project_id: Option<ProjectId>,
    ) -> Self {
        Self {
            employee_id,
            start,
            end: None,
            duration: clamped(start, now),
            project_id,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Full-precision decimal hours; rounding happens only at the
    /// presentation edge.
    pub fn hours(&self) -> Decimal {
        hours_from_duration(self.duration)
    }
}

/// Skewed device clocks can put the out punch before the in punch; a
/// session never has a negative duration.
fn clamped(start: NaiveDateTime, end: NaiveDateTime) -> Duration {
    (end - start).max(Duration::zero())
}
