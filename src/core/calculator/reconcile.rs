//! Merges manually entered timesheet rows with clock-derived daily
//! totals.
//!
//! Manual rows are authoritative: they encode human-reviewed hours and
//! are never overridden by a clock-derived guess for the same employee
//! and day, even when the guess differs.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::reconciled::{EntrySource, ReconciledEntry};
use crate::models::session::WorkSession;
use crate::models::time_entry::{EntryStatus, TimeEntry};
use crate::models::{EmployeeId, ProjectId};
use crate::utils::date::DateRange;

/// One clock-derived day total for one employee. Only days with at least
/// one session and a positive hour sum are represented; nothing is
/// fabricated for days with no signal.
#[derive(Debug, Clone)]
pub struct DerivedDay {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub project_id: Option<ProjectId>,
}

/// Collapse one employee's sessions into per-day totals, keeping the
/// project of the day's first session for attribution. Days outside
/// `range` are dropped.
pub fn derived_days(
    employee_id: EmployeeId,
    sessions: &[WorkSession],
    range: DateRange,
) -> Vec<DerivedDay> {
    let mut by_day: BTreeMap<NaiveDate, (Decimal, Option<ProjectId>)> = BTreeMap::new();
    for s in sessions {
        let day = s.start.date();
        if !range.contains(day) {
            continue;
        }
        // Sessions arrive in start order, so the first insert pins the
        // day's project.
        let slot = by_day.entry(day).or_insert((Decimal::ZERO, s.project_id));
        slot.0 += s.hours();
    }

    by_day
        .into_iter()
        .map(|(date, (hours, project_id))| DerivedDay {
            employee_id,
            date,
            hours,
            project_id,
        })
        .collect()
}

/// Union of manual and derived entries: at most one entry per
/// (employee, day), manual first, derived only for keys not already
/// taken. Output is sorted by date, then employee.
pub fn reconcile(manual: &[TimeEntry], derived: &[DerivedDay]) -> Vec<ReconciledEntry> {
    // Keyed by a real tuple; composite string keys invite delimiter
    // collisions.
    let mut merged: BTreeMap<(NaiveDate, EmployeeId), ReconciledEntry> = BTreeMap::new();

    for entry in manual {
        merged
            .entry((entry.entry_date, entry.employee_id))
            .or_insert_with(|| ReconciledEntry {
                employee_id: entry.employee_id,
                entry_date: entry.entry_date,
                hours: entry.total_hours(),
                status: entry.status,
                source: EntrySource::Manual,
                project_id: entry.project_id,
            });
    }

    for day in derived {
        if day.hours <= Decimal::ZERO {
            continue;
        }
        merged
            .entry((day.date, day.employee_id))
            .or_insert_with(|| ReconciledEntry {
                employee_id: day.employee_id,
                entry_date: day.date,
                hours: day.hours,
                // A derived day has not been through review.
                status: EntryStatus::Pending,
                source: EntrySource::Derived,
                project_id: day.project_id,
            });
    }

    merged.into_values().collect()
}
