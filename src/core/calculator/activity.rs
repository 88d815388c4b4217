//! Derives each employee's current punch status and assembles the
//! activity-board snapshots.

use std::collections::{BTreeMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::EmployeeId;
use crate::models::activity::{ActivityStatus, EmployeeActivity};
use crate::models::clock_event::ClockEvent;
use crate::models::employee::Employee;
use crate::utils::date::DateRange;
use crate::utils::time::round_hours;

use super::sessions;

/// The chronologically last event; equal timestamps fall back to row id
/// so the answer is deterministic.
fn last_event(events: &[ClockEvent]) -> Option<&ClockEvent> {
    events.iter().max_by_key(|e| (e.timestamp, e.id))
}

/// Status from the last event, or `NoActivity` when the employee has no
/// events in the window.
pub fn classify(events: &[ClockEvent]) -> ActivityStatus {
    match last_event(events) {
        Some(last) if last.kind.is_in() => ActivityStatus::ClockedIn,
        Some(_) => ActivityStatus::ClockedOut,
        None => ActivityStatus::NoActivity,
    }
}

/// Build snapshots for the full roster plus any employee id that appears
/// only in the event stream. Sorted clocked-in first, then clocked-out,
/// then no-activity; stable by roster order within each group, with
/// off-roster ids after the roster, ascending.
pub fn build_snapshots(
    roster: &[Employee],
    events_by_employee: &BTreeMap<EmployeeId, Vec<ClockEvent>>,
    now: NaiveDateTime,
    today: NaiveDate,
    week: DateRange,
) -> Vec<EmployeeActivity> {
    let rostered: HashSet<EmployeeId> = roster.iter().map(|e| e.id).collect();

    let mut out = Vec::with_capacity(roster.len());
    for emp in roster {
        let events = events_by_employee
            .get(&emp.id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        out.push(snapshot(emp.id, Some(emp), events, now, today, week));
    }

    // Punches from ids missing from the roster still show up on the
    // board instead of vanishing.
    for (&id, events) in events_by_employee {
        if !rostered.contains(&id) {
            out.push(snapshot(id, None, events, now, today, week));
        }
    }

    out.sort_by_key(|a| a.current_status.rank());
    out
}

fn snapshot(
    employee_id: EmployeeId,
    roster_row: Option<&Employee>,
    events: &[ClockEvent],
    now: NaiveDateTime,
    today: NaiveDate,
    week: DateRange,
) -> EmployeeActivity {
    let sessions = sessions::pair_sessions(events, now);
    let today_events: Vec<ClockEvent> = events
        .iter()
        .filter(|e| e.local_date() == today)
        .cloned()
        .collect();

    EmployeeActivity {
        employee_id,
        name: roster_row.map(|e| e.name.clone()),
        title: roster_row.and_then(|e| e.title.clone()),
        current_status: classify(events),
        last_event_timestamp: last_event(events).map(|e| e.timestamp),
        today_hours: round_hours(sessions::hours_on(&sessions, today)),
        week_hours: round_hours(sessions::hours_within(&sessions, week)),
        today_events,
    }
}
