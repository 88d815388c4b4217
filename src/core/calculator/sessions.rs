//! Pairs chronological clock events into work sessions and derives the
//! scalar hour rollups the activity board shows.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::EmployeeId;
use crate::models::clock_event::ClockEvent;
use crate::models::event_kind::ClockKind;
use crate::models::session::WorkSession;
use crate::utils::date::DateRange;

/// Pairing scan state: either waiting for a clock-in, or holding one and
/// waiting for its clock-out.
enum PairState<'a> {
    AwaitingIn,
    AwaitingOut(&'a ClockEvent),
}

/// Pair one employee's events into sessions, oldest first.
///
/// Events may arrive in any order; they are sorted by timestamp before
/// the scan. A clock-in with no following clock-out becomes an open
/// session whose duration runs to `now`. An orphaned clock-out produces
/// no session. Malformed punch sequences are warned about and tolerated,
/// never errors.
pub fn pair_sessions(events: &[ClockEvent], now: NaiveDateTime) -> Vec<WorkSession> {
    let mut sorted: Vec<&ClockEvent> = events.iter().collect();
    sorted.sort_by_key(|e| (e.timestamp, e.id));

    let mut sessions = Vec::new();
    let mut state = PairState::AwaitingIn;

    for ev in sorted {
        state = match state {
            PairState::AwaitingIn => match ev.kind {
                ClockKind::In => PairState::AwaitingOut(ev),
                ClockKind::Out => {
                    warn!(
                        employee_id = ev.employee_id,
                        timestamp = %ev.timestamp,
                        "orphaned clock-out ignored"
                    );
                    PairState::AwaitingIn
                }
            },
            PairState::AwaitingOut(open) => match ev.kind {
                ClockKind::Out => {
                    sessions.push(WorkSession::closed(
                        open.employee_id,
                        open.timestamp,
                        ev.timestamp,
                        open.project_id,
                    ));
                    PairState::AwaitingIn
                }
                ClockKind::In => {
                    // Double clock-in: the earlier punch stays as an open
                    // session and the newer punch takes its place.
                    warn!(
                        employee_id = open.employee_id,
                        timestamp = %open.timestamp,
                        "clock-in without a matching clock-out"
                    );
                    sessions.push(WorkSession::open(
                        open.employee_id,
                        open.timestamp,
                        now,
                        open.project_id,
                    ));
                    PairState::AwaitingOut(ev)
                }
            },
        };
    }

    if let PairState::AwaitingOut(open) = state {
        sessions.push(WorkSession::open(
            open.employee_id,
            open.timestamp,
            now,
            open.project_id,
        ));
    }

    sessions
}

/// Hours of sessions starting on one calendar day. Full precision.
pub fn hours_on(sessions: &[WorkSession], day: NaiveDate) -> Decimal {
    sessions
        .iter()
        .filter(|s| s.start.date() == day)
        .map(|s| s.hours())
        .sum()
}

/// Hours of sessions starting inside `window`, inclusive both ends.
/// Full precision.
pub fn hours_within(sessions: &[WorkSession], window: DateRange) -> Decimal {
    sessions
        .iter()
        .filter(|s| window.contains(s.start.date()))
        .map(|s| s.hours())
        .sum()
}

/// Bucket a company-wide event fetch per employee, preserving each
/// employee's retrieval order.
pub fn group_by_employee(events: Vec<ClockEvent>) -> BTreeMap<EmployeeId, Vec<ClockEvent>> {
    let mut grouped: BTreeMap<EmployeeId, Vec<ClockEvent>> = BTreeMap::new();
    for ev in events {
        grouped.entry(ev.employee_id).or_default().push(ev);
    }
    grouped
}
