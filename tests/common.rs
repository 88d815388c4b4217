#![allow(dead_code)]
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crewtime::models::clock_event::ClockEvent;
use crewtime::models::employee::{Employee, RateRecord};
use crewtime::models::event_kind::ClockKind;
use crewtime::models::time_entry::{EntryStatus, TimeEntry};
use crewtime::models::{EmployeeId, ProjectId};
use crewtime::store::MemoryStore;

pub const COMPANY: i64 = 1;

/// "YYYY-MM-DD HH:MM" → timestamp, panicking on typos in the fixture
pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("bad fixture timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("bad fixture date")
}

pub fn punch(id: i64, employee_id: EmployeeId, kind: ClockKind, at: &str) -> ClockEvent {
    ClockEvent {
        id,
        employee_id,
        kind,
        timestamp: ts(at),
        project_id: None,
        notes: None,
    }
}

pub fn punch_on(
    id: i64,
    employee_id: EmployeeId,
    kind: ClockKind,
    at: &str,
    project_id: ProjectId,
) -> ClockEvent {
    ClockEvent {
        project_id: Some(project_id),
        ..punch(id, employee_id, kind, at)
    }
}

pub fn entry(
    id: i64,
    employee_id: EmployeeId,
    on: &str,
    hours: Decimal,
    status: EntryStatus,
) -> TimeEntry {
    TimeEntry {
        id,
        employee_id,
        entry_date: day(on),
        hours,
        overtime_hours: None,
        status,
        project_id: None,
    }
}

pub fn entry_on(
    id: i64,
    employee_id: EmployeeId,
    on: &str,
    hours: Decimal,
    status: EntryStatus,
    project_id: ProjectId,
) -> TimeEntry {
    TimeEntry {
        project_id: Some(project_id),
        ..entry(id, employee_id, on, hours, status)
    }
}

pub fn employee(id: EmployeeId, name: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        title: None,
    }
}

pub fn rate(employee_id: EmployeeId, hourly_rate: Decimal) -> RateRecord {
    RateRecord {
        employee_id,
        hourly_rate,
    }
}

/// A store with the usual three-person crew and no rows yet.
pub fn crew_store() -> MemoryStore {
    let mut store = MemoryStore::new(COMPANY);
    store.add_employee(employee(1, "Marcus Thompson"));
    store.add_employee(employee(2, "Carlos Ramirez"));
    store.add_employee(employee(3, "Nicole Scott"));
    store
}
