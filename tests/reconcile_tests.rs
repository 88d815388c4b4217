mod common;

use common::{entry, punch, ts};
use rust_decimal_macros::dec;

use crewtime::core::calculator::reconcile::{DerivedDay, derived_days, reconcile};
use crewtime::core::calculator::sessions::pair_sessions;
use crewtime::models::event_kind::ClockKind;
use crewtime::models::reconciled::EntrySource;
use crewtime::models::time_entry::EntryStatus;
use crewtime::utils::date::DateRange;

fn derived(employee_id: i64, on: &str, hours: rust_decimal::Decimal) -> DerivedDay {
    DerivedDay {
        employee_id,
        date: common::day(on),
        hours,
        project_id: None,
    }
}

#[test]
fn test_manual_entry_wins_over_derived() {
    let manual = vec![entry(1, 1, "2026-01-05", dec!(6), EntryStatus::Approved)];
    let clock = vec![derived(1, "2026-01-05", dec!(7.5))];

    let merged = reconcile(&manual, &clock);

    assert_eq!(merged.len(), 1, "one entry per (employee, date)");
    assert_eq!(merged[0].hours, dec!(6), "manual hours must never be replaced");
    assert_eq!(merged[0].source, EntrySource::Manual);
}

#[test]
fn test_derived_entry_fills_gap() {
    let manual = vec![entry(1, 1, "2026-01-05", dec!(8), EntryStatus::Approved)];
    let clock = vec![
        derived(1, "2026-01-05", dec!(7.5)),
        derived(1, "2026-01-06", dec!(4)),
    ];

    let merged = reconcile(&manual, &clock);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].entry_date, common::day("2026-01-05"));
    assert_eq!(merged[0].source, EntrySource::Manual);
    assert_eq!(merged[1].entry_date, common::day("2026-01-06"));
    assert_eq!(merged[1].source, EntrySource::Derived);
    assert_eq!(merged[1].hours, dec!(4));
    assert_eq!(
        merged[1].status,
        EntryStatus::Pending,
        "a derived day has not been reviewed"
    );
}

#[test]
fn test_zero_hour_derived_day_is_dropped() {
    let clock = vec![derived(1, "2026-01-05", dec!(0))];

    let merged = reconcile(&[], &clock);

    assert!(
        merged.is_empty(),
        "no entry may be fabricated for a day with no worked time"
    );
}

#[test]
fn test_output_sorted_by_date_then_employee() {
    let manual = vec![
        entry(1, 2, "2026-01-06", dec!(8), EntryStatus::Pending),
        entry(2, 1, "2026-01-06", dec!(8), EntryStatus::Pending),
        entry(3, 2, "2026-01-05", dec!(8), EntryStatus::Pending),
    ];

    let merged = reconcile(&manual, &[]);

    let keys: Vec<(chrono::NaiveDate, i64)> =
        merged.iter().map(|e| (e.entry_date, e.employee_id)).collect();
    assert_eq!(
        keys,
        vec![
            (common::day("2026-01-05"), 2),
            (common::day("2026-01-06"), 1),
            (common::day("2026-01-06"), 2),
        ]
    );
}

#[test]
fn test_overtime_counts_into_manual_total() {
    let mut with_ot = entry(1, 1, "2026-01-05", dec!(8), EntryStatus::Approved);
    with_ot.overtime_hours = Some(dec!(2));

    let merged = reconcile(&[with_ot], &[]);

    assert_eq!(merged[0].hours, dec!(10));
}

#[test]
fn test_derived_days_bucket_sessions_by_start_date() {
    let events = vec![
        punch(1, 1, ClockKind::In, "2026-01-05 09:00"),
        punch(2, 1, ClockKind::Out, "2026-01-05 13:00"),
        punch(3, 1, ClockKind::In, "2026-01-06 09:00"),
        punch(4, 1, ClockKind::Out, "2026-01-06 17:00"),
    ];
    let sessions = pair_sessions(&events, ts("2026-01-06 18:00"));
    let range = DateRange::new(common::day("2026-01-05"), common::day("2026-01-11"));

    let days = derived_days(1, &sessions, range);

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, common::day("2026-01-05"));
    assert_eq!(days[0].hours, dec!(4));
    assert_eq!(days[1].date, common::day("2026-01-06"));
    assert_eq!(days[1].hours, dec!(8));
}

#[test]
fn test_derived_days_drop_dates_outside_range() {
    let events = vec![
        punch(1, 1, ClockKind::In, "2026-01-02 09:00"),
        punch(2, 1, ClockKind::Out, "2026-01-02 17:00"),
    ];
    let sessions = pair_sessions(&events, ts("2026-01-06 18:00"));
    let range = DateRange::new(common::day("2026-01-05"), common::day("2026-01-11"));

    assert!(derived_days(1, &sessions, range).is_empty());
}

#[test]
fn test_derived_day_keeps_first_session_project() {
    let events = vec![
        common::punch_on(1, 1, ClockKind::In, "2026-01-05 09:00", 42),
        punch(2, 1, ClockKind::Out, "2026-01-05 12:00"),
        common::punch_on(3, 1, ClockKind::In, "2026-01-05 13:00", 7),
        punch(4, 1, ClockKind::Out, "2026-01-05 17:00"),
    ];
    let sessions = pair_sessions(&events, ts("2026-01-05 18:00"));
    let range = DateRange::new(common::day("2026-01-05"), common::day("2026-01-05"));

    let days = derived_days(1, &sessions, range);

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].project_id, Some(42));
    assert_eq!(days[0].hours, dec!(7));
}
