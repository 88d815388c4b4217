mod common;

use common::{punch, punch_on, ts};
use rust_decimal_macros::dec;

use crewtime::core::calculator::sessions::{hours_on, hours_within, pair_sessions};
use crewtime::models::event_kind::ClockKind;
use crewtime::utils::date::DateRange;
use crewtime::utils::time::round_hours;

#[test]
fn test_full_day_pairs_into_one_closed_session() {
    let events = vec![
        punch(1, 1, ClockKind::In, "2026-01-05 09:00"),
        punch(2, 1, ClockKind::Out, "2026-01-05 17:00"),
    ];

    let sessions = pair_sessions(&events, ts("2026-01-05 18:00"));

    assert_eq!(sessions.len(), 1, "expected exactly one session");
    assert!(!sessions[0].is_open());
    assert_eq!(
        round_hours(hours_on(&sessions, common::day("2026-01-05"))),
        dec!(8.0)
    );
}

#[test]
fn test_open_session_runs_to_now() {
    let events = vec![punch(1, 1, ClockKind::In, "2026-01-05 09:00")];

    let sessions = pair_sessions(&events, ts("2026-01-05 13:00"));

    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].is_open(), "a lone clock-in must stay open");
    assert_eq!(
        round_hours(hours_on(&sessions, common::day("2026-01-05"))),
        dec!(4.0)
    );
}

#[test]
fn test_orphaned_clock_out_produces_no_session() {
    let events = vec![punch(1, 1, ClockKind::Out, "2026-01-05 09:00")];

    let sessions = pair_sessions(&events, ts("2026-01-05 13:00"));

    assert!(sessions.is_empty(), "an orphaned clock-out pairs with nothing");
    assert_eq!(hours_on(&sessions, common::day("2026-01-05")), dec!(0));
}

#[test]
fn test_double_clock_in_keeps_first_as_open_session() {
    let events = vec![
        punch(1, 1, ClockKind::In, "2026-01-05 09:00"),
        punch(2, 1, ClockKind::In, "2026-01-05 10:00"),
        punch(3, 1, ClockKind::Out, "2026-01-05 12:00"),
    ];

    let sessions = pair_sessions(&events, ts("2026-01-05 12:00"));

    assert_eq!(sessions.len(), 2);
    assert!(sessions[0].is_open(), "first clock-in becomes an open session");
    assert_eq!(sessions[0].start, ts("2026-01-05 09:00"));
    assert!(!sessions[1].is_open(), "second clock-in pairs with the out");
    assert_eq!(sessions[1].start, ts("2026-01-05 10:00"));
    assert_eq!(sessions[1].end, Some(ts("2026-01-05 12:00")));
}

#[test]
fn test_unsorted_events_are_paired_chronologically() {
    let events = vec![
        punch(2, 1, ClockKind::Out, "2026-01-05 17:00"),
        punch(1, 1, ClockKind::In, "2026-01-05 09:00"),
    ];

    let sessions = pair_sessions(&events, ts("2026-01-05 18:00"));

    assert_eq!(sessions.len(), 1);
    assert_eq!(
        round_hours(hours_on(&sessions, common::day("2026-01-05"))),
        dec!(8.0)
    );
}

#[test]
fn test_open_session_never_has_negative_duration() {
    // Device clock ahead of the server: punch-in "after" now.
    let events = vec![punch(1, 1, ClockKind::In, "2026-01-05 14:00")];

    let sessions = pair_sessions(&events, ts("2026-01-05 13:00"));

    assert_eq!(sessions.len(), 1);
    assert_eq!(hours_on(&sessions, common::day("2026-01-05")), dec!(0));
    assert!(
        sessions.iter().all(|s| s.hours() >= dec!(0)),
        "no session may carry a negative duration"
    );
}

#[test]
fn test_multiple_pairs_in_one_day_accumulate() {
    let events = vec![
        punch(1, 1, ClockKind::In, "2026-01-05 07:00"),
        punch(2, 1, ClockKind::Out, "2026-01-05 11:30"),
        punch(3, 1, ClockKind::In, "2026-01-05 12:00"),
        punch(4, 1, ClockKind::Out, "2026-01-05 15:30"),
    ];

    let sessions = pair_sessions(&events, ts("2026-01-05 18:00"));

    assert_eq!(sessions.len(), 2);
    assert_eq!(
        round_hours(hours_on(&sessions, common::day("2026-01-05"))),
        dec!(8.0)
    );
}

#[test]
fn test_week_rollup_buckets_by_session_start() {
    let events = vec![
        punch(1, 1, ClockKind::In, "2026-01-05 09:00"),
        punch(2, 1, ClockKind::Out, "2026-01-05 17:00"),
        punch(3, 1, ClockKind::In, "2026-01-09 09:00"),
        punch(4, 1, ClockKind::Out, "2026-01-09 13:00"),
        // The week before; must not leak into the window.
        punch(5, 1, ClockKind::In, "2026-01-02 09:00"),
        punch(6, 1, ClockKind::Out, "2026-01-02 17:00"),
    ];

    let sessions = pair_sessions(&events, ts("2026-01-09 18:00"));
    let week = DateRange::new(common::day("2026-01-05"), common::day("2026-01-11"));

    assert_eq!(round_hours(hours_within(&sessions, week)), dec!(12.0));
}

#[test]
fn test_sessions_carry_the_clock_in_project() {
    let events = vec![
        punch_on(1, 1, ClockKind::In, "2026-01-05 09:00", 42),
        punch(2, 1, ClockKind::Out, "2026-01-05 17:00"),
    ];

    let sessions = pair_sessions(&events, ts("2026-01-05 18:00"));

    assert_eq!(sessions[0].project_id, Some(42));
}

#[test]
fn test_empty_event_list_is_normal() {
    let sessions = pair_sessions(&[], ts("2026-01-05 13:00"));
    assert!(sessions.is_empty());
    assert_eq!(hours_on(&sessions, common::day("2026-01-05")), dec!(0));
}
