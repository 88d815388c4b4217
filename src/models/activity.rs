use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::EmployeeId;
use super::clock_event::ClockEvent;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    ClockedIn,
    ClockedOut,
    NoActivity,
}

impl ActivityStatus {
    /// Display order on the activity board: people on the clock first,
    /// people with no punches last.
    pub fn rank(&self) -> u8 {
        match self {
            ActivityStatus::ClockedIn => 0,
            ActivityStatus::ClockedOut => 1,
            ActivityStatus::NoActivity => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::ClockedIn => "clocked_in",
            ActivityStatus::ClockedOut => "clocked_out",
            ActivityStatus::NoActivity => "no_activity",
        }
    }
}

/// Per-employee snapshot recomputed on every request; owned by the
/// request that computed it.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeActivity {
    pub employee_id: EmployeeId,
    /// None when the employee id appears in the event stream but not on
    /// the roster.
    pub name: Option<String>,
    pub title: Option<String>,
    pub current_status: ActivityStatus,
    pub last_event_timestamp: Option<NaiveDateTime>,
    /// Rounded to a tenth of an hour.
    pub today_hours: Decimal,
    pub week_hours: Decimal,
    /// Today's raw punches in retrieval order; consumers re-sort for
    /// display if they need to.
    pub today_events: Vec<ClockEvent>,
}
