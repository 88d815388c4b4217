//! The read-only data-access seam between the hosted relational store
//! and the aggregation core.
//!
//! The trait is implemented by storage backends; the engine depends on
//! this abstraction, not on any concrete backend. All methods are reads.
//! Writes (punch capture, timesheet entry, approval) happen in the
//! surrounding application.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use chrono::NaiveDateTime;

use crate::errors::AppResult;
use crate::models::CompanyId;
use crate::models::clock_event::ClockEvent;
use crate::models::employee::{Employee, RateRecord};
use crate::models::time_entry::TimeEntry;
use crate::utils::date::DateRange;

pub trait LaborStore {
    /// Clock events at or after `since`. No ordering is guaranteed; the
    /// calculators sort what they need sorted.
    fn list_clock_events(
        &self,
        company_id: CompanyId,
        since: NaiveDateTime,
    ) -> AppResult<Vec<ClockEvent>>;

    /// Manual timesheet rows with entry dates inside `range`.
    fn list_time_entries(
        &self,
        company_id: CompanyId,
        range: DateRange,
    ) -> AppResult<Vec<TimeEntry>>;

    /// Current hourly rate per employee, one row each. Employees may be
    /// absent; their cost is then unavailable.
    fn list_current_rates(&self, company_id: CompanyId) -> AppResult<Vec<RateRecord>>;

    /// The active roster.
    fn list_active_employees(&self, company_id: CompanyId) -> AppResult<Vec<Employee>>;
}
