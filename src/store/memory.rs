//! In-memory backend for tests and for embedders that already hold the
//! source rows.

use chrono::NaiveDateTime;

use super::LaborStore;
use crate::errors::AppResult;
use crate::models::CompanyId;
use crate::models::clock_event::ClockEvent;
use crate::models::employee::{Employee, RateRecord};
use crate::models::time_entry::TimeEntry;
use crate::utils::date::DateRange;

/// Holds the rows of a single company. Requests for any other company id
/// see an empty store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    company_id: CompanyId,
    clock_events: Vec<ClockEvent>,
    time_entries: Vec<TimeEntry>,
    rates: Vec<RateRecord>,
    employees: Vec<Employee>,
}

impl MemoryStore {
    pub fn new(company_id: CompanyId) -> Self {
        Self {
            company_id,
            ..Self::default()
        }
    }

    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn add_rate(&mut self, rate: RateRecord) {
        self.rates.push(rate);
    }

    pub fn add_clock_event(&mut self, event: ClockEvent) {
        self.clock_events.push(event);
    }

    pub fn add_time_entry(&mut self, entry: TimeEntry) {
        self.time_entries.push(entry);
    }
}

impl LaborStore for MemoryStore {
    fn list_clock_events(
        &self,
        company_id: CompanyId,
        since: NaiveDateTime,
    ) -> AppResult<Vec<ClockEvent>> {
        if company_id != self.company_id {
            return Ok(Vec::new());
        }
        Ok(self
            .clock_events
            .iter()
            .filter(|e| e.timestamp >= since)
            .cloned()
            .collect())
    }

    fn list_time_entries(
        &self,
        company_id: CompanyId,
        range: DateRange,
    ) -> AppResult<Vec<TimeEntry>> {
        if company_id != self.company_id {
            return Ok(Vec::new());
        }
        Ok(self
            .time_entries
            .iter()
            .filter(|e| range.contains(e.entry_date))
            .cloned()
            .collect())
    }

    fn list_current_rates(&self, company_id: CompanyId) -> AppResult<Vec<RateRecord>> {
        if company_id != self.company_id {
            return Ok(Vec::new());
        }
        Ok(self.rates.clone())
    }

    fn list_active_employees(&self, company_id: CompanyId) -> AppResult<Vec<Employee>> {
        if company_id != self.company_id {
            return Ok(Vec::new());
        }
        Ok(self.employees.clone())
    }
}
