//! The aggregation facade.
//!
//! Fetches source rows through the injected store and runs the
//! calculators. Every operation is a pure function of the fetched rows
//! plus the explicit `now` / `today` / range parameters: nothing here
//! reads the ambient clock, so identical inputs give identical results.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::Config;
use crate::core::calculator::reconcile::DerivedDay;
use crate::core::calculator::{activity, costing, reconcile, sessions};
use crate::errors::{AppError, AppResult};
use crate::models::activity::{ActivityStatus, EmployeeActivity};
use crate::models::clock_event::ClockEvent;
use crate::models::overview::LaborOverview;
use crate::models::reconciled::{EntrySource, ReconciledEntry};
use crate::models::time_entry::{EntryStatus, TimeEntry};
use crate::models::{CompanyId, EmployeeId};
use crate::store::LaborStore;
use crate::utils::date::DateRange;
use crate::utils::time::{round_currency, round_hours};

pub struct LaborEngine<S: LaborStore> {
    store: S,
    config: Config,
}

impl<S: LaborStore> LaborEngine<S> {
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Live punch-status board: one snapshot per employee, people on the
    /// clock first. `today` and `now` are supplied by the caller so the
    /// result is reproducible.
    pub fn compute_activity(
        &self,
        company_id: CompanyId,
        now: NaiveDateTime,
        today: NaiveDate,
    ) -> AppResult<Vec<EmployeeActivity>> {
        let week = DateRange::week_of(today, self.config.week_start()?);
        let since = NaiveDateTime::new(week.start, NaiveTime::MIN);

        let events = self.store.list_clock_events(company_id, since)?;
        let roster = self.store.list_active_employees(company_id)?;
        let grouped = sessions::group_by_employee(events);

        debug!(
            company_id,
            employees = roster.len(),
            punched = grouped.len(),
            "computing activity board"
        );
        Ok(activity::build_snapshots(&roster, &grouped, now, today, week))
    }

    /// Authoritative hours per employee per day over `range`: manual
    /// entries first, clock-derived totals filling the gaps. Derived
    /// hours are rounded to a tenth here, at the exposure point.
    pub fn compute_reconciled_timesheet(
        &self,
        company_id: CompanyId,
        range: DateRange,
        now: NaiveDateTime,
    ) -> AppResult<Vec<ReconciledEntry>> {
        let (entries, _) = self.reconcile_range(company_id, range, now)?;
        Ok(entries
            .into_iter()
            .map(|mut e| {
                if e.source == EntrySource::Derived {
                    e.hours = round_hours(e.hours);
                }
                e
            })
            .collect())
    }

    /// Company-wide labor dashboard: KPI hour sums, total and per-project
    /// approved cost, the recent-entries table, and the count of
    /// employees currently on the clock.
    pub fn compute_labor_overview(
        &self,
        company_id: CompanyId,
        range: DateRange,
        now: NaiveDateTime,
    ) -> AppResult<LaborOverview> {
        let (entries, grouped) = self.reconcile_range(company_id, range, now)?;
        let rates = costing::rate_map(&self.store.list_current_rates(company_id)?);
        let roster = self.store.list_active_employees(company_id)?;

        let active_employee_count = grouped
            .values()
            .filter(|events| activity::classify(events) == ActivityStatus::ClockedIn)
            .count();

        debug!(
            company_id,
            entries = entries.len(),
            active = active_employee_count,
            "computing labor overview"
        );

        Ok(LaborOverview {
            pending_hours: round_hours(costing::hours_with_status(&entries, EntryStatus::Pending)),
            approved_hours: round_hours(costing::hours_with_status(
                &entries,
                EntryStatus::Approved,
            )),
            active_employee_count,
            total_labor_cost: round_currency(costing::total_labor_cost(&entries, &rates)),
            cost_by_project: costing::cost_by_project(&entries, &rates),
            recent_entries: costing::recent_entries(
                &entries,
                &rates,
                &roster,
                self.config.recent_entries_limit,
            ),
        })
    }

    /// Shared fetch-and-merge path. Returns full-precision reconciled
    /// entries plus the per-employee event buckets so callers can derive
    /// further figures without refetching.
    fn reconcile_range(
        &self,
        company_id: CompanyId,
        range: DateRange,
        now: NaiveDateTime,
    ) -> AppResult<(Vec<ReconciledEntry>, BTreeMap<EmployeeId, Vec<ClockEvent>>)> {
        let manual = self.store.list_time_entries(company_id, range)?;
        validate_entries(&manual)?;

        let since = NaiveDateTime::new(range.start, NaiveTime::MIN);
        let events = self.store.list_clock_events(company_id, since)?;
        let grouped = sessions::group_by_employee(events);

        let mut derived: Vec<DerivedDay> = Vec::new();
        for (&employee_id, events) in &grouped {
            let paired = sessions::pair_sessions(events, now);
            derived.extend(reconcile::derived_days(employee_id, &paired, range));
        }

        Ok((reconcile::reconcile(&manual, &derived), grouped))
    }
}

/// Input-contract check at the engine boundary: a negative hours value in
/// a manual row is bad data from the caller, not a quality anomaly this
/// crate has a policy for.
fn validate_entries(entries: &[TimeEntry]) -> AppResult<()> {
    for entry in entries {
        if entry.hours < Decimal::ZERO || entry.overtime_hours.unwrap_or_default() < Decimal::ZERO
        {
            return Err(AppError::InvalidHours(format!(
                "time entry {} for employee {} has negative hours",
                entry.id, entry.employee_id
            )));
        }
    }
    Ok(())
}
