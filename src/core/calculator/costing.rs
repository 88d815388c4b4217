//! Cost attribution: reconciled hours priced by the rate directory.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::models::employee::{Employee, RateRecord};
use crate::models::overview::{ProjectCost, RecentEntry};
use crate::models::reconciled::ReconciledEntry;
use crate::models::time_entry::EntryStatus;
use crate::models::{EmployeeId, ProjectId};
use crate::utils::time::{round_currency, round_hours};

/// Flattened rate lookup.
pub fn rate_map(rates: &[RateRecord]) -> HashMap<EmployeeId, Decimal> {
    rates.iter().map(|r| (r.employee_id, r.hourly_rate)).collect()
}

/// `hours × rate`, or None when the employee has no configured rate.
/// "No rate" is a distinct state from a zero-dollar cost; summed totals
/// exclude such entries instead of counting them as zero, so incomplete
/// rate data never understates an aggregate.
pub fn entry_cost(
    entry: &ReconciledEntry,
    rates: &HashMap<EmployeeId, Decimal>,
) -> Option<Decimal> {
    rates.get(&entry.employee_id).map(|rate| entry.hours * rate)
}

/// Total cost of approved entries with a known rate. Full precision.
pub fn total_labor_cost(
    entries: &[ReconciledEntry],
    rates: &HashMap<EmployeeId, Decimal>,
) -> Decimal {
    entries
        .iter()
        .filter(|e| e.status == EntryStatus::Approved)
        .filter_map(|e| entry_cost(e, rates))
        .sum()
}

/// Plain hour sum over entries with one status; no rate applied.
/// Full precision.
pub fn hours_with_status(entries: &[ReconciledEntry], status: EntryStatus) -> Decimal {
    entries
        .iter()
        .filter(|e| e.status == status)
        .map(|e| e.hours)
        .sum()
}

/// Approved cost per project, biggest bucket first. Entries with no
/// project land in the unassigned (None) bucket; entries with an
/// unavailable cost contribute to no bucket at all.
pub fn cost_by_project(
    entries: &[ReconciledEntry],
    rates: &HashMap<EmployeeId, Decimal>,
) -> Vec<ProjectCost> {
    let mut buckets: BTreeMap<Option<ProjectId>, Decimal> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.status == EntryStatus::Approved) {
        if let Some(cost) = entry_cost(entry, rates) {
            *buckets.entry(entry.project_id).or_insert(Decimal::ZERO) += cost;
        }
    }

    let mut out: Vec<ProjectCost> = buckets
        .into_iter()
        .map(|(project_id, total)| ProjectCost {
            project_id,
            total_cost: round_currency(total),
        })
        .collect();
    out.sort_by(|a, b| b.total_cost.cmp(&a.total_cost));
    out
}

/// Most recent `limit` entries by date, any status, priced per row.
/// Ties on date break toward the higher employee id, matching the
/// reverse of the reconciler's sort.
pub fn recent_entries(
    entries: &[ReconciledEntry],
    rates: &HashMap<EmployeeId, Decimal>,
    roster: &[Employee],
    limit: usize,
) -> Vec<RecentEntry> {
    let names: HashMap<EmployeeId, &str> =
        roster.iter().map(|e| (e.id, e.name.as_str())).collect();

    let mut sorted: Vec<&ReconciledEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| (b.entry_date, b.employee_id).cmp(&(a.entry_date, a.employee_id)));

    sorted
        .into_iter()
        .take(limit)
        .map(|e| RecentEntry {
            entry_date: e.entry_date,
            employee_id: e.employee_id,
            employee_name: names.get(&e.employee_id).map(|n| n.to_string()),
            hours: round_hours(e.hours),
            hourly_rate: rates.get(&e.employee_id).copied(),
            cost: entry_cost(e, rates).map(round_currency),
            status: e.status,
            source: e.source,
            project_id: e.project_id,
        })
        .collect()
}
