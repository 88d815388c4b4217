//! SQLite reference backend.
//!
//! Adapted row mapping: malformed timestamps, kinds, statuses, and
//! negative hour values are rejected at this boundary with a descriptive
//! conversion error instead of being coerced and handed to the core.

use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;

use super::LaborStore;
use crate::errors::{AppError, AppResult};
use crate::models::CompanyId;
use crate::models::clock_event::ClockEvent;
use crate::models::employee::{Employee, RateRecord};
use crate::models::event_kind::ClockKind;
use crate::models::time_entry::{EntryStatus, TimeEntry};
use crate::utils::date::DateRange;
use crate::utils::time::{format_timestamp, parse_timestamp};

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    // -----------------------------------------------------------------
    // Seeding helpers. The surrounding application owns all writes; these
    // exist for embedders that also own the store file, and for tests.
    // -----------------------------------------------------------------

    pub fn insert_employee(&self, company_id: CompanyId, employee: &Employee) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO employees (id, company_id, name, title, active)
             VALUES (?1, ?2, ?3, ?4, 1)",
            params![employee.id, company_id, employee.name, employee.title],
        )?;
        Ok(())
    }

    pub fn insert_clock_event(&self, company_id: CompanyId, ev: &ClockEvent) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO clock_events (company_id, employee_id, kind, timestamp, project_id, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                company_id,
                ev.employee_id,
                ev.kind.to_db_str(),
                format_timestamp(ev.timestamp),
                ev.project_id,
                ev.notes,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn insert_time_entry(&self, company_id: CompanyId, entry: &TimeEntry) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO time_entries
             (company_id, employee_id, entry_date, hours, overtime_hours, status, project_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                company_id,
                entry.employee_id,
                entry.entry_date.format("%Y-%m-%d").to_string(),
                entry.hours.to_string(),
                entry.overtime_hours.map(|h| h.to_string()),
                entry.status.to_db_str(),
                entry.project_id,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn upsert_rate(&self, company_id: CompanyId, rate: &RateRecord) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO pay_rates (company_id, employee_id, hourly_rate)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (company_id, employee_id) DO UPDATE SET hourly_rate = excluded.hourly_rate",
            params![company_id, rate.employee_id, rate.hourly_rate.to_string()],
        )?;
        Ok(())
    }
}

fn init_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY,
            company_id  INTEGER NOT NULL,
            name        TEXT NOT NULL,
            title       TEXT,
            active      INTEGER NOT NULL DEFAULT 1
        );
        CREATE TABLE IF NOT EXISTS clock_events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id  INTEGER NOT NULL,
            employee_id INTEGER NOT NULL,
            kind        TEXT NOT NULL,
            timestamp   TEXT NOT NULL,
            project_id  INTEGER,
            notes       TEXT
        );
        CREATE TABLE IF NOT EXISTS time_entries (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id     INTEGER NOT NULL,
            employee_id    INTEGER NOT NULL,
            entry_date     TEXT NOT NULL,
            hours          TEXT NOT NULL,
            overtime_hours TEXT,
            status         TEXT NOT NULL DEFAULT 'pending',
            project_id     INTEGER
        );
        CREATE TABLE IF NOT EXISTS pay_rates (
            company_id  INTEGER NOT NULL,
            employee_id INTEGER NOT NULL,
            hourly_rate TEXT NOT NULL,
            PRIMARY KEY (company_id, employee_id)
        );
        CREATE INDEX IF NOT EXISTS idx_clock_events_company_ts
            ON clock_events (company_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_time_entries_company_date
            ON time_entries (company_id, entry_date);",
    )?;
    Ok(())
}

// ---------------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------------

fn conversion_failure(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn map_clock_event_row(row: &Row) -> rusqlite::Result<ClockEvent> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp: NaiveDateTime = parse_timestamp(&ts_str)
        .ok_or_else(|| conversion_failure(AppError::InvalidTimestamp(ts_str.clone())))?;

    let kind_str: String = row.get("kind")?;
    let kind = ClockKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_failure(AppError::InvalidEventKind(kind_str.clone())))?;

    Ok(ClockEvent {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        kind,
        timestamp,
        project_id: row.get("project_id")?,
        notes: row.get("notes")?,
    })
}

fn parse_hours(raw: &str) -> Result<Decimal, rusqlite::Error> {
    let hours = Decimal::from_str(raw)
        .map_err(|_| conversion_failure(AppError::InvalidHours(raw.to_string())))?;
    if hours < Decimal::ZERO {
        return Err(conversion_failure(AppError::InvalidHours(raw.to_string())));
    }
    Ok(hours)
}

fn map_time_entry_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    let date_str: String = row.get("entry_date")?;
    let entry_date = crate::utils::date::parse_date(&date_str)
        .ok_or_else(|| conversion_failure(AppError::InvalidDate(date_str.clone())))?;

    let hours_str: String = row.get("hours")?;
    let hours = parse_hours(&hours_str)?;

    let overtime_hours = match row.get::<_, Option<String>>("overtime_hours")? {
        Some(raw) => Some(parse_hours(&raw)?),
        None => None,
    };

    let status_str: String = row.get("status")?;
    let status = EntryStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_failure(AppError::InvalidStatus(status_str.clone())))?;

    Ok(TimeEntry {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        entry_date,
        hours,
        overtime_hours,
        status,
        project_id: row.get("project_id")?,
    })
}

impl LaborStore for SqliteStore {
    fn list_clock_events(
        &self,
        company_id: CompanyId,
        since: NaiveDateTime,
    ) -> AppResult<Vec<ClockEvent>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, employee_id, kind, timestamp, project_id, notes
             FROM clock_events
             WHERE company_id = ?1 AND timestamp >= ?2
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map(
            params![company_id, format_timestamp(since)],
            map_clock_event_row,
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn list_time_entries(
        &self,
        company_id: CompanyId,
        range: DateRange,
    ) -> AppResult<Vec<TimeEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, employee_id, entry_date, hours, overtime_hours, status, project_id
             FROM time_entries
             WHERE company_id = ?1 AND entry_date BETWEEN ?2 AND ?3
             ORDER BY entry_date ASC, id ASC",
        )?;

        let rows = stmt.query_map(
            params![
                company_id,
                range.start.format("%Y-%m-%d").to_string(),
                range.end.format("%Y-%m-%d").to_string(),
            ],
            map_time_entry_row,
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn list_current_rates(&self, company_id: CompanyId) -> AppResult<Vec<RateRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT employee_id, hourly_rate FROM pay_rates WHERE company_id = ?1",
        )?;

        let rows = stmt.query_map(params![company_id], |row| {
            let raw: String = row.get("hourly_rate")?;
            let hourly_rate = Decimal::from_str(&raw)
                .map_err(|_| conversion_failure(AppError::InvalidHours(raw.clone())))?;
            Ok(RateRecord {
                employee_id: row.get("employee_id")?,
                hourly_rate,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn list_active_employees(&self, company_id: CompanyId) -> AppResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, title FROM employees
             WHERE company_id = ?1 AND active = 1
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map(params![company_id], |row| {
            Ok(Employee {
                id: row.get("id")?,
                name: row.get("name")?,
                title: row.get("title")?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
