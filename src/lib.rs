//! crewtime library root.
//! Labor activity and time reconciliation for construction operations.
//!
//! Derives worked hours and labor cost from raw clock-in/clock-out
//! events, reconciles them against manually entered timesheet rows
//! (manual rows always win), and aggregates the result into the
//! per-employee, per-project, and per-day views the dashboards render.
//!
//! Every aggregation is a pure function of the rows fetched through
//! [`store::LaborStore`] plus explicit `now` / `today` / date-range
//! parameters; nothing reads the ambient clock, so results are
//! reproducible.

pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod utils;

pub use config::Config;
pub use crate::core::engine::LaborEngine;
pub use errors::{AppError, AppResult};
pub use store::{LaborStore, MemoryStore, SqliteStore};
pub use utils::date::DateRange;
