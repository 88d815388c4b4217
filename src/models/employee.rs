use rust_decimal::Decimal;
use serde::Serialize;

use super::EmployeeId;

/// One row of the active roster.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub title: Option<String>,
}

/// Current hourly rate for one employee, flattened from the pay rate
/// directory. An employee with no row here has no configured rate and
/// contributes an unavailable cost, not a zero one.
#[derive(Debug, Clone, Serialize)]
pub struct RateRecord {
    pub employee_id: EmployeeId,
    pub hourly_rate: Decimal,
}
