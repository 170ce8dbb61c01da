//! Request types for the payroll engine API.
//!
//! The request carries the full input snapshot for one computation; the
//! contribution tables come from application state, everything else from
//! the caller.

use serde::Deserialize;

use crate::calculation::{OtherDeduction, SssEmployerStrategy};
use crate::models::{AttendanceRecord, EmployeeProfile, Loan, PayPeriod};

/// A payroll calculation request.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationRequest {
    /// The employee being paid.
    pub employee: EmployeeProfile,
    /// The half-month window being paid.
    pub pay_period: PayPeriod,
    /// The employee's attendance records for the period.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// The employee's loans, in stored order.
    #[serde(default)]
    pub loans: Vec<Loan>,
    /// Approved voucher/benefit deductions for the period.
    #[serde(default)]
    pub other_deductions: Vec<OtherDeduction>,
    /// How the SSS employer share is derived; defaults to the table-driven
    /// path.
    #[serde(default)]
    pub sss_employer_strategy: SssEmployerStrategy,
}
