//! Loan model and related types.
//!
//! Covers both company loans and government loan applications (SSS salary
//! loans, Pag-IBIG calamity loans, and the like). Government loans carry an
//! application type, a repayment window, and a half-month schedule.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pay_period::MonthHalf;

/// Approval status of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Awaiting approval; never deducted.
    Pending,
    /// Approved; amortizations apply to matching periods.
    Approved,
    /// Rejected; never deducted.
    Rejected,
}

/// A loan with a fixed per-period amortization.
///
/// Expected (not hard-enforced) invariant: amortization times the number of
/// scheduled periods stays within `total_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier for the loan.
    pub id: String,
    /// The borrowing employee.
    pub employee_id: String,
    /// Principal amount.
    pub amount: Decimal,
    /// Fixed repayment deducted per matching pay period.
    pub amortization: Decimal,
    /// Total repayable amount.
    pub total_amount: Decimal,
    /// Approval status.
    pub status: LoanStatus,
    /// Government application type (e.g., "sss_salary_loan"); `None` for
    /// company loans.
    #[serde(default)]
    pub application_type: Option<String>,
    /// The half of the month the amortization is scheduled against.
    #[serde(default)]
    pub monthly_schedule: Option<MonthHalf>,
    /// First date the repayment window covers (government loans).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last date the repayment window covers (government loans).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Loan {
    /// Returns true for government loan applications.
    pub fn is_government(&self) -> bool {
        self.application_type.is_some()
    }

    /// The label a payslip deduction line carries for this loan.
    pub fn deduction_label(&self) -> String {
        self.application_type
            .clone()
            .unwrap_or_else(|| "company_loan".to_string())
    }
}
