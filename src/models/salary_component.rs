//! Salary component models.
//!
//! This module contains the [`SalaryComponent`] payslip line emitted per
//! (employee, pay period) computation and the [`PayrollComputation`] wrapper
//! that carries the observable warnings alongside it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pay_period::PayPeriod;

/// Per-scheme government contribution amounts withheld from the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentContributions {
    /// SSS employee share.
    pub sss: Decimal,
    /// PhilHealth employee share.
    pub phil_health: Decimal,
    /// Pag-IBIG employee share.
    pub pag_ibig: Decimal,
}

impl GovernmentContributions {
    /// A zeroed set of contributions.
    pub fn zero() -> Self {
        Self {
            sss: Decimal::ZERO,
            phil_health: Decimal::ZERO,
            pag_ibig: Decimal::ZERO,
        }
    }

    /// The sum of the three employee shares.
    pub fn total(&self) -> Decimal {
        self.sss + self.phil_health + self.pag_ibig
    }
}

/// The kind of a non-statutory deduction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// A matched loan amortization.
    LoanAmortization,
    /// An approved voucher or benefit deduction supplied by the caller.
    Other,
}

/// One itemized deduction on the payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// Payslip label (loan application type, voucher name, ...).
    pub label: String,
    /// What produced this line.
    pub kind: DeductionKind,
    /// Amount deducted this period.
    pub amount: Decimal,
}

/// The computed payslip line for one employee for one pay period.
///
/// Emitted fresh per computation and never mutated; recomputation with
/// updated inputs replaces it wholesale. Net pay is deliberately not
/// floored at zero so downstream reporting can flag over-deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponent {
    /// The employee this payslip line belongs to.
    pub employee_id: String,
    /// The half-month window being paid.
    pub payroll_period: PayPeriod,
    /// Total regular hours worked across the period.
    pub hours_worked: Decimal,
    /// Total overtime hours across the period (reported, not paid).
    pub overtime_hours: Decimal,
    /// The daily rate the gross derives from.
    pub day_rate: Decimal,
    /// The effective hourly rate (`day_rate / 8`).
    pub hourly_rate: Decimal,
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Statutory employee shares withheld this period.
    pub government_contributions: GovernmentContributions,
    /// Itemized loan and other deductions.
    pub deductions: Vec<DeductionLine>,
    /// Statutory plus itemized deductions.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions; may be negative.
    pub net_pay: Decimal,
}

/// A non-fatal condition surfaced by a computation.
///
/// Warnings make the engine's degrade-to-default decisions observable to
/// the caller instead of burying them in a log nobody audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationWarning {
    /// A code identifying the condition (e.g., "missing_active_table").
    pub code: String,
    /// A human-readable description of the condition.
    pub message: String,
}

/// The deterministic output of one payroll computation.
///
/// Contains no timestamps or generated IDs: recomputing from identical
/// inputs yields an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollComputation {
    /// The payslip line.
    pub component: SalaryComponent,
    /// Observable non-fatal conditions hit during the computation.
    pub warnings: Vec<ComputationWarning>,
}
