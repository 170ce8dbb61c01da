//! Payroll aggregation.
//!
//! Composes the day tallies, contribution resolution, and loan matching
//! into one salary component per (employee, pay period). The computation is
//! a pure function of its inputs; recomputing with identical inputs yields
//! an identical result.

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, ComputationWarning, DeductionKind, DeductionLine, EmployeeProfile,
    GovernmentContributions, Loan, PayPeriod, PayrollComputation, SalaryComponent,
};
use crate::rounding::round_currency;
use crate::tables::{ContributionKind, TableSnapshot};

use super::contribution::{
    SssEmployerStrategy, resolve_pag_ibig, resolve_phil_health, resolve_sss,
};
use super::period_matching::match_loans;
use super::time_accounting::tally_day;

/// Warning code for a scheme whose contribution defaulted to zero.
pub const WARN_MISSING_ACTIVE_TABLE: &str = "missing_active_table";

/// Warning code for a concurrent loan of an already-applied type.
pub const WARN_MULTIPLE_ACTIVE_LOANS: &str = "multiple_active_loans";

/// A voucher or benefit deduction already approved for the period.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OtherDeduction {
    /// Payslip label for the deduction.
    pub label: String,
    /// Amount deducted this period.
    pub amount: Decimal,
}

/// The full input snapshot for one payroll computation.
///
/// Everything is borrowed: the engine reads a consistent snapshot and owns
/// none of it.
#[derive(Debug, Clone, Copy)]
pub struct PayrollInputs<'a> {
    /// The employee being paid.
    pub employee: &'a EmployeeProfile,
    /// The half-month window being paid.
    pub period: &'a PayPeriod,
    /// The employee's attendance records; records outside the period or
    /// belonging to other employees are ignored.
    pub attendance: &'a [AttendanceRecord],
    /// The employee's loans, in stored order.
    pub loans: &'a [Loan],
    /// Approved voucher/benefit deductions for the period.
    pub other_deductions: &'a [OtherDeduction],
    /// The contribution tables read at snapshot time.
    pub tables: &'a TableSnapshot,
    /// How the SSS employer share is derived for this run.
    pub sss_strategy: SssEmployerStrategy,
}

/// Computes the salary component for one employee and one pay period.
///
/// Steps:
/// 1. Tally every in-period attendance record and sum the regular and
///    overtime hours.
/// 2. Gross pay = total hours x (day rate / 8), rounded to centavos.
/// 3. Resolve the three statutory employee shares; a missing active table
///    degrades that scheme to zero and emits a warning instead of failing
///    the run.
/// 4. Deduct matched loan amortizations and the caller's other deductions.
/// 5. Net pay = gross - deductions, never floored at zero: a negative net
///    pay is surfaced so reporting can flag the over-deducted employee.
///
/// # Errors
///
/// Returns [`EngineError::MalformedAttendance`] when a record's clock-out
/// precedes its clock-in. Missing tables are warnings, not errors.
pub fn compute_salary_component(inputs: PayrollInputs<'_>) -> EngineResult<PayrollComputation> {
    let mut warnings = Vec::new();

    let mut hours_worked = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;
    for record in inputs
        .attendance
        .iter()
        .filter(|r| r.employee_id == inputs.employee.id && inputs.period.contains_date(r.date))
    {
        let tally = tally_day(record)?;
        hours_worked += tally.hours_worked;
        overtime_hours += tally.overtime_hours;
    }

    let hourly_rate = inputs.employee.hourly_rate();
    let gross_pay = round_currency(hours_worked * hourly_rate);

    let bases = &inputs.employee.contribution_bases;
    let sss = contribution_or_zero(
        resolve_sss(bases.sss, inputs.tables, inputs.sss_strategy).map(|s| s.employee_share),
        ContributionKind::Sss,
        &mut warnings,
    )?;
    let phil_health = contribution_or_zero(
        resolve_phil_health(bases.phil_health, inputs.tables).map(|s| s.employee_share),
        ContributionKind::PhilHealth,
        &mut warnings,
    )?;
    let pag_ibig = contribution_or_zero(
        resolve_pag_ibig(bases.pag_ibig, inputs.tables).map(|s| s.employee_share),
        ContributionKind::PagIbig,
        &mut warnings,
    )?;
    let government_contributions = GovernmentContributions {
        sss,
        phil_health,
        pag_ibig,
    };

    let matches = match_loans(inputs.loans, inputs.period);
    for loan in &matches.superseded {
        warn!(
            loan_id = %loan.id,
            application_type = loan.application_type.as_deref().unwrap_or(""),
            "concurrent loan of an already-applied type skipped"
        );
        warnings.push(ComputationWarning {
            code: WARN_MULTIPLE_ACTIVE_LOANS.to_string(),
            message: format!(
                "loan '{}' shares application type '{}' with an earlier applied loan and was skipped",
                loan.id,
                loan.application_type.as_deref().unwrap_or("")
            ),
        });
    }

    let mut deductions: Vec<DeductionLine> = matches
        .applied
        .iter()
        .map(|loan| DeductionLine {
            label: loan.deduction_label(),
            kind: DeductionKind::LoanAmortization,
            amount: round_currency(loan.amortization),
        })
        .collect();
    deductions.extend(inputs.other_deductions.iter().map(|d| DeductionLine {
        label: d.label.clone(),
        kind: DeductionKind::Other,
        amount: round_currency(d.amount),
    }));

    let itemized_total: Decimal = deductions.iter().map(|d| d.amount).sum();
    let total_deductions = round_currency(government_contributions.total() + itemized_total);
    let net_pay = round_currency(gross_pay - total_deductions);

    Ok(PayrollComputation {
        component: SalaryComponent {
            employee_id: inputs.employee.id.clone(),
            payroll_period: *inputs.period,
            hours_worked,
            overtime_hours,
            day_rate: inputs.employee.day_rate,
            hourly_rate,
            gross_pay,
            government_contributions,
            deductions,
            total_deductions,
            net_pay,
        },
        warnings,
    })
}

/// Unwraps a resolved employee share, degrading a missing table to zero
/// with a warning. Any other resolver error propagates.
fn contribution_or_zero(
    resolved: EngineResult<Decimal>,
    kind: ContributionKind,
    warnings: &mut Vec<ComputationWarning>,
) -> EngineResult<Decimal> {
    match resolved {
        Ok(share) => Ok(share),
        Err(EngineError::MissingActiveTable { kind: missing }) => {
            warn!(scheme = %missing, "no active contribution table; defaulting contribution to zero");
            warnings.push(ComputationWarning {
                code: WARN_MISSING_ACTIVE_TABLE.to_string(),
                message: format!("no active contribution table for {}; contribution set to 0", kind),
            });
            Ok(Decimal::ZERO)
        }
        Err(other) => Err(other),
    }
}
