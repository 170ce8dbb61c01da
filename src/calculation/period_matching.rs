//! Loan-to-period schedule matching.
//!
//! Decides which loan amortizations fall due in a half-month pay period.
//! Concurrent approved loans of the same application type are collected and
//! surfaced rather than silently dropped; only the first stored one is
//! applied, and the aggregator reports the rest as warnings.

use crate::models::{Loan, LoanStatus, PayPeriod};

/// The outcome of matching a set of loans against one pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanMatchResult<'a> {
    /// Loans whose amortization is deducted this period, in stored order.
    pub applied: Vec<&'a Loan>,
    /// Loans that matched the period but share an application type with an
    /// earlier applied loan. Surfaced so the caller can decide what to do.
    pub superseded: Vec<&'a Loan>,
}

/// Checks whether a single loan's amortization falls due in a period.
///
/// A loan applies iff it is approved, its monthly schedule (when present)
/// equals the half implied by the period's representative date, and, for
/// government loans, the representative date falls inside the loan's
/// repayment window.
pub fn loan_applies(loan: &Loan, period: &PayPeriod) -> bool {
    if loan.status != LoanStatus::Approved {
        return false;
    }

    if let Some(schedule) = loan.monthly_schedule {
        if schedule != period.half() {
            return false;
        }
    }

    if loan.is_government() {
        let date = period.representative_date();
        if let Some(start) = loan.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = loan.end_date {
            if date > end {
                return false;
            }
        }
    }

    true
}

/// Matches a set of loans against a pay period.
///
/// The first matching loan per application type (by stored order) lands in
/// `applied`; further matches of the same type land in `superseded`.
/// Company loans carry no application type and are never deduplicated
/// against each other.
pub fn match_loans<'a>(loans: &'a [Loan], period: &PayPeriod) -> LoanMatchResult<'a> {
    let mut applied: Vec<&'a Loan> = Vec::new();
    let mut superseded: Vec<&'a Loan> = Vec::new();

    for loan in loans.iter().filter(|l| loan_applies(l, period)) {
        let duplicate_of_applied = loan.application_type.as_deref().is_some_and(|loan_type| {
            applied
                .iter()
                .any(|a| a.application_type.as_deref() == Some(loan_type))
        });

        if duplicate_of_applied {
            superseded.push(loan);
        } else {
            applied.push(loan);
        }
    }

    LoanMatchResult {
        applied,
        superseded,
    }
}
