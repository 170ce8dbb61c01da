//! Calculation logic for the payroll derivation engine.
//!
//! This module contains the deterministic rules that turn raw punches,
//! contribution tables, and loans into a payslip: day-level time accounting,
//! statutory contribution resolution, loan-to-period schedule matching, and
//! the payroll aggregation that composes them.

mod contribution;
mod payroll;
mod period_matching;
mod time_accounting;

pub use contribution::{
    ContributionShares, SssEmployerStrategy, resolve_pag_ibig, resolve_phil_health, resolve_sss,
};
pub use payroll::{
    OtherDeduction, PayrollInputs, WARN_MISSING_ACTIVE_TABLE, WARN_MULTIPLE_ACTIVE_LOANS,
    compute_salary_component,
};
pub use period_matching::{LoanMatchResult, loan_applies, match_loans};
pub use time_accounting::{
    BREAK_CUTOFF_HOUR, BREAK_MINUTES, DayTally, WORKDAY_END_HOUR, WORKDAY_START_HOUR, tally_day,
};
