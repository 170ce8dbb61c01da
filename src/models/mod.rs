//! Domain models for the payroll derivation engine.
//!
//! This module contains the input records handed over by the record-management
//! collaborator (attendance, employee profile, loans) and the output contract
//! consumed by reporting (salary component).

mod attendance;
mod employee;
mod loan;
mod pay_period;
mod salary_component;

pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceType};
pub use employee::{ContributionBases, EmployeeProfile};
pub use loan::{Loan, LoanStatus};
pub use pay_period::{MonthHalf, PayPeriod};
pub use salary_component::{
    ComputationWarning, DeductionKind, DeductionLine, GovernmentContributions, PayrollComputation,
    SalaryComponent,
};
