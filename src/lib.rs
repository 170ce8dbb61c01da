//! Payroll Derivation Engine for half-month Philippine payroll runs.
//!
//! This crate turns raw attendance punches, versioned government contribution
//! tables (SSS, PhilHealth, Pag-IBIG) and outstanding loan amortizations into
//! a per-employee, per-pay-period net-pay breakdown.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod rounding;
pub mod tables;
