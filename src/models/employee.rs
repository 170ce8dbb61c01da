//! Employee profile model.
//!
//! The profile carries only what the engine needs: the day rate that gross
//! pay derives from and the per-scheme contribution bases stored on the
//! employee record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tables::ContributionKind;

/// Per-scheme contribution base amounts stored on the employee profile.
///
/// The system stores a fixed base per scheme rather than recomputing one
/// from the salary; the resolver buckets these bases into the active tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBases {
    /// Base compensation for the SSS bucket lookup.
    pub sss: Decimal,
    /// Basic salary the PhilHealth premium rate applies to.
    pub phil_health: Decimal,
    /// Base compensation for the Pag-IBIG bucket lookup.
    pub pag_ibig: Decimal,
}

impl ContributionBases {
    /// Returns the stored base for a scheme.
    pub fn for_kind(&self, kind: ContributionKind) -> Decimal {
        match kind {
            ContributionKind::Sss => self.sss,
            ContributionKind::PhilHealth => self.phil_health,
            ContributionKind::PagIbig => self.pag_ibig,
        }
    }
}

/// An employee as the engine sees one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// The daily rate for an 8-hour workday.
    pub day_rate: Decimal,
    /// The stored per-scheme contribution bases.
    pub contribution_bases: ContributionBases,
}

impl EmployeeProfile {
    /// Returns the effective hourly rate derived from the 8-hour day rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{ContributionBases, EmployeeProfile};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeProfile {
    ///     id: "emp_001".to_string(),
    ///     day_rate: Decimal::new(800, 0),
    ///     contribution_bases: ContributionBases {
    ///         sss: Decimal::new(15000, 0),
    ///         phil_health: Decimal::new(15000, 0),
    ///         pag_ibig: Decimal::new(15000, 0),
    ///     },
    /// };
    /// assert_eq!(employee.hourly_rate(), Decimal::new(100, 0));
    /// ```
    pub fn hourly_rate(&self) -> Decimal {
        self.day_rate / Decimal::new(8, 0)
    }
}
