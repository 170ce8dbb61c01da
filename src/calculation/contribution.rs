//! Statutory contribution resolution.
//!
//! Buckets an employee's stored contribution base into the active table for
//! each scheme and returns the tiered employee/employer shares. The resolver
//! is a pure lookup over a [`TableSnapshot`]; it owns no table state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::rounding::round_currency;
use crate::tables::{ContributionKind, RangeEntry, TableSnapshot};

/// The resolved shares for one scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionShares {
    /// Amount withheld from the employee.
    pub employee_share: Decimal,
    /// Amount the employer remits on top.
    pub employer_share: Decimal,
    /// Employees' compensation premium (employer-paid, SSS only).
    pub ec_share: Decimal,
}

/// How the SSS employer share is derived.
///
/// The source system computes it two ways in different reporting views.
/// Both are kept as named strategies; the bundled tables reconcile the two
/// at every breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SssEmployerStrategy {
    /// Read the employer share straight off the selected range. The
    /// authoritative path.
    #[default]
    TableDriven,
    /// Derive the employer share as `round(employee_share x 2.11111, 2)`
    /// with a flat EC of 30 when the employee share reaches 675, else 10.
    ClosedForm,
}

/// Employee-share threshold at which the closed-form EC premium steps up.
const CLOSED_FORM_EC_STEP: Decimal = Decimal::from_parts(675, 0, 0, false, 0);

/// Resolves the SSS shares for a contribution base.
///
/// Selects the first range whose `[lower, upper)` interval contains the
/// base (clamping to the boundary ranges when the base falls outside the
/// table) and derives the employer share per the requested strategy.
///
/// # Errors
///
/// Returns [`EngineError::MissingActiveTable`] when no SSS table is active;
/// the caller defaults the contribution to zero.
pub fn resolve_sss(
    base: Decimal,
    snapshot: &TableSnapshot,
    strategy: SssEmployerStrategy,
) -> EngineResult<ContributionShares> {
    let table = snapshot.active(ContributionKind::Sss)?;
    let entry = table
        .range_for(base)
        .ok_or(EngineError::MissingActiveTable {
            kind: ContributionKind::Sss,
        })?;

    let RangeEntry::Sss(range) = entry else {
        return Err(EngineError::InvalidTable {
            kind: ContributionKind::Sss,
            message: "active SSS table contains a non-SSS range".to_string(),
        });
    };

    let employee_share = round_currency(range.total_ee);
    let (employer_share, ec_share) = match strategy {
        SssEmployerStrategy::TableDriven => (
            round_currency(range.regular_ss_er + range.wisp_er),
            round_currency(range.ec_er),
        ),
        SssEmployerStrategy::ClosedForm => {
            let multiplier = Decimal::new(211111, 5);
            let ec = if employee_share >= CLOSED_FORM_EC_STEP {
                Decimal::new(30, 0)
            } else {
                Decimal::new(10, 0)
            };
            (round_currency(employee_share * multiplier), ec)
        }
    };

    Ok(ContributionShares {
        employee_share,
        employer_share,
        ec_share,
    })
}

/// Resolves the PhilHealth shares for a basic salary.
///
/// The premium is `basic_salary x premium_rate` from the selected range,
/// split 50/50 between employee and employer.
///
/// # Errors
///
/// Returns [`EngineError::MissingActiveTable`] when no PhilHealth table is
/// active.
pub fn resolve_phil_health(
    basic_salary: Decimal,
    snapshot: &TableSnapshot,
) -> EngineResult<ContributionShares> {
    let table = snapshot.active(ContributionKind::PhilHealth)?;
    let entry = table
        .range_for(basic_salary)
        .ok_or(EngineError::MissingActiveTable {
            kind: ContributionKind::PhilHealth,
        })?;

    let RangeEntry::PhilHealth(range) = entry else {
        return Err(EngineError::InvalidTable {
            kind: ContributionKind::PhilHealth,
            message: "active PhilHealth table contains a non-PhilHealth range".to_string(),
        });
    };

    let premium = basic_salary * range.premium_rate;
    let half = round_currency(premium / Decimal::new(2, 0));

    Ok(ContributionShares {
        employee_share: half,
        employer_share: half,
        ec_share: Decimal::ZERO,
    })
}

/// Resolves the Pag-IBIG shares for a contribution base.
///
/// The selected range's rates apply to the base capped at the range's
/// `max_limit` (the fund salary cap) when one is present.
///
/// # Errors
///
/// Returns [`EngineError::MissingActiveTable`] when no Pag-IBIG table is
/// active.
pub fn resolve_pag_ibig(base: Decimal, snapshot: &TableSnapshot) -> EngineResult<ContributionShares> {
    let table = snapshot.active(ContributionKind::PagIbig)?;
    let entry = table
        .range_for(base)
        .ok_or(EngineError::MissingActiveTable {
            kind: ContributionKind::PagIbig,
        })?;

    let RangeEntry::PagIbig(range) = entry else {
        return Err(EngineError::InvalidTable {
            kind: ContributionKind::PagIbig,
            message: "active Pag-IBIG table contains a non-Pag-IBIG range".to_string(),
        });
    };

    let capped = match range.max_limit {
        Some(limit) if base > limit => limit,
        _ => base,
    };

    Ok(ContributionShares {
        employee_share: round_currency(capped * range.employee_rate),
        employer_share: round_currency(capped * range.employer_rate),
        ec_share: Decimal::ZERO,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TableLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn snapshot() -> TableSnapshot {
        TableLoader::load("./config/tables").unwrap()
    }

    /// CR-001: SSS base on a range's lower bound selects that range
    #[test]
    fn test_sss_lower_bound_selects_own_range() {
        let shares =
            resolve_sss(dec("4250"), &snapshot(), SssEmployerStrategy::TableDriven).unwrap();
        // 4,250 belongs to the 4,500-credit bucket, not the 4,000 one.
        assert_eq!(shares.employee_share, dec("202.50"));
        assert_eq!(shares.employer_share, dec("427.50"));
        assert_eq!(shares.ec_share, dec("10.00"));
    }

    /// CR-002: SSS mid-range lookup
    #[test]
    fn test_sss_mid_range_lookup() {
        let shares =
            resolve_sss(dec("15000"), &snapshot(), SssEmployerStrategy::TableDriven).unwrap();
        assert_eq!(shares.employee_share, dec("675.00"));
        assert_eq!(shares.employer_share, dec("1425.00"));
        assert_eq!(shares.ec_share, dec("30.00"));
    }

    /// CR-003: base above every bound clamps to the unbounded bucket
    #[test]
    fn test_sss_clamps_above_table() {
        let shares =
            resolve_sss(dec("95000"), &snapshot(), SssEmployerStrategy::TableDriven).unwrap();
        assert_eq!(shares.employee_share, dec("922.50"));
        assert_eq!(shares.employer_share, dec("1947.50"));
    }

    /// CR-004: the closed-form strategy reconciles with the table at every breakpoint
    #[test]
    fn test_sss_strategies_agree_at_breakpoints() {
        let snapshot = snapshot();
        for base in ["0", "4250", "4750", "5250", "14750", "15250", "19750", "20250"] {
            let table_driven =
                resolve_sss(dec(base), &snapshot, SssEmployerStrategy::TableDriven).unwrap();
            let closed_form =
                resolve_sss(dec(base), &snapshot, SssEmployerStrategy::ClosedForm).unwrap();

            assert_eq!(
                table_driven.employer_share, closed_form.employer_share,
                "employer shares diverge at base {}",
                base
            );
            assert_eq!(
                table_driven.ec_share, closed_form.ec_share,
                "EC shares diverge at base {}",
                base
            );
        }
    }

    /// CR-005: closed-form EC steps from 10 to 30 at an employee share of 675
    #[test]
    fn test_closed_form_ec_step() {
        let snapshot = snapshot();
        let below = resolve_sss(dec("10000"), &snapshot, SssEmployerStrategy::ClosedForm).unwrap();
        assert_eq!(below.ec_share, dec("10"));

        let at = resolve_sss(dec("15000"), &snapshot, SssEmployerStrategy::ClosedForm).unwrap();
        assert_eq!(at.ec_share, dec("30"));
    }

    /// CR-006: PhilHealth premium splits 50/50
    #[test]
    fn test_phil_health_splits_premium() {
        let shares = resolve_phil_health(dec("18000"), &snapshot()).unwrap();
        // 18,000 x 5% = 900, half each side
        assert_eq!(shares.employee_share, dec("450.00"));
        assert_eq!(shares.employer_share, dec("450.00"));
        assert_eq!(shares.ec_share, dec("0"));
    }

    /// CR-007: Pag-IBIG caps the base at the fund salary cap
    #[test]
    fn test_pag_ibig_caps_base() {
        let shares = resolve_pag_ibig(dec("15000"), &snapshot()).unwrap();
        // min(15000, 5000) x 2% = 100
        assert_eq!(shares.employee_share, dec("100.00"));
        assert_eq!(shares.employer_share, dec("100.00"));
    }

    /// CR-008: Pag-IBIG low bucket uses the 1% employee rate
    #[test]
    fn test_pag_ibig_low_bucket_rate() {
        let shares = resolve_pag_ibig(dec("1200"), &snapshot()).unwrap();
        assert_eq!(shares.employee_share, dec("12.00"));
        assert_eq!(shares.employer_share, dec("24.00"));
    }

    /// CR-009: every resolver signals a missing active table
    #[test]
    fn test_missing_active_table_is_signaled() {
        let empty = TableSnapshot::empty();

        assert!(matches!(
            resolve_sss(dec("15000"), &empty, SssEmployerStrategy::TableDriven),
            Err(EngineError::MissingActiveTable {
                kind: ContributionKind::Sss
            })
        ));
        assert!(matches!(
            resolve_phil_health(dec("15000"), &empty),
            Err(EngineError::MissingActiveTable {
                kind: ContributionKind::PhilHealth
            })
        ));
        assert!(matches!(
            resolve_pag_ibig(dec("15000"), &empty),
            Err(EngineError::MissingActiveTable {
                kind: ContributionKind::PagIbig
            })
        ));
    }
}
