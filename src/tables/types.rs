//! Contribution table types for statutory deductions.
//!
//! This module contains the strongly-typed contribution schedules for the
//! three government schemes (SSS, PhilHealth, Pag-IBIG). A table is a
//! versioned, salary-bucketed set of ranges; range shapes differ per scheme
//! and are modeled as a tagged union dispatched by the table's kind.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The government contribution scheme a table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionKind {
    /// Social Security System.
    Sss,
    /// Philippine Health Insurance Corporation.
    PhilHealth,
    /// Home Development Mutual Fund (Pag-IBIG).
    PagIbig,
}

impl fmt::Display for ContributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContributionKind::Sss => write!(f, "SSS"),
            ContributionKind::PhilHealth => write!(f, "PhilHealth"),
            ContributionKind::PagIbig => write!(f, "Pag-IBIG"),
        }
    }
}

/// A salary bucket in an SSS contribution schedule.
///
/// Every share is read directly from the schedule; no formula is applied
/// on the table-driven path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SssRange {
    /// Inclusive lower bound of the compensation bucket.
    pub range_start: Decimal,
    /// Exclusive upper bound of the compensation bucket; `None` marks the
    /// final, unbounded bucket.
    pub range_end: Option<Decimal>,
    /// The monthly salary credit assigned to this bucket.
    pub monthly_salary_credit: Decimal,
    /// Regular social security, employee share.
    pub regular_ss_ee: Decimal,
    /// Regular social security, employer share.
    pub regular_ss_er: Decimal,
    /// Employees' compensation, employee share (zero under current law).
    pub ec_ee: Decimal,
    /// Employees' compensation, employer share.
    pub ec_er: Decimal,
    /// Workers' investment and savings program, employee share.
    pub wisp_ee: Decimal,
    /// Workers' investment and savings program, employer share.
    pub wisp_er: Decimal,
    /// Total employee share for the bucket.
    pub total_ee: Decimal,
    /// Total employer share for the bucket.
    pub total_er: Decimal,
}

/// A salary bucket in a PhilHealth premium schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilHealthRange {
    /// Inclusive lower bound of the basic-salary bucket.
    pub range_start: Decimal,
    /// Exclusive upper bound of the basic-salary bucket; `None` marks the
    /// final, unbounded bucket.
    pub range_end: Option<Decimal>,
    /// Premium rate applied to the basic salary, split 50/50.
    pub premium_rate: Decimal,
}

/// A salary bucket in a Pag-IBIG contribution schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagIbigRange {
    /// Human-readable description of the bucket (kept in sync with the
    /// bounds by [`ContributionTable::link_pag_ibig_boundary`]).
    pub description: String,
    /// Inclusive lower bound of the compensation bucket.
    pub range_start: Decimal,
    /// Exclusive upper bound of the compensation bucket; `None` marks the
    /// final, unbounded bucket.
    pub range_end: Option<Decimal>,
    /// Employee contribution rate.
    pub employee_rate: Decimal,
    /// Employer contribution rate.
    pub employer_rate: Decimal,
    /// Cap on the compensation the rates apply to, when present.
    pub max_limit: Option<Decimal>,
}

/// A single range entry, tagged by scheme.
///
/// The three schemes carry structurally different per-range fields, so the
/// entry is a tagged union rather than one struct with optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum RangeEntry {
    /// An SSS salary bucket.
    Sss(SssRange),
    /// A PhilHealth salary bucket.
    PhilHealth(PhilHealthRange),
    /// A Pag-IBIG salary bucket.
    PagIbig(PagIbigRange),
}

impl RangeEntry {
    /// Returns the scheme this entry belongs to.
    pub fn kind(&self) -> ContributionKind {
        match self {
            RangeEntry::Sss(_) => ContributionKind::Sss,
            RangeEntry::PhilHealth(_) => ContributionKind::PhilHealth,
            RangeEntry::PagIbig(_) => ContributionKind::PagIbig,
        }
    }

    /// Returns the inclusive lower bound of the entry.
    pub fn range_start(&self) -> Decimal {
        match self {
            RangeEntry::Sss(r) => r.range_start,
            RangeEntry::PhilHealth(r) => r.range_start,
            RangeEntry::PagIbig(r) => r.range_start,
        }
    }

    /// Returns the exclusive upper bound of the entry, `None` when unbounded.
    pub fn range_end(&self) -> Option<Decimal> {
        match self {
            RangeEntry::Sss(r) => r.range_end,
            RangeEntry::PhilHealth(r) => r.range_end,
            RangeEntry::PagIbig(r) => r.range_end,
        }
    }

    /// Checks whether a base amount falls inside this entry's
    /// half-open `[lower, upper)` interval.
    pub fn contains(&self, base: Decimal) -> bool {
        base >= self.range_start()
            && match self.range_end() {
                Some(end) => base < end,
                None => true,
            }
    }
}

/// A versioned contribution schedule for one scheme.
///
/// Tables are versioned by effective date and never physically deleted;
/// at most one table per scheme is active at a time (enforced by
/// [`crate::tables::TableSnapshot`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionTable {
    /// The scheme this table belongs to.
    pub kind: ContributionKind,
    /// The date this version takes effect.
    pub effective_date: NaiveDate,
    /// Whether this version is the currently active one.
    pub is_active: bool,
    /// The ordered, contiguous salary buckets.
    pub ranges: Vec<RangeEntry>,
}

impl ContributionTable {
    /// Validates the structural invariants of the table.
    ///
    /// A valid table is non-empty, homogeneous in scheme, starts at zero,
    /// has contiguous monotonically increasing `[lower, upper)` buckets,
    /// and ends with an unbounded bucket.
    pub fn validate(&self) -> EngineResult<()> {
        if self.ranges.is_empty() {
            return Err(EngineError::InvalidTable {
                kind: self.kind,
                message: "table has no ranges".to_string(),
            });
        }

        for entry in &self.ranges {
            if entry.kind() != self.kind {
                return Err(EngineError::InvalidTable {
                    kind: self.kind,
                    message: format!("range entry has scheme {}", entry.kind()),
                });
            }
        }

        let first = &self.ranges[0];
        if first.range_start() != Decimal::ZERO {
            return Err(EngineError::InvalidTable {
                kind: self.kind,
                message: format!("first range starts at {}, expected 0", first.range_start()),
            });
        }

        for (i, window) in self.ranges.windows(2).enumerate() {
            let (current, next) = (&window[0], &window[1]);
            match current.range_end() {
                Some(end) if end <= current.range_start() => {
                    return Err(EngineError::InvalidTable {
                        kind: self.kind,
                        message: format!("range {} has upper bound {} <= lower bound {}",
                            i, end, current.range_start()),
                    });
                }
                Some(end) if end != next.range_start() => {
                    return Err(EngineError::InvalidTable {
                        kind: self.kind,
                        message: format!(
                            "range {} ends at {} but range {} starts at {}",
                            i,
                            end,
                            i + 1,
                            next.range_start()
                        ),
                    });
                }
                Some(_) => {}
                None => {
                    return Err(EngineError::InvalidTable {
                        kind: self.kind,
                        message: format!("range {} is unbounded but is not the last range", i),
                    });
                }
            }
        }

        if self.ranges.last().map(|r| r.range_end()) != Some(None) {
            return Err(EngineError::InvalidTable {
                kind: self.kind,
                message: "final range must be unbounded".to_string(),
            });
        }

        Ok(())
    }

    /// Selects the range containing a base amount.
    ///
    /// The first range whose half-open `[lower, upper)` interval contains
    /// the amount wins; a base below the first bound clamps to the first
    /// range and a base above every bound clamps to the last. A validated
    /// table therefore always yields a range.
    pub fn range_for(&self, base: Decimal) -> Option<&RangeEntry> {
        if let Some(entry) = self.ranges.iter().find(|r| r.contains(base)) {
            return Some(entry);
        }
        if let Some(first) = self.ranges.first() {
            if base < first.range_start() {
                return Some(first);
            }
        }
        self.ranges.last()
    }

    /// Moves the boundary between a Pag-IBIG range and its successor.
    ///
    /// The two ranges share the boundary, so editing one side must update
    /// the other side and both descriptions in the same operation to keep
    /// the table contiguous.
    pub fn link_pag_ibig_boundary(&mut self, index: usize, boundary: Decimal) -> EngineResult<()> {
        if self.kind != ContributionKind::PagIbig {
            return Err(EngineError::InvalidTable {
                kind: self.kind,
                message: "linked boundary edits apply to Pag-IBIG tables only".to_string(),
            });
        }
        if index + 1 >= self.ranges.len() {
            return Err(EngineError::InvalidTable {
                kind: self.kind,
                message: format!("range {} has no successor to link", index),
            });
        }
        if boundary <= self.ranges[index].range_start() {
            return Err(EngineError::InvalidTable {
                kind: self.kind,
                message: format!(
                    "boundary {} must exceed the lower bound {}",
                    boundary,
                    self.ranges[index].range_start()
                ),
            });
        }
        if let Some(next_end) = self.ranges[index + 1].range_end() {
            if boundary >= next_end {
                return Err(EngineError::InvalidTable {
                    kind: self.kind,
                    message: format!(
                        "boundary {} must stay below the successor's upper bound {}",
                        boundary, next_end
                    ),
                });
            }
        }

        if let RangeEntry::PagIbig(range) = &mut self.ranges[index] {
            range.range_end = Some(boundary);
            range.description = format!("Below {}", boundary);
        }
        if let RangeEntry::PagIbig(range) = &mut self.ranges[index + 1] {
            range.range_start = boundary;
            range.description = format!("{} and over", boundary);
        }

        Ok(())
    }
}
