//! Immutable snapshot of the contribution tables.
//!
//! The resolver never fetches tables ad hoc; it receives a [`TableSnapshot`]
//! taken at call time, so a payroll computation is a pure function of a
//! consistent set of inputs.

use crate::error::{EngineError, EngineResult};

use super::types::{ContributionKind, ContributionTable};

/// An immutable, validated set of contribution tables.
///
/// Holds every known version of every scheme's table; at most one table
/// per scheme may be active. Taking a snapshot before a payroll run gives
/// the engine the consistent read it requires without any backing store.
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    tables: Vec<ContributionTable>,
}

impl TableSnapshot {
    /// Creates a snapshot from a set of tables.
    ///
    /// Validates every table and rejects the set if two tables of one
    /// scheme are both active. Versions are kept sorted by effective date,
    /// oldest first.
    pub fn new(tables: Vec<ContributionTable>) -> EngineResult<Self> {
        for table in &tables {
            table.validate()?;
        }

        for kind in [
            ContributionKind::Sss,
            ContributionKind::PhilHealth,
            ContributionKind::PagIbig,
        ] {
            let active = tables.iter().filter(|t| t.kind == kind && t.is_active).count();
            if active > 1 {
                return Err(EngineError::DuplicateActiveTable { kind });
            }
        }

        let mut sorted = tables;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Ok(Self { tables: sorted })
    }

    /// Creates a snapshot with no tables at all.
    ///
    /// Every `active` lookup on it signals [`EngineError::MissingActiveTable`];
    /// useful for exercising the engine's degrade-to-zero path.
    pub fn empty() -> Self {
        Self { tables: Vec::new() }
    }

    /// Returns the active table for a scheme.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingActiveTable`] when no version of the
    /// scheme's table is active; the caller defaults the contribution to
    /// zero rather than failing the payroll run.
    pub fn active(&self, kind: ContributionKind) -> EngineResult<&ContributionTable> {
        self.tables
            .iter()
            .find(|t| t.kind == kind && t.is_active)
            .ok_or(EngineError::MissingActiveTable { kind })
    }

    /// Returns every table version in the snapshot, oldest first.
    pub fn tables(&self) -> &[ContributionTable] {
        &self.tables
    }
}
