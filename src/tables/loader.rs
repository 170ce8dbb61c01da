//! Contribution table loading functionality.
//!
//! This module provides the [`TableLoader`] type for loading versioned
//! contribution schedules from YAML files into a [`TableSnapshot`].

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::snapshot::TableSnapshot;
use super::types::{
    ContributionKind, ContributionTable, PagIbigRange, PhilHealthRange, RangeEntry, SssRange,
};

/// Loads contribution schedules from a configuration directory.
///
/// # Directory Structure
///
/// The configuration directory holds one file per scheme, each containing
/// every known version of that scheme's table:
/// ```text
/// config/tables/
/// ├── sss.yaml
/// ├── philhealth.yaml
/// └── pagibig.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::tables::TableLoader;
///
/// let snapshot = TableLoader::load("./config/tables").unwrap();
/// ```
pub struct TableLoader;

/// Raw file shape shared by the three schemes.
#[derive(Debug, Deserialize)]
struct TableFile<R> {
    tables: Vec<RawTable<R>>,
}

/// One versioned table before range entries are tagged with their scheme.
#[derive(Debug, Deserialize)]
struct RawTable<R> {
    effective_date: NaiveDate,
    is_active: bool,
    ranges: Vec<R>,
}

impl TableLoader {
    /// Loads every scheme's table versions from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/tables")
    ///
    /// # Returns
    ///
    /// Returns a validated [`TableSnapshot`] on success, or an error if:
    /// - Any scheme file is missing
    /// - Any file contains invalid YAML
    /// - Any table violates a structural invariant
    /// - Two versions of one scheme are both active
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<TableSnapshot> {
        let path = path.as_ref();
        let mut tables = Vec::new();

        let sss: TableFile<SssRange> = Self::load_yaml(&path.join("sss.yaml"))?;
        tables.extend(Self::tag_tables(sss, ContributionKind::Sss, RangeEntry::Sss));

        let phil_health: TableFile<PhilHealthRange> = Self::load_yaml(&path.join("philhealth.yaml"))?;
        tables.extend(Self::tag_tables(
            phil_health,
            ContributionKind::PhilHealth,
            RangeEntry::PhilHealth,
        ));

        let pag_ibig: TableFile<PagIbigRange> = Self::load_yaml(&path.join("pagibig.yaml"))?;
        tables.extend(Self::tag_tables(
            pag_ibig,
            ContributionKind::PagIbig,
            RangeEntry::PagIbig,
        ));

        TableSnapshot::new(tables)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::TableFileNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::TableParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Wraps a scheme file's raw ranges in the tagged range union.
    fn tag_tables<R>(
        file: TableFile<R>,
        kind: ContributionKind,
        tag: fn(R) -> RangeEntry,
    ) -> Vec<ContributionTable> {
        file.tables
            .into_iter()
            .map(|raw| ContributionTable {
                kind,
                effective_date: raw.effective_date,
                is_active: raw.is_active,
                ranges: raw.ranges.into_iter().map(tag).collect(),
            })
            .collect()
    }
}
