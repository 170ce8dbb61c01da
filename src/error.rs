//! Error types for the payroll derivation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll derivation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::tables::ContributionKind;

/// The main error type for the payroll derivation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use payroll_engine::tables::ContributionKind;
///
/// let error = EngineError::MissingActiveTable {
///     kind: ContributionKind::Sss,
/// };
/// assert_eq!(error.to_string(), "No active contribution table for SSS");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No contribution table of the requested kind is currently active.
    ///
    /// Callers recover by defaulting the contribution to zero; the condition
    /// must remain visible in logs and computation warnings.
    #[error("No active contribution table for {kind}")]
    MissingActiveTable {
        /// The contribution scheme with no active table.
        kind: ContributionKind,
    },

    /// An attendance record violated the engine's preconditions.
    ///
    /// The storage collaborator owns validation; the engine fails fast
    /// rather than deriving negative hours from a bad punch pair.
    #[error("Malformed attendance for employee '{employee_id}' on {date}: {message}")]
    MalformedAttendance {
        /// The employee the record belongs to.
        employee_id: String,
        /// The calendar date of the record.
        date: NaiveDate,
        /// A description of the precondition violation.
        message: String,
    },

    /// A contribution table configuration file was not found.
    #[error("Contribution table file not found: {path}")]
    TableFileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A contribution table configuration file could not be parsed.
    #[error("Failed to parse contribution table file '{path}': {message}")]
    TableParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A contribution table violated a structural invariant.
    #[error("Invalid {kind} contribution table: {message}")]
    InvalidTable {
        /// The contribution scheme of the offending table.
        kind: ContributionKind,
        /// A description of the violated invariant.
        message: String,
    },

    /// More than one table of a single kind was marked active.
    #[error("Multiple active contribution tables for {kind}")]
    DuplicateActiveTable {
        /// The contribution scheme with duplicate active tables.
        kind: ContributionKind,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_active_table_displays_kind() {
        let error = EngineError::MissingActiveTable {
            kind: ContributionKind::PagIbig,
        };
        assert_eq!(error.to_string(), "No active contribution table for Pag-IBIG");
    }

    #[test]
    fn test_malformed_attendance_displays_employee_and_date() {
        let error = EngineError::MalformedAttendance {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            message: "time-out before time-in".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed attendance for employee 'emp_001' on 2025-03-10: time-out before time-in"
        );
    }

    #[test]
    fn test_table_file_not_found_displays_path() {
        let error = EngineError::TableFileNotFound {
            path: "/missing/sss.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Contribution table file not found: /missing/sss.yaml"
        );
    }

    #[test]
    fn test_table_parse_error_displays_path_and_message() {
        let error = EngineError::TableParseError {
            path: "/config/tables/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse contribution table file '/config/tables/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_table_displays_kind_and_message() {
        let error = EngineError::InvalidTable {
            kind: ContributionKind::Sss,
            message: "ranges are not contiguous".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid SSS contribution table: ranges are not contiguous"
        );
    }

    #[test]
    fn test_duplicate_active_table_displays_kind() {
        let error = EngineError::DuplicateActiveTable {
            kind: ContributionKind::PhilHealth,
        };
        assert_eq!(
            error.to_string(),
            "Multiple active contribution tables for PhilHealth"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_table() -> EngineResult<()> {
            Err(EngineError::MissingActiveTable {
                kind: ContributionKind::Sss,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_table()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
