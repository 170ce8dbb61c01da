//! Attendance record model and related types.
//!
//! An attendance record is created on clock-in and mutated once on
//! clock-out by the storage collaborator; the engine only reads it.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The recorded status of an attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee clocked in on time.
    Present,
    /// The employee clocked in at or after the workday start.
    Late,
    /// The employee did not clock in at all.
    Absent,
}

/// The kind of attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceType {
    /// An ordinary scheduled workday.
    Regular,
    /// A day worked outside the regular schedule.
    Special,
}

/// A single day's raw time punches for one employee.
///
/// Invariant (owned by the storage collaborator): `time_out`, when present,
/// is after `time_in`. The engine fails fast on a violation instead of
/// deriving negative hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date of the punches.
    pub date: NaiveDate,
    /// The clock-in instant.
    pub time_in: NaiveDateTime,
    /// The clock-out instant; `None` while the day is still open.
    pub time_out: Option<NaiveDateTime>,
    /// The recorded status of the day.
    pub status: AttendanceStatus,
    /// The kind of attendance day.
    #[serde(rename = "type")]
    pub record_type: AttendanceType,
}
