//! Day-level time accounting.
//!
//! Converts one day's raw punches into worked hours, overtime hours, and
//! the late/under-time flags the attendance report shows. The rules carry
//! business-specific clamping and break behavior; see the individual
//! constants and [`tally_day`].

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;
use crate::rounding::round_hours;

/// Hour the regular workday starts; arriving earlier grants no extra credit.
pub const WORKDAY_START_HOUR: u32 = 8;

/// Hour the regular workday ends; anything past it is overtime territory.
pub const WORKDAY_END_HOUR: u32 = 17;

/// Unpaid break charged against a full day's attendance.
pub const BREAK_MINUTES: i64 = 60;

/// Hour of the break cutoff; a clock-out at or before 13:00 exactly skips
/// the break deduction, so half-day attendance before 1 PM is not charged.
pub const BREAK_CUTOFF_HOUR: u32 = 13;

/// The tallied figures for one attendance day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTally {
    /// Regular hours worked, clamped to the workday and rounded to one
    /// decimal place.
    pub hours_worked: Decimal,
    /// Whole overtime hours past the workday end.
    pub overtime_hours: Decimal,
    /// The day is flagged late for reporting purposes.
    pub is_late: bool,
    /// The employee clocked out before the workday end.
    pub is_under_time: bool,
    /// No clock-out yet; the day is pending, not absent.
    pub is_pending: bool,
}

impl DayTally {
    fn pending(is_late: bool) -> Self {
        Self {
            hours_worked: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            is_late,
            is_under_time: false,
            is_pending: true,
        }
    }
}

/// Tallies one attendance record into worked hours and flags.
///
/// Rules:
/// - No time-out: zero hours, pending.
/// - Late flag: clock-in hour at or after 08:00, independent of the hours
///   arithmetic.
/// - Regular hours: clock-in clamped to no earlier than 08:00 and clock-out
///   to no later than 17:00; a 60-minute break is charged only when the
///   unclamped clock-out is past 13:00 exactly; the result is floored at
///   zero and rounded half-up to one decimal place.
/// - Overtime: whole hours of the unclamped clock-out past 17; minutes past
///   the hour are not credited.
/// - Under-time flag: clock-out hour before 17.
///
/// # Errors
///
/// Returns [`EngineError::MalformedAttendance`] when the clock-out precedes
/// the clock-in; punch validation belongs to the storage collaborator and
/// the engine refuses to derive negative hours from a bad pair.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::tally_day;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus, AttendanceType};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     time_in: NaiveDateTime::parse_from_str("2025-03-10 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     time_out: Some(NaiveDateTime::parse_from_str("2025-03-10 18:15:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     status: AttendanceStatus::Present,
///     record_type: AttendanceType::Regular,
/// };
///
/// let tally = tally_day(&record).unwrap();
/// assert_eq!(tally.hours_worked, Decimal::new(80, 1));   // 8.0
/// assert_eq!(tally.overtime_hours, Decimal::new(10, 1)); // 1.0
/// ```
pub fn tally_day(record: &AttendanceRecord) -> EngineResult<DayTally> {
    let is_late = record.time_in.hour() >= WORKDAY_START_HOUR;

    let Some(time_out) = record.time_out else {
        return Ok(DayTally::pending(is_late));
    };

    if time_out < record.time_in {
        return Err(EngineError::MalformedAttendance {
            employee_id: record.employee_id.clone(),
            date: record.date,
            message: format!(
                "time-out {} precedes time-in {}",
                time_out.time(),
                record.time_in.time()
            ),
        });
    }

    let workday_start = record
        .date
        .and_time(NaiveTime::from_hms_opt(WORKDAY_START_HOUR, 0, 0).expect("valid time"));
    let workday_end = record
        .date
        .and_time(NaiveTime::from_hms_opt(WORKDAY_END_HOUR, 0, 0).expect("valid time"));

    let clamped_in = clamp_min(record.time_in, workday_start);
    let clamped_out = clamp_max(time_out, workday_end);

    let break_cutoff = record
        .date
        .and_time(NaiveTime::from_hms_opt(BREAK_CUTOFF_HOUR, 0, 0).expect("valid time"));

    let total_minutes = (clamped_out - clamped_in).num_minutes();
    let break_minutes = if time_out > break_cutoff {
        BREAK_MINUTES
    } else {
        0
    };

    let worked_minutes = (total_minutes - break_minutes).max(0);
    let hours_worked = round_hours(Decimal::from(worked_minutes) / Decimal::from(60));

    let overtime_hours =
        Decimal::from(i64::from(time_out.hour()).saturating_sub(i64::from(WORKDAY_END_HOUR)).max(0));

    Ok(DayTally {
        hours_worked,
        overtime_hours: round_hours(overtime_hours),
        is_late,
        is_under_time: time_out.hour() < WORKDAY_END_HOUR,
        is_pending: false,
    })
}

fn clamp_min(value: NaiveDateTime, min: NaiveDateTime) -> NaiveDateTime {
    if value < min { min } else { value }
}

fn clamp_max(value: NaiveDateTime, max: NaiveDateTime) -> NaiveDateTime {
    if value > max { max } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, AttendanceType};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_record(time_in: &str, time_out: Option<&str>) -> AttendanceRecord {
        let date = "2025-03-10";
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time_in: NaiveDateTime::parse_from_str(
                &format!("{} {}", date, time_in),
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            time_out: time_out.map(|t| {
                NaiveDateTime::parse_from_str(&format!("{} {}", date, t), "%Y-%m-%d %H:%M:%S")
                    .unwrap()
            }),
            status: AttendanceStatus::Present,
            record_type: AttendanceType::Regular,
        }
    }

    /// TA-001: full day 08:00-17:00
    #[test]
    fn test_full_day() {
        let tally = tally_day(&make_record("08:00:00", Some("17:00:00"))).unwrap();
        // 540 minutes minus the 60-minute break
        assert_eq!(tally.hours_worked, dec("8.0"));
        assert_eq!(tally.overtime_hours, dec("0"));
        assert!(!tally.is_under_time);
        assert!(!tally.is_pending);
    }

    /// TA-002: no time-out yields a pending zero-hour day
    #[test]
    fn test_missing_time_out_is_pending() {
        let tally = tally_day(&make_record("08:05:00", None)).unwrap();
        assert_eq!(tally.hours_worked, dec("0"));
        assert_eq!(tally.overtime_hours, dec("0"));
        assert!(tally.is_pending);
    }

    /// TA-003: clock-in at 08:00 exactly is flagged late
    #[test]
    fn test_eight_oclock_is_late() {
        let tally = tally_day(&make_record("08:00:00", Some("17:00:00"))).unwrap();
        assert!(tally.is_late);
    }

    /// TA-004: clock-in before 08:00 is not late and grants no extra credit
    #[test]
    fn test_early_clock_in_grants_no_credit() {
        let tally = tally_day(&make_record("07:00:00", Some("17:00:00"))).unwrap();
        assert!(!tally.is_late);
        assert_eq!(tally.hours_worked, dec("8.0"));
    }

    /// TA-005: clock-out at exactly 13:00 skips the break
    #[test]
    fn test_one_pm_exactly_skips_break() {
        let tally = tally_day(&make_record("08:00:00", Some("13:00:00"))).unwrap();
        // 300 minutes, no break charged
        assert_eq!(tally.hours_worked, dec("5.0"));
    }

    /// TA-006: clock-out at 13:01 is charged the break; 13:00 itself is the cutoff
    #[test]
    fn test_one_oh_one_pm_charges_break() {
        let tally = tally_day(&make_record("08:00:00", Some("13:01:00"))).unwrap();
        // 301 minutes minus 60 = 241/60 = 4.0166.. -> 4.0
        assert_eq!(tally.hours_worked, dec("4.0"));
    }

    /// TA-007: clock-out at 14:00 charges the break
    #[test]
    fn test_two_pm_charges_break() {
        let tally = tally_day(&make_record("08:00:00", Some("14:00:00"))).unwrap();
        // 360 minutes minus 60
        assert_eq!(tally.hours_worked, dec("5.0"));
    }

    /// TA-008: 07:00-17:30 clamps both ends, overtime truncates to whole hours
    #[test]
    fn test_clamping_both_ends() {
        let tally = tally_day(&make_record("07:00:00", Some("17:30:00"))).unwrap();
        // Computed as 08:00-17:00 minus break; 17 is not past 17, no overtime.
        assert_eq!(tally.hours_worked, dec("8.0"));
        assert_eq!(tally.overtime_hours, dec("0"));
        assert!(!tally.is_under_time);
    }

    /// TA-009: 08:00-18:15 yields 8.0 regular hours and exactly 1 overtime hour
    #[test]
    fn test_overtime_whole_hours_only() {
        let tally = tally_day(&make_record("08:00:00", Some("18:15:00"))).unwrap();
        assert_eq!(tally.hours_worked, dec("8.0"));
        assert_eq!(tally.overtime_hours, dec("1.0"));
    }

    /// TA-010: under-time flag for a 16:00 clock-out
    #[test]
    fn test_under_time_flag() {
        let tally = tally_day(&make_record("08:00:00", Some("16:00:00"))).unwrap();
        assert!(tally.is_under_time);
        // 480 minutes minus 60
        assert_eq!(tally.hours_worked, dec("7.0"));
    }

    /// TA-011: late half-day clock-in keeps partial hours
    #[test]
    fn test_late_partial_day() {
        let tally = tally_day(&make_record("09:30:00", Some("12:30:00"))).unwrap();
        assert!(tally.is_late);
        assert_eq!(tally.hours_worked, dec("3.0"));
        assert!(tally.is_under_time);
    }

    /// TA-012: minutes round half-up to one decimal place
    #[test]
    fn test_minutes_round_half_up() {
        // 08:00-16:33 = 513 minutes - 60 break = 453/60 = 7.55 -> 7.6
        let tally = tally_day(&make_record("08:00:00", Some("16:33:00"))).unwrap();
        assert_eq!(tally.hours_worked, dec("7.6"));
    }

    /// TA-013: time-out before time-in fails fast
    #[test]
    fn test_time_out_before_time_in_fails_fast() {
        let mut record = make_record("09:00:00", Some("08:00:00"));
        record.employee_id = "emp_009".to_string();

        match tally_day(&record) {
            Err(EngineError::MalformedAttendance { employee_id, .. }) => {
                assert_eq!(employee_id, "emp_009");
            }
            other => panic!("Expected MalformedAttendance, got {:?}", other),
        }
    }

    /// TA-014: arriving after the workday end yields zero hours, not negative
    #[test]
    fn test_arrival_after_workday_end_floors_at_zero() {
        let tally = tally_day(&make_record("18:00:00", Some("19:00:00"))).unwrap();
        assert_eq!(tally.hours_worked, dec("0"));
        assert_eq!(tally.overtime_hours, dec("2"));
    }

    proptest! {
        /// Hours and overtime are never negative for any valid punch pair.
        #[test]
        fn prop_tallies_are_non_negative(
            in_minutes in 0i64..1440,
            extra_minutes in 0i64..720,
        ) {
            let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
            let time_in = date.and_hms_opt(0, 0, 0).unwrap() + chrono::Duration::minutes(in_minutes);
            let time_out = time_in + chrono::Duration::minutes(extra_minutes);
            // Keep the punch pair on one calendar day.
            prop_assume!(time_out.date() == date);

            let record = AttendanceRecord {
                employee_id: "emp_prop".to_string(),
                date,
                time_in,
                time_out: Some(time_out),
                status: AttendanceStatus::Present,
                record_type: AttendanceType::Regular,
            };

            let tally = tally_day(&record).unwrap();
            prop_assert!(tally.hours_worked >= Decimal::ZERO);
            prop_assert!(tally.overtime_hours >= Decimal::ZERO);
        }
    }
}
