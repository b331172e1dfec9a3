//! Reporting-week date arithmetic
//!
//! The report always covers the ISO week of the invocation date: Monday is
//! offset 0, Friday is offset 4. Both the banner and the output writer derive
//! their dates from the same `ReportWeek` value.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// The Monday..Friday span of one reporting week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWeek {
    pub monday: NaiveDate,
    pub friday: NaiveDate,
}

impl ReportWeek {
    /// Week containing the given date. A Saturday or Sunday still maps to
    /// the Monday/Friday of its own ISO week.
    pub fn containing(date: NaiveDate) -> Self {
        let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        Self {
            monday,
            friday: monday + Duration::days(4),
        }
    }

    /// Week of the local current date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// Friday date as a `YYYYMMDD` stamp, used in output paths.
    pub fn friday_stamp(&self) -> String {
        self.friday.format("%Y%m%d").to_string()
    }

    /// Monday date in abbreviated `Mon DD` form, for the banner.
    pub fn monday_display(&self) -> String {
        self.monday.format("%b %d").to_string()
    }

    /// Friday date in abbreviated `Mon DD` form, for the banner.
    pub fn friday_display(&self) -> String {
        self.friday.format("%b %d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_wednesday_maps_to_same_week() {
        // 2026-08-26 is a Wednesday
        let week = ReportWeek::containing(date(2026, 8, 26));
        assert_eq!(week.monday, date(2026, 8, 24));
        assert_eq!(week.friday, date(2026, 8, 28));
    }

    #[test]
    fn test_monday_is_offset_zero() {
        let week = ReportWeek::containing(date(2026, 8, 24));
        assert_eq!(week.monday, date(2026, 8, 24));
        assert_eq!(week.friday, date(2026, 8, 28));
    }

    #[test]
    fn test_friday_maps_to_itself() {
        let week = ReportWeek::containing(date(2026, 8, 28));
        assert_eq!(week.friday, date(2026, 8, 28));
    }

    #[test]
    fn test_weekend_stays_in_its_own_week() {
        let week = ReportWeek::containing(date(2026, 8, 30)); // Sunday
        assert_eq!(week.monday, date(2026, 8, 24));
        assert_eq!(week.friday, date(2026, 8, 28));
    }

    #[test]
    fn test_friday_stamp_format() {
        let week = ReportWeek::containing(date(2026, 8, 26));
        assert_eq!(week.friday_stamp(), "20260828");
    }

    #[test]
    fn test_display_format() {
        let week = ReportWeek::containing(date(2026, 8, 26));
        assert_eq!(week.monday_display(), "Aug 24");
        assert_eq!(week.friday_display(), "Aug 28");
    }
}
