//! Versioned exemption calendar keyed by year.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A calendar of toll-free dates.
///
/// Saturdays and Sundays are always toll-free. Beyond that, the calendar
/// holds per-year sets of exempt `(month, day)` dates and fully exempt
/// months. Years with no configured entries fall back to the weekend rule
/// alone; the calendar never guesses holidays for unconfigured years.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_tolling::calendar::TollCalendar;
///
/// let cal = TollCalendar::gothenburg_2013();
///
/// // New Year's Day and any July date are exempt
/// assert!(cal.is_toll_free(NaiveDate::from_ymd_opt(2013, 1, 1).unwrap()));
/// assert!(cal.is_toll_free(NaiveDate::from_ymd_opt(2013, 7, 17).unwrap()));
///
/// // An ordinary Monday is not
/// assert!(!cal.is_toll_free(NaiveDate::from_ymd_opt(2013, 1, 14).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollCalendar {
    exempt_dates: BTreeMap<i32, BTreeSet<(u32, u32)>>,
    exempt_months: BTreeMap<i32, BTreeSet<u32>>,
}

impl TollCalendar {
    /// Creates a calendar with no configured exemptions (weekends only).
    pub fn new() -> Self {
        Self::default()
    }

    /// The Gothenburg 2013 exemption table.
    ///
    /// Holidays and holiday eves for 2013, plus the whole of July.
    pub fn gothenburg_2013() -> Self {
        let mut cal = Self::new();
        for (month, day) in [
            (1, 1),
            (3, 28),
            (3, 29),
            (4, 1),
            (4, 30),
            (5, 1),
            (5, 8),
            (5, 9),
            (6, 5),
            (6, 6),
            (6, 21),
            (11, 1),
            (12, 24),
            (12, 25),
            (12, 26),
            (12, 31),
        ] {
            cal = cal.exempt_date(2013, month, day);
        }
        cal.exempt_month(2013, 7)
    }

    /// Marks a single date as toll-free.
    pub fn exempt_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.exempt_dates
            .entry(year)
            .or_default()
            .insert((month, day));
        self
    }

    /// Marks an entire month as toll-free.
    pub fn exempt_month(mut self, year: i32, month: u32) -> Self {
        self.exempt_months.entry(year).or_default().insert(month);
        self
    }

    /// Returns `true` if no toll is charged on the given date.
    pub fn is_toll_free(&self, date: NaiveDate) -> bool {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return true;
        }
        let year = date.year();
        if let Some(months) = self.exempt_months.get(&year) {
            if months.contains(&date.month()) {
                return true;
            }
        }
        if let Some(dates) = self.exempt_dates.get(&year) {
            if dates.contains(&(date.month(), date.day())) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_weekends_always_toll_free() {
        let cal = TollCalendar::new();
        assert!(cal.is_toll_free(date(2013, 1, 12))); // Saturday
        assert!(cal.is_toll_free(date(2013, 1, 13))); // Sunday
        assert!(!cal.is_toll_free(date(2013, 1, 14))); // Monday
    }

    #[test]
    fn test_gothenburg_2013_holidays() {
        let cal = TollCalendar::gothenburg_2013();
        for (month, day) in [
            (1, 1),
            (3, 28),
            (3, 29),
            (4, 1),
            (4, 30),
            (5, 1),
            (5, 8),
            (5, 9),
            (6, 5),
            (6, 6),
            (6, 21),
            (11, 1),
            (12, 24),
            (12, 25),
            (12, 26),
            (12, 31),
        ] {
            assert!(cal.is_toll_free(date(2013, month, day)), "{month}-{day}");
        }
    }

    #[test]
    fn test_gothenburg_2013_july_fully_exempt() {
        let cal = TollCalendar::gothenburg_2013();
        for day in 1..=31 {
            assert!(cal.is_toll_free(date(2013, 7, day)), "July {day}");
        }
    }

    #[test]
    fn test_chargeable_weekdays() {
        let cal = TollCalendar::gothenburg_2013();
        assert!(!cal.is_toll_free(date(2013, 1, 2)));
        assert!(!cal.is_toll_free(date(2013, 6, 20)));
        assert!(!cal.is_toll_free(date(2013, 12, 23)));
    }

    #[test]
    fn test_other_years_weekend_rule_only() {
        let cal = TollCalendar::gothenburg_2013();
        // New Year's Day 2014 is a Wednesday; the table only covers 2013.
        assert!(!cal.is_toll_free(date(2014, 1, 1)));
        assert!(!cal.is_toll_free(date(2014, 7, 15)));
        // Weekends remain exempt regardless of year.
        assert!(cal.is_toll_free(date(2014, 1, 4)));
    }

    #[test]
    fn test_builder_exemptions() {
        let cal = TollCalendar::new()
            .exempt_date(2020, 12, 25)
            .exempt_month(2020, 7);
        assert!(cal.is_toll_free(date(2020, 12, 25)));
        assert!(cal.is_toll_free(date(2020, 7, 6)));
        assert!(!cal.is_toll_free(date(2019, 12, 25)));
    }

    #[test]
    fn test_serde_round_trip() {
        let cal = TollCalendar::gothenburg_2013();
        let json = serde_json::to_string(&cal).expect("serialize");
        let back: TollCalendar = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(cal, back);
    }
}
