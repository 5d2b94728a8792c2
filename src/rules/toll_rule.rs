//! Stateless toll rule: exemptions plus fee lookup.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calendar::TollCalendar;
use crate::models::Vehicle;
use crate::schedule::FeeSchedule;

/// Default daily cap in the city's currency units.
pub(crate) const DEFAULT_DAILY_CAP: u32 = 60;

/// The toll policy for one city and rule version.
///
/// Answers three questions: is a date fully toll-free, is a vehicle
/// category toll-free, and what fee applies to a timestamp when neither
/// exemption holds. Holds no mutable state.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_tolling::models::{Vehicle, VehicleCategory};
/// use u_tolling::rules::TollRule;
///
/// let rule = TollRule::gothenburg();
/// let car = Vehicle::new(VehicleCategory::Car);
/// let at = NaiveDate::from_ymd_opt(2013, 1, 14)
///     .unwrap()
///     .and_hms_opt(7, 30, 0)
///     .unwrap();
///
/// assert_eq!(rule.fee(at, Some(&car)), 18);
/// assert!(rule.is_toll_free_vehicle_type("Motorcycle"));
/// assert_eq!(rule.daily_cap(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollRule {
    calendar: TollCalendar,
    schedule: FeeSchedule,
    exempt_categories: BTreeSet<String>,
    daily_cap: u32,
}

impl TollRule {
    /// Creates a rule from a calendar and schedule.
    ///
    /// Default: no exempt vehicle categories, daily cap 60.
    pub fn new(calendar: TollCalendar, schedule: FeeSchedule) -> Self {
        Self {
            calendar,
            schedule,
            exempt_categories: BTreeSet::new(),
            daily_cap: DEFAULT_DAILY_CAP,
        }
    }

    /// The default Gothenburg rule set: 2013 exemption calendar, rush-hour
    /// fee table, the six exempt vehicle categories, and a cap of 60.
    pub fn gothenburg() -> Self {
        let mut rule = Self::new(TollCalendar::gothenburg_2013(), FeeSchedule::gothenburg());
        for category in [
            "Motorcycle",
            "Tractor",
            "Emergency",
            "Diplomat",
            "Foreign",
            "Military",
        ] {
            rule = rule.exempt_category(category);
        }
        rule
    }

    /// Adds a toll-free vehicle category (matched case-sensitively by name).
    pub fn exempt_category(mut self, category: &str) -> Self {
        self.exempt_categories.insert(category.to_string());
        self
    }

    /// Sets the daily cap.
    pub fn with_daily_cap(mut self, cap: u32) -> Self {
        self.daily_cap = cap;
        self
    }

    /// Returns `true` if no toll is charged on the given date.
    pub fn is_toll_free_date(&self, date: NaiveDate) -> bool {
        self.calendar.is_toll_free(date)
    }

    /// Returns `true` if the named vehicle category is toll-free.
    ///
    /// Exact, case-sensitive match; unknown or empty names are simply
    /// not exempt.
    pub fn is_toll_free_vehicle_type(&self, category: &str) -> bool {
        self.exempt_categories.contains(category)
    }

    /// Fee for a passage at `at` by `vehicle`.
    ///
    /// Returns 0 when the date is toll-free or the vehicle's category is
    /// exempt. An absent vehicle is treated as taxable.
    pub fn fee(&self, at: NaiveDateTime, vehicle: Option<&Vehicle>) -> u32 {
        if self.is_toll_free_date(at.date()) {
            return 0;
        }
        let exempt = vehicle
            .map(|v| self.is_toll_free_vehicle_type(v.category().name()))
            .unwrap_or(false);
        if exempt {
            return 0;
        }
        self.schedule.fee_at(at.time())
    }

    /// Maximum total fee chargeable for one day.
    pub fn daily_cap(&self) -> u32 {
        self.daily_cap
    }
}
