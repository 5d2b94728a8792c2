//! Toll-free date calendar.
//!
//! Weekends are always exempt; additional exempt dates and fully exempt
//! months are configured per year, so rule sets for other jurisdictions or
//! years can be injected without code changes.

mod toll_calendar;

pub use toll_calendar::TollCalendar;
