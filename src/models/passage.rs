//! Passage: a timestamped toll-point crossing event.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single toll-point crossing at a specific local date and time.
///
/// Timestamps are naive (no timezone): passages are recorded in the toll
/// city's local time. Passages order chronologically.
///
/// # Examples
///
/// ```
/// use u_tolling::models::Passage;
///
/// let p = Passage::from_parts(2013, 1, 14, 7, 30).unwrap();
/// assert_eq!(p.time().to_string(), "07:30:00");
///
/// let earlier = Passage::from_parts(2013, 1, 14, 6, 15).unwrap();
/// assert!(earlier < p);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Passage {
    timestamp: NaiveDateTime,
}

impl Passage {
    /// Creates a passage at the given timestamp.
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self { timestamp }
    }

    /// Creates a passage from calendar and clock parts (seconds = 0).
    ///
    /// Returns `None` if the parts do not form a valid date and time.
    pub fn from_parts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        let timestamp = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
        Some(Self { timestamp })
    }

    /// Full timestamp of the crossing.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Calendar date of the crossing.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Time of day of the crossing.
    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_valid() {
        let p = Passage::from_parts(2013, 1, 14, 6, 15).expect("valid");
        assert_eq!(p.date(), NaiveDate::from_ymd_opt(2013, 1, 14).expect("valid"));
        assert_eq!(p.time(), NaiveTime::from_hms_opt(6, 15, 0).expect("valid"));
    }

    #[test]
    fn test_from_parts_invalid() {
        assert!(Passage::from_parts(2013, 2, 30, 6, 15).is_none());
        assert!(Passage::from_parts(2013, 13, 1, 6, 15).is_none());
        assert!(Passage::from_parts(2013, 1, 14, 24, 0).is_none());
        assert!(Passage::from_parts(2013, 1, 14, 6, 60).is_none());
    }

    #[test]
    fn test_ordering_chronological() {
        let a = Passage::from_parts(2013, 1, 14, 22, 0).expect("valid");
        let b = Passage::from_parts(2013, 1, 15, 7, 30).expect("valid");
        assert!(a < b);

        let mut passages = vec![b, a];
        passages.sort();
        assert_eq!(passages, vec![a, b]);
    }
}
