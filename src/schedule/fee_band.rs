//! A single fee band: an inclusive time-of-day span with a fixed fee.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// One contiguous time-of-day range mapped to a fee.
///
/// Both endpoints are inclusive and expressed at minute resolution;
/// seconds within the final minute still match.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use u_tolling::schedule::FeeBand;
///
/// let band = FeeBand::new((6, 0), (6, 29), 8).unwrap();
/// assert!(band.contains(NaiveTime::from_hms_opt(6, 15, 0).unwrap()));
/// assert!(!band.contains(NaiveTime::from_hms_opt(6, 30, 0).unwrap()));
/// assert_eq!(band.fee(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBand {
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
    fee: u32,
}

impl FeeBand {
    /// Creates a band spanning `start` through `end` (both `(hour, minute)`,
    /// inclusive) charging `fee`.
    ///
    /// Returns `None` if either endpoint is not a valid clock reading or the
    /// span is reversed.
    pub fn new(start: (u32, u32), end: (u32, u32), fee: u32) -> Option<Self> {
        let (start_hour, start_minute) = start;
        let (end_hour, end_minute) = end;
        if start_hour > 23 || end_hour > 23 || start_minute > 59 || end_minute > 59 {
            return None;
        }
        if start > end {
            return None;
        }
        Some(Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
            fee,
        })
    }

    /// Returns `true` if the given time of day falls within this band.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let at = (time.hour(), time.minute());
        (self.start_hour, self.start_minute) <= at && at <= (self.end_hour, self.end_minute)
    }

    /// Fee charged within this band.
    pub fn fee(&self) -> u32 {
        self.fee
    }

    /// Inclusive start of the span as `(hour, minute)`.
    pub fn start(&self) -> (u32, u32) {
        (self.start_hour, self.start_minute)
    }

    /// Inclusive end of the span as `(hour, minute)`.
    pub fn end(&self) -> (u32, u32) {
        (self.end_hour, self.end_minute)
    }
}
