//! Ordered fee band list with first-match lookup.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::FeeBand;

/// An ordered list of fee bands evaluated first-match-wins.
///
/// Bands may overlap; the earlier entry takes precedence. Times matching no
/// band are free (fee 0), which is how off-peak hours are expressed.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use u_tolling::schedule::FeeSchedule;
///
/// let schedule = FeeSchedule::gothenburg();
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// assert_eq!(schedule.fee_at(t(7, 30)), 18);
/// assert_eq!(schedule.fee_at(t(15, 10)), 13); // narrow band wins over 15:00–16:59
/// assert_eq!(schedule.fee_at(t(22, 0)), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    bands: Vec<FeeBand>,
}

impl FeeSchedule {
    /// Creates a schedule from an ordered list of bands.
    pub fn new(bands: Vec<FeeBand>) -> Self {
        Self { bands }
    }

    /// The Gothenburg rush-hour fee table.
    ///
    /// The 15:00–15:29 band is listed before the broader 15:00–16:59 band,
    /// so early-afternoon passages resolve to 13 and 15:30–16:59 to 18.
    pub fn gothenburg() -> Self {
        let table = [
            ((6, 0), (6, 29), 8),
            ((6, 30), (6, 59), 13),
            ((7, 0), (7, 59), 18),
            ((8, 0), (8, 29), 13),
            ((8, 30), (14, 59), 8),
            ((15, 0), (15, 29), 13),
            ((15, 0), (16, 59), 18),
            ((17, 0), (17, 59), 13),
            ((18, 0), (18, 29), 8),
        ];
        let bands = table
            .iter()
            .filter_map(|&(start, end, fee)| FeeBand::new(start, end, fee))
            .collect();
        Self { bands }
    }

    /// Fee for the given time of day; 0 when no band matches.
    pub fn fee_at(&self, time: NaiveTime) -> u32 {
        self.bands
            .iter()
            .find(|band| band.contains(time))
            .map(FeeBand::fee)
            .unwrap_or(0)
    }

    /// The bands of this schedule, in evaluation order.
    pub fn bands(&self) -> &[FeeBand] {
        &self.bands
    }
}
