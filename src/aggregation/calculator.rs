//! Rolling-window daily tax calculator.
//!
//! # Algorithm
//!
//! Passages are sorted chronologically and folded pairwise: each passage is
//! compared against the previous one (the window anchor). Passages deemed
//! within the same window are charged once, at the highest band fee seen;
//! otherwise the passage opens a new interval and its fee is added directly.
//! The final total is clamped to the rule's daily cap.
//!
//! Two behaviors of the deployed rule are reproduced deliberately rather
//! than corrected:
//!
//! - The elapsed check compares only the minute-of-hour component of the
//!   gap (`gap.num_minutes() % 60`), not the full duration, so gaps spanning
//!   whole hours still fold into the same window.
//! - The anchor advances to every processed passage, so windowing is
//!   pairwise-chained rather than measured from the first entry.
//!
//! # Complexity
//!
//! O(n log n) in the number of passages (dominated by the sort).

use crate::models::{Passage, Vehicle};
use crate::rules::TollRule;

/// Computes the total congestion tax for one day's passages.
///
/// Borrows a [`TollRule`]; holds no state across calls, so one calculator
/// can serve any number of independent calculations.
///
/// The caller is responsible for supplying passages from a single calendar
/// day; multi-day batches are not segmented.
///
/// # Examples
///
/// ```
/// use u_tolling::aggregation::TaxCalculator;
/// use u_tolling::models::{Passage, Vehicle, VehicleCategory};
/// use u_tolling::rules::TollRule;
///
/// let rule = TollRule::gothenburg();
/// let calculator = TaxCalculator::new(&rule);
/// let car = Vehicle::new(VehicleCategory::Car);
///
/// let passages = vec![
///     Passage::from_parts(2013, 1, 14, 6, 15).unwrap(),
///     Passage::from_parts(2013, 1, 14, 6, 45).unwrap(),
///     Passage::from_parts(2013, 1, 14, 7, 15).unwrap(),
/// ];
///
/// // One window, charged at the highest band fee seen
/// assert_eq!(calculator.daily_tax(Some(&car), &passages), 18);
/// ```
pub struct TaxCalculator<'a> {
    rule: &'a TollRule,
}

impl<'a> TaxCalculator<'a> {
    /// Creates a calculator over the given rule set.
    pub fn new(rule: &'a TollRule) -> Self {
        Self { rule }
    }

    /// Total tax for the given passages.
    ///
    /// The input need not be sorted; order never affects the result. An
    /// empty input and an absent vehicle are both fine (0 and taxable,
    /// respectively). The result is always within `[0, daily_cap]`.
    pub fn daily_tax(&self, vehicle: Option<&Vehicle>, passages: &[Passage]) -> u32 {
        if passages.is_empty() {
            return 0;
        }

        let mut sorted = passages.to_vec();
        sorted.sort();

        let mut total: i64 = 0;
        let mut anchor = sorted[0];

        for &passage in &sorted {
            let fee = i64::from(self.rule.fee(passage.timestamp(), vehicle));
            let anchor_fee = i64::from(self.rule.fee(anchor.timestamp(), vehicle));

            // Minute-of-hour component of the gap, not true elapsed minutes.
            let gap = passage.timestamp() - anchor.timestamp();
            let minutes = gap.num_minutes() % 60;

            if minutes <= 60 {
                // Same window: replace the anchor's contribution with the
                // larger of the two fees.
                if total > 0 {
                    total -= anchor_fee;
                }
                total += anchor_fee.max(fee);
            } else {
                total += fee;
            }

            anchor = passage;
        }

        total.clamp(0, i64::from(self.rule.daily_cap())) as u32
    }
}
