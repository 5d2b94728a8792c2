//! Time-of-day fee bands.
//!
//! A fee schedule is an explicitly ordered list of inclusive time-of-day
//! spans, each mapped to a fixed fee. Lookup is first-match-wins, which
//! makes overlapping bands well-defined by their position in the list.

mod fee_band;
mod fee_schedule;

pub use fee_band::FeeBand;
pub use fee_schedule::FeeSchedule;
