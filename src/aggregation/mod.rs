//! Daily tax aggregation.
//!
//! Folds a day's passages into a single tax amount using a rolling-window
//! deduplication rule and the rule set's daily cap.

mod calculator;

pub use calculator::TaxCalculator;
