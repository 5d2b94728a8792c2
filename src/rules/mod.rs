//! Toll rule policy and city-based rule provisioning.
//!
//! A [`TollRule`] bundles the exemption calendar, the fee schedule, the
//! exempt vehicle categories, and the daily cap for one city and rule
//! version. It is immutable after construction and safe to share across
//! concurrent calculations.

mod provider;
mod toll_rule;

pub use provider::RuleProvider;
pub use toll_rule::TollRule;
