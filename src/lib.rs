//! # u-tolling
//!
//! Congestion tax computation library providing toll rule models, exemption
//! calendars, time-of-day fee schedules, and daily tax aggregation.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (VehicleCategory, Vehicle, Passage)
//! - [`calendar`] — Toll-free date calendar (weekends, holidays, exempt months)
//! - [`schedule`] — Ordered time-of-day fee bands with first-match lookup
//! - [`rules`] — Toll rule policy (exemptions + fee lookup) and city provisioning
//! - [`aggregation`] — Daily tax calculator with rolling-window deduplication

pub mod aggregation;
pub mod calendar;
pub mod models;
pub mod rules;
pub mod schedule;
