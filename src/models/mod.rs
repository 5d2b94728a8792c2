//! Domain model types for congestion tax calculation.
//!
//! Provides the core abstractions: vehicles with a classification category,
//! and passages as timestamped toll-point crossing events.

mod passage;
mod vehicle;

pub use passage::Passage;
pub use vehicle::{Vehicle, VehicleCategory};
