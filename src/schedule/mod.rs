//! Reservation Schedule Module
//!
//! Expansion of (possibly recurring) reservations into concrete occurrences,
//! and resolution of per-space occupancy at a query instant.

pub mod occupancy;
pub mod recurrence;

pub use occupancy::*;
pub use recurrence::*;
