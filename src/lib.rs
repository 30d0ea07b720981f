//! Parking lot layout and reservation resolution engine
//!
//! Two concerns, both pure and synchronous:
//! - **Layout**: a lot's row/column configuration plus merged-aisle flags
//!   mapped to space identities and physical coordinates.
//! - **Schedule**: reservation requests (single or recurring) expanded into
//!   occurrences, and per-space occupancy resolved at an explicit instant.
//!
//! The surrounding application (persistence, HTTP, auth, rendering) lives
//! elsewhere; it loads/stores the entities in [`models`] and calls into
//! [`layout`] and [`schedule`] with immutable snapshots. Nothing here reads
//! a clock, holds shared state, or blocks.

pub mod error;
pub mod layout;
pub mod models;
pub mod schedule;

// Re-exports
pub use error::{EngineError, EngineResult};
pub use models::{
    ParkingLot, RepeatPattern, Reservation, ReservationOccurrence, ReservationRequest,
    ReservationStatus, Space, SpaceType,
};
pub use schedule::{LotOccupancy, SpaceOccupancy, SpaceStatus};
