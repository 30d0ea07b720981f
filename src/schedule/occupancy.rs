//! Occupancy Resolver
//!
//! Classifies each space of a lot as available or occupied at a query
//! instant, given an already-expanded occurrence pool. The instant is always
//! an explicit parameter; the resolver never reads a wall clock, so results
//! are reproducible in tests and audits.
//!
//! Status filtering (cancelled/completed reservations) happens before
//! occurrences reach this module — see
//! [`active_occurrences`](crate::schedule::recurrence::active_occurrences).
//! The resolver itself does interval containment only.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::parking_lot::ParkingLot;
use crate::models::reservation::ReservationOccurrence;
use crate::models::space::Space;

/// Occupancy status of a single space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpaceStatus {
    Available,
    Occupied,
}

/// Per-space occupancy at the query instant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpaceOccupancy {
    pub space_id: i64,
    pub status: SpaceStatus,
    /// Display name of the occupant, supplied by the caller's name map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupied_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupied_until: Option<NaiveDateTime>,
}

/// Lot-wide occupancy snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LotOccupancy {
    pub total_spots: u32,
    pub occupied_spots: u32,
    pub available_spots: u32,
    pub spaces: Vec<SpaceOccupancy>,
}

/// Resolve every space of a lot at instant `at`.
///
/// `total_spots` is `rows * cols`, deliberately not `spaces.len()`: a
/// registry that fell out of sync is rejected here rather than hidden.
/// An empty occurrence pool is not an error; it means all spaces are free.
pub fn resolve_lot(
    lot: &ParkingLot,
    occurrences: &[ReservationOccurrence],
    occupant_names: &HashMap<i64, String>,
    at: NaiveDateTime,
) -> EngineResult<LotOccupancy> {
    let total_spots = lot.rows * lot.cols;
    if lot.spaces.len() != total_spots as usize {
        return Err(EngineError::inconsistent(format!(
            "lot {} has {} spaces for {}x{} dimensions",
            lot.id,
            lot.spaces.len(),
            lot.rows,
            lot.cols
        )));
    }

    let spaces: Vec<SpaceOccupancy> = lot
        .spaces
        .iter()
        .map(|space| classify(lot.id, space, occurrences, occupant_names, at))
        .collect();

    let occupied_spots = spaces
        .iter()
        .filter(|s| s.status == SpaceStatus::Occupied)
        .count() as u32;

    Ok(LotOccupancy {
        total_spots,
        occupied_spots,
        available_spots: total_spots - occupied_spots,
        spaces,
    })
}

/// Resolve one space by id.
///
/// The id must come from the lot's own registry; an unknown id means the
/// registry and the caller disagree, which is fatal to the query.
pub fn resolve_space(
    lot: &ParkingLot,
    space_id: i64,
    occurrences: &[ReservationOccurrence],
    occupant_names: &HashMap<i64, String>,
    at: NaiveDateTime,
) -> EngineResult<SpaceOccupancy> {
    let space = lot
        .spaces
        .iter()
        .find(|s| s.id == space_id)
        .ok_or_else(|| {
            EngineError::inconsistent(format!("space {} not in lot {} registry", space_id, lot.id))
        })?;
    Ok(classify(lot.id, space, occurrences, occupant_names, at))
}

/// Interval containment is inclusive on both bounds: a space is still
/// occupied at the exact end instant of its occurrence.
///
/// The first matching occurrence wins; double-booked intervals are not
/// resolved here (preventing them is the reservation writer's concern).
fn classify(
    lot_id: i64,
    space: &Space,
    occurrences: &[ReservationOccurrence],
    occupant_names: &HashMap<i64, String>,
    at: NaiveDateTime,
) -> SpaceOccupancy {
    let hit = occurrences.iter().find(|o| {
        o.parking_lot_id == lot_id
            && o.space_id == space.id
            && o.starts_at <= at
            && at <= o.ends_at
    });

    match hit {
        Some(o) => SpaceOccupancy {
            space_id: space.id,
            status: SpaceStatus::Occupied,
            occupied_by: Some(
                occupant_names
                    .get(&o.user_id)
                    .cloned()
                    .unwrap_or_else(|| o.user_id.to_string()),
            ),
            occupied_until: Some(o.ends_at),
        },
        None => SpaceOccupancy {
            space_id: space.id,
            status: SpaceStatus::Available,
            occupied_by: None,
            occupied_until: None,
        },
    }
}
