//! Parking Space Model

use serde::{Deserialize, Serialize};

/// Space type classification
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpaceType {
    #[default]
    Regular,
    Visitor,
    Handicapped,
    Authorized,
}

/// Parking space entity
///
/// Ids are positional: 1-based, row-major, reassigned in full whenever the
/// lot's dimensions are regenerated. Only `space_type` is ever mutated;
/// spaces are created and destroyed as a set with their lot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Space {
    pub id: i64,
    pub row: u32,
    pub col: u32,
    pub space_type: SpaceType,
}
