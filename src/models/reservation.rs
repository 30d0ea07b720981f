//! Reservation Models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Repeat pattern for recurring reservations
///
/// `Unsupported` is the catch-all for wire values this version does not
/// know; expansion degrades to a single occurrence instead of failing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepeatPattern {
    #[default]
    None,
    Daily,
    Weekly,
    #[serde(other)]
    Unsupported,
}

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Active,
    Cancelled,
    Completed,
}

/// Reservation request — input to the recurrence expander
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationRequest {
    pub user_id: i64,
    pub parking_lot_id: i64,
    pub space_id: i64,
    /// Calendar day of the first occurrence
    pub date: NaiveDate,
    /// Wall-clock start, "HH:MM" or "H:MM AM/PM"
    pub start_time: String,
    /// Wall-clock end, same formats as `start_time`
    pub end_time: String,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub repeat_pattern: RepeatPattern,
    /// Last calendar day of the series; required iff `recurring`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Persisted reservation record
///
/// Stored and loaded by the external collaborator; the engine only reads
/// it to expand occurrences and to filter by status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: i64,
    pub user_id: i64,
    pub parking_lot_id: i64,
    pub space_id: i64,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub repeat_pattern: RepeatPattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ReservationStatus,
}

impl Reservation {
    /// Whether this reservation should count towards occupancy
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// Project the record back into the request shape the expander consumes
    pub fn request(&self) -> ReservationRequest {
        ReservationRequest {
            user_id: self.user_id,
            parking_lot_id: self.parking_lot_id,
            space_id: self.space_id,
            date: self.date,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            recurring: self.recurring,
            repeat_pattern: self.repeat_pattern,
            end_date: self.end_date,
        }
    }
}

/// One concrete time-bounded instance of a (possibly recurring) reservation
///
/// Produced by the expander, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationOccurrence {
    pub user_id: i64,
    pub parking_lot_id: i64,
    pub space_id: i64,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}
