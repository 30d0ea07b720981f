//! Recurrence Expander
//!
//! Turns one reservation request into a time-ordered sequence of concrete
//! occurrences. Pure: no wall clock is read, so expanding the same request
//! twice yields the same occurrences.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::reservation::{
    RepeatPattern, Reservation, ReservationOccurrence, ReservationRequest,
};

/// Wall-clock time substituted for unparseable start/end strings.
///
/// A deliberate fallback, not a correction: it changes output silently, so
/// applying it always emits a `tracing::warn!`.
pub const FALLBACK_TIME: NaiveTime = NaiveTime::from_hms_opt(8, 0, 0).unwrap();

/// Expand a request into its occurrences, earliest first.
///
/// Non-recurring requests (or `repeat_pattern: none`) yield exactly one
/// occurrence. Recurring requests step forward by 1 day (`daily`) or 7 days
/// (`weekly`) until the start instant passes the end of `end_date`. An
/// unsupported pattern degrades to a single occurrence.
///
/// The end instant is not validated against the start instant; a request
/// whose end precedes its start is expanded as-is.
pub fn expand(request: &ReservationRequest) -> EngineResult<Vec<ReservationOccurrence>> {
    validate(request)?;

    let start_time = parse_time_of_day(&request.start_time, "start_time");
    let end_time = parse_time_of_day(&request.end_time, "end_time");

    let mut starts_at = request.date.and_time(start_time);
    let mut ends_at = request.date.and_time(end_time);

    let step = match repeat_step(request) {
        Some(step) => step,
        None => return Ok(vec![occurrence(request, starts_at, ends_at)]),
    };

    // validate() guarantees end_date is present on the recurring path
    let end_date = request
        .end_date
        .ok_or_else(|| EngineError::validation("recurring reservation requires end_date"))?;
    let end_limit = end_date.and_time(
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN),
    );

    let mut occurrences = Vec::new();
    while starts_at <= end_limit {
        occurrences.push(occurrence(request, starts_at, ends_at));
        starts_at += step;
        ends_at += step;
    }
    Ok(occurrences)
}

/// Expand every `active` reservation in the pool, skipping the rest.
///
/// This is the status filter the occupancy resolver relies on: cancelled and
/// completed reservations never reach it.
pub fn active_occurrences(
    reservations: &[Reservation],
) -> EngineResult<Vec<ReservationOccurrence>> {
    let mut occurrences = Vec::new();
    for reservation in reservations.iter().filter(|r| r.is_active()) {
        occurrences.extend(expand(&reservation.request())?);
    }
    Ok(occurrences)
}

fn validate(request: &ReservationRequest) -> EngineResult<()> {
    if request.user_id <= 0 || request.parking_lot_id <= 0 || request.space_id <= 0 {
        return Err(EngineError::validation(
            "reservation requires user_id, parking_lot_id and space_id",
        ));
    }
    if request.start_time.trim().is_empty() || request.end_time.trim().is_empty() {
        return Err(EngineError::validation(
            "reservation requires start_time and end_time",
        ));
    }
    if request.recurring
        && matches!(
            request.repeat_pattern,
            RepeatPattern::Daily | RepeatPattern::Weekly
        )
        && request.end_date.is_none()
    {
        return Err(EngineError::validation(
            "recurring reservation requires end_date",
        ));
    }
    Ok(())
}

/// Day step for the recurring path; `None` means expansion stops after the
/// first occurrence.
fn repeat_step(request: &ReservationRequest) -> Option<Duration> {
    if !request.recurring {
        return None;
    }
    match request.repeat_pattern {
        RepeatPattern::None => None,
        RepeatPattern::Daily => Some(Duration::days(1)),
        RepeatPattern::Weekly => Some(Duration::days(7)),
        RepeatPattern::Unsupported => {
            warn!(
                user_id = request.user_id,
                space_id = request.space_id,
                "unrecognized repeat pattern, expanding single occurrence"
            );
            None
        }
    }
}

/// Parse "HH:MM" (24-hour) or "H:MM AM/PM"; anything else falls back to
/// [`FALLBACK_TIME`] with a warning.
fn parse_time_of_day(raw: &str, field: &str) -> NaiveTime {
    let trimmed = raw.trim();
    if let Ok(time) = NaiveTime::parse_from_str(trimmed, "%H:%M") {
        return time;
    }
    let upper = trimmed.to_uppercase();
    for format in ["%I:%M %p", "%I:%M%p"] {
        if let Ok(time) = NaiveTime::parse_from_str(&upper, format) {
            return time;
        }
    }
    warn!(field, value = raw, "unparseable time of day, falling back to 08:00");
    FALLBACK_TIME
}

fn occurrence(
    request: &ReservationRequest,
    starts_at: NaiveDateTime,
    ends_at: NaiveDateTime,
) -> ReservationOccurrence {
    ReservationOccurrence {
        user_id: request.user_id,
        parking_lot_id: request.parking_lot_id,
        space_id: request.space_id,
        starts_at,
        ends_at,
    }
}
