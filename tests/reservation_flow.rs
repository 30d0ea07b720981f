//! End-to-end flow: build a lot, edit its layout, file reservations,
//! expand them, and resolve occupancy at several instants.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use lotgrid::schedule::{active_occurrences, resolve_lot, resolve_space};
use lotgrid::{
    ParkingLot, RepeatPattern, Reservation, ReservationStatus, SpaceStatus, SpaceType,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
}

fn instant(d: u32, h: u32, m: u32) -> NaiveDateTime {
    day(d).and_hms_opt(h, m, 0).unwrap()
}

fn reservation(id: i64, user_id: i64, space_id: i64, d: u32) -> Reservation {
    Reservation {
        id,
        user_id,
        parking_lot_id: 1,
        space_id,
        date: day(d),
        start_time: "09:00".into(),
        end_time: "17:00".into(),
        recurring: false,
        repeat_pattern: RepeatPattern::None,
        end_date: None,
        status: ReservationStatus::Active,
    }
}

#[test]
fn full_reservation_flow() {
    // 3x3 lot, one handicapped space, then a resize that must keep it
    let mut lot = ParkingLot::new(1, "Office Lot", 3, 3).unwrap();
    lot.set_space_type(5, SpaceType::Handicapped).unwrap(); // (1, 1)
    lot.resize(3, 4).unwrap();

    let kept = lot
        .spaces
        .iter()
        .find(|s| s.row == 1 && s.col == 1)
        .unwrap();
    assert_eq!(kept.space_type, SpaceType::Handicapped);
    assert_eq!(lot.spaces.len(), 12);

    // merge the back two rows; the lot gets physically shorter
    let unmerged_height = lot.height();
    lot.merge_rows(1, 2).unwrap();
    assert!(lot.height() < unmerged_height);

    // one single reservation, one weekly series, one cancelled
    let mut weekly = reservation(2, 8, 7, 20);
    weekly.recurring = true;
    weekly.repeat_pattern = RepeatPattern::Weekly;
    weekly.end_date = Some(day(27));

    let mut cancelled = reservation(3, 9, 2, 20);
    cancelled.status = ReservationStatus::Cancelled;

    let pool = [reservation(1, 7, 1, 20), weekly, cancelled];
    let occurrences = active_occurrences(&pool).unwrap();
    // single + two weekly occurrences; the cancelled one contributes none
    assert_eq!(occurrences.len(), 3);

    let names = HashMap::from([(7, "Dana Cole".to_string()), (8, "Ray Ito".to_string())]);

    // mid-day on the 20th: spaces 1 and 7 occupied
    let snapshot = resolve_lot(&lot, &occurrences, &names, instant(20, 12, 0)).unwrap();
    assert_eq!(snapshot.total_spots, 12);
    assert_eq!(snapshot.occupied_spots, 2);
    assert_eq!(
        snapshot.available_spots + snapshot.occupied_spots,
        snapshot.total_spots
    );

    let s2 = snapshot.spaces.iter().find(|s| s.space_id == 2).unwrap();
    assert_eq!(s2.status, SpaceStatus::Available);

    // the weekly series is still live a week later; the single one is not
    let next_week = resolve_lot(&lot, &occurrences, &names, instant(27, 12, 0)).unwrap();
    assert_eq!(next_week.occupied_spots, 1);
    let s7 = next_week.spaces.iter().find(|s| s.space_id == 7).unwrap();
    assert_eq!(s7.occupied_by.as_deref(), Some("Ray Ito"));

    // inclusive upper bound at 17:00, free one minute later
    let s1 = resolve_space(&lot, 1, &occurrences, &names, instant(20, 17, 0)).unwrap();
    assert_eq!(s1.status, SpaceStatus::Occupied);
    let s1 = resolve_space(&lot, 1, &occurrences, &names, instant(20, 17, 1)).unwrap();
    assert_eq!(s1.status, SpaceStatus::Available);
}

#[test]
fn occupancy_snapshot_serializes_for_the_api_layer() {
    let lot = ParkingLot::new(1, "Office Lot", 1, 2).unwrap();
    let snapshot = resolve_lot(&lot, &[], &HashMap::new(), instant(20, 12, 0)).unwrap();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["total_spots"], 2);
    assert_eq!(json["spaces"][0]["status"], "available");
    // available spaces carry no occupant fields at all
    assert!(json["spaces"][0].get("occupied_by").is_none());
}
