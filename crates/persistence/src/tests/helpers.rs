// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use frontdesk_domain::{
    Email, GuestProfile, Reservation, ReservationStatus, Room, StayRange, parse_iso_date,
};

use crate::data_models::OperatorData;
use crate::mutations::ReservationDraft;
use crate::Persistence;

/// Fixed timestamp used for all fixture writes.
pub const NOW: &str = "2026-02-01T08:00:00Z";

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

pub fn stay(check_in: &str, check_out: &str) -> StayRange {
    StayRange::new(
        parse_iso_date(check_in).expect("valid check-in"),
        parse_iso_date(check_out).expect("valid check-out"),
    )
    .expect("valid stay range")
}

pub fn seed_operator(persistence: &mut Persistence) -> OperatorData {
    persistence
        .create_operator("desk", "Front Desk", "correct horse battery", "Admin", NOW)
        .expect("operator created")
}

pub fn seed_room(
    persistence: &mut Persistence,
    room_number: &str,
    capacity: u32,
    price_per_night_cents: i64,
) -> Room {
    let room = Room::new(
        room_number,
        "double",
        capacity,
        price_per_night_cents,
        vec![String::from("wifi")],
        1,
    )
    .expect("valid room");
    persistence.create_room(&room).expect("room created")
}

pub fn guest_profile(email: &str, name: &str) -> GuestProfile {
    GuestProfile::new(
        name,
        Email::new(email).expect("valid email"),
        Some(String::from("+1 555 0100")),
        None,
        None,
        None,
    )
    .expect("valid profile")
}

pub fn draft(
    room_id: i64,
    email: &str,
    check_in: &str,
    check_out: &str,
    total_guests: u32,
    created_by: i64,
) -> ReservationDraft {
    ReservationDraft {
        room_id,
        guest: guest_profile(email, "Ada Lovelace"),
        stay: stay(check_in, check_out),
        total_guests,
        special_requests: None,
        created_by,
        created_at: NOW.to_string(),
    }
}

/// Creates a reservation and promotes it to `confirmed`.
///
/// No supported operation produces `confirmed`, so fixtures seed it
/// through the status hook.
pub fn seed_confirmed_reservation(
    persistence: &mut Persistence,
    room_id: i64,
    email: &str,
    check_in: &str,
    check_out: &str,
    created_by: i64,
) -> Reservation {
    let reservation = persistence
        .create_reservation(&draft(room_id, email, check_in, check_out, 1, created_by))
        .expect("reservation created");
    persistence
        .force_reservation_status(reservation.reservation_id, ReservationStatus::Confirmed)
        .expect("status forced");
    persistence
        .get_reservation_by_id(reservation.reservation_id)
        .expect("reservation query")
        .expect("reservation present")
}
