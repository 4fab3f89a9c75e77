// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use frontdesk_domain::ReservationStatus;
use frontdesk_persistence::Persistence;

use crate::auth::AuthenticatedActor;
use crate::handlers;
use crate::request_response::{
    CreateReservationRequest, CreateRoomRequest, GuestDetails, ReservationInfo, RoomInfo,
};

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

/// Creates a persisted Admin operator and returns the matching actor.
pub fn admin_actor(persistence: &mut Persistence) -> AuthenticatedActor {
    let operator = persistence
        .create_operator(
            "admin",
            "Test Admin",
            "admin passphrase one",
            "Admin",
            "2026-02-01T08:00:00Z",
        )
        .expect("admin created");
    AuthenticatedActor::new(
        operator.operator_id,
        operator.login_name,
        crate::auth::Role::Admin,
    )
}

/// Creates a persisted Receptionist operator and returns the matching
/// actor.
pub fn receptionist_actor(persistence: &mut Persistence) -> AuthenticatedActor {
    let operator = persistence
        .create_operator(
            "desk",
            "Test Receptionist",
            "desk passphrase one",
            "Receptionist",
            "2026-02-01T08:00:00Z",
        )
        .expect("receptionist created");
    AuthenticatedActor::new(
        operator.operator_id,
        operator.login_name,
        crate::auth::Role::Receptionist,
    )
}

pub fn guest_details(email: &str) -> GuestDetails {
    GuestDetails {
        name: String::from("Ada Lovelace"),
        email: email.to_string(),
        phone: Some(String::from("+1 555 0100")),
        document: None,
        nationality: None,
        language_preference: None,
    }
}

pub fn reservation_request(
    room_id: i64,
    email: &str,
    check_in: &str,
    check_out: &str,
    total_guests: u32,
) -> CreateReservationRequest {
    CreateReservationRequest {
        room_id,
        guest: guest_details(email),
        check_in_date: check_in.to_string(),
        check_out_date: check_out.to_string(),
        total_guests,
        special_requests: None,
    }
}

/// Creates room "101" (capacity 2, 12_000 cents/night) via the API.
pub fn seed_room(persistence: &mut Persistence, admin: &AuthenticatedActor) -> RoomInfo {
    seed_room_numbered(persistence, admin, "101")
}

pub fn seed_room_numbered(
    persistence: &mut Persistence,
    admin: &AuthenticatedActor,
    room_number: &str,
) -> RoomInfo {
    let request = CreateRoomRequest {
        room_number: room_number.to_string(),
        room_type: String::from("double"),
        capacity: 2,
        price_per_night_cents: 12_000,
        amenities: vec![String::from("wifi")],
        floor: 1,
    };
    handlers::create_room(persistence, &request, admin).expect("room created")
}

/// Creates a reservation via the API and promotes it to `confirmed`
/// through the storage hook (no supported operation produces
/// `confirmed`).
pub fn seed_confirmed_reservation(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    room_id: i64,
    email: &str,
    check_in: &str,
    check_out: &str,
) -> ReservationInfo {
    let created = handlers::create_reservation(
        persistence,
        &reservation_request(room_id, email, check_in, check_out, 1),
        actor,
    )
    .expect("reservation created");
    persistence
        .force_reservation_status(created.reservation_id, ReservationStatus::Confirmed)
        .expect("status forced");
    handlers::get_reservation(persistence, created.reservation_id).expect("reservation fetched")
}
