// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room and guest handlers.

use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{CreateRoomRequest, UpdateRoomRequest};
use crate::tests::helpers::{
    admin_actor, reservation_request, seed_confirmed_reservation, seed_room, seed_room_numbered,
    test_persistence,
};

#[test]
fn test_create_room_and_get() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);

    let room = seed_room(&mut p, &admin);
    assert_eq!(room.room_number, "101");
    assert_eq!(room.status, "available");

    let fetched = handlers::get_room(&mut p, room.room_id).unwrap();
    assert_eq!(fetched, room);
}

#[test]
fn test_create_room_validation_and_duplicates() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);
    seed_room(&mut p, &admin);

    let duplicate = CreateRoomRequest {
        room_number: String::from("101"),
        room_type: String::from("suite"),
        capacity: 4,
        price_per_night_cents: 30_000,
        amenities: vec![],
        floor: 2,
    };
    let result = handlers::create_room(&mut p, &duplicate, &admin);
    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));

    let zero_capacity = CreateRoomRequest {
        room_number: String::from("102"),
        room_type: String::from("double"),
        capacity: 0,
        price_per_night_cents: 12_000,
        amenities: vec![],
        floor: 1,
    };
    let result = handlers::create_room(&mut p, &zero_capacity, &admin);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_update_room_has_no_status_surface() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);
    let room = seed_room(&mut p, &admin);

    let updated = handlers::update_room(
        &mut p,
        room.room_id,
        &UpdateRoomRequest {
            room_type: Some(String::from("suite")),
            price_per_night_cents: Some(20_000),
            ..Default::default()
        },
        &admin,
    )
    .unwrap();

    assert_eq!(updated.room_type, "suite");
    assert_eq!(updated.price_per_night_cents, 20_000);
    assert_eq!(updated.status, "available");
}

#[test]
fn test_update_room_validation() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);
    let room = seed_room(&mut p, &admin);

    let zero_capacity = handlers::update_room(
        &mut p,
        room.room_id,
        &UpdateRoomRequest {
            capacity: Some(0),
            ..Default::default()
        },
        &admin,
    );
    assert!(matches!(zero_capacity, Err(ApiError::InvalidInput { .. })));

    let negative_rate = handlers::update_room(
        &mut p,
        room.room_id,
        &UpdateRoomRequest {
            price_per_night_cents: Some(-1),
            ..Default::default()
        },
        &admin,
    );
    assert!(matches!(negative_rate, Err(ApiError::InvalidInput { .. })));

    let missing = handlers::update_room(
        &mut p,
        999,
        &UpdateRoomRequest {
            floor: Some(2),
            ..Default::default()
        },
        &admin,
    );
    assert!(matches!(missing, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_retire_room_conflicts_while_blocked() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);
    let room = seed_room(&mut p, &admin);

    seed_confirmed_reservation(
        &mut p,
        &admin,
        room.room_id,
        "ada@example.com",
        "2026-03-01",
        "2026-03-03",
    );

    let blocked = handlers::retire_room(&mut p, room.room_id, &admin);
    assert!(matches!(blocked, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_retire_room_soft_deletes() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);
    let room = seed_room(&mut p, &admin);

    let retired = handlers::retire_room(&mut p, room.room_id, &admin).unwrap();
    assert_eq!(retired.status, "maintenance");

    // Still listed; only availability hides it.
    let rooms = handlers::list_rooms(&mut p).unwrap();
    assert_eq!(rooms.len(), 1);

    let listing = handlers::list_available_rooms(&mut p, "2026-03-01", "2026-03-03").unwrap();
    assert!(listing.rooms.is_empty());
}

#[test]
fn test_list_rooms_ordering() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);
    seed_room_numbered(&mut p, &admin, "202");
    seed_room_numbered(&mut p, &admin, "101");

    let rooms = handlers::list_rooms(&mut p).unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].room_number, "101");
}

#[test]
fn test_guest_lookup_after_booking() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);
    let room = seed_room(&mut p, &admin);

    let reservation = handlers::create_reservation(
        &mut p,
        &reservation_request(room.room_id, "Ada@Example.com", "2026-03-01", "2026-03-03", 1),
        &admin,
    )
    .unwrap();

    let by_id = handlers::get_guest(&mut p, reservation.guest_id).unwrap();
    assert_eq!(by_id.email, "ada@example.com");

    // Case-insensitive lookup through the API.
    let by_email = handlers::get_guest_by_email(&mut p, "ADA@EXAMPLE.COM").unwrap();
    assert_eq!(by_email.guest_id, reservation.guest_id);

    let missing = handlers::get_guest_by_email(&mut p, "nobody@example.com");
    assert!(matches!(missing, Err(ApiError::ResourceNotFound { .. })));
}
