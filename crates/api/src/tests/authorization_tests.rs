// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-based authorization enforcement.

use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{CreateOperatorRequest, CreateRoomRequest};
use crate::tests::helpers::{
    admin_actor, receptionist_actor, reservation_request, seed_room, test_persistence,
};

#[test]
fn test_receptionist_may_work_the_desk() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);
    let receptionist = receptionist_actor(&mut p);
    let room = seed_room(&mut p, &admin);

    let created = handlers::create_reservation(
        &mut p,
        &reservation_request(room.room_id, "ada@example.com", "2026-03-01", "2026-03-03", 1),
        &receptionist,
    );
    assert!(created.is_ok());
}

#[test]
fn test_cancel_requires_admin() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);
    let receptionist = receptionist_actor(&mut p);
    let room = seed_room(&mut p, &admin);

    let reservation = handlers::create_reservation(
        &mut p,
        &reservation_request(room.room_id, "ada@example.com", "2026-03-01", "2026-03-03", 1),
        &receptionist,
    )
    .unwrap();

    let denied = handlers::cancel_reservation(&mut p, reservation.reservation_id, &receptionist);
    assert!(matches!(denied, Err(ApiError::Unauthorized { .. })));

    // The denial did not mutate state.
    let unchanged = handlers::get_reservation(&mut p, reservation.reservation_id).unwrap();
    assert_eq!(unchanged.status, "pending");

    let allowed = handlers::cancel_reservation(&mut p, reservation.reservation_id, &admin);
    assert!(allowed.is_ok());
}

#[test]
fn test_room_management_requires_admin() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);
    let receptionist = receptionist_actor(&mut p);
    let room = seed_room(&mut p, &admin);

    let create = handlers::create_room(
        &mut p,
        &CreateRoomRequest {
            room_number: String::from("201"),
            room_type: String::from("double"),
            capacity: 2,
            price_per_night_cents: 12_000,
            amenities: vec![],
            floor: 2,
        },
        &receptionist,
    );
    assert!(matches!(create, Err(ApiError::Unauthorized { .. })));

    let retire = handlers::retire_room(&mut p, room.room_id, &receptionist);
    assert!(matches!(retire, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_operator_management_requires_admin() {
    let mut p = test_persistence();
    let receptionist = receptionist_actor(&mut p);

    let request = CreateOperatorRequest {
        login_name: String::from("new-desk"),
        display_name: String::from("New Desk"),
        password: String::from("a dozen chars"),
        role: String::from("Receptionist"),
    };
    let denied = handlers::create_operator(&mut p, &request, &receptionist);
    assert!(matches!(denied, Err(ApiError::Unauthorized { .. })));

    let listing = handlers::list_operators(&mut p, &receptionist);
    assert!(matches!(listing, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_create_operator_validates_role_and_password() {
    let mut p = test_persistence();
    let admin = admin_actor(&mut p);

    let bad_role = handlers::create_operator(
        &mut p,
        &CreateOperatorRequest {
            login_name: String::from("new-desk"),
            display_name: String::from("New Desk"),
            password: String::from("a dozen chars"),
            role: String::from("Owner"),
        },
        &admin,
    );
    assert!(matches!(bad_role, Err(ApiError::InvalidInput { .. })));

    let weak_password = handlers::create_operator(
        &mut p,
        &CreateOperatorRequest {
            login_name: String::from("new-desk"),
            display_name: String::from("New Desk"),
            password: String::from("short"),
            role: String::from("Receptionist"),
        },
        &admin,
    );
    assert!(matches!(
        weak_password,
        Err(ApiError::PasswordPolicyViolation { .. })
    ));

    let created = handlers::create_operator(
        &mut p,
        &CreateOperatorRequest {
            login_name: String::from("new-desk"),
            display_name: String::from("New Desk"),
            password: String::from("a dozen chars"),
            role: String::from("Receptionist"),
        },
        &admin,
    )
    .unwrap();
    assert_eq!(created.login_name, "NEW-DESK");
    assert_eq!(created.role, "Receptionist");
}
