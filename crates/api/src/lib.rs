// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the frontdesk hotel system.
//!
//! Handler functions validate request DTOs, enforce authentication and
//! authorization, call the persistence layer, and translate every
//! domain/persistence error into the `ApiError` contract. Controllers
//! stay thin: all multi-step invariants live behind the persistence
//! handle's transactional operations.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    cancel_reservation, check_in_reservation, check_out_reservation, check_room_availability,
    confirm_reservation, create_operator, create_payment, create_reservation, create_room,
    get_guest, get_guest_by_email, get_reservation, get_room, list_available_rooms,
    list_operators, list_payments, list_reservations, list_rooms, login, logout,
    process_payment, refund_payment, retire_room, update_room, whoami,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AvailabilityResponse, CheckOutRequest, CreateOperatorRequest, CreatePaymentRequest,
    CreateReservationRequest, CreateRoomRequest, GuestDetails, GuestInfo, ListReservationsRequest,
    LoginRequest, LoginResponse, OperatorInfo, PaymentInfo, ReservationInfo,
    ProcessPaymentRequest, RefundPaymentRequest, RoomInfo, UpdateRoomRequest, WhoAmIResponse,
};
