// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers are thin pass-throughs: authorize, validate the request
//! shape into domain types, call one persistence operation, translate
//! the outcome. Lifecycle guard failures surface from persistence as
//! `None` and are reported as not-found; "absent" and "wrong state"
//! are deliberately indistinguishable.

use std::str::FromStr;
use time::OffsetDateTime;
use tracing::info;

use frontdesk_domain::{
    DomainError, Email, GuestProfile, PaymentMethod, ReservationStatus, Room, StayRange,
    parse_iso_date, validate_additional_charges, validate_payment_amount,
};
use frontdesk_persistence::{
    Persistence, PersistenceError, ReservationDraft, ReservationFilter, RoomDetailsUpdate,
};

use crate::auth::{
    AuthenticatedActor, AuthenticationService, AuthorizationService, Role,
};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    AvailabilityResponse, CheckOutRequest, CreateOperatorRequest, CreatePaymentRequest,
    CreateReservationRequest, CreateRoomRequest, GuestDetails, GuestInfo,
    ListReservationsRequest, LoginRequest, LoginResponse, OperatorInfo, PaymentInfo,
    ProcessPaymentRequest, RefundPaymentRequest, ReservationInfo, RoomInfo, UpdateRoomRequest,
    WhoAmIResponse,
};

/// Formats the current instant as RFC 3339.
fn now_rfc3339() -> Result<String, ApiError> {
    OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })
}

/// Builds a validated guest profile from request details.
fn parse_guest_details(details: &GuestDetails) -> Result<GuestProfile, ApiError> {
    let email: Email = Email::new(&details.email).map_err(translate_domain_error)?;
    GuestProfile::new(
        &details.name,
        email,
        details.phone.clone(),
        details.document.clone(),
        details.nationality.clone(),
        details.language_preference.clone(),
    )
    .map_err(translate_domain_error)
}

/// The uniform not-found response for a reservation id.
///
/// Used for both "no such row" and "guard failed" so the response does
/// not leak lifecycle state.
fn reservation_not_found(reservation_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Reservation"),
        message: format!("Reservation {reservation_id} not found"),
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// Authenticates an operator and opens a session.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The login request
///
/// # Errors
///
/// Returns an error if the credentials are wrong or the operator is
/// disabled.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (session_token, _actor, operator) =
        AuthenticationService::login(persistence, &request.login_name, &request.password)?;

    let expires_at: String = persistence
        .get_session_by_token(&session_token)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Session not found after creation"),
        })?
        .expires_at;

    Ok(LoginResponse {
        session_token,
        login_name: operator.login_name,
        display_name: operator.display_name,
        role: operator.role,
        expires_at,
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Returns the current operator's information.
///
/// # Errors
///
/// Returns an error if the operator lookup fails.
pub fn whoami(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<WhoAmIResponse, ApiError> {
    let operator = persistence
        .get_operator_by_id(actor.operator_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Operator vanished behind a live session"),
        })?;

    Ok(WhoAmIResponse {
        login_name: operator.login_name,
        display_name: operator.display_name,
        role: operator.role,
    })
}

// ============================================================================
// Reservations
// ============================================================================

/// Creates a reservation in `pending` status.
///
/// Availability, capacity, and the guest upsert are enforced inside a
/// single storage transaction.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The reservation request
/// * `actor` - The authenticated actor (recorded as `created_by`)
///
/// # Errors
///
/// * `InvalidInput` (400) for malformed guest/date fields, an oversized
///   party, or an unknown room
/// * `Conflict` (409) if a blocking reservation overlaps the range
pub fn create_reservation(
    persistence: &mut Persistence,
    request: &CreateReservationRequest,
    actor: &AuthenticatedActor,
) -> Result<ReservationInfo, ApiError> {
    AuthorizationService::authorize_front_desk(actor)?;

    if request.total_guests == 0 {
        return Err(translate_domain_error(DomainError::InvalidGuestCount {
            count: 0,
        }));
    }
    let guest: GuestProfile = parse_guest_details(&request.guest)?;
    let stay: StayRange = StayRange::parse(&request.check_in_date, &request.check_out_date)
        .map_err(translate_domain_error)?;

    let draft = ReservationDraft {
        room_id: request.room_id,
        guest,
        stay,
        total_guests: request.total_guests,
        special_requests: request.special_requests.clone(),
        created_by: actor.operator_id,
        created_at: now_rfc3339()?,
    };

    let reservation = persistence.create_reservation(&draft).map_err(|e| match e {
        // An unknown room is a validation failure of the request body,
        // not a missing addressable resource.
        PersistenceError::RoomNotFound(room_id) => ApiError::InvalidInput {
            field: String::from("room_id"),
            message: format!("Room {room_id} does not exist"),
        },
        other => translate_persistence_error(other),
    })?;

    Ok(ReservationInfo::from(reservation))
}

/// Confirms a pending reservation.
///
/// Explicitly unsupported: no code path in this system advances a
/// reservation to `confirmed`; confirmation happens out-of-band.
///
/// # Errors
///
/// Always returns `ApiError::NotImplemented`.
pub fn confirm_reservation(
    _persistence: &mut Persistence,
    reservation_id: i64,
    actor: &AuthenticatedActor,
) -> Result<ReservationInfo, ApiError> {
    AuthorizationService::authorize_front_desk(actor)?;
    info!(reservation_id, "Confirmation requested but unsupported");
    Err(ApiError::NotImplemented {
        operation: String::from("confirm_reservation"),
    })
}

/// Checks a guest in.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the reservation is absent or not
/// `confirmed`.
pub fn check_in_reservation(
    persistence: &mut Persistence,
    reservation_id: i64,
    actor: &AuthenticatedActor,
) -> Result<ReservationInfo, ApiError> {
    AuthorizationService::authorize_front_desk(actor)?;

    let now: String = now_rfc3339()?;
    persistence
        .check_in_reservation(reservation_id, &now)
        .map_err(translate_persistence_error)?
        .map(ReservationInfo::from)
        .ok_or_else(|| reservation_not_found(reservation_id))
}

/// Checks a guest out, applying additional charges exactly once.
///
/// # Errors
///
/// Returns `InvalidInput` for negative charges, or `ResourceNotFound`
/// if the reservation is absent or not `checked_in`.
pub fn check_out_reservation(
    persistence: &mut Persistence,
    reservation_id: i64,
    request: &CheckOutRequest,
    actor: &AuthenticatedActor,
) -> Result<ReservationInfo, ApiError> {
    AuthorizationService::authorize_front_desk(actor)?;

    validate_additional_charges(request.additional_charges_cents)
        .map_err(translate_domain_error)?;

    let now: String = now_rfc3339()?;
    persistence
        .check_out_reservation(reservation_id, request.additional_charges_cents, &now)
        .map_err(translate_persistence_error)?
        .map(ReservationInfo::from)
        .ok_or_else(|| reservation_not_found(reservation_id))
}

/// Cancels a pending reservation.
///
/// Cancellation is an elevated action restricted to Admin actors.
///
/// # Errors
///
/// Returns `Unauthorized` for non-Admin actors, or `ResourceNotFound`
/// if the reservation is absent or not `pending`.
pub fn cancel_reservation(
    persistence: &mut Persistence,
    reservation_id: i64,
    actor: &AuthenticatedActor,
) -> Result<ReservationInfo, ApiError> {
    AuthorizationService::authorize_cancel_reservation(actor)?;

    persistence
        .cancel_reservation(reservation_id)
        .map_err(translate_persistence_error)?
        .map(ReservationInfo::from)
        .ok_or_else(|| reservation_not_found(reservation_id))
}

/// Retrieves a reservation by ID.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the reservation does not exist.
pub fn get_reservation(
    persistence: &mut Persistence,
    reservation_id: i64,
) -> Result<ReservationInfo, ApiError> {
    persistence
        .get_reservation_by_id(reservation_id)
        .map_err(translate_persistence_error)?
        .map(ReservationInfo::from)
        .ok_or_else(|| reservation_not_found(reservation_id))
}

/// Lists reservations matching the query, newest check-in first.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status or malformed date.
pub fn list_reservations(
    persistence: &mut Persistence,
    request: &ListReservationsRequest,
) -> Result<Vec<ReservationInfo>, ApiError> {
    let status: Option<ReservationStatus> = request
        .status
        .as_deref()
        .map(ReservationStatus::from_str)
        .transpose()
        .map_err(translate_domain_error)?;
    let check_in_from = request
        .check_in_from
        .as_deref()
        .map(parse_iso_date)
        .transpose()
        .map_err(translate_domain_error)?;
    let check_in_until = request
        .check_in_until
        .as_deref()
        .map(parse_iso_date)
        .transpose()
        .map_err(translate_domain_error)?;

    let filter = ReservationFilter {
        status,
        room_id: request.room_id,
        guest_id: request.guest_id,
        check_in_from,
        check_in_until,
    };

    let reservations = persistence
        .list_reservations(&filter)
        .map_err(translate_persistence_error)?;
    Ok(reservations.into_iter().map(ReservationInfo::from).collect())
}

// ============================================================================
// Availability
// ============================================================================

/// Returns true if the room is free of blocking reservations for the
/// half-open range.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed dates.
pub fn check_room_availability(
    persistence: &mut Persistence,
    room_id: i64,
    check_in_date: &str,
    check_out_date: &str,
) -> Result<bool, ApiError> {
    let stay: StayRange =
        StayRange::parse(check_in_date, check_out_date).map_err(translate_domain_error)?;
    persistence
        .is_room_available(room_id, &stay)
        .map_err(translate_persistence_error)
}

/// Lists rooms available for the half-open range.
///
/// An empty list is a normal result, never an error.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed dates.
pub fn list_available_rooms(
    persistence: &mut Persistence,
    check_in_date: &str,
    check_out_date: &str,
) -> Result<AvailabilityResponse, ApiError> {
    let stay: StayRange =
        StayRange::parse(check_in_date, check_out_date).map_err(translate_domain_error)?;
    let rooms = persistence
        .find_available_rooms(&stay)
        .map_err(translate_persistence_error)?;

    Ok(AvailabilityResponse {
        check_in_date: check_in_date.to_string(),
        check_out_date: check_out_date.to_string(),
        rooms: rooms.into_iter().map(RoomInfo::from).collect(),
    })
}

// ============================================================================
// Rooms
// ============================================================================

/// Creates a room.
///
/// # Errors
///
/// Returns `Unauthorized` for non-Admin actors, `InvalidInput` for bad
/// fields, or `DomainRuleViolation` for a duplicate room number.
pub fn create_room(
    persistence: &mut Persistence,
    request: &CreateRoomRequest,
    actor: &AuthenticatedActor,
) -> Result<RoomInfo, ApiError> {
    AuthorizationService::authorize_manage_rooms(actor)?;

    let room: Room = Room::new(
        &request.room_number,
        &request.room_type,
        request.capacity,
        request.price_per_night_cents,
        request.amenities.clone(),
        request.floor,
    )
    .map_err(translate_domain_error)?;

    let created = persistence
        .create_room(&room)
        .map_err(translate_persistence_error)?;
    Ok(RoomInfo::from(created))
}

/// Updates a room's details.
///
/// Physical status cannot be changed here; it follows the reservation
/// lifecycle.
///
/// # Errors
///
/// Returns `Unauthorized` for non-Admin actors, `InvalidInput` for bad
/// fields, or `ResourceNotFound` for an unknown room.
pub fn update_room(
    persistence: &mut Persistence,
    room_id: i64,
    request: &UpdateRoomRequest,
    actor: &AuthenticatedActor,
) -> Result<RoomInfo, ApiError> {
    AuthorizationService::authorize_manage_rooms(actor)?;

    if request.capacity == Some(0) {
        return Err(translate_domain_error(DomainError::InvalidCapacity {
            capacity: 0,
        }));
    }
    if let Some(rate) = request.price_per_night_cents
        && rate < 0
    {
        return Err(translate_domain_error(DomainError::InvalidAmount {
            field: "price_per_night",
            amount_cents: rate,
        }));
    }

    let update = RoomDetailsUpdate {
        room_type: request.room_type.clone(),
        capacity: request.capacity,
        price_per_night_cents: request.price_per_night_cents,
        amenities: request.amenities.clone(),
        floor: request.floor,
    };

    persistence
        .update_room_details(room_id, &update)
        .map_err(translate_persistence_error)?
        .map(RoomInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room {room_id} does not exist"),
        })
}

/// Soft-deletes a room by retiring it to `maintenance`.
///
/// # Errors
///
/// Returns `Unauthorized` for non-Admin actors, `Conflict` while a
/// blocking reservation references the room, or `ResourceNotFound` for
/// an unknown room.
pub fn retire_room(
    persistence: &mut Persistence,
    room_id: i64,
    actor: &AuthenticatedActor,
) -> Result<RoomInfo, ApiError> {
    AuthorizationService::authorize_manage_rooms(actor)?;

    persistence
        .retire_room(room_id)
        .map_err(translate_persistence_error)?
        .map(RoomInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room {room_id} does not exist"),
        })
}

/// Retrieves a room by ID.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the room does not exist.
pub fn get_room(persistence: &mut Persistence, room_id: i64) -> Result<RoomInfo, ApiError> {
    persistence
        .get_room_by_id(room_id)
        .map_err(translate_persistence_error)?
        .map(RoomInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room {room_id} does not exist"),
        })
}

/// Lists all rooms ordered by room number.
///
/// # Errors
///
/// Returns an error if the listing fails.
pub fn list_rooms(persistence: &mut Persistence) -> Result<Vec<RoomInfo>, ApiError> {
    let rooms = persistence
        .list_rooms()
        .map_err(translate_persistence_error)?;
    Ok(rooms.into_iter().map(RoomInfo::from).collect())
}

// ============================================================================
// Guests
// ============================================================================

/// Retrieves a guest by ID.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the guest does not exist.
pub fn get_guest(persistence: &mut Persistence, guest_id: i64) -> Result<GuestInfo, ApiError> {
    persistence
        .get_guest_by_id(guest_id)
        .map_err(translate_persistence_error)?
        .map(GuestInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Guest"),
            message: format!("Guest {guest_id} does not exist"),
        })
}

/// Retrieves a guest by email (case-insensitive).
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed address or
/// `ResourceNotFound` if no guest has it.
pub fn get_guest_by_email(
    persistence: &mut Persistence,
    email: &str,
) -> Result<GuestInfo, ApiError> {
    let email: Email = Email::new(email).map_err(translate_domain_error)?;
    persistence
        .get_guest_by_email(&email)
        .map_err(translate_persistence_error)?
        .map(GuestInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Guest"),
            message: format!("No guest with email '{}'", email.value()),
        })
}

// ============================================================================
// Payments
// ============================================================================

/// Records a new pending payment against a reservation.
///
/// # Errors
///
/// Returns `InvalidInput` for a non-positive amount or unknown method,
/// or `ResourceNotFound` for an unknown reservation.
pub fn create_payment(
    persistence: &mut Persistence,
    request: &CreatePaymentRequest,
    actor: &AuthenticatedActor,
) -> Result<PaymentInfo, ApiError> {
    AuthorizationService::authorize_front_desk(actor)?;

    validate_payment_amount(request.amount_cents).map_err(translate_domain_error)?;
    let method: PaymentMethod =
        PaymentMethod::parse(&request.payment_method).map_err(translate_domain_error)?;

    let now: String = now_rfc3339()?;
    let payment = persistence
        .create_payment(request.reservation_id, request.amount_cents, method, &now)
        .map_err(translate_persistence_error)?;
    Ok(PaymentInfo::from(payment))
}

/// Marks a pending payment as paid; the reservation's aggregate
/// payment status is re-derived in the same transaction.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the payment is absent or not
/// `pending`.
pub fn process_payment(
    persistence: &mut Persistence,
    payment_id: i64,
    request: &ProcessPaymentRequest,
    actor: &AuthenticatedActor,
) -> Result<PaymentInfo, ApiError> {
    AuthorizationService::authorize_front_desk(actor)?;

    let now: String = now_rfc3339()?;
    persistence
        .process_payment(
            payment_id,
            request.transaction_id.as_deref(),
            actor.operator_id,
            &now,
        )
        .map_err(translate_persistence_error)?
        .map(PaymentInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Payment"),
            message: format!("Payment {payment_id} not found"),
        })
}

/// Refunds a paid payment; the reservation's aggregate payment status
/// is re-derived in the same transaction.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the payment is absent or not `paid`.
pub fn refund_payment(
    persistence: &mut Persistence,
    payment_id: i64,
    request: &RefundPaymentRequest,
    actor: &AuthenticatedActor,
) -> Result<PaymentInfo, ApiError> {
    AuthorizationService::authorize_front_desk(actor)?;

    if let Some(reason) = &request.reason {
        info!(payment_id, reason, "Refund requested");
    }

    let now: String = now_rfc3339()?;
    persistence
        .refund_payment(payment_id, actor.operator_id, &now)
        .map_err(translate_persistence_error)?
        .map(PaymentInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Payment"),
            message: format!("Payment {payment_id} not found"),
        })
}

/// Lists all payments recorded against a reservation, oldest first.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown reservation.
pub fn list_payments(
    persistence: &mut Persistence,
    reservation_id: i64,
) -> Result<Vec<PaymentInfo>, ApiError> {
    // Distinguish "no payments yet" from "no such reservation".
    persistence
        .get_reservation_by_id(reservation_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| reservation_not_found(reservation_id))?;

    let payments = persistence
        .list_payments_for_reservation(reservation_id)
        .map_err(translate_persistence_error)?;
    Ok(payments.into_iter().map(PaymentInfo::from).collect())
}

// ============================================================================
// Operators
// ============================================================================

/// Creates a new operator account.
///
/// # Errors
///
/// Returns `Unauthorized` for non-Admin actors,
/// `PasswordPolicyViolation` or `InvalidInput` for bad fields, or
/// `DomainRuleViolation` for a duplicate login name.
pub fn create_operator(
    persistence: &mut Persistence,
    request: &CreateOperatorRequest,
    actor: &AuthenticatedActor,
) -> Result<OperatorInfo, ApiError> {
    AuthorizationService::authorize_manage_operators(actor)?;

    let role: Role = Role::parse(&request.role).map_err(|_| ApiError::InvalidInput {
        field: String::from("role"),
        message: format!("Invalid role: {}", request.role),
    })?;
    PasswordPolicy::validate(&request.login_name, &request.password)?;

    let now: String = now_rfc3339()?;
    let operator = persistence
        .create_operator(
            &request.login_name,
            &request.display_name,
            &request.password,
            role.as_str(),
            &now,
        )
        .map_err(translate_persistence_error)?;
    Ok(OperatorInfo::from(operator))
}

/// Lists all operator accounts.
///
/// # Errors
///
/// Returns `Unauthorized` for non-Admin actors.
pub fn list_operators(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<Vec<OperatorInfo>, ApiError> {
    AuthorizationService::authorize_manage_operators(actor)?;

    let operators = persistence
        .list_operators()
        .map_err(translate_persistence_error)?;
    Ok(operators.into_iter().map(OperatorInfo::from).collect())
}
