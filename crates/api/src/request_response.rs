// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! DTOs are distinct from domain types and carry strings where the
//! domain carries validated types; handlers own the translation in both
//! directions. Dates are ISO 8601 calendar dates, timestamps RFC 3339,
//! and monetary amounts integer cents.

use serde::{Deserialize, Serialize};

use frontdesk_domain::{Guest, Payment, Reservation, Room, format_iso_date};
use frontdesk_persistence::OperatorData;

/// API request to log an operator in.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
    /// The operator's login name (case-insensitive).
    pub login_name: String,
    /// The operator's password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    /// The bearer token for subsequent requests.
    pub session_token: String,
    /// The operator's login name.
    pub login_name: String,
    /// The operator's display name.
    pub display_name: String,
    /// The operator's role.
    pub role: String,
    /// Session expiration timestamp (RFC 3339).
    pub expires_at: String,
}

/// API response describing the current operator.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhoAmIResponse {
    /// The operator's login name.
    pub login_name: String,
    /// The operator's display name.
    pub display_name: String,
    /// The operator's role.
    pub role: String,
}

/// Guest contact details supplied with a reservation request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GuestDetails {
    /// The guest's name.
    pub name: String,
    /// The guest's email (upsert key, case-insensitive).
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Identity document reference.
    #[serde(default)]
    pub document: Option<String>,
    /// Nationality.
    #[serde(default)]
    pub nationality: Option<String>,
    /// Preferred language for communication.
    #[serde(default)]
    pub language_preference: Option<String>,
}

/// API request to create a reservation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateReservationRequest {
    /// The requested room.
    pub room_id: i64,
    /// The guest holding the booking.
    pub guest: GuestDetails,
    /// Check-in date (ISO 8601).
    pub check_in_date: String,
    /// Check-out date (ISO 8601, exclusive).
    pub check_out_date: String,
    /// Party size.
    pub total_guests: u32,
    /// Free-form requests recorded at booking time.
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// API request to check a guest out.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckOutRequest {
    /// Additional charges in cents (minibar, damages). Defaults to 0.
    #[serde(default)]
    pub additional_charges_cents: i64,
}

/// Query criteria for listing reservations.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListReservationsRequest {
    /// Only reservations in this lifecycle status.
    #[serde(default)]
    pub status: Option<String>,
    /// Only reservations for this room.
    #[serde(default)]
    pub room_id: Option<i64>,
    /// Only reservations held by this guest.
    #[serde(default)]
    pub guest_id: Option<i64>,
    /// Only reservations checking in on or after this date (ISO 8601).
    #[serde(default)]
    pub check_in_from: Option<String>,
    /// Only reservations checking in strictly before this date
    /// (ISO 8601).
    #[serde(default)]
    pub check_in_until: Option<String>,
}

/// Serializable representation of a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReservationInfo {
    /// The canonical identifier.
    pub reservation_id: i64,
    /// The guest holding the booking.
    pub guest_id: i64,
    /// The booked room.
    pub room_id: i64,
    /// Check-in date (ISO 8601).
    pub check_in_date: String,
    /// Check-out date (ISO 8601, exclusive).
    pub check_out_date: String,
    /// Actual arrival timestamp, if checked in.
    pub actual_check_in: Option<String>,
    /// Actual departure timestamp, if checked out.
    pub actual_check_out: Option<String>,
    /// Party size.
    pub total_guests: u32,
    /// Total charge in cents.
    pub total_amount_cents: i64,
    /// Lifecycle status.
    pub status: String,
    /// Derived aggregate payment status.
    pub payment_status: String,
    /// Free-form requests recorded at booking time.
    pub special_requests: Option<String>,
    /// The operator who created the booking.
    pub created_by: i64,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<Reservation> for ReservationInfo {
    fn from(reservation: Reservation) -> Self {
        Self {
            reservation_id: reservation.reservation_id,
            guest_id: reservation.guest_id,
            room_id: reservation.room_id,
            check_in_date: format_iso_date(reservation.stay.check_in()),
            check_out_date: format_iso_date(reservation.stay.check_out()),
            actual_check_in: reservation.actual_check_in,
            actual_check_out: reservation.actual_check_out,
            total_guests: reservation.total_guests,
            total_amount_cents: reservation.total_amount_cents,
            status: reservation.status.as_str().to_string(),
            payment_status: reservation.payment_status.as_str().to_string(),
            special_requests: reservation.special_requests,
            created_by: reservation.created_by,
            created_at: reservation.created_at,
        }
    }
}

/// API request to create a room.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateRoomRequest {
    /// The display number (unique per property).
    pub room_number: String,
    /// The room category.
    pub room_type: String,
    /// Maximum party size.
    pub capacity: u32,
    /// Nightly rate in cents.
    pub price_per_night_cents: i64,
    /// Amenity labels.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Floor the room is on.
    #[serde(default)]
    pub floor: i32,
}

/// API request to update a room's details.
///
/// Physical status is deliberately not part of this contract; it is
/// driven by the reservation lifecycle.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateRoomRequest {
    /// New room category.
    #[serde(default)]
    pub room_type: Option<String>,
    /// New maximum party size.
    #[serde(default)]
    pub capacity: Option<u32>,
    /// New nightly rate in cents.
    #[serde(default)]
    pub price_per_night_cents: Option<i64>,
    /// New amenity labels.
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    /// New floor.
    #[serde(default)]
    pub floor: Option<i32>,
}

/// Serializable representation of a room.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoomInfo {
    /// The canonical identifier.
    pub room_id: i64,
    /// The display number.
    pub room_number: String,
    /// The room category.
    pub room_type: String,
    /// Maximum party size.
    pub capacity: u32,
    /// Nightly rate in cents.
    pub price_per_night_cents: i64,
    /// Physical status.
    pub status: String,
    /// Amenity labels.
    pub amenities: Vec<String>,
    /// Floor the room is on.
    pub floor: i32,
}

impl From<Room> for RoomInfo {
    fn from(room: Room) -> Self {
        Self {
            room_id: room.room_id.unwrap_or_default(),
            room_number: room.room_number,
            room_type: room.room_type,
            capacity: room.capacity,
            price_per_night_cents: room.price_per_night_cents,
            status: room.status.as_str().to_string(),
            amenities: room.amenities,
            floor: room.floor,
        }
    }
}

/// API response for an availability query.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AvailabilityResponse {
    /// The queried check-in date (ISO 8601).
    pub check_in_date: String,
    /// The queried check-out date (ISO 8601, exclusive).
    pub check_out_date: String,
    /// Rooms free of blocking reservations for the range.
    pub rooms: Vec<RoomInfo>,
}

/// Serializable representation of a guest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuestInfo {
    /// The canonical identifier.
    pub guest_id: i64,
    /// The guest's name.
    pub name: String,
    /// The guest's email.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Identity document reference.
    pub document: Option<String>,
    /// Nationality.
    pub nationality: Option<String>,
    /// Preferred language for communication.
    pub language_preference: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<Guest> for GuestInfo {
    fn from(guest: Guest) -> Self {
        Self {
            guest_id: guest.guest_id,
            name: guest.profile.name,
            email: guest.profile.email.value().to_string(),
            phone: guest.profile.phone,
            document: guest.profile.document,
            nationality: guest.profile.nationality,
            language_preference: guest.profile.language_preference,
            created_at: guest.created_at,
        }
    }
}

/// API request to record a payment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatePaymentRequest {
    /// The reservation the payment settles.
    pub reservation_id: i64,
    /// Amount in cents.
    pub amount_cents: i64,
    /// How the payment is made.
    pub payment_method: String,
}

/// API request to process a pending payment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProcessPaymentRequest {
    /// Optional external processor reference.
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// API request to refund a paid payment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RefundPaymentRequest {
    /// Optional free-form reason, recorded in the server log.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Serializable representation of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaymentInfo {
    /// The canonical identifier.
    pub payment_id: i64,
    /// The reservation this payment settles.
    pub reservation_id: i64,
    /// Amount in cents.
    pub amount_cents: i64,
    /// How the payment is made.
    pub payment_method: String,
    /// External processor reference, if processed.
    pub transaction_id: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// The operator who processed or refunded the payment.
    pub processed_by: Option<i64>,
    /// When the payment was processed or refunded.
    pub processed_at: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<Payment> for PaymentInfo {
    fn from(payment: Payment) -> Self {
        Self {
            payment_id: payment.payment_id,
            reservation_id: payment.reservation_id,
            amount_cents: payment.amount_cents,
            payment_method: payment.payment_method.as_str().to_string(),
            transaction_id: payment.transaction_id,
            status: payment.status.as_str().to_string(),
            processed_by: payment.processed_by,
            processed_at: payment.processed_at,
            created_at: payment.created_at,
        }
    }
}

/// API request to create an operator account.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateOperatorRequest {
    /// The login name (normalized to uppercase).
    pub login_name: String,
    /// The display name.
    pub display_name: String,
    /// The plaintext password (validated against the password policy).
    pub password: String,
    /// The role ("Admin" or "Receptionist").
    pub role: String,
}

/// Serializable representation of an operator.
///
/// The password hash never crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OperatorInfo {
    /// The canonical identifier.
    pub operator_id: i64,
    /// The login name.
    pub login_name: String,
    /// The display name.
    pub display_name: String,
    /// The role.
    pub role: String,
    /// Whether the account is disabled.
    pub is_disabled: bool,
    /// Creation timestamp.
    pub created_at: String,
    /// Last login timestamp, if any.
    pub last_login_at: Option<String>,
}

impl From<OperatorData> for OperatorInfo {
    fn from(operator: OperatorData) -> Self {
        Self {
            operator_id: operator.operator_id,
            login_name: operator.login_name,
            display_name: operator.display_name,
            role: operator.role,
            is_disabled: operator.is_disabled,
            created_at: operator.created_at,
            last_login_at: operator.last_login_at,
        }
    }
}
