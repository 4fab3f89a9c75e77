// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::payment_status::PaymentStatus;
use crate::reservation_status::ReservationStatus;
use crate::stay_range::StayRange;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a guest's email address.
///
/// Email is the sole upsert key for guests. Addresses are normalized to
/// lowercase to ensure case-insensitive uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email {
    /// The normalized address.
    value: String,
}

impl Email {
    /// Creates a new `Email`, normalizing to lowercase.
    ///
    /// # Arguments
    ///
    /// * `value` - The address (will be trimmed and lowercased)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmail` if the address is empty or
    /// has no `@` separating a local part and a domain.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let normalized: String = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidEmail(String::from(
                "email must not be empty",
            )));
        }
        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(DomainError::InvalidEmail(format!(
                "'{normalized}' is missing '@'"
            )));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(DomainError::InvalidEmail(format!(
                "'{normalized}' is not a valid address"
            )));
        }
        Ok(Self { value: normalized })
    }

    /// Returns the normalized address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Physical status of a room.
///
/// Status is driven by reservation transitions (check-in, check-out,
/// retire) — never by the client-facing room update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// Ready to be booked and occupied.
    #[default]
    Available,
    /// A checked-in reservation currently holds the room.
    Occupied,
    /// Out of service; also the soft-deleted state.
    Maintenance,
    /// Being turned over after a check-out.
    Cleaning,
}

impl RoomStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::Cleaning => "cleaning",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoomStatus` if the string is not a
    /// valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            "cleaning" => Ok(Self::Cleaning),
            _ => Err(DomainError::InvalidRoomStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// Accepted payment methods.
///
/// Methods are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash at the desk.
    Cash,
    /// Credit card.
    CreditCard,
    /// Debit card.
    DebitCard,
    /// Bank transfer.
    BankTransfer,
}

impl PaymentMethod {
    /// Returns the string representation of this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CreditCard => "credit_card",
            Self::DebitCard => "debit_card",
            Self::BankTransfer => "bank_transfer",
        }
    }

    /// Parses a payment method from a string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPaymentMethod` if the string does
    /// not match a valid method.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "cash" => Ok(Self::Cash),
            "credit_card" => Ok(Self::CreditCard),
            "debit_card" => Ok(Self::DebitCard),
            "bank_transfer" => Ok(Self::BankTransfer),
            _ => Err(DomainError::InvalidPaymentMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Represents a bookable room.
///
/// `room_id` is the canonical internal identifier; `room_number` is the
/// human-facing label and is unique across the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Canonical internal identifier.
    /// `None` indicates the room has not been persisted yet.
    pub room_id: Option<i64>,
    /// The display number (e.g., "101"), unique per property.
    pub room_number: String,
    /// The room category (e.g., "double", "suite").
    pub room_type: String,
    /// Maximum party size.
    pub capacity: u32,
    /// Nightly rate in cents.
    pub price_per_night_cents: i64,
    /// Physical status.
    pub status: RoomStatus,
    /// Amenity labels.
    pub amenities: Vec<String>,
    /// Floor the room is on.
    pub floor: i32,
}

impl Room {
    /// Creates a new `Room` without a persisted `room_id`.
    ///
    /// # Arguments
    ///
    /// * `room_number` - The display number
    /// * `room_type` - The room category
    /// * `capacity` - Maximum party size
    /// * `price_per_night_cents` - Nightly rate in cents
    /// * `amenities` - Amenity labels
    /// * `floor` - Floor the room is on
    ///
    /// # Errors
    ///
    /// Returns an error if the room number is empty, the capacity is
    /// zero, or the rate is negative.
    pub fn new(
        room_number: &str,
        room_type: &str,
        capacity: u32,
        price_per_night_cents: i64,
        amenities: Vec<String>,
        floor: i32,
    ) -> Result<Self, DomainError> {
        let room_number = room_number.trim();
        if room_number.is_empty() {
            return Err(DomainError::InvalidRoomNumber(String::from(
                "room number must not be empty",
            )));
        }
        if capacity == 0 {
            return Err(DomainError::InvalidCapacity { capacity: 0 });
        }
        if price_per_night_cents < 0 {
            return Err(DomainError::InvalidAmount {
                field: "price_per_night",
                amount_cents: price_per_night_cents,
            });
        }
        Ok(Self {
            room_id: None,
            room_number: room_number.to_string(),
            room_type: room_type.to_string(),
            capacity,
            price_per_night_cents,
            status: RoomStatus::Available,
            amenities,
            floor,
        })
    }

    /// Returns the total charge in cents for a stay of `nights` nights.
    #[must_use]
    pub const fn quote_cents(&self, nights: i64) -> i64 {
        self.price_per_night_cents * nights
    }
}

/// Guest contact details supplied with a reservation.
///
/// This is the upsert payload: reservation creation is the only
/// booking-tied entry point that creates or updates guests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestProfile {
    /// The guest's name.
    pub name: String,
    /// The guest's email (upsert key).
    pub email: Email,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Identity document reference.
    pub document: Option<String>,
    /// Nationality.
    pub nationality: Option<String>,
    /// Preferred language for communication.
    pub language_preference: Option<String>,
}

impl GuestProfile {
    /// Creates a new `GuestProfile`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuestName` if the name is empty.
    pub fn new(
        name: &str,
        email: Email,
        phone: Option<String>,
        document: Option<String>,
        nationality: Option<String>,
        language_preference: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidGuestName(String::from(
                "guest name must not be empty",
            )));
        }
        Ok(Self {
            name: name.to_string(),
            email,
            phone,
            document,
            nationality,
            language_preference,
        })
    }
}

/// A persisted guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Canonical internal identifier.
    pub guest_id: i64,
    /// Contact details.
    pub profile: GuestProfile,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// A persisted reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Canonical internal identifier.
    pub reservation_id: i64,
    /// The guest who holds the booking.
    pub guest_id: i64,
    /// The booked room.
    pub room_id: i64,
    /// The booked stay range.
    pub stay: StayRange,
    /// When the guest actually arrived (ISO 8601), if checked in.
    pub actual_check_in: Option<String>,
    /// When the guest actually departed (ISO 8601), if checked out.
    pub actual_check_out: Option<String>,
    /// Party size.
    pub total_guests: u32,
    /// Total charge in cents: nightly rate × nights at creation, plus
    /// additional charges applied exactly once at check-out.
    pub total_amount_cents: i64,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Derived aggregate over this reservation's payments.
    pub payment_status: PaymentStatus,
    /// Free-form requests recorded at booking time.
    pub special_requests: Option<String>,
    /// The operator who created the booking.
    pub created_by: i64,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// A persisted payment against a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Canonical internal identifier.
    pub payment_id: i64,
    /// The reservation this payment settles.
    pub reservation_id: i64,
    /// Amount in cents.
    pub amount_cents: i64,
    /// How the payment is made.
    pub payment_method: PaymentMethod,
    /// External processor reference, set when processed.
    pub transaction_id: Option<String>,
    /// Lifecycle status.
    pub status: PaymentStatus,
    /// The operator who processed or refunded the payment.
    pub processed_by: Option<i64>,
    /// When the payment was processed or refunded (ISO 8601).
    pub processed_at: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// Validates a requested party size against a room's capacity.
///
/// # Errors
///
/// Returns `DomainError::InvalidGuestCount` for a zero party and
/// `DomainError::CapacityExceeded` when the party does not fit,
/// regardless of availability.
pub const fn validate_guest_count(total_guests: u32, capacity: u32) -> Result<(), DomainError> {
    if total_guests == 0 {
        return Err(DomainError::InvalidGuestCount {
            count: total_guests,
        });
    }
    if total_guests > capacity {
        return Err(DomainError::CapacityExceeded {
            requested: total_guests,
            capacity,
        });
    }
    Ok(())
}

/// Validates additional charges applied at check-out.
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` if the amount is negative.
pub const fn validate_additional_charges(amount_cents: i64) -> Result<(), DomainError> {
    if amount_cents < 0 {
        return Err(DomainError::InvalidAmount {
            field: "additional_charges",
            amount_cents,
        });
    }
    Ok(())
}

/// Validates a payment amount.
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` if the amount is not positive.
pub const fn validate_payment_amount(amount_cents: i64) -> Result<(), DomainError> {
    if amount_cents <= 0 {
        return Err(DomainError::InvalidAmount {
            field: "amount",
            amount_cents,
        });
    }
    Ok(())
}
