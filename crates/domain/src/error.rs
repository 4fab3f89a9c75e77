// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Guest email address is empty or malformed.
    InvalidEmail(String),
    /// Guest name is empty or invalid.
    InvalidGuestName(String),
    /// Room number is empty or invalid.
    InvalidRoomNumber(String),
    /// Room capacity is outside the permitted range.
    InvalidCapacity {
        /// The invalid capacity value.
        capacity: i64,
    },
    /// A monetary amount is invalid (negative rate, non-positive payment).
    InvalidAmount {
        /// The field the amount was supplied for.
        field: &'static str,
        /// The invalid amount in cents.
        amount_cents: i64,
    },
    /// The requested party size exceeds the room's capacity.
    CapacityExceeded {
        /// The requested number of guests.
        requested: u32,
        /// The room's capacity.
        capacity: u32,
    },
    /// The requested party size is not a positive number.
    InvalidGuestCount {
        /// The invalid count value.
        count: u32,
    },
    /// Check-out does not fall strictly after check-in.
    InvalidStayRange {
        /// The check-in date (ISO 8601).
        check_in: String,
        /// The check-out date (ISO 8601).
        check_out: String,
    },
    /// A date string could not be parsed.
    DateParseError {
        /// The string that failed to parse.
        value: String,
        /// The underlying parse error.
        error: String,
    },
    /// Room status string is not a valid status.
    InvalidRoomStatus {
        /// The invalid status string.
        status: String,
    },
    /// Reservation status string is not a valid status.
    InvalidReservationStatus {
        /// The invalid status string.
        status: String,
    },
    /// Payment status string is not a valid status.
    InvalidPaymentStatus {
        /// The invalid status string.
        status: String,
    },
    /// Payment method string is not a valid method.
    InvalidPaymentMethod {
        /// The invalid method string.
        method: String,
    },
    /// A status transition is not permitted by the lifecycle rules.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidGuestName(msg) => write!(f, "Invalid guest name: {msg}"),
            Self::InvalidRoomNumber(msg) => write!(f, "Invalid room number: {msg}"),
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid room capacity: {capacity}. Must be at least 1")
            }
            Self::InvalidAmount {
                field,
                amount_cents,
            } => {
                write!(f, "Invalid amount for {field}: {amount_cents} cents")
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Party of {requested} exceeds room capacity of {capacity}"
                )
            }
            Self::InvalidGuestCount { count } => {
                write!(f, "Invalid guest count: {count}. Must be at least 1")
            }
            Self::InvalidStayRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out {check_out} must fall strictly after check-in {check_in}"
                )
            }
            Self::DateParseError { value, error } => {
                write!(f, "Failed to parse date '{value}': {error}")
            }
            Self::InvalidRoomStatus { status } => {
                write!(f, "Invalid room status: {status}")
            }
            Self::InvalidReservationStatus { status } => {
                write!(f, "Invalid reservation status: {status}")
            }
            Self::InvalidPaymentStatus { status } => {
                write!(f, "Invalid payment status: {status}")
            }
            Self::InvalidPaymentMethod { method } => {
                write!(f, "Invalid payment method: {method}")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition from '{from}' to '{to}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
