// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use frontdesk_domain::DomainError;
use frontdesk_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the
/// API contract: each variant corresponds to exactly one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed (401).
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission (403).
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated (400).
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided (400).
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found, or a lifecycle guard failed
    /// (404). The two cases are deliberately indistinguishable.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The request conflicts with existing state, e.g. an unavailable
    /// room (409).
    Conflict {
        /// The type of resource in conflict.
        resource_type: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// The operation is recognized but not supported (501).
    NotImplemented {
        /// The operation that is not supported.
        operation: String,
    },
    /// An internal error occurred (500).
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation (400).
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} conflict: {message}")
            }
            Self::NotImplemented { operation } => {
                write!(f, "Operation '{operation}' is not implemented")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not
/// leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidEmail(msg) => ApiError::InvalidInput {
            field: String::from("email"),
            message: msg,
        },
        DomainError::InvalidGuestName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidRoomNumber(msg) => ApiError::InvalidInput {
            field: String::from("room_number"),
            message: msg,
        },
        DomainError::InvalidCapacity { capacity } => ApiError::InvalidInput {
            field: String::from("capacity"),
            message: format!("Invalid room capacity: {capacity}. Must be at least 1"),
        },
        DomainError::InvalidAmount {
            field,
            amount_cents,
        } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Invalid amount: {amount_cents} cents"),
        },
        DomainError::CapacityExceeded {
            requested,
            capacity,
        } => ApiError::InvalidInput {
            field: String::from("total_guests"),
            message: format!("Party of {requested} exceeds room capacity of {capacity}"),
        },
        DomainError::InvalidGuestCount { count } => ApiError::InvalidInput {
            field: String::from("total_guests"),
            message: format!("Invalid guest count: {count}. Must be at least 1"),
        },
        DomainError::InvalidStayRange {
            check_in,
            check_out,
        } => ApiError::InvalidInput {
            field: String::from("check_out_date"),
            message: format!(
                "Check-out {check_out} must fall strictly after check-in {check_in}"
            ),
        },
        DomainError::DateParseError { value, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{value}': {error}"),
        },
        DomainError::InvalidRoomStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid room status: {status}"),
        },
        DomainError::InvalidReservationStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid reservation status: {status}"),
        },
        DomainError::InvalidPaymentStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid payment status: {status}"),
        },
        DomainError::InvalidPaymentMethod { method } => ApiError::InvalidInput {
            field: String::from("payment_method"),
            message: format!("Invalid payment method: {method}"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("status_lifecycle"),
                message: format!("Cannot transition from '{from}' to '{to}': {reason}"),
            }
        }
    }
}

/// Translates a persistence error into an API error.
///
/// This translation is explicit and ensures storage errors are not
/// leaked directly. Variants carrying request-level meaning (missing
/// rooms, overlap conflicts, capacity) map to their contract statuses;
/// everything else is an internal error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::RoomNotFound(room_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room {room_id} does not exist"),
        },
        PersistenceError::ReservationNotFound(reservation_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Reservation"),
            message: format!("Reservation {reservation_id} does not exist"),
        },
        PersistenceError::PaymentNotFound(payment_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Payment"),
            message: format!("Payment {payment_id} does not exist"),
        },
        PersistenceError::GuestNotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Guest"),
            message: msg,
        },
        PersistenceError::OperatorNotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Operator"),
            message: msg,
        },
        PersistenceError::RoomUnavailable {
            room_id,
            check_in,
            check_out,
        } => ApiError::Conflict {
            resource_type: String::from("Room"),
            message: format!("Room {room_id} is unavailable for [{check_in}, {check_out})"),
        },
        PersistenceError::RoomHasActiveReservations { room_id, active } => ApiError::Conflict {
            resource_type: String::from("Room"),
            message: format!(
                "Room {room_id} cannot be retired: {active} confirmed or checked-in reservation(s)"
            ),
        },
        PersistenceError::CapacityExceeded {
            requested,
            capacity,
        } => ApiError::InvalidInput {
            field: String::from("total_guests"),
            message: format!("Party of {requested} exceeds room capacity of {capacity}"),
        },
        PersistenceError::DuplicateRoomNumber(number) => ApiError::DomainRuleViolation {
            rule: String::from("unique_room_number"),
            message: format!("Room number '{number}' already exists"),
        },
        PersistenceError::DuplicateLoginName(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_login_name"),
            message: format!("Operator login name '{name}' already exists"),
        },
        PersistenceError::SessionNotFound(msg) | PersistenceError::SessionExpired(msg) => {
            ApiError::AuthenticationFailed { reason: msg }
        }
        other => ApiError::Internal {
            message: format!("Storage error: {other}"),
        },
    }
}
