// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation lifecycle states and transition rules.
//!
//! Transitions are monotonic along the booking lifecycle; the only
//! reverse-direction exit is cancellation, and only from `pending`.
//! Nothing in this crate advances a reservation to `confirmed` — that
//! step is performed out-of-band (see the API layer's `confirm`
//! operation, which is explicitly unsupported).

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states for a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Created, awaiting confirmation.
    Pending,
    /// Confirmed; blocks the room for its stay range.
    Confirmed,
    /// Guest is on the premises; blocks the room for its stay range.
    CheckedIn,
    /// Stay completed.
    CheckedOut,
    /// Cancelled before confirmation.
    Cancelled,
}

impl ReservationStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReservationStatus` if the string is
    /// not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidReservationStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition to
    /// another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled)
    }

    /// Returns true if a reservation in this status blocks the room's
    /// availability for its stay range.
    #[must_use]
    pub const fn blocks_availability(&self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid = match self {
            Self::Pending => matches!(new_status, Self::Confirmed | Self::Cancelled),
            Self::Confirmed => matches!(new_status, Self::CheckedIn),
            Self::CheckedIn => matches!(new_status, Self::CheckedOut),
            Self::CheckedOut | Self::Cancelled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by reservation lifecycle rules".to_string(),
            })
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
            ReservationStatus::Cancelled,
        ];

        for status in statuses {
            let s = status.as_str();
            match ReservationStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        assert!(ReservationStatus::parse_str("checked-in").is_err());
        assert!(ReservationStatus::parse_str("").is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ReservationStatus::Pending.is_terminal());
        assert!(!ReservationStatus::Confirmed.is_terminal());
        assert!(!ReservationStatus::CheckedIn.is_terminal());
        assert!(ReservationStatus::CheckedOut.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_blocking_states() {
        assert!(!ReservationStatus::Pending.blocks_availability());
        assert!(ReservationStatus::Confirmed.blocks_availability());
        assert!(ReservationStatus::CheckedIn.blocks_availability());
        assert!(!ReservationStatus::CheckedOut.blocks_availability());
        assert!(!ReservationStatus::Cancelled.blocks_availability());
    }

    #[test]
    fn test_valid_transitions() {
        assert!(
            ReservationStatus::Pending
                .validate_transition(ReservationStatus::Confirmed)
                .is_ok()
        );
        assert!(
            ReservationStatus::Pending
                .validate_transition(ReservationStatus::Cancelled)
                .is_ok()
        );
        assert!(
            ReservationStatus::Confirmed
                .validate_transition(ReservationStatus::CheckedIn)
                .is_ok()
        );
        assert!(
            ReservationStatus::CheckedIn
                .validate_transition(ReservationStatus::CheckedOut)
                .is_ok()
        );
    }

    #[test]
    fn test_no_state_skipping() {
        assert!(
            ReservationStatus::Pending
                .validate_transition(ReservationStatus::CheckedIn)
                .is_err()
        );
        assert!(
            ReservationStatus::Pending
                .validate_transition(ReservationStatus::CheckedOut)
                .is_err()
        );
        assert!(
            ReservationStatus::Confirmed
                .validate_transition(ReservationStatus::CheckedOut)
                .is_err()
        );
    }

    #[test]
    fn test_cancel_only_from_pending() {
        assert!(
            ReservationStatus::Confirmed
                .validate_transition(ReservationStatus::Cancelled)
                .is_err()
        );
        assert!(
            ReservationStatus::CheckedIn
                .validate_transition(ReservationStatus::Cancelled)
                .is_err()
        );
    }

    #[test]
    fn test_no_reverse_transitions() {
        assert!(
            ReservationStatus::Confirmed
                .validate_transition(ReservationStatus::Pending)
                .is_err()
        );
        assert!(
            ReservationStatus::CheckedIn
                .validate_transition(ReservationStatus::Confirmed)
                .is_err()
        );
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        for terminal in [ReservationStatus::CheckedOut, ReservationStatus::Cancelled] {
            assert!(
                terminal
                    .validate_transition(ReservationStatus::Pending)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(ReservationStatus::CheckedIn)
                    .is_err()
            );
        }
    }
}
