// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment states and the aggregate reconciliation policy.
//!
//! The same status vocabulary serves two levels. Individual payment rows
//! move `pending → paid → refunded` under operator action. A
//! reservation's `payment_status` is a derived aggregate over its
//! payments, recomputed by `reconcile_payment_status` whenever a payment
//! is processed or refunded — never maintained as a live view.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Payment states, used for both individual payments and the derived
/// reservation-level aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// No settled amount.
    Pending,
    /// Settled in full.
    Paid,
    /// Aggregate only: some, but not all, of the total is settled.
    PartiallyPaid,
    /// Returned to the payer.
    Refunded,
}

impl PaymentStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::PartiallyPaid => "partially_paid",
            Self::Refunded => "refunded",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPaymentStatus` if the string is not
    /// a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "partially_paid" => Ok(Self::PartiallyPaid),
            "refunded" => Ok(Self::Refunded),
            _ => Err(DomainError::InvalidPaymentStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if a payment in this status counts toward the
    /// settled sum during reconciliation.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Paid | Self::PartiallyPaid)
    }

    /// Validates an individual payment's transition to another status.
    ///
    /// Permitted: `pending → paid` (process) and `paid → refunded`
    /// (refund). The aggregate-only `partially_paid` is never a valid
    /// individual payment target.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        let valid = match self {
            Self::Pending => matches!(new_status, Self::Paid),
            Self::Paid => matches!(new_status, Self::Refunded),
            Self::PartiallyPaid | Self::Refunded => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by payment lifecycle rules".to_string(),
            })
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// Derives a reservation's aggregate payment status from its settled sum.
///
/// * settled == 0 ⇒ `pending`
/// * settled ≥ total ⇒ `paid`
/// * otherwise ⇒ `partially_paid`
///
/// The zero-settled case applies on both the process and refund paths,
/// so a zero-total reservation with no settled payments reads `pending`,
/// never `partially_paid`.
#[must_use]
pub const fn reconcile_payment_status(total_cents: i64, settled_cents: i64) -> PaymentStatus {
    if settled_cents == 0 {
        PaymentStatus::Pending
    } else if settled_cents >= total_cents {
        PaymentStatus::Paid
    } else {
        PaymentStatus::PartiallyPaid
    }
}
