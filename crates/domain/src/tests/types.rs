// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used)]

use crate::error::DomainError;
use crate::types::{
    Email, GuestProfile, PaymentMethod, Room, RoomStatus, validate_additional_charges,
    validate_guest_count, validate_payment_amount,
};
use std::str::FromStr;

#[test]
fn test_email_normalizes_to_lowercase() {
    let email = Email::new("  Ada.Lovelace@Example.COM ").unwrap();
    assert_eq!(email.value(), "ada.lovelace@example.com");
}

#[test]
fn test_email_equality_is_case_insensitive_after_normalization() {
    let a = Email::new("guest@example.com").unwrap();
    let b = Email::new("GUEST@EXAMPLE.COM").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_email_rejects_malformed_addresses() {
    assert!(Email::new("").is_err());
    assert!(Email::new("no-at-sign").is_err());
    assert!(Email::new("@example.com").is_err());
    assert!(Email::new("guest@").is_err());
    assert!(Email::new("guest@nodot").is_err());
}

#[test]
fn test_room_new_defaults_to_available() {
    let room = Room::new("101", "double", 2, 12_000, vec![], 1).unwrap();
    assert_eq!(room.status, RoomStatus::Available);
    assert!(room.room_id.is_none());
}

#[test]
fn test_room_rejects_empty_number() {
    assert!(Room::new("  ", "double", 2, 12_000, vec![], 1).is_err());
}

#[test]
fn test_room_rejects_zero_capacity() {
    let result = Room::new("101", "double", 0, 12_000, vec![], 1);
    assert_eq!(result, Err(DomainError::InvalidCapacity { capacity: 0 }));
}

#[test]
fn test_room_rejects_negative_rate() {
    assert!(Room::new("101", "double", 2, -1, vec![], 1).is_err());
}

#[test]
fn test_room_quote_is_rate_times_nights() {
    let room = Room::new("101", "double", 2, 12_000, vec![], 1).unwrap();
    assert_eq!(room.quote_cents(2), 24_000);
    assert_eq!(room.quote_cents(0), 0);
}

#[test]
fn test_room_status_round_trip() {
    for status in [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Maintenance,
        RoomStatus::Cleaning,
    ] {
        assert_eq!(RoomStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(RoomStatus::from_str("out_of_order").is_err());
}

#[test]
fn test_guest_profile_rejects_empty_name() {
    let email = Email::new("guest@example.com").unwrap();
    assert!(GuestProfile::new("   ", email, None, None, None, None).is_err());
}

#[test]
fn test_guest_count_within_capacity() {
    assert!(validate_guest_count(2, 2).is_ok());
    assert!(validate_guest_count(1, 4).is_ok());
}

#[test]
fn test_guest_count_exceeding_capacity() {
    assert_eq!(
        validate_guest_count(3, 2),
        Err(DomainError::CapacityExceeded {
            requested: 3,
            capacity: 2,
        })
    );
}

#[test]
fn test_guest_count_zero_is_invalid() {
    assert!(validate_guest_count(0, 2).is_err());
}

#[test]
fn test_additional_charges_must_be_non_negative() {
    assert!(validate_additional_charges(0).is_ok());
    assert!(validate_additional_charges(5_000).is_ok());
    assert!(validate_additional_charges(-1).is_err());
}

#[test]
fn test_payment_amount_must_be_positive() {
    assert!(validate_payment_amount(1).is_ok());
    assert!(validate_payment_amount(0).is_err());
    assert!(validate_payment_amount(-500).is_err());
}

#[test]
fn test_payment_method_round_trip() {
    for method in [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::BankTransfer,
    ] {
        assert_eq!(PaymentMethod::parse(method.as_str()).unwrap(), method);
    }
    assert!(PaymentMethod::parse("cheque").is_err());
}
