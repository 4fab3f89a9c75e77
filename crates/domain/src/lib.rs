// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod payment_status;
mod reservation_status;
mod stay_range;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use payment_status::{PaymentStatus, reconcile_payment_status};
pub use reservation_status::ReservationStatus;
pub use stay_range::{StayRange, format_iso_date, parse_iso_date};
pub use types::{
    Email, Guest, GuestProfile, Payment, PaymentMethod, Reservation, Room, RoomStatus,
    validate_additional_charges, validate_guest_count, validate_payment_amount,
};
