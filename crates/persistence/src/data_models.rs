// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row and insert structs bridging Diesel and the domain types.
//!
//! Queryable row structs mirror the table layout exactly; `into_domain`
//! converters re-validate stored strings (statuses, dates, amenity JSON)
//! so a corrupt row surfaces as a `SerializationError` instead of a
//! panic.

use diesel::prelude::*;
use std::str::FromStr;

use frontdesk_domain::{
    Email, Guest, GuestProfile, Payment, PaymentMethod, PaymentStatus, Reservation,
    ReservationStatus, Room, RoomStatus, StayRange,
};

use crate::diesel_schema::{guests, operators, payments, reservations, rooms, sessions};
use crate::error::PersistenceError;

/// Formats a corrupt-row error with enough context to locate the row.
fn corrupt(entity: &str, id: i64, err: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::SerializationError(format!("{entity} {id}: {err}"))
}

// ── Rooms ───────────────────────────────────────────────────────────────

/// Diesel Queryable struct for room rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = rooms)]
pub(crate) struct RoomRow {
    pub room_id: i64,
    pub room_number: String,
    pub room_type: String,
    pub capacity: i32,
    pub price_per_night_cents: i64,
    pub status: String,
    pub amenities: String,
    pub floor: i32,
}

impl RoomRow {
    /// Converts a stored row into the domain `Room`.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if the stored status or amenity
    /// JSON is not valid.
    pub fn into_domain(self) -> Result<Room, PersistenceError> {
        let status: RoomStatus =
            RoomStatus::from_str(&self.status).map_err(|e| corrupt("room", self.room_id, e))?;
        let amenities: Vec<String> = serde_json::from_str(&self.amenities)
            .map_err(|e| corrupt("room", self.room_id, e))?;
        let capacity: u32 = u32::try_from(self.capacity)
            .map_err(|_| corrupt("room", self.room_id, "negative capacity"))?;
        Ok(Room {
            room_id: Some(self.room_id),
            room_number: self.room_number,
            room_type: self.room_type,
            capacity,
            price_per_night_cents: self.price_per_night_cents,
            status,
            amenities,
            floor: self.floor,
        })
    }
}

/// Diesel Insertable struct for new room rows.
#[derive(Insertable)]
#[diesel(table_name = rooms)]
pub(crate) struct NewRoom {
    pub room_number: String,
    pub room_type: String,
    pub capacity: i32,
    pub price_per_night_cents: i64,
    pub status: String,
    pub amenities: String,
    pub floor: i32,
}

// ── Guests ──────────────────────────────────────────────────────────────

/// Diesel Queryable struct for guest rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = guests)]
pub(crate) struct GuestRow {
    pub guest_id: i64,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub nationality: Option<String>,
    pub language_preference: Option<String>,
    pub created_at: String,
}

impl GuestRow {
    /// Converts a stored row into the domain `Guest`.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if the stored email or name no
    /// longer passes domain validation.
    pub fn into_domain(self) -> Result<Guest, PersistenceError> {
        let email: Email =
            Email::new(&self.email).map_err(|e| corrupt("guest", self.guest_id, e))?;
        let profile: GuestProfile = GuestProfile::new(
            &self.name,
            email,
            self.phone,
            self.document,
            self.nationality,
            self.language_preference,
        )
        .map_err(|e| corrupt("guest", self.guest_id, e))?;
        Ok(Guest {
            guest_id: self.guest_id,
            profile,
            created_at: self.created_at,
        })
    }
}

/// Diesel Insertable struct for new guest rows.
#[derive(Insertable)]
#[diesel(table_name = guests)]
pub(crate) struct NewGuest {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub nationality: Option<String>,
    pub language_preference: Option<String>,
    pub created_at: String,
}

// ── Reservations ────────────────────────────────────────────────────────

/// Diesel Queryable struct for reservation rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = reservations)]
pub(crate) struct ReservationRow {
    pub reservation_id: i64,
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub actual_check_in: Option<String>,
    pub actual_check_out: Option<String>,
    pub total_guests: i32,
    pub total_amount_cents: i64,
    pub status: String,
    pub payment_status: String,
    pub special_requests: Option<String>,
    pub created_by: i64,
    pub created_at: String,
}

impl ReservationRow {
    /// Converts a stored row into the domain `Reservation`.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if stored dates or statuses are
    /// not valid.
    pub fn into_domain(self) -> Result<Reservation, PersistenceError> {
        let id: i64 = self.reservation_id;
        let stay: StayRange = StayRange::parse(&self.check_in_date, &self.check_out_date)
            .map_err(|e| corrupt("reservation", id, e))?;
        let status: ReservationStatus =
            ReservationStatus::from_str(&self.status).map_err(|e| corrupt("reservation", id, e))?;
        let payment_status: PaymentStatus = PaymentStatus::from_str(&self.payment_status)
            .map_err(|e| corrupt("reservation", id, e))?;
        let total_guests: u32 = u32::try_from(self.total_guests)
            .map_err(|_| corrupt("reservation", id, "negative guest count"))?;
        Ok(Reservation {
            reservation_id: id,
            guest_id: self.guest_id,
            room_id: self.room_id,
            stay,
            actual_check_in: self.actual_check_in,
            actual_check_out: self.actual_check_out,
            total_guests,
            total_amount_cents: self.total_amount_cents,
            status,
            payment_status,
            special_requests: self.special_requests,
            created_by: self.created_by,
            created_at: self.created_at,
        })
    }
}

/// Diesel Insertable struct for new reservation rows.
#[derive(Insertable)]
#[diesel(table_name = reservations)]
pub(crate) struct NewReservation {
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub total_guests: i32,
    pub total_amount_cents: i64,
    pub status: String,
    pub payment_status: String,
    pub special_requests: Option<String>,
    pub created_by: i64,
    pub created_at: String,
}

// ── Payments ────────────────────────────────────────────────────────────

/// Diesel Queryable struct for payment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = payments)]
pub(crate) struct PaymentRow {
    pub payment_id: i64,
    pub reservation_id: i64,
    pub amount_cents: i64,
    pub payment_method: String,
    pub transaction_id: Option<String>,
    pub status: String,
    pub processed_by: Option<i64>,
    pub processed_at: Option<String>,
    pub created_at: String,
}

impl PaymentRow {
    /// Converts a stored row into the domain `Payment`.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if the stored method or status is
    /// not valid.
    pub fn into_domain(self) -> Result<Payment, PersistenceError> {
        let id: i64 = self.payment_id;
        let payment_method: PaymentMethod =
            PaymentMethod::parse(&self.payment_method).map_err(|e| corrupt("payment", id, e))?;
        let status: PaymentStatus =
            PaymentStatus::from_str(&self.status).map_err(|e| corrupt("payment", id, e))?;
        Ok(Payment {
            payment_id: id,
            reservation_id: self.reservation_id,
            amount_cents: self.amount_cents,
            payment_method,
            transaction_id: self.transaction_id,
            status,
            processed_by: self.processed_by,
            processed_at: self.processed_at,
            created_at: self.created_at,
        })
    }
}

/// Diesel Insertable struct for new payment rows.
#[derive(Insertable)]
#[diesel(table_name = payments)]
pub(crate) struct NewPayment {
    pub reservation_id: i64,
    pub amount_cents: i64,
    pub payment_method: String,
    pub status: String,
    pub created_at: String,
}

// ── Operators & sessions ────────────────────────────────────────────────

/// Operator account data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorData {
    pub operator_id: i64,
    pub login_name: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: String,
    pub is_disabled: bool,
    pub created_at: String,
    pub disabled_at: Option<String>,
    pub last_login_at: Option<String>,
}

/// Session data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub operator_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// Diesel Insertable struct for new operator rows.
#[derive(Insertable)]
#[diesel(table_name = operators)]
pub(crate) struct NewOperator {
    pub login_name: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: String,
    pub is_disabled: i32,
    pub created_at: String,
}

/// Diesel Insertable struct for new session rows.
#[derive(Insertable)]
#[diesel(table_name = sessions)]
pub(crate) struct NewSession {
    pub session_token: String,
    pub operator_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}
