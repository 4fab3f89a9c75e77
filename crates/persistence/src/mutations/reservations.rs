// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation lifecycle mutations.
//!
//! Each operation here is one transaction. Guards are conditional
//! UPDATEs (`WHERE status = '<expected>'`) checked by affected-row
//! count, so two concurrent check-in attempts on the same reservation
//! serialize to exactly one success. A zero-row guard result is
//! reported as `Ok(None)` — "absent" and "wrong state" are deliberately
//! indistinguishable to callers.
//!
//! Room status synchronization (occupied on check-in, cleaning on
//! check-out) is part of the same transaction as the reservation
//! update; a reservation can never flip without its room following.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use frontdesk_domain::{
    GuestProfile, Reservation, ReservationStatus, RoomStatus, StayRange, format_iso_date,
    validate_guest_count,
};

use crate::backend::PersistenceBackend;
use crate::data_models::{GuestRow, NewGuest, NewReservation, ReservationRow, RoomRow};
use crate::diesel_schema::{guests, reservations, rooms};
use crate::error::PersistenceError;
use crate::queries::availability::BLOCKING_STATUSES;

/// Everything needed to create a reservation.
///
/// The draft carries the validated guest profile rather than a guest ID:
/// reservation creation upserts the guest by email inside its own
/// transaction.
#[derive(Debug, Clone)]
pub struct ReservationDraft {
    /// The requested room.
    pub room_id: i64,
    /// The guest details (upserted by email).
    pub guest: GuestProfile,
    /// The requested stay.
    pub stay: StayRange,
    /// Party size.
    pub total_guests: u32,
    /// Free-form requests recorded at booking time.
    pub special_requests: Option<String>,
    /// The operator creating the booking.
    pub created_by: i64,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

backend_fn! {
/// Creates a reservation in `pending` status.
///
/// Runs entirely inside one transaction: room lookup, capacity guard,
/// availability guard, guest upsert, and the insert either all commit
/// or none do. Total amount is the room's nightly rate times the number
/// of nights.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `draft` - The validated booking request
///
/// # Errors
///
/// * `RoomNotFound` if the room does not exist
/// * `CapacityExceeded` if the party does not fit the room, regardless
///   of availability
/// * `RoomUnavailable` if a confirmed or checked-in reservation
///   overlaps the requested half-open range
/// * a database error otherwise
pub fn create_reservation(
    conn: &mut _,
    draft: &ReservationDraft,
) -> Result<Reservation, PersistenceError> {
    conn.transaction(|conn| {
        let room_row: Option<RoomRow> = rooms::table
            .filter(rooms::room_id.eq(draft.room_id))
            .select(RoomRow::as_select())
            .first(conn)
            .optional()?;
        let Some(room_row) = room_row else {
            return Err(PersistenceError::RoomNotFound(draft.room_id));
        };
        let room = room_row.into_domain()?;

        // Capacity guard comes first: an oversized party is rejected
        // regardless of availability.
        validate_guest_count(draft.total_guests, room.capacity).map_err(|e| match e {
            frontdesk_domain::DomainError::CapacityExceeded {
                requested,
                capacity,
            } => PersistenceError::CapacityExceeded {
                requested,
                capacity,
            },
            other => PersistenceError::Other(other.to_string()),
        })?;

        let check_in: String = format_iso_date(draft.stay.check_in());
        let check_out: String = format_iso_date(draft.stay.check_out());

        // A retired room keeps its row but takes no bookings.
        if room.status == RoomStatus::Maintenance {
            return Err(PersistenceError::RoomUnavailable {
                room_id: draft.room_id,
                check_in,
                check_out,
            });
        }

        let blocking: i64 = reservations::table
            .filter(reservations::room_id.eq(draft.room_id))
            .filter(reservations::status.eq_any(BLOCKING_STATUSES))
            .filter(reservations::check_in_date.lt(&check_out))
            .filter(reservations::check_out_date.gt(&check_in))
            .count()
            .get_result(conn)?;
        if blocking > 0 {
            return Err(PersistenceError::RoomUnavailable {
                room_id: draft.room_id,
                check_in,
                check_out,
            });
        }

        // Guest upsert by email, same policy as
        // mutations::guests::find_or_create_guest but inside this
        // transaction.
        let existing: Option<GuestRow> = guests::table
            .filter(guests::email.eq(draft.guest.email.value()))
            .select(GuestRow::as_select())
            .first(conn)
            .optional()?;
        let guest_id: i64 = if let Some(row) = existing {
            diesel::update(guests::table.filter(guests::guest_id.eq(row.guest_id)))
                .set((
                    guests::name.eq(draft.guest.name.clone()),
                    guests::phone.eq(draft.guest.phone.clone()),
                    guests::document.eq(draft.guest.document.clone()),
                    guests::nationality.eq(draft.guest.nationality.clone()),
                    guests::language_preference.eq(draft.guest.language_preference.clone()),
                ))
                .execute(conn)?;
            row.guest_id
        } else {
            let record = NewGuest {
                email: draft.guest.email.value().to_string(),
                name: draft.guest.name.clone(),
                phone: draft.guest.phone.clone(),
                document: draft.guest.document.clone(),
                nationality: draft.guest.nationality.clone(),
                language_preference: draft.guest.language_preference.clone(),
                created_at: draft.created_at.clone(),
            };
            diesel::insert_into(guests::table)
                .values(&record)
                .execute(conn)?;
            conn.last_insert_rowid()?
        };

        let record = NewReservation {
            guest_id,
            room_id: draft.room_id,
            check_in_date: check_in,
            check_out_date: check_out,
            total_guests: i32::try_from(draft.total_guests)
                .map_err(|_| PersistenceError::Other("Guest count out of range".to_string()))?,
            total_amount_cents: room.quote_cents(draft.stay.nights()),
            status: ReservationStatus::Pending.as_str().to_string(),
            payment_status: frontdesk_domain::PaymentStatus::Pending.as_str().to_string(),
            special_requests: draft.special_requests.clone(),
            created_by: draft.created_by,
            created_at: draft.created_at.clone(),
        };
        diesel::insert_into(reservations::table)
            .values(&record)
            .execute(conn)?;
        let reservation_id: i64 = conn.last_insert_rowid()?;

        let row: ReservationRow = reservations::table
            .filter(reservations::reservation_id.eq(reservation_id))
            .select(ReservationRow::as_select())
            .first(conn)?;
        info!(
            reservation_id,
            room_id = draft.room_id,
            guest_id,
            "Created reservation"
        );
        row.into_domain()
    })
}
}

backend_fn! {
/// Checks a guest in.
///
/// Guard: the reservation must currently be `confirmed`. The guard and
/// status write are a single conditional UPDATE; the room flips to
/// `occupied` in the same transaction and `actual_check_in` is stamped.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reservation_id` - The reservation to check in
/// * `now` - Arrival timestamp (ISO 8601)
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if the reservation is absent or not `confirmed`.
pub fn check_in_reservation(
    conn: &mut _,
    reservation_id: i64,
    now: &str,
) -> Result<Option<Reservation>, PersistenceError> {
    conn.transaction(|conn| {
        let updated: usize = diesel::update(
            reservations::table
                .filter(reservations::reservation_id.eq(reservation_id))
                .filter(reservations::status.eq(ReservationStatus::Confirmed.as_str())),
        )
        .set((
            reservations::status.eq(ReservationStatus::CheckedIn.as_str()),
            reservations::actual_check_in.eq(now),
        ))
        .execute(conn)?;
        if updated == 0 {
            debug!(reservation_id, "Check-in guard failed");
            return Ok(None);
        }

        let row: ReservationRow = reservations::table
            .filter(reservations::reservation_id.eq(reservation_id))
            .select(ReservationRow::as_select())
            .first(conn)?;

        diesel::update(rooms::table.filter(rooms::room_id.eq(row.room_id)))
            .set(rooms::status.eq(RoomStatus::Occupied.as_str()))
            .execute(conn)?;

        info!(reservation_id, room_id = row.room_id, "Checked in");
        row.into_domain().map(Some)
    })
}
}

backend_fn! {
/// Checks a guest out.
///
/// Guard: the reservation must currently be `checked_in`. Additional
/// charges (validated non-negative by the caller) are added to the
/// total exactly once, `actual_check_out` is stamped, and the room
/// flips to `cleaning` in the same transaction.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reservation_id` - The reservation to check out
/// * `additional_charges_cents` - Extra charges to add to the total
/// * `now` - Departure timestamp (ISO 8601)
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if the reservation is absent or not `checked_in`;
/// a second check-out is therefore a no-op.
pub fn check_out_reservation(
    conn: &mut _,
    reservation_id: i64,
    additional_charges_cents: i64,
    now: &str,
) -> Result<Option<Reservation>, PersistenceError> {
    conn.transaction(|conn| {
        let updated: usize = diesel::update(
            reservations::table
                .filter(reservations::reservation_id.eq(reservation_id))
                .filter(reservations::status.eq(ReservationStatus::CheckedIn.as_str())),
        )
        .set((
            reservations::status.eq(ReservationStatus::CheckedOut.as_str()),
            reservations::actual_check_out.eq(now),
            reservations::total_amount_cents
                .eq(reservations::total_amount_cents + additional_charges_cents),
        ))
        .execute(conn)?;
        if updated == 0 {
            debug!(reservation_id, "Check-out guard failed");
            return Ok(None);
        }

        let row: ReservationRow = reservations::table
            .filter(reservations::reservation_id.eq(reservation_id))
            .select(ReservationRow::as_select())
            .first(conn)?;

        diesel::update(rooms::table.filter(rooms::room_id.eq(row.room_id)))
            .set(rooms::status.eq(RoomStatus::Cleaning.as_str()))
            .execute(conn)?;

        info!(
            reservation_id,
            room_id = row.room_id,
            additional_charges_cents,
            "Checked out"
        );
        row.into_domain().map(Some)
    })
}
}

backend_fn! {
/// Cancels a reservation.
///
/// Guard: only `pending` reservations are cancellable. No side effects
/// on the room.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reservation_id` - The reservation to cancel
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if the reservation is absent or not `pending`.
pub fn cancel_reservation(
    conn: &mut _,
    reservation_id: i64,
) -> Result<Option<Reservation>, PersistenceError> {
    conn.transaction(|conn| {
        let updated: usize = diesel::update(
            reservations::table
                .filter(reservations::reservation_id.eq(reservation_id))
                .filter(reservations::status.eq(ReservationStatus::Pending.as_str())),
        )
        .set(reservations::status.eq(ReservationStatus::Cancelled.as_str()))
        .execute(conn)?;
        if updated == 0 {
            debug!(reservation_id, "Cancel guard failed");
            return Ok(None);
        }

        let row: ReservationRow = reservations::table
            .filter(reservations::reservation_id.eq(reservation_id))
            .select(ReservationRow::as_select())
            .first(conn)?;
        info!(reservation_id, "Cancelled reservation");
        row.into_domain().map(Some)
    })
}
}

backend_fn! {
/// Sets a reservation's status unconditionally, bypassing lifecycle
/// guards.
///
/// Nothing in the public HTTP surface reaches this: it exists for test
/// fixtures and operational corrections (notably seeding `confirmed`,
/// which no supported operation produces). Room status is not touched.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reservation_id` - The reservation to modify
/// * `status` - The status string to store
///
/// # Errors
///
/// Returns an error if the database operation fails.
///
/// # Returns
///
/// True if a row was updated.
pub fn force_reservation_status(
    conn: &mut _,
    reservation_id: i64,
    status: &str,
) -> Result<bool, PersistenceError> {
    let updated: usize = diesel::update(
        reservations::table.filter(reservations::reservation_id.eq(reservation_id)),
    )
    .set(reservations::status.eq(status))
    .execute(conn)?;
    Ok(updated > 0)
}
}
