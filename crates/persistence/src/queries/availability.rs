// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability queries.
//!
//! A room is available for a stay iff no reservation in a blocking
//! status (`confirmed`, `checked_in`) overlaps the requested range.
//! Ranges are half-open: `[a, b)` and `[c, d)` overlap iff
//! `a < d AND c < b`, which in SQL is
//! `check_in_date < :check_out AND check_out_date > :check_in`.
//! Lexicographic comparison is exact for ISO 8601 dates. A reservation
//! ending the day another begins is not a conflict.

use diesel::dsl::{exists, not};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use frontdesk_domain::{ReservationStatus, Room, RoomStatus};

use crate::data_models::RoomRow;
use crate::diesel_schema::{reservations, rooms};
use crate::error::PersistenceError;

/// Reservation statuses that block a room for their stay range.
pub(crate) const BLOCKING_STATUSES: &[&str] = &[
    ReservationStatus::Confirmed.as_str(),
    ReservationStatus::CheckedIn.as_str(),
];

backend_fn! {
/// Counts blocking reservations overlapping `[check_in, check_out)` for
/// a room.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room to check
/// * `check_in` - Requested check-in date (ISO 8601)
/// * `check_out` - Requested check-out date (ISO 8601)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_blocking_reservations(
    conn: &mut _,
    room_id: i64,
    check_in: &str,
    check_out: &str,
) -> Result<i64, PersistenceError> {
    reservations::table
        .filter(reservations::room_id.eq(room_id))
        .filter(reservations::status.eq_any(BLOCKING_STATUSES))
        .filter(reservations::check_in_date.lt(check_out))
        .filter(reservations::check_out_date.gt(check_in))
        .count()
        .get_result(conn)
        .map_err(Into::into)
}
}

backend_fn! {
/// Returns true if a room is free of blocking reservations for the
/// requested range.
///
/// Read-only; the room's own status and existence are not considered
/// here (reservation creation checks both inside its transaction).
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_room_available(
    conn: &mut _,
    room_id: i64,
    check_in: &str,
    check_out: &str,
) -> Result<bool, PersistenceError> {
    let blocking: i64 = reservations::table
        .filter(reservations::room_id.eq(room_id))
        .filter(reservations::status.eq_any(BLOCKING_STATUSES))
        .filter(reservations::check_in_date.lt(check_out))
        .filter(reservations::check_out_date.gt(check_in))
        .count()
        .get_result(conn)?;

    Ok(blocking == 0)
}
}

backend_fn! {
/// Lists rooms available for the requested range, ordered by room
/// number.
///
/// Rooms retired to `maintenance` are excluded regardless of overlap.
/// An empty result is a normal outcome, not an error.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_available_rooms(
    conn: &mut _,
    check_in: &str,
    check_out: &str,
) -> Result<Vec<Room>, PersistenceError> {
    let rows: Vec<RoomRow> = rooms::table
        .filter(rooms::status.ne(RoomStatus::Maintenance.as_str()))
        .filter(not(exists(
            reservations::table
                .filter(reservations::room_id.eq(rooms::room_id))
                .filter(reservations::status.eq_any(BLOCKING_STATUSES))
                .filter(reservations::check_in_date.lt(check_out))
                .filter(reservations::check_out_date.gt(check_in)),
        )))
        .select(RoomRow::as_select())
        .order(rooms::room_number.asc())
        .load(conn)?;

    rows.into_iter().map(RoomRow::into_domain).collect()
}
}
