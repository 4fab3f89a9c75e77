// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation queries.
//!
//! Listing uses a typed filter object applied through Diesel's boxed
//! query builder, so every criterion is a bound parameter — there is no
//! string-assembled SQL anywhere in this crate.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use frontdesk_domain::{Reservation, ReservationStatus, format_iso_date};
use time::Date;

use crate::data_models::ReservationRow;
use crate::diesel_schema::reservations;
use crate::error::PersistenceError;

/// Typed criteria for listing reservations.
///
/// Unset fields do not constrain the result.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    /// Only reservations in this lifecycle status.
    pub status: Option<ReservationStatus>,
    /// Only reservations for this room.
    pub room_id: Option<i64>,
    /// Only reservations held by this guest.
    pub guest_id: Option<i64>,
    /// Only reservations checking in on or after this date.
    pub check_in_from: Option<Date>,
    /// Only reservations checking in strictly before this date.
    pub check_in_until: Option<Date>,
}

backend_fn! {
/// Retrieves a reservation by canonical ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reservation_id` - The reservation ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the reservation is not found.
pub fn get_reservation_by_id(
    conn: &mut _,
    reservation_id: i64,
) -> Result<Option<Reservation>, PersistenceError> {
    let row: Option<ReservationRow> = reservations::table
        .filter(reservations::reservation_id.eq(reservation_id))
        .select(ReservationRow::as_select())
        .first(conn)
        .optional()?;

    row.map(ReservationRow::into_domain).transpose()
}
}

backend_fn! {
/// Lists reservations matching a filter, newest check-in first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `filter` - The listing criteria
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_reservations(
    conn: &mut _,
    filter: &ReservationFilter,
) -> Result<Vec<Reservation>, PersistenceError> {
    let mut query = reservations::table
        .select(ReservationRow::as_select())
        .into_boxed();

    if let Some(status) = filter.status {
        query = query.filter(reservations::status.eq(status.as_str()));
    }
    if let Some(room_id) = filter.room_id {
        query = query.filter(reservations::room_id.eq(room_id));
    }
    if let Some(guest_id) = filter.guest_id {
        query = query.filter(reservations::guest_id.eq(guest_id));
    }
    if let Some(from) = filter.check_in_from {
        query = query.filter(reservations::check_in_date.ge(format_iso_date(from)));
    }
    if let Some(until) = filter.check_in_until {
        query = query.filter(reservations::check_in_date.lt(format_iso_date(until)));
    }

    let rows: Vec<ReservationRow> = query
        .order((
            reservations::check_in_date.desc(),
            reservations::reservation_id.desc(),
        ))
        .load(conn)?;

    rows.into_iter()
        .map(ReservationRow::into_domain)
        .collect()
}
}
