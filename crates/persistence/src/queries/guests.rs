// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use frontdesk_domain::{Email, Guest};

use crate::data_models::GuestRow;
use crate::diesel_schema::guests;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a guest by canonical ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `guest_id` - The guest ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the guest is not found.
pub fn get_guest_by_id(conn: &mut _, guest_id: i64) -> Result<Option<Guest>, PersistenceError> {
    let row: Option<GuestRow> = guests::table
        .filter(guests::guest_id.eq(guest_id))
        .select(GuestRow::as_select())
        .first(conn)
        .optional()?;

    row.map(GuestRow::into_domain).transpose()
}
}

backend_fn! {
/// Retrieves a guest by email.
///
/// Lookup is case-insensitive: `Email` is normalized to lowercase and
/// rows are stored normalized.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `email` - The normalized email address
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no guest has this address.
pub fn get_guest_by_email(
    conn: &mut _,
    email: &Email,
) -> Result<Option<Guest>, PersistenceError> {
    let row: Option<GuestRow> = guests::table
        .filter(guests::email.eq(email.value()))
        .select(GuestRow::as_select())
        .first(conn)
        .optional()?;

    row.map(GuestRow::into_domain).transpose()
}
}
