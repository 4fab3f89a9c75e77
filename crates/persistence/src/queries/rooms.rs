// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use frontdesk_domain::Room;

use crate::data_models::RoomRow;
use crate::diesel_schema::rooms;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a room by its canonical ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the room is not found.
pub fn get_room_by_id(conn: &mut _, room_id: i64) -> Result<Option<Room>, PersistenceError> {
    let row: Option<RoomRow> = rooms::table
        .filter(rooms::room_id.eq(room_id))
        .select(RoomRow::as_select())
        .first(conn)
        .optional()?;

    row.map(RoomRow::into_domain).transpose()
}
}

backend_fn! {
/// Retrieves a room by its display number.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_number` - The display number (e.g., "101")
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the room is not found.
pub fn get_room_by_number(
    conn: &mut _,
    room_number: &str,
) -> Result<Option<Room>, PersistenceError> {
    let row: Option<RoomRow> = rooms::table
        .filter(rooms::room_number.eq(room_number))
        .select(RoomRow::as_select())
        .first(conn)
        .optional()?;

    row.map(RoomRow::into_domain).transpose()
}
}

backend_fn! {
/// Lists all rooms ordered by room number.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_rooms(conn: &mut _) -> Result<Vec<Room>, PersistenceError> {
    let rows: Vec<RoomRow> = rooms::table
        .select(RoomRow::as_select())
        .order(rooms::room_number.asc())
        .load(conn)?;

    rows.into_iter().map(RoomRow::into_domain).collect()
}
}
