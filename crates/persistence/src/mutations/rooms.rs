// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room mutations.
//!
//! Room physical status is never writable through these entry points:
//! `update_room_details` deliberately has no status field, and
//! `retire_room` is the only mutation here that touches it (to
//! `maintenance`, the soft-deleted state). Occupied/cleaning transitions
//! happen inside the reservation check-in/check-out transactions.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use frontdesk_domain::{Room, RoomStatus};

use crate::backend::PersistenceBackend;
use crate::data_models::{NewRoom, RoomRow};
use crate::diesel_schema::{reservations, rooms};
use crate::error::PersistenceError;
use crate::queries::availability::BLOCKING_STATUSES;

/// Typed change set for the client-facing room update.
///
/// Unset fields are left untouched. Status and room number are
/// intentionally absent.
#[derive(Debug, Clone, Default)]
pub struct RoomDetailsUpdate {
    /// New room category.
    pub room_type: Option<String>,
    /// New maximum party size.
    pub capacity: Option<u32>,
    /// New nightly rate in cents.
    pub price_per_night_cents: Option<i64>,
    /// New amenity labels.
    pub amenities: Option<Vec<String>>,
    /// New floor.
    pub floor: Option<i32>,
}

impl RoomDetailsUpdate {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.room_type.is_none()
            && self.capacity.is_none()
            && self.price_per_night_cents.is_none()
            && self.amenities.is_none()
            && self.floor.is_none()
    }
}

/// Diesel `AsChangeset` struct for room detail updates.
#[derive(AsChangeset)]
#[diesel(table_name = rooms)]
struct RoomChanges {
    room_type: Option<String>,
    capacity: Option<i32>,
    price_per_night_cents: Option<i64>,
    amenities: Option<String>,
    floor: Option<i32>,
}

backend_fn! {
/// Inserts a new room and returns it with its assigned ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room` - The validated room to insert (id must be unset)
///
/// # Errors
///
/// Returns `DuplicateRoomNumber` if the display number is taken, or a
/// database error if the insert fails.
pub fn insert_room(conn: &mut _, room: &Room) -> Result<Room, PersistenceError> {
    conn.transaction(|conn| {
        let taken: i64 = rooms::table
            .filter(rooms::room_number.eq(&room.room_number))
            .count()
            .get_result(conn)?;
        if taken > 0 {
            return Err(PersistenceError::DuplicateRoomNumber(
                room.room_number.clone(),
            ));
        }

        let record = NewRoom {
            room_number: room.room_number.clone(),
            room_type: room.room_type.clone(),
            capacity: i32::try_from(room.capacity)
                .map_err(|_| PersistenceError::Other("Room capacity out of range".to_string()))?,
            price_per_night_cents: room.price_per_night_cents,
            status: room.status.as_str().to_string(),
            amenities: serde_json::to_string(&room.amenities)?,
            floor: room.floor,
        };
        diesel::insert_into(rooms::table)
            .values(&record)
            .execute(conn)?;

        let room_id: i64 = conn.last_insert_rowid()?;
        info!(room_id, room_number = %room.room_number, "Created room");

        let row: RoomRow = rooms::table
            .filter(rooms::room_id.eq(room_id))
            .select(RoomRow::as_select())
            .first(conn)?;
        row.into_domain()
    })
}
}

backend_fn! {
/// Applies a detail update to a room.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room to update
/// * `update` - The fields to change
///
/// # Errors
///
/// Returns an error if the database update fails.
/// Returns `Ok(None)` if the room does not exist.
pub fn update_room_details(
    conn: &mut _,
    room_id: i64,
    update: &RoomDetailsUpdate,
) -> Result<Option<Room>, PersistenceError> {
    conn.transaction(|conn| {
        if !update.is_noop() {
            let amenities: Option<String> = match &update.amenities {
                Some(list) => Some(serde_json::to_string(list)?),
                None => None,
            };
            let capacity: Option<i32> = match update.capacity {
                Some(c) => Some(i32::try_from(c).map_err(|_| {
                    PersistenceError::Other("Room capacity out of range".to_string())
                })?),
                None => None,
            };
            let changes = RoomChanges {
                room_type: update.room_type.clone(),
                capacity,
                price_per_night_cents: update.price_per_night_cents,
                amenities,
                floor: update.floor,
            };
            let updated: usize = diesel::update(rooms::table.filter(rooms::room_id.eq(room_id)))
                .set(&changes)
                .execute(conn)?;
            if updated == 0 {
                return Ok(None);
            }
        }

        let row: Option<RoomRow> = rooms::table
            .filter(rooms::room_id.eq(room_id))
            .select(RoomRow::as_select())
            .first(conn)
            .optional()?;
        row.map(RoomRow::into_domain).transpose()
    })
}
}

backend_fn! {
/// Soft-deletes a room by setting its status to `maintenance`.
///
/// The room row is kept; a retired room no longer appears in
/// availability listings. The retirement is refused while any
/// reservation in a blocking status references the room.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room to retire
///
/// # Errors
///
/// Returns `RoomHasActiveReservations` if a confirmed or checked-in
/// reservation references the room, or a database error.
/// Returns `Ok(None)` if the room does not exist.
pub fn retire_room(conn: &mut _, room_id: i64) -> Result<Option<Room>, PersistenceError> {
    conn.transaction(|conn| {
        let active: i64 = reservations::table
            .filter(reservations::room_id.eq(room_id))
            .filter(reservations::status.eq_any(BLOCKING_STATUSES))
            .count()
            .get_result(conn)?;
        if active > 0 {
            return Err(PersistenceError::RoomHasActiveReservations { room_id, active });
        }

        let updated: usize = diesel::update(rooms::table.filter(rooms::room_id.eq(room_id)))
            .set(rooms::status.eq(RoomStatus::Maintenance.as_str()))
            .execute(conn)?;
        if updated == 0 {
            return Ok(None);
        }
        info!(room_id, "Retired room to maintenance");

        let row: RoomRow = rooms::table
            .filter(rooms::room_id.eq(room_id))
            .select(RoomRow::as_select())
            .first(conn)?;
        row.into_domain().map(Some)
    })
}
}
