// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest mutations.
//!
//! Guests are upserted by normalized email. Reservation creation inlines
//! the same policy inside its own transaction; this standalone entry
//! point backs the guest-service surface.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use frontdesk_domain::{Guest, GuestProfile};

use crate::backend::PersistenceBackend;
use crate::data_models::{GuestRow, NewGuest};
use crate::diesel_schema::guests;
use crate::error::PersistenceError;

backend_fn! {
/// Finds a guest by email or creates one, updating contact details on
/// match.
///
/// The email is the sole upsert key; a case-insensitive match (emails
/// are stored lowercase) refreshes name, phone, document, nationality,
/// and language preference from the supplied profile.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `profile` - The validated guest details
/// * `now` - Creation timestamp (ISO 8601), used only for new rows
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn find_or_create_guest(
    conn: &mut _,
    profile: &GuestProfile,
    now: &str,
) -> Result<Guest, PersistenceError> {
    conn.transaction(|conn| {
        let existing: Option<GuestRow> = guests::table
            .filter(guests::email.eq(profile.email.value()))
            .select(GuestRow::as_select())
            .first(conn)
            .optional()?;

        let guest_id: i64 = if let Some(row) = existing {
            diesel::update(guests::table.filter(guests::guest_id.eq(row.guest_id)))
                .set((
                    guests::name.eq(profile.name.clone()),
                    guests::phone.eq(profile.phone.clone()),
                    guests::document.eq(profile.document.clone()),
                    guests::nationality.eq(profile.nationality.clone()),
                    guests::language_preference.eq(profile.language_preference.clone()),
                ))
                .execute(conn)?;
            debug!(guest_id = row.guest_id, "Updated existing guest");
            row.guest_id
        } else {
            let record = NewGuest {
                email: profile.email.value().to_string(),
                name: profile.name.clone(),
                phone: profile.phone.clone(),
                document: profile.document.clone(),
                nationality: profile.nationality.clone(),
                language_preference: profile.language_preference.clone(),
                created_at: now.to_string(),
            };
            diesel::insert_into(guests::table)
                .values(&record)
                .execute(conn)?;
            let guest_id: i64 = conn.last_insert_rowid()?;
            debug!(guest_id, "Created guest");
            guest_id
        };

        let row: GuestRow = guests::table
            .filter(guests::guest_id.eq(guest_id))
            .select(GuestRow::as_select())
            .first(conn)?;
        row.into_domain()
    })
}
}
