// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator and session mutations.
//!
//! Password hashing and verification live here, next to the stored
//! hash: callers hand over plaintext once and never see the hash.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{NewOperator, NewSession, OperatorData};
use crate::diesel_schema::{operators, sessions};
use crate::error::PersistenceError;
use crate::queries::operators::{get_operator_by_login_mysql, get_operator_by_login_sqlite};

backend_fn! {
/// Creates a new operator account.
///
/// The login name is normalized to uppercase; the password is stored
/// as a bcrypt hash.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `login_name` - The login name (normalized to uppercase)
/// * `display_name` - The display name
/// * `password` - The plaintext password (hashed here, never stored)
/// * `role` - The role string ("Admin" or "Receptionist")
/// * `now` - Creation timestamp (ISO 8601)
///
/// # Errors
///
/// Returns `DuplicateLoginName` if the login name is taken, or a
/// database error.
pub fn create_operator(
    conn: &mut _,
    login_name: &str,
    display_name: &str,
    password: &str,
    role: &str,
    now: &str,
) -> Result<OperatorData, PersistenceError> {
    let normalized_login: String = login_name.to_uppercase();

    conn.transaction(|conn| {
        let taken: i64 = operators::table
            .filter(operators::login_name.eq(&normalized_login))
            .count()
            .get_result(conn)?;
        if taken > 0 {
            return Err(PersistenceError::DuplicateLoginName(normalized_login));
        }

        let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| PersistenceError::Other(format!("Password hashing failed: {e}")))?;

        let record = NewOperator {
            login_name: normalized_login.clone(),
            display_name: display_name.to_string(),
            password_hash: password_hash.clone(),
            role: role.to_string(),
            is_disabled: 0,
            created_at: now.to_string(),
        };
        diesel::insert_into(operators::table)
            .values(&record)
            .execute(conn)?;
        let operator_id: i64 = conn.last_insert_rowid()?;
        info!(operator_id, login_name = %normalized_login, role, "Created operator");

        Ok(OperatorData {
            operator_id,
            login_name: normalized_login,
            display_name: display_name.to_string(),
            password_hash,
            role: role.to_string(),
            is_disabled: false,
            created_at: now.to_string(),
            disabled_at: None,
            last_login_at: None,
        })
    })
}
}

/// Verifies an operator's credentials - `SQLite` version.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `login_name` - The login name
/// * `password` - The plaintext password to verify
///
/// # Errors
///
/// Returns an error if the database query or hash verification fails.
/// Returns `Ok(None)` if the operator is unknown or the password does
/// not match.
pub fn verify_operator_credentials_sqlite(
    conn: &mut SqliteConnection,
    login_name: &str,
    password: &str,
) -> Result<Option<OperatorData>, PersistenceError> {
    let Some(operator) = get_operator_by_login_sqlite(conn, login_name)? else {
        debug!("Credential check for unknown operator");
        return Ok(None);
    };
    let matches: bool = bcrypt::verify(password, &operator.password_hash)
        .map_err(|e| PersistenceError::Other(format!("Password verification failed: {e}")))?;
    Ok(matches.then_some(operator))
}

/// Verifies an operator's credentials - `MySQL` version.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `login_name` - The login name
/// * `password` - The plaintext password to verify
///
/// # Errors
///
/// Returns an error if the database query or hash verification fails.
/// Returns `Ok(None)` if the operator is unknown or the password does
/// not match.
pub fn verify_operator_credentials_mysql(
    conn: &mut MysqlConnection,
    login_name: &str,
    password: &str,
) -> Result<Option<OperatorData>, PersistenceError> {
    let Some(operator) = get_operator_by_login_mysql(conn, login_name)? else {
        debug!("Credential check for unknown operator");
        return Ok(None);
    };
    let matches: bool = bcrypt::verify(password, &operator.password_hash)
        .map_err(|e| PersistenceError::Other(format!("Password verification failed: {e}")))?;
    Ok(matches.then_some(operator))
}

backend_fn! {
/// Creates a session for an operator.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The opaque bearer token
/// * `operator_id` - The operator the session belongs to
/// * `now` - Creation timestamp (ISO 8601)
/// * `expires_at` - Expiration timestamp (ISO 8601)
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub fn create_session(
    conn: &mut _,
    session_token: &str,
    operator_id: i64,
    now: &str,
    expires_at: &str,
) -> Result<(), PersistenceError> {
    let record = NewSession {
        session_token: session_token.to_string(),
        operator_id,
        created_at: now.to_string(),
        last_activity_at: now.to_string(),
        expires_at: expires_at.to_string(),
    };
    diesel::insert_into(sessions::table)
        .values(&record)
        .execute(conn)?;
    debug!(operator_id, "Created session");
    Ok(())
}
}

backend_fn! {
/// Deletes a session by token (logout).
///
/// Deleting an unknown token is a no-op.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(conn: &mut _, session_token: &str) -> Result<(), PersistenceError> {
    diesel::delete(sessions::table.filter(sessions::session_token.eq(session_token)))
        .execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Stamps a session's last-activity timestamp.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(
    conn: &mut _,
    session_id: i64,
    now: &str,
) -> Result<(), PersistenceError> {
    diesel::update(sessions::table.filter(sessions::session_id.eq(session_id)))
        .set(sessions::last_activity_at.eq(now))
        .execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Stamps an operator's last-login timestamp.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_last_login(
    conn: &mut _,
    operator_id: i64,
    now: &str,
) -> Result<(), PersistenceError> {
    diesel::update(operators::table.filter(operators::operator_id.eq(operator_id)))
        .set(operators::last_login_at.eq(now))
        .execute(conn)?;
    Ok(())
}
}
