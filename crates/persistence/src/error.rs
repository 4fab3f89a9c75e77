// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Serialization/deserialization error (corrupt stored value).
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested room was not found.
    RoomNotFound(i64),
    /// A room with this number already exists.
    DuplicateRoomNumber(String),
    /// The room is blocked by an overlapping reservation for the
    /// requested stay range.
    RoomUnavailable {
        /// The room that was requested.
        room_id: i64,
        /// The requested check-in date (ISO 8601).
        check_in: String,
        /// The requested check-out date (ISO 8601).
        check_out: String,
    },
    /// The requested party size exceeds the room's capacity.
    CapacityExceeded {
        /// The requested number of guests.
        requested: u32,
        /// The room's capacity.
        capacity: u32,
    },
    /// The room cannot be retired while reservations block it.
    RoomHasActiveReservations {
        /// The room that was requested.
        room_id: i64,
        /// The number of blocking reservations.
        active: i64,
    },
    /// The requested reservation was not found.
    ReservationNotFound(i64),
    /// The requested guest was not found.
    GuestNotFound(String),
    /// The requested payment was not found.
    PaymentNotFound(i64),
    /// The requested operator was not found.
    OperatorNotFound(String),
    /// An operator with this login name already exists.
    DuplicateLoginName(String),
    /// The requested session was not found.
    SessionNotFound(String),
    /// Session has expired.
    SessionExpired(String),
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::RoomNotFound(id) => write!(f, "Room not found: {id}"),
            Self::DuplicateRoomNumber(number) => {
                write!(f, "Room number '{number}' already exists")
            }
            Self::RoomUnavailable {
                room_id,
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Room {room_id} is unavailable for [{check_in}, {check_out})"
                )
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Party of {requested} exceeds room capacity of {capacity}"
                )
            }
            Self::RoomHasActiveReservations { room_id, active } => {
                write!(
                    f,
                    "Room {room_id} cannot be retired: {active} confirmed or checked-in reservation(s)"
                )
            }
            Self::ReservationNotFound(id) => write!(f, "Reservation not found: {id}"),
            Self::GuestNotFound(msg) => write!(f, "Guest not found: {msg}"),
            Self::PaymentNotFound(id) => write!(f, "Payment not found: {id}"),
            Self::OperatorNotFound(msg) => write!(f, "Operator not found: {msg}"),
            Self::DuplicateLoginName(name) => {
                write!(f, "Operator login name '{name}' already exists")
            }
            Self::SessionNotFound(msg) => write!(f, "Session not found: {msg}"),
            Self::SessionExpired(msg) => write!(f, "Session expired: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
