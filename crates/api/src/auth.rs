// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use time::{Duration, OffsetDateTime};

use frontdesk_persistence::{OperatorData, Persistence, PersistenceError};

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform.
/// Roles apply only to operators, never to hotel guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: structural and corrective authority.
    ///
    /// Admins may perform:
    /// - room inventory management (create, update, retire)
    /// - reservation cancellation
    /// - operator account management
    /// - any action a receptionist may perform
    Admin,
    /// Receptionist role: day-to-day front desk operation.
    ///
    /// Receptionists may:
    /// - create reservations and look up availability
    /// - check guests in and out
    /// - record, process, and refund payments
    Receptionist,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Receptionist => "Receptionist",
        }
    }

    /// Parses a role from its string representation.
    ///
    /// # Errors
    ///
    /// Returns an error naming the invalid role string.
    pub fn parse(s: &str) -> Result<Self, AuthError> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Receptionist" => Ok(Self::Receptionist),
            other => Err(AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {other}"),
            }),
        }
    }
}

/// An authenticated actor with an associated role.
///
/// This represents an operator who has been authenticated and has
/// permission to perform certain actions based on their role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The operator's canonical identifier, recorded on every write
    /// the actor performs (`created_by`, `processed_by`).
    pub operator_id: i64,
    /// The operator's login name.
    pub login_name: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `operator_id` - The operator's canonical identifier
    /// * `login_name` - The operator's login name
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(operator_id: i64, login_name: String, role: Role) -> Self {
        Self {
            operator_id,
            login_name,
            role,
        }
    }
}

/// Authorization service for enforcing role-based access control.
///
/// This service determines whether an authenticated actor has
/// permission to perform a specific action based on their role.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Receptionist => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }

    /// Checks if an actor is authorized to cancel a reservation.
    ///
    /// Cancellation is an elevated action: only Admin actors may cancel.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_cancel_reservation(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "cancel_reservation")
    }

    /// Checks if an actor is authorized to manage room inventory
    /// (create, update, retire).
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_manage_rooms(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "manage_rooms")
    }

    /// Checks if an actor is authorized to manage operator accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_manage_operators(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "manage_operators")
    }

    /// Checks if an actor is authorized to work the desk: create
    /// reservations, check guests in and out, and handle payments.
    ///
    /// Both roles may perform these actions.
    ///
    /// # Errors
    ///
    /// Never fails for an authenticated actor; the `Result` keeps the
    /// call sites uniform with the elevated checks.
    pub const fn authorize_front_desk(_actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Authenticates an operator and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `login_name` - The operator login name
    /// * `password` - The plaintext password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_actor`, `operator_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are wrong, the operator is
    /// disabled, or session creation fails.
    pub fn login(
        persistence: &mut Persistence,
        login_name: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedActor, OperatorData), AuthError> {
        let operator: OperatorData = persistence
            .verify_operator_credentials(login_name, password)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Unknown operator or wrong password"),
            })?;

        if operator.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Operator is disabled"),
            });
        }

        let role: Role = Role::parse(&operator.role)?;

        let session_token: String = Self::generate_session_token();
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let expires_at: OffsetDateTime = now + Self::DEFAULT_SESSION_EXPIRATION;
        let now_str: String = Self::format_timestamp(now)?;
        let expires_at_str: String = Self::format_timestamp(expires_at)?;

        persistence
            .create_session(&session_token, operator.operator_id, &now_str, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        persistence
            .update_last_login(operator.operator_id, &now_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        let actor: AuthenticatedActor =
            AuthenticatedActor::new(operator.operator_id, operator.login_name.clone(), role);

        Ok((session_token, actor, operator))
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The bearer token to validate
    ///
    /// # Returns
    ///
    /// A tuple of (`authenticated_actor`, `operator_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired, or the
    /// operator is disabled.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(AuthenticatedActor, OperatorData), AuthError> {
        let session = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Rfc3339,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let operator: OperatorData = persistence
            .get_operator_by_id(session.operator_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Operator not found"),
            })?;

        if operator.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Operator is disabled"),
            });
        }

        let role: Role = Role::parse(&operator.role)?;

        let now_str: String = Self::format_timestamp(OffsetDateTime::now_utc())?;
        persistence
            .update_session_activity(session.session_id, &now_str)
            .map_err(Self::map_persistence_error)?;

        let actor: AuthenticatedActor =
            AuthenticatedActor::new(operator.operator_id, operator.login_name.clone(), role);

        Ok((actor, operator))
    }

    /// Logs out by deleting the session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Generates an opaque session token from the thread-local CSPRNG.
    fn generate_session_token() -> String {
        format!(
            "session_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }

    /// Formats a timestamp as RFC 3339.
    fn format_timestamp(ts: OffsetDateTime) -> Result<String, AuthError> {
        ts.format(&time::format_description::well_known::Rfc3339)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format timestamp: {e}"),
            })
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        match err {
            PersistenceError::SessionExpired(msg) | PersistenceError::SessionNotFound(msg) => {
                AuthError::AuthenticationFailed { reason: msg }
            }
            _ => AuthError::AuthenticationFailed {
                reason: format!("Database error: {err}"),
            },
        }
    }
}
