// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use frontdesk_api::{
    ApiError, AuthenticatedActor, AuthenticationService, AvailabilityResponse, CheckOutRequest,
    CreateOperatorRequest, CreatePaymentRequest, CreateReservationRequest, CreateRoomRequest,
    GuestInfo, ListReservationsRequest, LoginRequest, LoginResponse, OperatorInfo, PaymentInfo,
    ProcessPaymentRequest, RefundPaymentRequest, ReservationInfo, RoomInfo, UpdateRoomRequest,
    WhoAmIResponse,
};
use frontdesk_persistence::Persistence;

/// Frontdesk Server - HTTP server for the frontdesk hotel system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Login name for a bootstrap Admin account, created at startup if
    /// absent. Requires `--bootstrap-password`.
    #[arg(long, requires = "bootstrap_password")]
    bootstrap_admin: Option<String>,

    /// Password for the bootstrap Admin account.
    #[arg(long, requires = "bootstrap_admin")]
    bootstrap_password: Option<String>,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind a Mutex: the single writer handle
/// serializes mutations process-wide, on top of the per-operation
/// transactions inside the persistence layer.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for hotel state.
    persistence: Arc<Mutex<Persistence>>,
}

/// Success envelope for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope<T> {
    /// Success indicator.
    success: bool,
    /// The response payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Error envelope for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorEnvelope {
    /// Success indicator (always false).
    success: bool,
    /// The error message.
    error: String,
}

/// Wraps a payload in the success envelope.
fn envelope<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        data: Some(data),
        message: None,
    })
}

/// Wraps a message-only success in the envelope.
fn message_envelope(message: &str) -> Json<Envelope<()>> {
    Json(Envelope {
        success: true,
        data: None,
        message: Some(message.to_string()),
    })
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn unauthorized(message: String) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorEnvelope> = Json(ErrorEnvelope {
            success: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. }
            | ApiError::DomainRuleViolation { .. }
            | ApiError::PasswordPolicyViolation { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Extracts the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, HttpError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| HttpError::unauthorized(String::from("Missing bearer token")))
}

/// Validates the request's session and returns the acting operator.
fn authenticate(
    persistence: &mut Persistence,
    headers: &HeaderMap,
) -> Result<AuthenticatedActor, HttpError> {
    let token: &str = bearer_token(headers)?;
    let (actor, _operator) = AuthenticationService::validate_session(persistence, token)
        .map_err(|e| HttpError::unauthorized(e.to_string()))?;
    Ok(actor)
}

// ============================================================================
// Query parameter types
// ============================================================================

/// Query parameters for availability endpoints.
#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    /// Check-in date (ISO 8601).
    check_in: String,
    /// Check-out date (ISO 8601, exclusive).
    check_out: String,
}

/// Query parameters for listing reservations.
#[derive(Debug, Default, Deserialize)]
struct ListReservationsQuery {
    /// Filter by lifecycle status.
    status: Option<String>,
    /// Filter by room.
    room_id: Option<i64>,
    /// Filter by guest.
    guest_id: Option<i64>,
    /// Check-in on or after (ISO 8601).
    check_in_from: Option<String>,
    /// Check-in strictly before (ISO 8601).
    check_in_until: Option<String>,
}

/// Query parameters for guest lookup.
#[derive(Debug, Deserialize)]
struct GuestLookupQuery {
    /// The email to look up (case-insensitive).
    email: String,
}

// ============================================================================
// Authentication handlers
// ============================================================================

/// Handler for POST `/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Envelope<LoginResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = frontdesk_api::login(&mut persistence, &req)?;
    info!(login_name = %response.login_name, "Operator logged in");
    Ok(envelope(response))
}

/// Handler for POST `/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Envelope<()>>, HttpError> {
    let token: String = bearer_token(&headers)?.to_string();
    let mut persistence = app_state.persistence.lock().await;
    frontdesk_api::logout(&mut persistence, &token)?;
    Ok(message_envelope("Logged out"))
}

/// Handler for GET `/whoami`.
async fn handle_whoami(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Envelope<WhoAmIResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let response: WhoAmIResponse = frontdesk_api::whoami(&mut persistence, &actor)?;
    Ok(envelope(response))
}

// ============================================================================
// Reservation handlers
// ============================================================================

/// Handler for POST `/reservations`.
async fn handle_create_reservation(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<Envelope<ReservationInfo>>), HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let reservation: ReservationInfo =
        frontdesk_api::create_reservation(&mut persistence, &req, &actor)?;
    Ok((StatusCode::CREATED, envelope(reservation)))
}

/// Handler for GET `/reservations`.
async fn handle_list_reservations(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<Envelope<Vec<ReservationInfo>>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    authenticate(&mut persistence, &headers)?;
    let request = ListReservationsRequest {
        status: query.status,
        room_id: query.room_id,
        guest_id: query.guest_id,
        check_in_from: query.check_in_from,
        check_in_until: query.check_in_until,
    };
    let reservations = frontdesk_api::list_reservations(&mut persistence, &request)?;
    Ok(envelope(reservations))
}

/// Handler for GET `/reservations/{id}`.
async fn handle_get_reservation(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i64>,
) -> Result<Json<Envelope<ReservationInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    authenticate(&mut persistence, &headers)?;
    let reservation = frontdesk_api::get_reservation(&mut persistence, reservation_id)?;
    Ok(envelope(reservation))
}

/// Handler for POST `/reservations/{id}/checkin`.
async fn handle_check_in(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i64>,
) -> Result<Json<Envelope<ReservationInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let reservation =
        frontdesk_api::check_in_reservation(&mut persistence, reservation_id, &actor)?;
    Ok(envelope(reservation))
}

/// Handler for POST `/reservations/{id}/checkout`.
async fn handle_check_out(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i64>,
    Json(req): Json<CheckOutRequest>,
) -> Result<Json<Envelope<ReservationInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let reservation =
        frontdesk_api::check_out_reservation(&mut persistence, reservation_id, &req, &actor)?;
    Ok(envelope(reservation))
}

/// Handler for POST `/reservations/{id}/cancel`.
async fn handle_cancel(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i64>,
) -> Result<Json<Envelope<ReservationInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let reservation = frontdesk_api::cancel_reservation(&mut persistence, reservation_id, &actor)?;
    Ok(envelope(reservation))
}

/// Handler for POST `/reservations/{id}/confirm`.
///
/// Always 501: no code path in this system sets `confirmed`.
async fn handle_confirm(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i64>,
) -> Result<Json<Envelope<ReservationInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let reservation =
        frontdesk_api::confirm_reservation(&mut persistence, reservation_id, &actor)?;
    Ok(envelope(reservation))
}

/// Handler for GET `/reservations/{id}/payments`.
async fn handle_list_payments(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i64>,
) -> Result<Json<Envelope<Vec<PaymentInfo>>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    authenticate(&mut persistence, &headers)?;
    let payments = frontdesk_api::list_payments(&mut persistence, reservation_id)?;
    Ok(envelope(payments))
}

// ============================================================================
// Room handlers
// ============================================================================

/// Handler for GET `/rooms/availability`.
async fn handle_room_availability(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Envelope<AvailabilityResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    authenticate(&mut persistence, &headers)?;
    let response =
        frontdesk_api::list_available_rooms(&mut persistence, &query.check_in, &query.check_out)?;
    Ok(envelope(response))
}

/// Handler for GET `/rooms/{id}/availability`.
async fn handle_single_room_availability(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Envelope<bool>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    authenticate(&mut persistence, &headers)?;
    let available = frontdesk_api::check_room_availability(
        &mut persistence,
        room_id,
        &query.check_in,
        &query.check_out,
    )?;
    Ok(envelope(available))
}

/// Handler for POST `/rooms`.
async fn handle_create_room(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Envelope<RoomInfo>>), HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let room = frontdesk_api::create_room(&mut persistence, &req, &actor)?;
    Ok((StatusCode::CREATED, envelope(room)))
}

/// Handler for GET `/rooms`.
async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Envelope<Vec<RoomInfo>>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    authenticate(&mut persistence, &headers)?;
    let rooms = frontdesk_api::list_rooms(&mut persistence)?;
    Ok(envelope(rooms))
}

/// Handler for GET `/rooms/{id}`.
async fn handle_get_room(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i64>,
) -> Result<Json<Envelope<RoomInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    authenticate(&mut persistence, &headers)?;
    let room = frontdesk_api::get_room(&mut persistence, room_id)?;
    Ok(envelope(room))
}

/// Handler for PUT `/rooms/{id}`.
async fn handle_update_room(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i64>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<Envelope<RoomInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let room = frontdesk_api::update_room(&mut persistence, room_id, &req, &actor)?;
    Ok(envelope(room))
}

/// Handler for DELETE `/rooms/{id}` (soft retirement).
async fn handle_retire_room(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i64>,
) -> Result<Json<Envelope<RoomInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let room = frontdesk_api::retire_room(&mut persistence, room_id, &actor)?;
    Ok(envelope(room))
}

// ============================================================================
// Guest handlers
// ============================================================================

/// Handler for GET `/guests/{id}`.
async fn handle_get_guest(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(guest_id): Path<i64>,
) -> Result<Json<Envelope<GuestInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    authenticate(&mut persistence, &headers)?;
    let guest = frontdesk_api::get_guest(&mut persistence, guest_id)?;
    Ok(envelope(guest))
}

/// Handler for GET `/guests?email=`.
async fn handle_find_guest(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Query(query): Query<GuestLookupQuery>,
) -> Result<Json<Envelope<GuestInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    authenticate(&mut persistence, &headers)?;
    let guest = frontdesk_api::get_guest_by_email(&mut persistence, &query.email)?;
    Ok(envelope(guest))
}

// ============================================================================
// Payment handlers
// ============================================================================

/// Handler for POST `/payments`.
async fn handle_create_payment(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<Envelope<PaymentInfo>>), HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let payment = frontdesk_api::create_payment(&mut persistence, &req, &actor)?;
    Ok((StatusCode::CREATED, envelope(payment)))
}

/// Handler for POST `/payments/{id}/process`.
async fn handle_process_payment(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(payment_id): Path<i64>,
    Json(req): Json<ProcessPaymentRequest>,
) -> Result<Json<Envelope<PaymentInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let payment = frontdesk_api::process_payment(&mut persistence, payment_id, &req, &actor)?;
    Ok(envelope(payment))
}

/// Handler for POST `/payments/{id}/refund`.
async fn handle_refund_payment(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(payment_id): Path<i64>,
    Json(req): Json<RefundPaymentRequest>,
) -> Result<Json<Envelope<PaymentInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let payment = frontdesk_api::refund_payment(&mut persistence, payment_id, &req, &actor)?;
    Ok(envelope(payment))
}

// ============================================================================
// Operator handlers
// ============================================================================

/// Handler for POST `/operators`.
async fn handle_create_operator(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateOperatorRequest>,
) -> Result<(StatusCode, Json<Envelope<OperatorInfo>>), HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let operator = frontdesk_api::create_operator(&mut persistence, &req, &actor)?;
    Ok((StatusCode::CREATED, envelope(operator)))
}

/// Handler for GET `/operators`.
async fn handle_list_operators(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Envelope<Vec<OperatorInfo>>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&mut persistence, &headers)?;
    let operators = frontdesk_api::list_operators(&mut persistence, &actor)?;
    Ok(envelope(operators))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/whoami", get(handle_whoami))
        .route("/reservations", post(handle_create_reservation))
        .route("/reservations", get(handle_list_reservations))
        .route("/reservations/{id}", get(handle_get_reservation))
        .route("/reservations/{id}/checkin", post(handle_check_in))
        .route("/reservations/{id}/checkout", post(handle_check_out))
        .route("/reservations/{id}/cancel", post(handle_cancel))
        .route("/reservations/{id}/confirm", post(handle_confirm))
        .route("/reservations/{id}/payments", get(handle_list_payments))
        .route("/rooms/availability", get(handle_room_availability))
        .route("/rooms", post(handle_create_room))
        .route("/rooms", get(handle_list_rooms))
        .route("/rooms/{id}", get(handle_get_room))
        .route("/rooms/{id}", put(handle_update_room))
        .route("/rooms/{id}", delete(handle_retire_room))
        .route(
            "/rooms/{id}/availability",
            get(handle_single_room_availability),
        )
        .route("/guests", get(handle_find_guest))
        .route("/guests/{id}", get(handle_get_guest))
        .route("/payments", post(handle_create_payment))
        .route("/payments/{id}/process", post(handle_process_payment))
        .route("/payments/{id}/refund", post(handle_refund_payment))
        .route("/operators", post(handle_create_operator))
        .route("/operators", get(handle_list_operators))
        .with_state(app_state)
}

/// Creates the bootstrap Admin account if it does not exist yet.
fn bootstrap_admin(
    persistence: &mut Persistence,
    login_name: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if persistence.get_operator_by_login(login_name)?.is_some() {
        info!(login_name, "Bootstrap admin already exists");
        return Ok(());
    }
    let now: String = time_now()?;
    persistence.create_operator(login_name, "Bootstrap Admin", password, "Admin", &now)?;
    info!(login_name, "Created bootstrap admin");
    Ok(())
}

/// Formats the current instant as RFC 3339.
fn time_now() -> Result<String, Box<dyn std::error::Error>> {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs: u64 = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let ts = time::OffsetDateTime::from_unix_timestamp(i64::try_from(secs)?)?;
    Ok(ts.format(&time::format_description::well_known::Rfc3339)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Frontdesk Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if let (Some(login_name), Some(password)) = (&args.bootstrap_admin, &args.bootstrap_password) {
        bootstrap_admin(&mut persistence, login_name, password)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use frontdesk_domain::ReservationStatus;
    use tower::ServiceExt;

    const ADMIN_PASSWORD: &str = "bootstrap admin pw";
    const DESK_PASSWORD: &str = "front desk test pw";
    const NOW: &str = "2026-02-01T08:00:00Z";

    /// Creates test app state with a seeded Admin ("ADMIN") and
    /// Receptionist ("DESK").
    fn create_test_app_state() -> AppState {
        let mut persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        persistence
            .create_operator("admin", "Test Admin", ADMIN_PASSWORD, "Admin", NOW)
            .expect("admin seeded");
        persistence
            .create_operator("desk", "Test Desk", DESK_PASSWORD, "Receptionist", NOW)
            .expect("receptionist seeded");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    async fn send(
        app_state: &AppState,
        request: Request<Body>,
    ) -> (HttpStatusCode, serde_json::Value) {
        let response = build_router(app_state.clone())
            .oneshot(request)
            .await
            .expect("request handled");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read");
        let value: serde_json::Value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };
        (status, value)
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: &serde_json::Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        builder
            .body(Body::from(body.to_string()))
            .expect("request built")
    }

    fn bare_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        builder.body(Body::empty()).expect("request built")
    }

    async fn login(app_state: &AppState, login_name: &str, password: &str) -> String {
        let (status, body) = send(
            app_state,
            json_request(
                "POST",
                "/login",
                None,
                &serde_json::json!({ "login_name": login_name, "password": password }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        body["data"]["session_token"]
            .as_str()
            .expect("session token")
            .to_string()
    }

    async fn seed_room(app_state: &AppState, token: &str) -> i64 {
        let (status, body) = send(
            app_state,
            json_request(
                "POST",
                "/rooms",
                Some(token),
                &serde_json::json!({
                    "room_number": "101",
                    "room_type": "double",
                    "capacity": 2,
                    "price_per_night_cents": 12_000,
                    "amenities": ["wifi"],
                    "floor": 1
                }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::CREATED);
        body["data"]["room_id"].as_i64().expect("room id")
    }

    fn reservation_body(room_id: i64, email: &str) -> serde_json::Value {
        serde_json::json!({
            "room_id": room_id,
            "guest": { "name": "Ada Lovelace", "email": email },
            "check_in_date": "2026-03-01",
            "check_out_date": "2026-03-03",
            "total_guests": 2
        })
    }

    #[tokio::test]
    async fn test_login_and_room_crud_flow() {
        let app_state = create_test_app_state();
        let token = login(&app_state, "admin", ADMIN_PASSWORD).await;
        let room_id = seed_room(&app_state, &token).await;

        let (status, body) = send(
            &app_state,
            bare_request("GET", &format!("/rooms/{room_id}"), Some(&token)),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["room_number"], "101");
        assert_eq!(body["data"]["status"], "available");
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let app_state = create_test_app_state();

        let (status, body) = send(&app_state, bare_request("GET", "/rooms", None)).await;
        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);

        let (status, _) = send(
            &app_state,
            bare_request("GET", "/rooms", Some("session_bogus")),
        )
        .await;
        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_reservation_and_overlap_conflict() {
        let app_state = create_test_app_state();
        let token = login(&app_state, "admin", ADMIN_PASSWORD).await;
        let room_id = seed_room(&app_state, &token).await;

        let (status, body) = send(
            &app_state,
            json_request(
                "POST",
                "/reservations",
                Some(&token),
                &reservation_body(room_id, "first@example.com"),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::CREATED);
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["total_amount_cents"], 24_000);
        let reservation_id = body["data"]["reservation_id"].as_i64().expect("id");

        // Promote to confirmed through the storage hook so the second
        // booking collides.
        {
            let mut persistence = app_state.persistence.lock().await;
            persistence
                .force_reservation_status(reservation_id, ReservationStatus::Confirmed)
                .expect("status forced");
        }

        let (status, body) = send(
            &app_state,
            json_request(
                "POST",
                "/reservations",
                Some(&token),
                &serde_json::json!({
                    "room_id": room_id,
                    "guest": { "name": "Grace Hopper", "email": "second@example.com" },
                    "check_in_date": "2026-03-02",
                    "check_out_date": "2026-03-04",
                    "total_guests": 1
                }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::CONFLICT);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_validation_errors_are_bad_request() {
        let app_state = create_test_app_state();
        let token = login(&app_state, "admin", ADMIN_PASSWORD).await;
        let room_id = seed_room(&app_state, &token).await;

        // Party of 3 in a capacity-2 room.
        let (status, _) = send(
            &app_state,
            json_request(
                "POST",
                "/reservations",
                Some(&token),
                &serde_json::json!({
                    "room_id": room_id,
                    "guest": { "name": "Ada Lovelace", "email": "ada@example.com" },
                    "check_in_date": "2026-03-01",
                    "check_out_date": "2026-03-03",
                    "total_guests": 3
                }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_guard_failure_reads_as_not_found() {
        let app_state = create_test_app_state();
        let token = login(&app_state, "admin", ADMIN_PASSWORD).await;
        let room_id = seed_room(&app_state, &token).await;

        let (_, body) = send(
            &app_state,
            json_request(
                "POST",
                "/reservations",
                Some(&token),
                &reservation_body(room_id, "ada@example.com"),
            ),
        )
        .await;
        let reservation_id = body["data"]["reservation_id"].as_i64().expect("id");

        // Pending reservation cannot check in; the response shape
        // matches a truly absent id.
        let (status, body) = send(
            &app_state,
            bare_request(
                "POST",
                &format!("/reservations/{reservation_id}/checkin"),
                Some(&token),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        let (status, _) = send(
            &app_state,
            bare_request("POST", "/reservations/999/checkin", Some(&token)),
        )
        .await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_confirm_endpoint_is_not_implemented() {
        let app_state = create_test_app_state();
        let token = login(&app_state, "admin", ADMIN_PASSWORD).await;
        let room_id = seed_room(&app_state, &token).await;

        let (_, body) = send(
            &app_state,
            json_request(
                "POST",
                "/reservations",
                Some(&token),
                &reservation_body(room_id, "ada@example.com"),
            ),
        )
        .await;
        let reservation_id = body["data"]["reservation_id"].as_i64().expect("id");

        let (status, body) = send(
            &app_state,
            bare_request(
                "POST",
                &format!("/reservations/{reservation_id}/confirm"),
                Some(&token),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::NOT_IMPLEMENTED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_cancel_requires_elevated_role() {
        let app_state = create_test_app_state();
        let admin_token = login(&app_state, "admin", ADMIN_PASSWORD).await;
        let desk_token = login(&app_state, "desk", DESK_PASSWORD).await;
        let room_id = seed_room(&app_state, &admin_token).await;

        // The receptionist can create...
        let (status, body) = send(
            &app_state,
            json_request(
                "POST",
                "/reservations",
                Some(&desk_token),
                &reservation_body(room_id, "ada@example.com"),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::CREATED);
        let reservation_id = body["data"]["reservation_id"].as_i64().expect("id");

        // ...but not cancel.
        let (status, _) = send(
            &app_state,
            bare_request(
                "POST",
                &format!("/reservations/{reservation_id}/cancel"),
                Some(&desk_token),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::FORBIDDEN);

        let (status, body) = send(
            &app_state,
            bare_request(
                "POST",
                &format!("/reservations/{reservation_id}/cancel"),
                Some(&admin_token),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["data"]["status"], "cancelled");
    }

    #[tokio::test]
    async fn test_availability_listing_round_trip() {
        let app_state = create_test_app_state();
        let token = login(&app_state, "admin", ADMIN_PASSWORD).await;
        let room_id = seed_room(&app_state, &token).await;

        let (status, body) = send(
            &app_state,
            bare_request(
                "GET",
                "/rooms/availability?check_in=2026-03-01&check_out=2026-03-03",
                Some(&token),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["data"]["rooms"].as_array().expect("rooms").len(), 1);

        let (status, body) = send(
            &app_state,
            bare_request(
                "GET",
                &format!("/rooms/{room_id}/availability?check_in=2026-03-01&check_out=2026-03-03"),
                Some(&token),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["data"], true);

        // Malformed dates are a validation failure.
        let (status, _) = send(
            &app_state,
            bare_request(
                "GET",
                "/rooms/availability?check_in=tomorrow&check_out=2026-03-03",
                Some(&token),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_payment_flow_over_http() {
        let app_state = create_test_app_state();
        let token = login(&app_state, "admin", ADMIN_PASSWORD).await;
        let room_id = seed_room(&app_state, &token).await;

        let (_, body) = send(
            &app_state,
            json_request(
                "POST",
                "/reservations",
                Some(&token),
                &reservation_body(room_id, "payer@example.com"),
            ),
        )
        .await;
        let reservation_id = body["data"]["reservation_id"].as_i64().expect("id");

        let (status, body) = send(
            &app_state,
            json_request(
                "POST",
                "/payments",
                Some(&token),
                &serde_json::json!({
                    "reservation_id": reservation_id,
                    "amount_cents": 24_000,
                    "payment_method": "credit_card"
                }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::CREATED);
        let payment_id = body["data"]["payment_id"].as_i64().expect("payment id");

        let (status, body) = send(
            &app_state,
            json_request(
                "POST",
                &format!("/payments/{payment_id}/process"),
                Some(&token),
                &serde_json::json!({ "transaction_id": "txn-7" }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["data"]["status"], "paid");

        let (_, body) = send(
            &app_state,
            bare_request(
                "GET",
                &format!("/reservations/{reservation_id}"),
                Some(&token),
            ),
        )
        .await;
        assert_eq!(body["data"]["payment_status"], "paid");

        let (status, body) = send(
            &app_state,
            json_request(
                "POST",
                &format!("/payments/{payment_id}/refund"),
                Some(&token),
                &serde_json::json!({ "reason": "trip cancelled" }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["data"]["status"], "refunded");

        let (_, body) = send(
            &app_state,
            bare_request(
                "GET",
                &format!("/reservations/{reservation_id}"),
                Some(&token),
            ),
        )
        .await;
        assert_eq!(body["data"]["payment_status"], "pending");
    }

    #[tokio::test]
    async fn test_operator_management_routes() {
        let app_state = create_test_app_state();
        let admin_token = login(&app_state, "admin", ADMIN_PASSWORD).await;
        let desk_token = login(&app_state, "desk", DESK_PASSWORD).await;

        let (status, _) = send(
            &app_state,
            bare_request("GET", "/operators", Some(&desk_token)),
        )
        .await;
        assert_eq!(status, HttpStatusCode::FORBIDDEN);

        let (status, body) = send(
            &app_state,
            json_request(
                "POST",
                "/operators",
                Some(&admin_token),
                &serde_json::json!({
                    "login_name": "night-desk",
                    "display_name": "Night Desk",
                    "password": "night desk test pw",
                    "role": "Receptionist"
                }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::CREATED);
        assert_eq!(body["data"]["login_name"], "NIGHT-DESK");
        assert!(body["data"].get("password_hash").is_none());

        let (status, body) = send(
            &app_state,
            bare_request("GET", "/operators", Some(&admin_token)),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["data"].as_array().expect("operators").len(), 3);
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let app_state = create_test_app_state();
        let token = login(&app_state, "admin", ADMIN_PASSWORD).await;

        let (status, _) = send(&app_state, bare_request("POST", "/logout", Some(&token))).await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, _) = send(&app_state, bare_request("GET", "/whoami", Some(&token))).await;
        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }
}
