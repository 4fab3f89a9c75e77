// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment mutations and aggregate reconciliation.
//!
//! Processing and refunding guard on the payment's current status with a
//! conditional UPDATE, then recompute the parent reservation's derived
//! `payment_status` from the settled sum — all inside one transaction,
//! so the stored aggregate always reflects exactly the payments that
//! committed with it.

use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use frontdesk_domain::{Payment, PaymentMethod, PaymentStatus, reconcile_payment_status};

use crate::backend::PersistenceBackend;
use crate::data_models::{NewPayment, PaymentRow};
use crate::diesel_schema::{payments, reservations};
use crate::error::PersistenceError;
use crate::queries::payments::SETTLED_STATUSES;

backend_fn! {
/// Records a new pending payment against a reservation.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reservation_id` - The reservation the payment settles
/// * `amount_cents` - The amount (validated positive by the caller)
/// * `method` - How the payment is made
/// * `now` - Creation timestamp (ISO 8601)
///
/// # Errors
///
/// Returns `ReservationNotFound` if the reservation does not exist, or
/// a database error.
pub fn insert_payment(
    conn: &mut _,
    reservation_id: i64,
    amount_cents: i64,
    method: PaymentMethod,
    now: &str,
) -> Result<Payment, PersistenceError> {
    conn.transaction(|conn| {
        let known: i64 = reservations::table
            .filter(reservations::reservation_id.eq(reservation_id))
            .count()
            .get_result(conn)?;
        if known == 0 {
            return Err(PersistenceError::ReservationNotFound(reservation_id));
        }

        let record = NewPayment {
            reservation_id,
            amount_cents,
            payment_method: method.as_str().to_string(),
            status: PaymentStatus::Pending.as_str().to_string(),
            created_at: now.to_string(),
        };
        diesel::insert_into(payments::table)
            .values(&record)
            .execute(conn)?;
        let payment_id: i64 = conn.last_insert_rowid()?;
        info!(payment_id, reservation_id, amount_cents, "Recorded payment");

        let row: PaymentRow = payments::table
            .filter(payments::payment_id.eq(payment_id))
            .select(PaymentRow::as_select())
            .first(conn)?;
        row.into_domain()
    })
}
}

backend_fn! {
/// Marks a pending payment as paid and reconciles the reservation.
///
/// Guard: the payment must currently be `pending`. On success the
/// settled sum over the reservation's payments is recomputed and the
/// derived aggregate written back, in the same transaction as the
/// payment write.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `payment_id` - The payment to process
/// * `transaction_id` - Optional external processor reference
/// * `processed_by` - The operator processing the payment
/// * `now` - Processing timestamp (ISO 8601)
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if the payment is absent or not `pending`.
pub fn process_payment(
    conn: &mut _,
    payment_id: i64,
    transaction_id: Option<&str>,
    processed_by: i64,
    now: &str,
) -> Result<Option<Payment>, PersistenceError> {
    conn.transaction(|conn| {
        let updated: usize = diesel::update(
            payments::table
                .filter(payments::payment_id.eq(payment_id))
                .filter(payments::status.eq(PaymentStatus::Pending.as_str())),
        )
        .set((
            payments::status.eq(PaymentStatus::Paid.as_str()),
            payments::transaction_id.eq(transaction_id),
            payments::processed_by.eq(processed_by),
            payments::processed_at.eq(now),
        ))
        .execute(conn)?;
        if updated == 0 {
            debug!(payment_id, "Process guard failed");
            return Ok(None);
        }

        let row: PaymentRow = payments::table
            .filter(payments::payment_id.eq(payment_id))
            .select(PaymentRow::as_select())
            .first(conn)?;

        // Reconcile the parent's derived aggregate inside this
        // transaction. Policy (symmetric with the refund path):
        // settled == 0 ⇒ pending; settled ≥ total ⇒ paid;
        // otherwise ⇒ partially_paid.
        let total_cents: i64 = reservations::table
            .filter(reservations::reservation_id.eq(row.reservation_id))
            .select(reservations::total_amount_cents)
            .first(conn)?;
        let settled: Option<i64> = payments::table
            .filter(payments::reservation_id.eq(row.reservation_id))
            .filter(payments::status.eq_any(SETTLED_STATUSES))
            .select(sum(payments::amount_cents))
            .get_result(conn)?;
        let aggregate = reconcile_payment_status(total_cents, settled.unwrap_or(0));
        diesel::update(
            reservations::table.filter(reservations::reservation_id.eq(row.reservation_id)),
        )
        .set(reservations::payment_status.eq(aggregate.as_str()))
        .execute(conn)?;

        info!(
            payment_id,
            reservation_id = row.reservation_id,
            aggregate = aggregate.as_str(),
            "Processed payment"
        );
        row.into_domain().map(Some)
    })
}
}

backend_fn! {
/// Refunds a paid payment and reconciles the reservation.
///
/// Guard: the payment must currently be `paid`. The refund timestamp
/// overwrites `processed_at` and the refunding operator overwrites
/// `processed_by`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `payment_id` - The payment to refund
/// * `processed_by` - The operator issuing the refund
/// * `now` - Refund timestamp (ISO 8601)
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if the payment is absent or not `paid`.
pub fn refund_payment(
    conn: &mut _,
    payment_id: i64,
    processed_by: i64,
    now: &str,
) -> Result<Option<Payment>, PersistenceError> {
    conn.transaction(|conn| {
        let updated: usize = diesel::update(
            payments::table
                .filter(payments::payment_id.eq(payment_id))
                .filter(payments::status.eq(PaymentStatus::Paid.as_str())),
        )
        .set((
            payments::status.eq(PaymentStatus::Refunded.as_str()),
            payments::processed_by.eq(processed_by),
            payments::processed_at.eq(now),
        ))
        .execute(conn)?;
        if updated == 0 {
            debug!(payment_id, "Refund guard failed");
            return Ok(None);
        }

        let row: PaymentRow = payments::table
            .filter(payments::payment_id.eq(payment_id))
            .select(PaymentRow::as_select())
            .first(conn)?;

        // Reconcile the parent's derived aggregate inside this
        // transaction. Fully refunded (settled back to 0) reads
        // pending, not refunded — the aggregate tracks what remains
        // settled.
        let total_cents: i64 = reservations::table
            .filter(reservations::reservation_id.eq(row.reservation_id))
            .select(reservations::total_amount_cents)
            .first(conn)?;
        let settled: Option<i64> = payments::table
            .filter(payments::reservation_id.eq(row.reservation_id))
            .filter(payments::status.eq_any(SETTLED_STATUSES))
            .select(sum(payments::amount_cents))
            .get_result(conn)?;
        let aggregate = reconcile_payment_status(total_cents, settled.unwrap_or(0));
        diesel::update(
            reservations::table.filter(reservations::reservation_id.eq(row.reservation_id)),
        )
        .set(reservations::payment_status.eq(aggregate.as_str()))
        .execute(conn)?;

        info!(
            payment_id,
            reservation_id = row.reservation_id,
            aggregate = aggregate.as_str(),
            "Refunded payment"
        );
        row.into_domain().map(Some)
    })
}
}
