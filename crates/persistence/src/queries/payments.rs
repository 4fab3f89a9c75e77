// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment queries.

use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use frontdesk_domain::{Payment, PaymentStatus};

use crate::data_models::PaymentRow;
use crate::diesel_schema::payments;
use crate::error::PersistenceError;

/// Payment statuses that count toward the settled sum.
pub(crate) const SETTLED_STATUSES: &[&str] = &[
    PaymentStatus::Paid.as_str(),
    PaymentStatus::PartiallyPaid.as_str(),
];

backend_fn! {
/// Retrieves a payment by canonical ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `payment_id` - The payment ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the payment is not found.
pub fn get_payment_by_id(
    conn: &mut _,
    payment_id: i64,
) -> Result<Option<Payment>, PersistenceError> {
    let row: Option<PaymentRow> = payments::table
        .filter(payments::payment_id.eq(payment_id))
        .select(PaymentRow::as_select())
        .first(conn)
        .optional()?;

    row.map(PaymentRow::into_domain).transpose()
}
}

backend_fn! {
/// Lists all payments recorded against a reservation, oldest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reservation_id` - The reservation ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_payments_for_reservation(
    conn: &mut _,
    reservation_id: i64,
) -> Result<Vec<Payment>, PersistenceError> {
    let rows: Vec<PaymentRow> = payments::table
        .filter(payments::reservation_id.eq(reservation_id))
        .select(PaymentRow::as_select())
        .order(payments::payment_id.asc())
        .load(conn)?;

    rows.into_iter().map(PaymentRow::into_domain).collect()
}
}

backend_fn! {
/// Sums the settled amount (cents) across a reservation's payments.
///
/// Settled statuses are `paid` and `partially_paid`; pending and
/// refunded payments contribute nothing. A reservation with no
/// payments sums to zero.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn settled_amount_cents(
    conn: &mut _,
    reservation_id: i64,
) -> Result<i64, PersistenceError> {
    let total: Option<i64> = payments::table
        .filter(payments::reservation_id.eq(reservation_id))
        .filter(payments::status.eq_any(SETTLED_STATUSES))
        .select(sum(payments::amount_cents))
        .get_result(conn)?;

    Ok(total.unwrap_or(0))
}
}
