// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the
//! persistence layer. Every multi-step operation (reservation creation,
//! check-in, check-out, cancellation, payment processing and refunds,
//! room retirement) runs inside a single Diesel transaction: the guard
//! check, the dependent writes, and the derived-state recomputation
//! either all commit or all roll back.
//!
//! Lifecycle guards are expressed as conditional UPDATEs
//! (`... WHERE status = '<expected>'`) validated by affected-row count,
//! never as read-then-write sequences.
//!
//! ## Module Organization
//!
//! - `guests` — guest upsert (the only booking-tied guest entry point)
//! - `operators` — operator accounts and sessions
//! - `payments` — payment creation, processing, refunds, reconciliation
//! - `reservations` — reservation lifecycle transitions
//! - `rooms` — room creation, detail updates, soft retirement

pub mod guests;
pub mod operators;
pub mod payments;
pub mod reservations;
pub mod rooms;

pub use reservations::ReservationDraft;
pub use rooms::RoomDetailsUpdate;
