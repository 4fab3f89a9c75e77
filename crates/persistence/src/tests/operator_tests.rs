// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator accounts and sessions.

use crate::PersistenceError;
use crate::tests::helpers::{NOW, test_persistence};

#[test]
fn test_create_operator_normalizes_login_and_hashes_password() {
    let mut p = test_persistence();
    let operator = p
        .create_operator("desk", "Front Desk", "correct horse battery", "Admin", NOW)
        .unwrap();

    assert_eq!(operator.login_name, "DESK");
    assert_ne!(operator.password_hash, "correct horse battery");
    assert!(!operator.is_disabled);
}

#[test]
fn test_duplicate_login_name_is_refused() {
    let mut p = test_persistence();
    p.create_operator("desk", "Front Desk", "pw-one-two-three", "Admin", NOW)
        .unwrap();

    let result = p.create_operator("DESK", "Other Desk", "pw-four-five-six", "Receptionist", NOW);
    assert_eq!(
        result.unwrap_err(),
        PersistenceError::DuplicateLoginName(String::from("DESK"))
    );
}

#[test]
fn test_verify_credentials() {
    let mut p = test_persistence();
    p.create_operator("desk", "Front Desk", "correct horse battery", "Admin", NOW)
        .unwrap();

    // Case-insensitive login, exact password.
    let ok = p
        .verify_operator_credentials("desk", "correct horse battery")
        .unwrap();
    assert!(ok.is_some());

    let wrong_password = p.verify_operator_credentials("desk", "wrong").unwrap();
    assert!(wrong_password.is_none());

    let unknown = p
        .verify_operator_credentials("nobody", "correct horse battery")
        .unwrap();
    assert!(unknown.is_none());
}

#[test]
fn test_session_round_trip() {
    let mut p = test_persistence();
    let operator = p
        .create_operator("desk", "Front Desk", "correct horse battery", "Admin", NOW)
        .unwrap();

    p.create_session(
        "session-token-1",
        operator.operator_id,
        NOW,
        "2026-03-03T08:00:00Z",
    )
    .unwrap();

    let session = p.get_session_by_token("session-token-1").unwrap().unwrap();
    assert_eq!(session.operator_id, operator.operator_id);
    assert_eq!(session.expires_at, "2026-03-03T08:00:00Z");

    p.update_session_activity(session.session_id, "2026-02-01T09:00:00Z")
        .unwrap();
    let refreshed = p.get_session_by_token("session-token-1").unwrap().unwrap();
    assert_eq!(refreshed.last_activity_at, "2026-02-01T09:00:00Z");

    p.delete_session("session-token-1").unwrap();
    assert!(p.get_session_by_token("session-token-1").unwrap().is_none());
}

#[test]
fn test_update_last_login() {
    let mut p = test_persistence();
    let operator = p
        .create_operator("desk", "Front Desk", "correct horse battery", "Admin", NOW)
        .unwrap();
    assert!(operator.last_login_at.is_none());

    p.update_last_login(operator.operator_id, "2026-02-02T10:00:00Z")
        .unwrap();
    let refreshed = p
        .get_operator_by_id(operator.operator_id)
        .unwrap()
        .unwrap();
    assert_eq!(
        refreshed.last_login_at.as_deref(),
        Some("2026-02-02T10:00:00Z")
    );
}

#[test]
fn test_list_operators() {
    let mut p = test_persistence();
    p.create_operator("zoe", "Zoe", "pw-one-two-three", "Receptionist", NOW)
        .unwrap();
    p.create_operator("abe", "Abe", "pw-four-five-six", "Admin", NOW)
        .unwrap();

    let operators = p.list_operators().unwrap();
    assert_eq!(operators.len(), 2);
    assert_eq!(operators[0].login_name, "ABE");
    assert_eq!(operators[1].login_name, "ZOE");
}
