// src/tests/router_tests/approval_tests.rs

use crate::router::{handle, respond};
use crate::tests::utils::{body_json, failing_upstream_state, get, post};
use std::collections::BTreeSet;

fn post_approval(body: &str) -> astra::Request {
    post("/api/reviews/approve", "application/json", body)
}

#[test]
fn store_starts_empty() {
    let state = failing_upstream_state();

    let resp = handle(get("/api/reviews/approve"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["status"], "success");
    assert_eq!(body["approvedReviewIds"], serde_json::json!([]));
}

#[test]
fn approve_then_list() {
    let state = failing_upstream_state();

    let resp = handle(post_approval(r#"{"reviewId": 7455, "approved": true}"#), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_json(resp);
    assert_eq!(body["reviewId"], 7455);
    assert_eq!(body["approved"], true);
    assert_eq!(body["message"], "Review approved successfully");

    handle(post_approval(r#"{"reviewId": 7453, "approved": true}"#), &state).unwrap();

    let listed = body_json(handle(get("/api/reviews/approve"), &state).unwrap());
    assert_eq!(listed["approvedReviewIds"], serde_json::json!([7453, 7455]));
}

#[test]
fn unapprove_removes_id() {
    let state = failing_upstream_state();
    state.approvals.approve(5);

    let body = body_json(
        handle(post_approval(r#"{"reviewId": 5, "approved": false}"#), &state).unwrap(),
    );
    assert_eq!(body["approved"], false);
    assert_eq!(body["message"], "Review unapproved successfully");
    assert!(!state.approvals.is_approved(5));
}

#[test]
fn unapprove_unknown_id_is_a_no_op() {
    let state = failing_upstream_state();

    let resp = handle(post_approval(r#"{"reviewId": 99, "approved": false}"#), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(state.approvals.list_approved().is_empty());
}

#[test]
fn non_integer_id_is_rejected_without_change() {
    let state = failing_upstream_state();
    state.approvals.approve(1);

    for body in [
        r#"{"reviewId": "7453", "approved": true}"#,
        r#"{"reviewId": 7.5, "approved": true}"#,
        r#"{"approved": false}"#,
    ] {
        let resp = respond(post_approval(body), &state);
        assert_eq!(resp.status(), 400, "{body}");
        let json = body_json(resp);
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Invalid reviewId");
    }

    assert_eq!(state.approvals.list_approved(), BTreeSet::from([1]));
}

#[test]
fn malformed_body_is_rejected() {
    let state = failing_upstream_state();

    let resp = respond(post_approval("{not json"), &state);
    assert_eq!(resp.status(), 400);

    let resp = respond(post_approval(r#"{"reviewId": 3, "approved": "yes"}"#), &state);
    assert_eq!(resp.status(), 400);
    assert!(state.approvals.list_approved().is_empty());
}

#[test]
fn each_state_gets_its_own_store() {
    let first = failing_upstream_state();
    first.approvals.approve(7453);

    let second = failing_upstream_state();
    assert!(!second.approvals.is_approved(7453));
}
