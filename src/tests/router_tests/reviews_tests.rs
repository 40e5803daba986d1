// src/tests/router_tests/reviews_tests.rs

use crate::reviews::RawReview;
use crate::router::{handle, respond};
use crate::tests::utils::{
    body_json, failing_upstream_state, fallback_dataset, get, ids, state_with, CannedProvider,
};

#[test]
fn upstream_failure_still_serves_fallback_reviews() {
    let state = failing_upstream_state();

    let resp = handle(get("/api/reviews/hostaway"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["status"], "success");
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["count"], 11);
    assert_eq!(body["data"].as_array().unwrap().len(), 11);
}

#[test]
fn live_reviews_are_tagged_live() {
    let live: Vec<RawReview> = fallback_dataset().into_iter().take(2).collect();
    let state = state_with(Some(Box::new(CannedProvider(live))), fallback_dataset());

    let body = body_json(handle(get("/api/reviews/hostaway"), &state).unwrap());
    assert_eq!(body["source"], "live");
    assert_eq!(body["count"], 2);
}

#[test]
fn reviews_are_normalized() {
    let state = failing_upstream_state();
    let body = body_json(handle(get("/api/reviews/hostaway"), &state).unwrap());

    let find = |id: i64| {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["id"] == id)
            .cloned()
            .unwrap_or_else(|| panic!("review {id} missing"))
    };

    let shane = find(7453);
    assert_eq!(shane["averageRating"], 10.0);
    assert_eq!(shane["channel"], "Hostaway");
    assert_eq!(shane["propertyId"], "2B-N1");
    assert_eq!(shane["type"], "host-to-guest");
    assert_eq!(shane["isApproved"], false);
    assert_eq!(shane["submittedAt"], "2020-08-21 22:45:14");
    assert!(shane["submittedDate"].as_str().unwrap().starts_with("2020-08-21T22:45:14"));

    assert_eq!(find(7454)["averageRating"], 9.3);
    assert_eq!(find(7456)["averageRating"], 9.5);
    assert_eq!(find(7463)["averageRating"], 7.8);
}

#[test]
fn default_order_is_newest_first() {
    let state = failing_upstream_state();
    let body = body_json(handle(get("/api/reviews/hostaway"), &state).unwrap());

    let order = ids(&body["data"]);
    assert_eq!(order.first(), Some(&7463));
    assert_eq!(order.last(), Some(&7453));
}

#[test]
fn filters_by_property_channel_and_rating() {
    let state = failing_upstream_state();

    let by_property = body_json(handle(get("/api/reviews/hostaway?property=2B-N1"), &state).unwrap());
    assert_eq!(by_property["count"], 5);
    for r in by_property["data"].as_array().unwrap() {
        assert_eq!(r["propertyId"], "2B-N1");
    }

    let by_channel = body_json(handle(get("/api/reviews/hostaway?channel=Hostaway"), &state).unwrap());
    assert_eq!(ids(&by_channel["data"]), vec![7461, 7453]);

    let by_rating = body_json(handle(get("/api/reviews/hostaway?minRating=9.5"), &state).unwrap());
    assert_eq!(by_rating["count"], 5);

    let combined = body_json(
        handle(
            get("/api/reviews/hostaway?property=1B-W8&channel=Booking.com&minRating=8"),
            &state,
        )
        .unwrap(),
    );
    assert_eq!(ids(&combined["data"]), vec![7459]);
}

#[test]
fn sorts_by_rating_ascending() {
    let state = failing_upstream_state();
    let body = body_json(
        handle(get("/api/reviews/hostaway?sort=rating&order=asc"), &state).unwrap(),
    );

    let ratings: Vec<f64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["averageRating"].as_f64().unwrap())
        .collect();
    assert_eq!(ratings.first(), Some(&6.0));
    assert!(ratings.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn invalid_min_rating_is_a_400_json_error() {
    let state = failing_upstream_state();

    let resp = respond(get("/api/reviews/hostaway?minRating=lots"), &state);
    assert_eq!(resp.status(), 400);

    let body = body_json(resp);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("minRating"));
}

#[test]
fn approval_state_is_reported_per_review() {
    let state = failing_upstream_state();
    state.approvals.approve(7454);

    let body = body_json(handle(get("/api/reviews/hostaway?property=2B-N1"), &state).unwrap());
    for r in body["data"].as_array().unwrap() {
        assert_eq!(r["isApproved"], r["id"] == 7454, "review {}", r["id"]);
    }
}

#[test]
fn stats_cover_each_listing() {
    let state = failing_upstream_state();
    let body = body_json(handle(get("/api/reviews/stats"), &state).unwrap());

    let stats = body["data"].as_array().unwrap();
    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0]["propertyName"], "2B N1 A - 29 Shoreditch Heights");
    assert_eq!(stats[0]["propertyId"], "2B-N1");
    assert_eq!(stats[0]["totalReviews"], 5);
    assert_eq!(stats[0]["channelBreakdown"]["Airbnb"], 2);
    assert_eq!(stats[0]["channelBreakdown"]["Hostaway"], 1);
    assert!(["up", "down", "stable"].contains(&stats[0]["trend"].as_str().unwrap()));
}

#[test]
fn bad_upstream_timestamp_is_a_generic_500() {
    let mut broken = fallback_dataset();
    broken[0].submitted_at = "not a date".to_string();
    let state = state_with(None, broken);

    let resp = respond(get("/api/reviews/hostaway"), &state);
    assert_eq!(resp.status(), 500);

    let body = body_json(resp);
    assert_eq!(body["message"], "Internal Server Error");
}

#[test]
fn offset_less_iso_timestamp_is_read_as_utc() {
    let mut dataset = fallback_dataset();
    dataset[0].submitted_at = "2020-08-21T22:45:14".to_string();
    let state = state_with(None, dataset);

    let resp = handle(get("/api/reviews/hostaway"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["count"], 11);
    let first = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == 7453)
        .unwrap();
    assert!(first["submittedDate"].as_str().unwrap().starts_with("2020-08-21T22:45:14"));
}

#[test]
fn unknown_api_route_is_json_404() {
    let state = failing_upstream_state();
    let resp = respond(get("/api/reviews/nope"), &state);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["status"], "error");
}
