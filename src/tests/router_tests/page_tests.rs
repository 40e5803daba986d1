// src/tests/router_tests/page_tests.rs

use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, failing_upstream_state, get, post};

const FORM: &str = "application/x-www-form-urlencoded";

#[test]
fn home_links_to_dashboard_and_properties() {
    let state = failing_upstream_state();

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("href=\"/dashboard\""));
    assert!(body.contains("/property/2B-N1"));
    assert!(body.contains("/property/1B-W8"));
}

#[test]
fn dashboard_shows_stats_and_every_review() {
    let state = failing_upstream_state();
    state.approvals.approve(7454);

    let resp = handle(get("/dashboard"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Property Performance"));
    assert!(body.contains("Kensington Gardens Flat"));
    assert!(body.contains("<strong>11</strong> of 11 reviews"));
    assert!(body.contains("<strong>1</strong> approved"));
    assert!(body.contains("id=\"fallback-notice\""));
    assert!(body.contains("id=\"review-7453\""));
    assert!(body.contains("✓ Approved"));
}

#[test]
fn dashboard_applies_filters() {
    let state = failing_upstream_state();

    let body = body_string(handle(get("/dashboard?property=1B-W8&sort=rating"), &state).unwrap());
    assert!(body.contains("<strong>4</strong> of 11 reviews"));
    assert!(!body.contains("id=\"review-7453\""));
    assert!(body.contains("id=\"review-7458\""));
    assert!(body.contains("Clear filters"));
}

#[test]
fn dashboard_with_no_matches_says_so() {
    let state = failing_upstream_state();
    let body = body_string(handle(get("/dashboard?minRating=10.5"), &state).unwrap());
    assert!(body.contains("No reviews match your filters"));
}

#[test]
fn dashboard_rejects_bad_filters() {
    let state = failing_upstream_state();

    let err = handle(get("/dashboard?minRating=high"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let resp = respond(get("/dashboard?order=sideways"), &state);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("order must be"));
}

#[test]
fn approve_form_toggles_and_redirects_back() {
    let state = failing_upstream_state();

    let req = post(
        "/dashboard/reviews/7454/approval",
        FORM,
        "approved=true&return_to=%2Fdashboard%3Fproperty%3D2B-N1",
    );
    let resp = handle(req, &state).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/dashboard?property=2B-N1"
    );
    assert!(state.approvals.is_approved(7454));

    let req = post("/dashboard/reviews/7454/approval", FORM, "approved=false");
    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.headers().get("Location").unwrap(), "/dashboard");
    assert!(!state.approvals.is_approved(7454));
}

#[test]
fn approve_form_never_redirects_off_site() {
    let state = failing_upstream_state();

    let req = post(
        "/dashboard/reviews/1/approval",
        FORM,
        "approved=true&return_to=https%3A%2F%2Fevil.example%2F",
    );
    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.headers().get("Location").unwrap(), "/dashboard");
}

#[test]
fn approve_form_ignores_return_to_with_header_breaking_characters() {
    let state = failing_upstream_state();

    let req = post(
        "/dashboard/reviews/1/approval",
        FORM,
        "approved=true&return_to=%2Fdashboard%3Fa%0D%0AX-Injected%3A1",
    );
    let resp = handle(req, &state).expect("Handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/dashboard");
    assert!(state.approvals.is_approved(1));

    let req = post(
        "/dashboard/reviews/2/approval",
        FORM,
        "approved=true&return_to=%2Fdashboard%3Fproperty%3DCaf%C3%A9",
    );
    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.headers().get("Location").unwrap(), "/dashboard");
}

#[test]
fn approve_form_validates_before_mutating() {
    let state = failing_upstream_state();

    let err = handle(post("/dashboard/reviews/abc/approval", FORM, "approved=true"), &state)
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(post("/dashboard/reviews/7/approval", FORM, "approved=maybe"), &state)
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    assert!(state.approvals.list_approved().is_empty());
}

#[test]
fn property_page_shows_only_approved_reviews_for_that_property() {
    let state = failing_upstream_state();

    let body = body_string(handle(get("/property/2B-N1"), &state).unwrap());
    assert!(body.contains("29 Shoreditch Heights"));
    assert!(body.contains("0 approved reviews displayed"));
    assert!(body.contains("No guest reviews yet."));
    assert!(!body.contains("Based on"));

    state.approvals.approve(7454); // 2B-N1
    state.approvals.approve(7458); // 1B-W8

    let body = body_string(handle(get("/property/2B-N1"), &state).unwrap());
    assert!(body.contains("1 approved review displayed"));
    assert!(!body.contains("No guest reviews yet."));
    assert!(body.contains("Amelia Hart"));
    assert!(!body.contains("Sophie Laurent"));
    assert!(!body.contains("Lukas Brandt"));
    assert!(body.contains("Based on 1 review<"));
    assert!(body.contains("9.3"));
}

#[test]
fn unknown_property_is_404_page() {
    let state = failing_upstream_state();

    let resp = respond(get("/property/Nowhere-Special"), &state);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}
