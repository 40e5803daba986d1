// handlers/api.rs
use crate::domain::{aggregate, query, Filters, ReviewView, Sort};
use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};
use crate::router::parse_query;
use crate::state::AppState;
use astra::Request;
use log::info;
use serde_json::{json, Value};
use std::io::Read;

/// Largest request body we are willing to parse.
const MAX_BODY_BYTES: u64 = 64 * 1024;

/// GET /api/reviews/hostaway
///
/// Query parameters:
/// - property: propertyId exact match
/// - channel: channel exact match
/// - minRating: inclusive lower bound on averageRating
/// - sort: date | rating (default date)
/// - order: asc | desc (default desc)
pub fn list_reviews(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let filters = Filters::from_params(&params)?;
    let sort = Sort::from_params(&params)?;

    let (source, reviews) = state.reviews()?;
    let results = query(&reviews, &filters, sort);

    let approved = state.approvals.list_approved();
    let data: Vec<ReviewView> = results
        .iter()
        .map(|review| ReviewView {
            review,
            is_approved: approved.contains(&review.id),
        })
        .collect();

    json_response(
        200,
        &json!({
            "status": "success",
            "source": source,
            "count": data.len(),
            "data": data,
        }),
    )
}

/// GET /api/reviews/stats
pub fn review_stats(state: &AppState) -> ResultResp {
    let (source, reviews) = state.reviews()?;

    json_response(
        200,
        &json!({
            "status": "success",
            "source": source,
            "data": aggregate(&reviews),
        }),
    )
}

/// GET /api/reviews/approve
pub fn list_approvals(state: &AppState) -> ResultResp {
    let ids: Vec<i64> = state.approvals.list_approved().into_iter().collect();

    json_response(
        200,
        &json!({
            "status": "success",
            "approvedReviewIds": ids,
        }),
    )
}

/// POST /api/reviews/approve
///
/// Body: { "reviewId": integer, "approved": boolean }
pub fn set_approval(mut req: Request, state: &AppState) -> ResultResp {
    let mut raw = String::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable request body: {e}")))?;

    let (review_id, approved) = parse_approval(&raw)?;
    state.approvals.set_approved(review_id, approved);

    let verb = if approved { "approved" } else { "unapproved" };
    info!("Review {review_id} {verb}");

    json_response(
        200,
        &json!({
            "status": "success",
            "reviewId": review_id,
            "approved": approved,
            "message": format!("Review {verb} successfully"),
        }),
    )
}

/// Validates the whole body before anything is applied.
fn parse_approval(raw: &str) -> Result<(i64, bool), ServerError> {
    let body: Value = serde_json::from_str(raw)
        .map_err(|_| ServerError::BadRequest("Request body must be JSON".to_string()))?;

    let review_id = body
        .get("reviewId")
        .and_then(Value::as_i64)
        .ok_or_else(|| ServerError::BadRequest("Invalid reviewId".to_string()))?;

    let approved = body
        .get("approved")
        .and_then(Value::as_bool)
        .ok_or_else(|| ServerError::BadRequest("Invalid approved flag".to_string()))?;

    Ok((review_id, approved))
}
