use crate::errors::ServerError;
use crate::handlers::{api, pages};
use crate::responses::{html_error_response, json_error_response, ResultResp};
use crate::state::AppState;
use astra::{Request, Response};
use log::info;
use std::collections::HashMap;
use std::time::Instant;

/// Dispatch a request and render any error for the kind of route it hit:
/// JSON under `/api/`, an HTML page everywhere else.
pub fn respond(req: Request, state: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) if path.starts_with("/api/") => json_error_response(err),
        Err(err) => html_error_response(err),
    };

    info!(
        "{method} {path} -> {} in {:?}",
        resp.status().as_u16(),
        started.elapsed()
    );
    resp
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => pages::home(),
        ("GET", ["dashboard"]) => pages::dashboard(&req, state),
        ("POST", ["dashboard", "reviews", id, "approval"]) => {
            let id = parse_review_id(id)?;
            pages::toggle_approval(req, id, state)
        }
        ("GET", ["property", id]) => pages::property(id, state),

        ("GET", ["api", "reviews", "hostaway"]) => api::list_reviews(&req, state),
        ("GET", ["api", "reviews", "stats"]) => api::review_stats(state),
        ("GET", ["api", "reviews", "approve"]) => api::list_approvals(state),
        ("POST", ["api", "reviews", "approve"]) => api::set_approval(req, state),

        _ => Err(ServerError::NotFound),
    }
}

fn parse_review_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid reviewId: {raw:?}")))
}

/// Decoded query-string pairs. Later duplicates win.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
