// handlers/pages.rs
use crate::catalog::{find_property, PROPERTIES};
use crate::domain::{aggregate, query, summarize, Filters, Sort};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::router::parse_query;
use crate::state::AppState;
use crate::templates::pages::{self, DashboardVm, PropertyVm, ReviewRow};
use astra::Request;
use log::info;
use std::collections::HashMap;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn home() -> ResultResp {
    html_response(pages::home_page(PROPERTIES))
}

/// GET /dashboard — same query parameters as the list API.
pub fn dashboard(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let filters = Filters::from_params(&params)?;
    let sort = Sort::from_params(&params)?;

    let (source, reviews) = state.reviews()?;
    let approved = state.approvals.list_approved();

    let mut properties: Vec<(String, String)> = Vec::new();
    let mut channels: Vec<String> = Vec::new();
    for r in &reviews {
        if !properties.iter().any(|(id, _)| *id == r.property_id) {
            properties.push((r.property_id.clone(), r.listing_name.clone()));
        }
        if !channels.contains(&r.channel) {
            channels.push(r.channel.clone());
        }
    }
    channels.sort();

    let rows = query(&reviews, &filters, sort)
        .into_iter()
        .map(|review| ReviewRow {
            is_approved: approved.contains(&review.id),
            review,
        })
        .collect();

    let vm = DashboardVm {
        source,
        stats: aggregate(&reviews),
        total_reviews: reviews.len(),
        approved_count: approved.len(),
        rows,
        properties,
        channels,
        filters,
        sort,
        return_to: match req.uri().query() {
            Some(q) if !q.is_empty() => format!("/dashboard?{q}"),
            _ => "/dashboard".to_string(),
        },
    };

    html_response(pages::dashboard_page(&vm))
}

/// POST /dashboard/reviews/{id}/approval
///
/// Form fields: `approved` (true | false), optional `return_to`.
pub fn toggle_approval(mut req: Request, review_id: i64, state: &AppState) -> ResultResp {
    let mut raw = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    let form: HashMap<String, String> = url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect();

    let approved = match form.get("approved").map(String::as_str) {
        Some("true") => true,
        Some("false") => false,
        _ => {
            return Err(ServerError::BadRequest(
                "approved must be 'true' or 'false'".to_string(),
            ))
        }
    };

    // Only ever bounce back into the dashboard, and only to a valid header value.
    let location = form
        .get("return_to")
        .filter(|to| to.as_str() == "/dashboard" || to.starts_with("/dashboard?"))
        .filter(|to| to.chars().all(|c| c.is_ascii_graphic()))
        .map(String::as_str)
        .unwrap_or("/dashboard");
    let resp = redirect_response(location)?;

    state.approvals.set_approved(review_id, approved);
    info!(
        "Review {review_id} {} from dashboard",
        if approved { "approved" } else { "unapproved" }
    );

    Ok(resp)
}

/// GET /property/{id} — public page, approved reviews only.
pub fn property(property_id: &str, state: &AppState) -> ResultResp {
    let details = find_property(property_id).ok_or(ServerError::NotFound)?;

    let (_, reviews) = state.reviews()?;
    let filters = Filters {
        property: Some(property_id.to_string()),
        ..Filters::default()
    };

    let approved = state.approvals.list_approved();
    let published: Vec<_> = query(&reviews, &filters, Sort::default())
        .into_iter()
        .filter(|r| approved.contains(&r.id))
        .collect();

    let vm = PropertyVm {
        details,
        summary: summarize(&published),
        reviews: published,
    };

    html_response(pages::property_page(&vm))
}
