use crate::errors::ServerError;
use crate::templates;
use astra::{Body, Response, ResponseBuilder};
use log::error;
use serde_json::json;

/// Render a ServerError as an HTML error page.
pub fn html_error_response(err: ServerError) -> Response {
    log_error(&err);
    let status = err.status();
    let page = templates::error_page(status, &err.public_message()).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Render a ServerError as `{"status":"error","message":..}`.
pub fn json_error_response(err: ServerError) -> Response {
    log_error(&err);
    let body = json!({
        "status": "error",
        "message": err.public_message(),
    })
    .to_string();

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

fn log_error(err: &ServerError) {
    if let ServerError::Internal(detail) = err {
        error!("Request failed: {detail}");
    }
}
