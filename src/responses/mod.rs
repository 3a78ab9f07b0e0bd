pub mod errors;
pub mod html;
pub mod json;

use astra::{Body, Response, ResponseBuilder};

pub use errors::{api_error_response, ResultResp};

// Normal HTML response
pub use html::html_response;
pub use json::{json_error, json_response};

/// Builds a response with a body and content type, falling back to a bare 500.
pub(crate) fn build(status: u16, content_type: &str, body: String) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type)
        .body(Body::from(body))
        .unwrap_or_else(|_| {
            let mut resp = Response::new(Body::from("Internal Server Error"));
            *resp.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
            resp
        })
}
