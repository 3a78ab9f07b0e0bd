// responses/json.rs
use crate::errors::ServerError;
use crate::responses::{build, ResultResp};
use astra::Response;
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

/// Serialize `value` as a 200 JSON response.
pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body = serde_json::to_string(value).map_err(|e| {
        error!(error = %e, "failed to serialize response body");
        ServerError::InternalError
    })?;
    Ok(json_with_status(200, body))
}

/// JSON error body for an API failure.
///
/// Bad input and not-found keep their own message. Everything else is logged
/// here and replaced by `generic`, so database text never reaches the client.
pub fn json_error(err: &ServerError, generic: &str) -> Response {
    match err {
        ServerError::NotFound => {
            warn!(resource = generic, "api resource not found");
            json_with_status(404, json!({ "error": generic }).to_string())
        }
        ServerError::BadRequest(msg) => {
            warn!(reason = %msg, "rejected api request");
            json_with_status(400, json!({ "error": msg }).to_string())
        }
        other => {
            error!(error = %other, "{generic}");
            json_with_status(other.status(), json!({ "error": generic }).to_string())
        }
    }
}

pub(crate) fn json_with_status(status: u16, body: String) -> Response {
    build(status, mime::APPLICATION_JSON.as_ref(), body)
}
