use crate::errors::ServerError;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError on an `/api/` path into a JSON response.
pub fn api_error_response(err: ServerError) -> Response {
    let message = match &err {
        ServerError::NotFound => "Not found",
        _ => "Request failed",
    };
    crate::responses::json::json_error(&err, message)
}
