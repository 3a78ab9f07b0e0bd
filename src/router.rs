use crate::api;
use crate::errors::ServerError;
use crate::responses::{api_error_response, html_response, ResultResp};
use crate::state::AppState;
use crate::templates;
use astra::{Request, Response};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Entry point for the server: never fails, errors become error pages.
pub fn respond(req: Request, state: &AppState) -> Response {
    let is_api = req.uri().path().starts_with("/api/");

    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) if is_api => api_error_response(err),
        Err(err) => templates::html_error_response(err),
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path().trim_end_matches('/');
    let path = if path.is_empty() { "/" } else { path };
    let query = parse_query(&req);

    debug!(method, path, "request");

    if method != "GET" {
        return Err(ServerError::NotFound);
    }

    let repo = state.repo.as_ref();

    match path {
        "/" => home(state),

        "/api/cities" => api::cities::get_cities(repo),
        "/api/property" => api::properties::list_properties(repo, &query),
        "/api/statistics" => api::statistics::get_statistics(repo),
        "/api/test-property" => api::diagnostics::check_property(repo, &query),

        _ => {
            if let Some(id) = single_segment(path, "/api/property/") {
                api::properties::get_property(repo, &decode_segment(id)?)
            } else if let Some(id) = single_segment(path, "/property/") {
                property(state, &decode_segment(id)?)
            } else {
                Err(ServerError::NotFound)
            }
        }
    }
}

fn home(state: &AppState) -> ResultResp {
    // the landing page still renders without its statistics band
    let stats = match state.api.statistics() {
        Ok(stats) => Some(stats),
        Err(err) => {
            warn!(error = %err, "statistics unavailable for home page");
            None
        }
    };
    html_response(templates::pages::home_page(stats.as_ref()))
}

fn property(state: &AppState, attom_id: &str) -> ResultResp {
    match state.api.property_detail(attom_id)? {
        Some(detail) => html_response(templates::pages::property_page(&detail)),
        None => Err(ServerError::NotFound),
    }
}

/// The remainder of `path` after `prefix`, if it is exactly one segment.
fn single_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    path.strip_prefix(prefix)
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
}

/// Percent-decodes a path segment, e.g. `A%201` -> `A 1`.
fn decode_segment(segment: &str) -> Result<Cow<'_, str>, ServerError> {
    percent_decode_str(segment)
        .decode_utf8()
        .map_err(|_| ServerError::BadRequest("path is not valid UTF-8".into()))
}

/// Query parameters; the first occurrence of a repeated key wins.
fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if let Some(q) = req.uri().query() {
        for (key, value) in url::form_urlencoded::parse(q.as_bytes()).into_owned() {
            params.entry(key).or_insert(value);
        }
    }
    params
}
