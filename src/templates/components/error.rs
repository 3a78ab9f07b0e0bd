use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use astra::Response;
use maud::{html, PreEscaped, DOCTYPE};
use tracing::error;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found", "We couldn't find that page or property."),

        ServerError::BadRequest(msg) => render_error(400, "Bad Request", &msg),

        other => {
            // details stay in the log
            error!(error = %other, "page request failed");
            render_error(
                other.status(),
                "Something went wrong",
                "We couldn't load this page right now. Please try again shortly.",
            )
        }
    }
}

const ERROR_STYLES: &str = "
    body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }
    h1 { font-size: 2rem; margin-bottom: 1rem; }
    p { font-size: 1.1rem; color: #444; }
";

/// Build a basic HTML error page
fn render_error(status: u16, title: &str, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style { (PreEscaped(ERROR_STYLES)) }
            }
            body {
                h1 { (status) " · " (title) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    };

    html_with_status(status, page.into_string())
}
