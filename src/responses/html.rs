use crate::responses::{build, ResultResp};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    Ok(html_with_status(200, markup.into_string()))
}

pub(crate) fn html_with_status(status: u16, body: String) -> astra::Response {
    build(status, mime::TEXT_HTML_UTF_8.as_ref(), body)
}
