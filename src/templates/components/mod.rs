use maud::{html, Markup};

pub mod card;
pub mod comps;
pub mod error;

pub use card::{card, stat_tile};
pub use comps::{builder_comps_table, mls_comps_table};
pub use error::html_error_response;

/// Rounded icon badge used in front of section headings.
pub fn icon_badge(symbol: &str, background: &str) -> Markup {
    html! {
        span style=(format!("display: inline-flex; align-items: center; justify-content: center; width: 2.5rem; height: 2.5rem; border-radius: 9999px; background: {background}; font-weight: 700;")) {
            (symbol)
        }
    }
}
