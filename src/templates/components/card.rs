use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Headline figure with a caption, used for statistics and investment metrics.
pub fn stat_tile(label: &str, value: &str, caption: &str) -> Markup {
    html! {
        div class="card" style="text-align: center;" {
            p class="muted" style="margin: 0 0 0.25rem; font-size: 0.9rem;" { (label) }
            p style="margin: 0; font-size: 1.9rem; font-weight: 700;" { (value) }
            p class="muted" style="margin: 0.25rem 0 0; font-size: 0.8rem;" { (caption) }
        }
    }
}
