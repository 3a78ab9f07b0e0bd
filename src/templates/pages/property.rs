use crate::domain::PropertyDetail;
use crate::templates::{
    components::{builder_comps_table, mls_comps_table, stat_tile},
    desktop_layout, format,
};
use maud::{html, Markup};

pub fn property_page(detail: &PropertyDetail) -> Markup {
    let p = &detail.property;
    let address = p.situs_address.as_deref().unwrap_or("Address unavailable");

    desktop_layout(
        address,
        html! {
            section class="hero" {
                div class="container" style="padding: 2rem 1rem;" {
                    a href="/" style="opacity: 0.8; text-decoration: none;" { "← Back to Home" }
                    h1 style="font-size: 2.25rem; margin: 1rem 0 0.5rem;" { "Property Analysis" }
                    p style="font-size: 1.2rem; opacity: 0.9; margin: 0;" {
                        "Comprehensive investment analysis for off-market lot opportunity"
                    }
                }
            }

            main class="container" style="padding: 2rem 1rem;" {
                section class="card" style="margin-bottom: 2rem;" {
                    div style="display: flex; justify-content: space-between; align-items: flex-start;" {
                        div {
                            h2 style="margin: 0;" { (address) }
                            p class="muted" style="font-size: 1.1rem; margin: 0.5rem 0 0;" { (p.locality()) }
                        }
                        span class="badge" { "ID: " (p.attom_id) }
                    }

                    div class="grid grid-3" style="margin-top: 1.5rem;" {
                        div {
                            p class="muted" style="margin: 0;" { "Lot Size" }
                            p style="font-size: 1.1rem; font-weight: 600; margin: 0;" {
                                (format::number(p.lot_size_square_feet)) " sq ft"
                            }
                        }
                        @if let Some(year) = p.known_year_built() {
                            div {
                                p class="muted" style="margin: 0;" { "Year Built" }
                                p style="font-size: 1.1rem; font-weight: 600; margin: 0;" { (year) }
                            }
                        }
                        @if let Some(sqft) = p.known_square_footage() {
                            div {
                                p class="muted" style="margin: 0;" { "Building Size" }
                                p style="font-size: 1.1rem; font-weight: 600; margin: 0;" {
                                    (format::number(Some(sqft))) " sq ft"
                                }
                            }
                        }
                    }
                }

                div class="grid grid-4" style="margin-bottom: 2rem;" {
                    (stat_tile("Suggested Lot Price", &format::currency(p.predicted_lot_price), "Based on builder comparables"))
                    (stat_tile("Potential Sale Price", &format::currency(p.predicted_sale_price), "New construction value"))
                    (stat_tile("Potential Profit", &format::currency(p.potential_profit), "Gross profit estimate"))
                    (stat_tile("ROI Percentage", &format::percent(p.potential_profit_percentage), "Return on investment"))
                }

                div class="grid grid-2" style="margin-bottom: 2rem;" {
                    (builder_comps_table(&detail.builder_comps))
                    (mls_comps_table(&detail.mls_comps))
                }

                (summary(detail))
            }
        },
    )
}

fn summary(detail: &PropertyDetail) -> Markup {
    let p = &detail.property;

    html! {
        section class="card hero dark" style="border: none;" {
            h2 style="text-align: center; margin-top: 0;" { "Investment Analysis Summary" }
            div class="grid grid-2" style="gap: 3rem;" {
                div {
                    h3 { "Investment Metrics" }
                    div class="row" {
                        span { "Suggested Lot Purchase:" }
                        strong { (format::currency(p.predicted_lot_price)) }
                    }
                    div class="row" {
                        span { "Potential Sale Price:" }
                        strong { (format::currency(p.predicted_sale_price)) }
                    }
                    div class="row" {
                        span { "Potential Profit:" }
                        strong style="color: #4ade80;" { (format::currency(p.potential_profit)) }
                    }
                }
                div {
                    h3 { "Comparable Analysis" }
                    div class="row" {
                        span { "Builder Purchases Analyzed:" }
                        strong { (detail.builder_comps.len()) }
                    }
                    div class="row" {
                        span { "New Construction Sales:" }
                        strong { (detail.mls_comps.len()) }
                    }
                    div class="row" {
                        span { "Total Comparables:" }
                        strong { (detail.total_comps()) }
                    }
                }
            }
            p style="font-size: 0.85rem; opacity: 0.7; text-align: center; margin-top: 2rem;" {
                "All prices are estimates based on comparable sales. Actual values may vary. "
                "Professional consultation recommended before making investment decisions."
            }
        }
    }
}
