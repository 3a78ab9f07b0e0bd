use crate::domain::{BuilderComp, MlsComp};
use crate::templates::format;
use maud::{html, Markup};

/// Rows shown per comps table; the API returns all of them.
pub const COMPS_DISPLAY_LIMIT: usize = 10;

pub fn builder_comps_table(comps: &[BuilderComp]) -> Markup {
    html! {
        section class="card" style="padding: 0;" {
            div style="padding: 1.25rem 1.5rem;" {
                h3 style="margin: 0; display: flex; justify-content: space-between;" {
                    span { "Builder Purchase Comps" }
                    span class="badge" { (comps.len()) " comps" }
                }
                p class="muted" style="margin: 0.25rem 0 0;" { "Recent vacant lot purchases by builders in this area" }
            }
            div style="overflow-x: auto;" {
                table {
                    thead {
                        tr {
                            th { "Address" }
                            th { "Date" }
                            th { "Price" }
                            th { "$/sqft" }
                        }
                    }
                    tbody {
                        @if comps.is_empty() {
                            tr { td colspan="4" class="empty" { "No builder purchase comps available" } }
                        }
                        @for comp in comps.iter().take(COMPS_DISPLAY_LIMIT) {
                            tr {
                                td { (comp.full_address.as_deref().unwrap_or("N/A")) }
                                td { (format::date(comp.instrument_date)) }
                                td style="font-weight: 600;" { (format::currency(comp.transfer_amount)) }
                                td { (format::currency(comp.price_per_sqft)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn mls_comps_table(comps: &[MlsComp]) -> Markup {
    html! {
        section class="card" style="padding: 0;" {
            div style="padding: 1.25rem 1.5rem;" {
                h3 style="margin: 0; display: flex; justify-content: space-between;" {
                    span { "New Construction Sales" }
                    span class="badge" { (comps.len()) " comps" }
                }
                p class="muted" style="margin: 0.25rem 0 0;" { "Recently built and sold homes in the neighborhood" }
            }
            div style="overflow-x: auto;" {
                table {
                    thead {
                        tr {
                            th { "Address" }
                            th { "List Date" }
                            th { "Sale Price" }
                            th { "$/sqft" }
                        }
                    }
                    tbody {
                        @if comps.is_empty() {
                            tr { td colspan="4" class="empty" { "No new construction comps available" } }
                        }
                        @for comp in comps.iter().take(COMPS_DISPLAY_LIMIT) {
                            tr {
                                td { (comp.full_address.as_deref().unwrap_or("N/A")) }
                                td { (format::date(comp.list_date)) }
                                td style="font-weight: 600;" { (format::currency(comp.best_price())) }
                                td { (format::currency(comp.price_per_sqft)) }
                            }
                        }
                    }
                }
            }
        }
    }
}
