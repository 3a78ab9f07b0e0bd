// templates/pages/home.rs

use crate::domain::Statistics;
use crate::templates::{
    components::{card, icon_badge, stat_tile},
    desktop_layout, format,
};
use maud::{html, Markup};

const STEPS: &[(&str, &str)] = &[
    (
        "Data Collection",
        "We aggregate transaction data from public records and MLS listings to build a comprehensive database of property sales and builder activities.",
    ),
    (
        "Pattern Analysis",
        "Our algorithms identify areas where builders are actively purchasing lots, revealing emerging development hotspots before they become widely known.",
    ),
    (
        "Price Prediction",
        "Using comparable sales data, we estimate realistic purchase and sale prices, giving you confidence in your investment decisions.",
    ),
    (
        "Opportunity Identification",
        "We highlight properties with the highest profit potential, allowing you to focus on the most promising investment opportunities.",
    ),
];

const AUDIENCES: &[(&str, &str)] = &[
    ("Builders", "Find perfect lots for your next development project"),
    ("Investors", "Discover off-market opportunities before competitors"),
    ("Wholesalers", "Identify properties to flip to builders at profit"),
    ("Landowners", "Understand the true development value of your property"),
];

/// Landing page. The statistics band is left out when `stats` is `None`.
pub fn home_page(stats: Option<&Statistics>) -> Markup {
    desktop_layout(
        "Off-Market Lot Opportunities",
        html! {
            section class="hero" {
                div class="container" style="padding: 5rem 1rem; text-align: center;" {
                    h1 style="font-size: 3.5rem; margin: 0 0 1.5rem;" { "OffMarketLots.com" }
                    p style="font-size: 1.25rem; opacity: 0.95; max-width: 48rem; margin: 0 auto;" {
                        "Exclusive off-market lot opportunities for builders and developers. "
                        "Pre-comped properties with profit calculations and comprehensive market analysis."
                    }
                }
            }

            @if let Some(stats) = stats {
                (stats_band(stats))
            }

            main class="container" style="padding: 4rem 1rem;" {
                section style="margin-bottom: 4rem;" {
                    h2 style="text-align: center;" { "What We Do" }
                    p class="muted" style="text-align: center;" {
                        "We identify and analyze off-market lot opportunities before they hit the general market"
                    }
                    div class="grid grid-3" {
                        (card("Property Pre-Comping", html! {
                            p class="muted" { "Comprehensive analysis of comparable sales to predict accurate lot purchase prices and potential sale values for new construction." }
                        }))
                        (card("Profit Calculations", html! {
                            p class="muted" { "Detailed profit margin and ROI calculations for new construction projects, helping you identify the most lucrative opportunities." }
                        }))
                        (card("Market Analysis", html! {
                            p class="muted" { "Historical data on builder purchases and new construction sales, providing deep insights into market trends and opportunities." }
                        }))
                    }
                }

                hr;

                section style="margin: 4rem 0;" {
                    h2 style="text-align: center;" { "How It Works" }
                    p class="muted" style="text-align: center;" { "Our systematic approach to identifying profitable lot opportunities" }
                    ol style="max-width: 48rem; margin: 2rem auto; list-style: none; padding: 0;" {
                        @for (n, (title, body)) in STEPS.iter().enumerate() {
                            li style="display: flex; gap: 1.5rem; margin-bottom: 2rem;" {
                                (icon_badge(&(n + 1).to_string(), "#bfdbfe"))
                                div {
                                    h3 style="margin: 0 0 0.5rem;" { (title) }
                                    p class="muted" style="margin: 0;" { (body) }
                                }
                            }
                        }
                    }
                }

                hr;

                section style="margin-top: 4rem;" {
                    h2 style="text-align: center;" { "Who We Serve" }
                    p class="muted" style="text-align: center;" { "Trusted by industry professionals for identifying profitable opportunities" }
                    div class="grid grid-4" style="text-align: center;" {
                        @for (who, why) in AUDIENCES {
                            div {
                                h3 { (who) }
                                p class="muted" { (why) }
                            }
                        }
                    }
                }
            }

            section class="hero dark" {
                div class="container" style="padding: 5rem 1rem; text-align: center; max-width: 48rem;" {
                    h2 style="font-size: 2.25rem;" { "Ready to Find Your Next Opportunity?" }
                    p style="font-size: 1.2rem; opacity: 0.9;" {
                        "Access exclusive off-market lots with comprehensive market analysis. "
                        "Each property includes detailed builder purchase comps and new construction sales data."
                    }
                    p { "✓ Direct Property Links · ✓ Builder Comparables · ✓ ROI Analysis" }
                    p style="font-size: 0.9rem; opacity: 0.75;" {
                        "Properties are available via direct link only. "
                        "Contact us to receive property links tailored to your investment criteria."
                    }
                }
            }
        },
    )
}

fn stats_band(stats: &Statistics) -> Markup {
    html! {
        section style="background: #f9fafb; border-top: 1px solid #e5e7eb; border-bottom: 1px solid #e5e7eb;" {
            div class="container grid grid-3" style="padding: 3rem 1rem;" id="market-stats" {
                (stat_tile(
                    "Average Lot Price",
                    &format::currency(Some(stats.suggested_lot_price)),
                    &format!("Based on {} builder purchases", stats.builder_purchase_stats.count),
                ))
                (stat_tile(
                    "Average Sale Price",
                    &format::currency(Some(stats.potential_sale_price)),
                    &format!("Based on {} new constructions", stats.new_construction_stats.count),
                ))
                (stat_tile(
                    "Active Listings",
                    &stats.overall_stats.total_listings.to_string(),
                    &format!("Across {} cities", stats.overall_stats.cities_count),
                ))
            }
        }
    }
}
