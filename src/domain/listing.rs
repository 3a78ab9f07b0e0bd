use serde::{Deserialize, Serialize};

/// One row of `v_offmarket_lots`, as returned by both the listing and the detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub attom_id: String,

    pub situs_address: Option<String>,
    pub situs_city: Option<String>,
    pub situs_state: Option<String>,
    pub situs_zip: Option<String>,

    pub lot_size_square_feet: Option<f64>,

    // Predictions come from the upstream pipeline
    pub predicted_lot_price: Option<f64>,
    pub predicted_sale_price: Option<f64>,
    pub potential_profit: Option<f64>,
    pub potential_profit_percentage: Option<f64>,

    pub year_built: Option<i32>,
    pub square_footage: Option<f64>,

    pub builder_comp_count: Option<i32>,
    pub mls_comp_count: Option<i32>,
}

impl Listing {
    /// "City, ST 12345" with missing parts dropped.
    pub fn locality(&self) -> String {
        let city = self.situs_city.as_deref().unwrap_or("");
        let state = self.situs_state.as_deref().unwrap_or("");
        let zip = self.situs_zip.as_deref().unwrap_or("");

        let mut out = city.to_string();
        if !state.is_empty() {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(state);
        }
        if !zip.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(zip);
        }
        out
    }

    /// Year built, hidden when the view reports nothing useful.
    pub fn known_year_built(&self) -> Option<i32> {
        self.year_built.filter(|y| *y > 0)
    }

    pub fn known_square_footage(&self) -> Option<f64> {
        self.square_footage.filter(|s| *s > 0.0)
    }
}

/// Response body of `GET /api/property`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub properties: Vec<Listing>,
    pub total: i64,
    pub page: u32,
}

/// Listing plus its comparables, as served by `GET /api/property/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    pub property: Listing,
    pub builder_comps: Vec<crate::domain::comps::BuilderComp>,
    pub mls_comps: Vec<crate::domain::comps::MlsComp>,
}

impl PropertyDetail {
    pub fn total_comps(&self) -> usize {
        self.builder_comps.len() + self.mls_comps.len()
    }
}
