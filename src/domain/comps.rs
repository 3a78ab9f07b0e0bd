use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Vacant-lot purchase by a builder (`v_offmarket_lots_builder_comps`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderComp {
    pub transaction_id: String,
    pub full_address: Option<String>,
    pub instrument_date: Option<NaiveDate>,
    pub transfer_amount: Option<f64>,
    /// Buyer name as recorded on the deed.
    pub grantee_1_name_full: Option<String>,
    pub lot_size_square_feet: Option<f64>,
    pub price_per_sqft: Option<f64>,
}

/// New-construction sale or listing (`v_offmarket_lots_mls_comps`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlsComp {
    pub mls_id: Option<String>,
    pub full_address: Option<String>,
    pub list_date: Option<NaiveDate>,
    pub list_price: Option<f64>,
    pub current_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub lot_size_square_feet: Option<f64>,
    pub price_per_sqft: Option<f64>,
    pub status: Option<String>,
}

impl MlsComp {
    /// Best known price: sale, then current, then list. Zero is treated as missing.
    pub fn best_price(&self) -> Option<f64> {
        [self.sale_price, self.current_price, self.list_price]
            .into_iter()
            .flatten()
            .find(|p| *p != 0.0)
    }
}
