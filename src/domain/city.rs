use serde::{Deserialize, Serialize};

/// Row of `v_offmarket_lots_by_city`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityAggregate {
    pub city: Option<String>,
    pub state: Option<String>,
    pub listing_count: i64,
}
