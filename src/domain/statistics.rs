use serde::{Deserialize, Serialize};

/// Raw aggregate row from `v_offmarket_lots_stats`. Every column may be null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsRow {
    pub avg_predicted_lot_price: Option<f64>,
    pub avg_predicted_sale_price: Option<f64>,

    pub builder_purchase_count: Option<i64>,
    pub builder_purchase_avg_price: Option<f64>,
    pub builder_purchase_avg_price_per_sqft: Option<f64>,
    pub builder_purchase_avg_lot_size: Option<f64>,

    pub new_construction_count: Option<i64>,
    pub new_construction_avg_price: Option<f64>,
    pub new_construction_avg_price_per_sqft: Option<f64>,
    pub new_construction_avg_lot_size: Option<f64>,

    pub total_listings: Option<i64>,
    pub total_cities: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_lot_size: Option<f64>,
    pub max_lot_size: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompStats {
    pub count: i64,
    pub avg_price: f64,
    pub avg_price_per_sqft: f64,
    pub avg_lot_size: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_listings: i64,
    pub cities_count: i64,
    pub price_range: Range,
    pub lot_size_range: Range,
}

/// Response body of `GET /api/statistics`. `Default` is the all-zero snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub suggested_lot_price: f64,
    pub potential_sale_price: f64,
    pub builder_purchase_stats: CompStats,
    pub new_construction_stats: CompStats,
    pub overall_stats: OverallStats,
}

/// Null, NaN, infinite and negative values all collapse to zero.
fn amount(v: Option<f64>) -> f64 {
    v.filter(|x| x.is_finite() && *x > 0.0).unwrap_or(0.0)
}

fn count(v: Option<i64>) -> i64 {
    v.unwrap_or(0).max(0)
}

impl From<Option<StatisticsRow>> for Statistics {
    fn from(row: Option<StatisticsRow>) -> Self {
        let Some(row) = row else {
            return Statistics::default();
        };

        Statistics {
            suggested_lot_price: amount(row.avg_predicted_lot_price),
            potential_sale_price: amount(row.avg_predicted_sale_price),
            builder_purchase_stats: CompStats {
                count: count(row.builder_purchase_count),
                avg_price: amount(row.builder_purchase_avg_price),
                avg_price_per_sqft: amount(row.builder_purchase_avg_price_per_sqft),
                avg_lot_size: amount(row.builder_purchase_avg_lot_size),
            },
            new_construction_stats: CompStats {
                count: count(row.new_construction_count),
                avg_price: amount(row.new_construction_avg_price),
                avg_price_per_sqft: amount(row.new_construction_avg_price_per_sqft),
                avg_lot_size: amount(row.new_construction_avg_lot_size),
            },
            overall_stats: OverallStats {
                total_listings: count(row.total_listings),
                cities_count: count(row.total_cities),
                price_range: Range {
                    min: amount(row.min_price),
                    max: amount(row.max_price),
                },
                lot_size_range: Range {
                    min: amount(row.min_lot_size),
                    max: amount(row.max_lot_size),
                },
            },
        }
    }
}
