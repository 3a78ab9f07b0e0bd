use crate::db::connection::run_query;
use crate::domain::StatisticsRow;
use crate::errors::ServerError;
use postgres::GenericClient;

const SQL_STATISTICS: &str = include_str!("../../sql/statistics.sql");

/// The single aggregate row, or `None` when the view is empty.
pub fn get_statistics_row<C: GenericClient>(
    client: &mut C,
) -> Result<Option<StatisticsRow>, ServerError> {
    let out = run_query(client, SQL_STATISTICS, &[])?;

    let Some(row) = out.rows.first() else {
        return Ok(None);
    };

    Ok(Some(StatisticsRow {
        avg_predicted_lot_price: row.try_get("avg_predicted_lot_price")?,
        avg_predicted_sale_price: row.try_get("avg_predicted_sale_price")?,
        builder_purchase_count: row.try_get("builder_purchase_count")?,
        builder_purchase_avg_price: row.try_get("builder_purchase_avg_price")?,
        builder_purchase_avg_price_per_sqft: row.try_get("builder_purchase_avg_price_per_sqft")?,
        builder_purchase_avg_lot_size: row.try_get("builder_purchase_avg_lot_size")?,
        new_construction_count: row.try_get("new_construction_count")?,
        new_construction_avg_price: row.try_get("new_construction_avg_price")?,
        new_construction_avg_price_per_sqft: row.try_get("new_construction_avg_price_per_sqft")?,
        new_construction_avg_lot_size: row.try_get("new_construction_avg_lot_size")?,
        total_listings: row.try_get("total_listings")?,
        total_cities: row.try_get("total_cities")?,
        min_price: row.try_get("min_price")?,
        max_price: row.try_get("max_price")?,
        min_lot_size: row.try_get("min_lot_size")?,
        max_lot_size: row.try_get("max_lot_size")?,
    }))
}
