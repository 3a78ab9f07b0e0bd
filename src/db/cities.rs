use crate::db::connection::run_query;
use crate::domain::CityAggregate;
use crate::errors::ServerError;
use postgres::GenericClient;

const SQL_CITIES: &str = include_str!("../../sql/cities.sql");

/// Every city with its active listing count, busiest first.
pub fn get_cities<C: GenericClient>(client: &mut C) -> Result<Vec<CityAggregate>, ServerError> {
    let out = run_query(client, SQL_CITIES, &[])?;

    out.rows
        .iter()
        .map(|row| -> Result<CityAggregate, ServerError> {
            Ok(CityAggregate {
                city: row.try_get("city")?,
                state: row.try_get("state")?,
                listing_count: row.try_get::<_, Option<i64>>("listing_count")?.unwrap_or(0),
            })
        })
        .collect()
}
