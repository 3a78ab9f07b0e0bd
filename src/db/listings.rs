use crate::db::connection::{run_id_query, run_query};
use crate::db::sql::{ListingFilter, LISTING_COLUMNS};
use crate::domain::{Listing, ListingPage};
use crate::errors::ServerError;
use postgres::{GenericClient, Row};

pub(crate) fn listing_from_row(row: &Row) -> Result<Listing, ServerError> {
    Ok(Listing {
        attom_id: row.try_get("attom_id")?,
        situs_address: row.try_get("situs_address")?,
        situs_city: row.try_get("situs_city")?,
        situs_state: row.try_get("situs_state")?,
        situs_zip: row.try_get("situs_zip")?,
        lot_size_square_feet: row.try_get("lot_size_square_feet")?,
        predicted_lot_price: row.try_get("predicted_lot_price")?,
        predicted_sale_price: row.try_get("predicted_sale_price")?,
        potential_profit: row.try_get("potential_profit")?,
        potential_profit_percentage: row.try_get("potential_profit_percentage")?,
        year_built: row.try_get("year_built")?,
        square_footage: row.try_get("square_footage")?,
        builder_comp_count: row.try_get("builder_comp_count")?,
        mls_comp_count: row.try_get("mls_comp_count")?,
    })
}

/// One page of listings plus the total number of matches for the same filter.
pub fn get_listing_page<C: GenericClient>(
    client: &mut C,
    filter: &ListingFilter,
) -> Result<ListingPage, ServerError> {
    let rows_query = filter.rows_query();
    let count_query = filter.count_query();
    debug_assert_eq!(rows_query.placeholder_count(), rows_query.params.len());
    debug_assert_eq!(count_query.placeholder_count(), count_query.params.len());

    let rows = run_query(client, &rows_query.sql, &rows_query.params)?;
    let properties = rows
        .rows
        .iter()
        .map(listing_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    let counted = run_query(client, &count_query.sql, &count_query.params)?;
    let total: i64 = match counted.rows.first() {
        Some(row) => row.try_get("total")?,
        None => 0,
    };

    Ok(ListingPage {
        properties,
        total,
        page: filter.page,
    })
}

pub fn get_listing<C: GenericClient>(
    client: &mut C,
    attom_id: &str,
) -> Result<Option<Listing>, ServerError> {
    let sql = format!(
        "SELECT {}\nFROM public.v_offmarket_lots\nWHERE attom_id = $1",
        LISTING_COLUMNS.trim()
    );

    let out = run_id_query(client, &sql, attom_id)?;
    out.rows.first().map(listing_from_row).transpose()
}
