use crate::db::connection::run_id_query;
use crate::domain::{BuilderComp, MlsComp};
use crate::errors::ServerError;
use postgres::{GenericClient, Row};

const SQL_BUILDER_COMPS: &str = include_str!("../../sql/builder_comps.sql");
const SQL_MLS_COMPS: &str = include_str!("../../sql/mls_comps.sql");

fn builder_comp_from_row(row: &Row) -> Result<BuilderComp, ServerError> {
    Ok(BuilderComp {
        transaction_id: row.try_get::<_, Option<String>>("transaction_id")?.unwrap_or_default(),
        full_address: row.try_get("full_address")?,
        instrument_date: row.try_get("instrument_date")?,
        transfer_amount: row.try_get("transfer_amount")?,
        grantee_1_name_full: row.try_get("grantee_1_name_full")?,
        lot_size_square_feet: row.try_get("lot_size_square_feet")?,
        price_per_sqft: row.try_get("price_per_sqft")?,
    })
}

fn mls_comp_from_row(row: &Row) -> Result<MlsComp, ServerError> {
    Ok(MlsComp {
        mls_id: row.try_get("mls_id")?,
        full_address: row.try_get("full_address")?,
        list_date: row.try_get("list_date")?,
        list_price: row.try_get("list_price")?,
        current_price: row.try_get("current_price")?,
        sale_price: row.try_get("sale_price")?,
        lot_size_square_feet: row.try_get("lot_size_square_feet")?,
        price_per_sqft: row.try_get("price_per_sqft")?,
        status: row.try_get("status")?,
    })
}

/// Builder purchases linked to a listing, newest deed first.
pub fn get_builder_comps<C: GenericClient>(
    client: &mut C,
    attom_id: &str,
) -> Result<Vec<BuilderComp>, ServerError> {
    let out = run_id_query(client, SQL_BUILDER_COMPS, attom_id)?;
    out.rows.iter().map(builder_comp_from_row).collect()
}

/// New-construction comps linked to a listing, newest listing first.
pub fn get_mls_comps<C: GenericClient>(
    client: &mut C,
    attom_id: &str,
) -> Result<Vec<MlsComp>, ServerError> {
    let out = run_id_query(client, SQL_MLS_COMPS, attom_id)?;
    out.rows.iter().map(mls_comp_from_row).collect()
}
