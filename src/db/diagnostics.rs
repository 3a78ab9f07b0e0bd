use crate::db::connection::{run_id_query, run_query};
use crate::errors::ServerError;
use postgres::{GenericClient, Row};
use serde::{Deserialize, Serialize};

const SQL_LOOKUP: &str = include_str!("../../sql/diagnostics_lookup.sql");
const SQL_SAMPLE: &str = include_str!("../../sql/diagnostics_sample.sql");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingProbe {
    pub attom_id: String,
    pub situs_address: Option<String>,
    pub situs_city: Option<String>,
}

/// What the listing view currently holds, for troubleshooting.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewReport {
    pub total: i64,
    pub probe: Option<ListingProbe>,
    pub sample: Vec<ListingProbe>,
}

fn probe_from_row(row: &Row) -> Result<ListingProbe, ServerError> {
    Ok(ListingProbe {
        attom_id: row.try_get("attom_id")?,
        situs_address: row.try_get("situs_address")?,
        situs_city: row.try_get("situs_city")?,
    })
}

pub fn inspect_view<C: GenericClient>(
    client: &mut C,
    attom_id: &str,
) -> Result<ViewReport, ServerError> {
    let counted = run_query(
        client,
        "SELECT COUNT(*) AS total FROM public.v_offmarket_lots",
        &[],
    )?;
    let total: i64 = match counted.rows.first() {
        Some(row) => row.try_get("total")?,
        None => 0,
    };

    let lookup = run_id_query(client, SQL_LOOKUP, attom_id)?;
    let probe = lookup.rows.first().map(probe_from_row).transpose()?;

    let sampled = run_query(client, SQL_SAMPLE, &[])?;
    let sample = sampled
        .rows
        .iter()
        .map(probe_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ViewReport {
        total,
        probe,
        sample,
    })
}
