use crate::db::diagnostics::{self, ViewReport};
use crate::db::sql::ListingFilter;
use crate::db::{cities, comps, listings, statistics, Database};
use crate::domain::{CityAggregate, ListingPage, PropertyDetail, StatisticsRow};
use crate::errors::ServerError;

/// Read access to the off-market lot views.
///
/// Request handlers only see this trait, so they run unchanged against
/// Postgres or an in-memory fixture.
pub trait LotsRepository: Send + Sync {
    fn cities(&self) -> Result<Vec<CityAggregate>, ServerError>;

    fn listing_page(&self, filter: &ListingFilter) -> Result<ListingPage, ServerError>;

    /// `Ok(None)` when no listing has this id.
    fn property_detail(&self, attom_id: &str) -> Result<Option<PropertyDetail>, ServerError>;

    /// `Ok(None)` when the statistics view has no row.
    fn statistics_row(&self) -> Result<Option<StatisticsRow>, ServerError>;

    fn inspect_view(&self, attom_id: &str) -> Result<ViewReport, ServerError>;
}

impl LotsRepository for Database {
    fn cities(&self) -> Result<Vec<CityAggregate>, ServerError> {
        self.with_conn(|conn| cities::get_cities(&mut **conn))
    }

    fn listing_page(&self, filter: &ListingFilter) -> Result<ListingPage, ServerError> {
        // rows and total come from the same snapshot
        self.with_snapshot(|tx| listings::get_listing_page(tx, filter))
    }

    fn property_detail(&self, attom_id: &str) -> Result<Option<PropertyDetail>, ServerError> {
        self.with_snapshot(|tx| {
            let Some(property) = listings::get_listing(tx, attom_id)? else {
                return Ok(None);
            };

            let builder_comps = comps::get_builder_comps(tx, attom_id)?;
            let mls_comps = comps::get_mls_comps(tx, attom_id)?;

            Ok(Some(PropertyDetail {
                property,
                builder_comps,
                mls_comps,
            }))
        })
    }

    fn statistics_row(&self) -> Result<Option<StatisticsRow>, ServerError> {
        self.with_conn(|conn| statistics::get_statistics_row(&mut **conn))
    }

    fn inspect_view(&self, attom_id: &str) -> Result<ViewReport, ServerError> {
        self.with_conn(|conn| diagnostics::inspect_view(&mut **conn, attom_id))
    }
}
