use crate::db::sql::ListingFilter;
use crate::domain::PropertyDetail;
use crate::errors::ServerError;
use crate::repository::LotsRepository;
use crate::responses::{json_error, json_response, ResultResp};
use std::collections::HashMap;
use tracing::debug;

/// `GET /api/property?city&minPrice&maxPrice&page`
pub fn list_properties(repo: &dyn LotsRepository, query: &HashMap<String, String>) -> ResultResp {
    let filter = match ListingFilter::from_query(query) {
        Ok(f) => f,
        Err(err) => return Ok(json_error(&err, "Invalid query parameters")),
    };

    debug!(?filter, offset = filter.offset(), "listing properties");

    match repo.listing_page(&filter) {
        Ok(page) => json_response(&page),
        Err(err) => Ok(json_error(&err, "Failed to fetch properties")),
    }
}

/// Listing with all of its comps. Unknown ids are `ServerError::NotFound`.
pub fn load_property_detail(
    repo: &dyn LotsRepository,
    attom_id: &str,
) -> Result<PropertyDetail, ServerError> {
    let attom_id = attom_id.trim();
    if attom_id.is_empty() {
        return Err(ServerError::NotFound);
    }
    repo.property_detail(attom_id)?.ok_or(ServerError::NotFound)
}

/// `GET /api/property/{id}`
pub fn get_property(repo: &dyn LotsRepository, attom_id: &str) -> ResultResp {
    match load_property_detail(repo, attom_id) {
        Ok(detail) => json_response(&detail),
        Err(ServerError::NotFound) => Ok(json_error(&ServerError::NotFound, "Property not found")),
        Err(err) => Ok(json_error(&err, "Failed to fetch property details")),
    }
}
