use crate::repository::LotsRepository;
use crate::responses::{json_error, json_response, ResultResp};

/// `GET /api/cities`
pub fn get_cities(repo: &dyn LotsRepository) -> ResultResp {
    match repo.cities() {
        Ok(cities) => json_response(&cities),
        Err(err) => Ok(json_error(&err, "Failed to fetch cities")),
    }
}
