use crate::domain::Statistics;
use crate::errors::ServerError;
use crate::repository::LotsRepository;
use crate::responses::{json_error, json_response, ResultResp};

/// Aggregate statistics, zero-filled when the view is empty.
pub fn load_statistics(repo: &dyn LotsRepository) -> Result<Statistics, ServerError> {
    Ok(Statistics::from(repo.statistics_row()?))
}

/// `GET /api/statistics`
pub fn get_statistics(repo: &dyn LotsRepository) -> ResultResp {
    match load_statistics(repo) {
        Ok(stats) => json_response(&stats),
        Err(err) => Ok(json_error(&err, "Failed to fetch statistics")),
    }
}
