// client.rs
//
// Data source for the server-rendered pages. Pages consume exactly the JSON
// shapes served under /api/, either fetched over HTTP from the public site
// URL or produced in-process by the same endpoint logic.

use crate::api::{properties, statistics};
use crate::domain::{PropertyDetail, Statistics};
use crate::errors::ServerError;
use crate::repository::LotsRepository;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub trait LotsApi: Send + Sync {
    fn statistics(&self) -> Result<Statistics, ServerError>;

    /// `Ok(None)` when the API reports the property as not found.
    fn property_detail(&self, attom_id: &str) -> Result<Option<PropertyDetail>, ServerError>;
}

/// Calls the JSON API over HTTP, the way a browser would.
pub struct HttpLotsApi {
    base_url: Url,
    client: Client,
}

impl HttpLotsApi {
    pub fn new(base_url: Url) -> Result<Self, ServerError> {
        // idle keep-alive connections would each pin a server worker
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ServerError::ApiError(format!("HTTP client setup failed: {e}")))?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ServerError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ServerError::ApiError(format!("SITE_URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl LotsApi for HttpLotsApi {
    fn statistics(&self) -> Result<Statistics, ServerError> {
        let url = self.endpoint(&["api", "statistics"])?;
        debug!(%url, "fetching statistics");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ServerError::ApiError(format!("statistics request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(ServerError::ApiError(format!(
                "statistics request returned {}",
                resp.status()
            )));
        }

        resp.json::<Statistics>()
            .map_err(|e| ServerError::ApiError(format!("statistics body was not understood: {e}")))
    }

    fn property_detail(&self, attom_id: &str) -> Result<Option<PropertyDetail>, ServerError> {
        let url = self.endpoint(&["api", "property", attom_id])?;
        debug!(%url, "fetching property detail");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ServerError::ApiError(format!("property request failed: {e}")))?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => resp
                .json::<PropertyDetail>()
                .map(Some)
                .map_err(|e| ServerError::ApiError(format!("property body was not understood: {e}"))),
            s => Err(ServerError::ApiError(format!("property request returned {s}"))),
        }
    }
}

/// Runs the endpoint logic directly against the repository.
pub struct LocalLotsApi {
    repo: Arc<dyn LotsRepository>,
}

impl LocalLotsApi {
    pub fn new(repo: Arc<dyn LotsRepository>) -> Self {
        Self { repo }
    }
}

impl LotsApi for LocalLotsApi {
    fn statistics(&self) -> Result<Statistics, ServerError> {
        statistics::load_statistics(self.repo.as_ref())
    }

    fn property_detail(&self, attom_id: &str) -> Result<Option<PropertyDetail>, ServerError> {
        match properties::load_property_detail(self.repo.as_ref(), attom_id) {
            Ok(detail) => Ok(Some(detail)),
            Err(ServerError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Pages go through the public API while it cannot starve the server.
///
/// `SITE_URL` usually leads back to this process, so each HTTP call from a
/// page holds one worker while a second one answers it. At most
/// `max_workers - 1` page requests wait on the API at once; the rest are
/// answered in-process, which keeps one worker free for the API itself.
pub struct BudgetedLotsApi {
    remote: HttpLotsApi,
    local: LocalLotsApi,
    in_flight: AtomicUsize,
    limit: usize,
}

/// One outstanding HTTP call; released on drop.
struct Permit<'a> {
    in_flight: &'a AtomicUsize,
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}

impl BudgetedLotsApi {
    pub fn new(remote: HttpLotsApi, local: LocalLotsApi, max_workers: usize) -> Self {
        Self {
            remote,
            local,
            in_flight: AtomicUsize::new(0),
            limit: max_workers.saturating_sub(1),
        }
    }

    pub fn http_limit(&self) -> usize {
        self.limit
    }

    fn acquire(&self) -> Option<Permit<'_>> {
        let mut current = self.in_flight.load(Ordering::Acquire);
        loop {
            if current >= self.limit {
                return None;
            }
            match self.in_flight.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Some(Permit { in_flight: &self.in_flight }),
                Err(actual) => current = actual,
            }
        }
    }

    fn with_source<T>(
        &self,
        f: impl FnOnce(&dyn LotsApi) -> Result<T, ServerError>,
    ) -> Result<T, ServerError> {
        match self.acquire() {
            Some(_permit) => f(&self.remote),
            None => {
                debug!(limit = self.limit, "api budget spent, answering in-process");
                f(&self.local)
            }
        }
    }
}

impl LotsApi for BudgetedLotsApi {
    fn statistics(&self) -> Result<Statistics, ServerError> {
        self.with_source(|api| api.statistics())
    }

    fn property_detail(&self, attom_id: &str) -> Result<Option<PropertyDetail>, ServerError> {
        self.with_source(|api| api.property_detail(attom_id))
    }
}
