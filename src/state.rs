use crate::client::{BudgetedLotsApi, HttpLotsApi, LocalLotsApi, LotsApi};
use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::repository::LotsRepository;
use std::sync::Arc;
use tracing::info;

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub repo: Arc<dyn LotsRepository>,
    /// Where the HTML pages get their data from.
    pub api: Box<dyn LotsApi>,
}

impl AppState {
    /// Pages go through the HTTP API when a site URL is configured, within
    /// a budget that keeps a worker free; otherwise they call the endpoint
    /// logic in-process.
    pub fn new(repo: Arc<dyn LotsRepository>, config: &AppConfig) -> Result<Self, ServerError> {
        let api: Box<dyn LotsApi> = match &config.site_url {
            Some(url) => {
                let api = BudgetedLotsApi::new(
                    HttpLotsApi::new(url.clone())?,
                    LocalLotsApi::new(repo.clone()),
                    config.max_workers,
                );
                info!(
                    %url,
                    http_limit = api.http_limit(),
                    "pages will fetch data from the public API"
                );
                Box::new(api)
            }
            None => {
                info!("pages will call the API in-process");
                Box::new(LocalLotsApi::new(repo.clone()))
            }
        };

        Ok(Self { repo, api })
    }

    /// In-process state over any repository.
    pub fn local(repo: Arc<dyn LotsRepository>) -> Self {
        Self {
            api: Box::new(LocalLotsApi::new(repo.clone())),
            repo,
        }
    }
}
