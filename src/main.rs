use crate::config::AppConfig;
use crate::db::Database;
use crate::router::respond;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod client;
mod config;
mod db;
mod domain;
mod errors;
mod repository;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "offmarket_lots=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ One pool for the whole process
    let db = match Database::connect(&config) {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "database setup failed");
            std::process::exit(1);
        }
    };

    // reachability only, the pool reconnects on demand
    if let Err(e) = db.query("SELECT 1", &[]) {
        warn!(error = %e, "database not reachable at startup");
    }

    let state = match AppState::new(Arc::new(db), &config) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "application setup failed");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    info!(addr = %config.bind_addr, workers = config.max_workers, "starting server");

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);
    let result = server.serve(move |req, _info| respond(req, &state));

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
