use crate::config::AppConfig;
use crate::db::diagnostics::{ListingProbe, ViewReport};
use crate::db::sql::{ListingFilter, PAGE_SIZE};
use crate::domain::{
    BuilderComp, CityAggregate, Listing, ListingPage, MlsComp, PropertyDetail, StatisticsRow,
};
use crate::errors::ServerError;
use crate::repository::LotsRepository;
use crate::router::respond;
use crate::state::AppState;
use astra::{Body, Server};
use chrono::NaiveDate;
use http::{Method, Request};
use std::collections::HashMap;
use std::io::Read;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Text a failing repository puts in its errors; must never reach a response
/// body except on the diagnostic endpoint.
pub const SECRET_DB_TEXT: &str = "connection to db-internal.example:5432 refused";

/// In-memory stand-in for the Postgres views.
#[derive(Default)]
pub struct FakeRepository {
    pub listings: Vec<Listing>,
    pub builder_comps: HashMap<String, Vec<BuilderComp>>,
    pub mls_comps: HashMap<String, Vec<MlsComp>>,
    pub cities: Vec<CityAggregate>,
    pub stats: Option<StatisticsRow>,
    pub failing: bool,
    pub seen_filters: Mutex<Vec<ListingFilter>>,
}

impl FakeRepository {
    fn check(&self) -> Result<(), ServerError> {
        if self.failing {
            Err(ServerError::DbError(SECRET_DB_TEXT.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

impl LotsRepository for FakeRepository {
    fn cities(&self) -> Result<Vec<CityAggregate>, ServerError> {
        self.check()?;
        Ok(self.cities.clone())
    }

    fn listing_page(&self, filter: &ListingFilter) -> Result<ListingPage, ServerError> {
        self.seen_filters.lock().unwrap().push(filter.clone());
        self.check()?;

        let matching: Vec<&Listing> = self
            .listings
            .iter()
            .filter(|l| filter.city.is_none() || l.situs_city == filter.city)
            .filter(|l| match (filter.min_price, l.predicted_lot_price) {
                (Some(min), Some(p)) => p >= min,
                (Some(_), None) => false,
                (None, _) => true,
            })
            .filter(|l| match (filter.max_price, l.predicted_lot_price) {
                (Some(max), Some(p)) => p <= max,
                (Some(_), None) => false,
                (None, _) => true,
            })
            .collect();

        Ok(ListingPage {
            total: matching.len() as i64,
            properties: matching
                .into_iter()
                .skip(filter.offset() as usize)
                .take(PAGE_SIZE as usize)
                .cloned()
                .collect(),
            page: filter.page,
        })
    }

    fn property_detail(&self, attom_id: &str) -> Result<Option<PropertyDetail>, ServerError> {
        self.check()?;

        let Some(property) = self.listings.iter().find(|l| l.attom_id == attom_id) else {
            return Ok(None);
        };

        Ok(Some(PropertyDetail {
            property: property.clone(),
            builder_comps: self.builder_comps.get(attom_id).cloned().unwrap_or_default(),
            mls_comps: self.mls_comps.get(attom_id).cloned().unwrap_or_default(),
        }))
    }

    fn statistics_row(&self) -> Result<Option<StatisticsRow>, ServerError> {
        self.check()?;
        Ok(self.stats.clone())
    }

    fn inspect_view(&self, attom_id: &str) -> Result<ViewReport, ServerError> {
        self.check()?;

        let probe = |l: &Listing| ListingProbe {
            attom_id: l.attom_id.clone(),
            situs_address: l.situs_address.clone(),
            situs_city: l.situs_city.clone(),
        };

        Ok(ViewReport {
            total: self.listings.len() as i64,
            probe: self.listings.iter().find(|l| l.attom_id == attom_id).map(probe),
            sample: self.listings.iter().take(5).map(probe).collect(),
        })
    }
}

pub fn listing(attom_id: &str, city: &str, lot_price: f64) -> Listing {
    Listing {
        attom_id: attom_id.to_string(),
        situs_address: Some(format!("{attom_id} Main St")),
        situs_city: Some(city.to_string()),
        situs_state: Some("TX".to_string()),
        situs_zip: Some("78701".to_string()),
        lot_size_square_feet: Some(8712.0),
        predicted_lot_price: Some(lot_price),
        predicted_sale_price: Some(lot_price * 4.0),
        potential_profit: Some(lot_price * 1.5),
        potential_profit_percentage: Some(37.46),
        year_built: None,
        square_footage: None,
        builder_comp_count: Some(0),
        mls_comp_count: Some(0),
    }
}

pub fn builder_comp(n: u32) -> BuilderComp {
    BuilderComp {
        transaction_id: format!("tx-{n}"),
        full_address: Some(format!("{n} Builder Way")),
        instrument_date: NaiveDate::from_ymd_opt(2024, 1, n.clamp(1, 28)),
        transfer_amount: Some(150_000.0),
        grantee_1_name_full: Some("Acme Homes LLC".to_string()),
        lot_size_square_feet: Some(7500.0),
        price_per_sqft: Some(20.0),
    }
}

pub fn mls_comp(n: u32, sale_price: Option<f64>) -> MlsComp {
    MlsComp {
        mls_id: Some(format!("mls-{n}")),
        full_address: Some(format!("{n} New Build Ct")),
        list_date: NaiveDate::from_ymd_opt(2023, 11, n.clamp(1, 28)),
        list_price: Some(610_000.0),
        current_price: None,
        sale_price,
        lot_size_square_feet: Some(7000.0),
        price_per_sqft: Some(275.0),
        status: Some("Sold".to_string()),
    }
}

pub fn state_with(repo: FakeRepository) -> (Arc<FakeRepository>, AppState) {
    let repo = Arc::new(repo);
    let state = AppState::local(repo.clone());
    (repo, state)
}

/// Sends a request through the router and returns status and body.
pub fn send(state: &AppState, method: Method, uri: &str) -> (u16, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = respond(req, state);
    let status = resp.status().as_u16();

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();

    (status, body)
}

pub fn get(state: &AppState, uri: &str) -> (u16, String) {
    send(state, Method::GET, uri)
}

pub fn get_json(state: &AppState, uri: &str) -> (u16, serde_json::Value) {
    let (status, body) = get(state, uri);
    let json = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("body of {uri} was not JSON ({e}): {body}"));
    (status, json)
}

/// A real server on a loopback port whose pages fetch their data from its
/// own `/api/` routes, as with `SITE_URL` pointing at the deployment itself.
pub struct TestSite {
    pub addr: SocketAddr,
    hits: Arc<Mutex<Vec<String>>>,
}

impl TestSite {
    pub fn start(repo: FakeRepository, max_workers: usize) -> Self {
        let addr = TcpListener::bind("127.0.0.1:0")
            .and_then(|l| l.local_addr())
            .unwrap();

        let config = AppConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://u:p@localhost/lots".to_string()),
            "SITE_URL" => Some(format!("http://{addr}")),
            "BIND_ADDR" => Some(addr.to_string()),
            "MAX_WORKERS" => Some(max_workers.to_string()),
            _ => None,
        })
        .unwrap();

        let repo: Arc<dyn LotsRepository> = Arc::new(repo);
        let state = AppState::new(repo, &config).unwrap();

        let hits = Arc::new(Mutex::new(Vec::new()));
        let seen = hits.clone();
        thread::spawn(move || {
            let _ = Server::bind(&config.bind_addr)
                .max_workers(config.max_workers)
                .serve(move |req: astra::Request, _info| {
                    seen.lock().unwrap().push(req.uri().path().to_string());
                    respond(req, &state)
                });
        });

        for _ in 0..200 {
            if TcpStream::connect(addr).is_ok() {
                return Self { addr, hits };
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("test server on {addr} never started listening");
    }

    /// GET over a fresh connection; fails instead of hanging past 10s.
    pub fn get(&self, path: &str) -> (u16, String) {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(0)
            .build()
            .unwrap();

        let resp = client
            .get(format!("http://{}{path}", self.addr))
            .send()
            .unwrap_or_else(|e| panic!("GET {path} failed: {e}"));
        let status = resp.status().as_u16();
        (status, resp.text().unwrap())
    }

    /// Paths the server has been asked for so far.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}
