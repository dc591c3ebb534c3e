#![allow(dead_code)]

use httpmock::{Method::GET, Method::POST, Mock, MockServer};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::{fs, path::Path};
use stocks_store::core::ServiceFuture;
use stocks_store::{SeriesService, StockPricePoint, StocksClient, StocksError};
use tokio::sync::oneshot;
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, symbol, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> StocksClient {
    StocksClient::builder()
        .base_url(Url::parse(&format!("{}/api/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn mock_series<'a>(server: &'a MockServer, symbol: &'a str, range: &'a str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/stocks/{}", symbol))
            .query_param("range", range);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_series_status<'a>(server: &'a MockServer, symbol: &'a str, status: u16) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/api/stocks/{}", symbol));
        then.status(status).body("backend unavailable");
    })
}

pub fn mock_refresh<'a>(server: &'a MockServer, symbol: &'a str, status: u16) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST).path(format!("/api/stocks/{}/refresh", symbol));
        then.status(status).body("");
    })
}

pub fn point(date: &str, close: f64, volume: u64) -> StockPricePoint {
    StockPricePoint {
        date: date.to_string(),
        open: close - 1.0,
        high: close + 1.0,
        low: close - 2.0,
        close,
        volume,
    }
}

type FetchResult = Result<Vec<StockPricePoint>, StocksError>;
type RefreshResult = Result<(), StocksError>;

/// A `SeriesService` whose calls stay pending until the test releases them.
///
/// Fetch gates are queued per symbol, so a symbol listed twice can be fetched twice.
/// Refreshes for symbols without a gate succeed immediately. Every fetch is logged.
pub struct GatedService {
    fetches: Mutex<HashMap<String, VecDeque<oneshot::Receiver<FetchResult>>>>,
    refreshes: Mutex<HashMap<String, oneshot::Receiver<RefreshResult>>>,
    fetched: Mutex<Vec<(String, String)>>,
}

pub struct Gates {
    fetches: HashMap<String, VecDeque<oneshot::Sender<FetchResult>>>,
    refreshes: HashMap<String, oneshot::Sender<RefreshResult>>,
}

impl Gates {
    pub fn release(&mut self, symbol: &str, result: FetchResult) {
        let tx = self
            .fetches
            .get_mut(symbol)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("no gate for {symbol}"));
        tx.send(result).unwrap_or_else(|_| panic!("gate for {symbol} was dropped"));
    }

    pub fn release_refresh(&mut self, symbol: &str, result: RefreshResult) {
        let tx = self
            .refreshes
            .remove(symbol)
            .unwrap_or_else(|| panic!("no refresh gate for {symbol}"));
        tx.send(result)
            .unwrap_or_else(|_| panic!("refresh gate for {symbol} was dropped"));
    }
}

impl GatedService {
    pub fn new(symbols: &[&str]) -> (Arc<Self>, Gates) {
        Self::with_refreshes(symbols, &[])
    }

    pub fn with_refreshes(symbols: &[&str], refresh_symbols: &[&str]) -> (Arc<Self>, Gates) {
        let mut fetch_rx: HashMap<String, VecDeque<_>> = HashMap::new();
        let mut fetch_tx: HashMap<String, VecDeque<_>> = HashMap::new();
        for sym in symbols {
            let (tx, rx) = oneshot::channel();
            fetch_rx.entry((*sym).to_string()).or_default().push_back(rx);
            fetch_tx.entry((*sym).to_string()).or_default().push_back(tx);
        }

        let mut refresh_rx = HashMap::new();
        let mut refresh_tx = HashMap::new();
        for sym in refresh_symbols {
            let (tx, rx) = oneshot::channel();
            refresh_rx.insert((*sym).to_string(), rx);
            refresh_tx.insert((*sym).to_string(), tx);
        }

        (
            Arc::new(Self {
                fetches: Mutex::new(fetch_rx),
                refreshes: Mutex::new(refresh_rx),
                fetched: Mutex::new(Vec::new()),
            }),
            Gates {
                fetches: fetch_tx,
                refreshes: refresh_tx,
            },
        )
    }

    /// `(symbol, range)` of every fetch issued so far, in call order.
    pub fn fetched(&self) -> Vec<(String, String)> {
        self.fetched.lock().unwrap().clone()
    }
}

impl SeriesService for GatedService {
    fn fetch_series<'a>(
        &'a self,
        symbol: &'a str,
        range: &'a str,
    ) -> ServiceFuture<'a, Vec<StockPricePoint>> {
        self.fetched
            .lock()
            .unwrap()
            .push((symbol.to_string(), range.to_string()));
        let gate = self
            .fetches
            .lock()
            .unwrap()
            .get_mut(symbol)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("unexpected fetch for {symbol}"));
        Box::pin(async move { gate.await.expect("gate sender dropped") })
    }

    fn request_refresh<'a>(&'a self, symbol: &'a str) -> ServiceFuture<'a, ()> {
        let gate = self.refreshes.lock().unwrap().remove(symbol);
        Box::pin(async move {
            match gate {
                Some(gate) => gate.await.expect("refresh gate sender dropped"),
                None => Ok(()),
            }
        })
    }
}
