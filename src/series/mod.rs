//! Stock price series: the backend HTTP calls and their data model.

mod api;
mod model;
mod wire;

pub use api::{fetch_series, request_refresh};
pub use model::{Range, StockPricePoint};

use crate::core::{SeriesService, ServiceFuture, StocksClient};

impl SeriesService for StocksClient {
    fn fetch_series<'a>(
        &'a self,
        symbol: &'a str,
        range: &'a str,
    ) -> ServiceFuture<'a, Vec<StockPricePoint>> {
        Box::pin(api::fetch_series(self, symbol, range))
    }

    fn request_refresh<'a>(&'a self, symbol: &'a str) -> ServiceFuture<'a, ()> {
        Box::pin(api::request_refresh(self, symbol))
    }
}
