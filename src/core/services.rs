use crate::core::StocksError;
use crate::series::StockPricePoint;
use std::future::Future;
use std::pin::Pin;

/// A boxed future returned by [`SeriesService`] methods.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StocksError>> + Send + 'a>>;

/// A trait for backends that serve stock price series.
///
/// This decouples [`StockStore`](crate::StockStore) from the HTTP transport. It is
/// implemented by [`StocksClient`](crate::StocksClient); tests and alternative
/// transports can provide their own implementation.
pub trait SeriesService: Send + Sync {
    /// Fetches the ordered price series for `symbol` over the backend-defined `range`.
    fn fetch_series<'a>(
        &'a self,
        symbol: &'a str,
        range: &'a str,
    ) -> ServiceFuture<'a, Vec<StockPricePoint>>;

    /// Asks the backend to refresh its stored data for `symbol`.
    fn request_refresh<'a>(&'a self, symbol: &'a str) -> ServiceFuture<'a, ()>;
}
