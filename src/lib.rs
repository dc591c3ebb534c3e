//! # stocks-store
//!
//! An observable, client-side state container for stock price series served by a
//! REST backend. A [`StockStore`] tracks the selected symbol and range, the last
//! fetched series, a loading flag and the last error, and lets UI layers react to
//! changes through a `tokio::sync::watch` channel.
//!
//! ## Quick start
//!
//! ```no_run
//! use stocks_store::{Range, StockStore, StocksClient};
//! use url::Url;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StocksClient::builder()
//!     .base_url(Url::parse("http://localhost:8080/api/")?)
//!     .build()?;
//! let store = StockStore::new(&client);
//!
//! store.fetch_stock_data("AAPL", Range::Month).await;
//! println!("{} points, error: {:?}", store.series().len(), store.last_error_message());
//!
//! // Ask the backend to re-pull the selected symbol, then reload it.
//! store.refresh_stock_data().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! * `tracing`: emit `tracing` spans and events for requests and state transitions.
//! * `tracing-subscriber`: adds [`init_tracing_for_tests`] for demos and tests.

pub mod core;
pub mod series;
pub mod store;

pub use crate::core::{SeriesService, StocksClient, StocksClientBuilder, StocksError};
pub use series::{Range, StockPricePoint};
pub use store::{
    FailureCause, Operation, OperationError, ResponseOrdering, StockStore, StockStoreBuilder,
    StoreState,
};

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `stocks_store=debug`).
///
/// Safe to call more than once; later calls are no-ops.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stocks_store=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
