//! The observable stock state container.

mod state;

pub use state::{FailureCause, Operation, OperationError, StoreState};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::core::{SeriesService, StocksClient};
use crate::series::StockPricePoint;

/// How results of overlapping operations are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Every settling operation writes its result, so whichever response
    /// arrives last wins regardless of request order. (Default)
    #[default]
    LastWriterWins,
    /// Only the most recently started operation may write its result; responses
    /// to superseded requests are discarded.
    LatestRequestWins,
}

/// Client-side state container for a stock price series.
///
/// A `StockStore` tracks the selected symbol and range, the last fetched series, a
/// loading flag and the last error. It is constructed once per UI session and shared by
/// cloning the handle; all clones observe and mutate the same state.
///
/// Operations never return errors. Failures are recorded in
/// [`StoreState::last_error`] and observers react to state changes through
/// [`subscribe`](Self::subscribe).
///
/// # Example
///
/// ```no_run
/// # use stocks_store::{Range, StockStore, StocksClient};
/// # #[tokio::main]
/// # async fn main() {
/// let client = StocksClient::default();
/// let store = StockStore::new(&client);
///
/// store.fetch_stock_data("AAPL", Range::Month).await;
/// match store.last_error() {
///     Some(err) => eprintln!("fetch failed: {err}"),
///     None => println!("{} points", store.series().len()),
/// }
/// # }
/// ```
#[derive(Clone)]
pub struct StockStore {
    inner: Arc<Inner>,
}

struct Inner {
    service: Arc<dyn SeriesService>,
    state: watch::Sender<StoreState>,
    ordering: ResponseOrdering,
    // Only touched inside `state` modify closures, so issuing and checking are serialized.
    latest_token: AtomicU64,
}

impl std::fmt::Debug for StockStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockStore")
            .field("state", &*self.inner.state.borrow())
            .field("ordering", &self.inner.ordering)
            .finish_non_exhaustive()
    }
}

impl StockStore {
    /// Creates a store backed by `client` with default settings.
    pub fn new(client: &StocksClient) -> Self {
        Self::builder(client).build()
    }

    /// Creates a builder for a store backed by `client`.
    pub fn builder(client: &StocksClient) -> StockStoreBuilder {
        Self::with_service(Arc::new(client.clone()))
    }

    /// Creates a builder for a store backed by any [`SeriesService`].
    pub fn with_service(service: Arc<dyn SeriesService>) -> StockStoreBuilder {
        StockStoreBuilder {
            service,
            ordering: ResponseOrdering::default(),
        }
    }

    /* ---------------- Observation ---------------- */

    /// Returns a snapshot of the whole state.
    pub fn state(&self) -> StoreState {
        self.inner.state.borrow().clone()
    }

    /// Returns a receiver that is notified whenever the state changes.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.inner.state.subscribe()
    }

    /// The last successfully fetched series, in server order.
    pub fn series(&self) -> Vec<StockPricePoint> {
        self.inner.state.borrow().series.clone()
    }

    /// Whether an operation is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading
    }

    /// Failure of the most recent operation, if it failed.
    pub fn last_error(&self) -> Option<OperationError> {
        self.inner.state.borrow().last_error.clone()
    }

    /// The display string of [`last_error`](Self::last_error), for UI rendering.
    pub fn last_error_message(&self) -> Option<String> {
        self.inner
            .state
            .borrow()
            .last_error
            .as_ref()
            .map(ToString::to_string)
    }

    /// Symbol of the most recent fetch; empty until the first one.
    pub fn selected_symbol(&self) -> String {
        self.inner.state.borrow().selected_symbol.clone()
    }

    /// Range of the most recent fetch; `"month"` until the first one.
    pub fn selected_range(&self) -> String {
        self.inner.state.borrow().selected_range.clone()
    }

    /// How this store resolves overlapping operations.
    pub fn ordering(&self) -> ResponseOrdering {
        self.inner.ordering
    }

    /* ---------------- Operations ---------------- */

    /// Selects `symbol` and `range` and loads their series.
    ///
    /// The selection is recorded before the request is sent. On success the series is
    /// replaced; on failure it is kept and [`StoreState::last_error`] is set. The loading
    /// flag is cleared once the request settles either way.
    pub async fn fetch_stock_data(&self, symbol: impl Into<String>, range: impl Into<String>) {
        self.run_fetch(symbol.into(), range.into()).await;
    }

    /// Asks the backend to refresh the selected symbol, then reloads the series.
    ///
    /// Does nothing at all when no symbol has been selected yet. If the refresh request
    /// fails, the error is recorded and the series is not reloaded. The reload targets
    /// whatever symbol and range are selected once the refresh request returns.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn refresh_stock_data(&self) {
        let Some((symbol, token)) = self.begin_refresh() else {
            #[cfg(feature = "tracing")]
            tracing::debug!("no symbol selected, skipping refresh");
            return;
        };

        let last_token = match self.inner.service.request_refresh(&symbol).await {
            Ok(()) => {
                let (symbol, range) = {
                    let state = self.inner.state.borrow();
                    (state.selected_symbol.clone(), state.selected_range.clone())
                };
                self.run_fetch(symbol, range).await
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(symbol = %symbol, error = %err, "stock refresh failed");

                let error = OperationError::from_failure(Operation::Refresh, &err);
                self.settle(token, |state| {
                    state.last_error = Some(error);
                    true
                });
                token
            }
        };

        self.settle(last_token, |state| {
            std::mem::replace(&mut state.is_loading, false)
        });
    }

    /* ---------------- Internals ---------------- */

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    async fn run_fetch(&self, symbol: String, range: String) -> u64 {
        let mut token = 0;
        self.inner.state.send_modify(|state| {
            token = self.next_token();
            state.is_loading = true;
            state.last_error = None;
            state.selected_symbol.clone_from(&symbol);
            state.selected_range.clone_from(&range);
        });

        let outcome = self.inner.service.fetch_series(&symbol, &range).await;

        #[cfg(feature = "tracing")]
        match &outcome {
            Ok(series) => tracing::debug!(points = series.len(), "stock series fetched"),
            Err(err) => tracing::warn!(error = %err, "stock series fetch failed"),
        }

        self.settle(token, |state| {
            match outcome {
                Ok(series) => state.series = series,
                Err(err) => {
                    state.last_error = Some(OperationError::from_failure(Operation::Fetch, &err));
                }
            }
            state.is_loading = false;
            true
        });
        token
    }

    /// Starts a refresh if a symbol is selected, without notifying observers otherwise.
    fn begin_refresh(&self) -> Option<(String, u64)> {
        let mut started = None;
        self.inner.state.send_if_modified(|state| {
            if state.selected_symbol.is_empty() {
                return false;
            }
            let token = self.next_token();
            state.is_loading = true;
            state.last_error = None;
            started = Some((state.selected_symbol.clone(), token));
            true
        });
        started
    }

    /// Applies `apply` unless `token` was superseded under
    /// [`ResponseOrdering::LatestRequestWins`]. `apply` returns whether it changed anything.
    fn settle(&self, token: u64, apply: impl FnOnce(&mut StoreState) -> bool) -> bool {
        self.inner.state.send_if_modified(|state| {
            if !self.is_current(token) {
                #[cfg(feature = "tracing")]
                tracing::debug!(token, "discarding result of superseded request");
                return false;
            }
            apply(state)
        })
    }

    // Must be called from inside a `state` modify closure.
    fn next_token(&self) -> u64 {
        self.inner.latest_token.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn is_current(&self, token: u64) -> bool {
        match self.inner.ordering {
            ResponseOrdering::LastWriterWins => true,
            ResponseOrdering::LatestRequestWins => {
                self.inner.latest_token.load(Ordering::Relaxed) == token
            }
        }
    }
}

/// A builder for [`StockStore`].
#[must_use]
pub struct StockStoreBuilder {
    service: Arc<dyn SeriesService>,
    ordering: ResponseOrdering,
}

impl StockStoreBuilder {
    /// Replaces the backend the store talks to.
    pub fn service(mut self, service: Arc<dyn SeriesService>) -> Self {
        self.service = service;
        self
    }

    /// Sets how overlapping operations are resolved. (Default: [`ResponseOrdering::LastWriterWins`])
    pub fn ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn build(self) -> StockStore {
        StockStore {
            inner: Arc::new(Inner {
                service: self.service,
                state: watch::Sender::new(StoreState::default()),
                ordering: self.ordering,
                latest_token: AtomicU64::new(0),
            }),
        }
    }
}
