use serde::Serialize;

use crate::core::StocksError;
use crate::series::{Range, StockPricePoint};

/// Which store operation produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    Fetch,
    Refresh,
}

impl Operation {
    /// Message shown when the underlying failure carries no text of its own.
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to fetch stock data",
            Operation::Refresh => "Failed to refresh stock data",
        }
    }
}

/// Coarse classification of what went wrong underneath an [`OperationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureCause {
    /// Connect failure, timeout, or the body could not be read.
    Transport,
    /// The backend answered with a non-2xx status.
    Status(u16),
    /// The body was not a valid price series.
    Decode,
    /// The client could not form a request.
    Configuration,
}

impl From<&StocksError> for FailureCause {
    fn from(err: &StocksError) -> Self {
        match err {
            StocksError::Http(e) if e.is_decode() => FailureCause::Decode,
            StocksError::Http(_) => FailureCause::Transport,
            StocksError::Status { status, .. } => FailureCause::Status(*status),
            StocksError::Data(_) => FailureCause::Decode,
            StocksError::Url(_) | StocksError::Config(_) => FailureCause::Configuration,
        }
    }
}

/// A failed store operation.
///
/// UI layers only need the [`Display`](std::fmt::Display) text; the operation and
/// cause are kept for callers that want to branch on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationError {
    operation: Operation,
    cause: FailureCause,
    message: String,
}

impl OperationError {
    pub(crate) fn from_failure(operation: Operation, err: &StocksError) -> Self {
        let text = err.to_string();
        let message = if text.trim().is_empty() {
            operation.fallback_message().to_string()
        } else {
            text
        };
        Self {
            operation,
            cause: FailureCause::from(err),
            message,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn cause(&self) -> FailureCause {
        self.cause
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for OperationError {}

/// Snapshot of everything a [`StockStore`](crate::StockStore) exposes to observers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreState {
    /// The last successfully fetched series, in server order.
    pub series: Vec<StockPricePoint>,
    /// `true` while an operation is in flight.
    pub is_loading: bool,
    /// Failure of the most recent operation, cleared when the next one starts.
    pub last_error: Option<OperationError>,
    /// Symbol of the most recent fetch; empty until the first one.
    pub selected_symbol: String,
    /// Range of the most recent fetch; `"month"` until the first one.
    pub selected_range: String,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            is_loading: false,
            last_error: None,
            selected_symbol: String::new(),
            selected_range: Range::Month.into(),
        }
    }
}
