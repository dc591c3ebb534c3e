//! Centralized constants for default endpoints, timeouts and UA.

use std::time::Duration;

/// Identifies this crate to the backend.
pub(crate) const USER_AGENT: &str = concat!("stocks-store/", env!("CARGO_PKG_VERSION"));

/// Backend API base (resource paths such as `stocks/{symbol}` are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/";

/// Overall request timeout applied when the builder is not given one.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
