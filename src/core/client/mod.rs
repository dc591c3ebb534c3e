//! Public client surface + builder.
//! Defaults (base URL, timeout, UA) live in `constants`.

mod constants;

use crate::core::StocksError;
use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client and the backend base URL.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted, so one
/// client can back any number of [`StockStore`](crate::StockStore) handles.
#[derive(Debug, Clone)]
pub struct StocksClient {
    http: Client,
    base_url: Url,
}

impl Default for StocksClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl StocksClient {
    /// Create a new builder.
    pub fn builder() -> StocksClientBuilder {
        StocksClientBuilder::default()
    }

    /// The backend base URL every resource path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Resolve `segments` below the base URL, percent-encoding each one as a single
    /// path segment. A base without a trailing slash is treated as a directory.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, StocksError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                StocksError::Config(format!("base url cannot hold paths: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug, Default)]
pub struct StocksClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    custom_client: Option<Client>,
}

impl StocksClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the backend API base (e.g., `http://localhost:8080/api/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Use a pre-configured `reqwest::Client`.
    ///
    /// The user agent and timeouts set on this builder are ignored in that case;
    /// configure them on the supplied client instead.
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    pub fn build(self) -> Result<StocksClient, StocksError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if base_url.cannot_be_a_base() {
            return Err(StocksError::Config(format!(
                "base url cannot hold paths: {base_url}"
            )));
        }

        let http = match self.custom_client {
            Some(client) => client,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
                    .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }

                httpb.build()?
            }
        };

        Ok(StocksClient { http, base_url })
    }
}
