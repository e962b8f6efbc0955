//! Public client surface + builder.
//! Defaults (timeouts) live in `constants`.

mod constants;

use crate::core::NewsError;
use crate::news::NewsBuilder;
use constants::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
use reqwest::Client;
use std::time::Duration;

/// A thin, cloneable handle around the HTTP connection pool.
///
/// Cloning is cheap; all clones share the same underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /// Start a news request against a complete request URL (query string included).
    pub fn news(&self, url: impl Into<String>) -> NewsBuilder {
        NewsBuilder::new(self, url)
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NewsClientBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl NewsClientBuilder {
    /// Send a `User-Agent` header. Default: none.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: 15 seconds.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set a per-read timeout on the response body. Default: 10 seconds.
    #[must_use]
    pub fn read_timeout(mut self, dur: Duration) -> Self {
        self.read_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the TLS backend cannot be initialised.
    pub fn build(self) -> Result<NewsClient, NewsError> {
        let mut httpb = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .read_timeout(self.read_timeout.unwrap_or(DEFAULT_READ_TIMEOUT));

        if let Some(ua) = self.user_agent.as_deref() {
            httpb = httpb.user_agent(ua);
        }
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }

        let http = httpb.build()?;

        Ok(NewsClient { http })
    }
}
