//! Public client surface + builder.
//! Endpoint defaults and the browser UA live in `constants`.

mod constants;

use crate::core::FinbotError;
use constants::{DEFAULT_BASE_SEARCH, DEFAULT_NEWS_COUNT, USER_AGENT};
use reqwest::Client;
use url::Url;

/// Shared HTTP handle used for the news lookup and for article pages.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct FbClient {
    http: Client,
    base_search: Url,
    news_count: u32,
}

impl FbClient {
    /// Create a new builder.
    pub fn builder() -> FbClientBuilder {
        FbClientBuilder::default()
    }

    /// Build a client with every default applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, FinbotError> {
        Self::builder().build()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_search(&self) -> &Url {
        &self.base_search
    }
    pub(crate) fn news_count(&self) -> u32 {
        self.news_count
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FbClientBuilder {
    user_agent: Option<String>,
    base_search: Option<Url>,
    news_count: Option<u32>,
}

impl FbClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the search API base (e.g., `https://query2.finance.yahoo.com/v1/finance/search`).
    #[must_use]
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// How many news items to ask the lookup service for. Default: 10.
    #[must_use]
    pub const fn news_count(mut self, n: u32) -> Self {
        self.news_count = Some(n);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or reqwest cannot build its client.
    pub fn build(self) -> Result<FbClient, FinbotError> {
        let base_search = match self.base_search {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SEARCH)?,
        };

        // No timeout override: a stalled request stalls the run.
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true)
            .build()?;

        Ok(FbClient {
            http,
            base_search,
            news_count: self.news_count.unwrap_or(DEFAULT_NEWS_COUNT),
        })
    }
}
