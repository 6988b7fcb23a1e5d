//! Article bodies scraped from news links.

mod extract;

use std::fmt;

use crate::core::{FbClient, FinbotError, net};

/// What came back from scraping one article link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleContent {
    /// The article body text.
    Body(String),
    /// The page loaded but had no article body container.
    NotFound,
    /// The page could not be fetched (transport error or non-2xx status).
    RequestError,
}

impl ArticleContent {
    /// The body text, if extraction succeeded.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Body(text) => Some(text),
            Self::NotFound | Self::RequestError => None,
        }
    }

    /// The body text, or the sentinel message for a failed extraction.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Body(text) => text,
            Self::NotFound => "Content not found!",
            Self::RequestError => "Request error: Failed to fetch content!",
        }
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Article contents keyed by URL, in the order the URLs were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleContents {
    entries: Vec<(String, ArticleContent)>,
}

impl ArticleContents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the content for `url`. A URL seen before keeps its position and gets the new value.
    pub fn insert(&mut self, url: impl Into<String>, content: ArticleContent) {
        let url = url.into();
        match self.entries.iter_mut().find(|(u, _)| *u == url) {
            Some((_, existing)) => *existing = content,
            None => self.entries.push((url, content)),
        }
    }

    pub fn get(&self, url: &str) -> Option<&ArticleContent> {
        self.entries.iter().find(|(u, _)| u == url).map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArticleContent)> {
        self.entries.iter().map(|(u, c)| (u.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FbClient {
    /// Fetches `url` and extracts the article body.
    ///
    /// Never fails: transport errors and non-2xx statuses become
    /// [`ArticleContent::RequestError`], a page without a body container becomes
    /// [`ArticleContent::NotFound`].
    #[tracing::instrument(skip(self))]
    pub async fn fetch_article(&self, url: &str) -> ArticleContent {
        match self.try_fetch_article(url).await {
            Ok(Some(body)) => {
                tracing::debug!(bytes = body.len(), "extracted article body");
                ArticleContent::Body(body)
            }
            Ok(None) => {
                tracing::info!("article body container not found");
                ArticleContent::NotFound
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch article");
                ArticleContent::RequestError
            }
        }
    }

    async fn try_fetch_article(&self, url: &str) -> Result<Option<String>, FinbotError> {
        let resp = self.http().get(url).send().await?;
        let html = net::get_text(resp, "article").await?;
        extract::extract_article_body(&html)
    }
}
