//! One ticker analysis, from news lookup to printed report.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::{
    analysis::{self, Report, ReportRow},
    article::{ArticleContent, ArticleContents},
    core::{FbClient, FinbotError},
    inference::{SentimentClassifier, Summarizer},
    news::NewsItem,
};

/// Everything gathered while analyzing a single ticker.
///
/// # Example
///
/// ```no_run
/// # use finbot_media::{FbClient, HfInference, InferenceConfig, TickerSession};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FbClient::new()?;
/// let models = HfInference::new(InferenceConfig::from_env()?)?;
///
/// let mut session = TickerSession::new("AAPL");
/// session.fetch_news(&client).await?;
/// session.summarize_and_analyze(&models, &models).await?;
/// session.display()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TickerSession {
    symbol: String,
    news: Vec<NewsItem>,
    by_link: HashMap<String, usize>,
    articles: ArticleContents,
    report: Report,
}

impl TickerSession {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            news: Vec::new(),
            by_link: HashMap::new(),
            articles: ArticleContents::new(),
            report: Report::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn articles(&self) -> &ArticleContents {
        &self.articles
    }

    /// Mutable access to the scraped contents, e.g. to inject text obtained elsewhere.
    pub fn articles_mut(&mut self) -> &mut ArticleContents {
        &mut self.articles
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Drops every row so a fresh `summarize_and_analyze` pass doesn't duplicate them.
    pub fn clear_report(&mut self) {
        self.report.clear();
    }

    /// The news item an article URL came from.
    ///
    /// # Errors
    ///
    /// Returns [`FinbotError::UnknownArticle`] if no fetched item links to `url`.
    pub fn news_item(&self, url: &str) -> Result<&NewsItem, FinbotError> {
        self.by_link
            .get(url)
            .and_then(|&idx| self.news.get(idx))
            .ok_or_else(|| FinbotError::UnknownArticle(url.to_string()))
    }

    /// Looks up recent news for the ticker and scrapes each linked article, one at a time.
    ///
    /// A link that fails to load is recorded as [`ArticleContent::RequestError`] and one
    /// without a body container as [`ArticleContent::NotFound`]; neither stops the batch.
    /// A repeated fetch replaces the news items and article contents of the previous one;
    /// report rows already built are kept.
    ///
    /// # Errors
    ///
    /// Only the news lookup itself can fail.
    #[tracing::instrument(skip(self, client), fields(symbol = %self.symbol), err)]
    pub async fn fetch_news(
        &mut self,
        client: &FbClient,
    ) -> Result<(&[NewsItem], &ArticleContents), FinbotError> {
        let news = client.recent_news(&self.symbol).await?;
        tracing::info!(count = news.len(), "fetched news items");

        self.by_link = news
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.link.clone(), idx))
            .collect();
        self.news = news;
        self.articles = ArticleContents::new();

        for item in &self.news {
            let content = client.fetch_article(&item.link).await;
            self.articles.insert(item.link.clone(), content);
        }

        Ok((self.news.as_slice(), &self.articles))
    }

    /// Summarizes and scores every successfully scraped article, appending one report row each.
    ///
    /// Articles whose content is a fetch sentinel or empty get no row, and neither does
    /// one whose URL has no news item (logged as [`FinbotError::UnknownArticle`]).
    /// Rows accumulate: calling this twice without [`clear_report`](Self::clear_report)
    /// appends every row again.
    ///
    /// # Errors
    ///
    /// Returns the first sentiment error. Summarizer errors are logged per chunk instead.
    #[tracing::instrument(skip_all, fields(symbol = %self.symbol), err)]
    pub async fn summarize_and_analyze(
        &mut self,
        summarizer: &dyn Summarizer,
        classifier: &dyn SentimentClassifier,
    ) -> Result<(), FinbotError> {
        for (url, content) in self.articles.iter() {
            let text = match content {
                ArticleContent::Body(text) if !text.is_empty() => text,
                ArticleContent::Body(_) | ArticleContent::NotFound | ArticleContent::RequestError => {
                    tracing::debug!(url, content = %content, "skipping article");
                    continue;
                }
            };

            let item = match self.news_item(url) {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping article");
                    continue;
                }
            };

            let summary = analysis::summarize_text(summarizer, text).await;
            let Some(sentiment) = analysis::score_text(classifier, text).await? else {
                tracing::warn!(url, "no sentiment chunks scored; skipping article");
                continue;
            };

            let row = ReportRow {
                title: item.title.clone(),
                url: url.to_string(),
                publisher: item.publisher.clone(),
                published: item.published.clone(),
                summary,
                sentiment,
            };
            self.report.push(row);
        }

        tracing::info!(rows = self.report.len(), "report assembled");
        Ok(())
    }

    /// Prints the report to stdout.
    ///
    /// # Errors
    ///
    /// Propagates stdout write failures.
    pub fn display(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.report.render(&mut out)?;
        out.flush()
    }
}
