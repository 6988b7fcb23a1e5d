//! finbot-media: recent Yahoo Finance news for a ticker, summarized and scored.
//!
//! The pipeline runs in three sequential stages on a [`TickerSession`]:
//! fetch news and scrape article bodies, summarize and score each article,
//! then print the report.

pub mod analysis;
pub mod article;
pub mod core;
pub mod inference;
pub mod news;
pub mod session;

pub use analysis::{Report, ReportRow};
pub use article::{ArticleContent, ArticleContents};
pub use crate::core::{FbClient, FbClientBuilder, FinbotError};
pub use inference::{HfInference, InferenceConfig, SentimentClassifier, ServiceFuture, SummaryLength, Summarizer};
pub use news::NewsItem;
pub use session::TickerSession;
