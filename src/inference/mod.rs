//! Model services used to summarize and score article text.
//!
//! The pipeline only talks to the [`Summarizer`] and [`SentimentClassifier`]
//! traits, so a handle is built once and passed in wherever it is needed.
//! [`HfInference`] implements both against the Hugging Face inference API.

mod config;
mod hf;

pub use config::InferenceConfig;
pub use hf::HfInference;

use std::future::Future;
use std::pin::Pin;

use crate::core::FinbotError;

/// Boxed future returned by the model service traits.
pub type ServiceFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, FinbotError>> + Send + 'a>>;

/// Length bounds handed to the summarizer, in model tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLength {
    /// Shortest summary the model should produce.
    pub min: u32,
    /// Longest summary the model should produce.
    pub max: u32,
}

/// A service that condenses a chunk of text.
pub trait Summarizer: Send + Sync {
    /// Summarizes `text` within the given length bounds.
    fn summarize<'a>(&'a self, text: &'a str, length: SummaryLength) -> ServiceFuture<'a, String>;
}

/// A service that classifies the sentiment of a chunk of text.
///
/// The returned label starts with the integer class score, e.g. `"4 stars"`.
pub trait SentimentClassifier: Send + Sync {
    /// Returns the winning label for `text`.
    fn classify<'a>(&'a self, text: &'a str) -> ServiceFuture<'a, String>;
}
