//! Summaries and sentiment scores for scraped articles.

mod chunk;
mod model;

pub use chunk::{SENTIMENT_CHUNK_CHARS, SUMMARY_CHUNK_CHARS, chunk_chars};
pub use model::{Report, ReportRow};

use crate::{
    core::FinbotError,
    inference::{SentimentClassifier, SummaryLength, Summarizer},
};

/// Length bounds requested for every chunk summary.
pub const SUMMARY_LENGTH: SummaryLength = SummaryLength { min: 30, max: 60 };

/// Parses the leading whitespace-separated token of a sentiment label as its score.
///
/// `"4 stars"` gives `4`.
///
/// # Errors
///
/// Returns [`FinbotError::Data`] if the label does not start with an integer.
pub fn parse_score(label: &str) -> Result<i64, FinbotError> {
    label
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| FinbotError::Data(format!("sentiment label without a leading score: `{label}`")))
}

/// Arithmetic mean of the scores, unweighted. `None` for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn average_score(scores: &[i64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: i64 = scores.iter().sum();
    Some(sum as f64 / scores.len() as f64)
}

/// Summarizes `text` one 1024-character chunk at a time and joins the results with `\n`.
///
/// A chunk the service fails on is logged and left out.
pub async fn summarize_text(summarizer: &dyn Summarizer, text: &str) -> String {
    let mut parts = Vec::new();
    for (idx, chunk) in chunk_chars(text, SUMMARY_CHUNK_CHARS).into_iter().enumerate() {
        match summarizer.summarize(chunk, SUMMARY_LENGTH).await {
            Ok(summary) => parts.push(summary),
            Err(e) => tracing::error!(chunk = idx, error = %e, "Error summarizing chunk"),
        }
    }
    parts.join("\n")
}

/// Scores `text` one 512-character chunk at a time and averages the scores.
///
/// Returns `Ok(None)` when there is nothing to score.
///
/// # Errors
///
/// Returns the first classifier error, or a [`FinbotError::Data`] for an unparsable label.
pub async fn score_text(
    classifier: &dyn SentimentClassifier,
    text: &str,
) -> Result<Option<f64>, FinbotError> {
    let mut scores = Vec::new();
    for chunk in chunk_chars(text, SENTIMENT_CHUNK_CHARS) {
        let label = classifier.classify(chunk).await?;
        scores.push(parse_score(&label)?);
    }
    Ok(average_score(&scores))
}
