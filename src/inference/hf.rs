//! Hugging Face inference API client for both model services.

use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::{InferenceConfig, SentimentClassifier, ServiceFuture, SummaryLength, Summarizer};
use crate::core::FinbotError;

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Serialize)]
struct SummarizationParameters {
    min_length: u32,
    max_length: u32,
    do_sample: bool,
}

#[derive(Serialize)]
struct SummarizationPayload<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct ClassificationPayload<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

#[derive(Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Text classification answers come back nested one level per input, or flat.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationOutput {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationOutput {
    fn into_best_label(self) -> Option<String> {
        let scores = match self {
            Self::Nested(outer) => outer.into_iter().next()?,
            Self::Flat(scores) => scores,
        };
        scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|s| s.label)
    }
}

/// Summarizer and sentiment classifier backed by a Hugging Face style inference API.
///
/// Build one per run and share it; it holds a pooled HTTP client.
#[derive(Debug, Clone)]
pub struct HfInference {
    http: Client,
    config: InferenceConfig,
}

impl HfInference {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: InferenceConfig) -> Result<Self, FinbotError> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    async fn post<P, T>(&self, model: &str, payload: &P) -> Result<T, FinbotError>
    where
        P: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.model_url(model)?;
        let mut req = self.http.post(url).json(payload);
        if let Some(token) = &self.config.api_token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(FinbotError::Inference {
                model: model.to_string(),
                message: format!("status {}: {}", status.as_u16(), body.trim()),
            });
        }

        serde_json::from_str(&body).map_err(|e| FinbotError::Inference {
            model: model.to_string(),
            message: format!("unexpected response body: {e}"),
        })
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()), err)]
    async fn summarize_chunk(&self, text: &str, length: SummaryLength) -> Result<String, FinbotError> {
        let model = &self.config.summarization_model;
        let payload = SummarizationPayload {
            inputs: text,
            parameters: SummarizationParameters {
                min_length: length.min,
                max_length: length.max,
                do_sample: false,
            },
            options: InferenceOptions { wait_for_model: true },
        };

        let out: Vec<SummaryOutput> = self.post(model, &payload).await?;
        out.into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| FinbotError::Inference {
                model: model.clone(),
                message: "empty summarization response".into(),
            })
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()), err)]
    async fn classify_chunk(&self, text: &str) -> Result<String, FinbotError> {
        let model = &self.config.sentiment_model;
        let payload = ClassificationPayload {
            inputs: text,
            options: InferenceOptions { wait_for_model: true },
        };

        let out: ClassificationOutput = self.post(model, &payload).await?;
        out.into_best_label().ok_or_else(|| FinbotError::Inference {
            model: model.clone(),
            message: "empty classification response".into(),
        })
    }
}

impl Summarizer for HfInference {
    fn summarize<'a>(&'a self, text: &'a str, length: SummaryLength) -> ServiceFuture<'a, String> {
        Box::pin(self.summarize_chunk(text, length))
    }
}

impl SentimentClassifier for HfInference {
    fn classify<'a>(&'a self, text: &'a str) -> ServiceFuture<'a, String> {
        Box::pin(self.classify_chunk(text))
    }
}
