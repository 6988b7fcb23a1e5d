use std::env;

use url::Url;

use crate::core::FinbotError;

const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";
const DEFAULT_SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";
const DEFAULT_SENTIMENT_MODEL: &str = "nlptown/bert-base-multilingual-uncased-sentiment";

/// Where the model services live and which models they run.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Base URL of the inference API; model ids are appended as `/models/{id}`.
    pub api_base: Url,
    /// Bearer token sent with every request, if any.
    pub api_token: Option<String>,
    /// Model id used for summaries.
    pub summarization_model: String,
    /// Model id used for sentiment labels.
    pub sentiment_model: String,
}

impl InferenceConfig {
    /// Defaults for the hosted Hugging Face API, with no token.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse.
    pub fn new() -> Result<Self, FinbotError> {
        Ok(Self {
            api_base: Url::parse(DEFAULT_API_BASE)?,
            api_token: None,
            summarization_model: DEFAULT_SUMMARIZATION_MODEL.to_string(),
            sentiment_model: DEFAULT_SENTIMENT_MODEL.to_string(),
        })
    }

    /// Defaults overridden by the environment.
    ///
    /// Reads `HF_API_TOKEN`, `FINBOT_INFERENCE_BASE`, `FINBOT_SUMMARIZATION_MODEL`
    /// and `FINBOT_SENTIMENT_MODEL`. Unset or empty variables keep the default.
    ///
    /// # Errors
    ///
    /// Returns [`FinbotError::Config`] if `FINBOT_INFERENCE_BASE` is not a valid URL.
    pub fn from_env() -> Result<Self, FinbotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with variables read through `lookup`.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FinbotError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::new()?;

        if let Some(token) = var("HF_API_TOKEN") {
            config.api_token = Some(token);
        }
        if let Some(base) = var("FINBOT_INFERENCE_BASE") {
            config.api_base = Url::parse(&base)
                .map_err(|e| FinbotError::Config(format!("FINBOT_INFERENCE_BASE `{base}`: {e}")))?;
        }
        if let Some(model) = var("FINBOT_SUMMARIZATION_MODEL") {
            config.summarization_model = model;
        }
        if let Some(model) = var("FINBOT_SENTIMENT_MODEL") {
            config.sentiment_model = model;
        }

        Ok(config)
    }

    /// Set the API base URL (e.g., a self-hosted inference server).
    #[must_use]
    pub fn with_api_base(mut self, base: Url) -> Self {
        self.api_base = base;
        self
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the summarization model id.
    #[must_use]
    pub fn with_summarization_model(mut self, model: impl Into<String>) -> Self {
        self.summarization_model = model.into();
        self
    }

    /// Set the sentiment model id.
    #[must_use]
    pub fn with_sentiment_model(mut self, model: impl Into<String>) -> Self {
        self.sentiment_model = model.into();
        self
    }

    /// URL of the endpoint serving `model`.
    pub(crate) fn model_url(&self, model: &str) -> Result<Url, FinbotError> {
        let base = self.api_base.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/models/{model}"))?)
    }
}
