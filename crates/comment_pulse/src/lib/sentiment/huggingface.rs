use comment_store::Sentiment;
use reqwest::Client;
use serde::Deserialize;

use crate::sentiment::scorer::SentimentScorer;

/// Client for the Hugging Face inference API's text-classification task.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    api_token: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HuggingFaceError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("classifier returned an empty ranking for an input")]
    EmptyRanking,
    #[error("classifier returned unknown label: {0}")]
    UnknownLabel(String),
}

/// One `{label, score}` entry of a per-input ranking.
#[derive(Debug, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

impl HuggingFaceClient {
    /// Inputs per request. Each HTTP round-trip amortizes over this many
    /// comments, which is what keeps a 10,000-record run tolerable.
    const BATCH_SIZE: usize = 64;

    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_token: api_token.into(),
            base_url: "https://api-inference.huggingface.co".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sends one classification request; the response carries a full label
    /// ranking per input.
    async fn send_classification_request(
        &self,
        inputs: &[String],
    ) -> Result<Vec<Vec<LabelScore>>, HuggingFaceError> {
        let body = serde_json::json!({
            "inputs": inputs,
            "options": { "wait_for_model": true }
        });

        let resp = self
            .client
            .post(format!("{}/models/{}", self.base_url, Self::SCORER_MODEL))
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(HuggingFaceError::Api { status, message });
        }

        Ok(resp.json::<Vec<Vec<LabelScore>>>().await?)
    }
}

impl SentimentScorer for HuggingFaceClient {
    const SCORER_MODEL: &'static str =
        "lxyuan/distilbert-base-multilingual-cased-sentiments-student";
    type Error = HuggingFaceError;

    async fn score_batch(&self, texts: &[String]) -> Result<Vec<Sentiment>, Self::Error> {
        let mut labels = Vec::with_capacity(texts.len());

        for batch in texts.chunks(Self::BATCH_SIZE) {
            let rankings = self
                .send_classification_request(batch)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to classify batch"))?;

            for ranking in rankings {
                let top = ranking
                    .iter()
                    .max_by(|a, b| a.score.total_cmp(&b.score))
                    .ok_or(HuggingFaceError::EmptyRanking)?;

                let sentiment = Sentiment::from_label(&top.label)
                    .ok_or_else(|| HuggingFaceError::UnknownLabel(top.label.clone()))?;
                labels.push(sentiment);
            }
        }

        Ok(labels)
    }
}
