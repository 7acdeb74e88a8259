use std::sync::{Arc, Mutex};

use comment_pulse::SentimentScorer;
use comment_store::Sentiment;

/// Labels every text with a fixed sentiment, recording each batch.
#[derive(Clone)]
pub struct MockScorer {
    pub label: Sentiment,
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
    pub fail_with: Option<String>,
}

impl MockScorer {
    pub fn new(label: Sentiment) -> Self {
        Self {
            label,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            label: Sentiment::Neutral,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl SentimentScorer for MockScorer {
    const SCORER_MODEL: &'static str = "mock-classifier";
    type Error = anyhow::Error;

    async fn score_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Sentiment>> {
        self.calls.lock().unwrap().push(texts.to_vec());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(vec![self.label; texts.len()])
    }
}
