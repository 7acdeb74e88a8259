use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-ranked label the classifier assigns to a piece of text.
///
/// Serialized lowercase to match the label strings the model emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Maps a raw classifier label to a sentiment, `None` for anything
    /// outside the model's three-label head.
    pub fn from_label(label: &str) -> Option<Sentiment> {
        match label {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single comment record.
///
/// Produced by normalization with `sentiment: None`; the scorer fills the
/// label in. Records are not mutated after enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub date: DateTime<Utc>,
    pub sentiment: Option<Sentiment>,
}

impl Comment {
    pub fn new(text: impl Into<String>, date: DateTime<Utc>) -> Self {
        Comment {
            text: text.into(),
            date,
            sentiment: None,
        }
    }

    pub fn with_sentiment(self, sentiment: Sentiment) -> Self {
        Comment {
            sentiment: Some(sentiment),
            ..self
        }
    }
}

/// Video title/stats/thumbnail, fetched once per lookup and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub thumbnail_url: String,
    pub title: String,
    pub channel_name: String,
    pub video_url: String,
    pub views: u64,
    pub likes: u64,
    pub published_date: DateTime<Utc>,
}
