use std::{fmt::Debug, future::Future};

use comment_store::Sentiment;

/// Maps text to its top-ranked sentiment label.
///
/// Deterministic for a fixed model version: the same text always yields the
/// same label.
pub trait SentimentScorer {
    const SCORER_MODEL: &'static str;

    type Error: Debug;

    /// Scores a batch of texts, returning one label per input,
    /// index-aligned.
    fn score_batch(
        &self,
        texts: &[String],
    ) -> impl Future<Output = Result<Vec<Sentiment>, Self::Error>> + Send;
}
