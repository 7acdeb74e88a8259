pub mod builder;

use anyhow::Context;
use comment_store::{Comment, CommentCache, VideoInfo};

use crate::{
    normalize::normalize,
    sentiment::scorer::SentimentScorer,
    types::CommentThreadListResponse,
    yt::{CommentSource, VideoInfoSource},
};

// The core fetch -> normalize -> score -> cache pipeline
#[derive(Debug)]
pub struct SentimentPipeline<D, C, M, S>
where
    D: CommentCache + Send + Sync + 'static,
    C: CommentSource + Send + Sync + 'static,
    M: VideoInfoSource + Send + Sync + 'static,
    S: SentimentScorer + Send + Sync + 'static,
{
    cache: D,
    comment_source: C,
    video_info_source: M,
    scorer: S,
    max_records: usize,
}

impl<D, C, M, S> SentimentPipeline<D, C, M, S>
where
    D: CommentCache + Send + Sync + 'static,
    C: CommentSource + Send + Sync + 'static,
    M: VideoInfoSource + Send + Sync + 'static,
    S: SentimentScorer + Send + Sync + 'static,
{
    /// Retrieves every raw comment page for `video_id`, following the
    /// continuation token until the API stops returning one. No retry;
    /// the first failed page aborts the run.
    #[tracing::instrument(skip(self))]
    async fn fetch_all_comment_pages(
        &self,
        video_id: &str,
    ) -> anyhow::Result<Vec<CommentThreadListResponse>> {
        let mut pages = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .comment_source
                .fetch_page(video_id, page_token.as_deref())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to fetch comment page: {e:?}"))?;

            page_token = page.next_page_token.clone();
            pages.push(page);

            if page_token.is_none() {
                break;
            }
        }

        tracing::info!(pages = pages.len(), "Fetched all comment pages");
        Ok(pages)
    }

    /// Labels every record, preserving order. The scorer must return one
    /// label per input; anything else is a malformed response.
    #[tracing::instrument(skip_all)]
    async fn score_comments(&self, records: Vec<Comment>) -> anyhow::Result<Vec<Comment>> {
        let texts = records.iter().map(|c| c.text.clone()).collect::<Vec<_>>();

        let labels = self
            .scorer
            .score_batch(&texts)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to score comments: {e:?}"))?;

        if labels.len() != records.len() {
            anyhow::bail!(
                "Scorer returned {} labels for {} records",
                labels.len(),
                records.len()
            );
        }

        Ok(records
            .into_iter()
            .zip(labels)
            .map(|(record, label)| record.with_sentiment(label))
            .collect())
    }

    /// Returns the cached enriched records if an entry exists; otherwise
    /// runs fetch -> normalize -> score -> store in sequence and returns
    /// the result.
    ///
    /// Enrichment happens at most once per video id per cache lifetime:
    /// a cache hit makes zero comment-source and zero scorer calls.
    #[tracing::instrument(skip(self))]
    pub async fn get_comments_data(&self, video_id: &str) -> anyhow::Result<Vec<Comment>> {
        if self.cache.exists(video_id).await {
            tracing::info!(video_id = %video_id, "Cache hit, skipping fetch and scoring");
            return self
                .cache
                .load(video_id)
                .await
                .context("Failed to load cache entry");
        }

        let pages = self.fetch_all_comment_pages(video_id).await?;

        let records = normalize(&pages, self.max_records);
        tracing::info!(records = records.len(), "Normalized comment records");

        let enriched = self.score_comments(records).await?;

        self.cache
            .store(video_id, &enriched)
            .await
            .context("Failed to store cache entry")?;

        Ok(enriched)
    }

    /// Title/stats/thumbnail for the video. Never cached.
    #[tracing::instrument(skip(self))]
    pub async fn get_video_info(&self, video_id: &str) -> anyhow::Result<VideoInfo> {
        self.video_info_source
            .fetch_video_info(video_id)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch video info: {e:?}"))
    }
}

