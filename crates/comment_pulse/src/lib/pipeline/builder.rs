use comment_store::CommentCache;

use crate::{
    sentiment::scorer::SentimentScorer,
    yt::{CommentSource, VideoInfoSource},
    SentimentPipeline,
};

pub struct SentimentPipelineBuilder<D = (), C = (), M = (), S = ()> {
    cache: D,
    comment_source: C,
    video_info_source: M,
    scorer: S,
    max_records: usize,
}

impl SentimentPipelineBuilder {
    pub fn new() -> Self {
        Self {
            cache: (),
            comment_source: (),
            video_info_source: (),
            scorer: (),
            max_records: crate::normalize::MAX_RECORDS,
        }
    }
}

impl Default for SentimentPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, C, M, S> SentimentPipelineBuilder<D, C, M, S> {
    pub fn cache<D2: CommentCache + Send + Sync + 'static>(
        self,
        cache: D2,
    ) -> SentimentPipelineBuilder<D2, C, M, S> {
        SentimentPipelineBuilder {
            cache,
            comment_source: self.comment_source,
            video_info_source: self.video_info_source,
            scorer: self.scorer,
            max_records: self.max_records,
        }
    }

    pub fn comment_source<C2: CommentSource + Send + Sync + 'static>(
        self,
        comment_source: C2,
    ) -> SentimentPipelineBuilder<D, C2, M, S> {
        SentimentPipelineBuilder {
            cache: self.cache,
            comment_source,
            video_info_source: self.video_info_source,
            scorer: self.scorer,
            max_records: self.max_records,
        }
    }

    pub fn video_info_source<M2: VideoInfoSource + Send + Sync + 'static>(
        self,
        video_info_source: M2,
    ) -> SentimentPipelineBuilder<D, C, M2, S> {
        SentimentPipelineBuilder {
            cache: self.cache,
            comment_source: self.comment_source,
            video_info_source,
            scorer: self.scorer,
            max_records: self.max_records,
        }
    }

    pub fn scorer<S2: SentimentScorer + Send + Sync + 'static>(
        self,
        scorer: S2,
    ) -> SentimentPipelineBuilder<D, C, M, S2> {
        SentimentPipelineBuilder {
            cache: self.cache,
            comment_source: self.comment_source,
            video_info_source: self.video_info_source,
            scorer,
            max_records: self.max_records,
        }
    }

    pub fn max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }
}

impl<D, C, M, S> SentimentPipelineBuilder<D, C, M, S>
where
    D: CommentCache + Send + Sync + 'static,
    C: CommentSource + Send + Sync + 'static,
    M: VideoInfoSource + Send + Sync + 'static,
    S: SentimentScorer + Send + Sync + 'static,
{
    pub fn build(self) -> SentimentPipeline<D, C, M, S> {
        SentimentPipeline {
            cache: self.cache,
            comment_source: self.comment_source,
            video_info_source: self.video_info_source,
            scorer: self.scorer,
            max_records: self.max_records,
        }
    }
}
