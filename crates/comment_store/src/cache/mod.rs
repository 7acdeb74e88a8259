use std::future::Future;

use crate::Comment;

pub mod json_file;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("no cache entry for video {0}")]
    NotFound(String),
    #[error("cache IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed cache entry: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Persisted enriched record sets, keyed by video id.
///
/// An entry exists only if a full pipeline run completed for that id;
/// implementations must never leave a partially written entry behind.
pub trait CommentCache {
    fn exists(&self, video_id: &str) -> impl Future<Output = bool> + Send;

    fn load(&self, video_id: &str)
        -> impl Future<Output = Result<Vec<Comment>, CacheError>> + Send;

    fn store(
        &self,
        video_id: &str,
        records: &[Comment],
    ) -> impl Future<Output = Result<(), CacheError>> + Send;
}

impl<T: CommentCache + Send + Sync> CommentCache for &T {
    async fn exists(&self, video_id: &str) -> bool {
        (**self).exists(video_id).await
    }

    async fn load(&self, video_id: &str) -> Result<Vec<Comment>, CacheError> {
        (**self).load(video_id).await
    }

    async fn store(&self, video_id: &str, records: &[Comment]) -> Result<(), CacheError> {
        (**self).store(video_id, records).await
    }
}
