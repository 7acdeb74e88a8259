use std::path::PathBuf;

use crate::{cache::CacheError, cache::CommentCache, Comment};

/// File-per-video-id JSON cache rooted at a local directory.
///
/// Entry layout is `<cache_dir>/<video_id>.json`, a JSON array of
/// `{text, date, sentiment}` objects.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    cache_dir: PathBuf,
}

impl JsonFileCache {
    /// Opens the cache rooted at `cache_dir`, creating the directory
    /// if it does not exist yet.
    pub async fn init(cache_dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let cache_dir = cache_dir.into();

        tokio::fs::create_dir_all(&cache_dir)
            .await
            .inspect_err(
                |e| tracing::error!(error = ?e, path = ?cache_dir, "Failed to create cache directory"),
            )?;

        Ok(JsonFileCache { cache_dir })
    }

    fn entry_path(&self, video_id: &str) -> PathBuf {
        self.cache_dir.join(format!("{video_id}.json"))
    }
}

impl CommentCache for JsonFileCache {
    async fn exists(&self, video_id: &str) -> bool {
        self.entry_path(video_id).exists()
    }

    async fn load(&self, video_id: &str) -> Result<Vec<Comment>, CacheError> {
        let path = self.entry_path(video_id);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CacheError::NotFound(video_id.to_string()));
            }
            Err(e) => {
                tracing::error!(error = ?e, path = ?path, "Failed to read cache entry");
                return Err(e.into());
            }
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn store(&self, video_id: &str, records: &[Comment]) -> Result<(), CacheError> {
        let path = self.entry_path(video_id);
        let tmp_path = self.cache_dir.join(format!("{video_id}.json.tmp"));

        let bytes = serde_json::to_vec(records)?;

        // Write the whole document to a sibling file, then rename it into
        // place: an entry either exists complete or not at all.
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, path = ?tmp_path, "Failed to write cache entry"))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, path = ?path, "Failed to finalize cache entry"))?;

        tracing::info!(video_id, records = records.len(), path = ?path, "Stored cache entry");

        Ok(())
    }
}
