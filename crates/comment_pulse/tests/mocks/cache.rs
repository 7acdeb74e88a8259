use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use comment_store::{CacheError, Comment, CommentCache};

#[derive(Clone, Default)]
pub struct MockCache {
    pub entries: Arc<Mutex<HashMap<String, Vec<Comment>>>>,
    pub stores: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockCache {
    pub fn with_entry(video_id: &str, records: Vec<Comment>) -> Self {
        let cache = Self::default();
        cache
            .entries
            .lock()
            .unwrap()
            .insert(video_id.to_string(), records);
        cache
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl CommentCache for MockCache {
    async fn exists(&self, video_id: &str) -> bool {
        self.entries.lock().unwrap().contains_key(video_id)
    }

    async fn load(&self, video_id: &str) -> Result<Vec<Comment>, CacheError> {
        self.entries
            .lock()
            .unwrap()
            .get(video_id)
            .cloned()
            .ok_or_else(|| CacheError::NotFound(video_id.to_string()))
    }

    async fn store(&self, video_id: &str, records: &[Comment]) -> Result<(), CacheError> {
        if let Some(ref msg) = self.fail_with {
            return Err(CacheError::Io(std::io::Error::other(msg.clone())));
        }
        self.stores.lock().unwrap().push(video_id.to_string());
        self.entries
            .lock()
            .unwrap()
            .insert(video_id.to_string(), records.to_vec());
        Ok(())
    }
}
