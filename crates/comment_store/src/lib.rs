//! # Comment Store
//!
//! Domain types for enriched YouTube comments and the on-disk result cache.
//!
//! A cache entry is the full, ordered, sentiment-labeled record set for one
//! video id. Entries are written atomically and served as-is until manually
//! deleted; there is no expiry.

mod cache;
mod domain;

pub use cache::json_file::JsonFileCache;
pub use cache::{CacheError, CommentCache};
pub use domain::{Comment, Sentiment, VideoInfo};
