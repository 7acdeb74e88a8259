pub mod cache;
pub mod comment_source;
pub mod scorer;
pub mod video_info_source;
