pub mod client;

use std::{fmt::Debug, future::Future};

use comment_store::VideoInfo;

use crate::types::CommentThreadListResponse;

/// Paginated retrieval of raw comment pages for a video.
pub trait CommentSource {
    type Error: Debug;

    /// Fetches one page of comment threads; `None` requests the first page.
    /// More pages exist while the returned page carries a continuation
    /// token.
    fn fetch_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<CommentThreadListResponse, Self::Error>> + Send;
}

/// Single-call retrieval of video title/stats/thumbnail.
pub trait VideoInfoSource {
    type Error: Debug;

    fn fetch_video_info(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<VideoInfo, Self::Error>> + Send;
}
