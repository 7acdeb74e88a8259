use comment_store::VideoInfo;
use reqwest::Client;

use crate::{
    types::{CommentThreadListResponse, VideoListResponse},
    yt::{CommentSource, VideoInfoSource},
};

/// Client for the YouTube Data API v3, covering the two resources the
/// pipeline reads: `commentThreads` and `videos`.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum YouTubeError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error(transparent)]
    Parse(#[from] crate::Error),
}

impl YouTubeClient {
    /// Comments per page; the API maximum for `commentThreads.list`.
    const MAX_RESULTS: u8 = 100;

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://www.googleapis.com/youtube/v3".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_comment_threads_request(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse, YouTubeError> {
        let mut query: Vec<(&str, String)> = vec![
            ("part", "snippet,replies".into()),
            ("videoId", video_id.into()),
            ("maxResults", Self::MAX_RESULTS.to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.into()));
        }

        let resp = self
            .client
            .get(format!("{}/commentThreads", self.base_url))
            .query(&query)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api { status, message });
        }

        Ok(resp.json::<CommentThreadListResponse>().await?)
    }

    async fn send_videos_request(&self, video_id: &str) -> Result<VideoListResponse, YouTubeError> {
        let resp = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet,contentDetails,statistics"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api { status, message });
        }

        Ok(resp.json::<VideoListResponse>().await?)
    }
}

impl CommentSource for YouTubeClient {
    type Error = YouTubeError;

    async fn fetch_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse, Self::Error> {
        self.send_comment_threads_request(video_id, page_token).await
    }
}

impl VideoInfoSource for YouTubeClient {
    type Error = YouTubeError;

    async fn fetch_video_info(&self, video_id: &str) -> Result<VideoInfo, Self::Error> {
        let response = self.send_videos_request(video_id).await?;

        let item = response.items.into_iter().next().ok_or(crate::Error::MalformedResponse(
            "'items' is empty, no video with this id",
        ))?;

        Ok(VideoInfo::try_from(item)?)
    }
}
