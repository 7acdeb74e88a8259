use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use comment_pulse::yt::VideoInfoSource;
use comment_store::VideoInfo;

#[derive(Clone)]
pub struct MockVideoInfoSource {
    pub info: VideoInfo,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockVideoInfoSource {
    fn default() -> Self {
        Self {
            info: VideoInfo {
                thumbnail_url: "https://i.ytimg.com/vi/mock/hqdefault.jpg".into(),
                title: "Mock video".into(),
                channel_name: "Mock channel".into(),
                video_url: "youtu.be/mock".into(),
                views: 1000,
                likes: 100,
                published_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockVideoInfoSource {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl VideoInfoSource for MockVideoInfoSource {
    type Error = anyhow::Error;

    async fn fetch_video_info(&self, video_id: &str) -> anyhow::Result<VideoInfo> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.calls.lock().unwrap().push(video_id.to_string());
        Ok(self.info.clone())
    }
}
