use std::sync::{Arc, Mutex};

use comment_pulse::{types::CommentThreadListResponse, yt::CommentSource};

/// Serves a fixed chain of pages, resolving a continuation token to the
/// page that follows the one that issued it. Records every request's
/// page token.
#[derive(Clone)]
pub struct MockCommentSource {
    pub pages: Vec<CommentThreadListResponse>,
    pub requests: Arc<Mutex<Vec<Option<String>>>>,
    pub fail_with: Option<String>,
}

impl MockCommentSource {
    pub fn new(pages: Vec<CommentThreadListResponse>) -> Self {
        Self {
            pages,
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn from_fixtures() -> Self {
        let page1: CommentThreadListResponse =
            serde_json::from_str(include_str!("../fixtures/comment_threads_page1.json"))
                .expect("Failed to parse page1 fixture");
        let page2: CommentThreadListResponse =
            serde_json::from_str(include_str!("../fixtures/comment_threads_page2.json"))
                .expect("Failed to parse page2 fixture");

        Self::new(vec![page1, page2])
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            pages: Vec::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl CommentSource for MockCommentSource {
    type Error = anyhow::Error;

    async fn fetch_page(
        &self,
        _video_id: &str,
        page_token: Option<&str>,
    ) -> anyhow::Result<CommentThreadListResponse> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }

        self.requests
            .lock()
            .unwrap()
            .push(page_token.map(String::from));

        let index = match page_token {
            None => 0,
            Some(token) => self
                .pages
                .iter()
                .position(|p| p.next_page_token.as_deref() == Some(token))
                .map(|i| i + 1)
                .ok_or_else(|| anyhow::anyhow!("Unknown page token: {token}"))?,
        };

        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No page at index {index}"))
    }
}
