//! # Record Normalizer
//!
//! Projects raw `commentThreads.list` pages into flat comment records and
//! applies the length policy that bounds downstream model cost: comments
//! whose cleaned text exceeds [`MAX_COMMENT_CHARS`] are dropped, then the
//! first `max_records` survivors are kept, in page order.

use std::sync::LazyLock;

use comment_store::{Comment, VideoInfo};
use itertools::Itertools;
use regex::Regex;

use crate::{
    error::Error,
    types::{CommentThreadListResponse, VideoItem},
};

/// Cleaned comments longer than this are dropped before the cap is applied.
/// Unicode scalar count, not bytes.
pub const MAX_COMMENT_CHARS: usize = 512;

/// Default record cap per video.
pub const MAX_RECORDS: usize = 10_000;

static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Flattens raw pages into comment records, preserving page/comment order.
///
/// Filtering precedes capping: the cap is only ever spent on records that
/// will actually be scored.
#[tracing::instrument(skip(pages))]
pub fn normalize(pages: &[CommentThreadListResponse], max_records: usize) -> Vec<Comment> {
    let mut records = Vec::new();

    'pages: for page in pages {
        for thread in &page.items {
            let snippet = &thread.snippet.top_level_comment.snippet;
            let text = clean_text(&snippet.text_display);

            if text.chars().count() > MAX_COMMENT_CHARS {
                continue;
            }

            records.push(Comment::new(text, snippet.updated_at));
            if records.len() == max_records {
                break 'pages;
            }
        }
    }

    records
}

/// Strips markup and decodes the entities YouTube emits in `textDisplay`.
/// Whitespace runs (including the newlines `<br>` stood in for) collapse
/// to single spaces.
fn clean_text(html: &str) -> String {
    let text = HTML_TAG_RE.replace_all(html, " ");

    // `&amp;` must decode last or escaped entities double-decode
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    text.split_whitespace().join(" ")
}

impl TryFrom<VideoItem> for VideoInfo {
    type Error = Error;

    /// Projects a `videos.list` item into the flat metadata record.
    ///
    /// Counts arrive as decimal strings; a missing `likeCount` (hidden
    /// likes) defaults to 0 rather than failing the fetch.
    fn try_from(
        VideoItem {
            id,
            snippet,
            statistics,
        }: VideoItem,
    ) -> Result<Self, Self::Error> {
        let views = statistics
            .view_count
            .parse::<u64>()
            .map_err(|_| Error::MalformedResponse("'statistics.viewCount' is not an integer"))?;
        let likes = statistics
            .like_count
            .map(|count| count.parse::<u64>())
            .transpose()
            .map_err(|_| Error::MalformedResponse("'statistics.likeCount' is not an integer"))?
            .unwrap_or(0);

        Ok(VideoInfo {
            thumbnail_url: snippet.thumbnails.high.url,
            title: snippet.title,
            channel_name: snippet.channel_title,
            video_url: format!("youtu.be/{id}"),
            views,
            likes,
            published_date: snippet.published_at,
        })
    }
}
