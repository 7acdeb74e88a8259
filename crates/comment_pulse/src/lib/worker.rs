//! Background pipeline execution for a presentation layer.
//!
//! One worker per user action: the pipeline runs on a tokio task while a
//! (possibly non-async) UI thread polls for the result without blocking.
//! There are no cancellation or timeout semantics; a slow scorer call
//! simply blocks that worker.

use std::sync::mpsc::{self, Receiver, TryRecvError};

use comment_store::{Comment, CommentCache, VideoInfo};
use tokio::task::JoinHandle;

use crate::{
    sentiment::scorer::SentimentScorer,
    yt::{CommentSource, VideoInfoSource},
    SentimentPipeline,
};

/// Everything the presentation layer needs to render one video's view.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub video: VideoInfo,
    pub comments: Vec<Comment>,
}

pub struct AnalysisWorker {
    rx: Receiver<anyhow::Result<AnalysisOutcome>>,
    handle: JoinHandle<()>,
}

impl AnalysisWorker {
    /// Spawns the pipeline for `video_id` on the current tokio runtime.
    ///
    /// The worker owns the pipeline for the duration of the run; the
    /// result comes back through [`AnalysisWorker::poll`].
    pub fn spawn<D, C, M, S>(
        pipeline: SentimentPipeline<D, C, M, S>,
        video_id: impl Into<String>,
    ) -> Self
    where
        D: CommentCache + Send + Sync + 'static,
        C: CommentSource + Send + Sync + 'static,
        M: VideoInfoSource + Send + Sync + 'static,
        S: SentimentScorer + Send + Sync + 'static,
    {
        let video_id = video_id.into();
        let (tx, rx) = mpsc::channel();

        let handle = tokio::spawn(async move {
            let outcome = run(&pipeline, &video_id).await;
            // receiver may already be gone; nobody left to report to
            let _ = tx.send(outcome);
        });

        AnalysisWorker { rx, handle }
    }

    /// Non-blocking check for the result: `None` while the run is still
    /// in flight, `Some` exactly once when it completes.
    pub fn poll(&self) -> Option<anyhow::Result<AnalysisOutcome>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

async fn run<D, C, M, S>(
    pipeline: &SentimentPipeline<D, C, M, S>,
    video_id: &str,
) -> anyhow::Result<AnalysisOutcome>
where
    D: CommentCache + Send + Sync + 'static,
    C: CommentSource + Send + Sync + 'static,
    M: VideoInfoSource + Send + Sync + 'static,
    S: SentimentScorer + Send + Sync + 'static,
{
    // metadata and comments are independent fetches; overlap them
    let (video, comments) = futures::future::try_join(
        pipeline.get_video_info(video_id),
        pipeline.get_comments_data(video_id),
    )
    .await?;

    Ok(AnalysisOutcome { video, comments })
}
