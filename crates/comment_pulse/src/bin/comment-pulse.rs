use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comment_pulse::{
    tracing::init_tracing_subscriber, viz, yt::client::YouTubeClient, HuggingFaceClient,
    SentimentPipelineBuilder,
};
use comment_store::{Comment, JsonFileCache, VideoInfo};

#[derive(Parser)]
#[command(name = "comment-pulse", about = "YouTube comment sentiment pipeline")]
struct Cli {
    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY")]
    youtube_api_key: String,

    /// Hugging Face inference API token
    #[arg(long, env = "HF_API_TOKEN")]
    hf_api_token: String,

    /// Directory holding cached results
    #[arg(long, env = "COMMENT_PULSE_CACHE_DIR", default_value = ".cache")]
    cache_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch, score and cache the comments of a video
    Analyze {
        /// Video id, e.g. ZbwV_W9HjnY
        video_id: String,
    },
    /// Analyze and export chart-ready series as JSON
    Charts {
        /// Video id, e.g. ZbwV_W9HjnY
        video_id: String,
        /// Output directory for the chart documents
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
}

#[derive(Clone)]
struct Config {
    youtube_api_key: String,
    hf_api_token: String,
    cache_dir: PathBuf,
}

async fn run_pipeline(config: &Config, video_id: &str) -> anyhow::Result<(VideoInfo, Vec<Comment>)> {
    let cache = JsonFileCache::init(&config.cache_dir).await?;

    //XXX: serves both the commentThreads and videos endpoints; hence cloned
    // into both pipeline slots
    let youtube = YouTubeClient::new(&config.youtube_api_key);
    let scorer = HuggingFaceClient::new(&config.hf_api_token);

    let pipeline = SentimentPipelineBuilder::new()
        .cache(cache)
        .comment_source(youtube.clone())
        .video_info_source(youtube)
        .scorer(scorer)
        .build();

    let video = pipeline.get_video_info(video_id).await?;
    let comments = pipeline.get_comments_data(video_id).await?;

    Ok((video, comments))
}

fn log_summary(video: &VideoInfo, comments: &[Comment]) {
    tracing::info!(
        title = %video.title,
        channel = %video.channel_name,
        views = video.views,
        likes = video.likes,
        comments = comments.len(),
        "Analyzed video"
    );

    for entry in viz::sentiment_counts(comments) {
        tracing::info!(sentiment = %entry.sentiment, count = entry.count, "Sentiment tally");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = Config {
        youtube_api_key: cli.youtube_api_key,
        hf_api_token: cli.hf_api_token,
        cache_dir: cli.cache_dir,
    };

    match cli.command {
        Command::Analyze { video_id } => {
            tracing::info!(video_id = %video_id, "Running pipeline...");
            let (video, comments) = run_pipeline(&config, &video_id).await?;
            log_summary(&video, &comments);
        }
        Command::Charts { video_id, out_dir } => {
            tracing::info!(video_id = %video_id, out_dir = ?out_dir, "Running pipeline with chart export...");
            let (video, comments) = run_pipeline(&config, &video_id).await?;
            log_summary(&video, &comments);
            viz::write_all_charts(&out_dir, &video_id, &comments)?;
        }
    }

    Ok(())
}
