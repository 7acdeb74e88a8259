mod error;
mod pipeline;
mod sentiment;
pub mod normalize;
pub mod tracing;
pub mod types;
pub mod viz;
pub mod worker;
pub mod yt;

pub use error::Error;
pub use pipeline::{builder::SentimentPipelineBuilder, SentimentPipeline};
pub use sentiment::huggingface;
pub use sentiment::{
    huggingface::{HuggingFaceClient, HuggingFaceError},
    scorer::SentimentScorer,
};
