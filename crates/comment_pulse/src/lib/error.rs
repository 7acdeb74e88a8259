#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unexpected response shape: {0}")]
    MalformedResponse(&'static str),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
