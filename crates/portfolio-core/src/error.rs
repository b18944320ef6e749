#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("content validation error: {0}")]
    Invalid(String),
}
