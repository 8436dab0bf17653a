#[derive(Debug, thiserror::Error)]
pub enum MatchingError {
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Similarity search failed: {0}")]
    Search(String),
}
