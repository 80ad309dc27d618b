use thiserror::Error;

pub type Result<T> = std::result::Result<T, GhPulseError>;

#[derive(Error, Debug)]
pub enum GhPulseError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("GitHub API rate limit exceeded: {0}")]
    RateLimitExceeded(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("No commits found; per-day averages are undefined for an empty history")]
    EmptyHistory,
    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
