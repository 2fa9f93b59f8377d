use thiserror::Error;

/// Failures while loading the depth chart feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Non-fatal guards raised by the game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid player index {index} for pool of {len}")]
    InvalidIndex { index: usize, len: usize },
}
