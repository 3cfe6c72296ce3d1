use thiserror::Error;

/// Recoverable request-level failures. The hosting layer maps each
/// kind to a transport status; none of them is fatal to the process
/// or to any session other than the one named by the request.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum GameError {
    #[error("session not found")]
    SessionNotFound,
    #[error("invalid choice: {0}")]
    InvalidMove(String),
    #[error("invalid difficulty: {0}")]
    InvalidDifficulty(String),
}
