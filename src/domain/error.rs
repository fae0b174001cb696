// Domain errors
use thiserror::Error;

/// Errors raised by the trend normalizer and the control reducer.
///
/// Both kinds indicate a caller mistake, never a transient failure, so
/// nothing in the service retries on them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeckError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("relay not found: {0}")]
    KeyNotFound(String),
}
