//! Error types for card classification and scoring.

use thiserror::Error;

/// Errors that can occur when reading a card name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The text is not one of "A", "2" through "10", "J", "Q" or "K".
    #[error("invalid card name")]
    InvalidName,
}
