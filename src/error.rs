//! Error types for card parsing.

use thiserror::Error;

/// Errors that can occur when constructing a card from textual tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Rank token is not one of `9TJQKA`.
    #[error("unrecognized rank token `{0}`")]
    InvalidRank(char),
    /// Suit token is not one of `CDHS`.
    #[error("unrecognized suit token `{0}`")]
    InvalidSuit(char),
    /// Token pair is not exactly two characters long.
    #[error("expected card to be two characters; got {0}")]
    InvalidLength(usize),
}
