use thiserror::Error;

use super::basic::Suit;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoldingError {
    #[error("Suit must be one of SHDC (got {suit:?})")]
    InvalidSuit { suit: char },
    #[error(
        "Cards must consist of AKQJT98765432 or x in proper order \
         (got {cards:?}, rejected at position {position})"
    )]
    InvalidCards { cards: String, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Invalid {suit} holding: {source}")]
    InvalidHolding {
        suit: Suit,
        #[source]
        source: HoldingError,
    },
}

impl HandError {
    /// The suit whose holding was rejected.
    pub fn suit(&self) -> Suit {
        match self {
            HandError::InvalidHolding { suit, .. } => *suit,
        }
    }
}
