use std::error::Error;
use std::fmt::Display;

/// Enum for the error conditions of the game engine. None of these are retried,
/// a failure aborts the current round and is surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A card was specified with a rank or suit outside the enumerated sets.
    /// Indicates a programming error on the caller's side.
    InvalidCardSpec(String),
    /// A deal was requested from an exhausted deck.
    EmptyDeck,
    /// A hit or stand was requested after the round resolved. The round state is unchanged.
    InvalidAction(&'static str),
}

impl Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidCardSpec(s) => write!(f, "invalid card spec: {}", s),
            GameError::EmptyDeck => write!(f, "no cards remain in the deck"),
            GameError::InvalidAction(s) => write!(f, "invalid action: {}", s),
        }
    }
}

impl Error for GameError {}
