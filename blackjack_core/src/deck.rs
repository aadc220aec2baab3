//! Module for deck construction, shuffling and dealing.

use crate::card::{Card, Rank, Suit};
use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Struct for an ordered single deck of cards. The deck is exclusively owned by the
/// round that built it and is mutated only through `shuffle` and `deal`. It never
/// replenishes itself; exhaustion is reported as `EmptyDeck`.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Associated function to build the standard 52-card deck, one of each
    /// rank and suit combination in rank-within-suit order. The order is only
    /// the pre-shuffle canonical state.
    pub fn standard() -> Deck {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Associated function to build a deck from an explicit card sequence.
    /// Cards are dealt front first, so the first element is the first card dealt.
    pub fn from_cards(cards: Vec<Card>) -> Deck {
        Deck { cards }
    }

    /// Method that permutes the remaining cards uniformly at random in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut thread_rng());
    }

    /// Method that removes and returns the card at the front of the deck.
    /// Returns an `EmptyDeck` error once the deck is exhausted.
    pub fn deal(&mut self) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    /// Getter method for the number of cards remaining.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Getter method for the remaining cards in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
