//! Module for the ordered hand of cards and its soft-ace total rule.

use crate::card::{Card, Rank};
use std::fmt::Display;

/// Struct for an ordered sequence of cards held by one participant. Cards are kept in
/// deal order, which the dealer's first-card-visible rule depends on. A hand only ever
/// grows; it is never truncated during a round.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Associated function to create a new empty `Hand`.
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    /// Method that appends a newly dealt card. Duplicates are not checked here,
    /// uniqueness is a deck-level invariant.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Getter method for the cards in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Method that computes the hand total. Every ace contributes 11 first, then
    /// while the sum exceeds 21 and an unreduced ace remains, 10 is subtracted per
    /// ace. The total is recomputed from the full card sequence on every call.
    pub fn total(&self) -> u32 {
        let mut total = 0;
        let mut aces = 0;
        for card in &self.cards {
            total += card.value();
            if card.rank == Rank::Ace {
                aces += 1;
            }
        }
        while total > 21 && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        total
    }

    /// Method that reports whether the hand is a natural: exactly two cards totaling 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }
}

impl Display for Hand {
    /// Comma-separated card names in deal order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .cards
            .iter()
            .map(Card::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}", text)
    }
}
