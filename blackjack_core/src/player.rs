//! Module for the two hand-holding participants. The player is a plain hand; the
//! dealer adds the draw-to-17 policy and the hidden hole card rendering rule.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;

/// Total at or above which the dealer stops drawing. There is no separate bust
/// stop: a bust total is already at or above this threshold.
pub const DEALER_STAND_TOTAL: u32 = 17;

/// Struct for the player's side of the round.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Hand,
}

impl Player {
    pub fn new() -> Player {
        Player { hand: Hand::new() }
    }

    /// Method to receive a dealt card.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn total(&self) -> u32 {
        self.hand.total()
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Method that renders the full hand in deal order.
    pub fn display_text(&self) -> String {
        self.hand.to_string()
    }
}

/// Struct for the dealer's side of the round. Holds the same kind of hand as the
/// player plus the fixed auto-play policy and the partial-disclosure rendering rule.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    pub fn new() -> Dealer {
        Dealer { hand: Hand::new() }
    }

    /// Method to receive a dealt card.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn total(&self) -> u32 {
        self.hand.total()
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Method that renders the dealer's hand during the player's turn: only the
    /// first-dealt card is shown, the rest is masked behind a single token.
    pub fn masked_text(&self) -> String {
        match self.hand.cards().first() {
            Some(card) => format!("{}, [Hidden]", card),
            None => String::from("[Hidden]"),
        }
    }

    /// Method that renders the full hand, used once the dealer's turn has resolved.
    pub fn revealed_text(&self) -> String {
        self.hand.to_string()
    }

    /// Method that runs the dealer's fixed policy: draw from `deck` while the total
    /// is below 17 and stop the moment it reaches 17 or more, busts included. Deck
    /// exhaustion surfaces an `EmptyDeck` error rather than stopping silently.
    pub fn play(&mut self, deck: &mut Deck) -> Result<(), GameError> {
        while self.hand.total() < DEALER_STAND_TOTAL {
            let card = deck.deal()?;
            self.hand.add_card(card);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Clubs)
    }

    #[test]
    fn dealer_draws_until_reaching_seventeen() {
        let mut dealer = Dealer::new();
        dealer.add_card(card(Rank::Two));
        dealer.add_card(card(Rank::Three));
        let mut deck = Deck::from_cards(vec![card(Rank::Four), card(Rank::Ten), card(Rank::Nine)]);

        dealer.play(&mut deck).unwrap();

        // 2 + 3 + 4 + 10 = 19, the nine is never drawn
        assert_eq!(dealer.total(), 19);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn dealer_stands_pat_on_seventeen_or_more() {
        let mut dealer = Dealer::new();
        dealer.add_card(card(Rank::Ten));
        dealer.add_card(card(Rank::Seven));
        let mut deck = Deck::from_cards(vec![card(Rank::Two)]);

        dealer.play(&mut deck).unwrap();

        assert_eq!(dealer.total(), 17);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn dealer_stops_on_a_bust_total_with_no_extra_rule() {
        let mut dealer = Dealer::new();
        dealer.add_card(card(Rank::Ten));
        dealer.add_card(card(Rank::Six));
        let mut deck = Deck::from_cards(vec![card(Rank::Nine), card(Rank::Two)]);

        dealer.play(&mut deck).unwrap();

        // 25 is >= 17, drawing halts even though the hand busted
        assert_eq!(dealer.total(), 25);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn dealer_treats_a_soft_seventeen_as_standing() {
        let mut dealer = Dealer::new();
        dealer.add_card(card(Rank::Ace));
        dealer.add_card(card(Rank::Six));
        let mut deck = Deck::from_cards(vec![card(Rank::Five)]);

        dealer.play(&mut deck).unwrap();

        assert_eq!(dealer.total(), 17);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn dealer_play_reports_deck_exhaustion() {
        let mut dealer = Dealer::new();
        dealer.add_card(card(Rank::Two));
        dealer.add_card(card(Rank::Two));
        let mut deck = Deck::from_cards(vec![card(Rank::Three)]);

        assert_eq!(dealer.play(&mut deck), Err(GameError::EmptyDeck));
    }

    #[test]
    fn masked_text_shows_only_the_first_dealt_card() {
        let mut dealer = Dealer::new();
        dealer.add_card(Card::new(Rank::King, Suit::Hearts));
        dealer.add_card(Card::new(Rank::Nine, Suit::Spades));
        assert_eq!(dealer.masked_text(), "King of Hearts, [Hidden]");
        assert_eq!(dealer.revealed_text(), "King of Hearts, 9 of Spades");
    }
}
