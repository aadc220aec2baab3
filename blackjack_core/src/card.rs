//! Module for the immutable playing card type and its point-value rule.

use crate::error::GameError;
use std::fmt::Display;
use std::str::FromStr;

/// Enum representing the thirteen ranks of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in the canonical rank-within-suit build order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Method that returns the point value of the rank. Numeric ranks count as themselves,
    /// face cards count as 10 and an ace counts as 11. Soft ace handling is not done here,
    /// the reduction from 11 to 1 is applied when a whole hand is totaled.
    pub fn value(&self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Rank {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "Jack" => Rank::Jack,
            "Queen" => Rank::Queen,
            "King" => Rank::King,
            "Ace" => Rank::Ace,
            _ => return Err(GameError::InvalidCardSpec(format!("unknown rank '{}'", s))),
        };
        Ok(rank)
    }
}

/// Enum representing the four suits of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Suit {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "Hearts" => Suit::Hearts,
            "Diamonds" => Suit::Diamonds,
            "Clubs" => Suit::Clubs,
            "Spades" => Suit::Spades,
            _ => return Err(GameError::InvalidCardSpec(format!("unknown suit '{}'", s))),
        };
        Ok(suit)
    }
}

/// Struct for a single playing card. Immutable once constructed, a card is owned by the
/// deck until dealt and by exactly one hand afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Associated function to create a new `Card` from a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Associated function to parse a card from `"<rank> of <suit>"` text.
    /// Returns an `InvalidCardSpec` error for anything outside the enumerated
    /// ranks and suits rather than coercing.
    pub fn parse(text: &str) -> Result<Card, GameError> {
        let (rank, suit) = text.split_once(" of ").ok_or_else(|| {
            GameError::InvalidCardSpec(format!("expected '<rank> of <suit>', got '{}'", text))
        })?;
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }

    /// Method that returns the point value of the card per its rank.
    pub fn value(&self) -> u32 {
        self.rank.value()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn numeric_ranks_count_as_themselves() {
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).value(), 2);
        assert_eq!(Card::new(Rank::Nine, Suit::Clubs).value(), 9);
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).value(), 10);
    }

    #[test]
    fn face_cards_count_ten_and_ace_counts_eleven() {
        assert_eq!(Card::new(Rank::Jack, Suit::Diamonds).value(), 10);
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).value(), 10);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).value(), 10);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).value(), 11);
    }

    #[test]
    fn card_displays_rank_of_suit() {
        let card = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(card.to_string(), "Queen of Hearts");
        let card = Card::new(Rank::Ten, Suit::Clubs);
        assert_eq!(card.to_string(), "10 of Clubs");
    }

    #[test]
    fn parse_round_trips_display() {
        let card = Card::parse("Ace of Spades").unwrap();
        assert_eq!(card, Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(card.to_string(), "Ace of Spades");
    }

    #[test]
    fn parse_rejects_out_of_enum_specs() {
        assert!(matches!(
            Card::parse("1 of Hearts"),
            Err(GameError::InvalidCardSpec(_))
        ));
        assert!(matches!(
            Card::parse("Ace of Stars"),
            Err(GameError::InvalidCardSpec(_))
        ));
        assert!(matches!(
            Card::parse("Ace Spades"),
            Err(GameError::InvalidCardSpec(_))
        ));
    }
}
