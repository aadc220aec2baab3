//! Core engine for a two-party game of simplified blackjack: deck construction and
//! dealing, soft-ace hand valuation, the dealer's draw-to-17 policy and round
//! outcome resolution. Presentation layers drive a round through three operations,
//! the initial deal, `hit` and `stand`, and receive rendered hand strings plus a
//! terminal outcome signal back.

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod player;
pub mod round;

pub mod prelude {
    pub use crate::card::{Card, Rank, Suit};
    pub use crate::deck::Deck;
    pub use crate::error::GameError;
    pub use crate::hand::Hand;
    pub use crate::player::{Dealer, Player, DEALER_STAND_TOTAL};
    pub use crate::round::{
        Annotation, DealView, HitView, Outcome, Phase, Round, RoundView, StandView,
    };
}

pub use prelude::*;
