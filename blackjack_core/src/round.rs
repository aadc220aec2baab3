//! Module for the round controller. A `Round` owns the deck and both hands for the
//! lifetime of one game, reacts synchronously to each external action and enforces
//! the terminal-state rule: once resolved, no further hits or stands are accepted.

use crate::deck::Deck;
use crate::error::GameError;
use crate::player::{Dealer, Player};
use serde::Serialize;
use std::fmt::Display;

/// Enum for the two phases a round can be in. There is no separate dealer-turn
/// phase: the dealer's whole turn runs to completion inside a single `stand` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    Resolved,
}

/// Enum for the terminal result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    PlayerWin,
    DealerWin,
    Tie,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PlayerWin => write!(f, "You win!"),
            Outcome::DealerWin => write!(f, "Dealer wins."),
            Outcome::Tie => write!(f, "It's a tie."),
        }
    }
}

/// Enum for the early-exit annotations a round can resolve with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Annotation {
    /// The player's two-card deal totaled 21.
    Blackjack,
    /// A hit took the player past 21; the dealer never plays.
    Bust,
}

impl Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Annotation::Blackjack => write!(f, "Blackjack!"),
            Annotation::Bust => write!(f, "BUST!"),
        }
    }
}

/// View returned from the initial deal. The dealer rendering is masked unless the
/// deal itself resolved the round.
#[derive(Debug, Clone, Serialize)]
pub struct DealView {
    pub player: String,
    pub player_total: u32,
    pub dealer: String,
    pub is_over: bool,
    pub annotation: Option<Annotation>,
    pub outcome: Option<Outcome>,
}

/// View returned from a hit.
#[derive(Debug, Clone, Serialize)]
pub struct HitView {
    pub player: String,
    pub player_total: u32,
    pub is_over: bool,
    pub annotation: Option<Annotation>,
    pub outcome: Option<Outcome>,
}

/// View returned from a stand, with the dealer's hand fully revealed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandView {
    pub dealer: String,
    pub dealer_total: u32,
    pub is_over: bool,
    pub outcome: Outcome,
}

/// Non-mutating snapshot of the whole round. The dealer's total and full hand stay
/// hidden until the round resolves.
#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    pub player: String,
    pub player_total: u32,
    pub dealer: String,
    pub dealer_total: Option<u32>,
    pub is_over: bool,
    pub annotation: Option<Annotation>,
    pub outcome: Option<Outcome>,
}

/// Struct for one round of blackjack. Created at round start, discarded at round
/// end; exclusively owns its deck and both hands and is mutated only through
/// `hit` and `stand`.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Player,
    dealer: Dealer,
    phase: Phase,
    outcome: Option<Outcome>,
    annotation: Option<Annotation>,
}

impl Round {
    /// Associated function to start a round from a freshly shuffled standard deck.
    pub fn start() -> Result<(Round, DealView), GameError> {
        let mut deck = Deck::standard();
        deck.shuffle();
        Round::deal(deck)
    }

    /// Associated function to start a round from the given deck. Deals one card to
    /// the player, one to the dealer, one to the player, one to the dealer, in that
    /// strict alternation so the dealer's visible card is its first-dealt card. A
    /// two-card player total of 21 resolves the round immediately as a blackjack;
    /// there is no matching check for a dealer natural.
    pub fn deal(mut deck: Deck) -> Result<(Round, DealView), GameError> {
        let mut player = Player::new();
        let mut dealer = Dealer::new();
        player.add_card(deck.deal()?);
        dealer.add_card(deck.deal()?);
        player.add_card(deck.deal()?);
        dealer.add_card(deck.deal()?);

        let mut round = Round {
            deck,
            player,
            dealer,
            phase: Phase::PlayerTurn,
            outcome: None,
            annotation: None,
        };

        if round.player.total() == 21 {
            round.annotation = Some(Annotation::Blackjack);
            round.resolve();
        }

        let view = DealView {
            player: round.player.display_text(),
            player_total: round.player.total(),
            dealer: round.dealer_text(),
            is_over: round.is_over(),
            annotation: round.annotation,
            outcome: round.outcome,
        };
        Ok((round, view))
    }

    /// Method that draws one card into the player's hand. A resulting total over 21
    /// resolves the round on the spot as a bust and the dealer never plays. Returns
    /// an `InvalidAction` error once the round has resolved.
    pub fn hit(&mut self) -> Result<HitView, GameError> {
        if self.phase == Phase::Resolved {
            return Err(GameError::InvalidAction("cannot hit, the round is over"));
        }
        let card = self.deck.deal()?;
        self.player.add_card(card);
        if self.player.total() > 21 {
            self.annotation = Some(Annotation::Bust);
            self.resolve();
        }
        Ok(HitView {
            player: self.player.display_text(),
            player_total: self.player.total(),
            is_over: self.is_over(),
            annotation: self.annotation,
            outcome: self.outcome,
        })
    }

    /// Method that ends the player's turn, runs the dealer's auto-play policy to
    /// completion and resolves the round. Returns an `InvalidAction` error once the
    /// round has resolved; a deck exhausted mid-draw surfaces `EmptyDeck` and the
    /// round is left unresolved (aborted, the caller starts a new one).
    pub fn stand(&mut self) -> Result<StandView, GameError> {
        if self.phase == Phase::Resolved {
            return Err(GameError::InvalidAction("cannot stand, the round is over"));
        }
        self.dealer.play(&mut self.deck)?;
        let outcome = self.resolve();
        Ok(StandView {
            dealer: self.dealer.revealed_text(),
            dealer_total: self.dealer.total(),
            is_over: true,
            outcome,
        })
    }

    /// Method that returns a snapshot of the current round state without mutating it.
    pub fn view(&self) -> RoundView {
        RoundView {
            player: self.player.display_text(),
            player_total: self.player.total(),
            dealer: self.dealer_text(),
            dealer_total: if self.is_over() {
                Some(self.dealer.total())
            } else {
                None
            },
            is_over: self.is_over(),
            annotation: self.annotation,
            outcome: self.outcome,
        }
    }

    /// The single comparison every exit path funnels through. The player-bust case
    /// reaches this with `p > 21`, which the `p <= 21` guard routes to a dealer win.
    fn resolve(&mut self) -> Outcome {
        let p = self.player.total();
        let d = self.dealer.total();
        let outcome = if d > 21 || (p <= 21 && p > d) {
            Outcome::PlayerWin
        } else if p == d {
            Outcome::Tie
        } else {
            Outcome::DealerWin
        };
        self.outcome = Some(outcome);
        self.phase = Phase::Resolved;
        outcome
    }

    fn dealer_text(&self) -> String {
        if self.is_over() {
            self.dealer.revealed_text()
        } else {
            self.dealer.masked_text()
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Resolved
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn annotation(&self) -> Option<Annotation> {
        self.annotation
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }
}
