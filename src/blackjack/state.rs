//! Blackjack status and response view types.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Blackjack hand status.
///
/// Starts at [`Playing`](Self::Playing) and moves at most once to a
/// terminal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlackjackStatus {
    /// Waiting for the player to hit or stand.
    #[default]
    Playing,
    /// Player won.
    Won,
    /// Player lost (bust, or dealer finished higher).
    Lost,
    /// Tie with the dealer.
    Push,
}

impl BlackjackStatus {
    /// Returns whether no further actions are accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for BlackjackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Push => "push",
        })
    }
}

/// What the player sees of a blackjack hand.
///
/// Until the dealer plays, `dealer_hand` holds the up card followed by
/// `None` for the hole card and `dealer_score` counts the up card only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackjackView {
    /// The player's cards.
    pub player_hand: Vec<Card>,
    /// The dealer's cards, face-down cards masked.
    pub dealer_hand: Vec<Option<Card>>,
    /// The player's hand value.
    pub player_score: u8,
    /// The dealer's visible hand value.
    pub dealer_score: u8,
    /// Current status.
    pub game_status: BlackjackStatus,
    /// Whether `hit` is accepted.
    pub can_hit: bool,
    /// Whether `stand` is accepted.
    pub can_stand: bool,
}
