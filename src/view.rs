//! Response types returned by [`Casino`](crate::casino::Casino) actions.

use serde::{Deserialize, Serialize};

use crate::blackjack::BlackjackView;
use crate::dice::BetType;
use crate::rps::Move;

/// An action result addressed to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response<T> {
    /// The session acted upon.
    pub session_id: String,
    /// The game-specific payload.
    #[serde(flatten)]
    pub body: T,
}

/// What a newly created session shows the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game_type", rename_all = "lowercase")]
pub enum Opening {
    /// The opening deal, hole card masked.
    Blackjack(BlackjackView),
    /// An empty scoreboard.
    Rps(RpsTable),
    /// The bankroll and betting options.
    Dice(DiceTable),
}

/// Opening state of a rock-paper-scissors match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsTable {
    /// Player score.
    pub player_score: u32,
    /// Computer score.
    pub computer_score: u32,
    /// Legal moves.
    pub moves: [Move; 3],
}

/// Opening state of a dice bankroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceTable {
    /// Starting balance.
    pub balance: u64,
    /// Advertised minimum wager.
    pub min_bet: u64,
    /// Advertised maximum wager.
    pub max_bet: u64,
    /// Offered bet types.
    pub bet_types: [BetType; 4],
}

/// Current state of a session, whatever its game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game_type", rename_all = "lowercase")]
pub enum Status {
    /// The hand as the player sees it.
    Blackjack(BlackjackView),
    /// The match scoreboard.
    Rps(RpsSummary),
    /// The bankroll counters.
    Dice(DiceSummary),
}

/// Scoreboard of a rock-paper-scissors match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsSummary {
    /// Player score.
    pub player_score: u32,
    /// Computer score.
    pub computer_score: u32,
    /// Rounds played.
    pub total_rounds: usize,
}

/// Counters of a dice bankroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSummary {
    /// Current balance.
    pub balance: u64,
    /// The most recent roll, if any.
    pub last_roll: Option<[u8; 2]>,
    /// Bets resolved.
    pub total_games: u32,
    /// Bets won.
    pub games_won: u32,
}
