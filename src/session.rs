//! Session records.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blackjack::BlackjackState;
use crate::dice::DiceState;
use crate::error::CasinoError;
use crate::rps::RpsState;

/// Supported games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    /// Blackjack against the dealer.
    Blackjack,
    /// Rock-paper-scissors.
    Rps,
    /// Two-dice betting.
    Dice,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blackjack => "blackjack",
            Self::Rps => "rps",
            Self::Dice => "dice",
        })
    }
}

impl FromStr for GameType {
    type Err = CasinoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blackjack" => Ok(Self::Blackjack),
            "rps" => Ok(Self::Rps),
            "dice" => Ok(Self::Dice),
            other => Err(CasinoError::InvalidGameType(other.to_owned())),
        }
    }
}

/// Game-specific state owned by a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game_type", content = "state", rename_all = "lowercase")]
pub enum Game {
    /// A blackjack hand.
    Blackjack(BlackjackState),
    /// A rock-paper-scissors match.
    Rps(RpsState),
    /// A dice bankroll.
    Dice(DiceState),
}

impl Game {
    /// Returns which game this is.
    #[must_use]
    pub const fn game_type(&self) -> GameType {
        match self {
            Self::Blackjack(_) => GameType::Blackjack,
            Self::Rps(_) => GameType::Rps,
            Self::Dice(_) => GameType::Dice,
        }
    }
}

/// A session: one game's state under an opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: String,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session was last saved.
    pub updated_at: DateTime<Utc>,
    /// The game state.
    pub game: Game,
}

impl Session {
    /// Wraps a game under a freshly generated identifier.
    #[must_use]
    pub fn new(game: Game) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            game,
        }
    }

    /// Returns which game the session holds.
    #[must_use]
    pub const fn game_type(&self) -> GameType {
        self.game.game_type()
    }
}
