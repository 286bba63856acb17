//! Rock-paper-scissors against a pattern-reading opponent.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMoveError;
use crate::random::RandomSource;

/// Number of identical recent moves treated as a streak.
const STREAK_LEN: usize = 3;

/// A rock-paper-scissors move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Rock.
    Rock,
    /// Paper.
    Paper,
    /// Scissors.
    Scissors,
}

impl Move {
    /// All moves in enumeration order. Frequency ties resolve to the earliest.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The move this one defeats.
    #[must_use]
    pub const fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// The move that defeats this one.
    #[must_use]
    pub const fn counter(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Rock => 0,
            Self::Paper => 1,
            Self::Scissors => 2,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        })
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            other => Err(ParseMoveError(other.to_owned())),
        }
    }
}

/// Who took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The player won.
    Player,
    /// The computer won.
    Computer,
    /// Both played the same move.
    Tie,
}

/// Decides a single round.
#[must_use]
pub fn winner(player: Move, computer: Move) -> Winner {
    if player == computer {
        Winner::Tie
    } else if player.beats() == computer {
        Winner::Player
    } else {
        Winner::Computer
    }
}

/// Picks the computer's move from the player's history.
///
/// - Fewer than three moves: a random move.
/// - The last three moves identical: the counter to that move.
/// - Otherwise: the counter to the most frequent move over the whole
///   history, ties going to the earliest in [`Move::ALL`].
pub fn predict_and_counter<R: RandomSource>(history: &[Move], rng: &mut R) -> Move {
    if history.len() < STREAK_LEN {
        return rng.pick_move();
    }

    let recent = &history[history.len() - STREAK_LEN..];
    if recent.iter().all(|m| *m == recent[0]) {
        return recent[0].counter();
    }

    let mut counts = [0_usize; 3];
    for m in history {
        counts[m.index()] += 1;
    }

    let mut most_frequent = Move::ALL[0];
    for m in Move::ALL {
        if counts[m.index()] > counts[most_frequent.index()] {
            most_frequent = m;
        }
    }
    most_frequent.counter()
}

/// Persisted state of an open-ended rock-paper-scissors match.
///
/// The three sequences always have equal length and the scores equal the
/// number of rounds each side won.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsState {
    /// Every move the player made, oldest first.
    pub player_moves: Vec<Move>,
    /// The computer's reply to each player move.
    pub computer_moves: Vec<Move>,
    /// The outcome of each round.
    pub results: Vec<Winner>,
    /// Rounds won by the player.
    pub player_score: u32,
    /// Rounds won by the computer.
    pub computer_score: u32,
}

/// Outcome of a single [`RpsState::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsRound {
    /// The player's move.
    pub player_move: Move,
    /// The computer's reply.
    pub computer_move: Move,
    /// Who took the round.
    pub result: Winner,
    /// Player score after the round.
    pub player_score: u32,
    /// Computer score after the round.
    pub computer_score: u32,
    /// Rounds played so far.
    pub total_rounds: usize,
}

impl RpsState {
    /// Creates an empty match.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_moves: Vec::new(),
            computer_moves: Vec::new(),
            results: Vec::new(),
            player_score: 0,
            computer_score: 0,
        }
    }

    /// Plays one round. The computer only sees moves made before this one.
    pub fn play<R: RandomSource>(&mut self, player_move: Move, rng: &mut R) -> RpsRound {
        let computer_move = predict_and_counter(&self.player_moves, rng);
        let result = winner(player_move, computer_move);

        self.player_moves.push(player_move);
        self.computer_moves.push(computer_move);
        self.results.push(result);

        match result {
            Winner::Player => self.player_score += 1,
            Winner::Computer => self.computer_score += 1,
            Winner::Tie => {}
        }

        RpsRound {
            player_move,
            computer_move,
            result,
            player_score: self.player_score,
            computer_score: self.computer_score,
            total_rounds: self.rounds(),
        }
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.results.len()
    }
}
