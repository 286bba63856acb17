//! Error types for game operations.

use thiserror::Error;

use crate::blackjack::BlackjackStatus;

/// Errors that can occur during blackjack actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The hand has already been resolved.
    #[error("game is already over ({0})")]
    GameOver(BlackjackStatus),
}

/// Error returned when parsing an unknown move name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move: {0}")]
pub struct ParseMoveError(pub String);

/// Errors that can occur when placing a dice bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The wager exceeds the balance.
    #[error("insufficient balance: bet {bet}, balance {balance}")]
    InsufficientBalance {
        /// The rejected wager.
        bet: u64,
        /// The balance at the time of the bet.
        balance: u64,
    },
    /// Bet type is not one of `over`, `under`, `seven`, `exact`.
    #[error("unknown bet type")]
    UnknownBetType,
    /// An `exact` bet was placed without a target.
    #[error("exact bet requires a target")]
    MissingTarget,
    /// The target is outside `2..=12`.
    #[error("target {0} is outside 2..=12")]
    InvalidTarget(u8),
}

/// Errors raised by a [`SessionStore`](crate::store::SessionStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists under the identifier.
    #[error("session {0} not found")]
    NotFound(String),
    /// A record already exists under the identifier.
    #[error("session {0} already exists")]
    AlreadyExists(String),
    /// The record could not be encoded or decoded.
    #[error("session record codec failure: {0}")]
    Codec(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(err.to_string())
    }
}

/// Errors reported to the caller of a [`Casino`](crate::casino::Casino) action.
///
/// A failed action never leaves a partial update behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CasinoError {
    /// Creation named an unsupported game.
    #[error("invalid game type: {0}")]
    InvalidGameType(String),
    /// The session does not exist or belongs to another game.
    #[error("game session not found: {0}")]
    SessionNotFound(String),
    /// The dice wager exceeds the balance.
    #[error("insufficient balance: bet {bet}, balance {balance}")]
    InsufficientBalance {
        /// The rejected wager.
        bet: u64,
        /// The balance at the time of the bet.
        balance: u64,
    },
    /// The action is not allowed in the current game state.
    #[error("illegal action: {0}")]
    IllegalAction(#[from] ActionError),
    /// The move is not `rock`, `paper` or `scissors`.
    #[error("invalid move: {0}")]
    InvalidMove(String),
    /// The bet request is malformed.
    #[error("invalid bet: {0}")]
    InvalidBet(BetError),
    /// The session store failed.
    #[error(transparent)]
    Storage(StoreError),
}

impl From<BetError> for CasinoError {
    fn from(err: BetError) -> Self {
        match err {
            BetError::InsufficientBalance { bet, balance } => {
                Self::InsufficientBalance { bet, balance }
            }
            other => Self::InvalidBet(other),
        }
    }
}

impl From<StoreError> for CasinoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::SessionNotFound(id),
            other => Self::Storage(other),
        }
    }
}
