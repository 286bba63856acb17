//! Two-dice betting game.
//!
//! Bet types:
//! - `over`: total above 7, pays 2x
//! - `under`: total below 7, pays 2x
//! - `seven`: total of exactly 7, pays 5x
//! - `exact`: total equal to a chosen target in 2..=12, pays per
//!   [`exact_multiplier`]
//!
//! Payouts include the returned stake; a losing bet pays 0.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BetError;
use crate::random::RandomSource;

/// The pivot total for `over`, `under` and `seven` bets.
const SEVEN: u8 = 7;

/// Multiplier used when an exact target has no table entry.
pub const DEFAULT_EXACT_MULTIPLIER: u64 = 5;

/// Exact-total multipliers for targets 2 through 12.
const EXACT_MULTIPLIERS: [u64; 11] = [30, 15, 10, 8, 6, 5, 6, 8, 10, 15, 30];

const fn is_symmetric(table: &[u64; 11]) -> bool {
    let mut i = 0;
    while i < table.len() / 2 {
        if table[i] != table[table.len() - 1 - i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_symmetric(&EXACT_MULTIPLIERS));
const _: () = assert!(EXACT_MULTIPLIERS[(SEVEN - 2) as usize] == DEFAULT_EXACT_MULTIPLIER);

/// Returns the payout multiplier for an exact-total bet on `target`.
///
/// Targets outside 2..=12 fall back to [`DEFAULT_EXACT_MULTIPLIER`].
#[must_use]
pub const fn exact_multiplier(target: u8) -> u64 {
    match target {
        2..=12 => EXACT_MULTIPLIERS[(target - 2) as usize],
        _ => DEFAULT_EXACT_MULTIPLIER,
    }
}

/// Kind of dice bet, without its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetType {
    /// Total above seven.
    Over,
    /// Total below seven.
    Under,
    /// Total of exactly seven.
    Seven,
    /// Total equal to a target.
    Exact,
}

impl BetType {
    /// All bet types, in the order offered to the player.
    pub const ALL: [Self; 4] = [Self::Over, Self::Under, Self::Seven, Self::Exact];

    /// Parses a bet type name.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::UnknownBetType`] for any other name.
    pub fn parse(name: &str) -> Result<Self, BetError> {
        match name {
            "over" => Ok(Self::Over),
            "under" => Ok(Self::Under),
            "seven" => Ok(Self::Seven),
            "exact" => Ok(Self::Exact),
            _ => Err(BetError::UnknownBetType),
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Over => "over",
            Self::Under => "under",
            Self::Seven => "seven",
            Self::Exact => "exact",
        })
    }
}

/// A dice bet with its target, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "bet_type", content = "target")]
pub enum Bet {
    /// Total above seven.
    Over,
    /// Total below seven.
    Under,
    /// Total of exactly seven.
    Seven,
    /// Total equal to the target.
    Exact(u8),
}

impl Bet {
    /// Builds a bet from a type and an optional target.
    ///
    /// The target is required for `exact` bets, must lie in 2..=12, and is
    /// ignored for the other types.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::MissingTarget`] or [`BetError::InvalidTarget`] for
    /// a bad `exact` target.
    pub const fn new(bet_type: BetType, target: Option<u8>) -> Result<Self, BetError> {
        match bet_type {
            BetType::Over => Ok(Self::Over),
            BetType::Under => Ok(Self::Under),
            BetType::Seven => Ok(Self::Seven),
            BetType::Exact => match target {
                None => Err(BetError::MissingTarget),
                Some(t @ 2..=12) => Ok(Self::Exact(t)),
                Some(t) => Err(BetError::InvalidTarget(t)),
            },
        }
    }

    /// Returns the bet's type.
    #[must_use]
    pub const fn bet_type(self) -> BetType {
        match self {
            Self::Over => BetType::Over,
            Self::Under => BetType::Under,
            Self::Seven => BetType::Seven,
            Self::Exact(_) => BetType::Exact,
        }
    }

    /// Returns the target of an `exact` bet.
    #[must_use]
    pub const fn target(self) -> Option<u8> {
        match self {
            Self::Exact(t) => Some(t),
            _ => None,
        }
    }
}

/// Rolls `n` independent dice.
pub fn roll<R: RandomSource>(rng: &mut R, n: usize) -> Vec<u8> {
    (0..n).map(|_| rng.roll_die()).collect()
}

/// Rolls the two dice used by a bet.
pub fn roll_pair<R: RandomSource>(rng: &mut R) -> [u8; 2] {
    [rng.roll_die(), rng.roll_die()]
}

/// Returns what `bet` pays on a roll totalling `total`, or 0 if it lost.
///
/// # Example
///
/// ```
/// use parlor::dice::{Bet, payout};
///
/// assert_eq!(payout(10, 8, Bet::Over), 20);
/// assert_eq!(payout(10, 7, Bet::Exact(7)), 50);
/// assert_eq!(payout(10, 9, Bet::Under), 0);
/// ```
#[must_use]
pub const fn payout(amount: u64, total: u8, bet: Bet) -> u64 {
    match bet {
        Bet::Over if total > SEVEN => amount.saturating_mul(2),
        Bet::Under if total < SEVEN => amount.saturating_mul(2),
        Bet::Seven if total == SEVEN => amount.saturating_mul(5),
        Bet::Exact(target) if total == target => amount.saturating_mul(exact_multiplier(target)),
        _ => 0,
    }
}

/// Persisted dice bankroll and counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceState {
    /// Credits available to wager.
    pub balance: u64,
    /// The most recent wager, 0 before the first bet.
    pub current_bet: u64,
    /// The most recent roll, if any.
    pub last_roll: Option<[u8; 2]>,
    /// Bets resolved.
    pub total_games: u32,
    /// Bets that paid out.
    pub games_won: u32,
}

/// Outcome of a single [`DiceState::place_bet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRound {
    /// The two dice.
    pub dice_roll: [u8; 2],
    /// Their sum.
    pub dice_total: u8,
    /// The wager.
    pub bet_amount: u64,
    /// The bet placed.
    pub bet: Bet,
    /// Amount paid back, 0 on a loss.
    pub payout: u64,
    /// Balance after settlement.
    pub new_balance: u64,
    /// Whether the bet paid out.
    pub won: bool,
    /// Bets resolved so far.
    pub total_games: u32,
    /// Bets won so far.
    pub games_won: u32,
}

impl DiceState {
    /// Creates a bankroll with the given balance.
    #[must_use]
    pub const fn new(balance: u64) -> Self {
        Self {
            balance,
            current_bet: 0,
            last_roll: None,
            total_games: 0,
            games_won: 0,
        }
    }

    /// Places a bet, rolls two dice and settles.
    ///
    /// Validation happens before any die is rolled, so a rejected bet leaves
    /// the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::ZeroBet`] for a zero wager and
    /// [`BetError::InsufficientBalance`] when it exceeds the balance.
    pub fn place_bet<R: RandomSource>(
        &mut self,
        amount: u64,
        bet: Bet,
        rng: &mut R,
    ) -> Result<DiceRound, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientBalance {
                bet: amount,
                balance: self.balance,
            });
        }

        let dice_roll = roll_pair(rng);
        let dice_total = dice_roll[0] + dice_roll[1];
        let won = payout(amount, dice_total, bet);

        self.balance = (self.balance - amount).saturating_add(won);
        self.current_bet = amount;
        self.last_roll = Some(dice_roll);
        self.total_games += 1;
        if won > 0 {
            self.games_won += 1;
        }

        Ok(DiceRound {
            dice_roll,
            dice_total,
            bet_amount: amount,
            bet,
            payout: won,
            new_balance: self.balance,
            won: won > 0,
            total_games: self.total_games,
            games_won: self.games_won,
        })
    }
}
