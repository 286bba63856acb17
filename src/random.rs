//! Randomness injected into every engine call.
//!
//! Nothing in the crate holds a process-wide generator. Callers pass a
//! [`RandomSource`] into each operation that consumes randomness, which lets
//! tests substitute a seeded or scripted source.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::rps::Move;

/// Supplies card shuffles, die faces and random moves.
pub trait RandomSource {
    /// Shuffles the cards uniformly in place.
    fn shuffle(&mut self, cards: &mut [Card]);

    /// Returns a die face in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Returns one of the three moves uniformly.
    fn pick_move(&mut self) -> Move;
}

/// [`RandomSource`] backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    /// Creates a reproducible source from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a fresh source seeded from the thread RNG.
    ///
    /// Each call yields an independent stream, so separate sessions never
    /// observe each other's draws.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl RandomSource for ChaChaSource {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }

    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }

    fn pick_move(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}
