//! Shared test helpers.
//!
//! Every test binary compiles this module, so it only holds items each of
//! them reaches: the struct, its trait impls and its public queues.

use std::collections::VecDeque;

use parlor::{Card, Move, RandomSource};

/// A [`RandomSource`] that replays queued values and never reorders cards.
///
/// Build one from an array of die faces or of moves.
#[derive(Debug, Default)]
pub struct Scripted {
    pub dice: VecDeque<u8>,
    pub moves: VecDeque<Move>,
}

impl<const N: usize> From<[u8; N]> for Scripted {
    fn from(faces: [u8; N]) -> Self {
        Self {
            dice: faces.into(),
            moves: VecDeque::new(),
        }
    }
}

impl<const N: usize> From<[Move; N]> for Scripted {
    fn from(moves: [Move; N]) -> Self {
        Self {
            dice: VecDeque::new(),
            moves: moves.into(),
        }
    }
}

impl RandomSource for Scripted {
    fn shuffle(&mut self, _cards: &mut [Card]) {}

    fn roll_die(&mut self) -> u8 {
        self.dice.pop_front().expect("no scripted die left")
    }

    fn pick_move(&mut self) -> Move {
        self.moves.pop_front().expect("no scripted move left")
    }
}
