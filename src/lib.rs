//! Session-addressed casino mini-games.
//!
//! The crate provides three independent games, each a typed state machine
//! advanced one player action at a time:
//!
//! - [`BlackjackState`]: one hand against a dealer who draws to 17.
//! - [`RpsState`]: rock-paper-scissors against an opponent that reads the
//!   player's move history.
//! - [`DiceState`]: a bankroll wagered on the total of two dice.
//!
//! [`Casino`] ties them to a [`SessionStore`], loading, advancing and saving
//! one session per call. Every operation that consumes randomness takes an
//! explicit [`RandomSource`].
//!
//! # Example
//!
//! ```
//! use parlor::{Casino, ChaChaSource, Status};
//!
//! let casino = Casino::in_memory();
//! let mut rng = ChaChaSource::seeded(42);
//!
//! let dice = casino.create("dice", &mut rng).unwrap();
//! let round = casino
//!     .bet(&dice.session_id, 10, "exact", Some(7), &mut rng)
//!     .unwrap();
//! assert_eq!(round.body.total_games, 1);
//!
//! let status = casino.status(&dice.session_id).unwrap();
//! assert!(matches!(status.body, Status::Dice(_)));
//! ```

pub mod blackjack;
pub mod card;
pub mod casino;
pub mod dice;
pub mod error;
pub mod hand;
pub mod options;
pub mod random;
pub mod rps;
pub mod session;
pub mod store;
mod sync;
pub mod view;

// Re-export main types
pub use blackjack::{BlackjackState, BlackjackStatus, BlackjackView};
pub use card::{Card, DECK_SIZE, Deck, Suit};
pub use casino::Casino;
pub use dice::{Bet, BetType, DiceRound, DiceState};
pub use error::{ActionError, BetError, CasinoError, ParseMoveError, StoreError};
pub use hand::{DealerHand, Hand, hand_value};
pub use options::CasinoOptions;
pub use random::{ChaChaSource, RandomSource};
pub use rps::{Move, RpsRound, RpsState, Winner};
pub use session::{Game, GameType, Session};
pub use store::{MemoryStore, SessionStore};
pub use view::{Opening, Response, Status};
