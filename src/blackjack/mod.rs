//! Blackjack session state machine.
//!
//! One player against the dealer from a single shuffled deck. The state moves
//! `Playing -> {Playing, Lost}` on [`hit`](BlackjackState::hit) and
//! `Playing -> {Won, Lost, Push}` on [`stand`](BlackjackState::stand).
//! Terminal states reject every further action.

use serde::{Deserialize, Serialize};

use crate::card::{Card, Deck};
use crate::hand::{DealerHand, Hand};
use crate::random::RandomSource;

mod actions;
mod dealer;
pub mod state;

pub use state::{BlackjackStatus, BlackjackView};

/// Persisted state of one blackjack hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackjackState {
    /// The player's hand.
    pub player_hand: Hand,
    /// The dealer's hand.
    pub dealer_hand: DealerHand,
    /// Undealt cards.
    pub deck: Deck,
    /// Current status.
    pub status: BlackjackStatus,
}

impl BlackjackState {
    /// Shuffles a fresh deck and deals the opening hands.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::{BlackjackState, BlackjackStatus, ChaChaSource, DECK_SIZE};
    ///
    /// let state = BlackjackState::start(&mut ChaChaSource::seeded(7));
    /// assert_eq!(state.status, BlackjackStatus::Playing);
    /// assert_eq!(state.deck.len(), DECK_SIZE - 4);
    /// ```
    pub fn start<R: RandomSource>(rng: &mut R) -> Self {
        Self::deal(Deck::shuffled(rng))
    }

    /// Deals the opening hands from the given deck.
    ///
    /// The player takes the first two cards off the top, the dealer the next
    /// two. If the deck runs short the hands are dealt what is available.
    #[must_use]
    pub fn deal(mut deck: Deck) -> Self {
        let mut player_hand = Hand::new();
        let mut dealer_hand = DealerHand::new();

        for card in [deck.draw(), deck.draw()].into_iter().flatten() {
            player_hand.add_card(card);
        }
        for card in [deck.draw(), deck.draw()].into_iter().flatten() {
            dealer_hand.add_card(card);
        }

        Self {
            player_hand,
            dealer_hand,
            deck,
            status: BlackjackStatus::Playing,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    /// Returns whether `hit` is currently accepted.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.status == BlackjackStatus::Playing && !self.player_hand.is_bust()
    }

    /// Returns whether `stand` is currently accepted.
    #[must_use]
    pub fn can_stand(&self) -> bool {
        self.status == BlackjackStatus::Playing
    }

    /// Builds the player-facing view, masking the hole card until the dealer
    /// has played.
    #[must_use]
    pub fn view(&self) -> BlackjackView {
        BlackjackView {
            player_hand: self.player_hand.cards().to_vec(),
            dealer_hand: self.dealer_hand.visible_cards(),
            player_score: self.player_hand.value(),
            dealer_score: self.dealer_hand.visible_value(),
            game_status: self.status,
            can_hit: self.can_hit(),
            can_stand: self.can_stand(),
        }
    }
}
