use crate::card::Card;
use crate::error::ActionError;

use super::{BlackjackState, BlackjackStatus};

impl BlackjackState {
    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.status.is_terminal() {
            return Err(ActionError::GameOver(self.status));
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the drawn card, or `None` when the deck is exhausted, in which
    /// case nothing changes. A bust ends the hand as [`BlackjackStatus::Lost`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::GameOver`] if the hand is already resolved.
    pub fn hit(&mut self) -> Result<Option<Card>, ActionError> {
        self.ensure_playing()?;

        let Some(card) = self.draw() else {
            log::warn!("hit with an exhausted deck, ignoring");
            return Ok(None);
        };

        self.player_hand.add_card(card);
        if self.player_hand.is_bust() {
            self.status = BlackjackStatus::Lost;
        }

        Ok(Some(card))
    }

    /// Player action: Stand (dealer plays out and the hand is resolved).
    ///
    /// The dealer draws while below `dealer_stands_on`. Returns the cards the
    /// dealer drew.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::GameOver`] if the hand is already resolved.
    pub fn stand(&mut self, dealer_stands_on: u8) -> Result<Vec<Card>, ActionError> {
        self.ensure_playing()?;

        let drawn = self.dealer_play(dealer_stands_on);
        self.status = self.resolve();

        Ok(drawn)
    }
}
