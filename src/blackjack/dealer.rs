use core::cmp::Ordering;

use crate::card::Card;

use super::{BlackjackState, BlackjackStatus};

impl BlackjackState {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching
    /// `stands_on` or higher. An exhausted deck stops the dealer early.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self, stands_on: u8) -> Vec<Card> {
        self.dealer_hand.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer_hand.value() < stands_on {
            let Some(card) = self.draw() else {
                log::warn!(
                    "deck exhausted with dealer on {}",
                    self.dealer_hand.value()
                );
                break;
            };
            self.dealer_hand.add_card(card);
            drawn_cards.push(card);
        }

        drawn_cards
    }

    /// Compares the finished hands.
    pub(super) fn resolve(&self) -> BlackjackStatus {
        if self.dealer_hand.is_bust() {
            return BlackjackStatus::Won;
        }

        match self.player_hand.value().cmp(&self.dealer_hand.value()) {
            Ordering::Greater => BlackjackStatus::Won,
            Ordering::Less => BlackjackStatus::Lost,
            Ordering::Equal => BlackjackStatus::Push,
        }
    }
}
