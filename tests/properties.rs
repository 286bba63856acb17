//! Property tests for the game rules.

use proptest::prelude::*;

use parlor::{
    BlackjackState, Card, ChaChaSource, DECK_SIZE, Move, RpsState, Suit, Winner, hand_value,
};

fn any_card() -> impl Strategy<Value = Card> {
    (0..4_usize, 1..=13_u8).prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], rank))
}

fn any_move() -> impl Strategy<Value = Move> {
    (0..3_usize).prop_map(|i| Move::ALL[i])
}

proptest! {
    #[test]
    fn hand_value_is_best_ace_assignment(cards in prop::collection::vec(any_card(), 0..12)) {
        let aces = cards.iter().filter(|c| c.is_ace()).count();
        let hard: usize = cards
            .iter()
            .map(|c| if c.is_ace() { 1 } else { usize::from(c.value()) })
            .sum();
        let best = if aces > 0 && hard + 10 <= 21 { hard + 10 } else { hard };

        prop_assert_eq!(usize::from(hand_value(&cards)), best);
    }

    #[test]
    fn dealer_finishes_on_seventeen_or_more(seed in any::<u64>(), hits in 0..3_usize) {
        let mut state = BlackjackState::start(&mut ChaChaSource::seeded(seed));
        for _ in 0..hits {
            if state.can_hit() {
                state.hit().unwrap();
            }
        }
        let dealt = state.player_hand.len() + state.dealer_hand.len();
        prop_assert_eq!(state.deck.len(), DECK_SIZE - dealt);

        if !state.can_stand() {
            return Ok(());
        }

        let opening = state.dealer_hand.value();
        let drawn = state.stand(17).unwrap();
        if opening >= 17 {
            prop_assert!(drawn.is_empty());
        } else {
            prop_assert!(!drawn.is_empty());
        }
        prop_assert!(state.dealer_hand.value() >= 17);
        prop_assert!(state.status.is_terminal());
    }

    #[test]
    fn rps_scores_match_results(
        seed in any::<u64>(),
        moves in prop::collection::vec(any_move(), 0..40),
    ) {
        let mut rng = ChaChaSource::seeded(seed);
        let mut state = RpsState::new();
        for m in &moves {
            state.play(*m, &mut rng);
        }

        prop_assert_eq!(state.player_moves.len(), moves.len());
        prop_assert_eq!(state.computer_moves.len(), moves.len());
        prop_assert_eq!(state.results.len(), moves.len());

        let wins = state.results.iter().filter(|r| **r == Winner::Player).count();
        let losses = state.results.iter().filter(|r| **r == Winner::Computer).count();
        let ties = state.results.iter().filter(|r| **r == Winner::Tie).count();
        prop_assert_eq!(state.player_score as usize, wins);
        prop_assert_eq!(state.computer_score as usize, losses);
        prop_assert_eq!(wins + losses + ties, state.rounds());
    }
}
