//! Dice payout and bankroll tests.

mod common;

use common::Scripted;
use parlor::dice::{DEFAULT_EXACT_MULTIPLIER, exact_multiplier, payout, roll};
use parlor::{Bet, BetError, BetType, ChaChaSource, DiceState};

#[test]
fn payout_examples() {
    assert_eq!(payout(10, 8, Bet::Over), 20);
    assert_eq!(payout(10, 7, Bet::Over), 0);
    assert_eq!(payout(10, 6, Bet::Under), 20);
    assert_eq!(payout(10, 9, Bet::Under), 0);
    assert_eq!(payout(10, 7, Bet::Seven), 50);
    assert_eq!(payout(10, 8, Bet::Seven), 0);
    assert_eq!(payout(10, 7, Bet::Exact(7)), 50);
    assert_eq!(payout(10, 2, Bet::Exact(2)), 300);
    assert_eq!(payout(10, 11, Bet::Exact(11)), 150);
    assert_eq!(payout(10, 6, Bet::Exact(8)), 0);
}

#[test]
fn exact_table_is_symmetric_around_seven() {
    let expected = [
        (2, 30),
        (3, 15),
        (4, 10),
        (5, 8),
        (6, 6),
        (7, 5),
        (8, 6),
        (9, 8),
        (10, 10),
        (11, 15),
        (12, 30),
    ];
    for (target, multiplier) in expected {
        assert_eq!(exact_multiplier(target), multiplier, "target {target}");
        assert_eq!(exact_multiplier(target), exact_multiplier(14 - target));
    }
    assert_eq!(exact_multiplier(0), DEFAULT_EXACT_MULTIPLIER);
    assert_eq!(exact_multiplier(13), DEFAULT_EXACT_MULTIPLIER);
}

#[test]
fn bet_construction_validates_target() {
    assert_eq!(Bet::new(BetType::Over, None), Ok(Bet::Over));
    assert_eq!(Bet::new(BetType::Seven, Some(4)), Ok(Bet::Seven));
    assert_eq!(Bet::new(BetType::Exact, Some(12)), Ok(Bet::Exact(12)));
    assert_eq!(Bet::new(BetType::Exact, None), Err(BetError::MissingTarget));
    assert_eq!(
        Bet::new(BetType::Exact, Some(1)),
        Err(BetError::InvalidTarget(1))
    );
    assert_eq!(
        Bet::new(BetType::Exact, Some(13)),
        Err(BetError::InvalidTarget(13))
    );
    assert_eq!(BetType::parse("under"), Ok(BetType::Under));
    assert_eq!(BetType::parse("odd"), Err(BetError::UnknownBetType));
}

#[test]
fn rolls_stay_on_the_die() {
    let mut rng = ChaChaSource::seeded(21);
    let faces = roll(&mut rng, 600);
    assert_eq!(faces.len(), 600);
    assert!(faces.iter().all(|f| (1..=6).contains(f)));
    for face in 1..=6 {
        assert!(faces.contains(&face), "face {face} never rolled");
    }
}

#[test]
fn winning_bet_settles_balance() {
    let mut state = DiceState::new(1000);
    let mut rng = Scripted::from([3_u8, 5]);

    let round = state.place_bet(10, Bet::Over, &mut rng).unwrap();
    assert_eq!(round.dice_roll, [3, 5]);
    assert_eq!(round.dice_total, 8);
    assert_eq!(round.payout, 20);
    assert!(round.won);
    assert_eq!(round.new_balance, 1010);

    assert_eq!(state.balance, 1010);
    assert_eq!(state.current_bet, 10);
    assert_eq!(state.last_roll, Some([3, 5]));
    assert_eq!(state.total_games, 1);
    assert_eq!(state.games_won, 1);
}

#[test]
fn losing_bet_costs_the_wager() {
    let mut state = DiceState::new(100);
    let mut rng = Scripted::from([4_u8, 5]);

    let round = state.place_bet(40, Bet::Under, &mut rng).unwrap();
    assert_eq!(round.payout, 0);
    assert!(!round.won);
    assert_eq!(state.balance, 60);
    assert_eq!(state.total_games, 1);
    assert_eq!(state.games_won, 0);
}

#[test]
fn whole_balance_can_be_wagered() {
    let mut state = DiceState::new(50);
    let mut rng = Scripted::from([1_u8, 1]);

    state.place_bet(50, Bet::Exact(3), &mut rng).unwrap();
    assert_eq!(state.balance, 0);
}

#[test]
fn rejected_bets_roll_nothing() {
    let mut state = DiceState::new(100);
    let mut rng = Scripted::from([6_u8, 6]);
    let before = state.clone();

    assert_eq!(
        state.place_bet(101, Bet::Seven, &mut rng).unwrap_err(),
        BetError::InsufficientBalance {
            bet: 101,
            balance: 100
        }
    );
    assert_eq!(
        state.place_bet(0, Bet::Seven, &mut rng).unwrap_err(),
        BetError::ZeroBet
    );
    assert_eq!(state, before);
    assert_eq!(rng.dice.len(), 2);
}
