//! Rock-paper-scissors tests.

mod common;

use common::Scripted;
use parlor::rps::{predict_and_counter, winner};
use parlor::{Move, RpsState, Winner};

use Move::{Paper, Rock, Scissors};

#[test]
fn beats_relation_is_cyclic() {
    for m in Move::ALL {
        assert_ne!(m.beats(), m);
        assert_eq!(m.counter().beats(), m);
        assert_eq!(m.beats().counter(), m);
    }
    assert_eq!(Rock.beats(), Scissors);
    assert_eq!(Scissors.beats(), Paper);
    assert_eq!(Paper.beats(), Rock);
}

#[test]
fn winner_table() {
    assert_eq!(winner(Rock, Rock), Winner::Tie);
    assert_eq!(winner(Rock, Scissors), Winner::Player);
    assert_eq!(winner(Rock, Paper), Winner::Computer);
    assert_eq!(winner(Paper, Rock), Winner::Player);
    assert_eq!(winner(Scissors, Paper), Winner::Player);
    assert_eq!(winner(Scissors, Rock), Winner::Computer);
}

#[test]
fn moves_parse_and_display() {
    assert_eq!("rock".parse::<Move>().unwrap(), Rock);
    assert_eq!("scissors".parse::<Move>().unwrap(), Scissors);
    assert!("lizard".parse::<Move>().is_err());
    assert_eq!(Paper.to_string(), "paper");
}

#[test]
fn short_history_picks_at_random() {
    let mut rng = Scripted::from([Scissors, Paper]);
    assert_eq!(predict_and_counter(&[], &mut rng), Scissors);
    assert_eq!(predict_and_counter(&[Rock, Rock], &mut rng), Paper);
    assert!(rng.moves.is_empty());
}

#[test]
fn streak_of_three_is_countered() {
    let mut rng = Scripted::default();
    assert_eq!(predict_and_counter(&[Rock, Rock, Rock], &mut rng), Paper);
    assert_eq!(
        predict_and_counter(&[Rock, Paper, Scissors, Scissors, Scissors], &mut rng),
        Rock
    );
}

#[test]
fn most_frequent_move_over_whole_history_is_countered() {
    let mut rng = Scripted::default();
    assert_eq!(
        predict_and_counter(&[Rock, Paper, Rock, Scissors], &mut rng),
        Paper
    );
    assert_eq!(
        predict_and_counter(&[Scissors, Scissors, Rock, Paper], &mut rng),
        Rock
    );
}

#[test]
fn frequency_ties_go_to_enumeration_order() {
    let mut rng = Scripted::default();
    assert_eq!(predict_and_counter(&[Scissors, Paper, Rock], &mut rng), Paper);
    assert_eq!(
        predict_and_counter(&[Paper, Scissors, Rock, Scissors, Paper], &mut rng),
        Scissors
    );
}

#[test]
fn play_records_rounds_and_scores() {
    let mut state = RpsState::new();
    let mut rng = Scripted::from([Scissors, Rock, Paper]);

    let first = state.play(Rock, &mut rng);
    assert_eq!(first.computer_move, Scissors);
    assert_eq!(first.result, Winner::Player);

    let second = state.play(Rock, &mut rng);
    assert_eq!(second.result, Winner::Tie);

    let third = state.play(Rock, &mut rng);
    assert_eq!(third.result, Winner::Computer);
    assert_eq!(third.total_rounds, 3);

    // Three rocks in a row: the opponent no longer guesses.
    let fourth = state.play(Scissors, &mut rng);
    assert_eq!(fourth.computer_move, Paper);
    assert_eq!(fourth.result, Winner::Player);

    assert_eq!(state.player_moves, vec![Rock, Rock, Rock, Scissors]);
    assert_eq!(state.computer_moves, vec![Scissors, Rock, Paper, Paper]);
    assert_eq!(
        state.results,
        vec![Winner::Player, Winner::Tie, Winner::Computer, Winner::Player]
    );
    assert_eq!(state.player_score, 2);
    assert_eq!(state.computer_score, 1);
    assert_eq!(state.rounds(), 4);
}
