//! CLI parlor example.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

use std::io::{self, Write};

use parlor::{BlackjackView, Card, Casino, ChaChaSource, Opening, Suit};

fn main() {
    env_logger::init();
    println!("Parlor CLI example (type 'q' to quit)");

    let casino = Casino::in_memory();

    loop {
        match prompt_line("\nGame (blackjack/rps/dice): ").as_str() {
            "q" | "quit" => break,
            game => {
                let mut rng = ChaChaSource::from_entropy();
                match casino.create(game, &mut rng) {
                    Ok(created) => match created.body {
                        Opening::Blackjack(view) => {
                            play_blackjack(&casino, &created.session_id, &view);
                        }
                        Opening::Rps(_) => play_rps(&casino, &created.session_id),
                        Opening::Dice(table) => {
                            println!(
                                "Balance {}, bets {}-{}",
                                table.balance, table.min_bet, table.max_bet
                            );
                            play_dice(&casino, &created.session_id);
                        }
                    },
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    println!("Goodbye.");
}

fn play_blackjack(casino: &Casino, session_id: &str, opening: &BlackjackView) {
    print_table(opening);
    let mut view = opening.clone();

    while view.can_stand {
        let result = match prompt_line("Action (h = hit, s = stand): ").as_str() {
            "h" | "hit" => casino.hit(session_id),
            "s" | "stand" => casino.stand(session_id),
            "q" | "quit" => return,
            _ => continue,
        };
        match result {
            Ok(response) => {
                view = response.body;
                print_table(&view);
            }
            Err(err) => {
                println!("{err}");
                return;
            }
        }
    }

    println!("Result: {}", view.game_status);
}

fn play_rps(casino: &Casino, session_id: &str) {
    loop {
        let input = prompt_line("Move (rock/paper/scissors): ");
        if input == "q" || input == "quit" {
            return;
        }
        let mut rng = ChaChaSource::from_entropy();
        match casino.play(session_id, &input, &mut rng) {
            Ok(response) => {
                let round = response.body;
                println!(
                    "You {} / computer {} -> {:?} ({}:{})",
                    round.player_move,
                    round.computer_move,
                    round.result,
                    round.player_score,
                    round.computer_score
                );
            }
            Err(err) => println!("{err}"),
        }
    }
}

fn play_dice(casino: &Casino, session_id: &str) {
    loop {
        let Some(amount) = prompt_u64("Bet amount: ") else {
            return;
        };
        let bet_type = prompt_line("Bet type (over/under/seven/exact): ");
        let target = if bet_type == "exact" {
            prompt_u64("Target (2-12): ").and_then(|t| u8::try_from(t).ok())
        } else {
            None
        };

        let mut rng = ChaChaSource::from_entropy();
        match casino.bet(session_id, amount, &bet_type, target, &mut rng) {
            Ok(response) => {
                let round = response.body;
                println!(
                    "Rolled {:?} = {}, payout {}, balance {}",
                    round.dice_roll, round.dice_total, round.payout, round.new_balance
                );
            }
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_u64(prompt: &str) -> Option<u64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(view: &BlackjackView) {
    let dealer = view
        .dealer_hand
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    let player = view
        .player_hand
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");

    println!("Dealer: {dealer} ({})", view.dealer_score);
    println!("You:    {player} ({})", view.player_score);
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
