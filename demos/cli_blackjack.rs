//! CLI blackjack demo.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, Game, GameOptions, GameState, Outcome, Presenter, ShuffledDeck, SourceError, StartError,
    TableView,
};
use tracing_subscriber::EnvFilter;

/// Prints every table update to stdout.
struct Terminal;

impl Presenter for Terminal {
    fn render(&mut self, view: &TableView<'_>) {
        let label = if view.state == GameState::DealerTurn {
            "Dealer draws"
        } else {
            "Table"
        };
        println!("\n{label}");
        println!(
            "  Dealer: {} (value {})",
            format_cards(view.dealer),
            view.dealer_score
        );
        println!(
            "  You:    {} (value {})",
            format_cards(view.player),
            view.player_score
        );
    }

    fn show_outcome(&mut self, outcome: Outcome) {
        println!("\n{outcome}");
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        if !enabled {
            println!("(round over)");
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), ShuffledDeck::new(1, seed));
    let mut terminal = Terminal;

    loop {
        match game.start_round(&mut terminal).await {
            Ok(()) => {}
            Err(StartError::SourceUnavailable(SourceError::Exhausted)) => {
                println!("Deck is empty, shuffling a new one.");
                if let Err(err) = game.reshuffle() {
                    println!("Reshuffle error: {err}");
                    return;
                }
                continue;
            }
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        }

        while game.state() == GameState::PlayerTurn {
            let result = match prompt_line("Hit or stand? (h/s): ").as_str() {
                "h" | "hit" => game.hit(&mut terminal).await.map(|_| ()),
                "s" | "stand" => game.stand(&mut terminal).await.map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
                // The deck ran dry mid-round; abandon it.
                game.clear_round();
                break;
            }
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
