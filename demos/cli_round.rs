//! CLI twenty-one example.
//!
//! Every seat is played from the keyboard. Set `RUST_LOG=debug` to follow the
//! engine's log output.

use std::env;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Decision, Game, GameOptions, Outcome, Player, PlayerOutcome, ScoringRule};

fn main() {
    env_logger::init();

    let mut names: Vec<String> = env::args().skip(1).collect();
    if names.is_empty() {
        names = vec!["Player 1".to_string(), "Player 2".to_string()];
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let scoring = match env::var("TWENTYONE_SCORING").as_deref() {
        Ok("ordinal") => ScoringRule::Ordinal,
        Ok("ordinal-ace-high") => ScoringRule::OrdinalAceHigh,
        _ => ScoringRule::Standard,
    };
    let options = GameOptions::default().with_scoring(scoring);

    let mut game = match Game::new(names, options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    println!("Twenty-one CLI example (type 'q' to quit)");
    let order: Vec<&str> = game.players().iter().map(Player::name).collect();
    println!("Turn order: {}", order.join(", "));

    loop {
        let mut quit = false;
        let mut decider = |player: &Player| {
            if quit {
                return Decision::Hold;
            }
            print_hand(player);
            loop {
                match prompt_line(&format!("{}: [d]raw or [h]old? ", player.name())).as_str() {
                    "d" | "draw" => return Decision::Draw,
                    "h" | "hold" => return Decision::Hold,
                    "q" | "quit" => {
                        quit = true;
                        return Decision::Hold;
                    }
                    _ => println!("Unknown decision."),
                }
            }
        };

        match game.start(&mut decider) {
            Ok(result) => {
                println!("\nRound {} complete.", result.round);
                for standing in &result.standings {
                    let label = match standing.outcome {
                        PlayerOutcome::Win => "wins",
                        PlayerOutcome::Push => "pushes",
                        PlayerOutcome::Lose => "loses",
                        PlayerOutcome::Bust => "is bust",
                    };
                    println!("  {} {} with {}", standing.name, label, standing.score);
                }
                if result.outcome == Outcome::NoWinner {
                    println!("Nobody stayed under 22.");
                }
            }
            Err(err) => {
                game.abandon_round();
                println!("Round error: {err}. The round was abandoned.");
            }
        }

        if quit {
            println!("Goodbye.");
            break;
        }

        match prompt_line("\nPlay another round? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => break,
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => return "q".to_string(),
        Ok(_) => {}
        Err(_) => return String::new(),
    }
    input.trim().to_lowercase()
}

fn print_hand(player: &Player) {
    println!("\n{} (score {})", player.name(), player.score());
    for line in player.show_hand().lines() {
        println!("  {line}");
    }
}
