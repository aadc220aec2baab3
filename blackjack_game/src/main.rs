//! Interactive terminal front-end for the blackjack engine. Drives a round through
//! the three core operations (deal, hit, stand) and prints the rendered hand
//! strings the engine hands back.

use blackjack_core::prelude::*;
use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(about = "Play blackjack against the dealer in the terminal")]
struct Args {
    /// Number of rounds to play before the session summary is printed
    #[arg(long, default_value_t = 1)]
    rounds: u32,
}

fn main() {
    let args = Args::parse();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let (mut wins, mut ties, mut losses) = (0, 0, 0);
    let mut rounds_played = 0u32;

    'session: for round_num in 1..=args.rounds {
        println!("{:-^80}", format!("round {}", round_num));

        let (mut round, deal) = match Round::start() {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        };

        println!("Player Hand: {} Total: {}", deal.player, deal.player_total);
        println!("Dealer Hand: {}", deal.dealer);
        if let Some(annotation) = deal.annotation {
            println!("{annotation}");
        }

        while !round.is_over() {
            print!("(h)it or (s)tand? ");
            if io::stdout().flush().is_err() {
                break 'session;
            }
            let line = match lines.next() {
                Some(Ok(l)) => l,
                _ => break 'session,
            };

            match line.trim() {
                "h" | "hit" => match round.hit() {
                    Ok(view) => {
                        println!("Player Hand: {} Total: {}", view.player, view.player_total);
                        if let Some(annotation) = view.annotation {
                            println!("{annotation}");
                        }
                    }
                    Err(e) => {
                        eprintln!("error: {e}");
                        continue 'session;
                    }
                },
                "s" | "stand" => match round.stand() {
                    Ok(view) => {
                        println!("Dealer Hand: {} Total: {}", view.dealer, view.dealer_total);
                    }
                    Err(e) => {
                        eprintln!("error: {e}");
                        continue 'session;
                    }
                },
                other => {
                    println!("unrecognized option '{other}'");
                }
            }
        }

        if let Some(outcome) = round.outcome() {
            println!("{outcome}");
            rounds_played += 1;
            match outcome {
                Outcome::PlayerWin => wins += 1,
                Outcome::Tie => ties += 1,
                Outcome::DealerWin => losses += 1,
            }
        }
    }

    let width = "rounds played:".len() + 20;
    let numeric_display_width = 80 - width;
    println!("{}", "-".repeat(80));
    println!("{:-^80}", "session");
    println!("{:<width$}{:>numeric_display_width$}", "rounds played:", rounds_played);
    println!("{:<width$}{:>numeric_display_width$}", "wins:", wins);
    println!("{:<width$}{:>numeric_display_width$}", "ties:", ties);
    println!("{:<width$}{:>numeric_display_width$}", "losses:", losses);
    println!("{}", "-".repeat(80));
}
