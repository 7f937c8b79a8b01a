//! Interactive console Othello: two players sharing a terminal.
//!
//! All rules live in the `othello` crate; this loop only prints state,
//! collects coordinates, and reports the final score.

use anyhow::Result;
use othello::{GameState, Location, Player};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = GameState::new();

    while !game.is_game_over() {
        println!("\n{}", game);

        let moves = game.valid_moves();
        if moves.is_empty() {
            println!("No valid moves for {}. Skipping turn.", game.current_player());
            debug!(player = %game.current_player(), "forced pass");
            game.pass();
            continue;
        }

        loop {
            print!("Enter row and column: ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                println!("\nInput closed. Abandoning game.");
                return Ok(());
            }

            let mv: Location = match line.trim().parse() {
                Ok(mv) => mv,
                Err(_) => {
                    println!("Invalid input! Enter row and column numbers.");
                    continue;
                }
            };

            if !moves.contains(mv) {
                println!("Invalid move! Try again. Valid moves: {}", moves);
                continue;
            }

            debug!(player = %game.current_player(), %mv, "applying move");
            game.make_move(mv);
            break;
        }
    }

    println!("\n{}", game.board());
    let (black, white) = game.count_pieces();
    println!("Game Over! Final Score - Black: {}, White: {}", black, white);
    match game.winner() {
        Some(Player::Black) => println!("Black Wins!"),
        Some(Player::White) => println!("White Wins!"),
        None => println!("It's a Tie!"),
    }

    Ok(())
}
