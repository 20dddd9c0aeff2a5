use anyhow::{Context, Result};
use log::info;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    game::parse_input, Game, GameState, Input, Player, Solver, DEFAULT_DEPTH, WIDTH,
};

mod display;
use display::display;

fn search_depth() -> Result<usize> {
    match std::env::var("CONNECT4_DEPTH") {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .with_context(|| format!("invalid CONNECT4_DEPTH '{}'", value)),
        Err(_) => Ok(DEFAULT_DEPTH),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let depth = search_depth()?;
    info!("searching {} plies ahead", depth);

    let mut game = Game::new();
    let mut solver = Solver::new();
    let stdin = stdin();

    // game loop
    loop {
        display(game.board())?;

        match game.state() {
            GameState::Playing => match game.to_move() {
                Player::Human => {
                    print!(
                        "Player {}, choose a column (1-{}) or 0 to exit: ",
                        Player::Human.symbol(),
                        WIDTH
                    );
                    stdout().flush()?;

                    let mut buffer = String::new();
                    if stdin.read_line(&mut buffer)? == 0 {
                        println!("Exiting game.");
                        return Ok(());
                    }

                    let column = match parse_input(&buffer) {
                        Ok(Input::Exit) => {
                            println!("Exiting game.");
                            return Ok(());
                        }
                        Ok(Input::Column(column)) => column,
                        Err(err) => {
                            info!("rejected input: {}", err);
                            println!("Invalid input. Try again.");
                            continue;
                        }
                    };

                    if let Err(err) = game.play_checked(column) {
                        info!("rejected move: {}", err);
                        println!("Invalid input. Try again.");
                        // try the move again
                        continue;
                    }
                }
                Player::Ai => {
                    solver.node_count = 0;
                    println!("AI is thinking...");
                    stdout().flush()?;

                    if let Some((column, score)) = game.play_ai(&mut solver, depth) {
                        println!("Player AI chose column {}", column);
                        let score = if game.state() == GameState::Playing { score } else { 0 };
                        match score.cmp(&0) {
                            Ordering::Greater => println!(
                                "Player {} can force a win within {} plies.",
                                Player::Ai.symbol(),
                                depth + 1
                            ),
                            Ordering::Less => println!(
                                "Player {} can force a win within {} plies.",
                                Player::Human.symbol(),
                                depth + 1
                            ),
                            Ordering::Equal => (),
                        }
                    }
                    info!("searched {} nodes", solver.node_count);
                }
            },

            // end states
            GameState::HumanWin => {
                println!("Player {} wins!", Player::Human.symbol());
                break;
            }
            GameState::AiWin => {
                println!("Player {} wins!", Player::Ai.symbol());
                break;
            }
            GameState::Draw => {
                println!("It's a draw!");
                break;
            }
        }
    }
    Ok(())
}
