//! Turn-taking between the human and the computer

use log::{debug, info};

use crate::board::{Player, StandardBoard};
use crate::error::{InputError, MoveError};
use crate::solver::Solver;
use crate::WIDTH;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Playing,
    HumanWin,
    AiWin,
    Draw,
}

/// A line of input from the human player
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// The `0` sentinel, ending the program
    Exit,
    /// A one-indexed column number
    Column(usize),
}

/// Parses a column number between 1 and `WIDTH`, or `0` to exit
pub fn parse_input(input: &str) -> Result<Input, InputError> {
    let trimmed = input.trim();
    let column = trimmed
        .parse::<usize>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    match column {
        0 => Ok(Input::Exit),
        1..=WIDTH => Ok(Input::Column(column)),
        _ => Err(InputError::OutOfRange { column, max: WIDTH }),
    }
}

/// A game on the standard board, the human moving first
#[derive(Clone, Debug)]
pub struct Game {
    board: StandardBoard,
    to_move: Player,
    state: GameState,
    // one-indexed column digits in play order
    history: String,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: StandardBoard::new(),
            to_move: Player::Human,
            state: GameState::Playing,
            history: String::new(),
        }
    }

    /// Replays a string of one-indexed column digits, starting with the human
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, MoveError> {
        let mut game = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    game.play_checked(column as usize)?;
                }
                None => return Err(MoveError::InvalidCharacter(column_char)),
            }
        }
        Ok(game)
    }

    pub fn board(&self) -> &StandardBoard {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    /// Plays a one-indexed column for the player whose turn it is
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState, MoveError> {
        if self.state != GameState::Playing {
            return Err(MoveError::GameOver);
        }
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(MoveError::OutOfRange {
                column: column_one_indexed,
            });
        }
        let column = column_one_indexed - 1;
        let row = self.board.drop(column, self.to_move).map_err(|err| match err {
            MoveError::ColumnFull { .. } => MoveError::ColumnFull {
                column: column_one_indexed,
            },
            other => other,
        })?;
        debug!(
            "{:?} played column {} (row {})",
            self.to_move, column_one_indexed, row
        );
        self.history.push_str(&column_one_indexed.to_string());

        self.state = if self.board.has_won(self.to_move) {
            match self.to_move {
                Player::Human => GameState::HumanWin,
                Player::Ai => GameState::AiWin,
            }
        } else if self.board.is_draw() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.to_move = self.to_move.other();

        Ok(self.state)
    }

    /// Lets the computer choose and play its move
    ///
    /// Returns the one-indexed column played with the score the search gave
    /// it, or `None` when the game is over or it is not the computer's turn.
    pub fn play_ai(&mut self, solver: &mut Solver, depth: usize) -> Option<(usize, i32)> {
        if self.state != GameState::Playing || self.to_move != Player::Ai {
            return None;
        }
        let (column, score) = solver.best_move_with_score(&mut self.board, depth)?;
        info!("computer chose column {} with score {}", column + 1, score);

        // the chosen column is always playable
        self.play_checked(column + 1).ok()?;
        Some((column + 1, score))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
