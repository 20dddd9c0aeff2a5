//! Minimax game tree search for the computer player

use log::debug;
use rayon::prelude::*;

use crate::board::{Board, Player};

/// Score of a position the computer has won
pub const WIN: i32 = 1;
/// Score of a position the human has won
pub const LOSS: i32 = -1;
/// Score of a drawn or undecided position
pub const NEUTRAL: i32 = 0;

/// Bound of the search window, strictly outside every reachable score
pub const INFINITY: i32 = WIN + 1;

/// Scores a position from the computer's point of view
///
/// Only finished games are told apart, a position cut off by the depth
/// limit scores the same as a draw.
pub fn evaluate<const ROWS: usize, const COLS: usize>(board: &Board<ROWS, COLS>) -> i32 {
    if board.has_won(Player::Ai) {
        WIN
    } else if board.has_won(Player::Human) {
        LOSS
    } else {
        NEUTRAL
    }
}

/// A depth-limited minimax searcher with alpha-beta pruning
///
/// # Notes
/// The computer is always the maximizing player. Columns are tried from left
/// to right, so when several moves share the best score the leftmost one is
/// chosen. Scores carry no notion of distance, a win in one move is worth
/// the same as a win at the search horizon.
///
/// The board is borrowed mutably for the duration of a search and tokens
/// are played and taken back in place; it is returned exactly as it was.
#[derive(Clone, Default)]
pub struct Solver {
    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    pub fn new() -> Self {
        Self { node_count: 0 }
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position after `depth` more plies, with
    /// `maximizing` set when it is the computer's turn to move.
    pub fn search<const ROWS: usize, const COLS: usize>(
        &mut self,
        board: &mut Board<ROWS, COLS>,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0 || board.is_terminal() {
            return evaluate(board);
        }

        if maximizing {
            let mut best = -INFINITY;
            for column in 0..COLS {
                if !board.is_playable(column) {
                    continue;
                }
                board.play(column, Player::Ai);
                let score = self.search(board, depth - 1, alpha, beta, false);
                board.unplay(column);

                best = best.max(score);
                alpha = alpha.max(score);
                // the human will never allow this branch
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for column in 0..COLS {
                if !board.is_playable(column) {
                    continue;
                }
                board.play(column, Player::Human);
                let score = self.search(board, depth - 1, alpha, beta, true);
                board.unplay(column);

                best = best.min(score);
                beta = beta.min(score);
                // the computer already has a better alternative
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Finds the best column for the computer and the score it leads to
    ///
    /// Every candidate column is followed by `depth` further plies of search.
    /// Returns `None` if no column is playable.
    pub fn best_move_with_score<const ROWS: usize, const COLS: usize>(
        &mut self,
        board: &mut Board<ROWS, COLS>,
        depth: usize,
    ) -> Option<(usize, i32)> {
        let mut best: Option<(usize, i32)> = None;

        for column in 0..COLS {
            if !board.is_playable(column) {
                continue;
            }
            board.play(column, Player::Ai);
            let score = self.search(board, depth, -INFINITY, INFINITY, false);
            board.unplay(column);

            debug!("column {} scored {} at depth {}", column + 1, score, depth);
            // strictly better only, keeping the leftmost of equal scores
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
        }

        debug!("searched {} nodes", self.node_count);
        best
    }

    /// Finds the best column for the computer, see [`best_move_with_score`]
    ///
    /// [`best_move_with_score`]: #method.best_move_with_score
    pub fn best_move<const ROWS: usize, const COLS: usize>(
        &mut self,
        board: &mut Board<ROWS, COLS>,
        depth: usize,
    ) -> Option<usize> {
        self.best_move_with_score(board, depth).map(|(column, _)| column)
    }

    /// Finds the same move as [`best_move_with_score`], searching each
    /// candidate column on its own copy of the board in parallel
    ///
    /// [`best_move_with_score`]: #method.best_move_with_score
    pub fn best_move_parallel<const ROWS: usize, const COLS: usize>(
        &mut self,
        board: &Board<ROWS, COLS>,
        depth: usize,
    ) -> Option<(usize, i32)> {
        let scores: Vec<(usize, i32, usize)> = (0..COLS)
            .into_par_iter()
            .filter(|&column| board.is_playable(column))
            .map(|column| {
                let mut next = *board;
                let mut solver = Solver::new();

                next.play(column, Player::Ai);
                let score = solver.search(&mut next, depth, -INFINITY, INFINITY, false);
                (column, score, solver.node_count)
            })
            .collect();

        let mut best: Option<(usize, i32)> = None;
        // collected in column order
        for (column, score, nodes) in scores {
            self.node_count += nodes;
            debug!("column {} scored {} at depth {}", column + 1, score, depth);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
        }

        debug!("searched {} nodes", self.node_count);
        best
    }
}

/// Scores a position with a fresh [`Solver`]
pub fn search<const ROWS: usize, const COLS: usize>(
    board: &mut Board<ROWS, COLS>,
    depth: usize,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> i32 {
    Solver::new().search(board, depth, alpha, beta, maximizing)
}

/// Finds the best column for the computer with a fresh [`Solver`]
pub fn best_move<const ROWS: usize, const COLS: usize>(
    board: &mut Board<ROWS, COLS>,
    depth: usize,
) -> Option<usize> {
    Solver::new().best_move(board, depth)
}
