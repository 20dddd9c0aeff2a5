use crate::error::MoveError;
use crate::{HEIGHT, WIDTH};

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    /// The character used for this player's tokens when drawing the board
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Ai => 'O',
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Human,
    Ai,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Human => Some(Player::Human),
            Cell::Ai => Some(Player::Ai),
            Cell::Empty => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Cell::Human,
            Player::Ai => Cell::Ai,
        }
    }
}

/// The standard 6 x 7 game board
pub type StandardBoard = Board<HEIGHT, WIDTH>;

/// A Connect 4 grid of `ROWS` x `COLS` cells
///
/// Row 0 is the bottom of the board. Tokens fall to the lowest empty cell of
/// their column, so the filled cells of every column are contiguous from the
/// bottom and `heights` always equals the number of tokens in each column.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board<const ROWS: usize, const COLS: usize> {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
    num_moves: usize,
}

impl<const ROWS: usize, const COLS: usize> Board<ROWS, COLS> {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
            num_moves: 0,
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// The number of tokens in `column`
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Whether a token can still be dropped into `column`
    pub fn is_playable(&self, column: usize) -> bool {
        column < COLS && self.cells[ROWS - 1][column].is_empty()
    }

    /// Drops a token for `player` into `column`, returning the row it landed in
    ///
    /// The board is left untouched if the column is full or out of range.
    pub fn drop(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::OutOfRange { column });
        }
        if !self.is_playable(column) {
            return Err(MoveError::ColumnFull { column });
        }
        Ok(self.play(column, player))
    }

    /// Removes the topmost token from `column`, returning the removed cell
    pub fn undo(&mut self, column: usize) -> Result<Cell, MoveError> {
        if column >= COLS {
            return Err(MoveError::OutOfRange { column });
        }
        if self.heights[column] == 0 {
            return Err(MoveError::ColumnEmpty { column });
        }
        Ok(self.unplay(column))
    }

    // callers must check `is_playable` first
    pub(crate) fn play(&mut self, column: usize, player: Player) -> usize {
        let row = self.heights[column];
        self.cells[row][column] = player.into();
        self.heights[column] += 1;
        self.num_moves += 1;
        row
    }

    // callers must only revert a matching `play`
    pub(crate) fn unplay(&mut self, column: usize) -> Cell {
        self.heights[column] -= 1;
        self.num_moves -= 1;
        let row = self.heights[column];
        std::mem::replace(&mut self.cells[row][column], Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells[ROWS - 1].iter().all(|cell| !cell.is_empty())
    }

    /// Whether `player` has four tokens in a row anywhere on the board
    pub fn has_won(&self, player: Player) -> bool {
        let token = Cell::from(player);
        let run = |row: usize, column: usize, dy: isize, dx: isize| {
            (0..4).all(|k| {
                let y = row as isize + dy * k;
                let x = column as isize + dx * k;
                self.cells[y as usize][x as usize] == token
            })
        };

        for row in 0..ROWS {
            for column in 0..COLS {
                // horizontal
                if column + 3 < COLS && run(row, column, 0, 1) {
                    return true;
                }
                // vertical
                if row + 3 < ROWS && run(row, column, 1, 0) {
                    return true;
                }
                // diagonal /
                if row + 3 < ROWS && column + 3 < COLS && run(row, column, 1, 1) {
                    return true;
                }
                // diagonal \
                if row >= 3 && column + 3 < COLS && run(row, column, -1, 1) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether the board is full with no line of four for either player
    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.has_won(Player::Human) && !self.has_won(Player::Ai)
    }

    /// Whether the search should stop expanding this position
    pub fn is_terminal(&self) -> bool {
        self.has_won(Player::Ai) || self.has_won(Player::Human) || self.is_full()
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Board<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}
