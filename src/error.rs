use thiserror::Error;

/// Errors raised when a move cannot be applied to a board or game
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("column {column} is out of range")]
    OutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} has no token to remove")]
    ColumnEmpty { column: usize },

    #[error("could not parse '{0}' as a valid move")]
    InvalidCharacter(char),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised while reading a column selection typed by the human player
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("column {column} out of range, columns must be between 1 and {max}")]
    OutOfRange { column: usize, max: usize },
}
