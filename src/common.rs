//! Common types for the chocolate bar game: directions, sides, pieces and errors.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Edge of the bar a move breaks off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Top row.
    Up,
    /// Bottom row.
    Down,
    /// Leftmost column.
    Left,
    /// Rightmost column.
    Right,
}

impl Direction {
    /// All directions in the order the computer considers them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Single-letter command used on the console.
    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    /// `true` when the move removes a row rather than a column.
    pub fn is_row(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl TryFrom<char> for Direction {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'u' => Ok(Direction::Up),
            'd' => Ok(Direction::Down),
            'l' => Ok(Direction::Left),
            'r' => Ok(Direction::Right),
            other => Err(GameError::InvalidDirectionInput(other.to_string())),
        }
    }
}

impl core::str::FromStr for Direction {
    type Err = GameError;

    /// Parse a console token. Exactly one of `u`, `d`, `l`, `r` is accepted
    /// (case-sensitive); surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::try_from(c),
            _ => Err(GameError::InvalidDirectionInput(token.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Which side owns the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// The opposing side.
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Marker for a single piece of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Piece {
    Normal,
    Spoiled,
}

/// Overall status of a game. Every variant other than `InProgress` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /// The human ate the spoiled piece.
    PlayerLost,
    /// The computer ate the spoiled piece.
    ComputerLost,
    /// The computer had no safe move left; the human wins.
    ComputerStuck,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Winning side of a finished game, `None` while still in progress.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::PlayerLost => Some(Side::Computer),
            GameStatus::ComputerLost | GameStatus::ComputerStuck => Some(Side::Player),
        }
    }

    /// Terminal status for `side` eating the spoiled piece.
    pub fn ate_spoiled(side: Side) -> GameStatus {
        match side {
            Side::Player => GameStatus::PlayerLost,
            Side::Computer => GameStatus::ComputerLost,
        }
    }
}

/// Reasons a bar configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Rows or columns below one.
    EmptyBar { rows: usize, cols: usize },
    /// Spoiled piece outside `[1, rows] x [1, cols]`.
    SpoiledOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBar { rows, cols } => {
                write!(f, "bar dimensions must be positive, got {}x{}", rows, cols)
            }
            ConfigError::SpoiledOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "spoiled piece ({}, {}) is outside the {}x{} bar",
                row, col, rows, cols
            ),
        }
    }
}

/// Errors returned by game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Bar dimensions or spoiled coordinates are out of range.
    InvalidConfiguration(ConfigError),
    /// Console input outside `u/d/l/r`.
    InvalidDirectionInput(String),
    /// A move was attempted after the game finished.
    GameOver,
    /// The computer was declared cornered while a safe move exists.
    NotCornered,
    /// The input stream ended before the game did.
    InputClosed,
    /// Console read or write failure.
    Io(String),
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::InvalidConfiguration(err)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err.to_string())
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfiguration(e) => write!(f, "Invalid configuration: {}", e),
            GameError::InvalidDirectionInput(s) => {
                write!(f, "Invalid move '{}', expected one of u/d/l/r", s)
            }
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotCornered => write!(f, "Computer still has a safe move"),
            GameError::InputClosed => write!(f, "Input closed before the game finished"),
            GameError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}
