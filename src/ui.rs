//! Rendering of the bar and game messages.
//!
//! The engine only exposes data; everything that reaches the terminal goes
//! through a [`Presenter`].

use std::io::Write;

use crate::{
    common::{Direction, GameError, GameStatus, Piece, Side},
    game::MoveReport,
};

/// ANSI color codes used by [`ConsolePresenter`].
pub mod color {
    pub const LIGHT_BROWN: &str = "\x1b[38;5;130m";
    pub const BROWN: &str = "\x1b[38;5;94m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const RESET: &str = "\x1b[0m";
}

/// Read-only consumer of game data.
pub trait Presenter {
    /// Greeting shown once before configuration.
    fn show_welcome(&mut self) -> Result<(), GameError>;

    /// Current bar, row-major.
    fn show_bar(&mut self, cells: &[Vec<Piece>]) -> Result<(), GameError>;

    /// Direction the computer is about to play.
    fn show_computer_move(&mut self, direction: Direction) -> Result<(), GameError>;

    /// Slice eaten by a non-terminal move.
    fn show_eaten(&mut self, report: &MoveReport) -> Result<(), GameError>;

    /// A proposed direction was refused by the engine.
    fn show_invalid_move(&mut self) -> Result<(), GameError>;

    /// Final message for a finished game.
    fn show_outcome(&mut self, status: GameStatus) -> Result<(), GameError>;
}

/// Symbol for a piece on the console.
pub fn piece_symbol(piece: Piece) -> char {
    match piece {
        Piece::Normal => 'O',
        Piece::Spoiled => 'X',
    }
}

/// Text of the final message for `status`, `None` while in progress.
pub fn outcome_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::PlayerLost => Some("You ate the spoiled piece. You lose!"),
        GameStatus::ComputerLost => Some("Computer ate the spoiled piece. You win!"),
        GameStatus::ComputerStuck => Some("Computer has no valid moves. You win!"),
    }
}

/// Presenter writing colored text to any writer.
pub struct ConsolePresenter<W: Write> {
    out: W,
    color: bool,
}

impl ConsolePresenter<std::io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(std::io::stdout(), color)
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Consume the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }

    fn line(&mut self, code: &'static str, text: &str) -> Result<(), GameError> {
        let (start, end) = (self.paint(code), self.paint(color::RESET));
        writeln!(self.out, "{}{}{}", start, text, end)?;
        Ok(())
    }

    fn write_pieces<'a, I>(&mut self, pieces: I) -> Result<(), GameError>
    where
        I: IntoIterator<Item = &'a Piece>,
    {
        for &piece in pieces {
            let code = match piece {
                Piece::Normal => self.paint(color::BROWN),
                Piece::Spoiled => self.paint(color::YELLOW),
            };
            write!(self.out, "{}{} ", code, piece_symbol(piece))?;
        }
        writeln!(self.out, "{}", self.paint(color::RESET))?;
        Ok(())
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_welcome(&mut self) -> Result<(), GameError> {
        let banner = [
            "x--------------------------------x",
            "| Welcome to the Chocolate Game! |",
            "|  - This game is 1-indexed, so  |",
            "|    entering 0,0 as the spoiled |",
            "|    piece would be invalid!     |",
            "|  - Thank you and enjoy!        |",
            "x--------------------------------x",
        ];
        writeln!(self.out)?;
        for text in banner {
            self.line(color::GREEN, text)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn show_bar(&mut self, cells: &[Vec<Piece>]) -> Result<(), GameError> {
        self.line(color::GREEN, "Chocolate Bar:")?;
        for row in cells {
            self.write_pieces(row)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn show_computer_move(&mut self, direction: Direction) -> Result<(), GameError> {
        self.line(color::BLUE, &format!("Computer's move: {}", direction))
    }

    fn show_eaten(&mut self, report: &MoveReport) -> Result<(), GameError> {
        let heading = match report.side {
            Side::Player => "Player eats:",
            Side::Computer => "Computer eats:",
        };
        self.line(color::GREEN, heading)?;
        if report.eaten.direction.is_row() {
            self.write_pieces(&report.eaten.pieces)?;
        } else {
            for piece in &report.eaten.pieces {
                self.write_pieces(std::iter::once(piece))?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn show_invalid_move(&mut self) -> Result<(), GameError> {
        self.line(color::RED, "Invalid move. Try again.")
    }

    fn show_outcome(&mut self, status: GameStatus) -> Result<(), GameError> {
        let Some(text) = outcome_message(status) else {
            return Ok(());
        };
        let code = match status.winner() {
            Some(Side::Player) => color::GREEN,
            _ => color::RED,
        };
        self.line(code, text)?;
        self.out.flush()?;
        Ok(())
    }
}
