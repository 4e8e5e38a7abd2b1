//! Chocolate bar grid that shrinks as rows and columns are eaten.

use core::fmt;

use crate::common::{Direction, Piece};

/// Row or column broken off the bar by a move, in board order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slice {
    pub direction: Direction,
    pub pieces: Vec<Piece>,
}

impl Slice {
    /// `true` if the slice carries the spoiled piece.
    pub fn contains_spoiled(&self) -> bool {
        self.pieces.contains(&Piece::Spoiled)
    }
}

/// Rectangular bar of pieces with a single spoiled piece.
///
/// Eaten rows and columns are dropped from the grid, so `rows()` and
/// `cols()` always describe what is left. The spoiled piece itself is never
/// removed.
#[derive(Clone, PartialEq, Eq)]
pub struct Bar {
    cells: Vec<Vec<Piece>>,
    spoiled_row: usize,
    spoiled_col: usize,
}

impl Bar {
    /// Build a `rows` x `cols` bar with the spoiled piece at the 0-indexed
    /// `(spoiled_row, spoiled_col)`. Callers validate the inputs first.
    pub(crate) fn new(rows: usize, cols: usize, spoiled_row: usize, spoiled_col: usize) -> Self {
        let mut cells = vec![vec![Piece::Normal; cols]; rows];
        cells[spoiled_row][spoiled_col] = Piece::Spoiled;
        Bar {
            cells,
            spoiled_row,
            spoiled_col,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Current 0-indexed `(row, col)` of the spoiled piece.
    pub fn spoiled(&self) -> (usize, usize) {
        (self.spoiled_row, self.spoiled_col)
    }

    /// Grid snapshot, row-major.
    pub fn cells(&self) -> &[Vec<Piece>] {
        &self.cells
    }

    /// Index along the move's axis of the edge that `direction` eats.
    fn edge_index(&self, direction: Direction) -> usize {
        match direction {
            Direction::Up | Direction::Left => 0,
            Direction::Down => self.rows() - 1,
            Direction::Right => self.cols() - 1,
        }
    }

    /// `true` if eating the `direction` edge would take the spoiled piece.
    pub fn edge_has_spoiled(&self, direction: Direction) -> bool {
        let edge = self.edge_index(direction);
        if direction.is_row() {
            self.spoiled_row == edge
        } else {
            self.spoiled_col == edge
        }
    }

    /// Copy of the edge row or column that `direction` would eat.
    pub fn edge(&self, direction: Direction) -> Slice {
        let edge = self.edge_index(direction);
        let pieces = if direction.is_row() {
            self.cells[edge].clone()
        } else {
            self.cells.iter().map(|row| row[edge]).collect()
        };
        Slice { direction, pieces }
    }

    /// Drop the `direction` edge and keep the spoiled coordinates aligned.
    /// Must not be called when the edge holds the spoiled piece.
    pub(crate) fn remove_edge(&mut self, direction: Direction) {
        debug_assert!(!self.edge_has_spoiled(direction));
        match direction {
            Direction::Up => {
                self.cells.remove(0);
                self.spoiled_row -= 1;
            }
            Direction::Down => {
                self.cells.pop();
            }
            Direction::Left => {
                for row in self.cells.iter_mut() {
                    row.remove(0);
                }
                self.spoiled_col -= 1;
            }
            Direction::Right => {
                for row in self.cells.iter_mut() {
                    row.pop();
                }
            }
        }
    }
}

impl fmt::Debug for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Bar {{ {}x{}, spoiled: ({}, {}) }}",
            self.rows(),
            self.cols(),
            self.spoiled_row,
            self.spoiled_col
        )?;
        for row in &self.cells {
            for piece in row {
                let ch = match piece {
                    Piece::Normal => 'O',
                    Piece::Spoiled => 'X',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
