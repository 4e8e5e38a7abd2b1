use crate::{
    ai,
    board::{Bar, Slice},
    common::{Direction, GameError, GameStatus, Piece, Side},
    config::BarConfig,
};

/// Outcome of a single applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Side that made the move.
    pub side: Side,
    pub direction: Direction,
    /// Row or column that was broken off.
    pub eaten: Slice,
    /// Status after the move.
    pub status: GameStatus,
}

impl MoveReport {
    /// `true` if this move ended the game.
    pub fn ended_game(&self) -> bool {
        self.status.is_over()
    }
}

/// Side that opens a game on a `rows` x `cols` bar: the player when both
/// dimensions share parity, the computer otherwise.
pub fn first_turn(rows: usize, cols: usize) -> Side {
    if rows % 2 == cols % 2 {
        Side::Player
    } else {
        Side::Computer
    }
}

/// Core game logic holding the bar, turn ownership and status.
///
/// The engine never flips the turn on its own; callers invoke
/// [`GameEngine::switch_turn`] after a non-terminal move.
#[derive(Clone, Debug)]
pub struct GameEngine {
    bar: Bar,
    turn: Side,
    status: GameStatus,
}

impl GameEngine {
    /// Create an engine from a 1-indexed configuration.
    pub fn new(config: &BarConfig) -> Result<Self, GameError> {
        config.validate()?;
        let (spoiled_row, spoiled_col) = config.spoiled_zero_indexed();
        let turn = first_turn(config.rows, config.cols);
        log::debug!(
            "new {}x{} bar, spoiled at ({}, {}), {:?} moves first",
            config.rows,
            config.cols,
            spoiled_row,
            spoiled_col,
            turn
        );
        Ok(Self {
            bar: Bar::new(config.rows, config.cols, spoiled_row, spoiled_col),
            turn,
            status: GameStatus::InProgress,
        })
    }

    /// Shorthand for [`GameEngine::new`] with loose arguments.
    pub fn with_dimensions(
        rows: usize,
        cols: usize,
        spoiled_row: usize,
        spoiled_col: usize,
    ) -> Result<Self, GameError> {
        Self::new(&BarConfig::new(rows, cols, spoiled_row, spoiled_col))
    }

    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    pub fn rows(&self) -> usize {
        self.bar.rows()
    }

    pub fn cols(&self) -> usize {
        self.bar.cols()
    }

    /// 0-indexed `(row, col)` of the spoiled piece.
    pub fn spoiled(&self) -> (usize, usize) {
        self.bar.spoiled()
    }

    /// Grid snapshot for rendering.
    pub fn cells(&self) -> &[Vec<Piece>] {
        self.bar.cells()
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Whether `direction` may be played against the current bar.
    ///
    /// This only checks that the spoiled piece is inside the bar, so every
    /// direction is accepted while the bar is non-empty. It does not reject
    /// moves that would eat the spoiled piece; see
    /// [`GameEngine::is_safe_direction`] for that.
    pub fn is_valid_direction(&self, direction: Direction) -> bool {
        let (row, col) = self.bar.spoiled();
        match direction {
            Direction::Up | Direction::Down => row < self.bar.rows(),
            Direction::Left | Direction::Right => col < self.bar.cols(),
        }
    }

    /// Valid and does not eat the spoiled piece.
    pub fn is_safe_direction(&self, direction: Direction) -> bool {
        self.is_valid_direction(direction) && !self.bar.edge_has_spoiled(direction)
    }

    /// Directions the side on turn can play without losing immediately,
    /// in `Direction::ALL` order.
    pub fn safe_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.is_safe_direction(d))
            .collect()
    }

    /// Eat the `direction` edge for the side on turn.
    ///
    /// If the edge holds the spoiled piece the game ends with that side's
    /// loss and the bar is left as is. Otherwise the edge is removed.
    pub fn apply_direction(&mut self, direction: Direction) -> Result<MoveReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let eaten = self.bar.edge(direction);
        if self.bar.edge_has_spoiled(direction) {
            self.status = GameStatus::ate_spoiled(self.turn);
            log::info!("{:?} ate the spoiled piece ({:?})", self.turn, self.status);
        } else {
            self.bar.remove_edge(direction);
            log::debug!(
                "{:?} ate {:?}, bar now {}x{}",
                self.turn,
                direction,
                self.bar.rows(),
                self.bar.cols()
            );
        }
        Ok(MoveReport {
            side: self.turn,
            direction,
            eaten,
            status: self.status,
        })
    }

    /// Hand the turn to the other side.
    pub fn switch_turn(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.turn = self.turn.other();
        Ok(())
    }

    /// Pick a safe move for the computer using `rng`. `None` when cornered.
    pub fn select_computer_move<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<Direction> {
        ai::select_safe_direction(self, rng)
    }

    /// End the game in the player's favor because the computer has no safe
    /// move left. Only allowed on the computer's turn with no safe direction.
    pub fn mark_computer_cornered(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.turn != Side::Computer || !self.safe_directions().is_empty() {
            return Err(GameError::NotCornered);
        }
        self.status = GameStatus::ComputerStuck;
        log::info!("computer is cornered on a {}x{} bar", self.rows(), self.cols());
        Ok(())
    }
}
