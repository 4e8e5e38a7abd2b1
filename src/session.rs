//! Turn loop tying the engine to its players and presenter.

use serde::Serialize;

use crate::{
    common::{Direction, GameError, GameStatus, Side},
    game::GameEngine,
    player::Player,
    ui::Presenter,
};

/// One applied move, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub side: Side,
    pub direction: Direction,
}

/// A single game between a human-side player and the computer.
pub struct Session<H: Player, C: Player, P: Presenter> {
    engine: GameEngine,
    human: H,
    computer: C,
    presenter: P,
    history: Vec<MoveRecord>,
}

impl<H: Player, C: Player, P: Presenter> Session<H, C, P> {
    pub fn new(engine: GameEngine, human: H, computer: C, presenter: P) -> Self {
        Self {
            engine,
            human,
            computer,
            presenter,
            history: Vec::new(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Moves applied so far.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Show the starting bar and play until the game is decided.
    pub fn run(&mut self) -> Result<GameStatus, GameError> {
        self.presenter.show_bar(self.engine.cells())?;
        while !self.engine.is_over() {
            self.step()?;
        }
        log::debug!("game finished after {} moves", self.history.len());
        Ok(self.engine.status())
    }

    /// Play one turn for whichever side is up. Returns the resulting status.
    pub fn step(&mut self) -> Result<GameStatus, GameError> {
        if self.engine.is_over() {
            return Err(GameError::GameOver);
        }
        match self.engine.turn() {
            Side::Player => self.player_turn(),
            Side::Computer => self.computer_turn(),
        }
    }

    fn player_turn(&mut self) -> Result<GameStatus, GameError> {
        let direction = loop {
            match self.human.select_direction(&self.engine)? {
                Some(direction) if self.engine.is_valid_direction(direction) => break direction,
                Some(direction) => {
                    log::debug!("player proposed invalid direction {:?}", direction);
                    self.human.handle_rejected(direction);
                    self.presenter.show_invalid_move()?;
                }
                // Every edge holds the spoiled piece, so any direction eats it.
                None => break Direction::Up,
            }
        };
        self.play(direction)
    }

    fn computer_turn(&mut self) -> Result<GameStatus, GameError> {
        match self.computer.select_direction(&self.engine)? {
            Some(direction) => {
                self.presenter.show_computer_move(direction)?;
                self.play(direction)
            }
            None => {
                self.engine.mark_computer_cornered()?;
                let status = self.engine.status();
                self.presenter.show_outcome(status)?;
                Ok(status)
            }
        }
    }

    fn play(&mut self, direction: Direction) -> Result<GameStatus, GameError> {
        let report = self.engine.apply_direction(direction)?;
        self.history.push(MoveRecord {
            side: report.side,
            direction,
        });
        self.human.handle_move(report.side, direction, &report.eaten);
        self.computer.handle_move(report.side, direction, &report.eaten);
        if report.ended_game() {
            self.presenter.show_outcome(report.status)?;
        } else {
            self.presenter.show_eaten(&report)?;
            self.presenter.show_bar(self.engine.cells())?;
            self.engine.switch_turn()?;
        }
        Ok(self.engine.status())
    }
}
