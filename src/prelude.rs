//! Commonly used types and utilities for ease of import.

pub use crate::{
    first_turn, AiPlayer, BarConfig, CliPlayer, ConsolePresenter, Direction, GameEngine,
    GameError, GameStatus, Player, Presenter, Session, Side,
};
