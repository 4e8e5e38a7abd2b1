use crate::{
    board::Slice,
    common::{Direction, GameError, Side},
    game::GameEngine,
};

/// Interface implemented by different player types.
pub trait Player {
    /// Propose the next direction for the side on turn.
    ///
    /// `Ok(None)` means the player sees no move that avoids the spoiled
    /// piece. Human players always answer with some direction.
    fn select_direction(&mut self, engine: &GameEngine) -> Result<Option<Direction>, GameError>;

    /// Inform the player that a proposed direction was rejected.
    fn handle_rejected(&mut self, _direction: Direction) {}

    /// Inform the player of a move made by either side.
    fn handle_move(&mut self, _side: Side, _direction: Direction, _eaten: &Slice) {}
}
