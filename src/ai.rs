// Move selection for the computer side: uniform choice among moves that do
// not eat the spoiled piece straight away.

use rand::Rng;

use crate::{common::Direction, game::GameEngine};

/// Choose uniformly among the engine's safe directions.
/// Returns `None` when every direction would eat the spoiled piece.
pub fn select_safe_direction<R: Rng + ?Sized>(
    engine: &GameEngine,
    rng: &mut R,
) -> Option<Direction> {
    let candidates = engine.safe_directions();
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..candidates.len());
    Some(candidates[idx])
}
