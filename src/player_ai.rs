use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    common::{Direction, GameError},
    game::GameEngine,
    player::Player,
};

/// Computer player picking uniformly among moves that avoid the spoiled piece.
///
/// The random source is owned by the player so games can be replayed from a
/// seed.
pub struct AiPlayer {
    rng: SmallRng,
}

impl AiPlayer {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Player with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Player seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl Player for AiPlayer {
    fn select_direction(&mut self, engine: &GameEngine) -> Result<Option<Direction>, GameError> {
        Ok(engine.select_computer_move(&mut self.rng))
    }
}
