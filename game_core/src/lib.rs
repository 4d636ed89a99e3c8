pub mod components;
pub mod config;
pub mod field;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use rand::RngCore;
use systems::*;

/// Run one deterministic physics tick of terminal Pong
pub fn tick<R: RngCore + ?Sized>(
    state: &mut GameState,
    config: &Config,
    player_dir: Direction,
    rng: &mut R,
) -> Events {
    // 1. Player paddle from input
    update_player(state, config, player_dir);

    // 2. Bot paddle chases the ball
    update_bot(state, config);

    // 3. Ball motion, collisions, scoring
    advance_ball(state, config, rng)
}
