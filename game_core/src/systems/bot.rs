use super::movement::update_paddle;
use crate::{Config, Direction, GameState};

/// Direction the bot wants to move: towards the ball, outside the deadband
pub fn bot_direction(state: &GameState, config: &Config) -> Direction {
    let delta = state.ball.pos.x - state.bot.center();
    Direction::toward(delta, config.bot_deadband)
}

/// Chase the ball with the top paddle.
///
/// The bot accelerates harder as the player's score rises.
pub fn update_bot(state: &mut GameState, config: &Config) {
    let dir = bot_direction(state, config);
    let acceleration = config.bot_acceleration(state.score);
    update_paddle(
        &mut state.bot,
        dir,
        acceleration,
        config.bot_max_speed,
        state.field.width,
        config,
    );
}
