use glam::Vec2;
use rand::RngCore;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::field::Field;
use crate::resources::random_sign;

/// Complete game state, owned by the caller and mutated once per tick
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub field: Field,
    pub player: Paddle,
    pub bot: Paddle,
    pub ball: Ball,
    pub score: u32, // Player points; the bot never scores
    pub hits_since_reset: u32,
}

impl GameState {
    /// Build a fresh game for a `width` x `height` terminal.
    ///
    /// Undersized fields are raised to the minimum. Both paddles start
    /// centred, the ball starts at the field centre heading up towards the
    /// bot with a random horizontal sign.
    pub fn new<R: RngCore + ?Sized>(width: u16, height: u16, config: &Config, rng: &mut R) -> Self {
        let field = Field::new(width, height);

        let paddle_width = field.paddle_width();
        let paddle_x = ((field.width - paddle_width) / 2) as f32;
        let player = Paddle::new(paddle_x, field.player_row(), paddle_width);
        let bot = Paddle::new(paddle_x, field.bot_row(), paddle_width);

        let speed = config.ball_initial_speed;
        let vel = Vec2::new(random_sign(rng) * speed, -speed);
        let ball = Ball::new(field.center(), vel);

        tracing::debug!(
            width = field.width,
            height = field.height,
            paddle_width,
            "new game"
        );

        Self {
            field,
            player,
            bot,
            ball,
            score: 0,
            hits_since_reset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_new_game_layout() {
        let config = Config::new();
        let mut rng = StepRng::new(1, 0);
        let state = GameState::new(80, 24, &config, &mut rng);

        assert_eq!(state.field, Field::new(80, 24));
        assert_eq!(state.player.width, 13);
        assert_eq!(state.bot.width, 13);
        assert_eq!(state.player.x, 33.0);
        assert_eq!(state.bot.x, 33.0);
        assert_eq!(state.player.y, 22);
        assert_eq!(state.bot.y, 1);
        assert_eq!(state.player.vx, 0.0);
        assert_eq!(state.bot.ax, 0.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.hits_since_reset, 0);
    }

    #[test]
    fn test_new_game_ball_at_center_heading_up() {
        let config = Config::new();
        let mut rng = StepRng::new(1, 0);
        let state = GameState::new(80, 24, &config, &mut rng);

        assert_eq!(state.ball.pos, Vec2::new(40.0, 12.0));
        assert_eq!(state.ball.vel.x, config.ball_initial_speed);
        assert_eq!(state.ball.vel.y, -config.ball_initial_speed);
    }

    #[test]
    fn test_new_game_random_horizontal_sign() {
        let config = Config::new();
        let mut even = StepRng::new(0, 0);
        let state = GameState::new(80, 24, &config, &mut even);
        assert!(state.ball.vel.x < 0.0, "Even draw serves to the left");
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_new_game_normalizes_tiny_field() {
        let config = Config::new();
        let mut rng = StepRng::new(0, 1);
        let state = GameState::new(3, 2, &config, &mut rng);

        assert_eq!(state.field.width, Params::MIN_FIELD_WIDTH);
        assert_eq!(state.field.height, Params::MIN_FIELD_HEIGHT);
        let max_x = state.field.max_paddle_x(state.player.width);
        assert!(state.player.x >= 0.0 && state.player.x <= max_x);
        assert!(state.bot.x >= 0.0 && state.bot.x <= max_x);
    }
}
