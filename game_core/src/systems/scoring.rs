use glam::Vec2;
use rand::RngCore;

use crate::resources::random_sign;
use crate::{Config, GameState};

/// Credit the player with a point and serve a new ball
pub fn award_point<R: RngCore + ?Sized>(state: &mut GameState, config: &Config, rng: &mut R) {
    state.score += 1;
    tracing::debug!(
        score = state.score,
        rally_hits = state.hits_since_reset,
        "player scored"
    );
    reset_ball(state, config, rng);
}

/// Serve from just below the bot, heading down.
///
/// Serve speed grows with the score; the rally hit counter restarts. Paddles
/// and score are left alone.
pub fn reset_ball<R: RngCore + ?Sized>(state: &mut GameState, config: &Config, rng: &mut R) {
    let speed = config.serve_speed(state.score);

    state.ball.pos = Vec2::new(
        state.field.width as f32 / 2.0,
        state.bot.y as f32 + 1.0,
    );
    state.ball.vel = Vec2::new(random_sign(rng) * speed, speed);
    state.hits_since_reset = 0;

    tracing::trace!(speed, vx = state.ball.vel.x, "ball served");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn setup() -> (GameState, Config) {
        let config = Config::new();
        let mut rng = StepRng::new(0, 1);
        (GameState::new(80, 24, &config, &mut rng), config)
    }

    #[test]
    fn test_award_point_increments_score_and_resets_rally() {
        let (mut state, config) = setup();
        state.hits_since_reset = 7;
        state.ball.pos = Vec2::new(12.0, -0.5);

        award_point(&mut state, &config, &mut StepRng::new(1, 0));

        assert_eq!(state.score, 1);
        assert_eq!(state.hits_since_reset, 0);
        assert_eq!(state.ball.pos, Vec2::new(40.0, 2.0));
    }

    #[test]
    fn test_serve_heads_down_with_random_sign() {
        let (mut state, config) = setup();

        reset_ball(&mut state, &config, &mut StepRng::new(1, 0));
        assert!(state.ball.vel.x > 0.0);
        assert!(state.ball.vel.y > 0.0);

        reset_ball(&mut state, &config, &mut StepRng::new(2, 0));
        assert!(state.ball.vel.x < 0.0);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_serve_speed_follows_score() {
        let (mut state, config) = setup();
        state.score = 4;

        reset_ball(&mut state, &config, &mut StepRng::new(1, 0));
        let expected = config.ball_initial_speed * (1.0 + 4.0 * config.ball_speed_per_point);
        assert!((state.ball.vel.y - expected).abs() < 1e-6);
        assert!((state.ball.vel.x.abs() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_serve_speed_capped() {
        let (mut state, config) = setup();
        state.score = 500;

        reset_ball(&mut state, &config, &mut StepRng::new(1, 0));
        assert_eq!(state.ball.vel.y, config.ball_max_speed);
    }

    #[test]
    fn test_reset_leaves_paddles_alone() {
        let (mut state, config) = setup();
        state.player.x = 5.0;
        state.player.vx = 2.0;
        state.bot.x = 50.0;
        state.score = 3;

        reset_ball(&mut state, &config, &mut StepRng::new(1, 0));
        assert_eq!(state.player.x, 5.0);
        assert_eq!(state.player.vx, 2.0);
        assert_eq!(state.bot.x, 50.0);
        assert_eq!(state.score, 3);
    }
}
