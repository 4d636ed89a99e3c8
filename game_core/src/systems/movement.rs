use crate::{Config, Direction, GameState, Paddle};

/// Integrate one tick of paddle motion and keep it inside the field.
///
/// Input accelerates the paddle; without input it coasts and decays by
/// `damping` until it drops below `stop_eps`. Hitting either boundary zeroes
/// the velocity.
pub fn update_paddle(
    paddle: &mut Paddle,
    dir: Direction,
    acceleration: f32,
    max_speed: f32,
    field_width: u16,
    config: &Config,
) {
    if dir != Direction::Stop {
        paddle.ax = acceleration * dir.signum();
        paddle.vx += paddle.ax;
    } else {
        paddle.ax = 0.0;
        paddle.vx *= config.paddle_damping;
        if paddle.vx.abs() < config.paddle_stop_eps {
            paddle.vx = 0.0;
        }
    }

    paddle.vx = paddle.vx.clamp(-max_speed, max_speed);
    paddle.x += paddle.vx;

    let max_x = field_width as f32 - paddle.width as f32 - 1.0;

    if paddle.x < 0.0 {
        paddle.x = 0.0;
        paddle.vx = 0.0;
    }

    // Pushing right within a cell of the edge snaps straight to it
    if dir == Direction::Right && paddle.x >= max_x - 1.0 {
        paddle.x = max_x;
        paddle.vx = 0.0;
    } else if paddle.x > max_x {
        paddle.x = max_x;
        paddle.vx = 0.0;
    }
}

/// Apply player input to the bottom paddle
pub fn update_player(state: &mut GameState, config: &Config, dir: Direction) {
    update_paddle(
        &mut state.player,
        dir,
        config.player_acceleration,
        config.player_max_speed,
        state.field.width,
        config,
    );
}
