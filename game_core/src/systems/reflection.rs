use glam::Vec2;

use crate::{Ball, Config, Paddle};

/// Bounce the ball off `paddle`.
///
/// The outgoing angle follows the impact offset from the paddle centre, the
/// paddle's own velocity adds spin, and the multiplier and speed floor both
/// grow with `hits_since_reset`. The result always has a speed within
/// `[dynamic_min_speed, ball_max_speed]`, a vertical share of at least
/// `ball_min_vy_frac` and a vertical sign pointing away from the paddle.
pub fn reflect(ball: &mut Ball, paddle: &Paddle, hits_since_reset: u32, config: &Config) {
    let incoming = ball.vel;
    let speed = incoming.length();
    // Vertical sign of the rebound: always away from the paddle surface
    let away = if incoming.y > 0.0 { -1.0 } else { 1.0 };

    // Impact offset: -1 (left edge) .. +1 (right edge)
    let half_width = paddle.width as f32 / 2.0;
    let offset = ((ball.pos.x - paddle.center()) / half_width).clamp(-1.0, 1.0);
    let abs_offset = offset.abs();

    // Same speed, new direction
    let mut vel = Vec2::new(
        speed * offset,
        away * speed * (1.0 - abs_offset * abs_offset).sqrt(),
    );

    vel.x += paddle.vx * config.paddle_spin;

    vel *= config.bounce_multiplier(hits_since_reset);

    // Glancing hits lose some power
    vel *= 1.0 - config.ball_edge_slowdown * abs_offset;

    let mut mag = vel.length();
    if mag > config.ball_max_speed {
        vel *= config.ball_max_speed / mag;
        mag = config.ball_max_speed;
    }

    let min_speed = config.dynamic_min_speed(hits_since_reset);
    if mag <= f32::EPSILON {
        // Nothing to scale: leave straight back along the vertical axis
        vel = Vec2::new(0.0, away * min_speed);
        mag = min_speed;
    } else if mag < min_speed {
        vel *= min_speed / mag;
        mag = min_speed;
    }

    let min_vy = mag * config.ball_min_vy_frac;
    if vel.y.abs() < min_vy {
        let vx = (mag * mag - min_vy * min_vy).max(0.0).sqrt();
        vel = Vec2::new(vx.copysign(vel.x), away * min_vy);
    }

    tracing::trace!(
        offset,
        hits_since_reset,
        vx = vel.x,
        vy = vel.y,
        "ball reflected"
    );

    ball.vel = vel;
}
