use rand::RngCore;

use super::reflection::reflect;
use super::scoring::award_point;
use crate::{Config, Events, GameState};

/// Advance the ball by one physics tick.
///
/// Motion is split into sub-steps of at most one cell per axis so the ball
/// cannot pass through a paddle or wall between checks. After a paddle hit
/// the remaining sub-steps follow the new velocity. A point ends the tick
/// early; so does a miss at the player's edge, which reports `game_over`.
pub fn advance_ball<R: RngCore + ?Sized>(
    state: &mut GameState,
    config: &Config,
    rng: &mut R,
) -> Events {
    let mut events = Events::new();

    let vel = state.ball.vel;
    let sub_steps = vel.x.abs().max(vel.y.abs()).ceil().max(1.0) as u32;
    let mut step = vel / sub_steps as f32;

    let right_wall = state.field.right_wall();
    let bot_row = state.bot.y as f32;
    let player_row = state.player.y as f32;

    for s in 0..sub_steps {
        state.ball.pos += step;

        // Side walls
        let x = state.ball.pos.x;
        if x <= 0.0 || x >= right_wall {
            state.ball.vel.x = -state.ball.vel.x;
            step.x = -step.x;
            state.ball.pos.x = x.clamp(0.0, right_wall);
        }

        let remaining = (sub_steps - s) as f32;

        // Bot paddle (top)
        let ball = state.ball;
        if ball.vel.y < 0.0
            && ball.pos.y >= bot_row
            && ball.pos.y <= bot_row + 1.0
            && state.bot.spans(ball.pos.x)
        {
            state.hits_since_reset += 1;
            reflect(&mut state.ball, &state.bot, state.hits_since_reset, config);
            events.hit_bot = true;
            step = state.ball.vel / remaining;
            tracing::trace!(hits = state.hits_since_reset, "bot hit");
        }

        // Player paddle (bottom)
        let ball = state.ball;
        if ball.vel.y > 0.0
            && ball.pos.y >= player_row - 1.0
            && ball.pos.y <= player_row
            && state.player.spans(ball.pos.x)
        {
            state.hits_since_reset += 1;
            reflect(&mut state.ball, &state.player, state.hits_since_reset, config);
            events.hit_player = true;
            step = state.ball.vel / remaining;
            tracing::trace!(hits = state.hits_since_reset, "player hit");
        }

        if state.ball.pos.y < 0.0 {
            award_point(state, config, rng);
            events.scored = true;
            break;
        } else if state.ball.pos.y > state.field.height as f32 {
            tracing::debug!(score = state.score, "ball missed, game over");
            events.game_over = true;
            return events;
        }
    }

    events
}
