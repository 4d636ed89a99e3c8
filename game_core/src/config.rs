use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::params::Params;

/// Game configuration
///
/// Every field defaults to its [`Params`] counterpart, so a partial settings
/// table only overrides what it names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player_acceleration: f32,
    pub player_max_speed: f32,
    pub bot_base_acceleration: f32,
    pub bot_accel_per_point: f32,
    pub bot_max_speed: f32,
    pub bot_deadband: f32,
    pub paddle_damping: f32,
    pub paddle_stop_eps: f32,
    pub paddle_spin: f32,
    pub ball_initial_speed: f32,
    pub ball_speed_per_point: f32,
    pub ball_max_speed: f32,
    pub ball_bounce_multiplier: f32,
    pub ball_bounce_inc: f32,
    pub ball_min_speed: f32,
    pub ball_min_speed_inc: f32,
    pub ball_min_vy_frac: f32,
    pub ball_edge_slowdown: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_acceleration: Params::PLAYER_ACCELERATION,
            player_max_speed: Params::PLAYER_MAX_SPEED,
            bot_base_acceleration: Params::BOT_BASE_ACCELERATION,
            bot_accel_per_point: Params::BOT_ACCEL_PER_POINT,
            bot_max_speed: Params::BOT_MAX_SPEED,
            bot_deadband: Params::BOT_DEADBAND,
            paddle_damping: Params::PADDLE_DAMPING,
            paddle_stop_eps: Params::PADDLE_STOP_EPS,
            paddle_spin: Params::PADDLE_SPIN,
            ball_initial_speed: Params::BALL_INITIAL_SPEED,
            ball_speed_per_point: Params::BALL_SPEED_PER_POINT,
            ball_max_speed: Params::BALL_MAX_SPEED,
            ball_bounce_multiplier: Params::BALL_BOUNCE_MULTIPLIER,
            ball_bounce_inc: Params::BALL_BOUNCE_INC,
            ball_min_speed: Params::BALL_MIN_SPEED,
            ball_min_speed_inc: Params::BALL_MIN_SPEED_INC,
            ball_min_vy_frac: Params::BALL_MIN_VY_FRAC,
            ball_edge_slowdown: Params::BALL_EDGE_SLOWDOWN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the bot's base acceleration for the chosen difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.bot_base_acceleration += difficulty.bot_acceleration_offset();
        self
    }

    /// Bot acceleration for the current player score
    pub fn bot_acceleration(&self, score: u32) -> f32 {
        self.bot_base_acceleration + self.bot_accel_per_point * score as f32
    }

    /// Bounce multiplier for the given hit count within a rally
    pub fn bounce_multiplier(&self, hits_since_reset: u32) -> f32 {
        self.ball_bounce_multiplier + hits_since_reset as f32 * self.ball_bounce_inc
    }

    /// Speed floor for the given hit count, never above the ceiling
    pub fn dynamic_min_speed(&self, hits_since_reset: u32) -> f32 {
        let floor = self.ball_min_speed * (1.0 + hits_since_reset as f32 * self.ball_min_speed_inc);
        floor.min(self.ball_max_speed)
    }

    /// Serve speed after the given number of player points
    pub fn serve_speed(&self, score: u32) -> f32 {
        let speed = self.ball_initial_speed * (1.0 + score as f32 * self.ball_speed_per_point);
        speed.min(self.ball_max_speed)
    }

    /// One message per field outside its allowed range; empty when usable
    pub fn invalid_fields(&self) -> Vec<String> {
        use Range::*;
        let checks = [
            ("player_acceleration", self.player_acceleration, Positive),
            ("player_max_speed", self.player_max_speed, Positive),
            ("bot_base_acceleration", self.bot_base_acceleration, Positive),
            ("bot_accel_per_point", self.bot_accel_per_point, NonNegative),
            ("bot_max_speed", self.bot_max_speed, Positive),
            ("bot_deadband", self.bot_deadband, NonNegative),
            ("paddle_damping", self.paddle_damping, OpenUnit),
            ("paddle_stop_eps", self.paddle_stop_eps, Positive),
            ("paddle_spin", self.paddle_spin, NonNegative),
            ("ball_initial_speed", self.ball_initial_speed, Positive),
            ("ball_speed_per_point", self.ball_speed_per_point, NonNegative),
            ("ball_max_speed", self.ball_max_speed, Positive),
            ("ball_bounce_multiplier", self.ball_bounce_multiplier, Positive),
            ("ball_bounce_inc", self.ball_bounce_inc, NonNegative),
            ("ball_min_speed", self.ball_min_speed, Positive),
            ("ball_min_speed_inc", self.ball_min_speed_inc, NonNegative),
            ("ball_min_vy_frac", self.ball_min_vy_frac, OpenUnit),
            ("ball_edge_slowdown", self.ball_edge_slowdown, HalfOpenUnit),
        ];
        checks
            .iter()
            .filter_map(|(name, value, range)| {
                range.violation(*value).map(|why| format!("{} {}", name, why))
            })
            .collect()
    }
}

/// Allowed interval for a tuning value
#[derive(Debug, Clone, Copy)]
enum Range {
    /// (0, inf)
    Positive,
    /// [0, inf)
    NonNegative,
    /// (0, 1)
    OpenUnit,
    /// [0, 1)
    HalfOpenUnit,
}

impl Range {
    fn violation(self, value: f32) -> Option<&'static str> {
        if !value.is_finite() {
            return Some("must be finite");
        }
        match self {
            Range::Positive if value <= 0.0 => Some("must be positive"),
            Range::NonNegative if value < 0.0 => Some("must not be negative"),
            Range::OpenUnit if value <= 0.0 || value >= 1.0 => Some("must be between 0 and 1"),
            Range::HalfOpenUnit if !(0.0..1.0).contains(&value) => {
                Some("must be at least 0 and below 1")
            }
            _ => None,
        }
    }
}

/// Bot difficulty preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    fn bot_acceleration_offset(self) -> f32 {
        match self {
            Difficulty::Easy => -Params::BOT_ACCEL_PER_DIFFICULTY,
            Difficulty::Medium => 0.0,
            Difficulty::Hard => Params::BOT_ACCEL_PER_DIFFICULTY,
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}', expected easy, medium or hard",
                other
            )),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}
