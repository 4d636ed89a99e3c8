/// Game tuning parameters for terminal Pong.
///
/// Speeds are in cells per physics tick, accelerations in cells per tick².
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const MIN_FIELD_WIDTH: u16 = 20;
    pub const MIN_FIELD_HEIGHT: u16 = 10;
    pub const PADDLE_WIDTH_RATIO: u16 = 6;

    // Player paddle
    pub const PLAYER_ACCELERATION: f32 = 0.70;
    pub const PLAYER_MAX_SPEED: f32 = 12.0;

    // Bot paddle
    pub const BOT_BASE_ACCELERATION: f32 = 0.20;
    pub const BOT_ACCEL_PER_POINT: f32 = 0.04; // +a per player point
    pub const BOT_MAX_SPEED: f32 = 10.0;
    pub const BOT_DEADBAND: f32 = 0.5;
    pub const BOT_ACCEL_PER_DIFFICULTY: f32 = 0.05;

    // Shared paddle physics
    pub const PADDLE_DAMPING: f32 = 0.80; // vx kept per tick without input
    pub const PADDLE_STOP_EPS: f32 = 0.05;
    pub const PADDLE_SPIN: f32 = 0.30; // share of paddle vx given to the ball

    // Ball
    pub const BALL_INITIAL_SPEED: f32 = 0.5;
    pub const BALL_SPEED_PER_POINT: f32 = 0.15;
    pub const BALL_MAX_SPEED: f32 = 5.0;
    pub const BALL_BOUNCE_MULTIPLIER: f32 = 1.03;
    pub const BALL_BOUNCE_INC: f32 = 0.002; // +0.2% per hit
    pub const BALL_MIN_SPEED: f32 = 1.0;
    pub const BALL_MIN_SPEED_INC: f32 = 0.05; // +5% per hit
    pub const BALL_MIN_VY_FRAC: f32 = 0.25;
    pub const BALL_EDGE_SLOWDOWN: f32 = 0.25;
}
