use glam::Vec2;

use crate::params::Params;

/// Playing field in terminal cells, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub width: u16,
    pub height: u16,
}

impl Field {
    /// Sizes below the minimum are raised to it, per dimension
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(Params::MIN_FIELD_WIDTH),
            height: height.max(Params::MIN_FIELD_HEIGHT),
        }
    }

    pub fn paddle_width(&self) -> u16 {
        self.width / Params::PADDLE_WIDTH_RATIO
    }

    /// Row of the bot paddle (top)
    pub fn bot_row(&self) -> u16 {
        1
    }

    /// Row of the player paddle (bottom)
    pub fn player_row(&self) -> u16 {
        self.height - 2
    }

    /// Largest left edge a paddle of `paddle_width` may take
    pub fn max_paddle_x(&self, paddle_width: u16) -> f32 {
        self.width as f32 - paddle_width as f32 - 1.0
    }

    /// Last column the ball may occupy
    pub fn right_wall(&self) -> f32 {
        self.width as f32 - 1.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}
