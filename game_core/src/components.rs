use glam::Vec2;

/// Discrete paddle input: left, none or right
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Left,
    #[default]
    Stop,
    Right,
}

impl Direction {
    /// -1.0, 0.0 or 1.0
    pub fn signum(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Stop => 0.0,
            Direction::Right => 1.0,
        }
    }

    /// Direction of `delta`, or `Stop` while it stays within the deadband
    pub fn toward(delta: f32, deadband: f32) -> Self {
        if delta > deadband {
            Direction::Right
        } else if delta < -deadband {
            Direction::Left
        } else {
            Direction::Stop
        }
    }
}

/// Paddle component - a horizontal segment on a fixed row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,     // Left edge, continuous
    pub y: u16,     // Fixed row
    pub width: u16, // Cells
    pub vx: f32,    // Cells per tick
    pub ax: f32,    // Last applied acceleration
}

impl Paddle {
    pub fn new(x: f32, y: u16, width: u16) -> Self {
        Self {
            x,
            y,
            width,
            vx: 0.0,
            ax: 0.0,
        }
    }

    pub fn center(&self) -> f32 {
        self.x + self.width as f32 / 2.0
    }

    /// Whether `x` lies on the paddle span, edges included
    pub fn spans(&self, x: f32) -> bool {
        x >= self.x && x <= self.x + self.width as f32
    }
}

/// Ball component - a point with velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_toward_respects_deadband() {
        assert_eq!(Direction::toward(3.0, 0.5), Direction::Right);
        assert_eq!(Direction::toward(-3.0, 0.5), Direction::Left);
        assert_eq!(Direction::toward(0.4, 0.5), Direction::Stop);
        assert_eq!(Direction::toward(-0.5, 0.5), Direction::Stop);
    }

    #[test]
    fn test_paddle_center_and_span() {
        let paddle = Paddle::new(10.0, 22, 6);
        assert_eq!(paddle.center(), 13.0);
        assert!(paddle.spans(10.0));
        assert!(paddle.spans(16.0));
        assert!(!paddle.spans(16.1));
        assert!(!paddle.spans(9.9));
    }
}
