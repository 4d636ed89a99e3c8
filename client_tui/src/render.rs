//! Frame drawing
//!
//! Reads the game state and never mutates it. Hit flashes are presentation
//! state and are counted here, per rendered frame.

use game_core::{Config, Events, GameState, Paddle, Side};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::line;
use ratatui::widgets::Widget;

const PADDLE_SYMBOL: &str = "█";
const BALL_SYMBOL: &str = "◆";

/// Frames left to draw each paddle highlighted after a hit
#[derive(Debug, Clone)]
pub struct FlashState {
    frames: u8,
    player: u8,
    bot: u8,
}

impl FlashState {
    pub fn new(frames: u8) -> Self {
        Self {
            frames,
            player: 0,
            bot: 0,
        }
    }

    /// Start a flash on each paddle the tick reported a hit on
    pub fn observe(&mut self, events: &Events) {
        if events.hit_player {
            self.player = self.frames;
        }
        if events.hit_bot {
            self.bot = self.frames;
        }
    }

    /// Drop any flash still running
    pub fn clear(&mut self) {
        self.player = 0;
        self.bot = 0;
    }

    pub fn is_lit(&self, side: Side) -> bool {
        match side {
            Side::Player => self.player > 0,
            Side::Bot => self.bot > 0,
        }
    }

    /// Count down one rendered frame
    pub fn frame_done(&mut self) {
        self.player = self.player.saturating_sub(1);
        self.bot = self.bot.saturating_sub(1);
    }
}

/// Centre banner drawn over the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Countdown(u32),
    GameOver,
}

/// The whole playing field as a ratatui widget
pub struct FieldView<'a> {
    pub state: &'a GameState,
    pub config: &'a Config,
    pub flash: &'a FlashState,
    pub overlay: Overlay,
}

impl Widget for FieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = Canvas { area, buf };
        let state = self.state;
        let width = state.field.width;
        let top = state.bot.y.saturating_sub(1);
        let bottom = state.player.y + 1;

        // Border
        let dim = Style::default().add_modifier(Modifier::DIM);
        for col in 1..width.saturating_sub(1) {
            canvas.put(col, top, line::HORIZONTAL, dim);
            canvas.put(col, bottom, line::HORIZONTAL, dim);
        }
        for row in top + 1..bottom {
            canvas.put(0, row, line::VERTICAL, dim);
            canvas.put(width - 1, row, line::VERTICAL, dim);
        }
        canvas.put(0, top, line::TOP_LEFT, dim);
        canvas.put(width - 1, top, line::TOP_RIGHT, dim);
        canvas.put(0, bottom, line::BOTTOM_LEFT, dim);
        canvas.put(width - 1, bottom, line::BOTTOM_RIGHT, dim);

        // Score line, drawn over the top border
        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        canvas.text(2, 0, &format!("Score: {}   (q = quit)", state.score), bold(Color::White));
        let stats = format!(
            "Bot a: {:4.2}  Ball: {:4.2}",
            self.config.bot_acceleration(state.score),
            state.ball.speed()
        );
        canvas.text(width.saturating_sub(25), 0, &stats, bold(Color::Cyan));

        draw_paddle(&mut canvas, &state.player, Color::Green, self.flash.is_lit(Side::Player));
        draw_paddle(&mut canvas, &state.bot, Color::Red, self.flash.is_lit(Side::Bot));

        let ball = state.ball.pos;
        if ball.x >= 0.0 && ball.y >= 0.0 {
            canvas.put(ball.x as u16, ball.y as u16, BALL_SYMBOL, bold(Color::Yellow));
        }

        let banner = match self.overlay {
            Overlay::None => None,
            Overlay::Countdown(n) => Some(n.to_string()),
            Overlay::GameOver => Some(format!(
                "GAME OVER - score {} - r = restart, q = quit",
                state.score
            )),
        };
        if let Some(banner) = banner {
            let col = (width / 2).saturating_sub(banner.chars().count() as u16 / 2);
            let row = state.field.height / 2;
            canvas.text(col, row, &banner, bold(Color::Magenta));
        }
    }
}

fn draw_paddle(canvas: &mut Canvas<'_>, paddle: &Paddle, color: Color, flash: bool) {
    let mut style = Style::default().fg(color);
    if flash {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let left = paddle.x.round().max(0.0) as u16;
    for i in 0..paddle.width {
        canvas.put(left + i, paddle.y, PADDLE_SYMBOL, style);
    }
}

/// Field-relative drawing, clipped to the widget area
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn put(&mut self, col: u16, row: u16, symbol: &str, style: Style) {
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((self.area.x + col, self.area.y + row)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }

    fn text(&mut self, col: u16, row: u16, text: &str, style: Style) {
        let mut utf8 = [0u8; 4];
        for (i, ch) in text.chars().enumerate() {
            let symbol = ch.encode_utf8(&mut utf8);
            self.put(col.saturating_add(i as u16), row, symbol, style);
        }
    }
}
