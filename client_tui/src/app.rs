use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor, event,
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use game_core::{tick, Config, Events, GameRng, GameState};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::clock::FixedStep;
use crate::fsm::{MatchAction, MatchFsm, MatchState};
use crate::input::{handle_key, InputAction, InputLatch};
use crate::render::{FieldView, FlashState, Overlay};
use crate::settings::Settings;

/// A single-player match against the bot, independent of the terminal
pub struct LocalGame {
    pub state: GameState,
    pub config: Config,
    pub rng: GameRng,
    pub fsm: MatchFsm,
    pub input: InputLatch,
    pub flash: FlashState,
    pub events: Events,
    countdown_steps: u32,
    countdown_delay: Duration,
    countdown_elapsed: Duration,
}

impl LocalGame {
    pub fn new(width: u16, height: u16, settings: &Settings, seed: u64) -> Self {
        let config = settings.game_config();
        let mut rng = GameRng::new(seed);
        let state = GameState::new(width, height, &config, &mut rng);

        Self {
            state,
            config,
            rng,
            fsm: MatchFsm::new(),
            input: InputLatch::new(),
            flash: FlashState::new(settings.flash_frames),
            events: Events::new(),
            countdown_steps: settings.countdown_steps,
            countdown_delay: Duration::from_millis(settings.countdown_delay_ms),
            countdown_elapsed: Duration::ZERO,
        }
    }

    pub fn handle_input(&mut self, action: InputAction) {
        match action {
            InputAction::Move(dir) => self.input.press(dir),
            InputAction::Restart => {
                if self.fsm.transition(MatchAction::Restart).success {
                    self.restart();
                }
            }
            InputAction::Quit => {
                let result = self.fsm.transition(MatchAction::Quit);
                tracing::info!(from = ?result.from_state, "quit requested");
            }
            InputAction::Ignore => {}
        }
    }

    /// Run one physics tick if the ball is in play
    pub fn physics_tick(&mut self) {
        let dir = self.input.take();
        if !self.fsm.is_playing() {
            return;
        }

        let events = tick(&mut self.state, &self.config, dir, &mut self.rng);
        self.flash.observe(&events);

        let action = if events.game_over {
            Some(MatchAction::Missed)
        } else if events.scored {
            self.countdown_elapsed = Duration::ZERO;
            Some(MatchAction::Scored)
        } else {
            None
        };
        if let Some(action) = action {
            let result = self.fsm.transition(action);
            tracing::info!(score = self.state.score, ?action, next = ?result.to_state, "match event");
        }
        self.events = events;
    }

    /// Let wall-clock time pass for the serve countdown
    pub fn advance_countdown(&mut self, elapsed: Duration) {
        if self.fsm.state() != MatchState::Countdown {
            return;
        }
        self.countdown_elapsed += elapsed;
        if self.countdown_remaining() == 0 {
            self.fsm.transition(MatchAction::CountdownDone);
        }
    }

    fn countdown_remaining(&self) -> u32 {
        let passed = if self.countdown_delay.is_zero() {
            u128::from(self.countdown_steps)
        } else {
            self.countdown_elapsed.as_millis() / self.countdown_delay.as_millis()
        };
        u128::from(self.countdown_steps).saturating_sub(passed) as u32
    }

    pub fn overlay(&self) -> Overlay {
        if self.fsm.is_game_over() {
            Overlay::GameOver
        } else if self.fsm.state() == MatchState::Countdown {
            Overlay::Countdown(self.countdown_remaining().max(1))
        } else {
            Overlay::None
        }
    }

    pub fn view(&self) -> FieldView<'_> {
        FieldView {
            state: &self.state,
            config: &self.config,
            flash: &self.flash,
            overlay: self.overlay(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.fsm.should_quit()
    }

    /// Fresh state on the same field; the random stream carries on
    fn restart(&mut self) {
        let field = self.state.field;
        self.state = GameState::new(field.width, field.height, &self.config, &mut self.rng);
        self.events = Events::new();
        self.flash.clear();
        self.countdown_elapsed = Duration::ZERO;
        tracing::info!("match restarted");
    }
}

/// Restore terminal state - called on exit and from the panic hook
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Take over the terminal, play until quit, and return the final score
pub fn run(settings: &Settings, seed: u64) -> Result<u32> {
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
        .context("failed to enter alternate screen")?;

    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("failed to create terminal")
        .and_then(|mut terminal| main_loop(&mut terminal, settings, seed));

    restore_terminal().context("failed to restore terminal")?;
    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &Settings,
    seed: u64,
) -> Result<u32> {
    let size = terminal.size()?;
    let mut game = LocalGame::new(size.width, size.height, settings, seed);
    tracing::info!(
        width = game.state.field.width,
        height = game.state.field.height,
        "field ready"
    );

    let mut physics = FixedStep::from_hz(settings.physics_hz);
    let mut render = FixedStep::from_hz(settings.render_hz);
    let mut last = Instant::now();

    loop {
        let timeout = physics.until_next().min(render.until_next());
        if event::poll(timeout)? {
            // Drain everything queued so repeats don't lag behind
            loop {
                if let Event::Key(key) = event::read()? {
                    game.handle_input(handle_key(&key));
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        if game.should_quit() {
            break;
        }

        let now = Instant::now();
        let elapsed = now - last;
        last = now;

        game.advance_countdown(elapsed);
        for _ in 0..physics.advance(elapsed) {
            game.physics_tick();
        }

        if render.advance(elapsed) > 0 {
            terminal.draw(|frame| frame.render_widget(game.view(), frame.area()))?;
            game.flash.frame_done();
        }
    }

    tracing::info!(score = game.state.score, "quit");
    Ok(game.state.score)
}
