//! Terminal Pong
//!
//! One player at the bottom of the terminal against a bot at the top that
//! speeds up with every point scored.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use game_core::Difficulty;

mod app;
mod clock;
mod fsm;
mod input;
mod render;
mod settings;

use settings::Settings;

/// Terminal Pong against an accelerating bot
#[derive(Parser)]
#[command(name = "pong", version)]
#[command(about = "Terminal Pong against an accelerating bot", long_about = None)]
struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for serve directions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Bot difficulty: easy, medium or hard
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Where to write the log; the terminal belongs to the game
    #[arg(long, default_value = "pong.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = app::restore_terminal();
        previous_hook(panic_info);
    }));

    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(difficulty) = cli.difficulty {
        settings.difficulty = difficulty;
    }

    let seed = settings.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, difficulty = %settings.difficulty, "starting pong");

    let score = app::run(&settings, seed)?;
    println!("Final score: {score}");
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
