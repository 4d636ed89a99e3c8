use std::path::{Path, PathBuf};

use game_core::{Config, Difficulty};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Client settings: scheduling, presentation and the physics tuning table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics_hz: u32,
    pub render_hz: u32,
    pub countdown_steps: u32,
    pub countdown_delay_ms: u64,
    pub flash_frames: u8,
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
    pub physics: Config,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics_hz: 30,
            render_hz: 60,
            countdown_steps: 3,
            countdown_delay_ms: 400,
            flash_frames: 4,
            seed: None,
            difficulty: Difficulty::default(),
            physics: Config::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Check rates, and physics constants after the difficulty is applied
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.physics_hz == 0 || self.render_hz == 0 {
            return Err(SettingsError::Invalid(
                "physics_hz and render_hz must be greater than 0".into(),
            ));
        }
        if self.physics_hz > self.render_hz {
            return Err(SettingsError::Invalid(format!(
                "physics_hz ({}) must not exceed render_hz ({})",
                self.physics_hz, self.render_hz
            )));
        }
        let problems = self.game_config().invalid_fields();
        if !problems.is_empty() {
            return Err(SettingsError::Invalid(format!(
                "physics values out of range: {}",
                problems.join(", ")
            )));
        }
        Ok(())
    }

    /// Physics tuning with the difficulty applied
    pub fn game_config(&self) -> Config {
        self.physics.clone().with_difficulty(self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.game_config(), Config::default());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("").expect("empty settings should parse");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_physics_table() {
        let text = r#"
            physics_hz = 25
            difficulty = "hard"
            seed = 9

            [physics]
            ball_max_speed = 4.0
        "#;
        let settings = Settings::from_toml(text).expect("settings should parse");
        assert_eq!(settings.physics_hz, 25);
        assert_eq!(settings.render_hz, 60);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.physics.ball_max_speed, 4.0);
        assert_eq!(settings.physics.ball_min_speed, Config::default().ball_min_speed);
        assert!(settings.game_config().bot_base_acceleration > Config::default().bot_base_acceleration);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let err = Settings::from_toml("physics_hz = 0").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_physics_faster_than_render_rejected() {
        let err = Settings::from_toml("physics_hz = 120\nrender_hz = 60").unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn test_non_positive_physics_rejected() {
        let err = Settings::from_toml("[physics]\nball_min_speed = 0.0").unwrap_err();
        assert!(err.to_string().contains("ball_min_speed"));
    }

    #[test]
    fn test_damping_must_decay() {
        let err = Settings::from_toml("[physics]\npaddle_damping = 1.0").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    fn rejected_physics(table: &str) -> String {
        let text = format!("[physics]\n{}", table);
        match Settings::from_toml(&text) {
            Err(SettingsError::Invalid(message)) => message,
            other => panic!("expected {:?} to be rejected, got {:?}", table, other),
        }
    }

    #[test]
    fn test_vertical_fraction_must_stay_below_one() {
        assert!(rejected_physics("ball_min_vy_frac = 1.5").contains("ball_min_vy_frac"));
        assert!(rejected_physics("ball_min_vy_frac = 1.0").contains("ball_min_vy_frac"));
    }

    #[test]
    fn test_edge_slowdown_range() {
        assert!(rejected_physics("ball_edge_slowdown = 2.0").contains("ball_edge_slowdown"));
        assert!(rejected_physics("ball_edge_slowdown = -0.1").contains("ball_edge_slowdown"));
        assert!(Settings::from_toml("[physics]\nball_edge_slowdown = 0.0").is_ok());
    }

    #[test]
    fn test_negative_growth_rejected() {
        for name in [
            "ball_min_speed_inc",
            "ball_bounce_inc",
            "bot_accel_per_point",
            "ball_speed_per_point",
        ] {
            let message = rejected_physics(&format!("{} = -0.5", name));
            assert!(message.contains(name), "{}", message);
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(rejected_physics("ball_max_speed = inf").contains("finite"));
        assert!(rejected_physics("player_max_speed = nan").contains("finite"));
    }

    #[test]
    fn test_difficulty_applied_before_checking() {
        let text = "difficulty = \"easy\"\n[physics]\nbot_base_acceleration = 0.03";
        let err = Settings::from_toml(text).unwrap_err();
        assert!(err.to_string().contains("bot_base_acceleration"));
        assert!(Settings::from_toml("[physics]\nbot_base_acceleration = 0.03").is_ok());
    }

    #[test]
    fn test_malformed_toml() {
        let err = Settings::from_toml("physics_hz = \"fast\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Path::new("/definitely/not/here/pong.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
