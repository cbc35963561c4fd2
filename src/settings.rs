//! Game settings and rules
//!
//! Loaded from a JSON file; every field falls back to its default when absent.

use std::path::{Path, PathBuf};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Tunable simulation rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub grid_width: i32,
    pub grid_height: i32,

    // === Spawning & leveling ===
    pub start_spawn_rate: u32,
    pub spawn_rate_increase: u32,
    pub start_level: u32,
    pub score_threshold: u64,
    /// Enemy chance as a fraction of the spawn rate
    pub enemy_spawn_factor: f64,
    /// Power-up chance as a fraction of the spawn rate
    pub power_up_spawn_factor: f64,

    // === Ship ===
    pub ship_start_health: u32,
    pub ship_max_health: u32,
    pub asteroid_damage: u32,
    pub enemy_damage: u32,

    // === Power-ups ===
    pub health_power_up_amount: u32,
    pub shield_power_up_score: u64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            grid_width: GAME_WIDTH,
            grid_height: GAME_HEIGHT,

            start_spawn_rate: START_SPAWN_RATE,
            spawn_rate_increase: SPAWN_RATE_INCREASE,
            start_level: START_LEVEL,
            score_threshold: SCORE_THRESHOLD,
            enemy_spawn_factor: ENEMY_SPAWN_RATE,
            power_up_spawn_factor: POWER_UP_SPAWN_RATE,

            ship_start_health: SHIP_START_HEALTH,
            ship_max_health: SHIP_MAX_HEALTH,
            asteroid_damage: ASTEROID_DAMAGE,
            enemy_damage: ENEMY_DAMAGE,

            health_power_up_amount: HEALTH_POWER_UP_AMOUNT,
            shield_power_up_score: SHIELD_POWER_UP_SCORE,
        }
    }
}

impl Rules {
    /// Ship spawn cell: horizontal middle, vertical middle of the grid
    pub fn ship_start(&self) -> IVec2 {
        IVec2::new(self.grid_width / 2, self.grid_height / 2)
    }

    /// Whether a cell lies on the grid
    #[inline]
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.grid_width && pos.y >= 0 && pos.y < self.grid_height
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_width <= 0 || self.grid_height <= 0 {
            return Err(SettingsError::Invalid(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.start_level == 0 {
            return Err(SettingsError::Invalid("start_level must be at least 1".into()));
        }
        if self.ship_start_health > self.ship_max_health {
            return Err(SettingsError::Invalid(format!(
                "ship_start_health {} exceeds ship_max_health {}",
                self.ship_start_health, self.ship_max_health
            )));
        }
        if self.enemy_damage <= self.asteroid_damage {
            return Err(SettingsError::Invalid(
                "enemy_damage must exceed asteroid_damage".into(),
            ));
        }
        for (name, factor) in [
            ("enemy_spawn_factor", self.enemy_spawn_factor),
            ("power_up_spawn_factor", self.power_up_spawn_factor),
        ] {
            if !(0.0..=1.0).contains(&factor) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be within [0, 1], got {factor}"
                )));
            }
        }
        Ok(())
    }
}

/// Run settings: rules plus driver options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rules: Rules,
    /// Spawner seed; a time-derived seed is used when absent
    pub seed: Option<u64>,
    /// Log ship moves, hits, level-ups and periodic achievement reports
    pub verbose: bool,
    /// Where mastered achievements are appended
    pub achievement_log: PathBuf,

    // === Headless driver ===
    /// Real-time delay between ticks (0 = run as fast as possible)
    pub tick_millis: u64,
    /// Stop after this many ticks even if the ship survives (0 = no limit)
    pub max_ticks: u64,
    /// Draw the ASCII frame every N ticks (0 = never)
    pub render_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            seed: None,
            verbose: false,
            achievement_log: PathBuf::from("achievements.log"),

            tick_millis: 50,
            max_ticks: 0,
            render_every: 10,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|source| SettingsError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        settings.rules.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings if a path is given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}
