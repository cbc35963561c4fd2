//! Space Defender - A grid arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, leveling)
//! - `achievements`: Achievement registry and tiering
//! - `game`: Controller wiring the simulation to input and output sinks
//! - `platform`: Sink traits and input mapping
//! - `renderer`: ASCII frame rendering
//! - `persistence`: Achievement log storage
//! - `settings`: Data-driven game rules
//! - `autopilot`: Demo input for headless runs

pub mod achievements;
pub mod autopilot;
pub mod error;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use achievements::{Achievement, AchievementRegistry, Tier};
pub use error::{AchievementError, BoundaryError, GameError, PersistenceError, SettingsError};
pub use game::{Game, GamePhase};
pub use settings::{Rules, Settings};

/// Game configuration constants (defaults for [`Rules`])
pub mod consts {
    /// Grid dimensions
    pub const GAME_WIDTH: i32 = 10;
    pub const GAME_HEIGHT: i32 = 20;

    /// Spawn rate (percentage chance per tick) at level 1
    pub const START_SPAWN_RATE: u32 = 2;
    /// Spawn rate increase per level
    pub const SPAWN_RATE_INCREASE: u32 = 5;
    pub const START_LEVEL: u32 = 1;
    /// Score needed per level (threshold = level * SCORE_THRESHOLD)
    pub const SCORE_THRESHOLD: u64 = 100;

    /// Enemy spawn chance as a fraction of the asteroid chance
    pub const ENEMY_SPAWN_RATE: f64 = 0.5;
    /// Power-up spawn chance as a fraction of the asteroid chance
    pub const POWER_UP_SPAWN_RATE: f64 = 0.25;

    /// Damage dealt to the ship on contact
    pub const ASTEROID_DAMAGE: u32 = 10;
    pub const ENEMY_DAMAGE: u32 = 20;

    /// Ship defaults
    pub const SHIP_START_HEALTH: u32 = 100;
    pub const SHIP_MAX_HEALTH: u32 = 100;

    /// Power-up effects
    pub const HEALTH_POWER_UP_AMOUNT: u32 = 20;
    pub const SHIELD_POWER_UP_SCORE: u64 = 50;

    /// Ticks between periodic diagnostics / achievement reports
    pub const REPORT_INTERVAL_TICKS: u64 = 100;

    /// Achievement mastery targets
    pub const MASTERED_SURVIVAL_SECS: f64 = 120.0;
    pub const MASTERED_ENEMY_HITS: f64 = 20.0;
    pub const MASTERED_ACCURACY: f64 = 0.99;
    /// Shots that must be fired before accuracy counts
    pub const MIN_SHOTS_FOR_ACCURACY: u32 = 10;
}

/// Clamp a progress value into [0, 1], mapping NaN to 0
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
