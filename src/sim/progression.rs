//! Leveling and achievement progress
//!
//! Progress values are derived from the stats tracker on every call, never
//! accumulated, so repeated calls with the same tracker state agree.

use super::stats::StatsTracker;
use crate::achievements::{AchievementRegistry, ENEMY_EXTERMINATOR, SHARP_SHOOTER, SURVIVOR};
use crate::clamp_unit;
use crate::consts::*;
use crate::error::AchievementError;
use crate::settings::Rules;

/// Current level and the spawn rate it implies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    pub level: u32,
    /// Asteroid spawn chance per tick, in percent
    pub spawn_rate: u32,
}

impl Progression {
    pub fn new(rules: &Rules) -> Self {
        Self {
            level: rules.start_level,
            spawn_rate: rules.start_spawn_rate,
        }
    }

    /// Score required to leave the current level
    pub fn next_threshold(&self, rules: &Rules) -> u64 {
        (self.level as u64).saturating_mul(rules.score_threshold)
    }

    /// Advance at most one level if the score has reached the threshold
    pub fn try_level_up(&mut self, score: u64, rules: &Rules) -> bool {
        if score < self.next_threshold(rules) {
            return false;
        }
        self.level += 1;
        self.spawn_rate = self.spawn_rate.saturating_add(rules.spawn_rate_increase);
        true
    }
}

/// Survivor: seconds alive over the mastery time
pub fn survivor_progress(stats: &StatsTracker, now_millis: u64) -> f64 {
    clamp_unit(stats.elapsed_seconds(now_millis) as f64 / MASTERED_SURVIVAL_SECS)
}

/// Enemy Exterminator: enemies shot over the mastery count
pub fn exterminator_progress(stats: &StatsTracker) -> f64 {
    clamp_unit(stats.shots_hit() as f64 / MASTERED_ENEMY_HITS)
}

/// Sharp Shooter: accuracy relative to the mastery accuracy, once enough shots are fired
pub fn sharp_shooter_progress(stats: &StatsTracker) -> f64 {
    if stats.shots_fired() <= MIN_SHOTS_FOR_ACCURACY {
        return 0.0;
    }
    clamp_unit((stats.accuracy() / MASTERED_ACCURACY).min(1.0))
}

/// Overwrite the built-in achievements' progress from the tracker
pub fn refresh_achievements(
    registry: &mut AchievementRegistry,
    stats: &StatsTracker,
    now_millis: u64,
) -> Result<(), AchievementError> {
    registry.update(SURVIVOR, survivor_progress(stats, now_millis))?;
    registry.update(ENEMY_EXTERMINATOR, exterminator_progress(stats))?;
    registry.update(SHARP_SHOOTER, sharp_shooter_progress(stats))?;
    Ok(())
}
