//! Achievement registry
//!
//! Achievements are looked up by unique name. Each one that reaches full
//! progress is written to the achievement store at most once per run.

use std::collections::HashSet;
use std::fmt;

use crate::clamp_unit;
use crate::error::AchievementError;
use crate::persistence::AchievementStore;

pub const SURVIVOR: &str = "Survivor";
pub const ENEMY_EXTERMINATOR: &str = "Enemy Exterminator";
pub const SHARP_SHOOTER: &str = "Sharp Shooter";

/// Progress bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Novice,
    Expert,
    Master,
}

impl Tier {
    pub fn from_progress(progress: f64) -> Self {
        if progress < 0.5 {
            Tier::Novice
        } else if progress < 0.999 {
            Tier::Expert
        } else {
            Tier::Master
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Novice => "Novice",
            Tier::Expert => "Expert",
            Tier::Master => "Master",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named progress tracker
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    name: String,
    description: String,
    /// Always within [0, 1]
    progress: f64,
}

impl Achievement {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            progress: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Set progress, clamped into [0, 1]
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = clamp_unit(progress);
    }

    pub fn tier(&self) -> Tier {
        Tier::from_progress(self.progress)
    }

    pub fn is_mastered(&self) -> bool {
        self.progress >= 1.0
    }

    /// One-line report, e.g. "Survivor - Survive for 2 minutes (50% complete, Tier: Expert)"
    pub fn summary(&self) -> String {
        format!(
            "{} - {} ({:.0}% complete, Tier: {})",
            self.name,
            self.description,
            self.progress * 100.0,
            self.tier()
        )
    }
}

/// All achievements for a run, in registration order
#[derive(Debug, Clone, Default)]
pub struct AchievementRegistry {
    achievements: Vec<Achievement>,
    /// Names already handed to the store this run
    logged: HashSet<String>,
}

impl AchievementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the three built-in achievements
    pub fn with_defaults() -> Self {
        Self {
            achievements: default_achievements(),
            logged: HashSet::new(),
        }
    }

    pub fn register(&mut self, achievement: Achievement) -> Result<(), AchievementError> {
        if self.contains(achievement.name()) {
            return Err(AchievementError::Duplicate(achievement.name.clone()));
        }
        self.achievements.push(achievement);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.achievements.iter().any(|a| a.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.name == name)
    }

    /// Overwrite an achievement's progress
    pub fn update(&mut self, name: &str, progress: f64) -> Result<(), AchievementError> {
        let achievement = self
            .achievements
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| AchievementError::Unknown(name.to_string()))?;
        achievement.set_progress(progress);
        Ok(())
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn is_logged(&self, name: &str) -> bool {
        self.logged.contains(name)
    }

    /// Persist every newly mastered achievement, returning their names.
    ///
    /// A failed save is logged and not retried this run.
    pub fn log_mastered(&mut self, store: &mut dyn AchievementStore) -> Vec<String> {
        let mut newly = Vec::new();
        for achievement in &self.achievements {
            if !achievement.is_mastered() || self.logged.contains(&achievement.name) {
                continue;
            }
            match store.save(&achievement.name) {
                Ok(()) => log::info!("Achievement mastered: {}", achievement.name),
                Err(e) => log::warn!("Could not record achievement {}: {e}", achievement.name),
            }
            self.logged.insert(achievement.name.clone());
            newly.push(achievement.name.clone());
        }
        newly
    }
}

/// The built-in achievements tracked by the game controller
pub fn default_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(SURVIVOR, "Survive for 2 minutes"),
        Achievement::new(ENEMY_EXTERMINATOR, "Destroy 20 enemies"),
        Achievement::new(SHARP_SHOOTER, "Achieve 99% accuracy"),
    ]
}
