//! Game controller
//!
//! Drives the simulation one tick at a time and connects it to the player's
//! commands, the achievement registry and store, and the output sinks.

use crate::achievements::{
    AchievementRegistry, ENEMY_EXTERMINATOR, SHARP_SHOOTER, SURVIVOR,
};
use crate::consts::REPORT_INTERVAL_TICKS;
use crate::error::{AchievementError, GameError};
use crate::persistence::AchievementStore;
use crate::platform::{Command, Frontend, INVALID_INPUT_MESSAGE, parse_command};
use crate::settings::{Rules, Settings};
use crate::sim::{
    Clock, EntityKind, GameEvent, GameState, TickReport, refresh_achievements, tick,
};

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticks advance the world
    Playing,
    /// Ticks are skipped; only the pause key is accepted
    Paused,
    /// Ship destroyed; nothing advances any more
    GameOver,
}

/// One running game
pub struct Game {
    state: GameState,
    achievements: AchievementRegistry,
    store: Box<dyn AchievementStore>,
    clock: Box<dyn Clock>,
    phase: GamePhase,
    verbose: bool,
    /// Names the store already held when the game started
    previously_mastered: Vec<String>,
}

impl Game {
    /// Create a game. The registry must contain the built-in achievements.
    pub fn new(
        rules: Rules,
        seed: u64,
        achievements: AchievementRegistry,
        store: Box<dyn AchievementStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, GameError> {
        rules.validate()?;
        for name in [SURVIVOR, ENEMY_EXTERMINATOR, SHARP_SHOOTER] {
            if !achievements.contains(name) {
                return Err(AchievementError::Unknown(name.to_string()).into());
            }
        }

        let previously_mastered = match store.load_all() {
            Ok(names) => names,
            Err(e) => {
                log::warn!("Could not read achievement log: {e}");
                Vec::new()
            }
        };

        let state = GameState::new(rules, seed, clock.now_millis());
        log::info!(
            "New game: {}x{} grid, seed {seed}",
            rules.grid_width,
            rules.grid_height
        );

        Ok(Self {
            state,
            achievements,
            store,
            clock,
            phase: GamePhase::Playing,
            verbose: false,
            previously_mastered,
        })
    }

    /// Create a game from settings with the default achievements
    pub fn from_settings(
        settings: &Settings,
        store: Box<dyn AchievementStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, GameError> {
        let seed = match settings.seed {
            Some(seed) => seed,
            None => {
                let seed = clock.now_millis();
                log::info!("No seed configured, using {seed}");
                seed
            }
        };
        let mut game = Self::new(
            settings.rules,
            seed,
            AchievementRegistry::with_defaults(),
            store,
            clock,
        )?;
        game.set_verbose(settings.verbose);
        Ok(game)
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn achievements(&self) -> &AchievementRegistry {
        &self.achievements
    }

    pub fn store(&self) -> &dyn AchievementStore {
        self.store.as_ref()
    }

    pub fn previously_mastered(&self) -> &[String] {
        &self.previously_mastered
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// The driver must stop ticking once this is true
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Run one tick. Returns None when paused or over.
    pub fn on_tick(
        &mut self,
        tick_index: u64,
        ui: &mut dyn Frontend,
    ) -> Result<Option<TickReport>, GameError> {
        if self.phase != GamePhase::Playing {
            return Ok(None);
        }

        let report = tick(&mut self.state, tick_index);
        if self.verbose {
            for line in report.events.iter().filter_map(describe_event) {
                ui.log(&line);
            }
        }

        let now = self.clock.now_millis();
        refresh_achievements(&mut self.achievements, &self.state.stats, now)?;
        self.achievements.log_mastered(self.store.as_mut());
        if self.verbose && tick_index % REPORT_INTERVAL_TICKS == 0 {
            for achievement in self.achievements.achievements() {
                ui.log(&achievement.summary());
            }
        }

        self.publish(now, ui);

        if report.game_over {
            self.phase = GamePhase::GameOver;
            ui.log("Game over!");
            for line in self.summary() {
                ui.log(&line);
            }
        }

        Ok(Some(report))
    }

    /// Handle one key press
    pub fn handle_input(&mut self, key: char, ui: &mut dyn Frontend) {
        let command = parse_command(key);
        match self.phase {
            GamePhase::GameOver => return,
            GamePhase::Paused => {
                if command == Some(Command::Pause) {
                    self.toggle_pause(ui);
                }
                return;
            }
            GamePhase::Playing => {}
        }

        match command {
            None => ui.log(INVALID_INPUT_MESSAGE),
            Some(Command::Move(direction)) => match self.state.move_ship(direction) {
                Ok(pos) => {
                    if self.verbose {
                        ui.log(&format!("Ship moved to ({}, {})", pos.x, pos.y));
                    }
                }
                Err(e) => log::warn!("{e}"),
            },
            Some(Command::Fire) => {
                self.state.fire_bullet();
            }
            Some(Command::Pause) => self.toggle_pause(ui),
        }
    }

    /// Switch between playing and paused
    pub fn toggle_pause(&mut self, ui: &mut dyn Frontend) {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                ui.log("Game paused.");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                ui.log("Game unpaused.");
            }
            GamePhase::GameOver => {}
        }
    }

    /// End-of-run report
    pub fn summary(&self) -> Vec<String> {
        let stats = self.state.stats();
        let elapsed = stats.elapsed_seconds(self.clock.now_millis());
        let mut lines = vec![
            format!("Shots Fired: {}", stats.shots_fired()),
            format!("Shots Hit: {}", stats.shots_hit()),
            format!("Enemies Destroyed: {}", stats.shots_hit()),
            format!("Survival Time: {elapsed} seconds"),
        ];
        lines.extend(self.achievements.achievements().iter().map(|a| a.summary()));
        lines
    }

    /// Push stats and the current frame to the sinks
    fn publish(&self, now_millis: u64, ui: &mut dyn Frontend) {
        let ship = self.state.ship();
        let elapsed = self.state.stats().elapsed_seconds(now_millis);
        ui.set_stat("Score", &ship.score.to_string());
        ui.set_stat("Health", &ship.health.to_string());
        ui.set_stat("Level", &self.state.level().to_string());
        ui.set_stat("Time Survived", &format!("{elapsed} seconds"));
        ui.render(&self.state.snapshot());
    }
}

/// Verbose log line for an event, if it warrants one
fn describe_event(event: &GameEvent) -> Option<String> {
    match *event {
        GameEvent::ShipHit { by, damage } => Some(format!(
            "Hit by {}! Health reduced by {damage}.",
            by.name()
        )),
        GameEvent::PowerUpCollected { kind } => Some(format!(
            "PowerUp collected: {}",
            EntityKind::PowerUp(kind).name()
        )),
        GameEvent::EnemyDestroyed { pos } => {
            Some(format!("Enemy destroyed at ({}, {}).", pos.x, pos.y))
        }
        GameEvent::LevelUp { level, spawn_rate } => Some(format!(
            "Level Up! Welcome to Level {level}. Spawn rate increased to {spawn_rate}%."
        )),
        GameEvent::BulletAbsorbed { .. } | GameEvent::Spawned { .. } => None,
    }
}
