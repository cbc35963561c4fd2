//! Game state and core simulation types
//!
//! The state owns the ship, the live entities, the stats tracker and the
//! spawner (and with it the only RNG). Outside the crate it is read-only;
//! mutation goes through `fire_bullet`, `move_ship` and `tick`.

use glam::IVec2;

use super::entity::{Direction, Entity, EntityKind, PowerUpKind, Ship};
use super::progression::Progression;
use super::spawner::Spawner;
use super::stats::StatsTracker;
use crate::error::BoundaryError;
use crate::settings::Rules;

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A hazard collided with the ship
    ShipHit { by: EntityKind, damage: u32 },
    /// The ship picked up a power-up
    PowerUpCollected { kind: PowerUpKind },
    /// A bullet destroyed an enemy
    EnemyDestroyed { pos: IVec2 },
    /// An asteroid swallowed a bullet
    BulletAbsorbed { pos: IVec2 },
    /// The spawner added an entity
    Spawned { kind: EntityKind, pos: IVec2 },
    /// Score crossed the level threshold
    LevelUp { level: u32, spawn_rate: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) rules: Rules,
    /// Spawner seed, kept for replays
    pub(crate) seed: u64,
    pub(crate) ship: Ship,
    /// Live entities in insertion order (the ship is not stored here)
    pub(crate) entities: Vec<Entity>,
    pub(crate) progression: Progression,
    pub(crate) stats: StatsTracker,
    /// Simulation ticks completed
    pub(crate) time_ticks: u64,
    pub(crate) spawner: Spawner,
    /// Next entity ID (0 is the ship)
    next_id: u32,
}

impl GameState {
    /// Create a new game with the given rules and spawner seed
    pub fn new(rules: Rules, seed: u64, start_millis: u64) -> Self {
        Self {
            rules,
            seed,
            ship: Ship::new(&rules),
            entities: Vec::new(),
            progression: Progression::new(&rules),
            stats: StatsTracker::new(start_millis),
            time_ticks: 0,
            spawner: Spawner::seeded(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Track a new entity, returning its id
    pub fn add_entity(&mut self, kind: EntityKind, pos: IVec2) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Entity::new(id, kind, pos));
        id
    }

    /// Fire a bullet from the ship's cell and count the shot
    pub fn fire_bullet(&mut self) -> u32 {
        let pos = self.ship.pos;
        self.stats.record_shot_fired();
        self.add_entity(EntityKind::Bullet, pos)
    }

    /// Move the ship one cell; off-grid moves leave it where it is
    pub fn move_ship(&mut self, direction: Direction) -> Result<IVec2, BoundaryError> {
        self.ship.move_in(direction, &self.rules)
    }

    pub fn is_game_over(&self) -> bool {
        self.ship.is_destroyed()
    }

    /// Entities in render order with the ship last
    pub fn snapshot(&self) -> Vec<Entity> {
        let mut frame = Vec::with_capacity(self.entities.len() + 1);
        frame.extend_from_slice(&self.entities);
        frame.push(self.ship.as_entity());
        frame
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn spawn_rate(&self) -> u32 {
        self.progression.spawn_rate
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}
