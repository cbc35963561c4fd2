//! Entity model: the ship and everything that moves on the grid
//!
//! Entity behavior is a closed enum with one dispatch function per rule
//! (motion, contact effect, glyph), so every match over kinds is exhaustive.

use std::fmt;

use glam::IVec2;

use crate::error::BoundaryError;
use crate::settings::Rules;

/// Entity id reserved for the ship in render snapshots
pub const SHIP_ID: u32 = 0;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Awards bonus score
    Shield,
    /// Restores health up to the cap
    Health,
}

impl PowerUpKind {
    /// Apply this power-up to the ship
    pub fn apply(self, ship: &mut Ship, rules: &Rules) {
        match self {
            PowerUpKind::Shield => ship.add_score(rules.shield_power_up_score),
            PowerUpKind::Health => ship.heal(rules.health_power_up_amount, rules.ship_max_health),
        }
    }
}

/// Entity variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ship,
    Bullet,
    Asteroid,
    Enemy,
    PowerUp(PowerUpKind),
}

impl EntityKind {
    /// Vertical displacement per tick (y grows downward)
    pub fn step(self) -> i32 {
        match self {
            EntityKind::Ship => 0,
            EntityKind::Bullet => -1,
            EntityKind::Asteroid | EntityKind::Enemy | EntityKind::PowerUp(_) => 1,
        }
    }

    /// Hazards damage the ship and can be shot at
    pub fn is_hazard(self) -> bool {
        matches!(self, EntityKind::Asteroid | EntityKind::Enemy)
    }

    /// Damage dealt to the ship on contact
    pub fn contact_damage(self, rules: &Rules) -> u32 {
        match self {
            EntityKind::Asteroid => rules.asteroid_damage,
            EntityKind::Enemy => rules.enemy_damage,
            EntityKind::Ship | EntityKind::Bullet | EntityKind::PowerUp(_) => 0,
        }
    }

    /// Single-character sprite for text renderers
    pub fn glyph(self) -> char {
        match self {
            EntityKind::Ship => 'A',
            EntityKind::Bullet => '|',
            EntityKind::Asteroid => 'O',
            EntityKind::Enemy => 'V',
            EntityKind::PowerUp(PowerUpKind::Shield) => 'S',
            EntityKind::PowerUp(PowerUpKind::Health) => '+',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Ship => "ship",
            EntityKind::Bullet => "bullet",
            EntityKind::Asteroid => "asteroid",
            EntityKind::Enemy => "enemy",
            EntityKind::PowerUp(PowerUpKind::Shield) => "shield power-up",
            EntityKind::PowerUp(PowerUpKind::Health) => "health power-up",
        }
    }
}

/// A tracked grid entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: IVec2,
}

impl Entity {
    pub fn new(id: u32, kind: EntityKind, pos: IVec2) -> Self {
        Self { id, kind, pos }
    }

    /// Apply one tick of motion
    pub fn advance(&mut self) {
        self.pos.y += self.kind.step();
    }
}

/// Ship movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub pos: IVec2,
    pub health: u32,
    pub score: u64,
}

impl Ship {
    pub fn new(rules: &Rules) -> Self {
        Self {
            pos: rules.ship_start(),
            health: rules.ship_start_health,
            score: 0,
        }
    }

    /// Move one cell; the ship stays put if the target is off the grid
    pub fn move_in(&mut self, direction: Direction, rules: &Rules) -> Result<IVec2, BoundaryError> {
        let target = self.pos + direction.delta();
        if !rules.in_bounds(target) {
            return Err(BoundaryError { direction });
        }
        self.pos = target;
        Ok(target)
    }

    /// Reduce health, flooring at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restore health, capped at `max`
    pub fn heal(&mut self, amount: u32, max: u32) {
        self.health = self.health.saturating_add(amount).min(max.max(self.health));
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// The ship as a render entity
    pub fn as_entity(&self) -> Entity {
        Entity::new(SHIP_ID, EntityKind::Ship, self.pos)
    }
}
