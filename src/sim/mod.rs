//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete integer-grid steps only
//! - Seeded RNG only, owned by the spawner
//! - Stable iteration order (insertion order of entities)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod entity;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod stats;
pub mod tick;

pub use clock::{Clock, ManualClock, SystemClock};
pub use collision::resolve_collisions;
pub use entity::{Direction, Entity, EntityKind, PowerUpKind, SHIP_ID, Ship};
pub use progression::{Progression, refresh_achievements};
pub use spawner::{SpawnRequest, SpawnRng, Spawner};
pub use state::{GameEvent, GameState};
pub use stats::StatsTracker;
pub use tick::{TickReport, tick};
