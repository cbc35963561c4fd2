//! Demo autopilot
//!
//! Chooses at most one command per tick so headless runs play themselves:
//! dodge whatever is about to land on the ship, shoot enemies that a bullet
//! will actually meet, otherwise drift toward power-ups and then enemies.

use glam::IVec2;

use crate::platform::Command;
use crate::sim::{Direction, Entity, EntityKind, GameState};

/// Pick the next command for the current state, if any
pub fn choose_command(state: &GameState) -> Option<Command> {
    let ship = state.ship().pos;
    let rules = state.rules();
    let entities = state.entities();

    if lands_on(entities, ship) {
        return [Direction::Left, Direction::Right, Direction::Down]
            .into_iter()
            .find(|dir| {
                let target = ship + dir.delta();
                rules.in_bounds(target) && !lands_on(entities, target)
            })
            .map(Command::Move);
    }

    if entities
        .iter()
        .any(|e| e.kind == EntityKind::Enemy && will_meet(ship.y, e, ship.x) && !covered(entities, e))
    {
        return Some(Command::Fire);
    }

    let target = nearest_above(entities, ship, |k| matches!(k, EntityKind::PowerUp(_)))
        .or_else(|| nearest_above(entities, ship, |k| k == EntityKind::Enemy))?;

    let dir = if target.x < ship.x {
        Direction::Left
    } else if target.x > ship.x {
        Direction::Right
    } else {
        return None;
    };
    let next = ship + dir.delta();
    (rules.in_bounds(next) && !lands_on(entities, next)).then_some(Command::Move(dir))
}

/// A hazard will occupy `cell` after the next motion step
fn lands_on(entities: &[Entity], cell: IVec2) -> bool {
    entities
        .iter()
        .any(|e| e.kind.is_hazard() && e.pos + IVec2::new(0, e.kind.step()) == cell)
}

/// A bullet leaving row `from_y` in `column` meets `enemy` on a shared cell.
/// They close two rows per tick, so the gap must be even.
fn will_meet(from_y: i32, enemy: &Entity, column: i32) -> bool {
    let gap = from_y - enemy.pos.y;
    enemy.pos.x == column && gap >= 2 && gap % 2 == 0
}

/// Some bullet already in flight will hit this enemy
fn covered(entities: &[Entity], enemy: &Entity) -> bool {
    entities
        .iter()
        .filter(|e| e.kind == EntityKind::Bullet)
        .any(|b| will_meet(b.pos.y, enemy, b.pos.x))
}

/// Closest matching entity above the ship, by column distance then height
fn nearest_above(
    entities: &[Entity],
    ship: IVec2,
    wanted: impl Fn(EntityKind) -> bool,
) -> Option<IVec2> {
    entities
        .iter()
        .filter(|e| wanted(e.kind) && e.pos.y < ship.y)
        .map(|e| e.pos)
        .min_by_key(|pos| ((pos.x - ship.x).abs(), ship.y - pos.y))
}
