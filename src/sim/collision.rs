//! Collision resolution on the integer grid
//!
//! Two passes over a read-only view of the entities, ship first, then bullets.
//! Everything marked in either pass is removed once at the end.

use std::collections::HashSet;

use super::entity::{Entity, EntityKind, Ship};
use super::state::GameEvent;
use super::stats::StatsTracker;
use crate::settings::Rules;

/// Resolve all collisions for this tick, removing consumed entities
pub fn resolve_collisions(
    ship: &mut Ship,
    entities: &mut Vec<Entity>,
    stats: &mut StatsTracker,
    rules: &Rules,
    events: &mut Vec<GameEvent>,
) {
    let mut to_remove = HashSet::new();

    ship_pass(ship, entities, rules, &mut to_remove, events);
    bullet_pass(entities, stats, &mut to_remove, events);

    if !to_remove.is_empty() {
        entities.retain(|e| !to_remove.contains(&e.id));
    }
}

/// Apply contact effects of everything sharing the ship's cell
fn ship_pass(
    ship: &mut Ship,
    entities: &[Entity],
    rules: &Rules,
    to_remove: &mut HashSet<u32>,
    events: &mut Vec<GameEvent>,
) {
    for entity in entities {
        if entity.pos != ship.pos {
            continue;
        }
        match entity.kind {
            EntityKind::Ship | EntityKind::Bullet => continue,
            EntityKind::PowerUp(kind) => {
                kind.apply(ship, rules);
                events.push(GameEvent::PowerUpCollected { kind });
            }
            EntityKind::Asteroid | EntityKind::Enemy => {
                let damage = entity.kind.contact_damage(rules);
                ship.take_damage(damage);
                events.push(GameEvent::ShipHit {
                    by: entity.kind,
                    damage,
                });
            }
        }
        to_remove.insert(entity.id);
    }
}

/// Match each bullet with the first hazard on its cell
fn bullet_pass(
    entities: &[Entity],
    stats: &mut StatsTracker,
    to_remove: &mut HashSet<u32>,
    events: &mut Vec<GameEvent>,
) {
    for bullet in entities.iter().filter(|e| e.kind == EntityKind::Bullet) {
        let Some(target) = entities
            .iter()
            .find(|other| other.kind.is_hazard() && other.pos == bullet.pos)
        else {
            continue;
        };

        to_remove.insert(bullet.id);
        if target.kind == EntityKind::Enemy {
            to_remove.insert(target.id);
            stats.record_shot_hit();
            events.push(GameEvent::EnemyDestroyed { pos: target.pos });
        } else {
            events.push(GameEvent::BulletAbsorbed { pos: target.pos });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::PowerUpKind;
    use glam::IVec2;

    fn setup() -> (Ship, StatsTracker, Rules) {
        let rules = Rules::default();
        let mut ship = Ship::new(&rules);
        ship.pos = IVec2::new(5, 10);
        (ship, StatsTracker::new(0), rules)
    }

    #[test]
    fn test_asteroid_on_ship() {
        let (mut ship, mut stats, rules) = setup();
        let mut entities = vec![Entity::new(1, EntityKind::Asteroid, IVec2::new(5, 10))];
        let mut events = Vec::new();

        resolve_collisions(&mut ship, &mut entities, &mut stats, &rules, &mut events);

        assert_eq!(ship.health, 90);
        assert!(entities.is_empty());
        assert_eq!(stats, StatsTracker::new(0));
        assert_eq!(
            events,
            vec![GameEvent::ShipHit { by: EntityKind::Asteroid, damage: 10 }]
        );
    }

    #[test]
    fn test_enemy_on_ship_deals_more_damage() {
        let (mut ship, mut stats, rules) = setup();
        let mut entities = vec![
            Entity::new(1, EntityKind::Enemy, IVec2::new(5, 10)),
            Entity::new(2, EntityKind::Asteroid, IVec2::new(5, 11)),
        ];
        let mut events = Vec::new();

        resolve_collisions(&mut ship, &mut entities, &mut stats, &rules, &mut events);

        assert_eq!(ship.health, 80);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].id, 2);
    }

    #[test]
    fn test_power_up_consumed_and_bullet_ignored_by_ship() {
        let (mut ship, mut stats, rules) = setup();
        let mut entities = vec![
            Entity::new(1, EntityKind::PowerUp(PowerUpKind::Shield), IVec2::new(5, 10)),
            Entity::new(2, EntityKind::Bullet, IVec2::new(5, 10)),
        ];
        let mut events = Vec::new();

        resolve_collisions(&mut ship, &mut entities, &mut stats, &rules, &mut events);

        assert_eq!(ship.score, rules.shield_power_up_score);
        assert_eq!(ship.health, 100);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].kind, EntityKind::Bullet);
    }

    #[test]
    fn test_each_entity_triggers_once() {
        let (mut ship, mut stats, rules) = setup();
        let mut entities = vec![
            Entity::new(1, EntityKind::Asteroid, IVec2::new(5, 10)),
            Entity::new(2, EntityKind::Asteroid, IVec2::new(5, 10)),
        ];
        let mut events = Vec::new();

        resolve_collisions(&mut ship, &mut entities, &mut stats, &rules, &mut events);

        assert_eq!(ship.health, 80);
        assert!(entities.is_empty());
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_bullet_destroys_enemy() {
        let (mut ship, mut stats, rules) = setup();
        let mut entities = vec![
            Entity::new(1, EntityKind::Bullet, IVec2::new(3, 4)),
            Entity::new(2, EntityKind::Enemy, IVec2::new(3, 4)),
        ];
        let mut events = Vec::new();

        resolve_collisions(&mut ship, &mut entities, &mut stats, &rules, &mut events);

        assert!(entities.is_empty());
        assert_eq!(stats.shots_hit(), 1);
        assert_eq!(events, vec![GameEvent::EnemyDestroyed { pos: IVec2::new(3, 4) }]);
    }

    #[test]
    fn test_asteroid_absorbs_bullet() {
        let (mut ship, mut stats, rules) = setup();
        let mut entities = vec![
            Entity::new(1, EntityKind::Asteroid, IVec2::new(3, 4)),
            Entity::new(2, EntityKind::Bullet, IVec2::new(3, 4)),
        ];
        let mut events = Vec::new();

        resolve_collisions(&mut ship, &mut entities, &mut stats, &rules, &mut events);

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].kind, EntityKind::Asteroid);
        assert_eq!(stats.shots_hit(), 0);
    }

    #[test]
    fn test_bullet_takes_first_target_in_order() {
        let (mut ship, mut stats, rules) = setup();
        let mut entities = vec![
            Entity::new(1, EntityKind::Bullet, IVec2::new(2, 2)),
            Entity::new(2, EntityKind::Asteroid, IVec2::new(2, 2)),
            Entity::new(3, EntityKind::Enemy, IVec2::new(2, 2)),
        ];
        let mut events = Vec::new();

        resolve_collisions(&mut ship, &mut entities, &mut stats, &rules, &mut events);

        // Asteroid came first: bullet absorbed, enemy survives
        let ids: Vec<u32> = entities.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(stats.shots_hit(), 0);
    }

    #[test]
    fn test_power_ups_do_not_stop_bullets() {
        let (mut ship, mut stats, rules) = setup();
        let mut entities = vec![
            Entity::new(1, EntityKind::Bullet, IVec2::new(1, 1)),
            Entity::new(2, EntityKind::PowerUp(PowerUpKind::Health), IVec2::new(1, 1)),
        ];
        let mut events = Vec::new();

        resolve_collisions(&mut ship, &mut entities, &mut stats, &rules, &mut events);

        assert_eq!(entities.len(), 2);
        assert!(events.is_empty());
    }
}
