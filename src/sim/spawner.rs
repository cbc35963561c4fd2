//! Seeded spawning of hazards and power-ups
//!
//! A spawn pass always rolls the asteroid, enemy and power-up checks in that
//! order. Column and power-up-type draws only happen for attempted spawns, so
//! the same seed and world always produce the same draw sequence.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityKind, PowerUpKind};
use crate::settings::Rules;

/// Random draws the spawner needs
pub trait SpawnRng {
    /// Uniform integer in `[0, bound)`
    fn next_below(&mut self, bound: u32) -> u32;
    fn next_bool(&mut self) -> bool;
}

impl SpawnRng for Pcg32 {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.random_range(0..bound)
    }

    fn next_bool(&mut self) -> bool {
        self.random()
    }
}

/// An entity the spawner wants added this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRequest {
    pub kind: EntityKind,
    pub pos: IVec2,
}

/// Owns the run's RNG; nothing else draws from it
#[derive(Debug, Clone)]
pub struct Spawner<R: SpawnRng = Pcg32> {
    rng: R,
}

impl Spawner<Pcg32> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: SpawnRng> Spawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Run one spawn pass against the current world
    pub fn spawn_pass(
        &mut self,
        spawn_rate: u32,
        rules: &Rules,
        ship_pos: IVec2,
        entities: &[Entity],
    ) -> Vec<SpawnRequest> {
        let rate = spawn_rate as f64;
        let mut used = Vec::with_capacity(3);
        let mut spawned = Vec::new();

        if self.roll() < rate {
            if let Some(x) = self.pick_column(&mut used, rules.grid_width, entities) {
                place(EntityKind::Asteroid, x, ship_pos, &mut spawned);
            }
        }

        if self.roll() < rate * rules.enemy_spawn_factor {
            if let Some(x) = self.pick_column(&mut used, rules.grid_width, entities) {
                place(EntityKind::Enemy, x, ship_pos, &mut spawned);
            }
        }

        if self.roll() < rate * rules.power_up_spawn_factor {
            if let Some(x) = self.pick_column(&mut used, rules.grid_width, entities) {
                let kind = if self.rng.next_bool() {
                    PowerUpKind::Shield
                } else {
                    PowerUpKind::Health
                };
                place(EntityKind::PowerUp(kind), x, ship_pos, &mut spawned);
            }
        }

        spawned
    }

    /// Percentage roll in [0, 100)
    fn roll(&mut self) -> f64 {
        self.rng.next_below(100) as f64
    }

    /// Draw columns until one is unused this pass and empty on the top row.
    /// Returns None without drawing when every column is taken.
    fn pick_column(&mut self, used: &mut Vec<i32>, width: i32, entities: &[Entity]) -> Option<i32> {
        let is_free = |x: i32| !used.contains(&x) && !occupied_top(x, entities);
        if !(0..width).any(is_free) {
            log::debug!("spawn skipped: no free column on the top row");
            return None;
        }

        loop {
            let x = self.rng.next_below(width as u32) as i32;
            if !used.contains(&x) && !occupied_top(x, entities) {
                used.push(x);
                return Some(x);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn rng(&self) -> &R {
        &self.rng
    }
}

fn occupied_top(x: i32, entities: &[Entity]) -> bool {
    entities.iter().any(|e| e.pos == IVec2::new(x, 0))
}

/// Queue a spawn unless it would land on the ship
fn place(kind: EntityKind, x: i32, ship_pos: IVec2, spawned: &mut Vec<SpawnRequest>) {
    let pos = IVec2::new(x, 0);
    if pos == ship_pos {
        log::debug!("{} spawn at column {x} suppressed by ship", kind.name());
        return;
    }
    spawned.push(SpawnRequest { kind, pos });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// A recorded draw
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Draw {
        Int(u32),
        Bool,
    }

    /// Replays scripted values and records every draw made
    #[derive(Debug, Default)]
    pub struct ScriptedRng {
        ints: VecDeque<u32>,
        bools: VecDeque<bool>,
        pub draws: Vec<Draw>,
    }

    impl ScriptedRng {
        pub fn new(ints: &[u32], bools: &[bool]) -> Self {
            Self {
                ints: ints.iter().copied().collect(),
                bools: bools.iter().copied().collect(),
                draws: Vec::new(),
            }
        }

        pub fn int_draws(&self) -> usize {
            self.draws.iter().filter(|d| matches!(d, Draw::Int(_))).count()
        }

        pub fn bool_draws(&self) -> usize {
            self.draws.iter().filter(|d| matches!(d, Draw::Bool)).count()
        }
    }

    impl SpawnRng for ScriptedRng {
        fn next_below(&mut self, bound: u32) -> u32 {
            self.draws.push(Draw::Int(bound));
            let value = self.ints.pop_front().expect("script ran out of ints");
            assert!(value < bound, "scripted {value} outside [0, {bound})");
            value
        }

        fn next_bool(&mut self) -> bool {
            self.draws.push(Draw::Bool);
            self.bools.pop_front().expect("script ran out of bools")
        }
    }

    fn ship() -> IVec2 {
        Rules::default().ship_start()
    }

    #[test]
    fn test_nothing_spawns_when_all_checks_fail() {
        // spawn rate 2: asteroid roll 50, enemy roll 1 (>= 1.0), power-up roll 1 (>= 0.5)
        let rules = Rules::default();
        let mut spawner = Spawner::new(ScriptedRng::new(&[50, 1, 1], &[]));
        let spawned = spawner.spawn_pass(2, &rules, ship(), &[]);

        assert!(spawned.is_empty());
        assert_eq!(spawner.rng().int_draws(), 3);
        assert_eq!(spawner.rng().bool_draws(), 0);
        assert_eq!(spawner.rng().draws, vec![Draw::Int(100); 3]);
    }

    #[test]
    fn test_full_pass_draw_order() {
        let rules = Rules::default();
        let script = [0, 3, 0, 7, 0, 1];
        let mut spawner = Spawner::new(ScriptedRng::new(&script, &[true]));
        let spawned = spawner.spawn_pass(100, &rules, ship(), &[]);

        let w = rules.grid_width as u32;
        assert_eq!(
            spawner.rng().draws,
            vec![
                Draw::Int(100),
                Draw::Int(w),
                Draw::Int(100),
                Draw::Int(w),
                Draw::Int(100),
                Draw::Int(w),
                Draw::Bool,
            ]
        );
        assert_eq!(
            spawned,
            vec![
                SpawnRequest { kind: EntityKind::Asteroid, pos: IVec2::new(3, 0) },
                SpawnRequest { kind: EntityKind::Enemy, pos: IVec2::new(7, 0) },
                SpawnRequest {
                    kind: EntityKind::PowerUp(PowerUpKind::Shield),
                    pos: IVec2::new(1, 0)
                },
            ]
        );
    }

    #[test]
    fn test_false_bool_selects_health() {
        let rules = Rules::default();
        // Only the power-up check passes
        let mut spawner = Spawner::new(ScriptedRng::new(&[99, 99, 0, 4], &[false]));
        let spawned = spawner.spawn_pass(50, &rules, ship(), &[]);
        assert_eq!(
            spawned,
            vec![SpawnRequest {
                kind: EntityKind::PowerUp(PowerUpKind::Health),
                pos: IVec2::new(4, 0)
            }]
        );
        assert_eq!(spawner.rng().int_draws(), 4);
    }

    #[test]
    fn test_enemy_threshold_is_half_rate() {
        let rules = Rules::default();
        // rate 10: enemy needs roll < 5
        let mut spawner = Spawner::new(ScriptedRng::new(&[99, 5, 99], &[]));
        assert!(spawner.spawn_pass(10, &rules, ship(), &[]).is_empty());

        let mut spawner = Spawner::new(ScriptedRng::new(&[99, 4, 2, 99], &[]));
        let spawned = spawner.spawn_pass(10, &rules, ship(), &[]);
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].kind, EntityKind::Enemy);
    }

    #[test]
    fn test_duplicate_columns_are_redrawn() {
        let rules = Rules::default();
        let existing = [Entity::new(1, EntityKind::Bullet, IVec2::new(6, 0))];
        // Asteroid takes column 2; enemy draws 2 (used), 6 (occupied), then 8
        let mut spawner = Spawner::new(ScriptedRng::new(&[0, 2, 0, 2, 6, 8, 99], &[]));
        let spawned = spawner.spawn_pass(50, &rules, ship(), &existing);

        let columns: Vec<i32> = spawned.iter().map(|s| s.pos.x).collect();
        assert_eq!(columns, vec![2, 8]);
        assert_eq!(spawner.rng().int_draws(), 7);
    }

    #[test]
    fn test_ship_cell_suppresses_spawn_but_keeps_draws() {
        let rules = Rules::default();
        let ship_pos = IVec2::new(4, 0);
        // Power-up lands on the ship: type is still drawn, nothing spawns
        let mut spawner = Spawner::new(ScriptedRng::new(&[99, 99, 0, 4], &[true]));
        let spawned = spawner.spawn_pass(50, &rules, ship_pos, &[]);
        assert!(spawned.is_empty());
        assert_eq!(spawner.rng().int_draws(), 4);
        assert_eq!(spawner.rng().bool_draws(), 1);
    }

    #[test]
    fn test_suppressed_column_still_counts_as_used() {
        let rules = Rules::default();
        let ship_pos = IVec2::new(4, 0);
        // Asteroid draws the ship's column and is dropped; the enemy then
        // draws 4 again and must redraw to 6
        let mut spawner = Spawner::new(ScriptedRng::new(&[0, 4, 0, 4, 6, 99], &[]));
        let spawned = spawner.spawn_pass(50, &rules, ship_pos, &[]);

        assert_eq!(
            spawned,
            vec![SpawnRequest { kind: EntityKind::Enemy, pos: IVec2::new(6, 0) }]
        );
        assert_eq!(spawner.rng().int_draws(), 6);
        assert_eq!(spawner.rng().bool_draws(), 0);
    }

    #[test]
    fn test_full_top_row_skips_column_draw() {
        let rules = Rules::default();
        let existing: Vec<Entity> = (0..rules.grid_width)
            .map(|x| Entity::new(x as u32 + 1, EntityKind::Asteroid, IVec2::new(x, 0)))
            .collect();
        let mut spawner = Spawner::new(ScriptedRng::new(&[0, 0, 0], &[]));
        let spawned = spawner.spawn_pass(100, &rules, ship(), &existing);
        assert!(spawned.is_empty());
        assert_eq!(spawner.rng().int_draws(), 3);
        assert_eq!(spawner.rng().bool_draws(), 0);
    }

    #[test]
    fn test_seeded_spawner_is_reproducible() {
        let rules = Rules::default();
        let mut a = Spawner::seeded(7);
        let mut b = Spawner::seeded(7);
        for _ in 0..200 {
            assert_eq!(
                a.spawn_pass(60, &rules, ship(), &[]),
                b.spawn_pass(60, &rules, ship(), &[])
            );
        }
    }
}
