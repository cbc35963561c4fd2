//! Discrete simulation tick
//!
//! Core game loop that advances the world one step deterministically.

use super::collision::resolve_collisions;
use super::state::{GameEvent, GameState};
use crate::consts::REPORT_INTERVAL_TICKS;

/// What a tick produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Entities dropped for leaving the grid
    pub out_of_bounds: usize,
    /// Ship health reached zero; the driver should stop ticking
    pub game_over: bool,
}

/// Advance the game state by one step.
///
/// `tick_index` is the driver's counter and only paces diagnostics.
pub fn tick(state: &mut GameState, tick_index: u64) -> TickReport {
    let rules = state.rules;
    let mut events = Vec::new();

    state.time_ticks += 1;

    // Motion
    for entity in &mut state.entities {
        entity.advance();
    }

    // Nothing off the grid may reach collision resolution
    let before = state.entities.len();
    state.entities.retain(|e| rules.in_bounds(e.pos));
    let out_of_bounds = before - state.entities.len();

    resolve_collisions(
        &mut state.ship,
        &mut state.entities,
        &mut state.stats,
        &rules,
        &mut events,
    );

    let requests = state.spawner.spawn_pass(
        state.progression.spawn_rate,
        &rules,
        state.ship.pos,
        &state.entities,
    );
    for request in requests {
        state.add_entity(request.kind, request.pos);
        events.push(GameEvent::Spawned {
            kind: request.kind,
            pos: request.pos,
        });
    }

    if state.progression.try_level_up(state.ship.score, &rules) {
        let level = state.progression.level;
        let spawn_rate = state.progression.spawn_rate;
        log::info!("Level {level} reached, spawn rate {spawn_rate}%");
        events.push(GameEvent::LevelUp { level, spawn_rate });
    }

    if tick_index % REPORT_INTERVAL_TICKS == 0 {
        log::debug!(
            "tick {tick_index}: {} entities, health {}, score {}, level {}",
            state.entities.len(),
            state.ship.health,
            state.ship.score,
            state.progression.level
        );
    }

    let game_over = state.is_game_over();
    if game_over {
        log::info!("Ship destroyed after {} ticks", state.time_ticks);
    }

    TickReport {
        events,
        out_of_bounds,
        game_over,
    }
}
