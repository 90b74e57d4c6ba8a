//! Target spawn scheduler
//!
//! Elapsed time accumulates; every full `spawn_interval` is one spawn
//! opportunity. An opportunity that meets a full cap is dropped, not queued.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameEvent, SessionState};
use super::target::Target;

/// Feed `dt` into the accumulator and spawn as many targets as it allows.
///
/// Returns the number of targets spawned.
pub fn run_spawner(state: &mut SessionState, dt: f32) -> usize {
    let interval = state.profile.spawn_interval;
    state.spawn_accumulator += dt;

    if interval <= 0.0 {
        // Degenerate tuning: top up to the cap once instead of looping forever
        state.spawn_accumulator = 0.0;
        let mut spawned = 0;
        while spawn_target(state).is_some() {
            spawned += 1;
        }
        return spawned;
    }

    let mut spawned = 0;
    while state.spawn_accumulator >= interval {
        if spawn_target(state).is_some() {
            spawned += 1;
        }
        state.spawn_accumulator -= interval;
    }
    spawned
}

/// Spawn one target if under the concurrency cap
pub fn spawn_target(state: &mut SessionState) -> Option<u32> {
    if state.targets.len() >= state.profile.max_concurrent {
        return None;
    }

    let lo = state.profile.min_radius.min(state.profile.max_radius);
    let hi = state.profile.min_radius.max(state.profile.max_radius);
    let radius = state.rng.random_range(lo..=hi);
    let x = random_axis(&mut state.rng, radius, state.config.area.x);
    let y = random_axis(&mut state.rng, radius, state.config.area.y);

    let id = state.next_target_id();
    state
        .targets
        .push(Target::new(id, Vec2::new(x, y), radius, state.clock));
    state.events.push(GameEvent::Spawned { id });
    log::debug!("Spawned target {} r={:.1} at ({:.0}, {:.0})", id, radius, x, y);
    Some(id)
}

/// Uniform coordinate keeping the whole circle inside `[0, extent]`.
/// Centers on the axis when the area is narrower than the circle.
fn random_axis(rng: &mut Pcg32, radius: f32, extent: f32) -> f32 {
    let max = extent - radius;
    if max < radius {
        extent * 0.5
    } else {
        rng.random_range(radius..=max)
    }
}
