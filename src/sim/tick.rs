//! Variable timestep session tick
//!
//! Order per tick: clock, spawn, expiry sweep, effects.

use super::effects::advance_effects;
use super::spawn::run_spawner;
use super::state::{GameEvent, GamePhase, SessionState};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// State advanced; a render pass should follow
    Advanced,
    /// Time ran out on this tick
    Ended,
    /// Session was not running, nothing changed
    Skipped,
}

/// Clamp a raw frame delta into `[0, max]`; non-finite deltas count as 0
#[inline]
pub fn clamp_delta(dt: f32, max: f32) -> f32 {
    if dt.is_finite() { dt.clamp(0.0, max.max(0.0)) } else { 0.0 }
}

/// Advance the session by `dt` seconds
pub fn tick(state: &mut SessionState, dt: f32) -> TickOutcome {
    if state.phase != GamePhase::Running {
        return TickOutcome::Skipped;
    }

    let dt = clamp_delta(dt, state.config.max_frame_delta);

    state.time_remaining -= dt;
    if state.time_remaining <= 0.0 {
        state.time_remaining = 0.0;
        state.phase = GamePhase::Ended;
        state.events.push(GameEvent::Ended);
        log::info!(
            "Session ended: score={} hits={}/{} escaped={}",
            state.score,
            state.hits,
            state.shots,
            state.escaped
        );
        return TickOutcome::Ended;
    }

    state.clock += dt;

    run_spawner(state, dt);
    sweep_expired(state);
    advance_effects(&mut state.effects, dt);

    TickOutcome::Advanced
}

/// Remove targets that outlived the lifespan; returns how many escaped
pub fn sweep_expired(state: &mut SessionState) -> u32 {
    let now = state.clock;
    let lifespan = state.profile.target_lifespan;
    let mut escaped = Vec::new();

    state.targets.retain(|t| {
        if t.is_expired(now, lifespan) {
            escaped.push(t.id);
            false
        } else {
            true
        }
    });

    for &id in &escaped {
        log::debug!("Target {} escaped", id);
        state.events.push(GameEvent::Escaped { id });
    }
    let count = escaped.len() as u32;
    state.escaped += count;
    count
}

/// Running <-> Paused. Returns true if the phase changed.
pub fn toggle_pause(state: &mut SessionState) -> bool {
    match state.phase {
        GamePhase::Running => {
            state.phase = GamePhase::Paused;
            true
        }
        GamePhase::Paused => {
            state.phase = GamePhase::Running;
            true
        }
        GamePhase::Idle | GamePhase::Ended => false,
    }
}

/// Force Running -> Paused (tab hidden, focus lost). Never resumes.
pub fn force_pause(state: &mut SessionState) -> bool {
    if state.phase == GamePhase::Running {
        state.phase = GamePhase::Paused;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::difficulty::{Difficulty, DifficultyProfile};
    use crate::sim::scoring::{ClickOutcome, click};
    use crate::sim::state::SessionConfig;
    use crate::sim::target::Target;
    use glam::Vec2;
    use proptest::prelude::*;

    fn session_with(profile: DifficultyProfile, max_frame_delta: f32) -> SessionState {
        let config = SessionConfig {
            max_frame_delta,
            ..Default::default()
        };
        SessionState::new(config, profile, 12345)
    }

    #[test]
    fn test_delta_is_clamped() {
        assert_eq!(clamp_delta(1.0, 0.05), 0.05);
        assert_eq!(clamp_delta(-0.3, 0.05), 0.0);
        assert_eq!(clamp_delta(f32::NAN, 0.05), 0.0);
        assert_eq!(clamp_delta(0.016, 0.05), 0.016);

        let mut state = session_with(Difficulty::Normal.profile(), 0.05);
        tick(&mut state, 3.0);
        assert!((state.time_remaining - 44.95).abs() < 1e-4);
        tick(&mut state, -1.0);
        assert!((state.time_remaining - 44.95).abs() < 1e-4);
    }

    #[test]
    fn test_single_slot_session_end_to_end() {
        let profile = DifficultyProfile {
            spawn_interval: 1.0,
            max_concurrent: 1,
            target_lifespan: 1.2,
            ..Default::default()
        };
        let mut state = session_with(profile, 1.0);

        tick(&mut state, 0.5);
        assert!(state.targets.is_empty());
        tick(&mut state, 0.5);
        assert_eq!(state.targets.len(), 1);
        tick(&mut state, 0.5);
        assert_eq!(state.targets.len(), 1);

        // t=2.0: opportunity hits the cap and is dropped
        tick(&mut state, 0.5);
        assert_eq!(state.targets.len(), 1);
        assert!(state.spawn_accumulator < 1.0);

        // t=2.5: the target (spawned at 1.0) has aged past 1.2
        tick(&mut state, 0.5);
        assert!(state.targets.is_empty());
        assert_eq!(state.escaped, 1);
        assert_eq!(state.shots, 0);
    }

    #[test]
    fn test_expiry_boundary() {
        let lifespan = Difficulty::Normal.profile().target_lifespan;
        let profile = DifficultyProfile {
            spawn_interval: 1000.0,
            ..Default::default()
        };
        let mut state = session_with(profile, 10.0);
        state.clock = 5.0;
        state
            .targets
            .push(Target::new(1, Vec2::new(100.0, 100.0), 20.0, 5.0));

        tick(&mut state, lifespan - 0.01);
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.escaped, 0);

        tick(&mut state, 0.02);
        assert!(state.targets.is_empty());
        assert_eq!(state.escaped, 1);
        assert!(state.events.contains(&GameEvent::Escaped { id: 1 }));
    }

    #[test]
    fn test_time_runs_out() {
        let config = SessionConfig {
            duration: 0.1,
            ..Default::default()
        };
        let mut state = SessionState::new(config, Difficulty::Normal.profile(), 9);
        assert_eq!(tick(&mut state, 0.05), TickOutcome::Advanced);
        assert_eq!(tick(&mut state, 0.05), TickOutcome::Ended);
        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.time_remaining, 0.0);

        // Frozen afterwards
        let clock = state.clock;
        assert_eq!(tick(&mut state, 0.05), TickOutcome::Skipped);
        assert_eq!(state.clock, clock);
        assert_eq!(click(&mut state, Vec2::new(1.0, 1.0)), ClickOutcome::Ignored);
        assert_eq!(state.shots, 0);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut state = session_with(Difficulty::Easy.profile(), 0.05);
        for _ in 0..40 {
            tick(&mut state, 0.05);
        }
        assert!(!state.targets.is_empty());

        assert!(toggle_pause(&mut state));
        assert_eq!(state.phase, GamePhase::Paused);
        let before = (state.time_remaining, state.clock, state.targets.clone());
        for _ in 0..100 {
            assert_eq!(tick(&mut state, 0.05), TickOutcome::Skipped);
        }
        assert_eq!(before, (state.time_remaining, state.clock, state.targets.clone()));

        // External triggers never resume
        assert!(!force_pause(&mut state));
        assert_eq!(state.phase, GamePhase::Paused);

        assert!(toggle_pause(&mut state));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_toggle_ignored_when_idle_or_ended() {
        let mut state = SessionState::idle(SessionConfig::default(), DifficultyProfile::default());
        assert!(!toggle_pause(&mut state));
        assert_eq!(state.phase, GamePhase::Idle);
        state.phase = GamePhase::Ended;
        assert!(!toggle_pause(&mut state));
        assert!(!force_pause(&mut state));
        assert_eq!(state.phase, GamePhase::Ended);
    }

    #[test]
    fn test_effects_expire_during_ticks() {
        let mut state = session_with(Difficulty::Normal.profile(), 0.05);
        click(&mut state, Vec2::new(640.0, 360.0));
        assert_eq!(state.effects.len(), 2);
        for _ in 0..8 {
            tick(&mut state, 0.05);
        }
        // Ripple (0.35s) gone, floating text (0.7s) still up
        assert_eq!(state.effects.len(), 1);
        for _ in 0..8 {
            tick(&mut state, 0.05);
        }
        assert!(state.effects.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Action {
        Tick(f32),
        Click(f32, f32),
        Pause,
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            4 => (-0.02f32..0.2).prop_map(Action::Tick),
            3 => (0.0f32..1280.0, 0.0f32..720.0).prop_map(|(x, y)| Action::Click(x, y)),
            1 => Just(Action::Pause),
        ]
    }

    proptest! {
        #[test]
        fn prop_counters_hold_invariants(
            level in 0usize..4,
            seed in any::<u64>(),
            actions in prop::collection::vec(action(), 1..400),
        ) {
            let profile = Difficulty::ALL[level].profile();
            let mut state = SessionState::new(SessionConfig::default(), profile, seed);

            for action in actions {
                let before = (state.score, state.hits, state.shots, state.phase);
                match action {
                    Action::Tick(dt) => {
                        tick(&mut state, dt);
                        prop_assert_eq!(state.shots, before.2);
                    }
                    Action::Click(x, y) => {
                        let outcome = click(&mut state, Vec2::new(x, y));
                        if before.3 == GamePhase::Running {
                            prop_assert_eq!(state.shots, before.2 + 1);
                            prop_assert_eq!(state.hits, before.1 + outcome.is_hit() as u32);
                        } else {
                            prop_assert_eq!(state.shots, before.2);
                        }
                    }
                    Action::Pause => {
                        toggle_pause(&mut state);
                    }
                }
                prop_assert!(state.hits <= state.shots);
                prop_assert!(state.score >= before.0);
                prop_assert!(state.targets.len() <= profile.max_concurrent);
                prop_assert!(state.time_remaining >= 0.0);
            }
        }
    }
}
