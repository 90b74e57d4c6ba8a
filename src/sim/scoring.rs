//! Click resolution and scoring
//!
//! Smaller targets are worth more, and a running combo adds a capped bonus.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyProfile;
use super::effects::{Effect, Tone};
use super::state::{GameEvent, SessionState};
use super::target::topmost_hit;
use crate::consts::*;

/// What a click did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClickOutcome {
    Hit {
        target_id: u32,
        points: u32,
        size_factor: f32,
        /// Combo after this hit
        combo: u32,
    },
    Miss,
    /// Session not running
    Ignored,
}

impl ClickOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, ClickOutcome::Hit { .. })
    }
}

/// Normalized inverse-radius bonus in [0, 1].
///
/// A profile with equal min and max radius has no size spread, so every
/// target gets 0.
pub fn size_factor(radius: f32, profile: &DifficultyProfile) -> f32 {
    let spread = profile.max_radius - profile.min_radius;
    if spread.abs() <= f32::EPSILON {
        return 0.0;
    }
    ((profile.max_radius - radius) / spread).clamp(0.0, 1.0)
}

/// Points for a hit given the combo standing before it
pub fn points_for(size_factor: f32, combo_before: u32) -> u32 {
    let combo_bonus = combo_before.min(COMBO_BONUS_CAP) as f32 * COMBO_BONUS_PER_STEP;
    (BASE_POINTS + SIZE_BONUS * size_factor + combo_bonus).round() as u32
}

/// Resolve a click at `pos` against the active targets
pub fn click(state: &mut SessionState, pos: Vec2) -> ClickOutcome {
    if !state.is_running() {
        return ClickOutcome::Ignored;
    }

    state.shots += 1;

    match topmost_hit(&state.targets, pos) {
        Some(idx) => {
            let target = state.targets.remove(idx);
            let size_factor = size_factor(target.radius, &state.profile);
            let points = points_for(size_factor, state.combo);
            state.combo += 1;
            state.score += u64::from(points);
            state.hits += 1;

            state
                .effects
                .push(Effect::floating_text(pos, format!("+{}", points), Tone::Good));
            state.effects.push(Effect::ripple(pos, true));
            state.events.push(GameEvent::Hit {
                target_id: target.id,
                points,
                size_factor,
                combo: state.combo,
            });

            ClickOutcome::Hit {
                target_id: target.id,
                points,
                size_factor,
                combo: state.combo,
            }
        }
        None => {
            state.combo = 0;
            state
                .effects
                .push(Effect::floating_text(pos, "miss", Tone::Bad));
            state.effects.push(Effect::ripple(pos, false));
            state.events.push(GameEvent::Miss { pos });
            ClickOutcome::Miss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::difficulty::Difficulty;
    use crate::sim::effects::EffectKind;
    use crate::sim::state::{GamePhase, SessionConfig};
    use crate::sim::target::Target;

    fn hard_session() -> SessionState {
        SessionState::new(SessionConfig::default(), Difficulty::Hard.profile(), 1)
    }

    fn place(state: &mut SessionState, x: f32, y: f32, r: f32) -> u32 {
        let id = state.next_target_id();
        state
            .targets
            .push(Target::new(id, Vec2::new(x, y), r, state.clock));
        id
    }

    #[test]
    fn test_reference_score() {
        let profile = Difficulty::Hard.profile(); // 16..36
        let sf = size_factor(20.0, &profile);
        assert!((sf - 0.8).abs() < 1e-6);
        assert_eq!(points_for(sf, 3), 200);
    }

    #[test]
    fn test_size_factor_clamps_and_guards() {
        let profile = Difficulty::Hard.profile();
        assert_eq!(size_factor(50.0, &profile), 0.0);
        assert_eq!(size_factor(4.0, &profile), 1.0);

        let flat = DifficultyProfile {
            min_radius: 20.0,
            max_radius: 20.0,
            ..profile
        };
        assert_eq!(size_factor(20.0, &flat), 0.0);
        assert_eq!(points_for(size_factor(20.0, &flat), 0), 80);
    }

    #[test]
    fn test_combo_bonus_caps_at_ten() {
        assert_eq!(points_for(0.0, 10), 160);
        assert_eq!(points_for(0.0, 25), 160);
        assert_eq!(points_for(1.0, 0), 200);
    }

    #[test]
    fn test_hit_updates_counters_in_order() {
        let mut state = hard_session();
        state.combo = 3;
        let id = place(&mut state, 200.0, 200.0, 20.0);

        let outcome = click(&mut state, Vec2::new(205.0, 200.0));
        assert_eq!(
            outcome,
            ClickOutcome::Hit {
                target_id: id,
                points: 200,
                size_factor: size_factor(20.0, &state.profile),
                combo: 4,
            }
        );
        assert_eq!(state.score, 200);
        assert_eq!((state.hits, state.shots, state.combo), (1, 1, 4));
        assert!(state.targets.is_empty());
        assert_eq!(state.effects.len(), 2);
        match &state.effects[0].kind {
            EffectKind::FloatingText { text, tone } => {
                assert_eq!(text, "+200");
                assert_eq!(*tone, Tone::Good);
            }
            other => panic!("expected floating text, got {:?}", other),
        }
    }

    #[test]
    fn test_miss_resets_combo() {
        let mut state = hard_session();
        state.combo = 6;
        state.score = 900;
        place(&mut state, 100.0, 100.0, 20.0);

        assert_eq!(click(&mut state, Vec2::new(600.0, 400.0)), ClickOutcome::Miss);
        assert_eq!((state.hits, state.shots, state.combo), (0, 1, 0));
        assert_eq!(state.score, 900);
        assert_eq!(state.targets.len(), 1);
        assert!(matches!(
            state.effects[1].kind,
            EffectKind::Ripple { good: false }
        ));
    }

    #[test]
    fn test_overlap_resolves_to_newest() {
        let mut state = hard_session();
        let _older = place(&mut state, 300.0, 300.0, 30.0);
        let newer = place(&mut state, 320.0, 300.0, 30.0);

        match click(&mut state, Vec2::new(305.0, 300.0)) {
            ClickOutcome::Hit { target_id, .. } => assert_eq!(target_id, newer),
            other => panic!("expected a hit, got {:?}", other),
        }
        assert_eq!(state.targets.len(), 1);
    }

    #[test]
    fn test_clicks_ignored_unless_running() {
        for phase in [GamePhase::Idle, GamePhase::Paused, GamePhase::Ended] {
            let mut state = hard_session();
            place(&mut state, 100.0, 100.0, 20.0);
            state.phase = phase;
            assert_eq!(click(&mut state, Vec2::new(100.0, 100.0)), ClickOutcome::Ignored);
            assert_eq!((state.hits, state.shots), (0, 0));
            assert_eq!(state.targets.len(), 1);
            assert!(state.effects.is_empty());
        }
    }
}
