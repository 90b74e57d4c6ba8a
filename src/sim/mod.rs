//! Session simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Time enters only as clamped deltas
//! - Seeded RNG only
//! - Targets kept in spawn order (last = topmost)

pub mod difficulty;
pub mod effects;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod target;
pub mod tick;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use effects::{Effect, EffectKind, Tone, advance_effects};
pub use scoring::{ClickOutcome, click, points_for, size_factor};
pub use spawn::{run_spawner, spawn_target};
pub use state::{GameEvent, GamePhase, SessionConfig, SessionState, SessionSummary};
pub use target::{Target, topmost_hit};
pub use tick::{TickOutcome, clamp_delta, force_pause, sweep_expired, tick, toggle_pause};
