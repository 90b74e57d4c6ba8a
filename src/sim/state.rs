//! Session state and core simulation types
//!
//! One `SessionState` value holds everything a running session mutates.
//! Starting or restarting replaces the whole value.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyProfile;
use super::effects::Effect;
use super::target::Target;
use crate::consts::*;

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started yet
    Idle,
    /// Clock running, clicks accepted
    Running,
    /// Clock frozen, clicks ignored
    Paused,
    /// Time ran out; counters are frozen
    Ended,
}

/// Things that happened during a tick or click, drained by the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32 },
    Hit {
        target_id: u32,
        points: u32,
        size_factor: f32,
        combo: u32,
    },
    Miss { pos: Vec2 },
    Escaped { id: u32 },
    Ended,
}

/// Per-session configuration that is not part of the difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session length in seconds
    pub duration: f32,
    /// Upper bound on a single tick's delta
    pub max_frame_delta: f32,
    /// Play area size
    pub area: Vec2,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration: SESSION_DURATION,
            max_frame_delta: MAX_FRAME_DELTA,
            area: Vec2::new(DEFAULT_AREA_WIDTH, DEFAULT_AREA_HEIGHT),
        }
    }
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct SessionState {
    pub config: SessionConfig,
    /// Difficulty applied at start, fixed until the next start
    pub profile: DifficultyProfile,
    pub phase: GamePhase,
    /// Seconds of Running time elapsed; target ages are measured against it
    pub clock: f32,
    pub time_remaining: f32,
    pub score: u64,
    pub hits: u32,
    pub shots: u32,
    pub escaped: u32,
    pub combo: u32,
    pub spawn_accumulator: f32,
    /// Active targets in spawn order (last = topmost)
    pub targets: Vec<Target>,
    /// Active cosmetic effects
    pub effects: Vec<Effect>,
    /// Pending events since the last drain
    pub events: Vec<GameEvent>,
    /// Seed the session RNG was built from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl SessionState {
    /// A fresh, running session
    pub fn new(config: SessionConfig, profile: DifficultyProfile, seed: u64) -> Self {
        Self {
            config,
            profile,
            phase: GamePhase::Running,
            clock: 0.0,
            time_remaining: config.duration,
            score: 0,
            hits: 0,
            shots: 0,
            escaped: 0,
            combo: 0,
            spawn_accumulator: 0.0,
            targets: Vec::new(),
            effects: Vec::new(),
            events: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// A session that has not been started
    pub fn idle(config: SessionConfig, profile: DifficultyProfile) -> Self {
        let mut state = Self::new(config, profile, 0);
        state.phase = GamePhase::Idle;
        state
    }

    /// Allocate a new target ID
    pub fn next_target_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Life fraction of a target against this session's clock and lifespan
    pub fn life_of(&self, target: &Target) -> f32 {
        target.life_fraction(self.clock, self.profile.target_lifespan)
    }

    pub fn accuracy_pct(&self) -> u32 {
        crate::accuracy_pct(self.hits, self.shots)
    }

    /// Take the pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Final numbers for the end-of-session summary
    pub fn summary(&self, new_best: bool) -> SessionSummary {
        SessionSummary {
            score: self.score,
            accuracy_pct: self.accuracy_pct(),
            hits: self.hits,
            shots: self.shots,
            final_combo: self.combo,
            escaped: self.escaped,
            new_best,
        }
    }
}

/// End-of-session summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u64,
    pub accuracy_pct: u32,
    pub hits: u32,
    pub shots: u32,
    /// Combo standing when time ran out
    pub final_combo: u32,
    pub escaped: u32,
    pub new_best: bool,
}
