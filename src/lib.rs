//! Aim Trainer - click the targets before they fade
//!
//! Core modules:
//! - `sim`: Session simulation (spawning, expiry, hit-testing, scoring)
//! - `game`: Session controller wiring the simulation to its collaborators
//! - `renderer`: Draw-list projection handed to a render sink
//! - `audio`: Hit/miss cue descriptions and sinks
//! - `persistence`: Best score stores
//! - `platform`: Input events, frame clock, browser bindings

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, Game, Hud};
pub use highscores::BestScore;
pub use settings::Settings;
pub use sim::{ClickOutcome, Difficulty, DifficultyProfile, GamePhase, SessionState};

/// Game configuration constants
pub mod consts {
    /// Length of one session in seconds
    pub const SESSION_DURATION: f32 = 45.0;
    /// Largest delta a single tick may consume (avoids jumps after a stall)
    pub const MAX_FRAME_DELTA: f32 = 0.05;

    /// Default play area, in area-local units
    pub const DEFAULT_AREA_WIDTH: f32 = 1280.0;
    pub const DEFAULT_AREA_HEIGHT: f32 = 720.0;

    /// Scoring
    pub const BASE_POINTS: f32 = 80.0;
    pub const SIZE_BONUS: f32 = 120.0;
    pub const COMBO_BONUS_PER_STEP: f32 = 8.0;
    pub const COMBO_BONUS_CAP: u32 = 10;

    /// Floating text feedback
    pub const FLOATER_LIFETIME: f32 = 0.7;
    pub const FLOATER_RISE_SPEED: f32 = 40.0;
    pub const FLOATER_OFFSET_Y: f32 = 8.0;

    /// Click ripple
    pub const RIPPLE_LIFETIME: f32 = 0.35;
    pub const RIPPLE_START_RADIUS: f32 = 12.0;
    pub const RIPPLE_GROWTH: f32 = 60.0;

    /// Background grid spacing
    pub const GRID_SPACING: f32 = 32.0;
}

/// Accuracy as a whole percentage, 0 when nothing was fired
#[inline]
pub fn accuracy_pct(hits: u32, shots: u32) -> u32 {
    if shots == 0 {
        0
    } else {
        (hits as f32 / shots as f32 * 100.0).round() as u32
    }
}
