//! Session controller
//!
//! Owns the live `SessionState` and the collaborators around it (best score
//! store, audio sink, pointer, frame clock). The host drives it:
//!
//! ```text
//! start(now) -> { frame(now) | click(pos) | toggle_pause(now) }* -> Ended
//! ```
//!
//! and keeps requesting frames while `FrameOutcome::keep_running` is true.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioCue, AudioSink};
use crate::highscores::BestScore;
use crate::persistence::BestScoreStore;
use crate::platform::{FrameClock, InputEvent, Pointer};
use crate::renderer::{Frame, RenderSink, build_frame};
use crate::settings::Settings;
use crate::sim::{
    self, ClickOutcome, Difficulty, GameEvent, GamePhase, SessionState, SessionSummary,
    TickOutcome,
};

/// What the host should do after a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutcome {
    /// Request another frame
    pub keep_running: bool,
    /// Draw list, present when the session advanced
    pub frame: Option<Frame>,
}

impl FrameOutcome {
    fn stopped() -> Self {
        Self {
            keep_running: false,
            frame: None,
        }
    }
}

/// Heads-up display values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub hits: u32,
    pub shots: u32,
    pub accuracy_pct: u32,
    pub escaped: u32,
    pub combo: u32,
    pub time_remaining: f32,
    pub best: u64,
    pub phase: GamePhase,
}

impl Hud {
    /// Seconds left with one decimal
    pub fn time_label(&self) -> String {
        format!("{:.1}", self.time_remaining)
    }

    pub fn combo_label(&self) -> String {
        format!("{}x", self.combo)
    }

    pub fn accuracy_label(&self) -> String {
        format!("{}%", self.accuracy_pct)
    }
}

/// Game instance holding the session and its collaborators
pub struct Game<S: BestScoreStore, A: AudioSink> {
    state: SessionState,
    settings: Settings,
    best: BestScore,
    store: S,
    audio: A,
    pointer: Pointer,
    clock: FrameClock,
    summary: Option<SessionSummary>,
    announcement: String,
}

impl<S: BestScoreStore, A: AudioSink> Game<S, A> {
    /// Reads the best score once; the session starts Idle
    pub fn new(settings: Settings, store: S, audio: A) -> Self {
        let best = BestScore::load(&store);
        let state = SessionState::idle(
            settings.session_config(),
            settings.difficulty.profile(),
        );
        Self {
            state,
            settings,
            best,
            store,
            audio,
            pointer: Pointer::default(),
            clock: FrameClock::new(),
            summary: None,
            announcement: String::new(),
        }
    }

    // === Lifecycle ===

    /// Start (or restart) a session with the selected difficulty.
    ///
    /// The previous session, its targets and effects are discarded.
    pub fn start(&mut self, now_ms: f64, seed: u64) {
        let profile = self.settings.difficulty.profile();
        self.state = SessionState::new(self.settings.session_config(), profile, seed);
        self.clock.reset_at(now_ms);
        self.summary = None;
        self.announcement.clear();
        log::info!(
            "Session started ({}, seed {})",
            self.settings.difficulty.as_str(),
            seed
        );
    }

    /// Advance to `now_ms` and produce the frame to draw
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        if !self.state.is_running() {
            return FrameOutcome::stopped();
        }

        let dt = self.clock.delta(now_ms);
        let outcome = sim::tick(&mut self.state, dt);
        self.dispatch_events();

        match outcome {
            TickOutcome::Advanced => FrameOutcome {
                keep_running: true,
                frame: Some(build_frame(&self.state, &self.pointer)),
            },
            TickOutcome::Ended => {
                self.finish();
                FrameOutcome::stopped()
            }
            TickOutcome::Skipped => FrameOutcome::stopped(),
        }
    }

    /// `frame` plus drawing into `sink`; returns `keep_running`
    pub fn frame_into(&mut self, now_ms: f64, sink: &mut dyn RenderSink) -> bool {
        let outcome = self.frame(now_ms);
        if let Some(frame) = &outcome.frame {
            sink.draw(frame);
        }
        outcome.keep_running
    }

    /// Running <-> Paused. Resuming restarts the frame clock so paused wall
    /// time is not fed into the next tick.
    pub fn toggle_pause(&mut self, now_ms: f64) -> bool {
        if !sim::toggle_pause(&mut self.state) {
            return false;
        }
        if self.state.is_running() {
            self.clock.reset_at(now_ms);
            log::info!("Resumed");
        } else {
            log::info!("Paused");
        }
        true
    }

    /// Forced pause (tab hidden, focus lost); never resumes
    pub fn pause(&mut self) -> bool {
        let paused = sim::force_pause(&mut self.state);
        if paused {
            log::info!("Auto-paused");
        }
        paused
    }

    fn finish(&mut self) {
        let new_best = self.best.submit(self.state.score, &mut self.store);
        let summary = self.state.summary(new_best);
        log::info!(
            "Final: score={} accuracy={}% combo={} escaped={}",
            summary.score,
            summary.accuracy_pct,
            summary.final_combo,
            summary.escaped
        );
        self.summary = Some(summary);
    }

    // === Input ===

    /// Resolve a click in area-local coordinates. Ignored unless Running.
    pub fn click(&mut self, pos: Vec2) -> ClickOutcome {
        if !self.state.is_running() {
            return ClickOutcome::Ignored;
        }
        // First interaction may enable audio
        if !self.settings.muted {
            self.audio.activate();
        }
        let outcome = sim::click(&mut self.state, pos);
        self.dispatch_events();
        outcome
    }

    /// Route a host input event
    pub fn handle_input(&mut self, event: InputEvent, now_ms: f64) -> Option<ClickOutcome> {
        self.pointer.apply(&event);
        match event {
            InputEvent::Click { pos } => Some(self.click(pos)),
            InputEvent::TogglePause => {
                self.toggle_pause(now_ms);
                None
            }
            InputEvent::Hidden => {
                self.pause();
                None
            }
            InputEvent::PointerMove { .. } | InputEvent::PointerEnter | InputEvent::PointerLeave => {
                None
            }
        }
    }

    /// Play cues and refresh the announcement for pending events
    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Hit {
                    points,
                    size_factor,
                    combo,
                    ..
                } => {
                    self.cue(AudioCue::hit(size_factor));
                    self.announcement = format!("Hit! {} points. Combo {}.", points, combo);
                }
                GameEvent::Miss { .. } => {
                    self.cue(AudioCue::miss());
                    self.announcement = "Miss. Combo lost.".to_string();
                }
                GameEvent::Spawned { .. } | GameEvent::Escaped { .. } | GameEvent::Ended => {}
            }
        }
    }

    fn cue(&mut self, cue: AudioCue) {
        if !self.settings.muted {
            self.audio.play(&cue);
        }
    }

    // === Settings ===

    /// Applies at the next `start`, never to the live session
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        log::info!("Difficulty set to {} (next session)", difficulty.as_str());
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
        if !muted {
            self.audio.activate();
        }
    }

    /// New play area size, used by later spawns and frames
    pub fn resize(&mut self, width: f32, height: f32) {
        self.settings.area_width = width.max(0.0);
        self.settings.area_height = height.max(0.0);
        self.state.config.area = Vec2::new(self.settings.area_width, self.settings.area_height);
    }

    // === Accessors ===

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.state.score,
            hits: self.state.hits,
            shots: self.state.shots,
            accuracy_pct: self.state.accuracy_pct(),
            escaped: self.state.escaped,
            combo: self.state.combo,
            time_remaining: self.state.time_remaining,
            best: self.best.value,
            phase: self.state.phase,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn best(&self) -> u64 {
        self.best.value
    }

    /// Screen reader text for the last click
    pub fn announcement(&self) -> &str {
        &self.announcement
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
