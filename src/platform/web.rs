//! Browser bindings
//!
//! `WebGame` exposes the controller to a JS host that owns the canvas, DOM
//! overlay and `requestAnimationFrame` pump. Structured values cross the
//! boundary as JSON.

use glam::Vec2;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::audio::WebAudio;
use crate::game::Game;
use crate::persistence::LocalStorageStore;
use crate::platform::InputEvent;
use crate::settings::Settings;
use crate::sim::Difficulty;

/// Install the panic hook and console logger. Safe to call more than once.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Aim Trainer starting...");
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("Serialization failed: {}", e);
        "null".to_string()
    })
}

/// Game handle for JS
#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore, WebAudio>,
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let settings = Settings::load();
        WebGame {
            game: Game::new(settings, LocalStorageStore, WebAudio::new()),
        }
    }

    /// Start or restart; `now_ms` is `performance.now()`
    pub fn start(&mut self, now_ms: f64) {
        let seed = (js_sys::Date::now() as u64) ^ ((js_sys::Math::random() * u32::MAX as f64) as u64);
        self.game.start(now_ms, seed);
    }

    /// `{"keep_running": bool, "frame": Frame | null}`
    pub fn frame(&mut self, now_ms: f64) -> String {
        to_json(&self.game.frame(now_ms))
    }

    /// True on a hit
    pub fn click(&mut self, x: f32, y: f32, now_ms: f64) -> bool {
        self.game
            .handle_input(InputEvent::Click { pos: Vec2::new(x, y) }, now_ms)
            .is_some_and(|o| o.is_hit())
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, inside: bool) {
        self.game.handle_input(
            InputEvent::PointerMove {
                pos: Vec2::new(x, y),
                inside,
            },
            0.0,
        );
    }

    pub fn pointer_leave(&mut self) {
        self.game.handle_input(InputEvent::PointerLeave, 0.0);
    }

    pub fn toggle_pause(&mut self, now_ms: f64) -> bool {
        self.game.toggle_pause(now_ms)
    }

    /// Tab hidden / window blur
    pub fn hidden(&mut self) {
        self.game.pause();
    }

    /// Returns false for unknown names (selection unchanged)
    pub fn set_difficulty(&mut self, name: &str) -> bool {
        match Difficulty::from_str(name) {
            Some(difficulty) => {
                self.game.select_difficulty(difficulty);
                self.game.settings().save();
                true
            }
            None => {
                log::warn!("Unknown difficulty '{}'", name);
                false
            }
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.game.set_muted(muted);
        self.game.settings().save();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.game.resize(width, height);
    }

    pub fn hud(&self) -> String {
        to_json(&self.game.hud())
    }

    /// End-of-session summary, `null` until a session ends
    pub fn summary(&self) -> String {
        to_json(&self.game.summary())
    }

    pub fn announcement(&self) -> String {
        self.game.announcement().to_string()
    }

    pub fn difficulty(&self) -> String {
        self.game.settings().difficulty.as_str().to_string()
    }
}
