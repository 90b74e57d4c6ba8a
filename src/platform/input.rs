//! Input events in play-area-local coordinates

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Events delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerMove { pos: Vec2, inside: bool },
    PointerEnter,
    PointerLeave,
    Click { pos: Vec2 },
    /// Pause key (Space)
    TogglePause,
    /// Tab hidden or window lost focus
    Hidden,
}

/// Last known pointer state, used for the crosshair
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub pos: Vec2,
    pub inside: bool,
}

impl Pointer {
    /// Apply a pointer event; returns false for events that are not about
    /// the pointer position
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerMove { pos, inside } => {
                self.pos = pos;
                self.inside = inside;
            }
            InputEvent::PointerEnter => self.inside = true,
            InputEvent::PointerLeave => self.inside = false,
            InputEvent::Click { pos } => self.pos = pos,
            InputEvent::TogglePause | InputEvent::Hidden => return false,
        }
        true
    }

    /// Crosshair position when the pointer is over the area
    pub fn crosshair(&self) -> Option<Vec2> {
        self.inside.then_some(self.pos)
    }
}
