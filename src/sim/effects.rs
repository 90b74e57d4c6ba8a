//! Cosmetic click feedback: floating text and ripples
//!
//! Effects are never read by scoring or spawning.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Color tone of a floating label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Good,
    Bad,
}

/// Effect payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Rising text ("+200", "miss")
    FloatingText { text: String, tone: Tone },
    /// Expanding ring at the click point
    Ripple { good: bool },
}

/// A short-lived annotation driven by its own age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub pos: Vec2,
    pub age: f32,
    pub lifetime: f32,
    pub kind: EffectKind,
}

impl Effect {
    pub fn floating_text(pos: Vec2, text: impl Into<String>, tone: Tone) -> Self {
        Self {
            pos: pos - Vec2::new(0.0, FLOATER_OFFSET_Y),
            age: 0.0,
            lifetime: FLOATER_LIFETIME,
            kind: EffectKind::FloatingText {
                text: text.into(),
                tone,
            },
        }
    }

    pub fn ripple(pos: Vec2, good: bool) -> Self {
        Self {
            pos,
            age: 0.0,
            lifetime: RIPPLE_LIFETIME,
            kind: EffectKind::Ripple { good },
        }
    }

    /// Advance by `dt`; floating text drifts upward
    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
        if matches!(self.kind, EffectKind::FloatingText { .. }) {
            self.pos.y -= FLOATER_RISE_SPEED * dt;
        }
    }

    /// Normalized age in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 1.0;
        }
        (self.age / self.lifetime).clamp(0.0, 1.0)
    }

    pub fn is_done(&self) -> bool {
        self.age >= self.lifetime
    }
}

/// Advance all effects and drop the finished ones
pub fn advance_effects(effects: &mut Vec<Effect>, dt: f32) {
    for effect in effects.iter_mut() {
        effect.advance(dt);
    }
    effects.retain(|e| !e.is_done());
}
