//! Draw list for one frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::Pointer;
use crate::sim::{Effect, EffectKind, SessionState, Target, Tone};

/// `0xRRGGBB` plus alpha to RGBA floats
fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [r, g, b, alpha.clamp(0.0, 1.0)]
}

pub const BACKGROUND: u32 = 0x0b0f22;
pub const GRID: u32 = 0x121633;
pub const TARGET_BODY: u32 = 0x7c98ff;
pub const TARGET_CORE: u32 = 0x4be3c2;
pub const GOOD: u32 = 0x7dff9e;
pub const BAD: u32 = 0xff6b6b;
pub const CROSSHAIR: u32 = 0xc9d0ff;

/// One drawable element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawItem {
    Target {
        id: u32,
        pos: Vec2,
        radius: f32,
        /// Remaining life in [0, 1], drives the countdown arc
        life: f32,
        /// Overall opacity, fades with life
        alpha: f32,
        ring_width: f32,
        /// Glow scale wobble
        pulse: f32,
        body: [f32; 4],
        core: [f32; 4],
    },
    FloatingText {
        pos: Vec2,
        text: String,
        color: [f32; 4],
    },
    Ripple {
        pos: Vec2,
        radius: f32,
        color: [f32; 4],
    },
}

/// Everything a sink needs to paint one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub size: Vec2,
    pub background: [f32; 4],
    pub grid_spacing: f32,
    pub grid_color: [f32; 4],
    /// Back to front: targets, ripples, floating text
    pub items: Vec<DrawItem>,
    pub crosshair: Option<Vec2>,
    pub crosshair_color: [f32; 4],
}

impl Frame {
    pub fn targets(&self) -> impl Iterator<Item = &DrawItem> {
        self.items
            .iter()
            .filter(|i| matches!(i, DrawItem::Target { .. }))
    }
}

fn target_item(target: &Target, life: f32, clock: f32) -> DrawItem {
    let alpha = 0.2 + 0.8 * life;
    DrawItem::Target {
        id: target.id,
        pos: target.pos,
        radius: target.radius,
        life,
        alpha,
        ring_width: (target.radius * 0.15).clamp(2.0, 8.0),
        pulse: 1.0 + (clock * 6.0).sin() * 0.02,
        body: rgba(TARGET_BODY, 0.9 * alpha),
        core: rgba(TARGET_CORE, 0.85 * alpha),
    }
}

fn effect_item(effect: &Effect) -> DrawItem {
    let t = effect.progress();
    match &effect.kind {
        EffectKind::FloatingText { text, tone } => {
            let hex = match tone {
                Tone::Good => GOOD,
                Tone::Bad => BAD,
            };
            DrawItem::FloatingText {
                pos: effect.pos,
                text: text.clone(),
                color: rgba(hex, 1.0 - t),
            }
        }
        EffectKind::Ripple { good } => DrawItem::Ripple {
            pos: effect.pos,
            radius: RIPPLE_START_RADIUS + RIPPLE_GROWTH * t,
            color: rgba(if *good { TARGET_CORE } else { BAD }, (1.0 - t) * 0.9),
        },
    }
}

/// Project the session into a draw list
pub fn build_frame(state: &SessionState, pointer: &Pointer) -> Frame {
    let mut items = Vec::with_capacity(state.targets.len() + state.effects.len());

    for target in &state.targets {
        items.push(target_item(target, state.life_of(target), state.clock));
    }
    // Ripples under the text
    for effect in &state.effects {
        if matches!(effect.kind, EffectKind::Ripple { .. }) {
            items.push(effect_item(effect));
        }
    }
    for effect in &state.effects {
        if matches!(effect.kind, EffectKind::FloatingText { .. }) {
            items.push(effect_item(effect));
        }
    }

    Frame {
        size: state.config.area,
        background: rgba(BACKGROUND, 1.0),
        grid_spacing: GRID_SPACING,
        grid_color: rgba(GRID, 0.14),
        items,
        crosshair: pointer.crosshair(),
        crosshair_color: rgba(CROSSHAIR, 0.9),
    }
}
