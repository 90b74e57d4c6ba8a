//! Difficulty presets

use serde::{Deserialize, Serialize};

/// Selectable difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Insane => "insane",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            "insane" => Some(Difficulty::Insane),
            _ => None,
        }
    }

    /// Tuning for this level
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                spawn_interval: 1.1,
                min_radius: 24.0,
                max_radius: 54.0,
                target_lifespan: 3.0,
                max_concurrent: 4,
            },
            Difficulty::Normal => DifficultyProfile {
                spawn_interval: 0.9,
                min_radius: 18.0,
                max_radius: 42.0,
                target_lifespan: 2.5,
                max_concurrent: 5,
            },
            Difficulty::Hard => DifficultyProfile {
                spawn_interval: 0.75,
                min_radius: 16.0,
                max_radius: 36.0,
                target_lifespan: 2.0,
                max_concurrent: 6,
            },
            Difficulty::Insane => DifficultyProfile {
                spawn_interval: 0.62,
                min_radius: 12.0,
                max_radius: 28.0,
                target_lifespan: 1.7,
                max_concurrent: 7,
            },
        }
    }
}

/// Spawn/size/lifetime tuning, fixed for the length of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Seconds between spawn opportunities
    pub spawn_interval: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Seconds a target stays up before escaping
    pub target_lifespan: f32,
    pub max_concurrent: usize,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Difficulty::Normal.profile()
    }
}
