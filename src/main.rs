//! Aim Trainer entry point
//!
//! On the web the JS host drives `platform::web::WebGame`; natively this runs
//! one headless session with an autoplay bot and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    aim_trainer::platform::web::init();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use aim_trainer::audio::NullAudio;
    use aim_trainer::persistence::{BestScoreStore, FileStore};
    use aim_trainer::renderer::LastFrame;
    use aim_trainer::{Game, GamePhase, Settings};

    /// Frame spacing of the simulated display (60 Hz)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Seconds between bot clicks
    const REACTION: f32 = 0.35;

    /// Picks the target closest to escaping and clicks near it, with aim
    /// jitter so it misses now and then
    struct Bot {
        rng: Pcg32,
        cooldown: f32,
    }

    impl Bot {
        fn new(seed: u64) -> Self {
            Self {
                rng: Pcg32::seed_from_u64(seed),
                cooldown: REACTION,
            }
        }

        fn aim<S: BestScoreStore>(&mut self, game: &Game<S, NullAudio>, dt: f32) -> Option<Vec2> {
            self.cooldown -= dt;
            if self.cooldown > 0.0 {
                return None;
            }

            let state = game.state();
            let target = state
                .targets
                .iter()
                .min_by(|a, b| a.spawned_at.total_cmp(&b.spawned_at))?;
            self.cooldown = REACTION + self.rng.random_range(0.0..0.2);

            let spread = target.radius * 1.3;
            let jitter = Vec2::new(
                self.rng.random_range(-spread..spread),
                self.rng.random_range(-spread..spread),
            );
            Some(target.pos + jitter)
        }
    }

    pub fn run() {
        let settings = Settings::load();
        let store = FileStore::in_dir(&std::env::temp_dir());
        log::info!("Best score file: {}", store.path().display());

        let mut game = Game::new(settings, store, NullAudio);
        let seed: u64 = rand::random();
        let mut bot = Bot::new(seed ^ 0x5eed);
        let mut sink = LastFrame::default();

        let mut now = 0.0;
        game.start(now, seed);
        loop {
            now += FRAME_MS;
            if !game.frame_into(now, &mut sink) {
                break;
            }
            if let Some(pos) = bot.aim(&game, FRAME_MS as f32 / 1000.0) {
                game.click(pos);
            }
        }

        debug_assert_eq!(game.phase(), GamePhase::Ended);
        let hud = game.hud();
        log::info!(
            "{} frames drawn, time {}",
            sink.frames_drawn,
            hud.time_label()
        );
        if let Some(summary) = game.summary() {
            match serde_json::to_string_pretty(summary) {
                Ok(json) => println!("{}", json),
                Err(e) => log::warn!("Could not format summary: {}", e),
            }
        }
        println!("Best: {}", game.best());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Aim Trainer (native, autoplay) starting...");
    autoplay::run();
}
