//! Audio cues
//!
//! The game only describes short beeps; a sink decides how (or whether) to
//! play them. Sink failures never reach game state.

use serde::{Deserialize, Serialize};

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A fire-and-forget beep request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioCue {
    /// Hz
    pub frequency: f32,
    /// Seconds
    pub duration: f32,
    pub waveform: Waveform,
    /// Peak gain, decays exponentially over `duration`
    pub gain: f32,
}

impl AudioCue {
    /// Hit beep; smaller targets pitch higher
    pub fn hit(size_factor: f32) -> Self {
        Self {
            frequency: 720.0 + 200.0 * size_factor,
            duration: 0.05,
            waveform: Waveform::Square,
            gain: 0.06,
        }
    }

    /// Miss buzz
    pub fn miss() -> Self {
        Self {
            frequency: 200.0,
            duration: 0.07,
            waveform: Waveform::Sawtooth,
            gain: 0.05,
        }
    }
}

/// Something that can play cues
pub trait AudioSink {
    /// Prepare the output; called on the first accepted click (browsers only
    /// allow audio after a user gesture). Must be idempotent.
    fn activate(&mut self) {}

    fn play(&mut self, cue: &AudioCue);
}

/// Drops every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: &AudioCue) {}
}

#[cfg(target_arch = "wasm32")]
pub use web_audio::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web_audio {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioCue, AudioSink, Waveform};

    /// Web Audio beeps
    #[derive(Default)]
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        failed: bool,
    }

    impl WebAudio {
        pub fn new() -> Self {
            Self::default()
        }

        fn osc_type(waveform: Waveform) -> OscillatorType {
            match waveform {
                Waveform::Sine => OscillatorType::Sine,
                Waveform::Square => OscillatorType::Square,
                Waveform::Sawtooth => OscillatorType::Sawtooth,
                Waveform::Triangle => OscillatorType::Triangle,
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }

    impl AudioSink for WebAudio {
        fn activate(&mut self) {
            if self.ctx.is_some() || self.failed {
                return;
            }
            match AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(_) => {
                    // Not a secure context or no audio device
                    log::warn!("Failed to create AudioContext - audio disabled");
                    self.failed = true;
                }
            }
        }

        fn play(&mut self, cue: &AudioCue) {
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let Some((osc, gain)) =
                Self::create_osc(ctx, cue.frequency, Self::osc_type(cue.waveform))
            else {
                return;
            };
            let t = ctx.current_time();
            let end = t + f64::from(cue.duration);

            gain.gain().set_value_at_time(cue.gain, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.0001, end)
                .ok();

            osc.start().ok();
            osc.stop_with_when(end).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_pitch_rises_with_size_factor() {
        assert_eq!(AudioCue::hit(0.0).frequency, 720.0);
        assert_eq!(AudioCue::hit(1.0).frequency, 920.0);
        assert_eq!(AudioCue::hit(0.5).waveform, Waveform::Square);
    }

    #[test]
    fn test_miss_cue() {
        let cue = AudioCue::miss();
        assert_eq!(cue.frequency, 200.0);
        assert_eq!(cue.waveform, Waveform::Sawtooth);
        assert!(cue.duration > AudioCue::hit(0.0).duration);
    }
}
