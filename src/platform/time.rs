//! Frame timestamps to deltas

/// Turns monotonically increasing host timestamps (milliseconds, as handed
/// out by `requestAnimationFrame`) into deltas in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart measuring from `now_ms` (session start, resume)
    pub fn reset_at(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Forget the reference; the next delta will be 0
    pub fn clear(&mut self) {
        self.last_ms = None;
    }

    /// Seconds since the previous call (or reset). Never negative; clock
    /// anomalies and the first frame after `clear` yield 0.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms.is_finite() => ((now_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        dt.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_sequence() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(1000.0), 0.0);
        assert!((clock.delta(1016.0) - 0.016).abs() < 1e-6);
        assert!((clock.delta(1050.0) - 0.034).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        clock.reset_at(5000.0);
        assert_eq!(clock.delta(4000.0), 0.0);
        assert!((clock.delta(4100.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_reset_skips_paused_time() {
        let mut clock = FrameClock::new();
        clock.reset_at(0.0);
        clock.delta(16.0);
        // Paused for ten seconds, then resumed
        clock.reset_at(10_016.0);
        assert!((clock.delta(10_032.0) - 0.016).abs() < 1e-6);

        clock.clear();
        assert_eq!(clock.delta(20_000.0), 0.0);
    }
}
