//! Best score tracking
//!
//! Read once at startup, written back only when a finished session beats it.

use serde::{Deserialize, Serialize};

use crate::persistence::BestScoreStore;

/// Best score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScore {
    pub value: u64,
}

impl BestScore {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Load from a store (0 when missing or malformed)
    pub fn load(store: &dyn BestScoreStore) -> Self {
        let value = store.get();
        log::info!("Best score: {}", value);
        Self { value }
    }

    /// Strictly better than the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.value
    }

    /// Record a final score; persists and returns true only when it improves
    /// on the best
    pub fn submit(&mut self, score: u64, store: &mut dyn BestScoreStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        log::info!("New best score: {} (was {})", score, self.value);
        self.value = score;
        store.set(score);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_submit_only_on_improvement() {
        let mut store = MemoryStore::new(1000);
        let mut best = BestScore::load(&store);
        assert_eq!(best.value, 1000);

        assert!(!best.submit(1000, &mut store));
        assert!(!best.submit(400, &mut store));
        assert_eq!(store.get(), 1000);

        assert!(best.submit(1001, &mut store));
        assert_eq!(best.value, 1001);
        assert_eq!(store.get(), 1001);
    }

    #[test]
    fn test_zero_score_never_qualifies_initially() {
        let best = BestScore::default();
        assert!(!best.qualifies(0));
        assert!(best.qualifies(1));
    }
}
