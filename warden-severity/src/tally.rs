//! Explicit per-tier counters, accumulated by the caller.

use serde::{Deserialize, Serialize};
use warden_core::models::SeverityTier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityTally {
    pub zero: usize,
    pub low: usize,
    pub high: usize,
}

impl SeverityTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tier: SeverityTier) {
        match tier {
            SeverityTier::Zero => self.zero += 1,
            SeverityTier::Low => self.low += 1,
            SeverityTier::High => self.high += 1,
        }
    }

    pub fn count(&self, tier: SeverityTier) -> usize {
        match tier {
            SeverityTier::Zero => self.zero,
            SeverityTier::Low => self.low,
            SeverityTier::High => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.zero + self.low + self.high
    }

    /// Combine two tallies, e.g. from separate batches.
    pub fn merge(&mut self, other: &SeverityTally) {
        self.zero += other.zero;
        self.low += other.low;
        self.high += other.high;
    }
}

impl FromIterator<SeverityTier> for SeverityTally {
    fn from_iter<I: IntoIterator<Item = SeverityTier>>(iter: I) -> Self {
        let mut tally = SeverityTally::new();
        for tier in iter {
            tally.record(tier);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_tier() {
        let tally: SeverityTally = [SeverityTier::High, SeverityTier::Zero, SeverityTier::High]
            .into_iter()
            .collect();
        assert_eq!(tally.count(SeverityTier::High), 2);
        assert_eq!(tally.count(SeverityTier::Low), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn merge_adds_counts() {
        let mut a = SeverityTally { zero: 1, low: 2, high: 3 };
        a.merge(&SeverityTally { zero: 1, low: 0, high: 1 });
        assert_eq!(a, SeverityTally { zero: 2, low: 2, high: 4 });
    }
}
