//! Roll history - bounded most-recent-first log of committed picks

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollRecord {
    pub result: String,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RollHistory {
    entries: VecDeque<RollRecord>,
    capacity: usize,
}

impl RollHistory {
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild from stored records (newest first), dropping anything past capacity
    pub fn from_records(records: Vec<RollRecord>, capacity: usize) -> Self {
        let mut entries: VecDeque<RollRecord> = records.into();
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    pub fn record(&mut self, result: impl Into<String>, timestamp_ms: f64) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(RollRecord { result: result.into(), timestamp_ms });
        self.entries.truncate(self.capacity);
    }

    pub fn latest(&self) -> Option<&RollRecord> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RollRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_records(&self) -> Vec<RollRecord> {
        self.entries.iter().cloned().collect()
    }

    /// How often each choice came up, most frequent first.
    /// Ties go to the choice that appeared most recently.
    pub fn tally(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for record in &self.entries {
            match counts.iter_mut().find(|(name, _)| *name == record.result) {
                Some((_, n)) => *n += 1,
                None => counts.push((record.result.clone(), 1)),
            }
        }
        // stable sort keeps first-seen (= most recent) order among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Fraction of logged rolls that landed on `choice`
    pub fn share_of(&self, choice: &str) -> f32 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let hits = self.entries.iter().filter(|r| r.result == choice).count();
        hits as f32 / self.entries.len() as f32
    }
}

impl Default for RollHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut history = RollHistory::default();
        history.record("Pizza", 1.0);
        history.record("Sushi", 2.0);
        assert_eq!(history.latest().unwrap().result, "Sushi");
        assert_eq!(history.iter().nth(1).unwrap().result, "Pizza");
    }

    #[test]
    fn capped_at_capacity() {
        let mut history = RollHistory::default();
        for i in 0..25 {
            history.record(format!("roll {i}"), i as f64);
            assert!(history.len() <= 10);
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.latest().unwrap().result, "roll 24");
        assert_eq!(history.iter().nth(9).unwrap().result, "roll 15");
        let stamps: Vec<f64> = history.iter().map(|r| r.timestamp_ms).collect();
        assert!(stamps.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut history = RollHistory::new(0);
        history.record("x", 0.0);
        assert!(history.is_empty());
    }

    #[test]
    fn from_records_truncates() {
        let records: Vec<RollRecord> = (0..15)
            .map(|i| RollRecord { result: format!("{i}"), timestamp_ms: i as f64 })
            .collect();
        let history = RollHistory::from_records(records, 10);
        assert_eq!(history.len(), 10);
        assert_eq!(history.latest().unwrap().result, "0");
    }

    #[test]
    fn tally_orders_by_count_then_recency() {
        let mut history = RollHistory::default();
        for name in ["a", "b", "a", "c", "b", "a"] {
            history.record(name, 0.0);
        }
        // newest first: a b c a b a
        assert_eq!(
            history.tally(),
            vec![("a".to_string(), 3), ("b".to_string(), 2), ("c".to_string(), 1)]
        );

        let mut tied = RollHistory::default();
        tied.record("old", 0.0);
        tied.record("new", 1.0);
        assert_eq!(tied.tally()[0].0, "new");
    }

    #[test]
    fn share_of_counts_fraction() {
        let mut history = RollHistory::default();
        assert_eq!(history.share_of("a"), 0.0);
        history.record("a", 0.0);
        history.record("b", 0.0);
        history.record("a", 0.0);
        history.record("a", 0.0);
        assert_eq!(history.share_of("a"), 0.75);
        assert_eq!(history.share_of("z"), 0.0);
    }
}
