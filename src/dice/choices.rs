//! Choice set - the ordered list of options a pick draws from
//!
//! Entries are trimmed on the way in and blank input is dropped, so the set
//! never holds an empty string. Invalid edits are silent no-ops.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ChoiceSet {
    items: Vec<String>,
}

impl ChoiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trimmed entry. Returns false (and changes nothing) for blank input.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    /// Remove the entry at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|item| item == text)
    }

    /// Uniform draw over the current members
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.items.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.items.len());
        Some(&self.items[idx])
    }
}

impl From<Vec<String>> for ChoiceSet {
    fn from(stored: Vec<String>) -> Self {
        let mut set = Self::new();
        for entry in &stored {
            set.add(entry);
        }
        set
    }
}

impl From<ChoiceSet> for Vec<String> {
    fn from(set: ChoiceSet) -> Self {
        set.items
    }
}

impl<'a> FromIterator<&'a str> for ChoiceSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.add(entry);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn add_trims_and_appends() {
        let mut set = ChoiceSet::new();
        assert!(set.add("  Pizza "));
        assert!(set.add("Sushi"));
        assert_eq!(set.iter().collect::<Vec<_>>(), ["Pizza", "Sushi"]);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut set = ChoiceSet::from_iter(["Tacos"]);
        assert!(!set.add(""));
        assert!(!set.add("   "));
        assert!(!set.add("\t\n"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let set = ChoiceSet::from_iter(["Tea", "Tea"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut set = ChoiceSet::from_iter(["a", "b"]);
        assert_eq!(set.remove(2), None);
        assert_eq!(set.remove(usize::MAX), None);
        assert_eq!(set.len(), 2);
        assert_eq!(set.remove(0).as_deref(), Some("a"));
        assert_eq!(set.get(0), Some("b"));
    }

    #[test]
    fn clear_empties() {
        let mut set = ChoiceSet::from_iter(["a", "b", "c"]);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn no_blank_entries_after_mixed_edits() {
        let mut rng = SmallRng::seed_from_u64(7);
        let inputs = ["x", " ", "", "  y  ", "\t", "z"];
        let mut set = ChoiceSet::new();
        for round in 0..200usize {
            if rng.random_bool(0.6) {
                set.add(inputs[round % inputs.len()]);
            } else {
                let idx = rng.random_range(0..set.len() + 2);
                set.remove(idx);
            }
            assert!(set.iter().all(|c| !c.trim().is_empty() && c.trim() == c));
        }
    }

    #[test]
    fn shuffle_keeps_members() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut set = ChoiceSet::from_iter(["a", "b", "c", "d", "e"]);
        set.shuffle(&mut rng);
        let mut sorted: Vec<&str> = set.iter().collect();
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn restoring_drops_blank_entries() {
        let json = r#"["Pizza", "   ", "", " Sushi "]"#;
        let set: ChoiceSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), ["Pizza", "Sushi"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["Pizza","Sushi"]"#);
    }

    #[test]
    fn pick_on_empty_is_none() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(ChoiceSet::new().pick(&mut rng), None);
    }
}
