/// Every filter label the UI offers, in chooser order.
pub const CATALOG: [&str; 6] = [
    "Informatie over de donatieprocedure",
    "Protocol informatie",
    "Onderzoeksinformatie",
    "PDF",
    "Illustratie of infographic",
    "Scholing en training",
];

/// Active filters in the order they were added. A name is either present or absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    names: Vec<String>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` unless it is already active. Returns whether the set changed.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Removes `name` if present. Returns whether the set changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_add_is_idempotent() {
        let mut set = FilterSet::new();
        assert!(set.add("PDF"));
        assert!(!set.add("PDF"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut set = FilterSet::new();
        set.add(CATALOG[3]);
        set.add(CATALOG[0]);
        set.add(CATALOG[5]);
        set.remove(CATALOG[0]);
        set.add(CATALOG[0]);
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec![CATALOG[3], CATALOG[5], CATALOG[0]]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut set = FilterSet::new();
        set.add("PDF");
        assert!(!set.remove("Protocol informatie"));
        assert_eq!(set.get(0), Some("PDF"));
        assert_eq!(set.get(1), None);
    }

    #[test]
    fn test_random_sequences_match_model() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut set = FilterSet::new();
        let mut model: Vec<&str> = Vec::new();

        for _ in 0..2000 {
            let name = CATALOG[rng.gen_range(0..CATALOG.len())];
            match rng.gen_range(0..10) {
                0 => {
                    set.clear();
                    model.clear();
                }
                1..=4 => {
                    set.remove(name);
                    model.retain(|n| *n != name);
                }
                _ => {
                    set.add(name);
                    if !model.contains(&name) {
                        model.push(name);
                    }
                }
            }

            let names: Vec<&str> = set.iter().collect();
            assert_eq!(names, model);
            let mut deduped = names.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), names.len(), "duplicate filter in {names:?}");
        }
    }
}
