use std::collections::HashSet;
use std::hash::Hash;

/// Remembers which elements have already animated during the session
#[derive(Debug)]
pub struct RepeatGuard<K> {
    fired: HashSet<K>,
}

impl<K: Eq + Hash> RepeatGuard<K> {
    pub fn new() -> Self {
        Self {
            fired: HashSet::new(),
        }
    }

    /// True exactly once per key
    pub fn first_time(&mut self, key: K) -> bool {
        self.fired.insert(key)
    }

    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

impl<K: Eq + Hash> Default for RepeatGuard<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_key() {
        let mut guard = RepeatGuard::new();

        assert!(guard.first_time("stat-projects"));
        assert!(!guard.first_time("stat-projects"));
        assert!(!guard.first_time("stat-projects"));
        assert!(guard.first_time("stat-clients"));

        assert!(guard.has_fired(&"stat-projects"));
        assert_eq!(guard.len(), 2);
    }
}
