//! Sequential id generation
//!
//! The original demo derived ids from "list length + 1", which hands out
//! duplicate ids when two creations race. A monotonic atomic counter keeps
//! the sequential string ids the API promises while closing that race.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter handing out `"1"`, `"2"`, ... id strings
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Create a sequence starting at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a sequence whose first id is `first`
    ///
    /// Used when a store is preloaded with data so fresh ids continue past
    /// the existing ones.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Reserve and return the next id
    pub fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_ids_are_sequential_strings() {
        let ids = IdSequence::new();
        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");
        assert_eq!(ids.next_id(), "3");
    }

    #[test]
    fn test_starting_at_continues_past_seed() {
        let ids = IdSequence::starting_at(7);
        assert_eq!(ids.next_id(), "7");
        assert_eq!(ids.next_id(), "8");
    }

    #[test]
    fn test_concurrent_ids_are_unique() {
        let ids = Arc::new(IdSequence::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total, "no two threads may share an id");
    }
}
