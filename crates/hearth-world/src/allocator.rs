//! Process-wide key allocation.
//!
//! Every room, exit, and player receives its key from the single
//! [`KeyAllocator`] owned by the [`World`](crate::World). Keys start at 1,
//! strictly increase, and are never handed out twice.

use std::sync::atomic::{AtomicU64, Ordering};

use hearth_types::Key;

/// Thread-safe monotonically increasing key source.
#[derive(Debug, Default)]
pub struct KeyAllocator {
    /// The most recently issued key value (0 before the first call).
    last: AtomicU64,
}

impl KeyAllocator {
    /// Create an allocator whose first key will be `#1`.
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Issue the next key.
    ///
    /// Safe to call from any number of threads; each call observes a
    /// distinct previous value, so no two callers ever receive the same key.
    pub fn next(&self) -> Key {
        let previous = self.last.fetch_add(1, Ordering::AcqRel);
        Key(previous.saturating_add(1))
    }

    /// Return the most recently issued key, if any.
    pub fn last_issued(&self) -> Option<Key> {
        match self.last.load(Ordering::Acquire) {
            0 => None,
            n => Some(Key(n)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn starts_at_one_and_increases() {
        let keys = KeyAllocator::new();
        assert_eq!(keys.last_issued(), None);
        assert_eq!(keys.next(), Key(1));
        assert_eq!(keys.next(), Key(2));
        assert_eq!(keys.next(), Key(3));
        assert_eq!(keys.last_issued(), Some(Key(3)));
    }

    #[test]
    fn concurrent_callers_never_share_a_key() {
        let keys = Arc::new(KeyAllocator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let keys = Arc::clone(&keys);
                thread::spawn(move || (0..500).map(|_| keys.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = BTreeSet::new();
        for handle in handles {
            let issued = handle.join().unwrap();
            // Each thread sees its own keys in strictly increasing order.
            assert!(issued.windows(2).all(|w| w.first() < w.get(1)));
            for key in issued {
                assert!(seen.insert(key), "key {key} issued twice");
            }
        }
        assert_eq!(seen.len(), 4000);
        assert_eq!(seen.first(), Some(&Key(1)));
        assert_eq!(seen.last(), Some(&Key(4000)));
    }
}
