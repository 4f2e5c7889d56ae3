use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

/// Memo cell for a hash value. Behaves like an atomic `Option<NonZeroU64>`:
/// zero is the "nothing cached" marker.
#[repr(transparent)]
pub struct HashSlot(AtomicU64);

impl HashSlot {
    pub const fn empty() -> Self {
        Self(AtomicU64::new(0))
    }

    #[inline]
    pub fn load(&self) -> Option<u64> {
        match self.0.load(Ordering::Acquire) {
            0 => None,
            hash => Some(hash),
        }
    }

    /// Stores `hash` and returns the value that was actually stored.
    ///
    /// A hash of 0 collides with the empty marker, so it is bumped to 1.
    #[inline]
    pub fn store(&self, hash: u64) -> u64 {
        let hash = hash.max(1);
        self.0.store(hash, Ordering::Release);
        hash
    }

    /// Empties the slot. Returns whether a memo was dropped.
    #[inline]
    pub fn clear(&self) -> bool {
        self.0.swap(0, Ordering::AcqRel) != 0
    }
}

impl Default for HashSlot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Debug for HashSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.load().fmt(f)
    }
}

impl Clone for HashSlot {
    fn clone(&self) -> Self {
        Self(AtomicU64::new(self.0.load(Ordering::Acquire)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_stored() {
        let slot = HashSlot::empty();
        assert_eq!(slot.load(), None);
        assert_eq!(slot.store(42), 42);
        assert_eq!(slot.load(), Some(42));
    }

    #[test]
    fn clear_reports_dropped_memo() {
        let slot = HashSlot::default();
        assert!(!slot.clear());
        slot.store(7);
        assert!(slot.clear());
        assert_eq!(slot.load(), None);
        assert!(!slot.clear());
    }

    #[test]
    fn zero_is_bumped() {
        let slot = HashSlot::empty();
        assert_eq!(slot.store(0), 1);
        assert_eq!(slot.load(), Some(1));
    }

    #[test]
    fn clone_copies_memo() {
        let slot = HashSlot::empty();
        slot.store(u64::MAX);
        let copy = slot.clone();
        slot.clear();
        assert_eq!(copy.load(), Some(u64::MAX));
        assert_eq!(slot.load(), None);
    }
}
