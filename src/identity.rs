use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Process-unique token for values that should hash by *which* object they
/// are rather than by their contents.
///
/// Embed one in a type and hash only the identity: the hash then stays
/// stable across mutation of every other field. Not `Clone`, since a copy
/// is a different object.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity(u64);

impl Identity {
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::fresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_identities_differ() {
        let a = Identity::fresh();
        let b = Identity::fresh();
        assert_ne!(a, b);
        assert!(a < b);
        assert_ne!(a.get(), 0);
    }

    #[test]
    fn default_is_fresh() {
        assert_ne!(Identity::default(), Identity::default());
    }
}
