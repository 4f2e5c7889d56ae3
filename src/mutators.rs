use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::error::MutatorError;

/// Names of the members whose writes change a value's identity for hashing.
///
/// Clones share storage, so one configuration can back any number of
/// instances. Each [`HashCache`](crate::HashCache) holds its own handle;
/// there is no process-wide set.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct Mutators {
    names: Arc<BTreeSet<Box<str>>>,
}

impl Mutators {
    /// No mutators: only explicit invalidation clears the hash.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds a set from trusted, compile-time names. Empty names are skipped.
    #[must_use]
    pub fn from_static(names: &[&'static str]) -> Self {
        Self {
            names: Arc::new(
                names
                    .iter()
                    .filter(|name| !name.is_empty())
                    .map(|name| Box::from(*name))
                    .collect(),
            ),
        }
    }

    /// Builds a set from untrusted input such as a configuration file.
    ///
    /// Names are trimmed. Empty names are rejected.
    pub fn parse<I, S>(names: I) -> Result<Self, MutatorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(MutatorError::EmptyName);
            }
            set.insert(Box::from(name));
        }
        Ok(Self {
            names: Arc::new(set),
        })
    }

    /// Whether a write through `name` must invalidate the cached hash.
    /// Every configured name matches.
    #[inline]
    #[must_use]
    pub fn is_mutator(&self, name: &str) -> bool {
        !self.names.is_empty() && self.names.contains(name)
    }

    /// Whether both handles point at the same configuration storage.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.names, &other.names)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Debug for Mutators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl TryFrom<Vec<String>> for Mutators {
    type Error = MutatorError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(names)
    }
}

impl From<Mutators> for Vec<String> {
    fn from(mutators: Mutators) -> Self {
        mutators.iter().map(str::to_owned).collect()
    }
}

/// Type-scoped mutator configuration.
///
/// The default [`mutators`](Self::mutators) builds a new set on every call.
/// Override it with a `OnceLock` to share one set across all instances of
/// the type:
///
/// ```
/// use std::sync::OnceLock;
///
/// use hashcache::{HashCache, HashMutators, Mutators};
///
/// #[derive(PartialEq, Eq, Hash)]
/// struct Tally(u32);
///
/// impl HashMutators for Tally {
///     const MUTATORS: &'static [&'static str] = &["add"];
///
///     fn mutators() -> Mutators {
///         static SHARED: OnceLock<Mutators> = OnceLock::new();
///         SHARED
///             .get_or_init(|| Mutators::from_static(Self::MUTATORS))
///             .clone()
///     }
/// }
///
/// let a = HashCache::tracked(Tally(1));
/// let b = HashCache::tracked(Tally(2));
/// assert!(Mutators::ptr_eq(HashCache::mutators(&a), HashCache::mutators(&b)));
/// ```
///
/// ```
/// use hashcache::{HashCache, HashMutators};
///
/// #[derive(PartialEq, Eq, Hash)]
/// struct Counter {
///     count: u32,
/// }
///
/// impl Counter {
///     fn bump(&mut self) {
///         self.count += 1;
///     }
/// }
///
/// impl HashMutators for Counter {
///     const MUTATORS: &'static [&'static str] = &["bump"];
/// }
///
/// let mut counter = HashCache::tracked(Counter { count: 0 });
/// HashCache::get_hash(&counter);
/// HashCache::mutate(&mut counter, "bump", Counter::bump);
/// assert_eq!(HashCache::cached_hash(&counter), None);
/// ```
pub trait HashMutators {
    const MUTATORS: &'static [&'static str];

    #[must_use]
    fn mutators() -> Mutators {
        Mutators::from_static(Self::MUTATORS)
    }
}
