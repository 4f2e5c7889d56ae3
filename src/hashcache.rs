use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};
use std::ops::{Deref, DerefMut};

use tracing::{debug, trace};

use crate::mutators::{HashMutators, Mutators};
use crate::slot::HashSlot;

#[derive(Debug)]
pub struct HashCache<T: Eq + Hash, BH: BuildHasher = BuildHasherDefault<DefaultHasher>> {
    value: T,
    hash: HashSlot,
    mutators: Mutators,
    build_hasher: BH,
}

impl<T: Eq + Hash> HashCache<T> {
    /// Wraps `value` with no mutator members. The hash is only dropped by
    /// [`get_mut`](Self::get_mut), `DerefMut` and [`invalidate`](Self::invalidate).
    pub fn new(value: T) -> Self {
        HashCache::<T>::new_with_hasher(value)
    }

    pub fn with_mutators(value: T, mutators: Mutators) -> Self {
        HashCache::from_parts(value, mutators, BuildHasherDefault::default())
    }
}

impl<T: Eq + Hash + HashMutators> HashCache<T> {
    /// Wraps `value` using the mutator names declared by its type.
    pub fn tracked(value: T) -> Self {
        HashCache::with_mutators(value, T::mutators())
    }
}

impl<T: Eq + Hash, H: Hasher + Default> HashCache<T, BuildHasherDefault<H>> {
    pub fn new_with_hasher(value: T) -> Self {
        HashCache::<T, BuildHasherDefault<H>>::new_with_build_hasher(value, Default::default())
    }
}

impl<T: Eq + Hash, BH: BuildHasher> HashCache<T, BH> {
    pub fn new_with_build_hasher(value: T, build_hasher: BH) -> Self {
        HashCache::from_parts(value, Mutators::none(), build_hasher)
    }

    pub fn from_parts(value: T, mutators: Mutators, build_hasher: BH) -> Self {
        HashCache {
            value,
            hash: HashSlot::empty(),
            mutators,
            build_hasher,
        }
    }

    /// Returns the memoized hash, computing and storing it first if needed.
    #[inline]
    pub fn get_hash(this: &Self) -> u64 {
        if let Some(hash) = this.hash.load() {
            return hash;
        }
        let mut hasher = this.build_hasher.build_hasher();
        this.value.hash(&mut hasher);
        this.hash.store(hasher.finish())
    }

    /// The memoized hash, if one is currently stored.
    #[inline]
    #[must_use]
    pub fn cached_hash(this: &Self) -> Option<u64> {
        this.hash.load()
    }

    /// Drops the memoized hash.
    ///
    /// Needed when the value changes in a way neither [`mutate`](Self::mutate)
    /// nor a mutable borrow can see, e.g. through interior mutability.
    #[inline]
    pub fn invalidate(this: &mut Self) {
        if this.hash.clear() {
            trace!("cached hash invalidated");
        }
    }

    /// Runs `f` on the value as a write through `member`.
    ///
    /// The hash is dropped afterwards if `member` is a configured mutator.
    /// Any other name leaves the memo as it was, so `f` must not change
    /// anything the hash covers unless `member` is registered.
    pub fn mutate<R>(this: &mut Self, member: &str, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut this.value);
        if this.mutators.is_mutator(member) {
            let dropped = this.hash.clear();
            trace!(member, dropped, "mutator invalidated hash");
        }
        result
    }

    /// Replaces this instance's mutator names. The memo is kept.
    pub fn configure_mutators(this: &mut Self, mutators: Mutators) {
        debug!(count = mutators.len(), "mutators reconfigured");
        this.mutators = mutators;
    }

    #[inline]
    #[must_use]
    pub fn mutators(this: &Self) -> &Mutators {
        &this.mutators
    }

    #[inline]
    #[must_use]
    pub fn take_value(this: Self) -> T {
        this.value
    }

    #[inline]
    #[must_use]
    pub fn get(this: &Self) -> &T {
        &this.value
    }

    /// Unnamed mutable access. Always drops the hash.
    #[inline]
    #[must_use]
    pub fn get_mut(this: &mut Self) -> &mut T {
        Self::invalidate(this);
        &mut this.value
    }
}

impl<T: Eq + Hash, BH: BuildHasher> PartialEq for HashCache<T, BH> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq + Hash, BH: BuildHasher> Eq for HashCache<T, BH> {}

impl<T: Eq + Hash, BH: BuildHasher> Hash for HashCache<T, BH> {
    fn hash<H2: Hasher>(&self, state: &mut H2) {
        state.write_u64(Self::get_hash(self));
    }
}

impl<T: Eq + Hash, BH: BuildHasher> AsMut<T> for HashCache<T, BH> {
    fn as_mut(&mut self) -> &mut T {
        Self::get_mut(self)
    }
}

impl<T: Eq + Hash, BH: BuildHasher> AsRef<T> for HashCache<T, BH> {
    fn as_ref(&self) -> &T {
        Self::get(self)
    }
}

impl<T: Eq + Hash, BH: BuildHasher> Deref for HashCache<T, BH> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        Self::get(self)
    }
}

impl<T: Eq + Hash, BH: BuildHasher> DerefMut for HashCache<T, BH> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        Self::get_mut(self)
    }
}

impl<T: Eq + Hash, H: Hasher + Default> From<T> for HashCache<T, BuildHasherDefault<H>> {
    fn from(value: T) -> Self {
        Self::new_with_hasher(value)
    }
}

impl<T: Eq + Hash + Clone, BH: BuildHasher + Clone> Clone for HashCache<T, BH> {
    fn clone(&self) -> Self {
        HashCache {
            value: self.value.clone(),
            hash: self.hash.clone(),
            mutators: self.mutators.clone(),
            build_hasher: self.build_hasher.clone(),
        }
    }
}
