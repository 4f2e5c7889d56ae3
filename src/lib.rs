//! For a type `T`, [`HashCache<T>`](HashCache) wraps `T` and implements
//! [`Hash`](https://doc.rust-lang.org/std/hash/trait.Hash.html) by memoizing
//! `T`'s hash. This lets mutable values that are expensive to hash serve as
//! [`HashMap`](https://doc.rust-lang.org/std/collections/struct.HashMap.html)
//! keys without rehashing them on every lookup.
//!
//! The memo is dropped when the value is written through a *mutator member*:
//! a name registered in the wrapper's [`Mutators`] and passed to
//! [`HashCache::mutate`]. Writes through any other name, and all reads, keep
//! the memo. Mutators are configured per instance
//! ([`HashCache::with_mutators`]) or per type ([`HashMutators`]), never
//! globally. Every configured name counts, whatever it is called.
//!
//! Unnamed mutable access ([`DerefMut`](std::ops::DerefMut), [`AsMut`],
//! [`HashCache::get_mut`]) always drops the memo. Changes made through
//! interior mutability are invisible to the wrapper, so call
//! [`HashCache::invalidate`] after them.
//!
//! Every mutation needs `&mut HashCache`, so a memo can never be read while it
//! is being invalidated. Don't mutate a tracked member while the value sits
//! inside a hashed collection: the collection has filed it under the old hash.
//!
//! ```
//! use hashcache::{HashCache, Mutators};
//!
//! let mut names = HashCache::with_mutators(
//!     vec!["a".to_string()],
//!     Mutators::from_static(&["push"]),
//! );
//! let before = HashCache::get_hash(&names);
//! HashCache::mutate(&mut names, "push", |v| v.push("b".to_string()));
//! assert_eq!(HashCache::cached_hash(&names), None);
//! assert_ne!(before, HashCache::get_hash(&names));
//! ```
//!
//! Invalidations are reported as `tracing` events at `TRACE` level.

mod error;
mod hashcache;
mod identity;
mod mutators;
mod slot;

pub use crate::error::MutatorError;
pub use crate::hashcache::HashCache;
pub use crate::identity::Identity;
pub use crate::mutators::{HashMutators, Mutators};
