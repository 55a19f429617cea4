//! Utilities for treating the backing storage for forests generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the trait for the arenas which own the nodes of a forest
//! - [`SparseVec`], a `Vec` of slots with a free list of holes and generation-checked keys
//! - [`DefaultStorage`], a type definition for the backing storage used by forests unless a different one is specified
//!
//! With the `slotmap` feature flag, `SlotMap`, `HopSlotMap` and `DenseSlotMap` from the [`slotmap`] crate implement [`Storage`] too.
//!
//! [`slotmap`]: https://docs.rs/slotmap " "

mod sparse;
pub use sparse::{SparseKey, SparseVec};

#[cfg(feature = "slotmap")]
mod slotmap_impl;

use core::{fmt::Debug, hash::Hash};

/// Trait for the containers which can be the backing storage for forests.
///
/// Keys handed out by [`add`] identify an element until it's removed. After that, the key is *stale*: implementations are required to report stale keys as absent (`contains_key` returns `false`, `get`/`get_mut`/`remove` return `None`) rather than resolving them to whatever element later took the same place. Forests rely on this to turn the reuse of a removed node's key into a no-op instead of a corruption.
///
/// [`add`]: #tymethod.add " "
pub trait Storage: Sized {
    /// The type used for element naming.
    ///
    /// Keys are copied around freely by the forest, which is why they're required to be `Copy`.
    type Key: Copy + Debug + Eq + Hash;
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified key, returning that key.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Removes and returns the element identified by `key`, or `None` if the key is stale or was never issued by this storage.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Element>;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element, or `None` if the key is not present in the storage.
    fn get(&self, key: &Self::Key) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element, or `None` if the key is not present in the storage.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element>;

    /// Returns `true` if the specified key is present in the storage, `false` otherwise.
    #[inline]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// The default implementation returns the length.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least `additional` more elements. Does nothing if capacity is already sufficient.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn reserve(&mut self, _additional: usize) {}
    /// Shrinks the capacity of the storage as much as possible.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The default storage type used by forests when a storage type is not provided.
///
/// Always a [`SparseVec`], since it's the only built-in storage which doesn't need an extra dependency and still detects stale keys.
///
/// [`SparseVec`]: struct.SparseVec.html " "
pub type DefaultStorage<T> = SparseVec<T>;
