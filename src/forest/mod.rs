//! Arenas of linked binary trees.
//!
//! A [`Forest`] owns the nodes of any number of binary trees. Nodes are addressed by the keys of the backing [`Storage`], and each node links to its parent and to up to two children, the left one and the right one. Either child may be missing regardless of the other one: a node with only a right child is perfectly valid.
//!
//! Besides the nodes, the forest keeps one record per tree, holding the key of its root, the number of its nodes and its optional [`Finalizer`]. Every node points at the record of the tree it belongs to, which is what makes the size of a tree and the finalizer available from any of its nodes without walking up to the root.
//!
//! # Example
//! ```rust
//! use bitree::{Forest, Finalizer, Error};
//! use std::{rc::Rc, cell::Cell};
//!
//! // Count how many payloads went through the finalizer.
//! let finalized = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&finalized);
//! let finalizer = Finalizer::new(move |_: u32| counter.set(counter.get() + 1));
//!
//! // The turbofish picks the default key and storage types, which could not be inferred otherwise.
//! let mut forest = Forest::<_>::new();
//! let first = forest.create(Some(finalizer.clone()), 1);
//! let second = forest.create(Some(finalizer), 2);
//! forest.insert_left(second, 3).unwrap();
//!
//! // Child slots are never overwritten.
//! assert_eq!(forest.insert_left(second, 4), Err(Error::SlotOccupied(bitree::Side::Left)));
//!
//! // `first` has two free slots, so the second tree is grafted into the left one.
//! let root = forest.merge(first, second, None).unwrap();
//! assert_eq!(root, first);
//! assert_eq!(forest.size(first), 3);
//! assert_eq!(forest.num_trees(), 1);
//!
//! // Removing the grafted subtree finalizes both of its payloads.
//! assert_eq!(forest.remove(second), 2);
//! assert_eq!(finalized.get(), 2);
//! assert_eq!(forest.size(first), 1);
//! ```
//!
//! [`Storage`]: ../storage/trait.Storage.html " "

mod base;
mod finalizer;
mod insertion;
mod merge;
mod node;
mod node_ref;
mod node_ref_mut;
mod removal;

pub use base::Forest;
pub use finalizer::Finalizer;
pub use node::Node;
pub(crate) use node::{TreeId, TreeRecord};
pub use node_ref::NodeRef;
pub use node_ref_mut::NodeRefMut;

/// A forest which uses a *sparse* `Vec` as backing storage.
///
/// The default `Forest` type already uses this, so this is only provided for explicitness and consistency.
#[allow(unused_qualifications)]
pub type SparseVecForest<T> =
    Forest<T, crate::storage::SparseKey, crate::storage::SparseVec<Node<T, crate::storage::SparseKey>>>;
/// A forest which uses a `SlotMap` as backing storage.
#[cfg(feature = "slotmap")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slotmap")))]
pub type SlotMapForest<T> =
    Forest<T, slotmap::DefaultKey, slotmap::SlotMap<slotmap::DefaultKey, Node<T, slotmap::DefaultKey>>>;
