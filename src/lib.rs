//! Implements arena-allocated linked binary trees which can be merged, pruned and walked one node at a time.
//!
//! # Overview
//! All nodes live in a [`Forest`], an arena which can hold any number of independent binary trees at once. Instead of pointers, nodes link to their parents and children through *keys* into the arena's backing [storage]. Every tree keeps one shared record of its root, its size and its optional [`Finalizer`], and every node knows which record it belongs to, so any node can answer "which tree am I in and how big is it" in constant time.
//!
//! The trees are deliberately unordered: the caller always chooses where a node goes. On top of the usual insertion and removal, forests support:
//! - **Greedy merging**: [`Forest::merge`] grafts a whole tree into a free child slot of any node of another tree, or, if the destination is a full root, puts both trees under a brand-new root.
//! - **Successor stepping**: [`Forest::next_preorder`], [`next_postorder`], [`next_inorder`] and [`next_level_order`] compute the node which a traversal in the given order would visit right after a given one, using nothing but the links of the tree. Stepping from any node `size` times comes back around to it, having visited every node of the tree exactly once. The [`traversal`] module wraps this into iterators.
//!
//! # Example
//! ```rust
//! use bitree::{Forest, Order};
//!
//! let mut forest = Forest::<_>::new();
//! let a = forest.create(None, 'A');
//! let b = forest.insert_left(a, 'B').unwrap();
//! let c = forest.insert_right(a, 'C').unwrap();
//! assert_eq!(forest.size(a), 3);
//!
//! assert_eq!(forest.next_preorder(a), b);
//! assert_eq!(forest.next_preorder(b), c);
//! // Stepping past the last node wraps around to the first one.
//! assert_eq!(forest.next_preorder(c), a);
//!
//! let inorder: String = forest.traverse(b, Order::Inorder).map(|node| *node.value()).collect();
//! assert_eq!(inorder, "BAC");
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**): enables the standard library support of the dependencies. Without it, the crate is `no_std` but still requires `alloc`.
//! - `unwind_safety` (**enabled by default**): aborts the process if a finalizer panics in the middle of a removal, instead of unwinding through a half-updated forest. Requires `std`.
//! - `slotmap`: adds `Storage` trait implementations for [`SlotMap`], [`HopSlotMap`] and [`DenseSlotMap`].
//! - `doc_cfg`: annotates feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` (**required**): `^0.5`
//! - `slotmap` (*optional*): `^1.0`
//!
//! [storage]: storage/index.html " "
//! [`next_postorder`]: struct.Forest.html#method.next_postorder " "
//! [`next_inorder`]: struct.Forest.html#method.next_inorder " "
//! [`next_level_order`]: struct.Forest.html#method.next_level_order " "
//! [`traversal`]: traversal/index.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`HopSlotMap`]: https://docs.rs/slotmap/*/slotmap/hop/struct.HopSlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
    clippy::verbose_file_reads,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage, SparseKey, SparseVec};

pub mod forest;
pub use forest::{Forest, Finalizer, Node, NodeRef, NodeRefMut};
#[cfg(feature = "slotmap")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slotmap")))]
pub use forest::SlotMapForest;

pub mod traversal;
pub use traversal::{Order, Steps};

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        SparseVec as SparseTreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::forest::{
        Forest as BinaryForest,
        Finalizer as NodeFinalizer,
        NodeRef as BinaryTreeNodeRef,
        NodeRefMut as BinaryTreeNodeRefMut,
    };
    #[doc(no_inline)]
    pub use crate::traversal::Order as TraversalOrder;
    #[doc(no_inline)]
    pub use crate::{Error as TreeError, Side as ChildSide};
}

pub(crate) mod util;

use core::fmt::{self, Formatter, Display};

/// One of the two child slots of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}
impl Side {
    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
impl Display for Side {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// The error type returned by the fallible operations on forests.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// A node which the operation requires does not exist, either because its key was never issued by the forest or because the node has been removed since.
    #[error("the node does not exist in the forest")]
    MissingNode,
    /// The child slot which was supposed to receive a new node is already taken. Insertion never overwrites existing children.
    #[error("the {0} child slot is already occupied")]
    SlotOccupied(Side),
    /// The trees passed to [`Forest::merge`] cannot be merged. Contains the reason.
    ///
    /// [`Forest::merge`]: struct.Forest.html#method.merge " "
    #[error("cannot merge the trees")]
    IncompatibleTrees(#[from] Incompatibility),
}

/// The reason why two trees cannot be merged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Incompatibility {
    /// The node to be grafted is not the root of its tree. Only whole trees can be grafted.
    #[error("the grafted node is not the root of its tree")]
    NotARoot,
    /// Both nodes already are in the same tree.
    #[error("both nodes belong to the same tree")]
    SameTree,
    /// The trees do not share the same finalizer (or one has a finalizer and the other doesn't), so the merged tree couldn't finalize all of its nodes consistently.
    #[error("the trees have different finalizers")]
    FinalizerMismatch,
    /// The destination node has no free child slot, and a new root could not be created over it, either because it is not the root of its tree or because no payload for the new root was provided.
    #[error("the destination is a full branch and no new root can be created over it")]
    NoMatchingShape,
}
