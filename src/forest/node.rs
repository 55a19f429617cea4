use arrayvec::ArrayVec;
use crate::{storage::SparseKey, Side};
use super::Finalizer;

/// The key of a tree record inside the forest.
pub(crate) type TreeId = SparseKey;

/// A node of a forest.
///
/// Created by the forest internally and only publicly exposed so that forest storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, K> {
    pub(crate) value: T,
    pub(crate) parent: Option<K>,
    pub(crate) left: Option<K>,
    pub(crate) right: Option<K>,
    pub(crate) tree: TreeId,
}
impl<T, K: Copy + PartialEq> Node<T, K> {
    /// Creates a root node which is not yet attached to any tree record.
    #[inline(always)]
    pub(crate) const fn detached(value: T) -> Self {
        Self {
            value,
            parent: None,
            left: None,
            right: None,
            tree: SparseKey::DANGLING,
        }
    }
    #[inline(always)]
    pub(crate) const fn leaf(value: T, parent: K, tree: TreeId) -> Self {
        Self {
            value,
            parent: Some(parent),
            left: None,
            right: None,
            tree,
        }
    }

    #[inline(always)]
    pub(crate) fn child(&self, side: Side) -> Option<K> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
    #[inline(always)]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
    /// Returns the existing children, left one first.
    #[inline]
    pub(crate) fn children(&self) -> ArrayVec<[K; 2]> {
        let mut children = ArrayVec::new();
        children.extend(self.left);
        children.extend(self.right);
        children
    }
    /// Returns the side on which `child` hangs from this node, or `None` if it's not a child of this node.
    #[inline]
    pub(crate) fn side_of(&self, child: K) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
    /// The first empty child slot, the left one winning if both are empty.
    #[inline]
    pub(crate) fn free_side(&self) -> Option<Side> {
        match (self.left, self.right) {
            (None, _) => Some(Side::Left),
            (Some(..), None) => Some(Side::Right),
            (Some(..), Some(..)) => None,
        }
    }
    #[inline(always)]
    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    #[inline(always)]
    pub(crate) const fn is_full_branch(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
    /// The child from which a descent towards the leftmost deepest node continues: the left one if present, the right one otherwise.
    #[inline(always)]
    pub(crate) fn first_child(&self) -> Option<K> {
        self.left.or(self.right)
    }
}

/// The bookkeeping shared by all nodes of one tree.
#[derive(Clone, Debug)]
pub(crate) struct TreeRecord<T, K> {
    pub(crate) root: K,
    pub(crate) size: usize,
    pub(crate) finalizer: Option<Finalizer<T>>,
}
