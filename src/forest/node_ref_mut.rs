use core::fmt::Debug;
use crate::{
    storage::{Storage, DefaultStorage},
    Error,
};
use super::{Forest, Node, NodeRef};

/// A *mutable* reference to a node in a forest.
///
/// Since this type does not point to the node directly, but rather the forest the node is in and the key of the node in the storage, it can be used to walk around the tree and modify it along the way.
///
/// # Example
/// ```rust
/// # use bitree::Forest;
/// let mut forest = Forest::<_>::new();
/// let root = forest.create(None, 1);
///
/// let mut root_ref = forest.node_mut(root).unwrap();
/// // Inserting returns a reference to the new child, so insertions can be chained.
/// root_ref.insert_left(2).unwrap().insert_right(3).unwrap();
/// *root_ref.value_mut() *= 10;
///
/// let sum: i32 = forest.preorder(root).map(|node| *node.value()).sum();
/// assert_eq!(sum, 15);
/// ```
#[derive(Debug)]
pub struct NodeRefMut<'a, T, K, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    forest: &'a mut Forest<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the forest, or `None` if the node does not exist.
    #[inline]
    pub fn new_raw(forest: &'a mut Forest<T, K, S>, key: K) -> Option<Self> {
        if forest.nodes.contains_key(&key) {
            Some(Self { forest, key })
        } else {
            None
        }
    }
    /// Returns the raw storage key for the node.
    #[inline(always)]
    pub fn key(&self) -> K {
        self.key
    }
    /// Returns an immutable reference to the node, through which the rest of the tree can be inspected.
    #[inline]
    pub fn as_node_ref(&self) -> NodeRef<'_, T, K, S> {
        NodeRef::new_linked(self.forest, self.key)
    }
    /// Returns a reference to the data stored in the node.
    #[inline]
    pub fn value(&self) -> &T {
        &self.forest.linked(self.key).value
    }
    /// Returns a *mutable* reference to the data stored in the node.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.forest.linked_mut(self.key).value
    }
    /// Consumes the reference and returns a *mutable* reference to the data stored in the node, which lives as long as the borrow of the forest.
    #[inline]
    pub fn into_value_mut(self) -> &'a mut T {
        &mut self.forest.linked_mut(self.key).value
    }
    /// Returns a *mutable* reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let parent = self.forest.linked(self.key).parent?;
        Some(NodeRefMut {
            forest: &mut *self.forest,
            key: parent,
        })
    }
    /// Returns a *mutable* reference to the left child, or `None` if there isn't one.
    #[inline]
    pub fn left_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let child = self.forest.linked(self.key).left?;
        Some(NodeRefMut {
            forest: &mut *self.forest,
            key: child,
        })
    }
    /// Returns a *mutable* reference to the right child, or `None` if there isn't one.
    #[inline]
    pub fn right_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let child = self.forest.linked(self.key).right?;
        Some(NodeRefMut {
            forest: &mut *self.forest,
            key: child,
        })
    }
    /// Adds a leaf holding `data` as the left child, returning a reference to it.
    ///
    /// # Errors
    /// Will fail if the node already has a left child; see [`Forest::insert_left`].
    ///
    /// [`Forest::insert_left`]: struct.Forest.html#method.insert_left " "
    #[inline]
    pub fn insert_left(&mut self, data: T) -> Result<NodeRefMut<'_, T, K, S>, Error> {
        let child = self.forest.insert_left(self.key, data)?;
        Ok(NodeRefMut {
            forest: &mut *self.forest,
            key: child,
        })
    }
    /// Adds a leaf holding `data` as the right child, returning a reference to it.
    ///
    /// # Errors
    /// Will fail if the node already has a right child; see [`Forest::insert_right`].
    ///
    /// [`Forest::insert_right`]: struct.Forest.html#method.insert_right " "
    #[inline]
    pub fn insert_right(&mut self, data: T) -> Result<NodeRefMut<'_, T, K, S>, Error> {
        let child = self.forest.insert_right(self.key, data)?;
        Ok(NodeRefMut {
            forest: &mut *self.forest,
            key: child,
        })
    }
    /// Removes the node together with its descendants, returning how many nodes were removed; see [`Forest::remove`].
    ///
    /// [`Forest::remove`]: struct.Forest.html#method.remove " "
    #[inline]
    pub fn remove(self) -> usize {
        self.forest.remove(self.key)
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    pub fn into_raw_key(self) -> K {
        self.key
    }

    #[inline(always)]
    pub(crate) fn into_parts(self) -> (&'a Forest<T, K, S>, K) {
        (self.forest, self.key)
    }
}
