use core::fmt::Debug;
use arrayvec::ArrayVec;
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{Order, Steps},
};
use super::{Forest, Node, NodeRefMut};

/// A reference to a node in a forest.
///
/// Since this type does not point to the node directly, but rather the forest the node is in and the key of the node in the storage, it can be used to walk around the tree.
///
/// # Example
/// ```rust
/// # use bitree::Forest;
/// let mut forest = Forest::<_>::new();
/// let root = forest.create(None, "root");
/// let left = forest.insert_left(root, "left").unwrap();
/// forest.insert_right(left, "grandchild").unwrap();
///
/// let grandchild = forest.node(left).unwrap().right_child().unwrap();
/// assert_eq!(*grandchild.value(), "grandchild");
/// assert_eq!(grandchild.depth(), 2);
/// assert!(!grandchild.is_left_child());
/// assert_eq!(*grandchild.root().value(), "root");
/// assert_eq!(grandchild.root().height(), 3);
/// ```
#[derive(Debug)]
pub struct NodeRef<'a, T, K, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    forest: &'a Forest<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the forest, or `None` if the node does not exist.
    #[inline]
    pub fn new_raw(forest: &'a Forest<T, K, S>, key: K) -> Option<Self> {
        if forest.nodes.contains_key(&key) {
            Some(Self::new_linked(forest, key))
        } else {
            None
        }
    }
    /// Creates a `NodeRef` for a key known to exist.
    #[inline(always)]
    pub(crate) fn new_linked(forest: &'a Forest<T, K, S>, key: K) -> Self {
        Self { forest, key }
    }
    /// Returns the raw storage key for the node.
    #[inline(always)]
    pub fn key(&self) -> K {
        self.key
    }
    /// Returns the forest which the node is in.
    #[inline(always)]
    pub fn forest(&self) -> &'a Forest<T, K, S> {
        self.forest
    }
    /// Returns a reference to the data stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|x| self.relative(x))
    }
    /// Returns a reference to the left child, or `None` if there isn't one.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.node().left.map(|x| self.relative(x))
    }
    /// Returns a reference to the right child, or `None` if there isn't one.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.node().right.map(|x| self.relative(x))
    }
    /// Returns references to the existing children, the left one first.
    #[inline]
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        self.node()
            .children()
            .into_iter()
            .map(|x| self.relative(x))
            .collect()
    }
    /// Returns a reference to the root of the tree which the node is in.
    #[inline]
    pub fn root(&self) -> Self {
        self.relative(self.forest.record(self.node().tree).root)
    }
    /// Returns the number of nodes in the tree which the node is in.
    #[inline]
    pub fn size(&self) -> usize {
        self.forest.record(self.node().tree).size
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
    /// Returns `true` if the node is a *full branch*, i.e. has both children; `false` otherwise.
    #[inline]
    pub fn is_full_branch(&self) -> bool {
        self.node().is_full_branch()
    }
    /// Returns `true` if the node is the left child of its parent, `false` if it's the right child or the root.
    #[inline]
    pub fn is_left_child(&self) -> bool {
        self.node()
            .parent
            .map_or(false, |parent| self.forest.linked(parent).left == Some(self.key))
    }
    /// Returns `true` if the node is the right child of its parent, `false` if it's the left child or the root.
    #[inline]
    pub fn is_right_child(&self) -> bool {
        self.node()
            .parent
            .map_or(false, |parent| self.forest.linked(parent).right == Some(self.key))
    }
    /// Returns the number of edges between the node and the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.forest.depth_of(self.key).unwrap_or_default()
    }
    /// Returns the number of levels in the subtree under the node, counting the node itself.
    #[inline]
    pub fn height(&self) -> usize {
        self.forest.height_of(self.key)
    }

    /// Returns the node visited right after this one by a preorder traversal of the tree, wrapping around at the end.
    #[inline]
    pub fn next_preorder(&self) -> Self {
        self.step(Order::Preorder)
    }
    /// Returns the node visited right after this one by a postorder traversal of the tree, wrapping around at the end.
    #[inline]
    pub fn next_postorder(&self) -> Self {
        self.step(Order::Postorder)
    }
    /// Returns the node visited right after this one by an inorder traversal of the tree, wrapping around at the end.
    #[inline]
    pub fn next_inorder(&self) -> Self {
        self.step(Order::Inorder)
    }
    /// Returns the node visited right after this one by a level-order traversal of the tree, wrapping around at the end.
    #[inline]
    pub fn next_level_order(&self) -> Self {
        self.step(Order::LevelOrder)
    }
    /// Returns the node visited right after this one by a traversal of the tree in the given order, wrapping around at the end.
    #[inline]
    pub fn step(&self, order: Order) -> Self {
        self.relative(self.forest.step(self.key, order))
    }
    /// Returns an iterator over all nodes of the tree in the given order, starting from this node and wrapping around at the end.
    #[inline]
    pub fn traverse(&self, order: Order) -> Steps<'a, T, K, S> {
        self.forest.traverse(self.key, order)
    }

    #[inline(always)]
    fn relative(&self, key: K) -> Self {
        Self::new_linked(self.forest, key)
    }
    #[inline(always)]
    fn node(&self) -> &'a Node<T, K> {
        self.forest.linked(self.key)
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, K, S> PartialEq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    /// Two references are equal if they point to the same node of the same forest.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.forest, other.forest) && self.key == other.key
    }
}
impl<T, K, S> Eq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<'a, T, K, S> From<NodeRefMut<'a, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    #[inline]
    fn from(op: NodeRefMut<'a, T, K, S>) -> Self {
        let (forest, key) = op.into_parts();
        Self::new_linked(forest, key)
    }
}
