use alloc::vec::Vec;
use core::fmt::Debug;
use log::debug;
use crate::{
    storage::{Storage, DefaultStorage, SparseKey, SparseVec},
    util::corrupted,
};
use super::{Node, NodeRef, NodeRefMut, Finalizer, TreeId, TreeRecord};

/// An arena holding any number of binary trees.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Debug)]
pub struct Forest<T, K = SparseKey, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    pub(crate) nodes: S,
    pub(crate) trees: SparseVec<TreeRecord<T, K>>,
}
impl<T, K, S> Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    /// Creates an empty forest.
    ///
    /// Dynamically-allocated storages do not allocate memory when created this way.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Creates an empty forest with room for `capacity` nodes before the node storage needs to reallocate.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: S::with_capacity(capacity),
            trees: SparseVec::new(),
        }
    }
    /// Plants a new tree consisting of a single root node holding `data`, returning the key of the root.
    ///
    /// The `finalizer`, if any, becomes shared by all nodes which will ever be in this tree and receives their payloads when they get removed. Trees can only be [merged] if their finalizers are the same.
    ///
    /// [merged]: #method.merge " "
    pub fn create(&mut self, finalizer: Option<Finalizer<T>>, data: T) -> K {
        let root = self.nodes.add(Node::detached(data));
        let tree = self.trees.add(TreeRecord {
            root,
            size: 1,
            finalizer,
        });
        self.linked_mut(root).tree = tree;
        debug!("planted tree {} with root {:?}", tree, root);
        root
    }
    /// Removes the whole subtree under the node stored in `tree` and clears the variable.
    ///
    /// If the node is a root, this destroys the entire tree. Does nothing if the variable is already `None` or if the node is already gone.
    ///
    /// # Example
    /// ```rust
    /// # use bitree::Forest;
    /// let mut forest = Forest::<_>::new();
    /// let mut tree = Some(forest.create(None, "root"));
    /// forest.insert_left(tree.unwrap(), "child").unwrap();
    ///
    /// forest.destroy(&mut tree);
    /// assert_eq!(tree, None);
    /// assert_eq!(forest.num_nodes(), 0);
    ///
    /// // Destroying twice is harmless.
    /// forest.destroy(&mut tree);
    /// ```
    pub fn destroy(&mut self, tree: &mut Option<K>) {
        if let Some(node) = tree.take() {
            self.remove(node);
        }
    }

    /// Returns the number of nodes in all trees of the forest.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
    /// Returns the number of trees in the forest.
    #[inline]
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }
    /// Returns the number of nodes the forest can hold without reallocating its node storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }
    /// Reserves room for at least `additional` more nodes. Does nothing if the node storage already has enough.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional)
    }
    /// Shrinks the capacity of the node storage and of the tree records as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
        self.trees.shrink_to_fit();
    }
    /// Returns `true` if the node exists in the forest, `false` if the key is stale or was never issued.
    #[inline]
    pub fn contains(&self, node: K) -> bool {
        self.nodes.contains_key(&node)
    }
    /// Returns the number of nodes in the tree containing `node`, or 0 if the node does not exist.
    #[inline]
    pub fn size(&self, node: K) -> usize {
        self.nodes
            .get(&node)
            .map_or(0, |node| self.record(node.tree).size)
    }
    /// Returns `true` if there is no tree containing `node`, which can only be the case if the node does not exist.
    #[inline]
    pub fn is_empty(&self, node: K) -> bool {
        self.size(node) == 0
    }
    /// Returns `true` if the node exists and has no children, `false` otherwise.
    #[inline]
    pub fn is_leaf(&self, node: K) -> bool {
        self.nodes.get(&node).map_or(false, Node::is_leaf)
    }
    /// Returns `true` if the node exists and has no parent, `false` otherwise.
    #[inline]
    pub fn is_root(&self, node: K) -> bool {
        self.nodes.get(&node).map_or(false, |x| x.parent.is_none())
    }
    /// Returns the key of the left child of the node, or `None` if the node doesn't have one or does not exist.
    #[inline]
    pub fn left_of(&self, node: K) -> Option<K> {
        self.nodes.get(&node)?.left
    }
    /// Returns the key of the right child of the node, or `None` if the node doesn't have one or does not exist.
    #[inline]
    pub fn right_of(&self, node: K) -> Option<K> {
        self.nodes.get(&node)?.right
    }
    /// Returns the key of the parent of the node, or `None` if the node is a root or does not exist.
    #[inline]
    pub fn parent_of(&self, node: K) -> Option<K> {
        self.nodes.get(&node)?.parent
    }
    /// Returns the key of the root of the tree containing the node, or `None` if the node does not exist.
    #[inline]
    pub fn root_of(&self, node: K) -> Option<K> {
        let node = self.nodes.get(&node)?;
        Some(self.record(node.tree).root)
    }
    /// Returns a reference to the payload of the node, or `None` if the node does not exist.
    #[inline]
    pub fn value_of(&self, node: K) -> Option<&T> {
        self.nodes.get(&node).map(|x| &x.value)
    }
    /// Returns a *mutable* reference to the payload of the node, or `None` if the node does not exist.
    #[inline]
    pub fn value_mut_of(&mut self, node: K) -> Option<&mut T> {
        self.nodes.get_mut(&node).map(|x| &mut x.value)
    }
    /// Returns the finalizer of the tree containing the node, or `None` if the tree has no finalizer or the node does not exist.
    #[inline]
    pub fn finalizer_of(&self, node: K) -> Option<&Finalizer<T>> {
        let node = self.nodes.get(&node)?;
        self.record(node.tree).finalizer.as_ref()
    }

    /// Returns the number of levels in the subtree under the node, counting the node itself: 1 for a leaf, 0 if the node does not exist.
    pub fn height_of(&self, node: K) -> usize {
        if !self.nodes.contains_key(&node) {
            return 0;
        }
        let mut height = 0;
        let mut stack = Vec::new();
        stack.push((node, 1_usize));
        while let Some((key, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(
                self.linked(key)
                    .children()
                    .into_iter()
                    .map(|child| (child, level + 1)),
            );
        }
        height
    }
    /// Returns the number of edges between the node and the root of its tree, or `None` if the node does not exist.
    pub fn depth_of(&self, node: K) -> Option<usize> {
        let mut cursor = self.nodes.get(&node)?;
        let mut depth = 0;
        while let Some(parent) = cursor.parent {
            cursor = self.linked(parent);
            depth += 1;
        }
        Some(depth)
    }

    /// Returns a reference to the node, or `None` if it does not exist.
    #[inline]
    pub fn node(&self, node: K) -> Option<NodeRef<'_, T, K, S>> {
        NodeRef::new_raw(self, node)
    }
    /// Returns a *mutable* reference to the node, or `None` if it does not exist.
    #[inline]
    pub fn node_mut(&mut self, node: K) -> Option<NodeRefMut<'_, T, K, S>> {
        NodeRefMut::new_raw(self, node)
    }
    /// Returns an iterator over the roots of all trees in the forest, in no particular order.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_, T, K, S>> + '_ {
        self.trees
            .iter()
            .map(move |(_, record)| NodeRef::new_linked(self, record.root))
    }

    /// Looks up a node reached by following a link or a record, which therefore has to exist.
    #[inline]
    #[track_caller]
    pub(crate) fn linked(&self, key: K) -> &Node<T, K> {
        self.nodes
            .get(&key)
            .unwrap_or_else(|| corrupted("a link points to a removed node"))
    }
    #[inline]
    #[track_caller]
    pub(crate) fn linked_mut(&mut self, key: K) -> &mut Node<T, K> {
        self.nodes
            .get_mut(&key)
            .unwrap_or_else(|| corrupted("a link points to a removed node"))
    }
    #[inline]
    #[track_caller]
    pub(crate) fn record(&self, tree: TreeId) -> &TreeRecord<T, K> {
        self.trees
            .get(&tree)
            .unwrap_or_else(|| corrupted("a node belongs to a retired tree"))
    }
    #[inline]
    #[track_caller]
    pub(crate) fn record_mut(&mut self, tree: TreeId) -> &mut TreeRecord<T, K> {
        self.trees
            .get_mut(&tree)
            .unwrap_or_else(|| corrupted("a node belongs to a retired tree"))
    }
}
impl<T, K, S> Default for Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
