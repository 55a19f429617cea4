use alloc::vec::Vec;
use core::fmt::Debug;
use log::debug;
use crate::{storage::Storage, util::corrupted};
use super::{Forest, Node, TreeId};

/// A step of the post-order walk performed by removal.
#[derive(Copy, Clone, Debug)]
enum Visit<K> {
    /// The children of the node have yet to be scheduled.
    Enter(K),
    /// Both subtrees of the node are gone, so the node itself can go.
    Leave(K),
}

impl<T, K, S> Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    /// Removes the node together with all of its descendants, returning how many nodes were removed.
    ///
    /// Descendants are removed before their ancestors, in post-order, and each removed payload is passed to the finalizer of the tree, if it has one. If the node was the root, the whole tree ceases to exist; otherwise, its parent loses the corresponding child and the tree shrinks accordingly.
    ///
    /// Removing a node which does not exist (anymore) does nothing and returns 0.
    ///
    /// # Example
    /// ```rust
    /// # use bitree::Forest;
    /// let mut forest = Forest::<_>::new();
    /// let root = forest.create(None, 0);
    /// let left = forest.insert_left(root, 1).unwrap();
    /// forest.insert_left(left, 2).unwrap();
    /// forest.insert_right(left, 3).unwrap();
    ///
    /// assert_eq!(forest.remove(left), 3);
    /// assert!(forest.is_leaf(root));
    /// assert_eq!(forest.size(root), 1);
    /// // Stale keys are ignored.
    /// assert_eq!(forest.remove(left), 0);
    /// ```
    pub fn remove(&mut self, node: K) -> usize {
        let tree = match self.nodes.get(&node) {
            Some(x) => x.tree,
            None => return 0,
        };
        // Cloned out because the record may be retired before the last payload is finalized
        let finalizer = self.record(tree).finalizer.clone();
        let mut removed = 0;
        let mut stack = Vec::new();
        stack.push(Visit::Enter(node));
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(key) => {
                    let children = self.linked(key).children();
                    stack.push(Visit::Leave(key));
                    // Right first, so that the left subtree is popped first
                    stack.extend(children.into_iter().rev().map(Visit::Enter));
                }
                Visit::Leave(key) => {
                    let removed_node = self
                        .nodes
                        .remove(&key)
                        .unwrap_or_else(|| corrupted("a link points to a removed node"));
                    self.unlink(key, removed_node.parent, removed_node.tree);
                    removed += 1;
                    match &finalizer {
                        Some(finalizer) => finalizer.finalize(removed_node.value),
                        None => drop(removed_node.value),
                    }
                }
            }
        }
        debug!("removed {} node(s) under {:?} from tree {}", removed, node, tree);
        removed
    }

    /// Detaches an already removed node from its parent, or retires its tree if it was the root.
    fn unlink(&mut self, key: K, parent: Option<K>, tree: TreeId) {
        match parent {
            Some(parent) => {
                let parent_node = self.linked_mut(parent);
                let side = parent_node
                    .side_of(key)
                    .unwrap_or_else(|| corrupted("a parent does not list its child"));
                *parent_node.child_mut(side) = None;
                self.record_mut(tree).size -= 1;
            }
            None => {
                self.trees.remove(&tree);
                debug!("tree {} is gone", tree);
            }
        }
    }
}
