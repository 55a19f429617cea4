use alloc::vec::Vec;
use core::fmt::Debug;
use log::{debug, trace};
use crate::{storage::Storage, Error, Incompatibility, Side};
use super::{Forest, Node, Finalizer, TreeId};

/// Where the grafted tree ends up.
enum Graft<T> {
    /// In the given empty child slot of the destination node.
    IntoSlot(Side),
    /// Next to the destination tree, under a new root holding the payload.
    UnderNewRoot(T),
}

impl<T, K, S> Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    /// Grafts the whole tree rooted at `tree2` onto `tree1`, returning the root of the combined tree.
    ///
    /// `tree1` may be any node of its tree, while `tree2` has to be a root. Both trees must share the same [finalizer] (or both have none). The first applicable shape is used:
    /// 1. If `tree1` has a free child slot, `tree2` becomes its child, the left slot winning if both are free. `data` is not needed and gets dropped if provided.
    /// 2. If `tree1` is a full root and `data` is provided, a new root holding `data` is created, with `tree1` as its left child and `tree2` as its right child.
    ///
    /// Afterwards, every node formerly in the second tree belongs to the first one, and the second tree no longer exists on its own.
    ///
    /// # Errors
    /// - [`MissingNode`] if either node does not exist
    /// - [`IncompatibleTrees`] if none of the shapes apply or the trees cannot be combined at all; see [`Incompatibility`] for the exact reasons
    ///
    /// The forest is left untouched on failure, and `data`, if any, is dropped without going through the finalizer.
    ///
    /// # Example
    /// ```rust
    /// use bitree::{Forest, Error, Incompatibility};
    ///
    /// let mut forest = Forest::<_>::new();
    /// let a = forest.create(None, 'a');
    /// forest.insert_left(a, 'b').unwrap();
    /// forest.insert_right(a, 'c').unwrap();
    /// let d = forest.create(None, 'd');
    ///
    /// // `a` is a full branch, so a new root is needed...
    /// assert_eq!(
    ///     forest.merge(a, d, None),
    ///     Err(Error::IncompatibleTrees(Incompatibility::NoMatchingShape)),
    /// );
    /// // ...and providing a payload for it makes the merge possible.
    /// let root = forest.merge(a, d, Some('r')).unwrap();
    /// assert_eq!(forest.left_of(root), Some(a));
    /// assert_eq!(forest.right_of(root), Some(d));
    /// assert_eq!(forest.size(d), 5);
    /// ```
    ///
    /// [finalizer]: struct.Finalizer.html " "
    /// [`MissingNode`]: enum.Error.html#variant.MissingNode " "
    /// [`IncompatibleTrees`]: enum.Error.html#variant.IncompatibleTrees " "
    /// [`Incompatibility`]: enum.Incompatibility.html " "
    pub fn merge(&mut self, tree1: K, tree2: K, data: Option<T>) -> Result<K, Error> {
        let node1 = self.nodes.get(&tree1).ok_or(Error::MissingNode)?;
        let node2 = self.nodes.get(&tree2).ok_or(Error::MissingNode)?;
        let (id1, id2) = (node1.tree, node2.tree);
        let (record1, record2) = (self.record(id1), self.record(id2));
        if record2.root != tree2 {
            return Err(Incompatibility::NotARoot.into());
        }
        if id1 == id2 {
            return Err(Incompatibility::SameTree.into());
        }
        if !Finalizer::same_or_both_absent(record1.finalizer.as_ref(), record2.finalizer.as_ref()) {
            return Err(Incompatibility::FinalizerMismatch.into());
        }
        let graft = match (node1.free_side(), data) {
            (Some(side), _) => Graft::IntoSlot(side),
            (None, Some(data)) if record1.root == tree1 => Graft::UnderNewRoot(data),
            (None, _) => return Err(Incompatibility::NoMatchingShape.into()),
        };
        let grafted_size = record2.size;

        let rebound = self.rebind(tree2, id1);
        debug_assert_eq!(rebound, grafted_size, "tree size does not match its node count");
        self.trees.remove(&id2);
        let root = match graft {
            Graft::IntoSlot(side) => {
                *self.linked_mut(tree1).child_mut(side) = Some(tree2);
                self.linked_mut(tree2).parent = Some(tree1);
                let record = self.record_mut(id1);
                record.size += grafted_size;
                record.root
            }
            Graft::UnderNewRoot(data) => {
                let new_root = self.nodes.add(Node {
                    value: data,
                    parent: None,
                    left: Some(tree1),
                    right: Some(tree2),
                    tree: id1,
                });
                self.linked_mut(tree1).parent = Some(new_root);
                self.linked_mut(tree2).parent = Some(new_root);
                let record = self.record_mut(id1);
                record.root = new_root;
                record.size += grafted_size + 1;
                new_root
            }
        };
        debug!(
            "merged tree {} into tree {} under {:?}, the root is now {:?}",
            id2, id1, tree1, root,
        );
        Ok(root)
    }

    /// Moves every node of the subtree under `top` into the given tree, returning how many nodes were moved.
    fn rebind(&mut self, top: K, tree: TreeId) -> usize {
        let mut moved = 0;
        let mut stack = Vec::new();
        stack.push(top);
        while let Some(key) = stack.pop() {
            let node = self.linked_mut(key);
            node.tree = tree;
            stack.extend(node.children());
            moved += 1;
        }
        trace!("rebound {} node(s) under {:?} to tree {}", moved, top, tree);
        moved
    }
}
