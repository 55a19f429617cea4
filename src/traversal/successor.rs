use core::fmt::Debug;
use crate::{
    forest::{Forest, Node},
    storage::Storage,
    util::corrupted,
};
use super::Order;

impl<T, K, S> Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    /// Returns the node visited right after `node` by a traversal of its tree in the given order.
    ///
    /// Past the last node of the traversal, the first one is returned. If the node does not exist, it's returned unchanged, and so is the only node of a single-node tree.
    #[inline]
    pub fn step(&self, node: K, order: Order) -> K {
        match order {
            Order::Preorder => self.next_preorder(node),
            Order::Postorder => self.next_postorder(node),
            Order::Inorder => self.next_inorder(node),
            Order::LevelOrder => self.next_level_order(node),
        }
    }
    /// Returns the node which a traversal of the tree containing `node` in the given order visits first, or `None` if the node does not exist.
    pub fn first_in(&self, node: K, order: Order) -> Option<K> {
        let root = self.root_of(node)?;
        Some(match order {
            Order::Preorder | Order::LevelOrder => root,
            Order::Postorder => self.deepest_first(root),
            Order::Inorder => self.leftmost(root),
        })
    }

    /// Returns the successor of `node` in preorder.
    ///
    /// The first child of the node comes next if there is one. Otherwise, the closest right subtree which hasn't been visited yet is found by walking up from the node, and the walk ending at the root means that the traversal is over and starts anew.
    ///
    /// # Example
    /// ```rust
    /// # use bitree::Forest;
    /// let mut forest = Forest::<_>::new();
    /// let root = forest.create(None, ());
    /// let left = forest.insert_left(root, ()).unwrap();
    /// let right = forest.insert_right(root, ()).unwrap();
    /// let left_right = forest.insert_right(left, ()).unwrap();
    ///
    /// assert_eq!(forest.next_preorder(root), left);
    /// assert_eq!(forest.next_preorder(left), left_right);
    /// assert_eq!(forest.next_preorder(left_right), right);
    /// assert_eq!(forest.next_preorder(right), root);
    /// ```
    pub fn next_preorder(&self, node: K) -> K {
        let current = match self.nodes.get(&node) {
            Some(x) => x,
            None => return node,
        };
        match current.first_child() {
            Some(child) => child,
            None => self.climb_preorder(node),
        }
    }
    /// Returns the successor of `node` in postorder.
    ///
    /// A left child is followed by the leftmost deepest node of its right sibling if there is one, or by its parent otherwise. A right child is always followed by its parent, and the root by the leftmost deepest node of the whole tree.
    pub fn next_postorder(&self, node: K) -> K {
        let current = match self.nodes.get(&node) {
            Some(x) => x,
            None => return node,
        };
        match current.parent {
            Some(parent) => match self.linked(parent).right {
                Some(right) if right != node => self.deepest_first(right),
                _ => parent,
            },
            None => self.deepest_first(node),
        }
    }
    /// Returns the successor of `node` in inorder.
    ///
    /// With a right subtree, its leftmost node comes next. Otherwise, the successor is the closest ancestor whose left subtree contains the node, and if there is none, the node was the last one and the traversal restarts from the leftmost node of the tree.
    pub fn next_inorder(&self, node: K) -> K {
        let current = match self.nodes.get(&node) {
            Some(x) => x,
            None => return node,
        };
        match current.right {
            Some(right) => self.leftmost(right),
            None => self.climb_inorder(node),
        }
    }
    /// Returns the successor of `node` in level order.
    ///
    /// Levels are scanned left to right without any queue, by walking the tree depth-first and skipping everything below the level being looked for. The first node to the right of `node` on the same level comes next; if there is none, the leftmost node of the next level does, and past the deepest level, the traversal starts over from the root.
    ///
    /// Every step walks the part of the tree above the levels involved, so stepping through a whole tree this way takes quadratic time in the worst case.
    pub fn next_level_order(&self, node: K) -> K {
        if !self.nodes.contains_key(&node) {
            return node;
        }
        let (root, depth) = self.root_and_depth(node);
        self.seek_level(root, node, depth, depth, false)
            .or_else(|| self.seek_level(root, root, 0, depth + 1, true))
            .unwrap_or(root)
    }

    /// Walks up from the finished subtree under `original` until a right sibling which hasn't been visited shows up, returning it, or the root if the walk runs out of ancestors.
    fn climb_preorder(&self, original: K) -> K {
        let mut from = original;
        while let Some(parent) = self.linked(from).parent {
            match self.linked(parent).right {
                Some(right) if right != from => return right,
                _ => from = parent,
            }
        }
        from
    }
    /// Walks up from `original` until the walk arrives from a left child, returning that parent, or wraps around to the leftmost node if the walk runs out of ancestors.
    fn climb_inorder(&self, original: K) -> K {
        let mut from = original;
        while let Some(parent) = self.linked(from).parent {
            if self.linked(parent).left == Some(from) {
                return parent;
            }
            from = parent;
        }
        self.leftmost(from)
    }
    fn leftmost(&self, mut node: K) -> K {
        while let Some(left) = self.linked(node).left {
            node = left;
        }
        node
    }
    /// Descends preferring left children but taking right ones when there's no left one, until a leaf. This is where postorder traversals of a subtree start.
    fn deepest_first(&self, mut node: K) -> K {
        while let Some(child) = self.linked(node).first_child() {
            node = child;
        }
        node
    }
    fn root_and_depth(&self, mut node: K) -> (K, usize) {
        let mut depth = 0;
        while let Some(parent) = self.linked(node).parent {
            node = parent;
            depth += 1;
        }
        (node, depth)
    }
    /// Finds the first node `target` levels below `top`, continuing a bounded depth-first walk of the subtree under `top` from `cursor`, which is `level` levels below `top`.
    ///
    /// If `descend` is `false`, the subtree under `cursor` counts as already walked, so only nodes to its right are considered. Returns `None` if the walk gets back to `top` without finding anything.
    fn seek_level(
        &self,
        top: K,
        mut cursor: K,
        mut level: usize,
        target: usize,
        mut descend: bool,
    ) -> Option<K> {
        loop {
            if descend {
                if level == target {
                    return Some(cursor);
                }
                if let Some(child) = self.linked(cursor).first_child() {
                    cursor = child;
                    level += 1;
                    continue;
                }
            }
            // Backtrack to the closest right sibling on the way up
            loop {
                if cursor == top {
                    return None;
                }
                let parent = self
                    .linked(cursor)
                    .parent
                    .unwrap_or_else(|| corrupted("a walk went above the root"));
                let parent_node = self.linked(parent);
                match parent_node.right {
                    Some(right) if parent_node.left == Some(cursor) => {
                        cursor = right;
                        break;
                    }
                    _ => {
                        cursor = parent;
                        level -= 1;
                    }
                }
            }
            descend = true;
        }
    }
}
