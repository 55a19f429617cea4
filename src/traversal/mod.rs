//! Stepping through trees one node at a time.
//!
//! Forests do not keep any traversal state. Instead, for each of the four classic orders, [`Forest`] can compute the *successor* of a node: the node which a full traversal of the tree in that order would visit right after it. The successor of the last node of a traversal is the first one, so repeated stepping cycles through the tree forever, visiting every node once per cycle.
//!
//! | Order | First node | Last node |
//! |---|---|---|
//! | [`Preorder`] | the root | the last node reached by always preferring right children |
//! | [`Postorder`] | the deepest node reached by preferring left children | the root |
//! | [`Inorder`] | the leftmost node | the rightmost node |
//! | [`LevelOrder`] | the root | the rightmost node of the deepest level |
//!
//! [`Steps`] wraps repeated stepping into an iterator which stops after exactly one cycle.
//!
//! # Example
//! ```rust
//! use bitree::{Forest, Order};
//!
//! //       1
//! //     /   \
//! //    2     3
//! //     \   /
//! //      4 5
//! let mut forest = Forest::<_>::new();
//! let one = forest.create(None, 1);
//! let two = forest.insert_left(one, 2).unwrap();
//! let three = forest.insert_right(one, 3).unwrap();
//! forest.insert_right(two, 4).unwrap();
//! forest.insert_left(three, 5).unwrap();
//!
//! let collect = |order| -> Vec<i32> {
//!     let first = forest.first_in(one, order).unwrap();
//!     forest.traverse(first, order).map(|node| *node.value()).collect()
//! };
//! assert_eq!(collect(Order::Preorder), [1, 2, 4, 3, 5]);
//! assert_eq!(collect(Order::Postorder), [4, 2, 5, 3, 1]);
//! assert_eq!(collect(Order::Inorder), [2, 4, 1, 5, 3]);
//! assert_eq!(collect(Order::LevelOrder), [1, 2, 3, 4, 5]);
//! ```
//!
//! [`Forest`]: ../struct.Forest.html " "
//! [`Preorder`]: enum.Order.html#variant.Preorder " "
//! [`Postorder`]: enum.Order.html#variant.Postorder " "
//! [`Inorder`]: enum.Order.html#variant.Inorder " "
//! [`LevelOrder`]: enum.Order.html#variant.LevelOrder " "
//! [`Steps`]: struct.Steps.html " "

mod successor;
mod steps;
pub use steps::Steps;

use core::fmt::{self, Formatter, Display};

/// The order in which a traversal visits the nodes of a binary tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Parents before their children, left subtrees before right ones.
    Preorder,
    /// Children before their parents, left subtrees before right ones.
    Postorder,
    /// The left subtree, then the parent, then the right subtree.
    Inorder,
    /// Breadth-first: level by level from the root down, left to right within a level.
    LevelOrder,
}
impl Order {
    /// All orders, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Preorder,
        Self::Postorder,
        Self::Inorder,
        Self::LevelOrder,
    ];
}
impl Display for Order {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Preorder => "preorder",
            Self::Postorder => "postorder",
            Self::Inorder => "inorder",
            Self::LevelOrder => "level order",
        })
    }
}

#[cfg(test)]
mod tests;
