use core::{fmt::Debug, iter::FusedIterator};
use crate::{
    forest::{Forest, Node, NodeRef},
    storage::{Storage, DefaultStorage},
};
use super::Order;

/// An iterator which steps through a tree in a given order, starting from any of its nodes and stopping once every node has been visited.
///
/// Created by [`Forest::traverse`] and its shorthands, or [`NodeRef::traverse`].
///
/// [`Forest::traverse`]: ../struct.Forest.html#method.traverse " "
/// [`NodeRef::traverse`]: ../struct.NodeRef.html#method.traverse " "
#[derive(Debug)]
pub struct Steps<'a, T, K, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    forest: &'a Forest<T, K, S>,
    order: Order,
    next: Option<K>,
    remaining: usize,
}
impl<T, K, S> Steps<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    /// Returns the order in which the nodes are visited.
    #[inline(always)]
    pub fn order(&self) -> Order {
        self.order
    }
}
impl<'a, T, K, S> Iterator for Steps<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    type Item = NodeRef<'a, T, K, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.remaining -= 1;
        self.next = if self.remaining == 0 {
            None
        } else {
            Some(self.forest.step(current, self.order))
        };
        Some(NodeRef::new_linked(self.forest, current))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T, K, S> ExactSizeIterator for Steps<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<T, K, S> FusedIterator for Steps<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}

impl<T, K, S> Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    /// Returns an iterator which visits every node of the tree containing `start` exactly once, in the given order, beginning with `start` itself and wrapping around past the last node of the traversal.
    ///
    /// The iterator is empty if `start` does not exist.
    ///
    /// # Example
    /// ```rust
    /// # use bitree::{Forest, Order};
    /// let mut forest = Forest::<_>::new();
    /// let root = forest.create(None, 'r');
    /// let left = forest.insert_left(root, 'a').unwrap();
    /// forest.insert_right(root, 'b').unwrap();
    ///
    /// let from_left: String = forest.traverse(left, Order::Preorder).map(|x| *x.value()).collect();
    /// assert_eq!(from_left, "abr");
    /// ```
    pub fn traverse(&self, start: K, order: Order) -> Steps<'_, T, K, S> {
        let remaining = self.size(start);
        Steps {
            forest: self,
            order,
            next: if remaining == 0 { None } else { Some(start) },
            remaining,
        }
    }
    /// Visits the tree containing `start` in preorder, beginning with `start`. See [`traverse`].
    ///
    /// [`traverse`]: #method.traverse " "
    #[inline]
    pub fn preorder(&self, start: K) -> Steps<'_, T, K, S> {
        self.traverse(start, Order::Preorder)
    }
    /// Visits the tree containing `start` in postorder, beginning with `start`. See [`traverse`].
    ///
    /// [`traverse`]: #method.traverse " "
    #[inline]
    pub fn postorder(&self, start: K) -> Steps<'_, T, K, S> {
        self.traverse(start, Order::Postorder)
    }
    /// Visits the tree containing `start` in inorder, beginning with `start`. See [`traverse`].
    ///
    /// [`traverse`]: #method.traverse " "
    #[inline]
    pub fn inorder(&self, start: K) -> Steps<'_, T, K, S> {
        self.traverse(start, Order::Inorder)
    }
    /// Visits the tree containing `start` in level order, beginning with `start`. See [`traverse`].
    ///
    /// [`traverse`]: #method.traverse " "
    #[inline]
    pub fn level_order(&self, start: K) -> Steps<'_, T, K, S> {
        self.traverse(start, Order::LevelOrder)
    }
}
