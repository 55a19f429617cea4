use core::fmt::Debug;
use log::trace;
use crate::{storage::Storage, Error, Side};
use super::{Forest, Node};

impl<T, K, S> Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
    /// Adds a leaf holding `data` as the left child of `parent`, returning the key of the new node.
    ///
    /// # Errors
    /// - [`MissingNode`] if `parent` does not exist
    /// - [`SlotOccupied`] if `parent` already has a left child, which is left untouched
    ///
    /// In both cases, `data` is dropped without going through the finalizer.
    ///
    /// [`MissingNode`]: enum.Error.html#variant.MissingNode " "
    /// [`SlotOccupied`]: enum.Error.html#variant.SlotOccupied " "
    #[inline]
    pub fn insert_left(&mut self, parent: K, data: T) -> Result<K, Error> {
        self.insert(parent, Side::Left, data)
    }
    /// Adds a leaf holding `data` as the right child of `parent`, returning the key of the new node.
    ///
    /// # Errors
    /// Same as [`insert_left`], but for the right child slot.
    ///
    /// [`insert_left`]: #method.insert_left " "
    #[inline]
    pub fn insert_right(&mut self, parent: K, data: T) -> Result<K, Error> {
        self.insert(parent, Side::Right, data)
    }
    /// Adds a leaf holding `data` as the child of `parent` on the specified side, returning the key of the new node.
    ///
    /// # Errors
    /// Same as [`insert_left`].
    ///
    /// [`insert_left`]: #method.insert_left " "
    pub fn insert(&mut self, parent: K, side: Side, data: T) -> Result<K, Error> {
        let parent_node = self.nodes.get(&parent).ok_or(Error::MissingNode)?;
        if parent_node.child(side).is_some() {
            return Err(Error::SlotOccupied(side));
        }
        let tree = parent_node.tree;
        let child = self.nodes.add(Node::leaf(data, parent, tree));
        *self.linked_mut(parent).child_mut(side) = Some(child);
        self.record_mut(tree).size += 1;
        trace!("inserted {:?} as the {} child of {:?}", child, side, parent);
        Ok(child)
    }
}
