use alloc::vec::Vec;
use core::{
    fmt::{self, Formatter, Display},
    mem,
    num::NonZeroUsize,
};
use super::Storage;

/// The generation of retired slots, never handed out in a key to an element.
const RETIRED: u32 = u32::MAX;

static HOLE_LIST_PANIC_MSG: &str = "\
the hole list of the sparse storage points to an occupied slot";

/// A key into a [`SparseVec`].
///
/// Besides the index of the slot, the key remembers the generation of the slot at the time the element was added. Once the element is removed, the slot moves on to the next generation, and the key stops resolving to anything, even after the slot gets reused for a new element.
///
/// Generations are 32-bit. A slot which has run through all of them is retired for good instead of wrapping around, so a stale key can never come back to life.
///
/// [`SparseVec`]: struct.SparseVec.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SparseKey {
    index: usize,
    generation: u32,
}
impl SparseKey {
    /// A key which never resolves to an element.
    pub(crate) const DANGLING: Self = Self {
        index: usize::MAX,
        generation: u32::MAX,
    };
    /// Returns the index of the slot the key points to.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.index
    }
    /// Returns the generation of the slot which the key was issued for.
    #[inline(always)]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}
impl Display for SparseKey {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// A `Vec`-backed storage which never shifts its elements and recycles the places of removed ones.
///
/// Removing an element leaves a "hole" behind. Holes are chained into a free list, oldest first, and get filled by subsequent additions, so the keys of the other elements are never invalidated by a removal. Each slot also counts how many times it has been vacated; keys carry that count, which is how stale keys are told apart from keys to the element currently occupying the slot.
///
/// # Example
/// ```rust
/// use bitree::storage::{Storage, SparseVec};
///
/// let mut storage = SparseVec::new();
/// let first = storage.add("first");
/// let second = storage.add("second");
///
/// assert_eq!(storage.remove(&first), Some("first"));
/// assert_eq!(storage.num_holes(), 1);
///
/// // The hole gets reused...
/// let third = storage.add("third");
/// assert!(storage.is_dense());
/// assert_eq!(third.index(), first.index());
/// // ...but the old key does not resolve to the new element.
/// assert_eq!(storage.get(&first), None);
/// assert_eq!(storage.get(&third), Some(&"third"));
/// assert_eq!(storage.get(&second), Some(&"second"));
/// ```
#[derive(Clone, Debug)]
pub struct SparseVec<T> {
    slots: Vec<Slot<T>>,
    /// Length, first hole, last hole
    hole_list: Option<(NonZeroUsize, usize, usize)>,
    /// Slots which have used up their generations and are never filled again
    retired: usize,
}
impl<T> SparseVec<T> {
    /// Returns the number of holes in the storage. This operation returns immediately instead of looping through the entire storage, since the storage tracks the number of holes it creates and fills.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.hole_list.map_or(0, |x| x.0.get())
    }
    /// Returns the number of slots which have been vacated so many times that their generation counter ran out. Retired slots are not holes: they take up space but never receive elements again.
    #[inline(always)]
    pub fn num_retired(&self) -> usize {
        self.retired
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.num_holes() == 0
    }
    /// Returns an iterator over the keys and elements of the storage, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SparseKey, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.element().map(|element| {
                (
                    SparseKey {
                        index,
                        generation: slot.generation,
                    },
                    element,
                )
            })
        })
    }

    fn slot(&self, key: &SparseKey) -> Option<&Slot<T>> {
        self.slots
            .get(key.index)
            .filter(|slot| slot.generation == key.generation)
    }
    fn slot_mut(&mut self, key: &SparseKey) -> Option<&mut Slot<T>> {
        self.slots
            .get_mut(key.index)
            .filter(|slot| slot.generation == key.generation)
    }
    /// Appends a freshly punched hole to the end of the hole list.
    fn link_hole(&mut self, index: usize) {
        match &mut self.hole_list {
            Some((count, _, last)) => {
                *count = count.saturating_add(1);
                let old_last = mem::replace(last, index);
                match &mut self.slots[old_last].state {
                    SlotState::Hole(next) => *next = Some(index),
                    SlotState::Element(..) => panic!("{}", HOLE_LIST_PANIC_MSG),
                }
            }
            None => {
                self.hole_list = Some((NonZeroUsize::MIN, index, index));
            }
        }
    }
}
impl<T> Default for SparseVec<T> {
    #[inline]
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            hole_list: None,
            retired: 0,
        }
    }
}
impl<T> Storage for SparseVec<T> {
    type Key = SparseKey;
    type Element = T;

    fn add(&mut self, element: Self::Element) -> Self::Key {
        let (count, first, last) = if let Some(hole_info) = self.hole_list {
            hole_info
        } else {
            self.slots.push(Slot {
                generation: 0,
                state: SlotState::Element(element),
            });
            return SparseKey {
                index: self.slots.len() - 1,
                generation: 0,
            };
        };
        let slot = &mut self.slots[first];
        let next_hole = match mem::replace(&mut slot.state, SlotState::Element(element)) {
            SlotState::Hole(next) => next,
            SlotState::Element(..) => panic!("{}", HOLE_LIST_PANIC_MSG),
        };
        let key = SparseKey {
            index: first,
            generation: slot.generation,
        };
        self.hole_list = NonZeroUsize::new(count.get() - 1).map(|count| {
            let next_hole = next_hole.unwrap_or_else(|| {
                panic!("the hole list of the sparse storage ended before its recorded length")
            });
            (count, next_hole, last)
        });
        key
    }
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Element> {
        let slot = self.slot_mut(key)?;
        let element = match mem::replace(&mut slot.state, SlotState::Hole(None)) {
            SlotState::Element(element) => element,
            hole @ SlotState::Hole(..) => {
                slot.state = hole;
                return None;
            }
        };
        match slot.generation.checked_add(1).filter(|&x| x != RETIRED) {
            Some(generation) => {
                slot.generation = generation;
                self.link_hole(key.index);
            }
            None => {
                slot.generation = RETIRED;
                self.retired += 1;
            }
        }
        Some(element)
    }
    #[inline]
    fn len(&self) -> usize {
        self.slots.len() - self.num_holes() - self.retired
    }
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            hole_list: None,
            retired: 0,
        }
    }
    #[inline]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        self.slot(key).and_then(Slot::element)
    }
    #[inline]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        self.slot_mut(key).and_then(Slot::element_mut)
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.slots.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        // Holes get filled before the vector grows
        self.slots
            .reserve(additional.saturating_sub(self.num_holes()))
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit()
    }
}

/// A slot inside a sparse storage: the element or a link to the next hole, and the generation counter.
#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    state: SlotState<T>,
}
impl<T> Slot<T> {
    #[inline]
    fn element(&self) -> Option<&T> {
        match &self.state {
            SlotState::Element(x) => Some(x),
            SlotState::Hole(..) => None,
        }
    }
    #[inline]
    fn element_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            SlotState::Element(x) => Some(x),
            SlotState::Hole(..) => None,
        }
    }
}

#[derive(Clone, Debug)]
enum SlotState<T> {
    /// A value in the slot.
    Element(T),
    /// A hole, with an index to the next one.
    Hole(Option<usize>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holes_are_reused_oldest_first() {
        let mut storage = SparseVec::new();
        let keys: Vec<_> = (0..4).map(|x| storage.add(x)).collect();
        assert_eq!(storage.remove(&keys[2]), Some(2));
        assert_eq!(storage.remove(&keys[0]), Some(0));
        assert_eq!(storage.num_holes(), 2);
        assert_eq!(storage.len(), 2);

        let refill_a = storage.add(10);
        let refill_b = storage.add(11);
        assert_eq!(refill_a.index(), 2);
        assert_eq!(refill_b.index(), 0);
        assert!(storage.is_dense());
        assert_eq!(storage.len(), 4);

        let appended = storage.add(12);
        assert_eq!(appended.index(), 4);
    }

    #[test]
    fn stale_keys_never_resolve() {
        let mut storage = SparseVec::new();
        let key = storage.add('a');
        assert_eq!(storage.remove(&key), Some('a'));
        assert_eq!(storage.remove(&key), None);
        assert!(!storage.contains_key(&key));

        let reused = storage.add('b');
        assert_eq!(reused.index(), key.index());
        assert_ne!(reused, key);
        assert_eq!(storage.get(&key), None);
        assert_eq!(storage.get_mut(&key), None);
        assert_eq!(storage.remove(&key), None);
        assert_eq!(storage.get(&reused), Some(&'b'));
    }

    #[test]
    fn exhausted_slots_are_retired() {
        let mut storage = SparseVec::new();
        let old = storage.add('a');
        storage.slots[old.index()].generation = RETIRED - 1;
        let last = SparseKey {
            index: old.index(),
            generation: RETIRED - 1,
        };
        assert_eq!(storage.remove(&last), Some('a'));
        assert_eq!(storage.num_retired(), 1);
        assert!(storage.is_dense());
        assert_eq!(storage.len(), 0);

        let fresh = storage.add('b');
        assert_ne!(fresh.index(), old.index());
        assert_eq!(storage.len(), 1);
        for stale in [old, last] {
            assert_eq!(storage.get(&stale), None);
            assert_eq!(storage.remove(&stale), None);
        }
        assert_eq!(storage.iter().count(), 1);
    }

    #[test]
    fn dangling_key_is_absent() {
        let mut storage = SparseVec::new();
        storage.add(());
        assert!(!storage.contains_key(&SparseKey::DANGLING));
    }

    #[test]
    fn iter_skips_holes() {
        let mut storage = SparseVec::new();
        let a = storage.add("a");
        let b = storage.add("b");
        let c = storage.add("c");
        storage.remove(&b);
        let live: Vec<_> = storage.iter().collect();
        assert_eq!(live, vec![(a, &"a"), (c, &"c")]);
    }
}
