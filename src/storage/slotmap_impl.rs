use slotmap::{SlotMap, HopSlotMap, DenseSlotMap, Key};
use super::Storage;

// Slotmap keys are versioned already, so stale keys come back as `None` without any extra work.
macro_rules! impl_storage_for_slotmap {
    ($($map:ident),+ $(,)?) => {$(
        impl<K: Key, V> Storage for $map<K, V> {
            type Key = K;
            type Element = V;

            #[inline(always)]
            fn add(&mut self, element: Self::Element) -> Self::Key {
                $map::insert(self, element)
            }
            #[inline(always)]
            fn remove(&mut self, key: &Self::Key) -> Option<Self::Element> {
                $map::remove(self, *key)
            }
            #[inline(always)]
            fn len(&self) -> usize {
                $map::len(self)
            }
            #[inline(always)]
            fn with_capacity(capacity: usize) -> Self {
                $map::with_capacity_and_key(capacity)
            }
            #[inline(always)]
            fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
                $map::get(self, *key)
            }
            #[inline(always)]
            fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
                $map::get_mut(self, *key)
            }
            #[inline(always)]
            fn contains_key(&self, key: &Self::Key) -> bool {
                $map::contains_key(self, *key)
            }
            #[inline(always)]
            fn capacity(&self) -> usize {
                $map::capacity(self)
            }
            #[inline(always)]
            fn reserve(&mut self, additional: usize) {
                $map::reserve(self, additional)
            }
        }
    )+};
}

impl_storage_for_slotmap!(SlotMap, HopSlotMap, DenseSlotMap);

#[cfg(test)]
mod tests {
    use crate::{forest::{Forest, Node}, traversal::Order, SlotMapForest};
    use alloc::string::{String, ToString};
    use pretty_assertions::assert_eq;
    use slotmap::{DefaultKey, DenseSlotMap, HopSlotMap, SlotMap};

    macro_rules! forest_lifecycle_on {
        ($($name:ident: $map:ident),+ $(,)?) => {$(
            #[test]
            fn $name() {
                let mut forest =
                    Forest::<String, DefaultKey, $map<DefaultKey, Node<String, DefaultKey>>>::new();
                let a = forest.create(None, "a".to_string());
                let b = forest.insert_left(a, "b".to_string()).unwrap();
                let c = forest.insert_right(a, "c".to_string()).unwrap();
                assert_eq!(forest.size(a), 3);

                let spelled: String = forest
                    .traverse(b, Order::Inorder)
                    .map(|x| x.value().as_str())
                    .collect();
                assert_eq!(spelled, "bac");

                assert_eq!(forest.remove(b), 1);
                assert_eq!(forest.remove(b), 0);
                assert!(!forest.contains(b));
                assert_eq!(forest.value_of(b), None);
                for order in Order::ALL {
                    assert_eq!(forest.step(b, order), b);
                }

                // The freed place gets reused without reviving the old key.
                let d = forest.insert_left(a, "d".to_string()).unwrap();
                assert_ne!(d, b);
                assert_eq!(forest.value_of(b), None);
                assert_eq!(forest.size(c), 3);

                assert_eq!(forest.remove(a), 3);
                assert_eq!(forest.num_nodes(), 0);
                assert_eq!(forest.num_trees(), 0);
            }
        )+};
    }
    forest_lifecycle_on! {
        slot_map_forest: SlotMap,
        hop_slot_map_forest: HopSlotMap,
        dense_slot_map_forest: DenseSlotMap,
    }

    #[test]
    fn slot_map_forest_alias() {
        let mut forest = SlotMapForest::<u32>::new();
        let x = forest.create(None, 1);
        let y = forest.create(None, 2);
        assert_eq!(forest.merge(x, y, None), Ok(x));
        assert_eq!(forest.right_of(x), None);
        assert_eq!(forest.left_of(x), Some(y));
        let keys: alloc::vec::Vec<_> = forest.preorder(x).map(|n| n.key()).collect();
        assert_eq!(keys, [x, y]);
    }
}
