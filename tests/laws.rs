//! Randomized checks of the structural laws of forests: stepping cycles, traversal orders, removal, merging and measurements.

use bitree::{Error, Forest, Incompatibility, Order, Side, SparseKey};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Grows a tree by attaching each new node to an earlier one, on the requested side if it's free and on the other side otherwise. Nodes which find both sides taken are not added.
fn grow(forest: &mut Forest<u32>, shape: &[(usize, bool)]) -> Vec<SparseKey> {
    let root = forest.create(None, 0);
    let mut keys = vec![root];
    for (payload, &(parent, prefer_left)) in (1..).zip(shape) {
        let parent = keys[parent % keys.len()];
        let side = if prefer_left { Side::Left } else { Side::Right };
        let added = forest
            .insert(parent, side, payload)
            .or_else(|_| forest.insert(parent, side.opposite(), payload));
        if let Ok(key) = added {
            keys.push(key);
        }
    }
    keys
}

fn shape_strategy() -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((any::<usize>(), any::<bool>()), 0..40)
}

/// The traversal order computed the textbook way, by recursion over the links.
fn reference_order(forest: &Forest<u32>, root: SparseKey, order: Order) -> Vec<SparseKey> {
    fn walk(forest: &Forest<u32>, node: Option<SparseKey>, order: Order, out: &mut Vec<SparseKey>) {
        let node = match node {
            Some(x) => x,
            None => return,
        };
        let (left, right) = (forest.left_of(node), forest.right_of(node));
        match order {
            Order::Preorder => {
                out.push(node);
                walk(forest, left, order, out);
                walk(forest, right, order, out);
            }
            Order::Postorder => {
                walk(forest, left, order, out);
                walk(forest, right, order, out);
                out.push(node);
            }
            Order::Inorder => {
                walk(forest, left, order, out);
                out.push(node);
                walk(forest, right, order, out);
            }
            Order::LevelOrder => unreachable!(),
        }
    }
    let mut out = Vec::new();
    if order == Order::LevelOrder {
        let mut level = vec![root];
        while !level.is_empty() {
            out.extend(&level);
            level = level
                .iter()
                .flat_map(|&x| forest.left_of(x).into_iter().chain(forest.right_of(x)))
                .collect();
        }
    } else {
        walk(forest, Some(root), order, &mut out);
    }
    out
}

fn reference_height(forest: &Forest<u32>, node: Option<SparseKey>) -> usize {
    match node {
        Some(x) => {
            1 + reference_height(forest, forest.left_of(x))
                .max(reference_height(forest, forest.right_of(x)))
        }
        None => 0,
    }
}

fn subtree(forest: &Forest<u32>, node: SparseKey) -> HashSet<SparseKey> {
    let mut found = HashSet::new();
    let mut stack = vec![node];
    while let Some(key) = stack.pop() {
        found.insert(key);
        stack.extend(forest.left_of(key).into_iter().chain(forest.right_of(key)));
    }
    found
}

proptest! {
    #[test]
    fn stepping_cycles_through_every_node(shape in shape_strategy(), start in any::<usize>()) {
        init_logging();
        let mut forest = Forest::<_>::new();
        let keys = grow(&mut forest, &shape);
        let start = keys[start % keys.len()];
        for order in Order::ALL {
            let mut seen = HashSet::new();
            let mut cursor = start;
            for _ in 0..keys.len() {
                prop_assert!(seen.insert(cursor), "{} visited {:?} twice", order, cursor);
                cursor = forest.step(cursor, order);
            }
            prop_assert_eq!(cursor, start, "{} did not come back around", order);
            prop_assert_eq!(seen.len(), forest.size(start));
        }
    }

    #[test]
    fn stepping_matches_recursive_traversal(shape in shape_strategy()) {
        init_logging();
        let mut forest = Forest::<_>::new();
        let keys = grow(&mut forest, &shape);
        let root = keys[0];
        for order in Order::ALL {
            let expected = reference_order(&forest, root, order);
            let first = forest.first_in(root, order).unwrap();
            prop_assert_eq!(first, expected[0]);
            let stepped: Vec<_> = forest.traverse(first, order).map(|x| x.key()).collect();
            assert_eq!(stepped, expected, "{}", order);
        }
    }

    #[test]
    fn removal_takes_whole_subtree(shape in shape_strategy(), victim in any::<usize>()) {
        init_logging();
        let mut forest = Forest::<_>::new();
        let keys = grow(&mut forest, &shape);
        let root = keys[0];
        let victim = keys[victim % keys.len()];
        let doomed = subtree(&forest, victim);
        let before = forest.size(root);

        prop_assert_eq!(forest.remove(victim), doomed.len());
        for key in &doomed {
            prop_assert!(!forest.contains(*key));
        }
        if victim == root {
            prop_assert_eq!(forest.num_trees(), 0);
            prop_assert_eq!(forest.num_nodes(), 0);
        } else {
            prop_assert_eq!(forest.size(root), before - doomed.len());
            prop_assert_eq!(forest.num_nodes(), before - doomed.len());
            let survivors = keys.iter().filter(|x| !doomed.contains(*x));
            for &key in survivors {
                prop_assert!(forest.contains(key));
                prop_assert_eq!(forest.size(key), before - doomed.len());
                for child in forest.left_of(key).into_iter().chain(forest.right_of(key)) {
                    prop_assert!(!doomed.contains(&child));
                }
            }
        }
        prop_assert_eq!(forest.remove(victim), 0);
    }

    #[test]
    fn merging_grafts_whole_tree(
        shape1 in shape_strategy(),
        shape2 in shape_strategy(),
        destination in any::<usize>(),
        with_data in any::<bool>(),
    ) {
        init_logging();
        let mut forest = Forest::<_>::new();
        let keys1 = grow(&mut forest, &shape1);
        let keys2 = grow(&mut forest, &shape2);
        let (root1, root2) = (keys1[0], keys2[0]);
        let destination = keys1[destination % keys1.len()];
        let (size1, size2) = (forest.size(root1), forest.size(root2));
        let full = forest.left_of(destination).is_some() && forest.right_of(destination).is_some();
        let data = if with_data { Some(u32::MAX) } else { None };

        let merged = forest.merge(destination, root2, data);
        if full && !(destination == root1 && with_data) {
            prop_assert_eq!(merged, Err(Error::IncompatibleTrees(Incompatibility::NoMatchingShape)));
            prop_assert_eq!(forest.num_trees(), 2);
            prop_assert_eq!(forest.size(root1), size1);
            prop_assert_eq!(forest.size(root2), size2);
            return Ok(());
        }
        let new_root = merged.unwrap();
        let expected_size = size1 + size2 + usize::from(full);
        prop_assert_eq!(forest.num_trees(), 1);
        prop_assert_eq!(forest.num_nodes(), expected_size);
        if full {
            prop_assert_eq!(forest.left_of(new_root), Some(root1));
            prop_assert_eq!(forest.right_of(new_root), Some(root2));
        } else {
            prop_assert_eq!(new_root, root1);
            prop_assert_eq!(forest.parent_of(root2), Some(destination));
        }
        for &key in keys1.iter().chain(&keys2) {
            prop_assert_eq!(forest.size(key), expected_size);
            prop_assert_eq!(forest.root_of(key), Some(new_root));
        }
        prop_assert_eq!(forest.preorder(new_root).count(), expected_size);
    }

    #[test]
    fn measurements_match_recursion(shape in shape_strategy()) {
        init_logging();
        let mut forest = Forest::<_>::new();
        let keys = grow(&mut forest, &shape);
        for &key in &keys {
            prop_assert_eq!(forest.height_of(key), reference_height(&forest, Some(key)));
            let mut depth = 0;
            let mut cursor = key;
            while let Some(parent) = forest.parent_of(cursor) {
                depth += 1;
                cursor = parent;
            }
            prop_assert_eq!(forest.depth_of(key), Some(depth));
        }
    }
}
