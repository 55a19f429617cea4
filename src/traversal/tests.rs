use super::*;
use crate::{Forest, storage::SparseKey};
use alloc::{string::String, vec::Vec};
use pretty_assertions::assert_eq;

struct Prep {
    root: SparseKey,
    left: SparseKey,
    right: SparseKey,
    left_left: SparseKey,
    left_right: SparseKey,
}
fn prep_tree(forest: &mut Forest<char>) -> Prep {
    let root = forest.create(None, 'r');
    let left = forest.insert_left(root, 'a').unwrap();
    let right = forest.insert_right(root, 'b').unwrap();
    let left_left = forest.insert_left(left, 'c').unwrap();
    let left_right = forest.insert_right(left, 'd').unwrap();
    Prep {
        root,
        left,
        right,
        left_left,
        left_right,
    }
}
fn spell(forest: &Forest<char>, start: SparseKey, order: Order) -> String {
    forest.traverse(start, order).map(|x| *x.value()).collect()
}

#[test]
fn preorder_successors() {
    let mut forest = Forest::<_>::new();
    let p = prep_tree(&mut forest);
    assert_eq!(forest.next_preorder(p.root), p.left);
    assert_eq!(forest.next_preorder(p.left), p.left_left);
    assert_eq!(forest.next_preorder(p.left_left), p.left_right);
    assert_eq!(forest.next_preorder(p.left_right), p.right);
    assert_eq!(forest.next_preorder(p.right), p.root);
}

#[test]
fn postorder_successors() {
    let mut forest = Forest::<_>::new();
    let p = prep_tree(&mut forest);
    assert_eq!(forest.next_postorder(p.left_left), p.left_right);
    assert_eq!(forest.next_postorder(p.left_right), p.left);
    assert_eq!(forest.next_postorder(p.left), p.right);
    assert_eq!(forest.next_postorder(p.right), p.root);
    assert_eq!(forest.next_postorder(p.root), p.left_left);
}

#[test]
fn inorder_successors() {
    let mut forest = Forest::<_>::new();
    let p = prep_tree(&mut forest);
    assert_eq!(forest.next_inorder(p.left_left), p.left);
    assert_eq!(forest.next_inorder(p.left), p.left_right);
    assert_eq!(forest.next_inorder(p.left_right), p.root);
    assert_eq!(forest.next_inorder(p.root), p.right);
    assert_eq!(forest.next_inorder(p.right), p.left_left);
}

#[test]
fn level_order_successors() {
    let mut forest = Forest::<_>::new();
    let p = prep_tree(&mut forest);
    assert_eq!(forest.next_level_order(p.root), p.left);
    assert_eq!(forest.next_level_order(p.left), p.right);
    assert_eq!(forest.next_level_order(p.right), p.left_left);
    assert_eq!(forest.next_level_order(p.left_left), p.left_right);
    assert_eq!(forest.next_level_order(p.left_right), p.root);
}

#[test]
fn level_order_crosses_subtrees() {
    //        0
    //      /   \
    //     1     2
    //    /       \
    //   3         4
    //              \
    //               5
    let mut forest = Forest::<_>::new();
    let n0 = forest.create(None, '0');
    let n1 = forest.insert_left(n0, '1').unwrap();
    let n2 = forest.insert_right(n0, '2').unwrap();
    let n3 = forest.insert_left(n1, '3').unwrap();
    let n4 = forest.insert_right(n2, '4').unwrap();
    forest.insert_right(n4, '5').unwrap();
    assert_eq!(forest.next_level_order(n3), n4);
    assert_eq!(spell(&forest, n0, Order::LevelOrder), "012345");
    assert_eq!(spell(&forest, n3, Order::LevelOrder), "345012");
}

#[test]
fn single_node_is_its_own_successor() {
    let mut forest = Forest::<_>::new();
    let lone = forest.create(None, 'x');
    for order in Order::ALL {
        assert_eq!(forest.step(lone, order), lone, "{}", order);
        assert_eq!(spell(&forest, lone, order), "x");
    }
}

#[test]
fn missing_nodes_step_nowhere() {
    let mut forest = Forest::<_>::new();
    let p = prep_tree(&mut forest);
    forest.remove(p.left);
    for order in Order::ALL {
        assert_eq!(forest.step(p.left_right, order), p.left_right, "{}", order);
        assert_eq!(forest.traverse(p.left, order).len(), 0);
        assert_eq!(forest.first_in(p.left, order), None);
    }
}

#[test]
fn right_leaning_chain() {
    let mut forest = Forest::<_>::new();
    let a = forest.create(None, 'a');
    let b = forest.insert_right(a, 'b').unwrap();
    let c = forest.insert_right(b, 'c').unwrap();
    assert_eq!(forest.next_postorder(a), c);
    assert_eq!(forest.next_inorder(c), a);
    assert_eq!(spell(&forest, a, Order::Preorder), "abc");
    assert_eq!(spell(&forest, c, Order::Postorder), "cba");
    assert_eq!(spell(&forest, a, Order::Inorder), "abc");
    assert_eq!(spell(&forest, a, Order::LevelOrder), "abc");
}

#[test]
fn full_traversals() {
    let mut forest = Forest::<_>::new();
    let p = prep_tree(&mut forest);
    let canonical = |order| {
        let first = forest.first_in(p.right, order).unwrap();
        spell(&forest, first, order)
    };
    assert_eq!(canonical(Order::Preorder), "racdb");
    assert_eq!(canonical(Order::Postorder), "cdabr");
    assert_eq!(canonical(Order::Inorder), "cadrb");
    assert_eq!(canonical(Order::LevelOrder), "rabcd");
}

#[test]
fn steps_wrap_and_report_length() {
    let mut forest = Forest::<_>::new();
    let p = prep_tree(&mut forest);
    let mut steps = forest.inorder(p.root);
    assert_eq!(steps.len(), 5);
    assert_eq!(steps.order(), Order::Inorder);
    let visited: Vec<_> = steps.by_ref().map(|x| x.key()).collect();
    assert_eq!(
        visited,
        [p.root, p.right, p.left_left, p.left, p.left_right],
    );
    assert_eq!(steps.len(), 0);
    assert!(steps.next().is_none());
    assert!(steps.next().is_none());
}

#[test]
fn node_ref_stepping() {
    let mut forest = Forest::<_>::new();
    let p = prep_tree(&mut forest);
    let node = forest.node(p.left_right).unwrap();
    assert_eq!(node.next_preorder().key(), p.right);
    assert_eq!(node.next_postorder().key(), p.left);
    assert_eq!(node.next_inorder().key(), p.root);
    assert_eq!(node.next_level_order().key(), p.root);
    let spelled: String = node.traverse(Order::Postorder).map(|x| *x.value()).collect();
    assert_eq!(spelled, "dabrc");
}
