use ordered_tree::{dedup_sort, subtree_height, Insertion, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                let expected = if set.insert(x.clone()) {
                    Insertion::Inserted
                } else {
                    Insertion::AlreadyPresent
                };
                if tree.insert(x.clone()) != expected {
                    return false;
                }
            }
            Op::Delete(x) => {
                if tree.delete(x) != set.take(x) {
                    return false;
                }
            }
            Op::Rebalance => {
                tree.rebalance();
                if !tree.is_balanced() {
                    return false;
                }
            }
            Op::Check => {
                if !tree.iter().eq(set.iter()) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
    }
    for x in &deletes {
        tree.delete(x);
    }

    let values: Vec<_> = tree.iter().collect();
    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn dedup_sort_matches_btree_set(xs: Vec<i32>) -> bool {
    let expected: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
    dedup_sort(xs) == expected
}

#[quickcheck]
fn build_round_trip(xs: Vec<i32>) -> bool {
    let sorted = dedup_sort(xs);
    let tree = Tree::from_sorted(sorted.clone());

    tree.iter().eq(sorted.iter()) && tree.is_balanced()
}

#[quickcheck]
fn built_height_is_logarithmic(xs: Vec<u16>) -> bool {
    let sorted = dedup_sort(xs);
    let n = sorted.len();
    let tree = Tree::from_sorted(sorted);

    match tree.height() {
        None => n == 0,
        // floor(log2(n))
        Some(height) => height == (usize::BITS - 1 - n.leading_zeros()) as usize,
    }
}

#[quickcheck]
fn duplicate_insert_is_noop(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let before = tree.clone();

    xs.iter()
        .all(|x| tree.insert(*x) == Insertion::AlreadyPresent)
        && tree == before
}

#[quickcheck]
fn delete_then_find(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for x in &deletes {
        tree.delete(x);
    }

    let deleted: BTreeSet<_> = deletes.iter().collect();
    deletes.iter().all(|x| tree.find(x).is_none())
        && xs
            .iter()
            .filter(|x| !deleted.contains(x))
            .all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before = tree.in_order();
    let rebuilt = tree.rebalanced();
    tree.rebalance();

    rebuilt.is_balanced() && rebuilt.in_order() == before && tree == rebuilt
}

#[quickcheck]
fn rebalance_of_balanced_is_identity(xs: Vec<i16>) -> bool {
    let tree: Tree<i16> = xs.into_iter().collect();
    tree.rebalanced() == tree
}

#[quickcheck]
fn depth_matches_path_length(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    // Every node is at most `height` edges away from the root, and the root
    // is at depth 0.
    let height = tree.height().unwrap_or(0);
    xs.iter()
        .all(|x| tree.depth(x).map_or(false, |depth| depth <= height))
        && tree
            .root()
            .map_or(true, |root| tree.depth(root.value()) == Some(0))
}

#[quickcheck]
fn is_balanced_matches_per_node_heights(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for x in &deletes {
        tree.delete(x);
    }

    // Look at every node separately and compare its two subtree heights.
    let every_node_balanced = tree.iter().all(|x| {
        tree.find(x).map_or(false, |node| {
            (subtree_height(node.left()) - subtree_height(node.right())).abs() <= 1
        })
    });

    tree.is_balanced() == every_node_balanced
        && tree
            .root()
            .map_or(true, |root| root.is_balanced() == every_node_balanced)
}
