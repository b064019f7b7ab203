use ordtree::tree::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// the tree agrees with the set at every step.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                if tree.insert(x.clone()) != set.insert(x.clone()) {
                    return false;
                }
            }
            Op::Iter => {
                if !tree.iter().eq(set.iter()) {
                    return false;
                }
            }
        }
    }

    tree.len() == set.len()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn sorted(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let values: Vec<_> = tree.iter().collect();

    values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn duplicates_change_nothing(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let len = tree.len();
    let before: Vec<_> = tree.iter().copied().collect();

    let any_inserted = xs.iter().any(|x| tree.insert(*x));
    let after: Vec<_> = tree.iter().copied().collect();

    !any_inserted && tree.len() == len && before == after
}

#[quickcheck]
fn len_counts_distinct(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len() && tree.iter().len() == distinct.len()
}

#[quickcheck]
fn insertion_order_irrelevant(xs: Vec<i16>) -> bool {
    let forward: Tree<_> = xs.iter().copied().collect();
    let backward: Tree<_> = xs.iter().rev().copied().collect();

    forward.iter().eq(backward.iter())
}

#[quickcheck]
fn restartable(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.iter().eq(tree.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn height_bounded_by_len(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let len = tree.len();
    let height = tree.height();

    // A chain at worst; at best every level is full.
    height <= len && 1usize.checked_shl(height as u32).map_or(true, |cap| len < cap)
}
