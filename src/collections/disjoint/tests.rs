#![cfg(test)]

use super::*;
use crate::collections::traits::UnionFind;
use crate::util::error::CollectionError;
use crate::util::panic::assert_panics;

const TINY_UNIONS: [(usize, usize); 11] = [
    (4, 3),
    (3, 8),
    (6, 5),
    (9, 4),
    (2, 1),
    (8, 9),
    (5, 0),
    (7, 2),
    (6, 1),
    (1, 0),
    (6, 7),
];

fn check_fresh<U: UnionFind>() {
    let mut sets = U::new(10);
    assert_eq!(sets.len(), 10);
    assert_eq!(sets.count(), 10, "Every site should start in its own component.");
    for site in 0..10 {
        assert_eq!(sets.find(site), site);
        assert_eq!(sets.find(site), sets.find(site));
        assert!(sets.connected(site, site));
    }
    assert!(!sets.connected(0, 9));
    assert!(!sets.connected(3, 4));
}

fn check_counts<U: UnionFind>() {
    let mut sets = U::new(10);
    let mut merges = 0;
    for (p, q) in TINY_UNIONS {
        if sets.union(p, q) {
            merges += 1;
        }
        assert_eq!(sets.count(), 10 - merges);
        assert!(sets.connected(p, q));
        assert!(sets.connected(q, p));
    }
    assert_eq!(merges, 8, "Three of the unions join already connected sites.");
    assert_eq!(sets.count(), 2);

    assert!(!sets.union(0, 6), "A redundant union should merge nothing.");
    assert!(!sets.union(3, 3));
    assert_eq!(sets.count(), 2);

    assert!(sets.connected(0, 7));
    assert!(sets.connected(3, 9));
    assert!(!sets.connected(0, 3));
}

fn check_bounds<U: UnionFind>() {
    let mut sets = U::new(3);
    let error = IndexOutOfBounds { index: 3, len: 3 };
    assert_eq!(sets.try_find(3), Err(error));
    assert_eq!(sets.try_union(0, 3), Err(error));
    assert_eq!(sets.try_union(3, 0), Err(error));
    assert_eq!(sets.try_connected(2, 3), Err(error));
    assert_eq!(sets.count(), 3, "A failed union shouldn't change the count.");
    assert_eq!(error.to_string(), "Index 3 out of range 0..3!");

    assert_panics!({ sets.find(10) });
    assert_panics!({ sets.union(1, usize::MAX) });
    assert_panics!({ sets.connected(5, 0) });

    let mut empty = U::new(0);
    assert!(empty.is_empty());
    assert_eq!(empty.count(), 0);
    assert_eq!(empty.try_find(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
}

#[test]
fn test_fresh() {
    check_fresh::<QuickFind>();
    check_fresh::<QuickUnion>();
    check_fresh::<WeightedQuickUnion>();
    check_fresh::<WeightedQuickUnionPathCompression>();
}

#[test]
fn test_counts() {
    check_counts::<QuickFind>();
    check_counts::<QuickUnion>();
    check_counts::<WeightedQuickUnion>();
    check_counts::<WeightedQuickUnionPathCompression>();
}

#[test]
fn test_bounds() {
    check_bounds::<QuickFind>();
    check_bounds::<QuickUnion>();
    check_bounds::<WeightedQuickUnion>();
    check_bounds::<WeightedQuickUnionPathCompression>();
}

#[test]
fn test_quick_find_ids() {
    let mut sets = QuickFind::new(10);
    for (p, q) in TINY_UNIONS {
        sets.union(p, q);
    }
    assert_eq!(sets.count(), 2);
    assert_eq!(sets.ids(), [1, 1, 1, 8, 8, 1, 1, 1, 8, 8]);
}

#[test]
fn test_quick_union_links_p_under_q() {
    let mut sets = QuickUnion::new(5);
    for p in 0..4 {
        sets.union(p, p + 1);
    }
    assert_eq!(sets.ids(), [1, 2, 3, 4, 4], "Unions should build a chain towards q.");
    assert_eq!(sets.find(0), 4);
}

#[test]
fn test_weighted_tie_break() {
    let mut sets = WeightedQuickUnion::new(4);
    sets.union(0, 1);
    sets.union(2, 3);
    sets.union(0, 2);
    assert_eq!(sets.ids(), [1, 3, 3, 3], "Equal trees should go under q's root.");
    assert_eq!(sets.sizes()[3], 4);
}

#[test]
fn test_weighted_larger_tree_wins() {
    let mut sets = WeightedQuickUnion::new(3);
    sets.union(0, 1);
    sets.union(1, 2);
    assert_eq!(sets.ids(), [1, 1, 1], "The single site should go under the larger tree.");
    assert_eq!(sets.sizes()[1], 3);

    let mut unweighted = QuickUnion::new(3);
    unweighted.union(0, 1);
    unweighted.union(1, 2);
    assert_eq!(unweighted.ids(), [1, 2, 2]);
}

#[test]
fn test_path_compression() {
    let mut sets = WeightedQuickUnionPathCompression::new(4);
    sets.union(0, 1);
    sets.union(2, 3);
    sets.union(0, 2);
    assert_eq!(sets.ids(), [1, 3, 3, 3]);
    assert_eq!(sets.sizes()[3], 4);

    assert_eq!(sets.find(0), 3);
    assert_eq!(sets.ids(), [3, 3, 3, 3], "Finding 0 should point it at its grandparent.");
    assert_eq!(sets.count(), 1);
}

#[test]
fn test_variants_agree() {
    let mut quick_find = QuickFind::new(10);
    let mut quick_union = QuickUnion::new(10);
    let mut weighted = WeightedQuickUnion::new(10);
    let mut compressed = WeightedQuickUnionPathCompression::new(10);

    for (p, q) in TINY_UNIONS {
        quick_find.union(p, q);
        quick_union.union(p, q);
        weighted.union(p, q);
        compressed.union(p, q);

        for a in 0..10 {
            for b in 0..10 {
                let expected = quick_find.connected(a, b);
                assert_eq!(quick_union.connected(a, b), expected);
                assert_eq!(weighted.connected(a, b), expected);
                assert_eq!(compressed.connected(a, b), expected);
            }
        }
    }
}

#[test]
fn test_error_aggregate() {
    fn find_twice(sets: &mut QuickUnion, site: usize) -> Result<usize, CollectionError> {
        let root = sets.try_find(site)?;
        Ok(sets.try_find(root)?)
    }

    let mut sets = QuickUnion::new(2);
    sets.union(0, 1);
    assert_eq!(find_twice(&mut sets, 0), Ok(1));

    let error = find_twice(&mut sets, 2).unwrap_err();
    assert!(error.is_index_out_of_bounds());
    assert_eq!(
        IndexOutOfBounds::try_from(error).ok(),
        Some(IndexOutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(error.to_string(), "Index 2 out of range 0..2!");
}
