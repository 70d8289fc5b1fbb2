//! Property-based tests for the linked structures, checked against `Vec` and `VecDeque` as
//! models.

use std::collections::VecDeque;

use congeries::collections::linked::{CircularList, Deque, DoublyLinkedList, PositionalList};
use proptest::prelude::*;

fn rotated(items: &[i32], steps: isize) -> Vec<i32> {
    let mut model: VecDeque<_> = items.iter().copied().collect();
    if !model.is_empty() {
        let right = steps.rem_euclid(model.len() as isize) as usize;
        model.rotate_right(right);
    }
    model.into()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Collecting and iterating reproduces the items, in both directions.
    #[test]
    fn list_round_trip(items in prop::collection::vec(any::<i32>(), 0..50)) {
        let list: DoublyLinkedList<_> = items.iter().copied().collect();
        prop_assert_eq!(list.len(), items.len());
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), items.clone());
        prop_assert_eq!(
            list.iter().rev().copied().collect::<Vec<_>>(),
            items.iter().rev().copied().collect::<Vec<_>>()
        );
        prop_assert_eq!(list.into_iter().collect::<Vec<_>>(), items);
    }

    /// Deque and ring rotations match a rotation of the model.
    #[test]
    fn rotation_matches_model(
        items in prop::collection::vec(any::<i32>(), 0..30),
        steps in -100isize..100,
    ) {
        let expected = rotated(&items, steps);

        let mut deque: Deque<_> = items.iter().copied().collect();
        deque.rotate(steps);
        prop_assert_eq!(deque.iter().copied().collect::<Vec<_>>(), expected.clone());

        let mut ring: CircularList<_> = items.iter().copied().collect();
        ring.rotate(steps);
        prop_assert_eq!(ring.iter().copied().collect::<Vec<_>>(), expected);
    }

    /// Rotating by any multiple of the length changes nothing.
    #[test]
    fn full_rotation_is_no_op(
        items in prop::collection::vec(any::<u8>(), 1..30),
        turns in -5isize..5,
    ) {
        let steps = turns * items.len() as isize;

        let mut deque: Deque<_> = items.iter().copied().collect();
        deque.rotate(steps);
        prop_assert!(deque.iter().eq(items.iter()));

        let mut ring: CircularList<_> = items.iter().copied().collect();
        ring.rotate(steps);
        prop_assert!(ring.iter().eq(items.iter()));
    }

    /// Sorting a positional list leaves a non-decreasing permutation of its items.
    #[test]
    fn sort_is_ordered_permutation(items in prop::collection::vec(0u8..10, 0..50)) {
        let mut list: PositionalList<_> = items.iter().copied().collect();
        list.sort();

        let sorted: Vec<_> = list.iter().copied().collect();
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));

        let mut expected = items;
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    /// Positions stay valid until their own element is deleted.
    #[test]
    fn positions_survive_other_deletions(
        items in prop::collection::vec(any::<i32>(), 1..30),
        victim in any::<prop::sample::Index>(),
    ) {
        let mut list: PositionalList<_> = items.iter().copied().collect();
        let positions: Vec<_> = list.positions().collect();
        let victim = victim.index(positions.len());

        prop_assert_eq!(list.delete(positions[victim]), items[victim]);
        prop_assert!(!list.is_valid(positions[victim]));
        for (index, &pos) in positions.iter().enumerate().filter(|&(index, _)| index != victim) {
            prop_assert!(list.is_valid(pos));
            prop_assert_eq!(*list.get(pos), items[index]);
        }
    }
}
