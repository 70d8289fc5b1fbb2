#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_from_iter_lengths() {
    assert_eq!(CircularList::<u8>::new().len(), 0);
    assert!(CircularList::<u8>::from_iter([]).is_empty());
    assert_eq!(CircularList::from([-1]).len(), 1);

    let ring = CircularList::from([1, 2, 5, 8, 9]);
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.cursor(), Some(&1), "The cursor should start on the first item.");
    assert!(ring.iter().copied().eq([1, 2, 5, 8, 9]));
    ring.verify_ring();
}

#[test]
fn test_formatting() {
    assert_eq!(CircularList::<i32>::new().to_string(), "CircularList()");
    assert_eq!(CircularList::from([1, 2, 3]).to_string(), "CircularList((1), 2, 3)");

    let mut ring = CircularList::from([1, 2, 3]);
    ring.move_next();
    assert_eq!(
        format!("{ring:?}"),
        "CircularList { contents: [2, 3, 1], cursor: Some(2), len: 3 }"
    );
}

#[test]
fn test_equality() {
    assert_eq!(CircularList::from([0, 1, 2, 3]), (0..4).collect::<CircularList<_>>());
    assert_eq!(CircularList::<u8>::new(), CircularList::new());
    assert_ne!(CircularList::from([0, 1, 2]), CircularList::from([1, 2, 0]));
}

#[test]
fn test_insert_at_cursor() {
    let mut ring = CircularList::new();
    *ring.insert_at_cursor(1) += 10;
    assert_eq!(ring.cursor(), Some(&11));
    ring.verify_ring();

    ring.insert_at_cursor(2);
    ring.insert_at_cursor(3);
    assert_eq!(ring.cursor(), Some(&3), "The cursor should follow each insertion.");
    assert!(ring.iter().copied().eq([3, 11, 2]));
    ring.verify_ring();
}

#[test]
fn test_pop_at() {
    let mut ring = CircularList::from([1, 2, 3, 4]);
    assert_eq!(ring.pop_at(), Ok(1));
    assert_eq!(ring.to_string(), "CircularList((2), 3, 4)");
    ring.verify_ring();

    ring.move_prev();
    assert_eq!(ring.pop_at(), Ok(4));
    assert_eq!(ring.cursor(), Some(&2), "Popping the last element should wrap to the first.");

    assert_eq!(ring.pop_at(), Ok(2));
    assert_eq!(ring.pop_at(), Ok(3));
    assert_eq!(ring.pop_at(), Err(EmptyCollection));
    assert_eq!(ring.cursor(), None);
    ring.verify_ring();

    ring.insert_at_cursor(5);
    assert_eq!(ring.to_string(), "CircularList((5))");
    ring.verify_ring();
}

#[test]
fn test_rotate() {
    let cases: [(isize, [i32; 5]); 7] = [
        (1, [4, 0, 1, 2, 3]),
        (-1, [1, 2, 3, 4, 0]),
        (5, [0, 1, 2, 3, 4]),
        (-5, [0, 1, 2, 3, 4]),
        (3, [2, 3, 4, 0, 1]),
        (-3, [3, 4, 0, 1, 2]),
        (0, [0, 1, 2, 3, 4]),
    ];

    for (steps, expected) in cases {
        let mut ring: CircularList<_> = (0..5).collect();
        ring.rotate(steps);
        assert_eq!(ring, CircularList::from(expected), "Rotating by {steps}.");
    }
}

#[test]
fn test_rotate_insert_rotate_back() {
    let expected: CircularList<_> = (1..=9).collect();

    let mut ring = CircularList::from([1, 2, 3, 4, 5, 6, 8, 9]);
    ring.rotate(-5);
    ring.insert_at_cursor(7);
    ring.rotate(6);
    assert_eq!(ring, expected);

    let mut ring = CircularList::from([1, 2, 3, 4, 5, 6, 7, 8]);
    ring.rotate(-7);
    ring.insert_at_cursor(9);
    ring.rotate(8);
    assert_eq!(ring, expected);

    let mut ring = CircularList::from([1, 2, 3, 4, 5, 6, 7, 9]);
    ring.rotate(-6);
    ring.insert_at_cursor(8);
    ring.rotate(7);
    assert_eq!(ring, expected);
}

#[test]
fn test_pop_and_insert() {
    let expected: CircularList<_> = (1..=9).collect();

    let mut ring = CircularList::from([1, 2, 3, 4, 5, 7, 6, 8, 9]);
    ring.rotate(-6);
    let popped = ring.pop_at().unwrap();
    ring.rotate(2);
    ring.insert_at_cursor(popped);
    ring.rotate(5);
    assert_eq!(ring, expected);

    let mut ring = CircularList::from([9, 2, 3, 4, 5, 6, 7, 8, 1]);
    ring.rotate(-8);
    let popped = ring.pop_at().unwrap();
    ring.insert_at_cursor(popped);
    assert_eq!(ring, expected);
    ring.verify_ring();
}

#[test]
fn test_into_iter_and_drops() {
    let ring = CircularList::from([1, 2, 3]);
    assert_eq!(ring.into_iter().collect::<Vec<_>>(), [1, 2, 3]);

    let counter = CountedDrop::new();
    let mut ring: CircularList<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    drop(ring.pop_at());
    assert_eq!(counter.drops(), 1);
    drop(ring);
    assert_eq!(counter.drops(), 6, "Dropping the ring should drop every remaining element.");

    let mut ring: CircularList<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    ring.clear();
    assert_eq!(counter.drops(), 10);
    assert!(ring.is_empty());
}
