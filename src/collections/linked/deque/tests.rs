#![cfg(test)]

use super::*;

#[test]
fn test_append() {
    let mut deque = Deque::new();
    deque.append(1);
    deque.append(2);
    deque.append(3);
    assert_eq!(deque, Deque::from([1, 2, 3]));

    deque.append_left(0);
    assert_eq!(deque.to_string(), "Deque(0 <-> 1 <-> 2 <-> 3)");
    assert_eq!(deque.peek_left(), Some(&0));
    assert_eq!(deque.peek(), Some(&3));
}

#[test]
fn test_pop() {
    let mut deque = Deque::from(['a', 'b', 'c']);
    assert_eq!(deque.pop(), Ok('c'));
    assert_eq!(deque.pop_left(), Ok('a'));
    assert_eq!(deque.pop(), Ok('b'));
    assert_eq!(deque.pop(), Err(EmptyCollection));
    assert_eq!(deque.pop_left(), Err(EmptyCollection));
    assert_eq!(deque.to_string(), "Deque()");
}

#[test]
fn test_rotate() {
    let mut deque: Deque<_> = (0..5).collect();
    deque.rotate(3);
    assert!(deque.iter().copied().eq([2, 3, 4, 0, 1]));

    let mut deque: Deque<_> = (0..5).collect();
    deque.rotate(-3);
    assert!(deque.iter().copied().eq([3, 4, 0, 1, 2]));

    let mut deque: Deque<_> = (0..5).collect();
    deque.rotate(1);
    assert!(deque.iter().copied().eq([4, 0, 1, 2, 3]));
    deque.rotate(-1);
    assert!(deque.iter().copied().eq(0..5));
}

#[test]
fn test_rotate_no_op() {
    let original: Deque<_> = (0..6).collect();
    for steps in [0, 6, -6, 12, -18, 600] {
        let mut deque = original.clone();
        deque.rotate(steps);
        assert_eq!(deque, original, "Rotating by {steps} should leave the order unchanged.");
    }

    let mut empty = Deque::<u8>::new();
    empty.rotate(7);
    assert!(empty.is_empty(), "Rotating an empty deque should do nothing.");

    let mut single = Deque::from([1]);
    single.rotate(-3);
    assert_eq!(single, Deque::from([1]));
}

#[test]
fn test_rotate_large_steps() {
    let mut deque: Deque<_> = (0..4).collect();
    deque.rotate(isize::MAX);
    // isize::MAX is 3 mod 4, equivalent to one step left.
    assert!(deque.iter().copied().eq([1, 2, 3, 0]));

    let mut deque: Deque<_> = (0..4).collect();
    deque.rotate(isize::MIN);
    assert!(deque.iter().copied().eq(0..4));
}

#[test]
fn test_shortest_rotation() {
    use crate::collections::linked::shortest_rotation;

    assert_eq!(shortest_rotation(3, 5), -2);
    assert_eq!(shortest_rotation(-3, 5), 2);
    assert_eq!(shortest_rotation(2, 4), 2, "Half way round rotates right.");
    assert_eq!(shortest_rotation(-2, 4), 2);
    assert_eq!(shortest_rotation(10, 5), 0);
    assert_eq!(shortest_rotation(1, 0), 0);
}
