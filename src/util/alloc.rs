//! Allocation and drop accounting helpers for tests.

use std::cell::Cell;
use std::rc::Rc;

/// A value that increments a shared counter when dropped. Clones share the same counter, so a
/// collection filled with clones can be checked for dropping each element exactly once.
#[derive(Debug, Clone)]
#[allow(unused)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

#[allow(unused)]
impl CountedDrop {
    /// Creates a new counter starting at zero.
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far, across all clones.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
