//! Element types for observing how a container treats its contents.

use std::cell::Cell;
use std::rc::Rc;

/// A type without size, for checking that containers never allocate for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSizedType;

/// Increments a shared counter every time an instance is dropped. Clones share the counter.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    drops: Rc<Cell<usize>>,
    pub id: usize,
}

impl CountedDrop {
    pub fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }

    pub fn new(drops: &Rc<Cell<usize>>, id: usize) -> CountedDrop {
        CountedDrop {
            drops: Rc::clone(drops),
            id,
        }
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
