//! A module containing [`Sequence`] and associated types.
//!
//! [`Cursor`] and [`CursorMut`] walk a Sequence forwards or backwards one value at a time, and
//! [`IntoIter`] provides owned iteration. [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Sequence`] is also re-exported under the parent module.

mod cursor;
mod iter;
mod sequence;

pub use cursor::*;
pub use iter::*;
pub use sequence::*;
