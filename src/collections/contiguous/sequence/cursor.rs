use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem;

use derive_more::IsVariant;

use super::Sequence;

/// The direction a cursor moves in when advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Direction {
    /// From the first value towards the last.
    Forward,
    /// From the last value towards the first.
    Reverse,
}

impl Direction {
    /// The index a cursor starts at for a Sequence of `len` values.
    pub(crate) const fn start(self, len: usize) -> Option<usize> {
        match self {
            Direction::Forward if len > 0 => Some(0),
            Direction::Forward => None,
            Direction::Reverse => len.checked_sub(1),
        }
    }

    /// The index following `index`, if it is still within `len`.
    pub(crate) const fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Forward if index + 1 < len => Some(index + 1),
            Direction::Forward => None,
            Direction::Reverse => index.checked_sub(1),
        }
    }

    /// The number of positions left to visit from `pos`, including `pos` itself.
    pub(crate) const fn remaining(self, pos: Option<usize>, len: usize) -> usize {
        match (self, pos) {
            (_, None) => 0,
            (Direction::Forward, Some(index)) => len - index,
            (Direction::Reverse, Some(index)) => index + 1,
        }
    }
}

/// A read-only cursor over a [`Sequence`], moving one value at a time in its [`Direction`]. See
/// [`Sequence::cursor`] and [`Sequence::cursor_rev`].
///
/// A Cursor borrows the Sequence, so the Sequence can't be changed while the Cursor is alive.
///
/// Cursor is also an [`Iterator`] over the values it has yet to visit, in cursor order.
///
/// # Examples
/// ```
/// # use dynamic_array::collections::contiguous::Sequence;
/// let seq = Sequence::from([1, 2, 3]);
/// let mut cursor = seq.cursor_rev();
/// assert_eq!(cursor.current(), Some(&3));
/// cursor.move_next().move_next();
/// assert_eq!(cursor.current(), Some(&1));
/// cursor.move_next();
/// assert!(!cursor.has_current());
/// ```
pub struct Cursor<'a, T> {
    pub(crate) seq: &'a Sequence<T>,
    pub(crate) pos: Option<usize>,
    pub(crate) direction: Direction,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(seq: &'a Sequence<T>, direction: Direction) -> Cursor<'a, T> {
        Cursor {
            pos: direction.start(seq.len()),
            seq,
            direction,
        }
    }

    /// Returns the value under the cursor, or None once the cursor has moved past the end.
    pub fn current(&self) -> Option<&'a T> {
        let seq: &'a Sequence<T> = self.seq;
        seq.as_slice().get(self.pos?)
    }

    /// Returns true if the cursor is on a value.
    pub const fn has_current(&self) -> bool {
        self.pos.is_some()
    }

    /// Returns the index of the value under the cursor.
    pub const fn index(&self) -> Option<usize> {
        self.pos
    }

    /// Returns the direction the cursor moves in.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves the cursor one value in its direction. Moving an exhausted cursor does nothing.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let seq = Sequence::from([1, 2, 3]);
    /// let mut cursor = seq.cursor();
    /// cursor.move_next().move_next().move_next().move_next();
    /// assert!(!cursor.has_current());
    /// assert_eq!(cursor.index(), None);
    /// ```
    pub fn move_next(&mut self) -> &mut Self {
        if let Some(index) = self.pos {
            self.pos = self.direction.step(index, self.seq.len());
        }
        self
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            seq: self.seq,
            pos: self.pos,
            direction: self.direction,
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current()?;
        self.move_next();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {
    fn len(&self) -> usize {
        self.direction.remaining(self.pos, self.seq.len())
    }
}

impl<T> FusedIterator for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current())
            .field("index", &self.pos)
            .field("direction", &self.direction)
            .finish()
    }
}

/// A cursor over a [`Sequence`] that can modify the value it points to. See
/// [`Sequence::cursor_mut`] and [`Sequence::cursor_rev_mut`].
///
/// Values can be replaced but not inserted or removed: the Sequence is mutably borrowed for the
/// lifetime of the cursor.
///
/// # Examples
/// ```
/// # use dynamic_array::collections::contiguous::Sequence;
/// let mut seq = Sequence::from([1, 2, 3]);
/// let mut cursor = seq.cursor_mut();
/// while let Some(value) = cursor.current_mut() {
///     *value *= 10;
///     cursor.move_next();
/// }
/// assert_eq!(&*seq, &[10, 20, 30]);
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) seq: &'a mut Sequence<T>,
    pub(crate) pos: Option<usize>,
    pub(crate) direction: Direction,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(seq: &'a mut Sequence<T>, direction: Direction) -> CursorMut<'a, T> {
        CursorMut {
            pos: direction.start(seq.len()),
            seq,
            direction,
        }
    }

    /// Returns the value under the cursor, or None once the cursor has moved past the end.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq = Sequence::from([5]);
    /// let mut cursor = seq.cursor_rev_mut();
    /// assert_eq!(cursor.current(), Some(&5));
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn current(&self) -> Option<&T> {
        self.seq.as_slice().get(self.pos?)
    }

    /// Returns the value under the cursor mutably.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.seq.as_mut_slice().get_mut(self.pos?)
    }

    /// Replaces the value under the cursor, returning the old one. If the cursor is exhausted,
    /// `value` is dropped and None is returned.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq = Sequence::from([String::from("a"), String::from("b")]);
    /// let mut cursor = seq.cursor_mut();
    /// assert_eq!(cursor.set(String::from("z")).as_deref(), Some("a"));
    /// cursor.move_next().move_next();
    /// assert_eq!(cursor.set(String::from("lost")), None);
    /// assert_eq!(&*seq, &["z", "b"]);
    /// ```
    pub fn set(&mut self, value: T) -> Option<T> {
        self.current_mut().map(|current| mem::replace(current, value))
    }

    /// Returns true if the cursor is on a value.
    pub const fn has_current(&self) -> bool {
        self.pos.is_some()
    }

    /// Returns the index of the value under the cursor.
    pub const fn index(&self) -> Option<usize> {
        self.pos
    }

    /// Returns the direction the cursor moves in.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves the cursor one value in its direction. Moving an exhausted cursor does nothing.
    pub fn move_next(&mut self) -> &mut Self {
        if let Some(index) = self.pos {
            self.pos = self.direction.step(index, self.seq.len());
        }
        self
    }

    /// Borrows a read-only [`Cursor`] at the same position.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq = Sequence::from([1, 2, 3]);
    /// let mut cursor = seq.cursor_mut();
    /// cursor.move_next();
    /// let rest: Vec<_> = cursor.as_cursor().copied().collect();
    /// assert_eq!(rest, [2, 3]);
    /// ```
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            seq: &*self.seq,
            pos: self.pos,
            direction: self.direction,
        }
    }
}

impl<T: Debug> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("current", &self.current())
            .field("index", &self.pos)
            .field("direction", &self.direction)
            .finish()
    }
}
