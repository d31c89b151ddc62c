use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem;
use std::ptr;
use std::slice;

use super::Sequence;
use crate::collections::contiguous::RawBuffer;

impl<T> IntoIterator for Sequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Leave self unallocated and empty, so that dropping it afterwards is a no-op.
        let back = mem::replace(&mut self.len, 0);
        IntoIter {
            buf: mem::replace(&mut self.buf, RawBuffer::unallocated()),
            front: 0,
            back,
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

/// An owned iterator over the values of a [`Sequence`]. See [`Sequence::into_iter`].
///
/// Only the slots in `front..back` are initialized.
pub struct IntoIter<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> IntoIter<T> {
    /// Returns the values that haven't been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Slots front..back are initialized and within the allocation.
        unsafe {
            slice::from_raw_parts(self.buf.slot(self.front).cast::<T>(), self.back - self.front)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // SAFETY: front < back, so the slot is initialized. It is skipped from now on, which makes
        // the read a move.
        let value = unsafe { self.buf[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY: The slot at the old back - 1 is initialized and is now outside of front..back.
        Some(unsafe { self.buf[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = mem::replace(&mut self.front, self.back)..self.back;

        // SAFETY: The remaining slots are initialized and haven't been yielded. front has been
        // moved to back so they are only dropped once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.slot(remaining.start).cast::<T>(),
                remaining.len(),
            ));
        }
        // self.buf is dropped implicitly, which only deallocates.
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
