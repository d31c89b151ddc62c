use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::{Cursor, CursorMut, Direction};
use crate::collections::contiguous::RawBuffer;
use crate::util::error::{CapacityOverflow, GrowError, IndexOrGrowError, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The capacity used by [`Sequence::new`], and in place of a requested capacity of 0.
pub const DEFAULT_CAP: usize = 8;

const GROWTH_FACTOR: usize = 2;

/// A growable, ordered collection of values stored contiguously in a [`RawBuffer`].
///
/// The first `len` slots of the buffer always hold the live values in order, everything after
/// that is uninitialized. Capacity never shrinks, except when the storage is moved out with
/// [`take`](Sequence::take).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Sequence.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `clone` | `O(n)` |
/// | `take` | `O(1)` |
///
/// \* If the Sequence doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct Sequence<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> Sequence<T> {
    /// Creates an empty Sequence with capacity [`DEFAULT_CAP`].
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::{Sequence, DEFAULT_CAP};
    /// let seq: Sequence<u8> = Sequence::new();
    /// assert_eq!(seq.len(), 0);
    /// assert_eq!(seq.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> Sequence<T> {
        Sequence::with_cap(DEFAULT_CAP)
    }

    /// Creates an empty Sequence with capacity exactly equal to `cap`, or [`DEFAULT_CAP`] if `cap`
    /// is 0.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::{Sequence, DEFAULT_CAP};
    /// let seq: Sequence<u8> = Sequence::with_cap(100);
    /// assert_eq!(seq.cap(), 100);
    /// assert_eq!(Sequence::<u8>::with_cap(0).cap(), DEFAULT_CAP);
    /// ```
    pub fn with_cap(cap: usize) -> Sequence<T> {
        Sequence::try_with_cap(cap).throw()
    }

    /// The fallible version of [`with_cap`](Sequence::with_cap).
    ///
    /// # Errors
    /// Returns a [`GrowError`] if the capacity overflows or the allocator fails.
    pub fn try_with_cap(cap: usize) -> Result<Sequence<T>, GrowError> {
        let cap = if cap == 0 { DEFAULT_CAP } else { cap };

        Ok(Sequence {
            buf: RawBuffer::try_with_cap(cap)?,
            len: 0,
        })
    }

    /// The state a Sequence is left in after its storage has been moved out.
    pub(crate) const fn unallocated() -> Sequence<T> {
        Sequence {
            buf: RawBuffer::unallocated(),
            len: 0,
        }
    }

    /// Returns the number of values in the Sequence.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Sequence holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values the Sequence can hold before it has to grow.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Pushes `value` onto the end of the Sequence, growing if required. Returns the index that
    /// the value was placed at.
    ///
    /// # Panics
    /// Panics if growing would overflow the capacity or the allocation fails. The Sequence is left
    /// unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq = Sequence::new();
    /// assert_eq!(seq.push(100), 0);
    /// assert_eq!(seq.push(42), 1);
    /// assert_eq!(&*seq, &[100, 42]);
    /// ```
    pub fn push(&mut self, value: T) -> usize {
        self.try_push(value).throw()
    }

    /// The fallible version of [`push`](Sequence::push). If growing fails, `value` is dropped and
    /// the Sequence is left unchanged.
    ///
    /// # Errors
    /// Returns a [`GrowError`] if the capacity overflows or the allocator fails.
    pub fn try_push(&mut self, value: T) -> Result<usize, GrowError> {
        if self.len == self.cap() {
            self.grow_with_gap(self.len)?;
        }

        // SAFETY: The Sequence has just been grown if it was full.
        Ok(unsafe { self.push_unchecked(value) })
    }

    /// Pushes `value` onto the end of the Sequence without checking the capacity.
    ///
    /// # Safety
    /// The caller must ensure that `len < cap`.
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) -> usize {
        // SAFETY: The caller ensures that slot len is within the allocation.
        unsafe { self.buf.slot(self.len).write(MaybeUninit::new(value)) };

        let index = self.len;
        self.len += 1;
        index
    }

    /// Removes the last value of the Sequence, returning it if there was one.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq: Sequence<_> = (0..3).collect();
    /// assert_eq!(seq.pop(), Some(2));
    /// assert_eq!(seq.pop(), Some(1));
    /// assert_eq!(seq.pop(), Some(0));
    /// assert_eq!(seq.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The old last slot was initialized and is now outside of len, so it won't be read
        // or dropped again.
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Inserts `value` at `index`, moving every following value one place towards the end.
    /// Returns `index`.
    ///
    /// # Panics
    /// Panics if `index > len`, or if growing fails.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq: Sequence<_> = (0..4).collect();
    /// assert_eq!(seq.insert(2, 42), 2);
    /// assert_eq!(&*seq, &[0, 1, 42, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value).throw()
    }

    /// The fallible version of [`insert`](Sequence::insert). On error, `value` is dropped and the
    /// Sequence is left unchanged.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len` or a [`GrowError`] if growing fails.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, IndexOrGrowError> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            }
            .into());
        }

        if self.len == self.cap() {
            // Growing leaves the slot at index free, everything after it is already shifted.
            self.grow_with_gap(index)?;
            self.buf[index].write(value);
        } else {
            let mut carry = MaybeUninit::new(value);
            for slot in &mut self.buf[index..=self.len] {
                carry = mem::replace(slot, carry);
            }
        }

        self.len += 1;
        Ok(index)
    }

    /// Removes and returns the value at `index`, moving every following value one place towards
    /// the start.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq: Sequence<_> = "Hello world!".chars().collect();
    /// assert_eq!(seq.remove(1), 'e');
    /// assert_eq!(seq.remove(4), ' ');
    /// assert_eq!(seq, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// The fallible version of [`remove`](Sequence::remove).
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let mut carry = MaybeUninit::uninit();
        // Iterate backwards to index.
        for slot in self.buf[index..self.len].iter_mut().rev() {
            carry = mem::replace(slot, carry);
        }

        self.len -= 1;
        // SAFETY: carry now holds the value that was at index, which was < len and therefore
        // initialized.
        Ok(unsafe { carry.assume_init() })
    }

    /// Drops every value in the Sequence. The capacity is kept.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq = Sequence::with_cap(20);
    /// seq.extend(0..10);
    /// seq.clear();
    /// assert!(seq.is_empty());
    /// assert_eq!(seq.cap(), 20);
    /// ```
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);

        // SAFETY: The first len slots were initialized. len is reset beforehand so that nothing is
        // dropped twice, even if a destructor panics.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.as_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Returns a reference to the value at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let seq = Sequence::from([10, 20, 30]);
    /// assert_eq!(seq.at(1), Ok(&20));
    /// assert!(seq.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the value at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq = Sequence::from([1, 2, 3]);
    /// if let Ok(value) = seq.at_mut(0) {
    ///     *value = 100;
    /// }
    /// assert_eq!(&*seq, &[100, 2, 3]);
    /// assert!(seq.at_mut(3).is_err());
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Moves the contents of the Sequence into a new one in constant time, leaving self with
    /// length and capacity 0 and no allocation. self can still be used afterwards.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq = Sequence::from([1, 2, 3]);
    /// let moved = seq.take();
    /// assert_eq!(&*moved, &[1, 2, 3]);
    /// assert_eq!((seq.len(), seq.cap()), (0, 0));
    /// ```
    pub fn take(&mut self) -> Sequence<T> {
        mem::replace(self, Sequence::unallocated())
    }

    /// Drops the contents of self, then takes over the storage of `other`, leaving `other` as
    /// [`take`](Sequence::take) would.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq = Sequence::from([1, 2]);
    /// let mut other = Sequence::from([7, 8, 9]);
    /// seq.move_from(&mut other);
    /// assert_eq!(&*seq, &[7, 8, 9]);
    /// assert_eq!((other.len(), other.cap()), (0, 0));
    ///
    /// other.push(1);
    /// assert_eq!(&*other, &[1]);
    /// ```
    pub fn move_from(&mut self, other: &mut Sequence<T>) {
        *self = other.take();
    }

    /// Creates a read-only [`Cursor`] starting at the first value.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let seq = Sequence::from(["a", "b"]);
    /// let mut cursor = seq.cursor();
    /// assert_eq!(cursor.current(), Some(&"a"));
    /// assert_eq!(cursor.move_next().current(), Some(&"b"));
    /// assert_eq!(cursor.move_next().current(), None);
    /// ```
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, Direction::Forward)
    }

    /// Creates a read-only [`Cursor`] starting at the last value and moving towards the first.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let seq = Sequence::from([1, 2, 3]);
    /// let backwards: Vec<_> = seq.cursor_rev().copied().collect();
    /// assert_eq!(backwards, [3, 2, 1]);
    /// ```
    pub fn cursor_rev(&self) -> Cursor<'_, T> {
        Cursor::new(self, Direction::Reverse)
    }

    /// Creates a [`CursorMut`] starting at the first value.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq = Sequence::from([1, 2, 3]);
    /// let mut cursor = seq.cursor_mut();
    /// cursor.move_next();
    /// cursor.set(20);
    /// assert_eq!(&*seq, &[1, 20, 3]);
    /// ```
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Direction::Forward)
    }

    /// Creates a [`CursorMut`] starting at the last value and moving towards the first.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::Sequence;
    /// let mut seq = Sequence::from([1, 2, 3]);
    /// let mut running = 0;
    /// let mut cursor = seq.cursor_rev_mut();
    /// while let Some(value) = cursor.current_mut() {
    ///     running += *value;
    ///     *value = running;
    ///     cursor.move_next();
    /// }
    /// assert_eq!(&*seq, &[6, 5, 3]);
    /// ```
    pub fn cursor_rev_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Direction::Reverse)
    }

    /// Returns the live values as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots are initialized, MaybeUninit<T> has the same layout as T and
        // the pointer is nonnull and properly aligned. The borrow of self prevents mutation.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr().cast(), self.len) }
    }

    /// Returns the live values as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As for as_slice, with exclusive access guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr().cast(), self.len) }
    }

    /// Moves every value into a buffer with twice the capacity, leaving the slot at `gap`
    /// uninitialized. Values at or after `gap` end up one place further along. Passing `len` as the
    /// gap keeps every value where it was.
    ///
    /// The new buffer is allocated before anything is moved, so an error leaves self untouched.
    pub(crate) fn grow_with_gap(&mut self, gap: usize) -> Result<(), GrowError> {
        debug_assert!(gap <= self.len);

        let new_cap = match self.cap() {
            0 => DEFAULT_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
        };
        let mut new_buf = RawBuffer::try_with_cap(new_cap)?;

        tracing::trace!(old_cap = self.cap(), new_cap, gap, len = self.len, "growing sequence");

        let len = self.len;
        for (new_slot, old_slot) in new_buf[..gap].iter_mut().zip(&mut self.buf[..gap]) {
            mem::swap(new_slot, old_slot);
        }
        for (new_slot, old_slot) in new_buf[gap + 1..=len].iter_mut().zip(&mut self.buf[gap..len]) {
            mem::swap(new_slot, old_slot);
        }

        // The old buffer only holds moved-from slots, so dropping it just deallocates.
        self.buf = new_buf;
        Ok(())
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        self.clear();
        // self.buf is dropped implicitly, which only deallocates.
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        let mut seq = Sequence {
            buf: RawBuffer::try_with_cap(self.cap()).throw(),
            len: 0,
        };

        for value in self.iter() {
            // SAFETY: seq has the same capacity as self, which holds len values.
            unsafe { seq.push_unchecked(value.clone()) };
        }

        seq
    }

    fn clone_from(&mut self, source: &Self) {
        // Copy first, then swap, so that a panicking clone leaves self as it was.
        let mut copy = source.clone();
        mem::swap(self, &mut copy);
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut seq = Sequence::with_cap(iter.size_hint().0);
        seq.extend(iter);
        seq
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for Sequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
