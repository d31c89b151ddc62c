//! Raw slot storage for the contiguous collections.
//!
//! A [`RawBuffer`] owns an allocation sized for a fixed number of `T`, but knows nothing about
//! which of those slots hold values. Growing a collection means allocating a bigger buffer and
//! moving the values across, never resizing in place.

use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use crate::util::error::{AllocError, CapacityOverflow, GrowError};

/// A fixed capacity allocation of uninitialized slots, used as the backing store of a
/// [`Sequence`](super::Sequence).
///
/// RawBuffer never reads or drops the values in its slots. Tracking which slots are initialized is
/// entirely the responsibility of the owner, the buffer only allocates and releases memory.
pub struct RawBuffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a RawBuffer with capacity 0 and no allocation.
    pub const fn unallocated() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a RawBuffer with exactly `cap` uninitialized slots.
    ///
    /// Zero-sized layouts (either `cap == 0` or a zero-sized `T`) don't allocate and use a dangling
    /// pointer instead.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout would exceed [`isize::MAX`] bytes and
    /// [`AllocError`] if the global allocator fails.
    pub fn try_with_cap(cap: usize) -> Result<RawBuffer<T>, GrowError> {
        let layout = Self::make_layout(cap)?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            let raw_ptr: *mut MaybeUninit<T> = unsafe { alloc::alloc(layout).cast() };

            NonNull::new(raw_ptr).ok_or_else(|| {
                tracing::debug!(size = layout.size(), "allocation failed");
                AllocError {
                    size: layout.size(),
                    align: layout.align(),
                }
            })?
        };

        Ok(RawBuffer {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of slots in the buffer.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to the capacity of the buffer.
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut MaybeUninit<T> {
        // SAFETY: The caller guarantees that index is within (or one past) the allocation, whose
        // size can't exceed isize::MAX bytes.
        unsafe { self.ptr.add(index).as_ptr() }
    }

    /// Creates the layout for `cap` slots of `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the size of the layout would exceed [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<MaybeUninit<T>>(cap).map_err(|_| {
            tracing::debug!(cap, "capacity overflow");
            CapacityOverflow
        })
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        // A buffer that exists has a valid layout, it was checked during allocation.
        if let Ok(layout) = Self::make_layout(self.cap) {
            if layout.size() != 0 {
                // SAFETY: ptr was allocated in the global allocator with this exact layout.
                // Zero-sized layouts aren't allocated and are guarded against deallocation.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
            }
        }
    }
}

impl<T> Deref for RawBuffer<T> {
    type Target = [MaybeUninit<T>];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The allocation is valid and properly aligned for cap slots of MaybeUninit<T>,
        // which doesn't require initialization. The total size is <= isize::MAX because the layout
        // was checked on creation.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }
}

impl<T> DerefMut for RawBuffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with exclusive access guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }
}

impl<T> Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("ptr", &self.ptr)
            .field("cap", &self.cap)
            .finish()
    }
}

// SAFETY: RawBuffer uniquely owns its allocation, so it can be sent when T can.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: Shared access to a RawBuffer only hands out shared references to its slots.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::alloc::ZeroSizedType;

    #[test]
    fn test_unallocated() {
        let buf = RawBuffer::<u32>::unallocated();
        assert_eq!(buf.cap(), 0);
        assert_eq!(buf.len(), 0, "Slot view should be empty.");
    }

    #[test]
    fn test_capacity() {
        let mut buf = RawBuffer::<String>::try_with_cap(12).expect("small allocation");
        assert_eq!(buf.cap(), 12);
        assert_eq!(buf.len(), 12, "Slot view should cover the whole capacity.");

        buf[3].write(String::from("slot"));
        // SAFETY: Slot 3 was just initialized.
        let value = unsafe { buf[3].assume_init_read() };
        assert_eq!(value, "slot");
    }

    #[test]
    fn test_zst_doesnt_allocate() {
        let buf = RawBuffer::<ZeroSizedType>::try_with_cap(1_000_000).expect("no allocation");
        assert_eq!(buf.ptr, NonNull::dangling(), "Zero-sized layouts should stay dangling.");
    }

    #[test]
    fn test_capacity_overflow() {
        assert_eq!(
            RawBuffer::<u64>::try_with_cap(usize::MAX).err(),
            Some(GrowError::CapacityOverflow(CapacityOverflow)),
            "Layouts beyond isize::MAX should be rejected before allocating."
        );
    }
}
