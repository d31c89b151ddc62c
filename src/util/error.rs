//! Error types returned by the fallible operations of this crate.

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the live values of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for sequence with {len} elements")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

/// The requested capacity can't be represented in memory.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// The global allocator returned null.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("memory allocation of {size} bytes (align {align}) failed")]
pub struct AllocError {
    /// Size of the requested layout in bytes.
    pub size: usize,
    /// Alignment of the requested layout.
    pub align: usize,
}

/// Errors which can occur while acquiring storage for a
/// [`Sequence`](crate::collections::contiguous::Sequence).
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum GrowError {
    #[allow(missing_docs)]
    CapacityOverflow(CapacityOverflow),
    #[allow(missing_docs)]
    AllocError(AllocError),
}

/// Errors produced by operations that both check an index and may grow.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrGrowError {
    #[allow(missing_docs)]
    IndexOutOfBounds(IndexOutOfBounds),
    #[allow(missing_docs)]
    GrowError(GrowError),
}

impl From<CapacityOverflow> for IndexOrGrowError {
    fn from(value: CapacityOverflow) -> Self {
        IndexOrGrowError::GrowError(value.into())
    }
}

impl From<AllocError> for IndexOrGrowError {
    fn from(value: AllocError) -> Self {
        IndexOrGrowError::GrowError(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CapacityOverflow.to_string(), "capacity overflow");
        assert_eq!(
            AllocError { size: 64, align: 8 }.to_string(),
            "memory allocation of 64 bytes (align 8) failed"
        );

        let error: IndexOrGrowError = CapacityOverflow.into();
        assert!(error.is_grow_error());
        assert_eq!(error.to_string(), "capacity overflow", "Variants should display their cause.");
    }
}
