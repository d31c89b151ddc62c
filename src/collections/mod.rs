//! Collection types.
//!
//! Currently this is only the contiguous [`Sequence`](contiguous::Sequence) and its backing
//! [`RawBuffer`](contiguous::RawBuffer).

pub mod contiguous;
