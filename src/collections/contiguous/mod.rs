//! Contiguous collection types: [`Sequence`], a growable collection of values, built on top of
//! [`RawBuffer`], a fixed allocation of uninitialized slots.
#![warn(missing_docs)]

pub mod buffer;
pub mod sequence;

#[doc(inline)]
pub use buffer::RawBuffer;
#[doc(inline)]
pub use sequence::{DEFAULT_CAP, Sequence};
