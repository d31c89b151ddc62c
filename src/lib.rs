//! This crate is my take on a growable array, written from scratch on top of the global allocator
//! rather than on top of [`Vec`].
//!
//! # Purpose
//! The crate started life as a lab exercise: a generic dynamic array that manages its own storage,
//! constructs values into uninitialized slots and moves them around by hand when it has to grow.
//! Writing it is mostly about understanding what a vector actually does, and the kind of invariants
//! it has to uphold to do so safely.
//!
//! # Method
//! [`Sequence`](collections::contiguous::Sequence) keeps its values in a
//! [`RawBuffer`](collections::contiguous::RawBuffer), a fixed allocation of
//! [`MaybeUninit`](std::mem::MaybeUninit) slots. The Sequence tracks how many of the slots are
//! initialized and is responsible for dropping them, the buffer only allocates and deallocates.
//! When a full Sequence grows, the new buffer is allocated first and values are then moved across
//! in a single pass, leaving a gap wherever a value is being inserted.
//!
//! Sequence implements [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), so all of the
//! read-only and in-place slice functionality comes for free.
//!
//! # Error Handling
//! Out of range indices are never undefined behaviour here. Each operation that can fail has a
//! `try_` version returning a strongly typed error, built from small structs that implement
//! [`Error`](std::error::Error) and combined with enums. The plain versions panic with the message
//! of the same error, which is more ergonomic for the common case. Either way, a failed operation
//! leaves the Sequence exactly as it was.
//!
//! # Logging
//! Growth and allocation failures are reported through `tracing`, at trace and debug level
//! respectively. Nothing is logged unless the application installs a subscriber.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
