//! Storage primitives for the fillbench benchmark.
//!
//! Two kinds of storage are compared:
//!
//! ```text
//! RawBlock      uninitialised heap block from the global allocator,
//!               filled by a write-then-advance pointer walk
//! DynamicArray  growable container (Vec<i32>), filled by push,
//!               by element iteration, or by the same pointer walk
//!               over its own storage
//! ```
//!
//! The four fill strategies live in [`fill`]. This crate is the only
//! one in the workspace that may contain `unsafe` code, and all of it
//! sits in the private `raw` module.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod block;
pub mod error;
pub mod fill;
mod raw;

pub use array::DynamicArray;
pub use block::{RawAllocator, RawBlock, SystemAllocator};
pub use error::BufferError;
