//! The four fill strategies, one per benchmark phase.
//!
//! Each writes the ascending sequence `0, 1, .., n - 1`. They differ
//! only in how the storage is obtained and walked:
//!
//! | Strategy | Storage | Access |
//! |----------|---------|--------|
//! | [`fill_raw`] | uninitialised [`RawBlock`] | pointer walk |
//! | [`fill_reserved`] | reserved [`DynamicArray`] | `push` |
//! | [`fill_resized_iter`] | zero-filled [`DynamicArray`] | element iterator |
//! | [`fill_resized_ptr`] | zero-filled [`DynamicArray`] | pointer walk over internal storage |
//!
//! The zero fill in the two resize strategies is part of their cost;
//! the raw block pays nothing for initialisation.

use crate::array::DynamicArray;
use crate::error::BufferError;
use crate::raw::{self, RawBlock};

/// Pointer-walk fill of a raw block. Returns the written contents.
pub fn fill_raw(block: &mut RawBlock) -> &mut [i32] {
    block.fill_sequential()
}

/// Reserve room for `n` elements, then append `0..n` one at a time.
pub fn fill_reserved<A: DynamicArray>(array: &mut A, n: usize) {
    array.reserve(n);
    for j in 0..n {
        array.push(j as i32);
    }
}

/// Resize to `n` zeroed elements, then assign `0..n` through the
/// element iterator.
pub fn fill_resized_iter<A: DynamicArray>(array: &mut A, n: usize) {
    array.resize(n);
    let mut j = 0i32;
    for e in array.iter_mut() {
        *e = j;
        j += 1;
    }
}

/// Resize to `n` zeroed elements, then bypass the container and walk a
/// raw cursor over its internal storage.
///
/// Rejects `n == 0` and a container whose length after the resize is
/// not `n`; both checks run before the walk.
pub fn fill_resized_ptr<A: DynamicArray>(array: &mut A, n: usize) -> Result<(), BufferError> {
    if n == 0 {
        return Err(BufferError::ZeroLength);
    }
    array.resize(n);
    let storage = array.as_mut_slice();
    if storage.len() != n {
        return Err(BufferError::LengthMismatch {
            expected: n,
            actual: storage.len(),
        });
    }
    raw::write_sequential_slice(storage);
    Ok(())
}
