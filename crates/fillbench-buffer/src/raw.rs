//! Low-level pointer primitives for the raw block and direct-buffer paths.
//!
//! Every function here is either `unsafe` with a documented contract or
//! a safe wrapper whose preconditions are checked before the pointer
//! walk. Each `unsafe` block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// Layout for `len` contiguous `i32`s. `None` for zero length or overflow.
pub(crate) fn layout_for(len: usize) -> Option<Layout> {
    if len == 0 {
        return None;
    }
    Layout::array::<i32>(len).ok()
}

/// Request `len` uninitialised `i32` slots from the global allocator.
///
/// Returns `None` when the layout is invalid or the allocator reports
/// failure with a null pointer.
pub(crate) fn allocate(len: usize) -> Option<NonNull<i32>> {
    let layout = layout_for(len)?;
    // SAFETY: layout has non-zero size since len > 0 and i32 is not a ZST.
    let ptr = unsafe { alloc::alloc(layout) };
    NonNull::new(ptr.cast::<i32>())
}

/// Return a block obtained from [`allocate`] to the global allocator.
///
/// # Safety
///
/// `ptr` must have been returned by [`allocate`] with the same `len`
/// and must not be used after this call.
pub(crate) unsafe fn deallocate(ptr: NonNull<i32>, len: usize) {
    if let Some(layout) = layout_for(len) {
        // SAFETY: caller guarantees ptr came from allocate(len), which
        // used this exact layout.
        unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }
}

/// Write `0, 1, .., len - 1` through a cursor that stores then advances.
///
/// The loop body runs before the bound is tested, so `len` must be at
/// least one.
///
/// # Safety
///
/// `ptr` must be valid for writes of `len` consecutive `i32`s and
/// `len >= 1`.
pub(crate) unsafe fn write_sequential(ptr: *mut i32, len: usize) {
    debug_assert!(len >= 1);
    let mut cursor = ptr;
    let mut j = 0usize;
    loop {
        // SAFETY: j < len here, so cursor points inside the region the
        // caller vouched for; advancing yields at most one-past-the-end.
        unsafe {
            cursor.write(j as i32);
            cursor = cursor.add(1);
        }
        j += 1;
        if j >= len {
            break;
        }
    }
}

/// Pointer walk over storage that is already a valid slice.
///
/// No-op on an empty slice, which the at-least-once loop cannot handle.
pub(crate) fn write_sequential_slice(storage: &mut [i32]) {
    if storage.is_empty() {
        return;
    }
    let len = storage.len();
    // SAFETY: storage is a live, exclusive slice of len >= 1 elements.
    unsafe { write_sequential(storage.as_mut_ptr(), len) };
}

/// An uninitialised heap block of `i32`s from the global allocator.
///
/// Contents are unspecified until [`fill_sequential`](Self::fill_sequential)
/// runs, so no accessor hands out the slots before that. The block is
/// returned to the allocator on drop.
pub struct RawBlock {
    ptr: NonNull<i32>,
    len: usize,
}

impl RawBlock {
    /// Allocate `len` slots. `None` if `len` is zero, the layout
    /// overflows, or the allocator returns null.
    pub fn allocate(len: usize) -> Option<Self> {
        let ptr = allocate(len)?;
        Some(Self { ptr, len })
    }

    /// Number of `i32` slots in the block.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: zero-length blocks are never allocated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.len * std::mem::size_of::<i32>()
    }

    /// Write `0..len` through a cursor over the block and return the
    /// now-initialised contents.
    pub fn fill_sequential(&mut self) -> &mut [i32] {
        // SAFETY: ptr owns len >= 1 writable slots (allocate rejects 0).
        unsafe { write_sequential(self.ptr.as_ptr(), self.len) };
        // SAFETY: every slot was written above; the borrow is tied to
        // &mut self, so it cannot outlive the allocation.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for RawBlock {
    fn drop(&mut self) {
        // SAFETY: ptr came from allocate(self.len) and is not used again.
        unsafe { deallocate(self.ptr, self.len) };
    }
}

impl std::fmt::Debug for RawBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawBlock").field("len", &self.len).finish()
    }
}
