//! Raw heap blocks and the allocator seam used by the raw-array phase.
//!
//! [`RawAllocator`] exists so that a test can substitute an allocator
//! that reports failure; production code uses [`SystemAllocator`].

pub use crate::raw::RawBlock;

/// Source of [`RawBlock`]s.
///
/// Returning `None` models a null allocation result. Implementations
/// take `&mut self` so they can count or script their responses.
pub trait RawAllocator {
    /// Allocate an uninitialised block of `len` `i32` slots.
    fn allocate(&mut self, len: usize) -> Option<RawBlock>;
}

/// Allocator backed by the process's global allocator.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

impl RawAllocator for SystemAllocator {
    fn allocate(&mut self, len: usize) -> Option<RawBlock> {
        RawBlock::allocate(len)
    }
}

impl<A: RawAllocator + ?Sized> RawAllocator for &mut A {
    fn allocate(&mut self, len: usize) -> Option<RawBlock> {
        (**self).allocate(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_allocator_returns_requested_len() {
        let block = SystemAllocator.allocate(128).unwrap();
        assert_eq!(block.len(), 128);
    }

    #[test]
    fn system_allocator_refuses_zero() {
        assert!(SystemAllocator.allocate(0).is_none());
    }

    fn allocate_via<A: RawAllocator>(mut alloc: A, len: usize) -> Option<RawBlock> {
        alloc.allocate(len)
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut alloc = SystemAllocator;
        assert!(allocate_via(&mut alloc, 4).is_some());
    }
}
