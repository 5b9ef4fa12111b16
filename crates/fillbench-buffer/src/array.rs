//! The dynamic-array abstraction benchmarked against the raw block.
//!
//! [`DynamicArray`] names exactly the container operations the fill
//! strategies use, so that a test can substitute a container with
//! pathological capacity behaviour. `Vec<i32>` is the real one.

/// A growable, contiguous array of `i32` with separate length and capacity.
pub trait DynamicArray {
    /// A new array with length and capacity zero.
    fn new_empty() -> Self
    where
        Self: Sized;

    /// Ensure room for at least `additional` more elements without
    /// changing the length.
    fn reserve(&mut self, additional: usize);

    /// Append one element at the end.
    fn push(&mut self, value: i32);

    /// Set the length to `len`, zero-filling any new slots.
    fn resize(&mut self, len: usize);

    /// The live elements as a shared slice.
    fn as_slice(&self) -> &[i32];

    /// The live elements as an exclusive slice over the internal storage.
    fn as_mut_slice(&mut self) -> &mut [i32];

    /// Number of live elements.
    fn len(&self) -> usize;

    /// Number of elements the array can hold before reallocating.
    fn capacity(&self) -> usize;

    /// Drop all elements and give the storage back, leaving length and
    /// capacity at zero.
    fn release(&mut self);

    /// `true` when there are no live elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the live elements by mutable reference.
    fn iter_mut(&mut self) -> std::slice::IterMut<'_, i32> {
        self.as_mut_slice().iter_mut()
    }
}

impl DynamicArray for Vec<i32> {
    fn new_empty() -> Self {
        Vec::new()
    }

    // Exact reservation: an empty Vec asked for N reports capacity N.
    fn reserve(&mut self, additional: usize) {
        Vec::reserve_exact(self, additional);
    }

    fn push(&mut self, value: i32) {
        Vec::push(self, value);
    }

    fn resize(&mut self, len: usize) {
        Vec::resize(self, len, 0);
    }

    fn as_slice(&self) -> &[i32] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [i32] {
        self
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn release(&mut self) {
        *self = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_empty_has_no_capacity() {
        let v = <Vec<i32> as DynamicArray>::new_empty();
        assert_eq!(DynamicArray::len(&v), 0);
        assert_eq!(DynamicArray::capacity(&v), 0);
    }

    #[test]
    fn reserve_on_empty_is_exact() {
        let mut v = <Vec<i32> as DynamicArray>::new_empty();
        DynamicArray::reserve(&mut v, 1_000_000);
        assert_eq!(DynamicArray::capacity(&v), 1_000_000);
        assert!(DynamicArray::is_empty(&v));
    }

    #[test]
    fn resize_zero_fills() {
        let mut v = <Vec<i32> as DynamicArray>::new_empty();
        DynamicArray::resize(&mut v, 10);
        assert_eq!(DynamicArray::as_slice(&v), &[0; 10]);
    }

    #[test]
    fn release_resets_capacity() {
        let mut v = <Vec<i32> as DynamicArray>::new_empty();
        DynamicArray::resize(&mut v, 100);
        DynamicArray::release(&mut v);
        assert_eq!(DynamicArray::len(&v), 0);
        assert_eq!(DynamicArray::capacity(&v), 0);
    }

    #[test]
    fn iter_mut_visits_every_element() {
        let mut v: Vec<i32> = vec![0; 5];
        for e in DynamicArray::iter_mut(&mut v) {
            *e = 3;
        }
        assert_eq!(v, [3; 5]);
    }
}
