//! Growable homogeneous collection.

use core::slice;

use crate::{
    Vec,
    error::OutOfRange,
    kind::{Collection, DynamicKind, Sequence},
    repr::Fixed,
    uniform::Repeat,
};

/// A homogeneous collection whose length is only known at run time.
///
/// Grows by appending at the tail; positions are never removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dynamic<T>(Vec<T>);

impl<T> Dynamic<T> {
    /// Creates an empty collection.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Number of elements currently stored.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Checked positional access.
    ///
    /// Returns [`OutOfRange`] when `index >= self.size()`.
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.0.get(index).ok_or(OutOfRange {
            index,
            len: self.0.len(),
        })
    }

    /// Positional access without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.size()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.0.len());
        // SAFETY: the caller guarantees `index < len`.
        unsafe { self.0.get_unchecked(index) }
    }

    pub fn front(&self) -> Option<&T> {
        self.0.first()
    }

    pub fn back(&self) -> Option<&T> {
        self.0.last()
    }

    /// Appends `value` at the tail.
    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.0.reserve(additional);
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Collection for Dynamic<T> {
    type Kind = DynamicKind;
    type Elems = Repeat<T>;

    fn size(&self) -> usize {
        self.0.len()
    }
}

impl<T> Sequence for Dynamic<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Dynamic<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Dynamic<T> {
    fn from(items: [T; N]) -> Self {
        Self(Vec::from(items))
    }
}

impl<T, const N: usize> From<Fixed<T, N>> for Dynamic<T> {
    fn from(items: Fixed<T, N>) -> Self {
        Self(Vec::from(items.into_array()))
    }
}

impl<T> FromIterator<T> for Dynamic<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Dynamic<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> IntoIterator for Dynamic<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Dynamic<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> AsRef<[T]> for Dynamic<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}
