//! Fixed-arity homogeneous collection.

use core::{ops::Index, slice};

use static_assertions::assert_eq_size;

use crate::{
    index::MAX_ARITY,
    kind::{Collection, HomogeneousKind, Sequence},
    uniform::Repeat,
};

/// `N` elements of one type, stored inline.
///
/// The arity is part of the type: positional access through [`Fixed::get`]
/// is checked when the program is built, not when it runs.
///
/// ```
/// use unicoll_core::{Fixed, fixed};
///
/// const FIB: Fixed<i32, 5> = Fixed::new([1, 1, 2, 3, 5]);
/// assert_eq!(*FIB.get::<4>(), 5);
/// assert_eq!(fixed!['a', 'b'].size(), 2);
/// ```
///
/// Reading past the arity is rejected:
///
/// ```compile_fail
/// use unicoll_core::fixed;
///
/// let small = fixed![1, 2, 3];
/// let _ = small.get::<3>();
/// ```
///
/// The arity is at most [`MAX_ARITY`], the largest arity the index
/// sequences cover, so every fixed collection can be folded and zipped:
///
/// ```compile_fail
/// use unicoll_core::{Fixed, MAX_ARITY};
///
/// let _ = Fixed::<i32, { MAX_ARITY + 1 }>::new([1; MAX_ARITY + 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed<T, const N: usize>([T; N]);

// Elements are stored inline, with no header.
assert_eq_size!(Fixed<u64, 4>, [u64; 4]);
assert_eq_size!(Fixed<u8, 0>, ());

impl<T, const N: usize> Fixed<T, N> {
    pub const ARITY: usize = N;

    pub const fn new(items: [T; N]) -> Self {
        const { assert!(N <= MAX_ARITY, "arity exceeds MAX_ARITY") };
        Self(items)
    }

    pub const fn size(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Element at position `I`; `I >= N` fails to compile.
    pub fn get<const I: usize>(&self) -> &T {
        const { assert!(I < N, "position is out of range for this arity") };
        &self.0[I]
    }

    /// Positional access with a run-time position and no bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N);
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.0.get_unchecked(index) }
    }

    pub fn front(&self) -> &T {
        const { assert!(N > 0, "an empty collection has no front") };
        &self.0[0]
    }

    pub fn back(&self) -> &T {
        const { assert!(N > 0, "an empty collection has no back") };
        &self.0[N - 1]
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_array(self) -> [T; N] {
        self.0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Fixed<U, N> {
        Fixed(self.0.map(f))
    }
}

impl<T, const N: usize> Collection for Fixed<T, N> {
    type Kind = HomogeneousKind;
    type Elems = Repeat<T>;

    fn size(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Sequence for Fixed<T, N> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> Index<usize> for Fixed<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> From<[T; N]> for Fixed<T, N> {
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> IntoIterator for Fixed<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Fixed<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const N: usize> AsRef<[T]> for Fixed<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

/// Builds a [`Fixed`] from its elements.
#[macro_export]
macro_rules! fixed {
    ($($item:expr),* $(,)?) => {
        $crate::Fixed::new([$($item),*])
    };
}
