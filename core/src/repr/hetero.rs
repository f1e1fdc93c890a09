//! Type-level lists and the fixed heterogeneous collection built on them.
//!
//! A heterogeneous collection of `a: A, b: B, c: C` is stored as
//! `HCons<A, HCons<B, HCons<C, HNil>>>`. Every position has its own type, the
//! length is a constant of the list type, and all traversals are recursive
//! trait impls that the compiler flattens into straight-line code.

use static_assertions::assert_eq_size;

use crate::{
    index::At,
    kind::{Collection, HeterogeneousKind},
};

/// The empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HNil;

/// A list cell: a `head` element followed by the `tail` list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

impl<H, T> HCons<H, T> {
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }
}

assert_eq_size!(HNil, ());
assert_eq_size!(HCons<u8, HCons<u8, HNil>>, [u8; 2]);

/// A type-level list with a length known at compile time.
pub trait HList: Sized {
    const LEN: usize;

    fn len(&self) -> usize {
        Self::LEN
    }

    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    fn prepend<H>(self, head: H) -> HCons<H, Self> {
        HCons::new(head, self)
    }
}

impl HList for HNil {
    const LEN: usize = 0;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// The last element of a non-empty list.
pub trait Last {
    type Output;

    fn last(&self) -> &Self::Output;
}

impl<H> Last for HCons<H, HNil> {
    type Output = H;

    fn last(&self) -> &H {
        &self.head
    }
}

impl<H, H2, T> Last for HCons<H, HCons<H2, T>>
where
    HCons<H2, T>: Last,
{
    type Output = <HCons<H2, T> as Last>::Output;

    fn last(&self) -> &Self::Output {
        self.tail.last()
    }
}

/// Receives elements of type `E` during [`Hetero::for_each`].
///
/// A visitor implements `Visit<E>` once per element type it accepts,
/// usually through a single generic impl.
pub trait Visit<E> {
    fn visit(&mut self, position: usize, elem: &E);
}

/// Walks every element of a list with a visitor, in position order.
pub trait VisitAll<V> {
    fn visit_from(&self, visitor: &mut V, position: usize);
}

impl<V> VisitAll<V> for HNil {
    fn visit_from(&self, _visitor: &mut V, _position: usize) {}
}

impl<V, H, T> VisitAll<V> for HCons<H, T>
where
    V: Visit<H>,
    T: VisitAll<V>,
{
    fn visit_from(&self, visitor: &mut V, position: usize) {
        visitor.visit(position, &self.head);
        self.tail.visit_from(visitor, position + 1);
    }
}

/// A fixed collection with one element type per position.
///
/// ```
/// use unicoll_core::{Hetero, hetero};
///
/// let mixed: Hetero![char, f64, i32] = hetero!['!', 3.14, 3];
/// assert_eq!(mixed.size(), 3);
/// assert_eq!(*mixed.get::<0>(), '!');
/// assert_eq!(*mixed.back(), 3);
/// ```
///
/// Positions past the end do not exist:
///
/// ```compile_fail
/// use unicoll_core::hetero;
///
/// let pair = hetero!['a', 1];
/// let _ = pair.get::<2>();
/// ```
///
/// Neither does the front of an empty collection:
///
/// ```compile_fail
/// use unicoll_core::hetero;
///
/// let empty = hetero![];
/// let _ = empty.front();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hetero<L>(L);

impl<L> Hetero<L> {
    pub const fn new(list: L) -> Self {
        Self(list)
    }

    pub const fn as_list(&self) -> &L {
        &self.0
    }

    pub fn into_list(self) -> L {
        self.0
    }
}

impl<L: HList> Hetero<L> {
    pub const ARITY: usize = L::LEN;

    pub const fn size(&self) -> usize {
        L::LEN
    }

    pub const fn is_empty(&self) -> bool {
        L::LEN == 0
    }

    /// Element at position `I`, with its own type.
    pub fn get<const I: usize>(&self) -> &<L as At<I>>::Output
    where
        L: At<I>,
    {
        <L as At<I>>::at(&self.0)
    }

    /// Calls `visitor` on every element, front to back.
    pub fn for_each<V>(&self, visitor: &mut V)
    where
        L: VisitAll<V>,
    {
        self.0.visit_from(visitor, 0);
    }
}

impl<H, T> Hetero<HCons<H, T>> {
    pub fn front(&self) -> &H {
        &self.0.head
    }

    pub fn back(&self) -> &<HCons<H, T> as Last>::Output
    where
        HCons<H, T>: Last,
    {
        self.0.last()
    }
}

impl<L: HList> Collection for Hetero<L> {
    type Kind = HeterogeneousKind;
    type Elems = L;

    fn size(&self) -> usize {
        L::LEN
    }
}

impl<L: HList> From<L> for Hetero<L> {
    fn from(list: L) -> Self {
        Self(list)
    }
}

/// Builds a type-level list value: `hlist![a, b, c]`.
#[macro_export]
macro_rules! hlist {
    () => { $crate::HNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::HCons::new($head, $crate::hlist!($($tail),*))
    };
}

/// Names a type-level list type: `HList![A, B, C]`.
#[macro_export]
macro_rules! HList {
    () => { $crate::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::HCons<$head, $crate::HList!($($tail),*)>
    };
}

/// Destructures a type-level list: `let hlist_pat![a, b] = list;`.
#[macro_export]
macro_rules! hlist_pat {
    () => { $crate::HNil };
    ($head:pat $(, $tail:pat)* $(,)?) => {
        $crate::HCons { head: $head, tail: $crate::hlist_pat!($($tail),*) }
    };
}

/// Builds a [`Hetero`] from its elements: `hetero!['a', 1.5, 3]`.
#[macro_export]
macro_rules! hetero {
    ($($item:expr),* $(,)?) => {
        $crate::Hetero::new($crate::hlist!($($item),*))
    };
}

/// Names a [`Hetero`] type: `Hetero![char, f64, i32]`.
#[macro_export]
macro_rules! Hetero {
    ($($ty:ty),* $(,)?) => {
        $crate::Hetero<$crate::HList!($($ty),*)>
    };
}
