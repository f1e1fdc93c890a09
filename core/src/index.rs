//! Compile-time index sequences and positional access.
//!
//! For an arity `N`, [`Arity<N>`] names two type-level lists of positions:
//!
//! - `Forward`: `Idx<0>, Idx<1>, ..., Idx<N-1>`
//! - `Reverse`: `Idx<N-1>, ..., Idx<1>, Idx<0>`
//!
//! Walking one of these lists with [`Gather`] produces the *lift* of a fixed
//! collection: a type-level list holding its elements in that order. Zip and
//! the folds traverse lifts with recursive trait impls, so every position is
//! a separate call site and nothing is indexed at run time.
//!
//! The tables cover arities up to [`MAX_ARITY`].

use crate::{
    Vec,
    repr::{Fixed, HCons, HList, HNil, Hetero},
};

/// Largest arity covered by the index, lowering and positional tables.
pub const MAX_ARITY: usize = 32;

/// A position, as a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Idx<const I: usize>;

impl<const I: usize> Idx<I> {
    pub const POSITION: usize = I;
}

/// An arity, as a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arity<const N: usize>;

/// The ascending and descending position lists of an arity.
pub trait IndexSequence {
    type Forward;
    type Reverse;
}

impl IndexSequence for Arity<0> {
    type Forward = HNil;
    type Reverse = HNil;
}

/// Appends `E` at the end of a list.
pub trait Append<E> {
    type Output;

    fn append(self, elem: E) -> Self::Output;
}

impl<E> Append<E> for HNil {
    type Output = HCons<E, HNil>;

    fn append(self, elem: E) -> Self::Output {
        HCons::new(elem, HNil)
    }
}

impl<E, H, T: Append<E>> Append<E> for HCons<H, T> {
    type Output = HCons<H, T::Output>;

    fn append(self, elem: E) -> Self::Output {
        HCons::new(self.head, self.tail.append(elem))
    }
}

/// Compile-time positional access: the element at position `I`.
pub trait At<const I: usize> {
    type Output;

    fn at(&self) -> &Self::Output;
}

impl<T, const N: usize, const I: usize> At<I> for Fixed<T, N> {
    type Output = T;

    fn at(&self) -> &T {
        self.get::<I>()
    }
}

impl<L: At<I>, const I: usize> At<I> for Hetero<L> {
    type Output = L::Output;

    fn at(&self) -> &L::Output {
        <L as At<I>>::at(self.as_list())
    }
}

impl<H, T> At<0> for HCons<H, T> {
    type Output = H;

    fn at(&self) -> &H {
        &self.head
    }
}

// Each arity extends the previous one: appending for the forward list,
// prepending for the reverse list.
macro_rules! index_sequences {
    ($($n:literal => $prev:literal),* $(,)?) => {$(
        impl IndexSequence for Arity<$n> {
            type Forward = <<Arity<$prev> as IndexSequence>::Forward as Append<Idx<$prev>>>::Output;
            type Reverse = HCons<Idx<$prev>, <Arity<$prev> as IndexSequence>::Reverse>;
        }
    )*};
}

macro_rules! positions {
    ($($n:literal => $prev:literal),* $(,)?) => {$(
        impl<H, T: At<$prev>> At<$n> for HCons<H, T> {
            type Output = <T as At<$prev>>::Output;

            fn at(&self) -> &Self::Output {
                <T as At<$prev>>::at(&self.tail)
            }
        }
    )*};
}

index_sequences! {
    1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7,
    9 => 8, 10 => 9, 11 => 10, 12 => 11, 13 => 12, 14 => 13, 15 => 14, 16 => 15,
    17 => 16, 18 => 17, 19 => 18, 20 => 19, 21 => 20, 22 => 21, 23 => 22, 24 => 23,
    25 => 24, 26 => 25, 27 => 26, 28 => 27, 29 => 28, 30 => 29, 31 => 30, 32 => 31,
}

positions! {
    1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7,
    9 => 8, 10 => 9, 11 => 10, 12 => 11, 13 => 12, 14 => 13, 15 => 14, 16 => 15,
    17 => 16, 18 => 17, 19 => 18, 20 => 19, 21 => 20, 22 => 21, 23 => 22, 24 => 23,
    25 => 24, 26 => 25, 27 => 26, 28 => 27, 29 => 28, 30 => 29, 31 => 30,
}

/// Ascending positions `0..N`.
pub const fn forward<const N: usize>() -> [usize; N] {
    let mut out = [0; N];
    let mut i = 0;
    while i < N {
        out[i] = i;
        i += 1;
    }
    out
}

/// Descending positions `N-1..=0`.
pub const fn reverse<const N: usize>() -> [usize; N] {
    let mut out = [0; N];
    let mut i = 0;
    while i < N {
        out[i] = N - 1 - i;
        i += 1;
    }
    out
}

/// A type-level list of [`Idx`] positions.
pub trait Positions: HList {
    fn write_positions(out: &mut Vec<usize>);
}

impl Positions for HNil {
    fn write_positions(_out: &mut Vec<usize>) {}
}

impl<const I: usize, T: Positions> Positions for HCons<Idx<I>, T> {
    fn write_positions(out: &mut Vec<usize>) {
        out.push(I);
        T::write_positions(out);
    }
}

/// The positions of a type-level index list, in list order.
pub fn positions<S: Positions>() -> Vec<usize> {
    let mut out = Vec::with_capacity(S::LEN);
    S::write_positions(&mut out);
    out
}

/// Walks an index list over a collection, cloning each addressed element
/// into a new type-level list.
pub trait Gather<C: ?Sized> {
    type Output;

    fn gather(collection: &C) -> Self::Output;
}

impl<C: ?Sized> Gather<C> for HNil {
    type Output = HNil;

    fn gather(_collection: &C) -> HNil {
        HNil
    }
}

impl<C, const I: usize, Rest> Gather<C> for HCons<Idx<I>, Rest>
where
    C: At<I> + ?Sized,
    <C as At<I>>::Output: Clone,
    Rest: Gather<C>,
{
    type Output = HCons<<C as At<I>>::Output, Rest::Output>;

    fn gather(collection: &C) -> Self::Output {
        HCons::new(<C as At<I>>::at(collection).clone(), Rest::gather(collection))
    }
}

/// Reverses a type-level list.
pub trait Reverse {
    type Output;

    fn reversed(self) -> Self::Output;
}

/// Moves every element of a list, front first, onto the front of `Acc`.
pub trait ReverseOnto<Acc> {
    type Output;

    fn reverse_onto(self, acc: Acc) -> Self::Output;
}

impl<Acc> ReverseOnto<Acc> for HNil {
    type Output = Acc;

    fn reverse_onto(self, acc: Acc) -> Acc {
        acc
    }
}

impl<Acc, H, T> ReverseOnto<Acc> for HCons<H, T>
where
    T: ReverseOnto<HCons<H, Acc>>,
{
    type Output = T::Output;

    fn reverse_onto(self, acc: Acc) -> Self::Output {
        self.tail.reverse_onto(HCons::new(self.head, acc))
    }
}

impl<L: ReverseOnto<HNil>> Reverse for L {
    type Output = L::Output;

    fn reversed(self) -> Self::Output {
        self.reverse_onto(HNil)
    }
}

/// A fixed collection viewed as a type-level list of its elements.
///
/// `lift` clones the elements front to back, `lift_rev` back to front.
pub trait Lift {
    type Forward;
    type Reverse;

    fn lift(&self) -> Self::Forward;
    fn lift_rev(&self) -> Self::Reverse;
}

impl<T: Clone, const N: usize> Lift for Fixed<T, N>
where
    Arity<N>: IndexSequence,
    <Arity<N> as IndexSequence>::Forward: Gather<Fixed<T, N>>,
    <Arity<N> as IndexSequence>::Reverse: Gather<Fixed<T, N>>,
{
    type Forward = <<Arity<N> as IndexSequence>::Forward as Gather<Fixed<T, N>>>::Output;
    type Reverse = <<Arity<N> as IndexSequence>::Reverse as Gather<Fixed<T, N>>>::Output;

    fn lift(&self) -> Self::Forward {
        <<Arity<N> as IndexSequence>::Forward as Gather<Self>>::gather(self)
    }

    fn lift_rev(&self) -> Self::Reverse {
        <<Arity<N> as IndexSequence>::Reverse as Gather<Self>>::gather(self)
    }
}

impl<L> Lift for Hetero<L>
where
    L: Clone + Reverse,
{
    type Forward = L;
    type Reverse = <L as Reverse>::Output;

    fn lift(&self) -> L {
        self.as_list().clone()
    }

    fn lift_rev(&self) -> Self::Reverse {
        self.as_list().clone().reversed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HList, fixed, hetero, hlist, vec};
    use pretty_assertions::assert_eq;

    type Forward<const N: usize> = <Arity<N> as IndexSequence>::Forward;
    type Backward<const N: usize> = <Arity<N> as IndexSequence>::Reverse;

    #[test]
    fn test_empty_sequences() {
        assert_eq!(positions::<Forward<0>>(), Vec::<usize>::new());
        assert_eq!(positions::<Backward<0>>(), Vec::<usize>::new());
    }

    #[test]
    fn test_forward_sequence() {
        assert_eq!(positions::<Forward<1>>(), vec![0]);
        assert_eq!(positions::<Forward<5>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(positions::<Forward<5>>(), forward::<5>());
    }

    #[test]
    fn test_reverse_sequence() {
        assert_eq!(positions::<Backward<4>>(), vec![3, 2, 1, 0]);
        assert_eq!(positions::<Backward<4>>(), reverse::<4>());
    }

    #[test]
    fn test_sequences_at_max_arity() {
        assert_eq!(positions::<Forward<MAX_ARITY>>(), forward::<MAX_ARITY>());
        assert_eq!(positions::<Backward<MAX_ARITY>>(), reverse::<MAX_ARITY>());
        assert_eq!(<Forward<MAX_ARITY> as HList>::LEN, MAX_ARITY);
    }

    #[test]
    fn test_const_positions() {
        const FORWARD: [usize; 3] = forward::<3>();
        const REVERSE: [usize; 3] = reverse::<3>();
        assert_eq!(FORWARD, [0, 1, 2]);
        assert_eq!(REVERSE, [2, 1, 0]);
        assert_eq!(forward::<0>(), [0usize; 0]);
        assert_eq!(Idx::<7>::POSITION, 7);
    }

    #[test]
    fn test_at_on_lists() {
        let list = hlist!['a', 2u16, "three"];
        assert_eq!(*<_ as At<0>>::at(&list), 'a');
        assert_eq!(*<_ as At<1>>::at(&list), 2u16);
        assert_eq!(*<_ as At<2>>::at(&list), "three");
    }

    #[test]
    fn test_append_and_reverse() {
        let list = hlist![1u8, 'b'].append("c");
        assert_eq!(list, hlist![1u8, 'b', "c"]);
        assert_eq!(list.reversed(), hlist!["c", 'b', 1u8]);
        assert_eq!(HNil.reversed(), HNil);
    }

    #[test]
    fn test_lift_fixed() {
        let fib = fixed![1, 1, 2, 3, 5];
        assert_eq!(fib.lift(), hlist![1, 1, 2, 3, 5]);
        assert_eq!(fib.lift_rev(), hlist![5, 3, 2, 1, 1]);
    }

    #[test]
    fn test_lift_hetero() {
        let mixed = hetero!['!', 2.5, 3];
        assert_eq!(mixed.lift(), hlist!['!', 2.5, 3]);
        assert_eq!(mixed.lift_rev(), hlist![3, 2.5, '!']);
    }
}
