//! Folds: reduce a collection to one value.
//!
//! For an operation `f`, an initial value `x0` and elements `e0 .. e(n-1)`:
//!
//! - [`fold_left`]: `f(... f(f(x0, e0), e1) ..., e(n-1))`
//! - [`fold_right`]: `f(e0, f(e1, ... f(e(n-1), x0) ...))`
//! - [`fold_right_flipped`]: `f(... f(f(x0, e(n-1)), e(n-2)) ..., e0)`
//!
//! Dynamic collections fold with an ordinary loop, so the accumulator keeps
//! one type throughout. Fixed collections (homogeneous or not) fold over their
//! lift, one call per position, so every step may produce a different type.

use tracing::trace;

use crate::{
    index::Lift,
    op::{BinaryOp, Flipped, Orientation, Straight},
    repr::{Dynamic, Fixed, HCons, HNil, Hetero},
};

pub trait FoldLeft<F, X> {
    type Output;

    fn fold_left(&self, f: &mut F, init: X) -> Self::Output;
}

pub trait FoldRight<F, X> {
    type Output;

    fn fold_right(&self, f: &mut F, init: X) -> Self::Output;
}

pub trait FoldRightFlipped<F, X> {
    type Output;

    fn fold_right_flipped(&self, f: &mut F, init: X) -> Self::Output;
}

/// Left fold: the accumulator is the first argument, elements front to back.
///
/// ```
/// use unicoll_core::{Dynamic, fold_left, op};
///
/// let minus = op::from_fn(|a: i32, b: i32| a - b);
/// assert_eq!(fold_left(minus, 0, &Dynamic::from(vec![1, 2, 3])), -6);
/// ```
pub fn fold_left<F, X, C>(mut f: F, init: X, collection: &C) -> C::Output
where
    C: FoldLeft<F, X> + ?Sized,
{
    collection.fold_left(&mut f, init)
}

/// Right fold: the accumulator is the second argument, elements back to front.
///
/// ```
/// use unicoll_core::{fixed, fold_right, op};
///
/// let minus = op::from_fn(|a: i32, b: i32| a - b);
/// assert_eq!(fold_right(minus, 0, &fixed![1, 2, 3]), 2);
/// ```
pub fn fold_right<F, X, C>(mut f: F, init: X, collection: &C) -> C::Output
where
    C: FoldRight<F, X> + ?Sized,
{
    collection.fold_right(&mut f, init)
}

/// Right fold with the accumulator as the first argument.
///
/// ```
/// use unicoll_core::{fixed, fold_right_flipped, op};
///
/// let minus = op::from_fn(|a: i32, b: i32| a - b);
/// assert_eq!(fold_right_flipped(minus, 0, &fixed![1, 2, 3]), -6);
/// ```
pub fn fold_right_flipped<F, X, C>(mut f: F, init: X, collection: &C) -> C::Output
where
    C: FoldRightFlipped<F, X> + ?Sized,
{
    collection.fold_right_flipped(&mut f, init)
}

// ============================================================================
// Dynamic: sequential loops
// ============================================================================

impl<T, F, X> FoldLeft<F, X> for Dynamic<T>
where
    T: Clone,
    F: BinaryOp<X, T, Output = X>,
{
    type Output = X;

    fn fold_left(&self, f: &mut F, init: X) -> X {
        trace!(len = self.size(), "fold_left");
        self.iter().fold(init, |acc, elem| f.apply(acc, elem.clone()))
    }
}

impl<T, F, X> FoldRight<F, X> for Dynamic<T>
where
    T: Clone,
    F: BinaryOp<T, X, Output = X>,
{
    type Output = X;

    fn fold_right(&self, f: &mut F, init: X) -> X {
        trace!(len = self.size(), "fold_right");
        self.iter().rev().fold(init, |acc, elem| f.apply(elem.clone(), acc))
    }
}

impl<T, F, X> FoldRightFlipped<F, X> for Dynamic<T>
where
    T: Clone,
    F: BinaryOp<X, T, Output = X>,
{
    type Output = X;

    fn fold_right_flipped(&self, f: &mut F, init: X) -> X {
        trace!(len = self.size(), "fold_right_flipped");
        self.iter().rev().fold(init, |acc, elem| f.apply(acc, elem.clone()))
    }
}

// ============================================================================
// Fixed kinds: unrolled over the lift
// ============================================================================

/// Threads an accumulator through a type-level list, one call per element.
///
/// `O` decides the argument order at each step: [`Straight`] calls
/// `f(acc, elem)`, [`Flipped`] calls `f(elem, acc)`.
pub trait Accumulate<F, X, O> {
    type Output;

    fn accumulate(self, f: &mut F, acc: X) -> Self::Output;
}

impl<F, X, O> Accumulate<F, X, O> for HNil {
    type Output = X;

    fn accumulate(self, _f: &mut F, acc: X) -> X {
        acc
    }
}

impl<F, X, O, H, T> Accumulate<F, X, O> for HCons<H, T>
where
    O: Orientation<F, X, H>,
    T: Accumulate<F, O::Output, O>,
{
    type Output = T::Output;

    fn accumulate(self, f: &mut F, acc: X) -> Self::Output {
        let acc = O::call(f, acc, self.head);
        self.tail.accumulate(f, acc)
    }
}

impl<T, const N: usize, F, X> FoldLeft<F, X> for Fixed<T, N>
where
    Self: Lift,
    <Self as Lift>::Forward: Accumulate<F, X, Straight>,
{
    type Output = <<Self as Lift>::Forward as Accumulate<F, X, Straight>>::Output;

    fn fold_left(&self, f: &mut F, init: X) -> Self::Output {
        self.lift().accumulate(f, init)
    }
}

impl<T, const N: usize, F, X> FoldRight<F, X> for Fixed<T, N>
where
    Self: Lift,
    <Self as Lift>::Reverse: Accumulate<F, X, Flipped>,
{
    type Output = <<Self as Lift>::Reverse as Accumulate<F, X, Flipped>>::Output;

    fn fold_right(&self, f: &mut F, init: X) -> Self::Output {
        self.lift_rev().accumulate(f, init)
    }
}

impl<T, const N: usize, F, X> FoldRightFlipped<F, X> for Fixed<T, N>
where
    Self: Lift,
    <Self as Lift>::Reverse: Accumulate<F, X, Straight>,
{
    type Output = <<Self as Lift>::Reverse as Accumulate<F, X, Straight>>::Output;

    fn fold_right_flipped(&self, f: &mut F, init: X) -> Self::Output {
        self.lift_rev().accumulate(f, init)
    }
}

impl<L, F, X> FoldLeft<F, X> for Hetero<L>
where
    Self: Lift,
    <Self as Lift>::Forward: Accumulate<F, X, Straight>,
{
    type Output = <<Self as Lift>::Forward as Accumulate<F, X, Straight>>::Output;

    fn fold_left(&self, f: &mut F, init: X) -> Self::Output {
        self.lift().accumulate(f, init)
    }
}

impl<L, F, X> FoldRight<F, X> for Hetero<L>
where
    Self: Lift,
    <Self as Lift>::Reverse: Accumulate<F, X, Flipped>,
{
    type Output = <<Self as Lift>::Reverse as Accumulate<F, X, Flipped>>::Output;

    fn fold_right(&self, f: &mut F, init: X) -> Self::Output {
        self.lift_rev().accumulate(f, init)
    }
}

impl<L, F, X> FoldRightFlipped<F, X> for Hetero<L>
where
    Self: Lift,
    <Self as Lift>::Reverse: Accumulate<F, X, Straight>,
{
    type Output = <<Self as Lift>::Reverse as Accumulate<F, X, Straight>>::Output;

    fn fold_right_flipped(&self, f: &mut F, init: X) -> Self::Output {
        self.lift_rev().accumulate(f, init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{String, fixed, hetero, op::from_fn, test_utils, vec};
    use pretty_assertions::assert_eq;

    fn minus() -> impl BinaryOp<i32, i32, Output = i32> {
        from_fn(|a: i32, b: i32| a - b)
    }

    /// Renders both arguments and joins them.
    struct Concat;

    impl<A: core::fmt::Display, B: core::fmt::Display> BinaryOp<A, B> for Concat {
        type Output = String;

        fn apply(&mut self, lhs: A, rhs: B) -> String {
            format!("{lhs}{rhs}")
        }
    }

    /// Wraps the accumulator in a new tuple at every step.
    struct Nest;

    impl<A, B> BinaryOp<A, B> for Nest {
        type Output = (A, B);

        fn apply(&mut self, lhs: A, rhs: B) -> (A, B) {
            (lhs, rhs)
        }
    }

    #[test]
    fn test_minus_on_every_representation() {
        test_utils::init_test_logging();

        let dynamic = Dynamic::from(vec![1, 2, 3]);
        let fixed = fixed![1, 2, 3];
        let hetero = hetero![1, 2, 3];

        assert_eq!(fold_left(minus(), 0, &dynamic), -6);
        assert_eq!(fold_left(minus(), 0, &fixed), -6);
        assert_eq!(fold_left(minus(), 0, &hetero), -6);

        assert_eq!(fold_right(minus(), 0, &dynamic), 2);
        assert_eq!(fold_right(minus(), 0, &fixed), 2);
        assert_eq!(fold_right(minus(), 0, &hetero), 2);

        assert_eq!(fold_right_flipped(minus(), 0, &dynamic), -6);
        assert_eq!(fold_right_flipped(minus(), 0, &fixed), -6);
        assert_eq!(fold_right_flipped(minus(), 0, &hetero), -6);
    }

    #[test]
    fn test_concat_orders() {
        let letters = Dynamic::from(vec!['a', 'b', 'c', 'z']);

        assert_eq!(fold_left(Concat, String::new(), &letters), "abcz");
        assert_eq!(fold_right(Concat, String::new(), &letters), "abcz");
        assert_eq!(fold_right_flipped(Concat, String::new(), &letters), "zcba");
    }

    #[test]
    fn test_concat_heterogeneous() {
        let mixed = hetero!['!', 2.5, 'c', 3];

        assert_eq!(fold_left(Concat, "", &mixed), "!2.5c3");
        assert_eq!(fold_right(Concat, "", &mixed), "!2.5c3");
        assert_eq!(fold_right_flipped(Concat, "", &mixed), "3c2.5!");
    }

    #[test]
    fn test_accumulator_type_changes_per_step() {
        let nested = fold_left(Nest, (), &fixed![1u8, 2]);
        assert_eq!(nested, (((), 1u8), 2u8));

        let nested = fold_right(Nest, (), &hetero!['a', 2i64]);
        assert_eq!(nested, ('a', (2i64, ())));

        let nested = fold_right_flipped(Nest, (), &hetero!['a', 2i64]);
        assert_eq!(nested, (((), 2i64), 'a'));
    }

    #[test]
    fn test_empty_collections_return_init() {
        let empty: Fixed<i32, 0> = fixed![];
        assert_eq!(fold_left(minus(), 7, &empty), 7);
        assert_eq!(fold_right(minus(), 7, &hetero![]), 7);
        assert_eq!(fold_right_flipped(minus(), 7, &Dynamic::<i32>::new()), 7);
    }

    #[test]
    fn test_fold_at_max_arity() {
        let ones = Fixed::<i32, { crate::MAX_ARITY }>::new([1; crate::MAX_ARITY]);

        assert_eq!(fold_left(minus(), 0, &ones), -32);
        assert_eq!(fold_right(minus(), 0, &ones), 0);
        assert_eq!(fold_right_flipped(minus(), 0, &ones), -32);
    }

    #[test]
    fn test_dynamic_fold_counts_calls() {
        let mut calls = 0;
        let count = from_fn(|acc: usize, _: char| {
            calls += 1;
            acc + 1
        });
        let letters: Dynamic<char> = "hello".chars().collect();
        assert_eq!(fold_left(count, 0, &letters), 5);
        assert_eq!(calls, 5);
    }
}
