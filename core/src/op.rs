//! Binary operations and argument orientation.
//!
//! Every combining operation passed to [`zip`](crate::zip) or a fold
//! implements [`BinaryOp<A, B>`] for each pair of argument types it meets.
//! An operation that works on several element types (say, one that pairs
//! any two values) implements the trait generically; a closure covers exactly
//! one pair of types and is wrapped with [`from_fn`].

use core::marker::PhantomData;

/// A binary operation on an `A` and a `B`.
pub trait BinaryOp<A, B> {
    type Output;

    fn apply(&mut self, lhs: A, rhs: B) -> Self::Output;
}

impl<A, B, F> BinaryOp<A, B> for &mut F
where
    F: BinaryOp<A, B> + ?Sized,
{
    type Output = F::Output;

    fn apply(&mut self, lhs: A, rhs: B) -> Self::Output {
        (**self).apply(lhs, rhs)
    }
}

/// Operation backed by a closure. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps a closure as a [`BinaryOp`].
///
/// ```
/// use unicoll_core::{BinaryOp, op};
///
/// let mut minus = op::from_fn(|a: i32, b: i32| a - b);
/// assert_eq!(minus.apply(5, 3), 2);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<A, B, R, F> BinaryOp<A, B> for FromFn<F>
where
    F: FnMut(A, B) -> R,
{
    type Output = R;

    fn apply(&mut self, lhs: A, rhs: B) -> R {
        (self.0)(lhs, rhs)
    }
}

/// Which argument of the operation receives which value.
///
/// A traversal that carries a value `x` and meets an element `y` calls
/// `O::call(f, x, y)`; [`Straight`] applies `f(x, y)` and [`Flipped`]
/// applies `f(y, x)`.
pub trait Orientation<F, X, Y> {
    type Output;

    fn call(f: &mut F, x: X, y: Y) -> Self::Output;
}

pub enum Straight {}

pub enum Flipped {}

impl<F, X, Y> Orientation<F, X, Y> for Straight
where
    F: BinaryOp<X, Y>,
{
    type Output = F::Output;

    fn call(f: &mut F, x: X, y: Y) -> Self::Output {
        f.apply(x, y)
    }
}

impl<F, X, Y> Orientation<F, X, Y> for Flipped
where
    F: BinaryOp<Y, X>,
{
    type Output = F::Output;

    fn call(f: &mut F, x: X, y: Y) -> Self::Output {
        f.apply(y, x)
    }
}

/// Zero-sized marker carrying an orientation as a type parameter.
pub(crate) type Oriented<O> = PhantomData<fn() -> O>;
