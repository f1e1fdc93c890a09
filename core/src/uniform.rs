//! Type uniformity analysis.
//!
//! Given an operation `F` and the element descriptors of two collections,
//! [`Uniformity`] decides whether `F` produces the same result type at every
//! paired position. A descriptor is either [`Repeat<T>`] (every position
//! holds a `T`) or a type-level list of per-position types.
//!
//! The analysis is a set of trait impls, one per case, with associated-type
//! equality bounds doing the comparison. Every recursive case recurses on a
//! list in `Self` position, so the search always terminates on the concrete
//! length of that list. When the result types diverge no
//! impl applies, so code that requires uniformity is rejected at build time.
//! When no position is paired at all (an empty list on either side) the result
//! is vacuously uniform with the uninhabited element type [`Vacant`].
//!
//! [`Homogeneous`] then lowers a list that repeats one type into a
//! [`Fixed`] collection, and [`IntoUniform`] applies that lowering to
//! whatever [`zip`](crate::zip) returned.

use core::{convert::Infallible, marker::PhantomData};

use crate::{
    kind::Collection,
    op::BinaryOp,
    repr::{Dynamic, Fixed, HCons, HNil, Hetero},
};

/// Descriptor for a collection whose every position holds a `T`.
pub struct Repeat<T>(PhantomData<fn() -> T>);

/// Element type of a uniform result with no elements.
pub type Vacant = Infallible;

/// Uniform result type of `F` over the descriptors `Self` and `Rhs`.
pub trait Uniformity<F, Rhs> {
    type Output;
}

/// Uniform element type of zipping `L` with `R` under `F`.
pub type Uniform<F, L, R> =
    <<L as Collection>::Elems as Uniformity<F, <R as Collection>::Elems>>::Output;

// ============================================================================
// Single type x anything
// ============================================================================

// A single type pairs with every position of the other side, so the other
// side's structure drives the analysis.
impl<F, A, Rhs> Uniformity<F, Rhs> for Repeat<A>
where
    Rhs: UniformAgainst<F, A>,
{
    type Output = Rhs::Output;
}

/// Uniform result type of `F` with an `A` as first argument against every
/// position of `Self`.
pub trait UniformAgainst<F, A> {
    type Output;
}

impl<F, A, B> UniformAgainst<F, A> for Repeat<B>
where
    F: BinaryOp<A, B>,
{
    type Output = F::Output;
}

impl<F, A> UniformAgainst<F, A> for HNil {
    type Output = Vacant;
}

impl<F, A, B> UniformAgainst<F, A> for HCons<B, HNil>
where
    F: BinaryOp<A, B>,
{
    type Output = F::Output;
}

impl<F, A, B0, B1, Bs> UniformAgainst<F, A> for HCons<B0, HCons<B1, Bs>>
where
    F: BinaryOp<A, B0>,
    HCons<B1, Bs>: UniformAgainst<F, A, Output = <F as BinaryOp<A, B0>>::Output>,
{
    type Output = <F as BinaryOp<A, B0>>::Output;
}

// ============================================================================
// List x anything
// ============================================================================

impl<F, Rhs> Uniformity<F, Rhs> for HNil {
    type Output = Vacant;
}

impl<F, A, B> Uniformity<F, Repeat<B>> for HCons<A, HNil>
where
    F: BinaryOp<A, B>,
{
    type Output = F::Output;
}

impl<F, A> Uniformity<F, HNil> for HCons<A, HNil> {
    type Output = Vacant;
}

// One element left on the left: nothing further is paired.
impl<F, A, B, Bs> Uniformity<F, HCons<B, Bs>> for HCons<A, HNil>
where
    F: BinaryOp<A, B>,
{
    type Output = F::Output;
}

impl<F, A0, A1, As, B> Uniformity<F, Repeat<B>> for HCons<A0, HCons<A1, As>>
where
    F: BinaryOp<A0, B>,
    HCons<A1, As>: Uniformity<F, Repeat<B>, Output = <F as BinaryOp<A0, B>>::Output>,
{
    type Output = <F as BinaryOp<A0, B>>::Output;
}

impl<F, A0, A1, As> Uniformity<F, HNil> for HCons<A0, HCons<A1, As>> {
    type Output = Vacant;
}

// One element left on the right: nothing further is paired.
impl<F, A0, A1, As, B> Uniformity<F, HCons<B, HNil>> for HCons<A0, HCons<A1, As>>
where
    F: BinaryOp<A0, B>,
{
    type Output = F::Output;
}

impl<F, A0, A1, As, B0, B1, Bs> Uniformity<F, HCons<B0, HCons<B1, Bs>>>
    for HCons<A0, HCons<A1, As>>
where
    F: BinaryOp<A0, B0>,
    HCons<A1, As>: Uniformity<F, HCons<B1, Bs>, Output = <F as BinaryOp<A0, B0>>::Output>,
{
    type Output = <F as BinaryOp<A0, B0>>::Output;
}

// ============================================================================
// Lowering
// ============================================================================

/// A type-level list whose every element is a `T`, lowered to
/// `Fixed<T, LEN>`.
pub trait Homogeneous<T> {
    type Lowered;

    fn lower(self) -> Self::Lowered;
}

macro_rules! homogeneous {
    () => {
        impl<T> Homogeneous<T> for HNil {
            type Lowered = Fixed<T, 0>;

            fn lower(self) -> Fixed<T, 0> {
                Fixed::new([])
            }
        }
    };
    ($head:ident $($tail:ident)*) => {
        homogeneous!($($tail)*);

        impl<T> Homogeneous<T> for crate::HList![T $(, replace!($tail => T))*] {
            type Lowered = Fixed<T, { count!($head $($tail)*) }>;

            fn lower(self) -> Self::Lowered {
                let crate::hlist_pat![$head $(, $tail)*] = self;
                Fixed::new([$head $(, $tail)*])
            }
        }
    };
}

homogeneous!(
    e0 e1 e2 e3 e4 e5 e6 e7 e8 e9 e10 e11 e12 e13 e14 e15
    e16 e17 e18 e19 e20 e21 e22 e23 e24 e25 e26 e27 e28 e29 e30 e31
);

impl<L> Hetero<L> {
    /// Lowers a heterogeneous collection whose positions all hold a `T`.
    ///
    /// ```
    /// use unicoll_core::{Fixed, hetero};
    ///
    /// let same = hetero![1, 2, 3];
    /// let fixed: Fixed<i32, 3> = same.into_fixed();
    /// assert_eq!(fixed.into_array(), [1, 2, 3]);
    /// ```
    pub fn into_fixed<T>(self) -> L::Lowered
    where
        L: Homogeneous<T>,
    {
        self.into_list().lower()
    }
}

/// Converts a combinator result into its homogeneous form with elements `U`.
pub trait IntoUniform<U> {
    type Output;

    fn into_uniform(self) -> Self::Output;
}

impl<U> IntoUniform<U> for Dynamic<U> {
    type Output = Dynamic<U>;

    fn into_uniform(self) -> Self::Output {
        self
    }
}

impl<U, const N: usize> IntoUniform<U> for Fixed<U, N> {
    type Output = Fixed<U, N>;

    fn into_uniform(self) -> Self::Output {
        self
    }
}

impl<U, L: Homogeneous<U>> IntoUniform<U> for Hetero<L> {
    type Output = L::Lowered;

    fn into_uniform(self) -> Self::Output {
        self.into_list().lower()
    }
}

impl<U, X: IntoUniform<U>, E> IntoUniform<U> for Result<X, E> {
    type Output = Result<X::Output, E>;

    fn into_uniform(self) -> Self::Output {
        self.map(X::into_uniform)
    }
}
