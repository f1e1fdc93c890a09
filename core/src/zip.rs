//! Zip: combine two collections position by position.
//!
//! `zip(f, &lhs, &rhs)` returns a collection of `min(lhs.size(), rhs.size())`
//! elements whose element at `i` is `f(lhs[i], rhs[i])`. The algorithm and the
//! result representation depend only on the representation kinds of the two
//! operands:
//!
//! | lhs \ rhs         | Dynamic             | FixedHomogeneous    | FixedHeterogeneous          |
//! |-------------------|---------------------|---------------------|-----------------------------|
//! | Dynamic           | [`Sequential`]      | [`Sequential`]      | [`Checked<Straight>`]       |
//! | FixedHomogeneous  | [`Sequential`]      | [`Lowered`]         | [`Unrolled`]                |
//! | FixedHeterogeneous| [`Checked<Flipped>`]| [`Unrolled`]        | [`Unrolled`]                |
//!
//! The table is the set of [`Plan`] impls below. Each strategy is a
//! [`ZipStrategy`] impl; the compiler picks one per call site, so there is no
//! dispatch at run time.
//!
//! [`zip_uniform`] additionally requires the operation's result type to be
//! the same at every position and returns the homogeneous form of the result.

use tracing::trace;

use crate::{
    error::OutOfRange,
    index::Lift,
    kind::{Collection, DynamicKind, HeterogeneousKind, HomogeneousKind, Representation, Sequence},
    op::{BinaryOp, Flipped, Orientation, Oriented, Straight},
    repr::{Dynamic, HCons, HNil, Hetero},
    uniform::{Homogeneous, IntoUniform, Uniform, Uniformity},
};

// ============================================================================
// Decision table
// ============================================================================

/// Maps a pair of representation kinds to the zip strategy that handles them.
pub trait Plan {
    type Strategy: Route;
}

impl Plan for (DynamicKind, DynamicKind) {
    type Strategy = Sequential;
}

impl Plan for (DynamicKind, HomogeneousKind) {
    type Strategy = Sequential;
}

impl Plan for (HomogeneousKind, DynamicKind) {
    type Strategy = Sequential;
}

impl Plan for (HomogeneousKind, HomogeneousKind) {
    type Strategy = Lowered;
}

impl Plan for (HomogeneousKind, HeterogeneousKind) {
    type Strategy = Unrolled;
}

impl Plan for (HeterogeneousKind, HomogeneousKind) {
    type Strategy = Unrolled;
}

impl Plan for (HeterogeneousKind, HeterogeneousKind) {
    type Strategy = Unrolled;
}

impl Plan for (DynamicKind, HeterogeneousKind) {
    type Strategy = Checked<Straight>;
}

impl Plan for (HeterogeneousKind, DynamicKind) {
    type Strategy = Checked<Flipped>;
}

/// The representation a strategy produces.
pub trait Route {
    const RESULT: Representation;
}

/// Run-time loop over the shorter operand. Produces a [`Dynamic`].
pub enum Sequential {}

/// Unrolled zip of two homogeneous fixed collections, lowered back to a
/// [`Fixed`](crate::Fixed).
pub enum Lowered {}

/// Unrolled zip involving a heterogeneous collection. Produces a [`Hetero`].
pub enum Unrolled {}

/// Heterogeneous arity against a dynamic operand. Produces
/// `Result<Hetero<_>, OutOfRange>`; `O` orders the operation's arguments
/// (`Straight`: dynamic element first).
pub struct Checked<O>(Oriented<O>);

impl Route for Sequential {
    const RESULT: Representation = Representation::Dynamic;
}

impl Route for Lowered {
    const RESULT: Representation = Representation::FixedHomogeneous;
}

impl Route for Unrolled {
    const RESULT: Representation = Representation::FixedHeterogeneous;
}

impl<O> Route for Checked<O> {
    const RESULT: Representation = Representation::FixedHeterogeneous;
}

/// Strategy chosen by [`Plan`] for collections `L` and `R`.
pub type StrategyOf<L, R> =
    <(<L as Collection>::Kind, <R as Collection>::Kind) as Plan>::Strategy;

/// Result type of `zip(f, &l, &r)`.
pub type Zipped<F, L, R> = <StrategyOf<L, R> as ZipStrategy<F, L, R>>::Output;

/// Representation of `zip`'s result for collections `L` and `R`.
pub const fn zip_representation<L, R>() -> Representation
where
    L: Collection,
    R: Collection,
    (L::Kind, R::Kind): Plan,
{
    <StrategyOf<L, R> as Route>::RESULT
}

// ============================================================================
// Strategies
// ============================================================================

/// One way of zipping an `L` with an `R` under the operation `F`.
pub trait ZipStrategy<F, L: ?Sized, R: ?Sized> {
    type Output;

    fn zip(f: &mut F, lhs: &L, rhs: &R) -> Self::Output;
}

impl<F, L, R> ZipStrategy<F, L, R> for Sequential
where
    L: Sequence,
    R: Sequence,
    L::Item: Clone,
    R::Item: Clone,
    F: BinaryOp<L::Item, R::Item>,
{
    type Output = Dynamic<<F as BinaryOp<L::Item, R::Item>>::Output>;

    fn zip(f: &mut F, lhs: &L, rhs: &R) -> Self::Output {
        let (lhs, rhs) = (lhs.as_slice(), rhs.as_slice());
        let len = lhs.len().min(rhs.len());
        trace!(lhs = lhs.len(), rhs = rhs.len(), len, "Sequential zip");

        let mut out = Dynamic::with_capacity(len);
        for (a, b) in lhs.iter().zip(rhs) {
            out.push(f.apply(a.clone(), b.clone()));
        }
        out
    }
}

impl<F, L, R> ZipStrategy<F, L, R> for Lowered
where
    L: Sequence + Lift,
    R: Sequence + Lift,
    F: BinaryOp<L::Item, R::Item>,
    L::Forward: ZipList<R::Forward, F>,
    <L::Forward as ZipList<R::Forward, F>>::Output:
        Homogeneous<<F as BinaryOp<L::Item, R::Item>>::Output>,
{
    type Output = <<L::Forward as ZipList<R::Forward, F>>::Output as Homogeneous<
        <F as BinaryOp<L::Item, R::Item>>::Output,
    >>::Lowered;

    fn zip(f: &mut F, lhs: &L, rhs: &R) -> Self::Output {
        lhs.lift().zip_list(rhs.lift(), f).lower()
    }
}

impl<F, L, R> ZipStrategy<F, L, R> for Unrolled
where
    L: Lift,
    R: Lift,
    L::Forward: ZipList<R::Forward, F>,
{
    type Output = Hetero<<L::Forward as ZipList<R::Forward, F>>::Output>;

    fn zip(f: &mut F, lhs: &L, rhs: &R) -> Self::Output {
        Hetero::new(lhs.lift().zip_list(rhs.lift(), f))
    }
}

impl<F, T, R> ZipStrategy<F, Dynamic<T>, R> for Checked<Straight>
where
    R: Lift,
    R::Forward: ZipChecked<T, F, Straight>,
{
    type Output = Result<Hetero<<R::Forward as ZipChecked<T, F, Straight>>::Output>, OutOfRange>;

    fn zip(f: &mut F, lhs: &Dynamic<T>, rhs: &R) -> Self::Output {
        trace!(dynamic = lhs.size(), "Checked zip");
        rhs.lift().zip_checked(lhs, 0, f).map(Hetero::new)
    }
}

impl<F, L, T> ZipStrategy<F, L, Dynamic<T>> for Checked<Flipped>
where
    L: Lift,
    L::Forward: ZipChecked<T, F, Flipped>,
{
    type Output = Result<Hetero<<L::Forward as ZipChecked<T, F, Flipped>>::Output>, OutOfRange>;

    fn zip(f: &mut F, lhs: &L, rhs: &Dynamic<T>) -> Self::Output {
        trace!(dynamic = rhs.size(), "Checked zip");
        lhs.lift().zip_checked(rhs, 0, f).map(Hetero::new)
    }
}

// ============================================================================
// List recursion
// ============================================================================

/// Pairs two type-level lists position by position, stopping at the shorter.
pub trait ZipList<Rhs, F> {
    type Output;

    fn zip_list(self, rhs: Rhs, f: &mut F) -> Self::Output;
}

impl<Rhs, F> ZipList<Rhs, F> for HNil {
    type Output = HNil;

    fn zip_list(self, _rhs: Rhs, _f: &mut F) -> HNil {
        HNil
    }
}

impl<H, T, F> ZipList<HNil, F> for HCons<H, T> {
    type Output = HNil;

    fn zip_list(self, _rhs: HNil, _f: &mut F) -> HNil {
        HNil
    }
}

impl<H1, T1, H2, T2, F> ZipList<HCons<H2, T2>, F> for HCons<H1, T1>
where
    F: BinaryOp<H1, H2>,
    T1: ZipList<T2, F>,
{
    type Output = HCons<F::Output, T1::Output>;

    fn zip_list(self, rhs: HCons<H2, T2>, f: &mut F) -> Self::Output {
        let head = f.apply(self.head, rhs.head);
        HCons::new(head, self.tail.zip_list(rhs.tail, f))
    }
}

/// Pairs every element of a type-level list with the element at the same
/// position of a dynamic collection, failing at the first position the
/// dynamic collection does not have.
pub trait ZipChecked<T, F, O> {
    type Output;

    fn zip_checked(
        self,
        other: &Dynamic<T>,
        position: usize,
        f: &mut F,
    ) -> Result<Self::Output, OutOfRange>;
}

impl<T, F, O> ZipChecked<T, F, O> for HNil {
    type Output = HNil;

    fn zip_checked(self, _other: &Dynamic<T>, _position: usize, _f: &mut F) -> Result<HNil, OutOfRange> {
        Ok(HNil)
    }
}

impl<T, F, O, H, Rest> ZipChecked<T, F, O> for HCons<H, Rest>
where
    T: Clone,
    O: Orientation<F, T, H>,
    Rest: ZipChecked<T, F, O>,
{
    type Output = HCons<O::Output, Rest::Output>;

    fn zip_checked(
        self,
        other: &Dynamic<T>,
        position: usize,
        f: &mut F,
    ) -> Result<Self::Output, OutOfRange> {
        let elem = other.get(position)?.clone();
        let head = O::call(f, elem, self.head);
        let tail = self.tail.zip_checked(other, position + 1, f)?;
        Ok(HCons::new(head, tail))
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Zips `lhs` with `rhs` under `f`.
///
/// ```
/// use unicoll_core::{Dynamic, OutOfRange, fixed, hetero, op, zip};
///
/// let plus = |a: i32, b: i32| a + b;
///
/// // Two fixed collections: the result is fixed, with the shorter arity.
/// let sums = zip(op::from_fn(plus), &fixed![1, 2, 3], &fixed![10, 20]);
/// assert_eq!(sums, fixed![11, 22]);
///
/// // A dynamic operand against a heterogeneous one must cover its arity.
/// let short = Dynamic::from(vec![1]);
/// let result = zip(op::from_fn(plus), &short, &hetero![1, 2]);
/// assert_eq!(result, Err(OutOfRange { index: 1, len: 1 }));
/// ```
pub fn zip<F, L, R>(mut f: F, lhs: &L, rhs: &R) -> Zipped<F, L, R>
where
    L: Collection,
    R: Collection,
    (L::Kind, R::Kind): Plan,
    StrategyOf<L, R>: ZipStrategy<F, L, R>,
{
    <StrategyOf<L, R> as ZipStrategy<F, L, R>>::zip(&mut f, lhs, rhs)
}

/// Zips `lhs` with `rhs` under `f` and returns a homogeneous collection.
///
/// Only compiles when `f` yields the same type at every paired position. The
/// result is a [`Dynamic`] when either operand is dynamic and the other
/// homogeneous, a [`Fixed`](crate::Fixed) for two fixed operands, and
/// `Result<Fixed<_, _>, OutOfRange>` for a dynamic operand against a
/// heterogeneous one.
///
/// ```
/// use unicoll_core::{BinaryOp, Fixed, fixed, hetero, zip_uniform};
///
/// struct Bigger;
///
/// impl<A: Into<f64>, B: Into<f64>> BinaryOp<A, B> for Bigger {
///     type Output = f64;
///
///     fn apply(&mut self, lhs: A, rhs: B) -> f64 {
///         lhs.into().max(rhs.into())
///     }
/// }
///
/// let maxima: Fixed<f64, 2> = zip_uniform(Bigger, &hetero![1u8, 7.5f32], &fixed![3i32, 2]);
/// assert_eq!(maxima, fixed![3.0, 7.5]);
/// ```
pub fn zip_uniform<F, L, R>(
    f: F,
    lhs: &L,
    rhs: &R,
) -> <Zipped<F, L, R> as IntoUniform<Uniform<F, L, R>>>::Output
where
    L: Collection,
    R: Collection,
    (L::Kind, R::Kind): Plan,
    StrategyOf<L, R>: ZipStrategy<F, L, R>,
    L::Elems: Uniformity<F, R::Elems>,
    Zipped<F, L, R>: IntoUniform<Uniform<F, L, R>>,
{
    IntoUniform::<Uniform<F, L, R>>::into_uniform(zip(f, lhs, rhs))
}
