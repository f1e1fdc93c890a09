//! unicoll - uniform ordered collections with compile-time zip and fold
//!
//! # Overview
//!
//! Three collection representations share one element-access contract:
//!
//! - [`Dynamic<T>`]: variable length, one element type
//! - [`Fixed<T, N>`]: fixed length, one element type
//! - [`Hetero<L>`]: fixed length, one element type per position
//!
//! [`zip`] and the folds work across any pairing of them. Which algorithm runs,
//! and which representation comes out, is decided when the program is built:
//! a zip of two fixed collections is unrolled and stays fixed, a zip involving
//! a dynamic collection runs as a loop, and a zip whose pairwise results have
//! different types produces a heterogeneous collection.
//!
//! # Quick Start
//!
//! ```
//! use unicoll::{Dynamic, Fixed, Hetero, fixed, hetero, zip, zip_uniform, fold_left};
//! use unicoll::ops::{Concat, MakePair, SameTypeEqual};
//!
//! let letters = Dynamic::from(vec!['a', 'b', 'c', 'z']);
//! let mixed: Hetero![char, f64, char, i32] = hetero!['!', 3.14, 'c', 3];
//! let fib: Fixed<i32, 5> = fixed![1, 1, 2, 3, 5];
//!
//! // Pairing a fixed collection with itself keeps it fixed.
//! assert_eq!(zip(MakePair, &fib, &fib).to_string(), "(<1,1>,<1,1>,<2,2>,<3,3>,<5,5>)");
//!
//! // `SameTypeEqual` always yields `bool`, so the heterogeneous result lowers.
//! let same = zip_uniform(SameTypeEqual, &letters, &mixed).unwrap();
//! assert_eq!(same.into_array(), [false, false, true, false]);
//!
//! assert_eq!(fold_left(Concat, "", &mixed), "!3.14c3");
//! ```
//!
//! # Operations
//!
//! Anything passed to a combinator implements [`BinaryOp`] for the element
//! types it meets. Closures are wrapped with [`op::from_fn`]; operations that
//! accept many types implement the trait generically, like those in [`ops`].

pub mod ops;

// Re-export the collection API from unicoll_core
pub use unicoll_core::{
    Collection, Dynamic, Fixed, HCons, HList, HNil, Hetero, MAX_ARITY, OutOfRange,
    Representation, Sequence,
};

// Re-export combinators and the traits they are bounded on
pub use unicoll_core::{
    BinaryOp, FoldLeft, FoldRight, FoldRightFlipped, IntoUniform, Uniformity, Zipped, fold_left,
    fold_right, fold_right_flipped, zip, zip_uniform,
};

pub use unicoll_core::{fixed, hetero, hlist, hlist_pat};
pub use unicoll_core::{display, fold, index, kind, op, repr, uniform};
