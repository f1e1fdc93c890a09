//! Uniform ordered collections with compile-time zip and fold.
//!
//! Three representations share one element-access contract ([`Collection`]):
//!
//! - [`Dynamic<T>`]: growable, one element type, length known at run time.
//! - [`Fixed<T, N>`]: fixed arity, one element type, stored inline.
//! - [`Hetero<L>`]: fixed arity, one type per position, stored inline as a
//!   type-level list ([`HCons`] / [`HNil`]).
//!
//! [`zip`] and the folds ([`fold_left`], [`fold_right`],
//! [`fold_right_flipped`]) accept any representation. Which algorithm runs
//! and which representation comes out is decided by the trait solver: the
//! decision table lives in [`zip::Plan`], result-type uniformity is decided by
//! [`uniform::Uniformity`], and fixed-arity traversals are unrolled over the
//! index sequences in [`index`].
//!
//! # Example
//!
//! ```
//! use unicoll_core::{fixed, hetero, op, zip, fold_left, Dynamic};
//!
//! let dynamic = Dynamic::from(vec![1, 2, 3]);
//! let fixed = fixed![10, 20, 30, 40];
//!
//! // Dynamic x Fixed runs as an ordinary loop and truncates to the shorter operand.
//! let sums = zip(op::from_fn(|a: i32, b: i32| a + b), &dynamic, &fixed);
//! assert_eq!(sums.as_slice(), &[11, 22, 33]);
//!
//! // Folding a fixed collection is unrolled, one call per position.
//! let text = fold_left(op::from_fn(|acc: String, e: char| acc + &e.to_string()), String::new(), &fixed!['a', 'b']);
//! assert_eq!(text, "ab");
//!
//! let mixed = hetero!['x', 2.5, 7];
//! assert_eq!(*mixed.get::<1>(), 2.5);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{string::String, vec, vec::Vec};

#[macro_use]
mod macros;

pub mod display;
pub mod error;
pub mod fold;
pub mod index;
pub mod kind;
pub mod op;
pub mod repr;
pub mod uniform;
pub mod zip;

pub use error::OutOfRange;
pub use fold::{FoldLeft, FoldRight, FoldRightFlipped, fold_left, fold_right, fold_right_flipped};
pub use index::{Arity, At, Idx, IndexSequence, Lift, MAX_ARITY};
pub use kind::{Collection, Representation, Sequence};
pub use op::BinaryOp;
pub use repr::{Dynamic, Fixed, HCons, HList, HNil, Hetero};
pub use uniform::{Homogeneous, IntoUniform, Repeat, Uniformity};
pub use zip::{Zipped, zip, zip_uniform};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with TRACE level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_sequential_zip() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
