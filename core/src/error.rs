//! Run-time errors.
//!
//! Only one failure is observable while a program runs: reading a position
//! that a [`Dynamic`](crate::Dynamic) collection does not have. Everything
//! else is rejected before the program exists.
//!
//! A fixed collection built from the wrong number of values does not compile:
//!
//! ```compile_fail
//! use unicoll_core::Fixed;
//!
//! let triple: Fixed<i32, 3> = Fixed::new([1, 2]);
//! ```
//!
//! Neither does a heterogeneous collection whose values do not match its
//! declared types:
//!
//! ```compile_fail
//! use unicoll_core::{Hetero, hetero};
//!
//! let mixed: Hetero![char, i32] = hetero!['a', 1, 2];
//! ```
//!
//! A uniform zip accepts a fixed collection against a heterogeneous one when
//! every paired position produces the same type:
//!
//! ```
//! use unicoll_core::{BinaryOp, Fixed, fixed, hetero, zip_uniform};
//!
//! struct Always;
//!
//! impl<A, B> BinaryOp<A, B> for Always {
//!     type Output = bool;
//!
//!     fn apply(&mut self, _lhs: A, _rhs: B) -> bool {
//!         true
//!     }
//! }
//!
//! let same: Fixed<bool, 2> = zip_uniform(Always, &fixed![1i32, 2], &hetero![1i32, 'c']);
//! assert_eq!(same, fixed![true, true]);
//! ```
//!
//! but not over the same operands when the pairwise results differ:
//!
//! ```compile_fail
//! use unicoll_core::{BinaryOp, fixed, hetero, zip_uniform};
//!
//! struct Tuple;
//!
//! impl<A, B> BinaryOp<A, B> for Tuple {
//!     type Output = (A, B);
//!
//!     fn apply(&mut self, lhs: A, rhs: B) -> (A, B) {
//!         (lhs, rhs)
//!     }
//! }
//!
//! // (i32, i32) at position 0, (i32, char) at position 1.
//! let _ = zip_uniform(Tuple, &fixed![1i32, 2], &hetero![1i32, 'c']);
//! ```

use thiserror::Error;

/// A position outside `[0, len)` of a dynamic collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("position {index} is out of range for a collection of length {len}")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::String;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_out_of_range_message() {
        let err = OutOfRange { index: 4, len: 2 };
        let message: String = err.to_string();
        assert_eq!(message, "position 4 is out of range for a collection of length 2");
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        fn takes_error(_: &dyn core::error::Error) {}
        takes_error(&OutOfRange { index: 0, len: 0 });
    }
}
