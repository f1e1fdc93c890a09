//! Stock operations.
//!
//! Each implements [`BinaryOp`] for every pair of argument types it supports,
//! so one value of the operation can be zipped or folded over collections of
//! mixed element types.

use std::fmt;

use unicoll_core::BinaryOp;

/// Pairs its arguments: `f(a, b) = <a,b>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakePair;

/// Two values of possibly different types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.first, self.second)
    }
}

impl<A, B> BinaryOp<A, B> for MakePair {
    type Output = Pair<A, B>;

    fn apply(&mut self, lhs: A, rhs: B) -> Pair<A, B> {
        Pair::new(lhs, rhs)
    }
}

/// `true` when both arguments have the same type and compare equal.
///
/// Always produces a `bool`, whatever the argument types, so zipping with it
/// is uniform over any pair of collections it supports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameTypeEqual;

// Same type: compare. Different types: never equal.
macro_rules! same_type_equal {
    () => {};
    ($head:ty $(, $tail:ty)* $(,)?) => {
        impl BinaryOp<$head, $head> for SameTypeEqual {
            type Output = bool;

            fn apply(&mut self, lhs: $head, rhs: $head) -> bool {
                lhs == rhs
            }
        }

        $(
            impl BinaryOp<$head, $tail> for SameTypeEqual {
                type Output = bool;

                fn apply(&mut self, _lhs: $head, _rhs: $tail) -> bool {
                    false
                }
            }

            impl BinaryOp<$tail, $head> for SameTypeEqual {
                type Output = bool;

                fn apply(&mut self, _lhs: $tail, _rhs: $head) -> bool {
                    false
                }
            }
        )*

        same_type_equal!($($tail),*);
    };
}

same_type_equal!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    &'static str, String
);

/// Renders both arguments and joins them into a `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Concat;

impl<A: fmt::Display, B: fmt::Display> BinaryOp<A, B> for Concat {
    type Output = String;

    fn apply(&mut self, lhs: A, rhs: B) -> String {
        format!("{lhs}{rhs}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_make_pair() {
        let pair = MakePair.apply('a', 1.5);
        assert_eq!(pair, Pair::new('a', 1.5));
        assert_eq!(pair.to_string(), "<a,1.5>");
    }

    #[test]
    fn test_same_type_equal() {
        assert!(SameTypeEqual.apply('c', 'c'));
        assert!(!SameTypeEqual.apply('c', 'd'));
        assert!(!SameTypeEqual.apply('c', 99u8));
        assert!(!SameTypeEqual.apply(3i32, 3i64));
        assert!(!SameTypeEqual.apply(3.0f64, 3i32));
        assert!(SameTypeEqual.apply(String::from("x"), String::from("x")));
    }

    #[test]
    fn test_concat() {
        assert_eq!(Concat.apply("", 'a'), "a");
        assert_eq!(Concat.apply(String::from("ab"), 3), "ab3");
        assert_eq!(Concat.apply('z', String::new()), "z");
    }
}
