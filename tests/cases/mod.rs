//! Sample collections shared by the integration tests.

#![allow(dead_code)]

use unicoll::{Dynamic, Fixed, Hetero, fixed, hetero};

/// `['a','b','c','z']`
pub fn letters() -> Dynamic<char> {
    Dynamic::from(vec!['a', 'b', 'c', 'z'])
}

/// `('!', 3.14, 'c', 3)`
#[allow(clippy::approx_constant)]
pub fn mixed() -> Hetero![char, f64, char, i32] {
    hetero!['!', 3.14, 'c', 3]
}

/// `(1,1,2,3,5)`
pub fn fibonacci() -> Fixed<i32, 5> {
    fixed![1, 1, 2, 3, 5]
}
