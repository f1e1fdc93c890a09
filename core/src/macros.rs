//! Helpers for the per-arity impl tables.

/// Counts identifiers, as a const expression.
macro_rules! count {
    () => { 0 };
    ($head:ident $($tail:ident)*) => { 1 + count!($($tail)*) };
}

/// Drops the identifier and expands to the tokens after `=>`.
macro_rules! replace {
    ($_x:ident => $($with:tt)*) => { $($with)* };
}
