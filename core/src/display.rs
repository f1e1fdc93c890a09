//! Textual rendering.
//!
//! Dynamic collections render as `[a,b,c]`, fixed homogeneous ones as
//! `(a,b,c)` and heterogeneous ones as `<a,b,c>`.

use core::fmt;

use crate::repr::{Dynamic, Fixed, HCons, HNil, Hetero};

fn write_items<'a, T: fmt::Display + 'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a T>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for Dynamic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_items(f, self.iter())?;
        f.write_str("]")
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Fixed<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_items(f, self.iter())?;
        f.write_str(")")
    }
}

/// Renders the elements of a type-level list, comma separated.
pub trait DisplayItems {
    fn fmt_items(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result;
}

impl DisplayItems for HNil {
    fn fmt_items(&self, _f: &mut fmt::Formatter<'_>, _first: bool) -> fmt::Result {
        Ok(())
    }
}

impl<H: fmt::Display, T: DisplayItems> DisplayItems for HCons<H, T> {
    fn fmt_items(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result {
        if !first {
            f.write_str(",")?;
        }
        write!(f, "{}", self.head)?;
        self.tail.fmt_items(f, false)
    }
}

impl<L: DisplayItems> fmt::Display for Hetero<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        self.as_list().fmt_items(f, true)?;
        f.write_str(">")
    }
}
