//! The shared collection contract and representation kinds.

/// Which of the three representations a collection uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Variable length, one element type.
    Dynamic,
    /// Fixed length, one element type.
    FixedHomogeneous,
    /// Fixed length, one element type per position.
    FixedHeterogeneous,
}

impl Representation {
    pub const fn is_fixed(self) -> bool {
        !matches!(self, Representation::Dynamic)
    }

    /// Representation produced by [`zip`](crate::zip) for operands of kinds
    /// `self` and `rhs`.
    pub const fn zip_result(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Representation::FixedHeterogeneous, _) | (_, Representation::FixedHeterogeneous) => {
                Representation::FixedHeterogeneous
            }
            (Representation::FixedHomogeneous, Representation::FixedHomogeneous) => {
                Representation::FixedHomogeneous
            }
            _ => Representation::Dynamic,
        }
    }

    /// Representation produced by [`zip_uniform`](crate::zip_uniform).
    pub const fn uniform_zip_result(self, rhs: Self) -> Self {
        match self.zip_result(rhs) {
            Representation::FixedHeterogeneous => Representation::FixedHomogeneous,
            other => other,
        }
    }
}

/// Type-level tag for a representation kind.
pub trait Kind {
    const REPRESENTATION: Representation;
}

pub enum DynamicKind {}
pub enum HomogeneousKind {}
pub enum HeterogeneousKind {}

impl Kind for DynamicKind {
    const REPRESENTATION: Representation = Representation::Dynamic;
}

impl Kind for HomogeneousKind {
    const REPRESENTATION: Representation = Representation::FixedHomogeneous;
}

impl Kind for HeterogeneousKind {
    const REPRESENTATION: Representation = Representation::FixedHeterogeneous;
}

/// An ordered collection addressed by zero-based position.
///
/// `Elems` describes the element types: [`Repeat<T>`](crate::Repeat) when
/// every position holds a `T`, or the type-level list of per-position types.
pub trait Collection {
    type Kind: Kind;
    type Elems;

    const REPRESENTATION: Representation = <Self::Kind as Kind>::REPRESENTATION;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// A homogeneous collection whose elements are contiguous in memory.
pub trait Sequence: Collection {
    type Item;

    fn as_slice(&self) -> &[Self::Item];
}

#[cfg(test)]
mod tests {
    use super::Representation::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zip_result_table() {
        assert_eq!(Dynamic.zip_result(Dynamic), Dynamic);
        assert_eq!(Dynamic.zip_result(FixedHomogeneous), Dynamic);
        assert_eq!(FixedHomogeneous.zip_result(Dynamic), Dynamic);
        assert_eq!(FixedHomogeneous.zip_result(FixedHomogeneous), FixedHomogeneous);
        assert_eq!(Dynamic.zip_result(FixedHeterogeneous), FixedHeterogeneous);
        assert_eq!(FixedHeterogeneous.zip_result(Dynamic), FixedHeterogeneous);
        assert_eq!(FixedHomogeneous.zip_result(FixedHeterogeneous), FixedHeterogeneous);
        assert_eq!(FixedHeterogeneous.zip_result(FixedHeterogeneous), FixedHeterogeneous);
    }

    #[test]
    fn test_uniform_zip_result_never_heterogeneous() {
        for lhs in [Dynamic, FixedHomogeneous, FixedHeterogeneous] {
            for rhs in [Dynamic, FixedHomogeneous, FixedHeterogeneous] {
                assert_ne!(lhs.uniform_zip_result(rhs), FixedHeterogeneous);
            }
        }
        assert_eq!(Dynamic.uniform_zip_result(FixedHeterogeneous), FixedHomogeneous);
        assert_eq!(FixedHomogeneous.uniform_zip_result(Dynamic), Dynamic);
    }

    #[test]
    fn test_is_fixed() {
        assert!(!Dynamic.is_fixed());
        assert!(FixedHomogeneous.is_fixed());
        assert!(FixedHeterogeneous.is_fixed());
    }
}
