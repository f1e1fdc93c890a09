//! The three collection representations.

pub mod dynamic;
pub mod fixed;
pub mod hetero;

pub use dynamic::Dynamic;
pub use fixed::Fixed;
pub use hetero::{HCons, HList, HNil, Hetero, Last, Visit, VisitAll};
