//! # Nomenclature
//!
//! * Traits are adjectives that describe a property
//! * Structs are nouns. They may directly relate to the trait they implement
//!
//! In this module, trees are not iterated but *visited*. Every [crate::Nodelike] is
//! [Visitable]; it accepts a visitor object that implements one of the visiting traits
//! and returns a [Nested] result in the shape of the walk.

pub mod iterator;
pub mod nested;
pub mod visitable;
pub mod visiting;

pub use iterator::NestedIter;
pub use nested::Nested;
pub use visitable::{Visitable, VisitableMut};
pub use visiting::{PairVisiting, PairVisitingMut, Stateful, Visiting, Visitor, VisitorState};
