//! ## About
//!
//! This crate applies a pluggable *visitor* to every node of a hierarchy and returns the visit
//! values in a nested structure that mirrors the hierarchy's shape. A second mode walks a subject
//! tree in lockstep with a *reference* tree (paired by child position), which is handy for
//! comparing two hierarchies or copying fields from one onto the other, without writing a new
//! recursion for each use case.
//!
//! Any type can take part by implementing [Nodelike] (i.e., exposing its children, if any).
//! The traversal methods are then available through [Visitable]:
//!
//! ```
//! use treewalk::{Nodelike, Visitable};
//!
//! #[derive(Debug, PartialEq)]
//! struct Node(char, Vec<Node>);
//!
//! impl Nodelike for Node {
//!     fn children(&self) -> Option<&[Self]> {
//!         Some(&self.1)
//!     }
//! }
//!
//! let tree = Node('A', vec![Node('B', vec![Node('D', vec![])]), Node('C', vec![])]);
//! let names = tree.traverse().unwrap().map(|node| node.0);
//! assert_eq!(names.to_string(), "[A, [B, [D]], [C]]");
//!
//! let reference = Node('A', vec![Node('X', vec![])]);
//! assert_eq!(tree.compare(&reference).unwrap().to_string(), "[false, [false]]");
//! ```
//!
//! See [Visitor] for the default visitor and [visitors] for ready-made ones.
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (i.e., omit a `get_` prefix) much like the standard library.
//!             Callbacks of the engine into the visitor state have an `on_` prefix

pub mod errors;
pub mod nodelike;
pub mod tree;
pub mod visitors;

#[cfg(test)]
pub(crate) mod dummy;

pub use errors::TraversalError;
pub use nodelike::{Nodelike, NodelikeMut};
pub use tree::{
    Nested, NestedIter, PairVisiting, PairVisitingMut, Stateful, Visitable, VisitableMut, Visiting, Visitor,
    VisitorState,
};
