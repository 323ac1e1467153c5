//! The traversal engine: recursive, depth-first (pre-order) walks over a single tree or over a
//! subject tree in lockstep with a reference tree.
//!
//! All methods are provided for every [Nodelike] via blanket implementations, so domain types
//! only need to expose their children.

use super::{
    nested::Nested,
    visiting::{PairVisiting, PairVisitingMut, Visiting, Visitor},
};
use crate::{Nodelike, NodelikeMut, TraversalError};
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// Traversal methods available on every [Nodelike].
pub trait Visitable: Nodelike {
    /// Applies `visitor` to this node and, recursively, to all of its children.
    ///
    /// The node is visited before its children. The visitor's `visit_count` is incremented
    /// before each child is entered and its `depth` while a set of children is processed.
    /// `args` is forwarded unchanged to every visit. Returns the visit values in the shape of
    /// the tree, or the first error returned by the visitor.
    fn accept<'n, V, A>(&'n self, visitor: &mut V, args: &A) -> Result<Nested<V::Output>, TraversalError>
    where
        V: Visiting<'n, Self, A>,
        A: ?Sized,
    {
        let value = visitor.visit(self, args)?;
        let mut result = Nested::leaf(value);

        if let Some(children) = self.children().filter(|children| !children.is_empty()) {
            trace!(
                depth = visitor.depth(),
                visit_count = visitor.visit_count(),
                children = children.len(),
                "descending"
            );
            visitor.state_mut().on_descend();
            for child in children {
                visitor.state_mut().on_child();
                result.push(child.accept(visitor, args)?);
            }
            visitor.state_mut().on_ascend();
        }
        Ok(result)
    }

    /// Applies `visitor` to this node paired with `reference`, then recursively to the
    /// children paired by position.
    ///
    /// The *reference* drives the walk: for each child of `reference`, the child of `self` at the
    /// same index is visited. Slots for which `self` has no child are skipped, and children of
    /// `self` beyond the reference's children are never visited. The result therefore has the
    /// shape of the reference tree (truncated where the subject runs out of children).
    fn accept_with_reference<'n, V, R, A>(
        &'n self,
        visitor: &mut V,
        reference: &'n R,
        args: &A,
    ) -> Result<Nested<V::Output>, TraversalError>
    where
        V: PairVisiting<'n, Self, R, A>,
        R: Nodelike,
        A: ?Sized,
    {
        let value = visitor.visit_paired(self, reference, args)?;
        let mut result = Nested::leaf(value);

        if let Some(references) = reference.children().filter(|children| !children.is_empty()) {
            let children = self.children().unwrap_or_default();
            trace!(
                depth = visitor.depth(),
                visit_count = visitor.visit_count(),
                children = children.len(),
                references = references.len(),
                "descending in lockstep"
            );
            if children.len() < references.len() {
                debug!(
                    depth = visitor.depth(),
                    skipped = references.len() - children.len(),
                    "subject has fewer children than its reference"
                );
            }

            visitor.state_mut().on_descend();
            for (child, reference_child) in children.iter().zip(references) {
                visitor.state_mut().on_child();
                result.push(child.accept_with_reference(visitor, reference_child, args)?);
            }
            visitor.state_mut().on_ascend();
        }
        Ok(result)
    }

    /// Shortcut for [Visitable::accept] with the default [Visitor]: returns all nodes of the
    /// hierarchy.
    #[instrument(skip_all)]
    fn traverse(&self) -> Result<Nested<&Self>, TraversalError> {
        self.accept(&mut Visitor::new(), &())
    }

    /// Shortcut for [Visitable::accept_with_reference] with the default [Visitor]: compares
    /// each node to its counterpart in the reference hierarchy.
    #[instrument(skip_all)]
    fn compare<R>(&self, reference: &R) -> Result<Nested<bool>, TraversalError>
    where
        R: Nodelike,
        Self: PartialEq<R>,
    {
        self.accept_with_reference(&mut Visitor::new(), reference, &())
    }
}

impl<N> Visitable for N where N: Nodelike {}

/// Traversal methods that modify the subject tree. Available on every [NodelikeMut].
pub trait VisitableMut: NodelikeMut {
    /// Same walk as [Visitable::accept_with_reference] but with exclusive access to the subject
    /// nodes, e.g., to copy fields from the reference tree into this tree.
    fn accept_with_reference_mut<V, R, A>(
        &mut self,
        visitor: &mut V,
        reference: &R,
        args: &A,
    ) -> Result<Nested<V::Output>, TraversalError>
    where
        V: PairVisitingMut<Self, R, A>,
        R: Nodelike,
        A: ?Sized,
    {
        let value = visitor.visit_paired_mut(self, reference, args)?;
        let mut result = Nested::leaf(value);

        if let Some(references) = reference.children().filter(|children| !children.is_empty()) {
            let children = self.children_mut().unwrap_or_default();
            trace!(
                depth = visitor.depth(),
                visit_count = visitor.visit_count(),
                children = children.len(),
                references = references.len(),
                "descending in lockstep (mutable)"
            );
            if children.len() < references.len() {
                debug!(
                    depth = visitor.depth(),
                    skipped = references.len() - children.len(),
                    "subject has fewer children than its reference"
                );
            }

            visitor.state_mut().on_descend();
            for (child, reference_child) in children.iter_mut().zip(references) {
                visitor.state_mut().on_child();
                result.push(child.accept_with_reference_mut(visitor, reference_child, args)?);
            }
            visitor.state_mut().on_ascend();
        }
        Ok(result)
    }
}

impl<N> VisitableMut for N where N: NodelikeMut {}
