//! The visitor side of a traversal: running counters and the per-node callbacks.
//!
//! A visitor implements one trait per kind of visit it supports ([Visiting] for single-tree
//! walks, [PairVisiting] and [PairVisitingMut] for walks against a reference tree). All of them
//! require [Stateful], which gives the engine access to the counters it maintains.
//! [Visitor] is the default implementation and can be used without any overrides.

use crate::TraversalError;

/// Counters maintained by the traversal engine while a visitor walks a tree.
///
/// * `visit_count` is incremented right before the engine descends into a child, so the root
///   never consumes an increment and a full walk over a tree with `n` non-root nodes ends at `n`.
/// * `depth` is incremented before a set of children is processed and decremented afterwards.
///   A node at distance `d` from the traversal root is visited while `depth == d`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitorState {
    visit_count: usize,
    depth: usize,
}

impl VisitorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from prepopulated values, e.g., to continue the numbering of a previous
    /// traversal or to visit a subtree with its absolute depth.
    pub fn seeded(visit_count: usize, depth: usize) -> Self {
        VisitorState { visit_count, depth }
    }

    pub fn visit_count(&self) -> usize {
        self.visit_count
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn on_descend(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn on_ascend(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn on_child(&mut self) {
        self.visit_count += 1;
    }
}

/// Access to the counters of a visitor. Usually implemented by holding a [VisitorState].
pub trait Stateful {
    fn state(&self) -> &VisitorState;
    fn state_mut(&mut self) -> &mut VisitorState;

    fn visit_count(&self) -> usize {
        self.state().visit_count()
    }

    fn depth(&self) -> usize {
        self.state().depth()
    }
}

impl Stateful for VisitorState {
    fn state(&self) -> &VisitorState {
        self
    }

    fn state_mut(&mut self) -> &mut VisitorState {
        self
    }
}

/// Callback for single-tree traversals ([crate::Visitable::accept]).
///
/// `args` is the argument bundle handed to `accept`; it is the same value for every node.
pub trait Visiting<'n, N, A: ?Sized = ()>: Stateful {
    type Output;

    fn visit(&mut self, node: &'n N, args: &A) -> Result<Self::Output, TraversalError>;
}

/// Callback for traversals in lockstep with a reference tree
/// ([crate::Visitable::accept_with_reference]).
pub trait PairVisiting<'n, N, R = N, A: ?Sized = ()>: Stateful {
    type Output;

    fn visit_paired(&mut self, node: &'n N, reference: &'n R, args: &A) -> Result<Self::Output, TraversalError>;
}

/// Like [PairVisiting] but with exclusive access to the subject node
/// ([crate::VisitableMut::accept_with_reference_mut]). Typically used to copy fields from the
/// reference into the subject tree.
pub trait PairVisitingMut<N, R = N, A: ?Sized = ()>: Stateful {
    type Output;

    fn visit_paired_mut(&mut self, node: &mut N, reference: &R, args: &A) -> Result<Self::Output, TraversalError>;
}

/// The default visitor.
///
/// * Single-tree visits return the node itself, so a traversal yields the tree's nodes in a
///   [crate::Nested] structure.
/// * Paired visits return whether the subject node equals its reference node.
#[derive(Debug, Clone, Default)]
pub struct Visitor {
    state: VisitorState,
}

impl Visitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(visit_count: usize, depth: usize) -> Self {
        Visitor {
            state: VisitorState::seeded(visit_count, depth),
        }
    }
}

impl Stateful for Visitor {
    fn state(&self) -> &VisitorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut VisitorState {
        &mut self.state
    }
}

impl<'n, N, A> Visiting<'n, N, A> for Visitor
where
    N: 'n,
    A: ?Sized,
{
    type Output = &'n N;

    fn visit(&mut self, node: &'n N, _args: &A) -> Result<Self::Output, TraversalError> {
        Ok(node)
    }
}

impl<'n, N, R, A> PairVisiting<'n, N, R, A> for Visitor
where
    N: PartialEq<R>,
    A: ?Sized,
{
    type Output = bool;

    fn visit_paired(&mut self, node: &'n N, reference: &'n R, _args: &A) -> Result<Self::Output, TraversalError> {
        Ok(node == reference)
    }
}
