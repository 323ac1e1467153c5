//! Ready-made visitors for common traversals.

use crate::{PairVisiting, PairVisitingMut, Stateful, TraversalError, VisitorState, Visiting};
use std::marker::PhantomData;

/// Turns a closure into a single-tree visitor.
///
/// The closure receives the current counters, the node and the argument bundle.
///
/// ```
/// use treewalk::{visitors::FnVisitor, Nodelike, Visitable, VisitorState};
///
/// struct Dir(&'static str, Vec<Dir>);
/// impl Nodelike for Dir {
///     fn children(&self) -> Option<&[Self]> {
///         Some(&self.1)
///     }
/// }
///
/// let tree = Dir("root", vec![Dir("bin", vec![]), Dir("etc", vec![])]);
/// let mut visitor = FnVisitor::new(|state: &VisitorState, dir: &Dir, _: &()| (state.depth(), dir.0));
/// let result = tree.accept(&mut visitor, &()).unwrap();
/// assert_eq!(result.iter().copied().collect::<Vec<_>>(), [(0, "root"), (1, "bin"), (1, "etc")]);
/// ```
pub struct FnVisitor<F, T> {
    state: VisitorState,
    f: F,
    output: PhantomData<fn() -> T>,
}

impl<F, T> FnVisitor<F, T> {
    pub fn new(f: F) -> Self {
        Self::seeded(f, VisitorState::new())
    }

    pub fn seeded(f: F, state: VisitorState) -> Self {
        FnVisitor {
            state,
            f,
            output: PhantomData,
        }
    }
}

impl<F, T> Stateful for FnVisitor<F, T> {
    fn state(&self) -> &VisitorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut VisitorState {
        &mut self.state
    }
}

impl<'n, N, A, F, T> Visiting<'n, N, A> for FnVisitor<F, T>
where
    F: FnMut(&VisitorState, &'n N, &A) -> T,
    A: ?Sized,
{
    type Output = T;

    fn visit(&mut self, node: &'n N, args: &A) -> Result<T, TraversalError> {
        Ok((self.f)(&self.state, node, args))
    }
}

/// Turns a closure into a visitor for walks against a reference tree.
///
/// Works with shared subject nodes ([PairVisiting]) and, if the closure accepts a mutable
/// subject, with [PairVisitingMut].
pub struct FnPairVisitor<F, T> {
    state: VisitorState,
    f: F,
    output: PhantomData<fn() -> T>,
}

impl<F, T> FnPairVisitor<F, T> {
    pub fn new(f: F) -> Self {
        Self::seeded(f, VisitorState::new())
    }

    pub fn seeded(f: F, state: VisitorState) -> Self {
        FnPairVisitor {
            state,
            f,
            output: PhantomData,
        }
    }
}

impl<F, T> Stateful for FnPairVisitor<F, T> {
    fn state(&self) -> &VisitorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut VisitorState {
        &mut self.state
    }
}

impl<'n, N, R, A, F, T> PairVisiting<'n, N, R, A> for FnPairVisitor<F, T>
where
    F: FnMut(&VisitorState, &'n N, &'n R, &A) -> T,
    A: ?Sized,
{
    type Output = T;

    fn visit_paired(&mut self, node: &'n N, reference: &'n R, args: &A) -> Result<T, TraversalError> {
        Ok((self.f)(&self.state, node, reference, args))
    }
}

impl<N, R, A, F, T> PairVisitingMut<N, R, A> for FnPairVisitor<F, T>
where
    F: FnMut(&VisitorState, &mut N, &R, &A) -> T,
    A: ?Sized,
{
    type Output = T;

    fn visit_paired_mut(&mut self, node: &mut N, reference: &R, args: &A) -> Result<T, TraversalError> {
        Ok((self.f)(&self.state, node, reference, args))
    }
}

/// Renders a hierarchy as indented lines of the form `<indent><label> - id <depth>:<visit count>`.
///
/// ```
/// use itertools::Itertools;
/// use treewalk::{visitors::Outline, Nodelike, Visitable};
///
/// struct Dir(&'static str, Vec<Dir>);
/// impl Nodelike for Dir {
///     fn children(&self) -> Option<&[Self]> {
///         Some(&self.1)
///     }
/// }
///
/// let tree = Dir("root", vec![Dir("bin", vec![Dir("sh", vec![])]), Dir("etc", vec![])]);
/// let mut outline = Outline::new(|dir: &Dir| dir.0.to_string()).indent("..");
/// let lines = tree.accept(&mut outline, &()).unwrap();
/// assert_eq!(
///     lines.iter().join("\n"),
///     "root - id 0:0\n..bin - id 1:1\n....sh - id 2:2\n..etc - id 1:3"
/// );
/// ```
pub struct Outline<L> {
    state: VisitorState,
    label: L,
    indent: String,
}

impl<L> Outline<L> {
    /// Creates an outline visitor with two spaces of indentation per level.
    pub fn new(label: L) -> Self {
        Outline {
            state: VisitorState::new(),
            label,
            indent: "  ".to_string(),
        }
    }

    /// Sets the indentation used per level
    pub fn indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }
}

impl<L> Stateful for Outline<L> {
    fn state(&self) -> &VisitorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut VisitorState {
        &mut self.state
    }
}

impl<'n, N, A, L> Visiting<'n, N, A> for Outline<L>
where
    L: Fn(&N) -> String,
    A: ?Sized,
{
    type Output = String;

    fn visit(&mut self, node: &'n N, _args: &A) -> Result<String, TraversalError> {
        Ok(format!(
            "{}{} - id {}:{}",
            self.indent.repeat(self.state.depth()),
            (self.label)(node),
            self.state.depth(),
            self.state.visit_count()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy::{abcd, Item};
    use crate::{Visitable, VisitableMut};
    use itertools::Itertools;

    #[test_log::test]
    fn test_fn_visitor_counts() {
        let tree = abcd();
        let mut visitor = FnVisitor::new(|state: &VisitorState, item: &Item, _: &()| {
            format!("{}@{}#{}", item.name, state.depth(), state.visit_count())
        });
        let result = tree.accept(&mut visitor, &()).unwrap();
        assert_eq!(result.to_string(), "[A@0#0, [B@1#1, [D@2#2]], [C@1#3]]");
    }

    #[test_log::test]
    fn test_fn_pair_visitor_copies_names() {
        let mut tree = abcd();
        let reference = Item::new("A2").with_children(vec![Item::new("B2")]);

        let mut visitor = FnPairVisitor::new(|_: &VisitorState, item: &mut Item, reference: &Item, _: &()| {
            std::mem::replace(&mut item.name, reference.name.clone())
        });
        let result = tree.accept_with_reference_mut(&mut visitor, &reference, &()).unwrap();

        assert_eq!(result.to_string(), "[A, [B]]");
        assert_eq!(tree.name, "A2");
        let nodes = tree.traverse().unwrap();
        assert_eq!(nodes.iter().map(|item| item.name.as_str()).collect_vec(), &["A2", "B2", "D", "C"]);
    }

    #[test_log::test]
    fn test_fn_pair_visitor_shared() {
        let tree = abcd();
        let mut visitor = FnPairVisitor::new(|state: &VisitorState, item: &Item, reference: &Item, _: &()| {
            (state.depth(), item.name == reference.name)
        });
        let result = tree.accept_with_reference(&mut visitor, &abcd(), &()).unwrap();
        assert_eq!(result.iter().copied().collect_vec(), &[(0, true), (1, true), (2, true), (1, true)]);
    }

    #[test_log::test]
    fn test_outline() {
        let tree = abcd();
        let mut outline = Outline::new(|item: &Item| item.name.clone());
        let lines = tree.accept(&mut outline, &()).unwrap().iter().join("\n");
        assert_eq!(lines, "A - id 0:0\n  B - id 1:1\n    D - id 2:2\n  C - id 1:3");
        assert_eq!(outline.visit_count(), 3);
        assert_eq!(outline.depth(), 0);
    }
}
