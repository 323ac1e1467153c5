//! The result of a traversal: visit values arranged in the shape of the visited tree.

use super::iterator::NestedIter;
use core::fmt;
use itertools::Itertools;

/// Nested result of a traversal.
///
/// Holds the visit value of a node followed by the nested results of its visited children, in
/// child order. Conceptually, this is the sequence `[value, child_0, child_1, ...]` where each
/// child is again such a sequence, which is also how it is rendered by [fmt::Display]:
///
/// ```
/// use treewalk::Nested;
///
/// let mut result = Nested::leaf("A");
/// let mut b = Nested::leaf("B");
/// b.push(Nested::leaf("D"));
/// result.push(b);
/// result.push(Nested::leaf("C"));
///
/// assert_eq!(result.to_string(), "[A, [B, [D]], [C]]");
/// assert_eq!(result.iter().copied().collect::<Vec<_>>(), ["A", "B", "D", "C"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nested<T> {
    value: T,
    children: Vec<Nested<T>>,
}

impl<T> Nested<T> {
    /// Result of a node without (visited) children
    pub fn leaf(value: T) -> Self {
        Nested { value, children: vec![] }
    }

    pub fn new(value: T, children: Vec<Nested<T>>) -> Self {
        Nested { value, children }
    }

    /// Append the result of the next child
    pub fn push(&mut self, child: Nested<T>) {
        self.children.push(child);
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &[Nested<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Splits the result into the node's own value and its children's results.
    pub fn into_parts(self) -> (T, Vec<Nested<T>>) {
        (self.value, self.children)
    }

    /// Total number of visit values
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Nested::len).sum::<usize>()
    }

    /// A result always holds at least the value of the node it was created for.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of levels, a leaf has height 1
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(Nested::height).max().unwrap_or(0)
    }

    /// Depth-first (pre-order) iteration over all values, i.e., the order in which they were visited.
    pub fn iter(&self) -> NestedIter<'_, T> {
        NestedIter::new(self)
    }

    /// Transform every value while keeping the shape.
    pub fn map<U, F>(self, mut f: F) -> Nested<U>
    where
        F: FnMut(T) -> U,
    {
        self.map_with(&mut f)
    }

    fn map_with<U, F>(self, f: &mut F) -> Nested<U>
    where
        F: FnMut(T) -> U,
    {
        let value = f(self.value);
        Nested {
            value,
            children: self.children.into_iter().map(|child| child.map_with(f)).collect_vec(),
        }
    }

    /// Whether both results have the same nesting, regardless of the values.
    pub fn same_shape<U>(&self, other: &Nested<U>) -> bool {
        self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(other.children.iter())
                .all(|(a, b)| a.same_shape(b))
    }
}

impl<'a, T> IntoIterator for &'a Nested<T> {
    type Item = &'a T;
    type IntoIter = NestedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Display for Nested<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            write!(f, "[{}]", self.value)
        } else {
            write!(f, "[{}, {}]", self.value, self.children.iter().format(", "))
        }
    }
}
