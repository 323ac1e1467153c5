//! An iterator that traverses a [Nested] result depth-first.

use super::nested::Nested;

/// Iterator over the values of a [Nested] result in pre-order, which is the order in which
/// the traversal visited the nodes.
pub struct NestedIter<'a, T> {
    next: Option<&'a T>,
    stack: Vec<std::slice::Iter<'a, Nested<T>>>,
}

impl<'a, T> NestedIter<'a, T> {
    pub(crate) fn new(root: &'a Nested<T>) -> Self {
        NestedIter {
            next: Some(root.value()),
            stack: vec![root.children().iter()],
        }
    }
}

impl<'a, T> Iterator for NestedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.next.take() {
            return Some(value);
        }
        while let Some(last) = self.stack.last_mut() {
            if let Some(child) = last.next() {
                self.stack.push(child.children().iter());
                return Some(child.value());
            }
            self.stack.pop();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_pre_order() {
        //     0
        //    / \
        //  1    4
        // | \   |
        // 2  3  5
        let result = Nested::new(
            0,
            vec![
                Nested::new(1, vec![Nested::leaf(2), Nested::leaf(3)]),
                Nested::new(4, vec![Nested::leaf(5)]),
            ],
        );
        assert_eq!(result.iter().copied().collect_vec(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(Nested::leaf(9).iter().copied().collect_vec(), &[9]);
    }
}
