//! Definition of the "has children" capability consumed by the traversal.

/// A node in a hierarchy that can optionally expose an ordered sequence of children.
///
/// Leaf-only types implement this trait with an empty body. `None` and an empty slice
/// are treated identically: the node is a leaf.
///
/// ```
/// use treewalk::Nodelike;
///
/// struct Folder {
///     entries: Vec<Folder>,
/// }
///
/// impl Nodelike for Folder {
///     fn children(&self) -> Option<&[Self]> {
///         Some(&self.entries)
///     }
/// }
///
/// struct Leaf;
/// impl Nodelike for Leaf {}
///
/// assert!(Leaf.is_leaf());
/// assert!(Folder { entries: vec![] }.is_leaf());
/// ```
pub trait Nodelike: Sized {
    fn children(&self) -> Option<&[Self]> {
        None
    }

    fn is_leaf(&self) -> bool {
        self.children().map_or(true, <[Self]>::is_empty)
    }
}

/// Mutable access to the children of a [Nodelike]. Required for traversals that write
/// into the subject tree.
pub trait NodelikeMut: Nodelike {
    fn children_mut(&mut self) -> Option<&mut [Self]> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Branch(Vec<Branch>);

    impl Nodelike for Branch {
        fn children(&self) -> Option<&[Self]> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_leaf_detection() {
        assert!(Branch(vec![]).is_leaf());
        assert!(!Branch(vec![Branch(vec![])]).is_leaf());
    }
}
