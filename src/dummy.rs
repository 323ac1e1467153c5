/*! Dummy implementation of a named catalog node used for testing */

use crate::{Nodelike, NodelikeMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub children: Option<Vec<Item>>,
}

impl Item {
    pub fn new(name: &str) -> Self {
        Item {
            name: name.to_string(),
            children: None,
        }
    }

    pub fn with_children(mut self, children: Vec<Item>) -> Self {
        self.children = Some(children);
        self
    }
}

impl Nodelike for Item {
    fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }
}

impl NodelikeMut for Item {
    fn children_mut(&mut self) -> Option<&mut [Self]> {
        self.children.as_deref_mut()
    }
}

/// Layout used throughout the tests
///
/// ```text
///     A
///    / \
///   B   C
///   |
///   D
/// ```
pub fn abcd() -> Item {
    Item::new("A").with_children(vec![Item::new("B").with_children(vec![Item::new("D")]), Item::new("C")])
}
