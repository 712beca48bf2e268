//! Depth-first traversal of an [`Element`] tree.

use crate::document::Element;

/// What the walker does after visiting an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Visit the element's children next.
    Descend,
    /// Leave the element's subtree unvisited.
    SkipChildren,
}

/// Callback for [`walk`].
pub trait Visitor {
    fn visit(&mut self, element: &Element) -> Flow;
}

impl<F> Visitor for F
where
    F: FnMut(&Element) -> Flow,
{
    fn visit(&mut self, element: &Element) -> Flow {
        self(element)
    }
}

/// Visit `root` and its descendants in document order (pre-order).
pub fn walk<V: Visitor + ?Sized>(root: &Element, visitor: &mut V) {
    if visitor.visit(root) == Flow::Descend {
        for child in &root.children {
            walk(child, visitor);
        }
    }
}
