//! Lazy enumeration of tree nodes.

use crate::node::TreeNode;
use crate::path::TreePath;

/// Pre-order depth-first walk yielding `(path, node)` pairs, children in ascending index
/// order. Uses an explicit work-list, so depth is bounded only by heap size.
pub struct TreeIter<'a> {
    pending: Vec<(TreePath, &'a TreeNode)>,
}

impl<'a> TreeIter<'a> {
    pub fn new(root: &'a TreeNode) -> Self {
        Self {
            pending: vec![(TreePath::new(), root)],
        }
    }
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = (TreePath, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.pending.pop()?;
        // reversed so child 0 is popped first
        for (index, child) in node.children.iter().enumerate().rev() {
            let mut child_path = Vec::with_capacity(path.len() + 1);
            child_path.extend_from_slice(&path);
            child_path.push(index);
            self.pending.push((child_path, child));
        }
        Some((path, node))
    }
}

/// A node and its chain of first children.
pub struct Mainline<'a> {
    next: Option<&'a TreeNode>,
}

impl<'a> Mainline<'a> {
    pub fn new(start: &'a TreeNode) -> Self {
        Self { next: Some(start) }
    }
}

impl<'a> Iterator for Mainline<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.children.first();
        Some(node)
    }
}
