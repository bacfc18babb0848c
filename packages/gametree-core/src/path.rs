//! Path addressing: a node is located by the chain of child indices leading to it.
//!
//! Resolution is lenient. An index that runs past the end of a children list stops the
//! walk and yields the deepest ancestor reached so far, so every path value resolves to
//! some node. All walks are iterative so tree depth is not bounded by the call stack.

use crate::node::TreeNode;

/// Ordered child indices from the root. The empty path is the root itself.
pub type TreePath = Vec<usize>;

/// Walk `path` from `root`, stopping at the deepest node that exists.
pub fn resolve<'a>(root: &'a TreeNode, path: &[usize]) -> &'a TreeNode {
    let mut node = root;
    for &index in path {
        match node.children.get(index) {
            Some(child) => node = child,
            None => break,
        }
    }
    node
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a>(root: &'a mut TreeNode, path: &[usize]) -> &'a mut TreeNode {
    let mut node = root;
    for &index in path {
        if index >= node.children.len() {
            break;
        }
        node = &mut node.children[index];
    }
    node
}

/// Number of leading indices of `path` that resolve. `path[..depth]` is the exact
/// path of the node [`resolve`] returns.
pub fn resolved_depth(root: &TreeNode, path: &[usize]) -> usize {
    let mut node = root;
    let mut depth = 0;
    for &index in path {
        match node.children.get(index) {
            Some(child) => {
                node = child;
                depth += 1;
            }
            None => break,
        }
    }
    depth
}

/// Strict resolution: `None` unless every index of `path` exists.
pub fn try_resolve<'a>(root: &'a TreeNode, path: &[usize]) -> Option<&'a TreeNode> {
    path.iter()
        .try_fold(root, |node, &index| node.children.get(index))
}

/// Mutable counterpart of [`try_resolve`].
pub fn try_resolve_mut<'a>(root: &'a mut TreeNode, path: &[usize]) -> Option<&'a mut TreeNode> {
    path.iter()
        .try_fold(root, |node, &index| node.children.get_mut(index))
}

/// Whether `prefix` is a prefix of (or equal to) `path`.
pub fn is_prefix(prefix: &[usize], path: &[usize]) -> bool {
    path.starts_with(prefix)
}
