use tracing::trace;

use crate::action::AnalysisEntry;
use crate::error::Error;
use crate::headers::GameHeaders;
use crate::node::{Comment, MoveInput, Shape, TreeNode, DEFAULT_POSITION, NOVELTY_COMMENT};
use crate::path::{
    is_prefix, resolve, resolve_mut, resolved_depth, try_resolve, try_resolve_mut, TreePath,
};
use crate::score::{Annotation, Color, Evaluation, Score};
use crate::traits::{Classifier, Rules};
use crate::traversal::TreeIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a single mutation. The public dispatch contract swallows `Ignored`, but it is
/// kept explicit so callers and tests can tell a no-op from a change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(Ignored),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Why a mutation left the tree unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ignored {
    /// The rules collaborator rejected the move.
    IllegalMove(Error),
    /// The target path does not address an existing node.
    UnresolvedPath(TreePath),
    /// Promotion target is already on the mainline of its subtree.
    AlreadyMainline,
    /// Nothing to do, e.g. stepping forward from a leaf.
    NoChange,
}

/// One editable tree session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeState {
    pub root: TreeNode,
    pub headers: GameHeaders,
    /// Selected node. Resolved leniently.
    pub path: TreePath,
    /// Content changed since the last save or load.
    pub dirty: bool,
}

impl Default for TreeState {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION)
    }
}

impl TreeState {
    /// Fresh session with a bare root at `fen`.
    pub fn new(fen: impl Into<String>) -> Self {
        let fen = fen.into();
        Self {
            headers: GameHeaders {
                fen: fen.clone(),
                ..GameHeaders::default()
            },
            root: TreeNode::root(fen),
            path: TreePath::new(),
            dirty: false,
        }
    }

    pub fn current_node(&self) -> &TreeNode {
        resolve(&self.root, &self.path)
    }

    pub fn current_node_mut(&mut self) -> &mut TreeNode {
        resolve_mut(&mut self.root, &self.path)
    }

    pub fn node_at(&self, path: &[usize]) -> &TreeNode {
        resolve(&self.root, path)
    }

    pub fn iter(&self) -> TreeIter<'_> {
        self.root.iter()
    }

    pub fn mainline_len(&self) -> usize {
        self.root.mainline_len()
    }

    pub fn mainline_moves(&self) -> Vec<String> {
        self.root
            .mainline()
            .filter_map(|node| node.san().map(str::to_string))
            .collect()
    }

    /// Discard the whole tree and start over from `fen`. Headers are kept.
    pub fn replace_root(&mut self, fen: impl Into<String>) {
        self.root = TreeNode::root(fen);
        self.path.clear();
    }

    /// Validate `input` at the selected node and select the resulting child, creating it
    /// only when no existing child was reached by the same canonical move.
    pub fn make_move<R: Rules + ?Sized>(&mut self, rules: &R, input: &MoveInput) -> Outcome {
        let depth = resolved_depth(&self.root, &self.path);
        let node = resolve_mut(&mut self.root, &self.path[..depth]);
        let played = match rules.play(&node.fen, input) {
            Ok(played) => played,
            Err(err) => return Outcome::Ignored(Ignored::IllegalMove(err)),
        };
        let index = match node.child_index(&played.mv) {
            Some(index) => index,
            None => {
                let ply = node.ply + 1;
                node.children.push(TreeNode::child(played, ply));
                self.dirty = true;
                node.children.len() - 1
            }
        };
        self.path.truncate(depth);
        self.path.push(index);
        Outcome::Applied
    }

    /// Play `moves` one after another. Stops at the first illegal move; earlier moves stay.
    pub fn make_moves<R: Rules + ?Sized>(&mut self, rules: &R, moves: &[String]) -> Outcome {
        let mut outcome = Outcome::Ignored(Ignored::NoChange);
        for san in moves {
            match self.make_move(rules, &MoveInput::San(san.clone())) {
                Outcome::Applied => outcome = Outcome::Applied,
                ignored if outcome.is_applied() => {
                    trace!(?ignored, "move sequence stopped early");
                    break;
                }
                ignored => return ignored,
            }
        }
        outcome
    }

    /// Remove the node at `path` together with its subtree and move the selection off it.
    pub fn delete(&mut self, path: &[usize]) -> Outcome {
        let Some((&index, parent_path)) = path.split_last() else {
            return Outcome::Ignored(Ignored::UnresolvedPath(path.to_vec()));
        };
        let Some(parent) = try_resolve_mut(&mut self.root, parent_path) else {
            return Outcome::Ignored(Ignored::UnresolvedPath(path.to_vec()));
        };
        if index >= parent.children.len() {
            return Outcome::Ignored(Ignored::UnresolvedPath(path.to_vec()));
        }
        parent.children.remove(index);
        self.dirty = true;

        if is_prefix(path, &self.path) {
            self.path = parent_path.to_vec();
        } else if is_prefix(parent_path, &self.path) && self.path.len() == path.len() {
            // sibling at the same depth removed
            if let Some(last) = self.path.last_mut() {
                *last = 0;
            }
        }
        Outcome::Applied
    }

    /// Move the deepest variation on `path` to the front of its parent's children and
    /// select the rewritten path. Each call promotes one level.
    pub fn promote(&mut self, path: &[usize]) -> Outcome {
        let Some(level) = path.iter().rposition(|&index| index != 0) else {
            return Outcome::Ignored(Ignored::AlreadyMainline);
        };
        let index = path[level];
        let Some(parent) = try_resolve_mut(&mut self.root, &path[..level]) else {
            return Outcome::Ignored(Ignored::UnresolvedPath(path.to_vec()));
        };
        if index >= parent.children.len() {
            return Outcome::Ignored(Ignored::UnresolvedPath(path.to_vec()));
        }
        let child = parent.children.remove(index);
        parent.children.insert(0, child);

        let mut promoted = path.to_vec();
        promoted[level] = 0;
        self.path = promoted;
        self.dirty = true;
        Outcome::Applied
    }

    /// Attach per-ply analysis to the mainline, starting at the root, until either the
    /// mainline or `analysis` runs out.
    pub fn add_analysis<C: Classifier + ?Sized>(
        &mut self,
        classifier: &C,
        analysis: &[AnalysisEntry],
    ) -> Outcome {
        if analysis.is_empty() {
            return Outcome::Ignored(Ignored::NoChange);
        }
        let mut prev = Score::default();
        let mut cursor = Some(&mut self.root);
        for entry in analysis {
            let Some(node) = cursor else {
                break;
            };
            node.evaluation = Some(entry.evaluation.clone());
            if entry.novelty {
                node.comment = Comment::plain(NOVELTY_COMMENT);
            }
            if let Some(score) = entry.evaluation.score {
                node.annotation = classifier.classify(&prev, &score, Color::to_move_at(node.ply));
                prev = score;
            }
            cursor = node.children.first_mut();
        }
        self.dirty = true;
        Outcome::Applied
    }

    pub fn set_evaluation(&mut self, evaluation: Evaluation) -> Outcome {
        self.current_node_mut().evaluation = Some(evaluation);
        self.dirty = true;
        Outcome::Applied
    }

    pub fn toggle_annotation(&mut self, annotation: Annotation) -> Outcome {
        self.current_node_mut().toggle_annotation(annotation);
        self.dirty = true;
        Outcome::Applied
    }

    pub fn set_comment(&mut self, comment: Comment) -> Outcome {
        self.current_node_mut().set_comment(comment);
        self.dirty = true;
        Outcome::Applied
    }

    pub fn toggle_shape(&mut self, shapes: &[Shape]) -> Outcome {
        if !self.current_node_mut().toggle_shape(shapes) {
            return Outcome::Ignored(Ignored::NoChange);
        }
        self.dirty = true;
        Outcome::Applied
    }

    pub fn go_to_start(&mut self) -> Outcome {
        self.path.clear();
        Outcome::Applied
    }

    /// Select the last node of the mainline from the root.
    pub fn go_to_end(&mut self) -> Outcome {
        self.path = vec![0; self.root.mainline_len()];
        Outcome::Applied
    }

    pub fn go_to_next(&mut self) -> Outcome {
        let depth = resolved_depth(&self.root, &self.path);
        if resolve(&self.root, &self.path[..depth]).children.is_empty() {
            return Outcome::Ignored(Ignored::NoChange);
        }
        self.path.truncate(depth);
        self.path.push(0);
        Outcome::Applied
    }

    /// Select the parent of the node the path actually reaches.
    pub fn go_to_previous(&mut self) -> Outcome {
        let depth = resolved_depth(&self.root, &self.path);
        if depth == 0 {
            return Outcome::Ignored(Ignored::NoChange);
        }
        self.path.truncate(depth - 1);
        Outcome::Applied
    }

    pub fn go_to(&mut self, path: TreePath) -> Outcome {
        if try_resolve(&self.root, &path).is_none() {
            trace!(?path, "selecting a path that only partially resolves");
        }
        self.path = path;
        Outcome::Applied
    }
}
