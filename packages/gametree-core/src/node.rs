use std::fmt;

use crate::score::{Annotation, Evaluation};
use crate::traversal::{Mainline, TreeIter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard initial position.
pub const DEFAULT_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Comment written on nodes flagged as a novelty by analysis.
pub const NOVELTY_COMMENT: &str = "Novelty";

/// Canonical form of a move, as produced by the rules collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChessMove {
    pub san: String,
    pub uci: String,
}

impl ChessMove {
    pub fn new(san: impl Into<String>, uci: impl Into<String>) -> Self {
        Self {
            san: san.into(),
            uci: uci.into(),
        }
    }
}

/// A move as supplied by the user or an engine, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MoveInput {
    Squares {
        from: String,
        to: String,
        #[cfg_attr(feature = "serde", serde(default))]
        promotion: Option<char>,
    },
    San(String),
}

impl MoveInput {
    pub fn san(text: impl Into<String>) -> Self {
        MoveInput::San(text.into())
    }

    pub fn squares(from: impl Into<String>, to: impl Into<String>) -> Self {
        MoveInput::Squares {
            from: from.into(),
            to: to.into(),
            promotion: None,
        }
    }
}

impl fmt::Display for MoveInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveInput::Squares {
                from,
                to,
                promotion,
            } => {
                write!(f, "{from}{to}")?;
                if let Some(role) = promotion {
                    write!(f, "{role}")?;
                }
                Ok(())
            }
            MoveInput::San(san) => f.write_str(san),
        }
    }
}

/// Result of a successful rule validation: the canonical move and the position it leads to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: ChessMove,
    pub fen: String,
}

/// Origin/destination board marker. Identity is the `(orig, dest)` pair; `brush` is
/// presentation only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    pub orig: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dest: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub brush: String,
}

impl Shape {
    pub fn arrow(orig: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            orig: orig.into(),
            dest: Some(dest.into()),
            brush: "green".into(),
        }
    }

    pub fn same_squares(&self, other: &Shape) -> bool {
        self.orig == other.orig && self.dest == other.dest
    }
}

/// Comment kept in both rich and plain form. Writers always set both together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comment {
    pub html: String,
    pub text: String,
}

impl Comment {
    pub fn new(html: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            text: text.into(),
        }
    }

    pub fn plain(text: &str) -> Self {
        Self::new(text, text)
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.text.is_empty()
    }
}

/// One position in the tree. `children[0]` continues the mainline; the rest are
/// variations in order of preference.
///
/// With the `serde` feature a subtree is written as a flat pre-order list of rows, so
/// nesting depth on the wire does not grow with the number of plies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub fen: String,
    /// Move that led here from the parent. `None` only on the root.
    pub mv: Option<ChessMove>,
    pub children: Vec<TreeNode>,
    pub evaluation: Option<Evaluation>,
    pub ply: u32,
    pub shapes: Vec<Shape>,
    pub annotation: Annotation,
    pub comment: Comment,
}

impl TreeNode {
    pub fn root(fen: impl Into<String>) -> Self {
        Self {
            fen: fen.into(),
            mv: None,
            children: Vec::new(),
            evaluation: None,
            ply: 0,
            shapes: Vec::new(),
            annotation: Annotation::None,
            comment: Comment::default(),
        }
    }

    /// Fresh node for a validated move, with no markers, annotation, comment or evaluation.
    pub fn child(played: PlayedMove, ply: u32) -> Self {
        Self {
            fen: played.fen,
            mv: Some(played.mv),
            children: Vec::new(),
            evaluation: None,
            ply,
            shapes: Vec::new(),
            annotation: Annotation::None,
            comment: Comment::default(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.mv.is_none()
    }

    pub fn san(&self) -> Option<&str> {
        self.mv.as_ref().map(|mv| mv.san.as_str())
    }

    /// Index of the child reached by `mv`, if that move was already played here.
    pub fn child_index(&self, mv: &ChessMove) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.mv.as_ref() == Some(mv))
    }

    /// Setting the annotation already present clears it.
    pub fn toggle_annotation(&mut self, annotation: Annotation) {
        self.annotation = if self.annotation == annotation {
            Annotation::None
        } else {
            annotation
        };
    }

    pub fn set_comment(&mut self, comment: Comment) {
        self.comment = comment;
    }

    /// Toggle the first shape of `shapes` by its `(orig, dest)` pair. Returns `false` when
    /// `shapes` is empty.
    pub fn toggle_shape(&mut self, shapes: &[Shape]) -> bool {
        let Some(shape) = shapes.first() else {
            return false;
        };
        match self.shapes.iter().position(|s| s.same_squares(shape)) {
            Some(index) => {
                self.shapes.remove(index);
            }
            None => self.shapes.push(shape.clone()),
        }
        true
    }

    /// Pre-order walk of this subtree, yielding each node with its path relative to `self`.
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter::new(self)
    }

    /// This node followed by its chain of first children.
    pub fn mainline(&self) -> Mainline<'_> {
        Mainline::new(self)
    }

    /// Plies along the mainline below this node.
    pub fn mainline_len(&self) -> usize {
        self.mainline().skip(1).count()
    }
}

impl Drop for TreeNode {
    // Unlink descendants onto a heap stack so very long lines do not overflow the call
    // stack on drop.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
