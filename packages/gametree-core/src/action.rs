use crate::headers::GameHeaders;
use crate::node::{Comment, MoveInput, Shape};
use crate::path::TreePath;
use crate::score::{Annotation, Color, Evaluation};
use crate::tree::TreeState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine verdict for one mainline ply.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisEntry {
    /// Evaluation of the best line found at this ply.
    pub evaluation: Evaluation,
    /// First ply that leaves known theory.
    #[cfg_attr(feature = "serde", serde(default))]
    pub novelty: bool,
}

impl AnalysisEntry {
    pub fn new(evaluation: Evaluation, novelty: bool) -> Self {
        Self {
            evaluation,
            novelty,
        }
    }
}

/// Every state transition the editor understands.
///
/// Serialized adjacently tagged as `{"type": "MAKE_MOVE", "payload": ...}` so UI layers
/// can post actions as plain JSON.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum TreeAction {
    /// Replace the whole session, e.g. after loading a game.
    SetState(Box<TreeState>),
    /// Replace the whole session with a fresh default one.
    Reset,
    SetHeaders(GameHeaders),
    SetOrientation(Color),
    SetStart(TreePath),
    MakeMove(MoveInput),
    /// SAN moves played in order from the selected node.
    MakeMoves(Vec<String>),
    GoToStart,
    GoToEnd,
    GoToNext,
    GoToPrevious,
    GoToMove(TreePath),
    /// Delete the node at the given path, or the selected node when `None`.
    DeleteMove(Option<TreePath>),
    SetAnnotation(Annotation),
    SetComment(Comment),
    /// Discard the tree and rebuild it from a new starting position.
    SetFen(String),
    SetScore(Evaluation),
    AddAnalysis(Vec<AnalysisEntry>),
    SetShapes(Vec<Shape>),
    PromoteVariation(TreePath),
    Save,
}

impl TreeAction {
    pub fn kind(&self) -> &'static str {
        match self {
            TreeAction::SetState(_) => "set_state",
            TreeAction::Reset => "reset",
            TreeAction::SetHeaders(_) => "set_headers",
            TreeAction::SetOrientation(_) => "set_orientation",
            TreeAction::SetStart(_) => "set_start",
            TreeAction::MakeMove(_) => "make_move",
            TreeAction::MakeMoves(_) => "make_moves",
            TreeAction::GoToStart => "go_to_start",
            TreeAction::GoToEnd => "go_to_end",
            TreeAction::GoToNext => "go_to_next",
            TreeAction::GoToPrevious => "go_to_previous",
            TreeAction::GoToMove(_) => "go_to_move",
            TreeAction::DeleteMove(_) => "delete_move",
            TreeAction::SetAnnotation(_) => "set_annotation",
            TreeAction::SetComment(_) => "set_comment",
            TreeAction::SetFen(_) => "set_fen",
            TreeAction::SetScore(_) => "set_score",
            TreeAction::AddAnalysis(_) => "add_analysis",
            TreeAction::SetShapes(_) => "set_shapes",
            TreeAction::PromoteVariation(_) => "promote_variation",
            TreeAction::Save => "save",
        }
    }
}
