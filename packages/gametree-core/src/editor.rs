//! The action dispatcher: one synchronous state-transition function over [`TreeAction`].

use tracing::debug;

use crate::action::TreeAction;
use crate::traits::{Classifier, Rules};
use crate::tree::{Ignored, Outcome, TreeState};

/// How a dispatched action affected the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The existing state was edited (or deliberately left alone) in place.
    InPlace(Outcome),
    /// The previous state was discarded and a new one installed.
    Replaced,
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::InPlace(Outcome::Ignored(_)))
    }
}

/// Apply `action` to `state`. Never fails: illegal moves and unresolvable paths leave the
/// state untouched and are reported as [`Outcome::Ignored`].
pub fn reduce<R, C>(
    state: &mut TreeState,
    rules: &R,
    classifier: &C,
    action: TreeAction,
) -> Transition
where
    R: Rules + ?Sized,
    C: Classifier + ?Sized,
{
    let kind = action.kind();
    debug!(action = kind, path = ?state.path, "dispatching tree action");

    let outcome = match action {
        TreeAction::SetState(next) => {
            *state = *next;
            return Transition::Replaced;
        }
        TreeAction::Reset => {
            *state = TreeState::default();
            return Transition::Replaced;
        }
        TreeAction::SetHeaders(headers) => {
            if headers.fen != state.root.fen {
                state.replace_root(headers.fen.clone());
            }
            state.headers = headers;
            state.dirty = true;
            Outcome::Applied
        }
        TreeAction::SetOrientation(color) => {
            state.headers.orientation = Some(color);
            state.dirty = true;
            Outcome::Applied
        }
        TreeAction::SetStart(start) => {
            state.headers.start = Some(start);
            state.dirty = true;
            Outcome::Applied
        }
        TreeAction::MakeMove(input) => state.make_move(rules, &input),
        TreeAction::MakeMoves(moves) => state.make_moves(rules, &moves),
        TreeAction::GoToStart => state.go_to_start(),
        TreeAction::GoToEnd => state.go_to_end(),
        TreeAction::GoToNext => state.go_to_next(),
        TreeAction::GoToPrevious => state.go_to_previous(),
        TreeAction::GoToMove(path) => state.go_to(path),
        TreeAction::DeleteMove(path) => {
            let path = path.unwrap_or_else(|| state.path.clone());
            state.delete(&path)
        }
        TreeAction::SetAnnotation(annotation) => state.toggle_annotation(annotation),
        TreeAction::SetComment(comment) => state.set_comment(comment),
        TreeAction::SetFen(fen) => {
            state.headers.fen = fen.clone();
            state.replace_root(fen);
            state.dirty = true;
            Outcome::Applied
        }
        TreeAction::SetScore(evaluation) => state.set_evaluation(evaluation),
        TreeAction::AddAnalysis(analysis) => state.add_analysis(classifier, &analysis),
        TreeAction::SetShapes(shapes) => state.toggle_shape(&shapes),
        TreeAction::PromoteVariation(path) => state.promote(&path),
        TreeAction::Save => {
            state.dirty = false;
            Outcome::Applied
        }
    };

    if let Outcome::Ignored(reason) = &outcome {
        match reason {
            Ignored::IllegalMove(err) => debug!(action = kind, %err, "illegal move ignored"),
            other => debug!(action = kind, reason = ?other, "tree action ignored"),
        }
    }
    Transition::InPlace(outcome)
}

/// A live editing session: the tree state plus the collaborators that validate moves and
/// classify evaluations.
pub struct TreeEditor<R, C>
where
    R: Rules,
    C: Classifier,
{
    rules: R,
    classifier: C,
    state: TreeState,
}

impl<R, C> TreeEditor<R, C>
where
    R: Rules,
    C: Classifier,
{
    pub fn new(rules: R, classifier: C, state: TreeState) -> Self {
        Self {
            rules,
            classifier,
            state,
        }
    }

    pub fn dispatch(&mut self, action: TreeAction) -> Transition {
        reduce(&mut self.state, &self.rules, &self.classifier, action)
    }

    pub fn state(&self) -> &TreeState {
        &self.state
    }

    pub fn into_state(self) -> TreeState {
        self.state
    }
}
