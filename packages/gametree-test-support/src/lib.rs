//! Shared collaborators and builders for GameTree test suites.
//!
//! [`ScriptedRules`] stands in for a real move generator: positions are opaque strings
//! and every move is legal unless it has been marked illegal.

use std::collections::HashSet;

use gametree_core::{
    Annotation, ChessMove, Classifier, Color, Error, MoveInput, PlayedMove, Result, Rules, Score,
    TreeAction, TreeState,
};

/// Toy rules: the canonical move is the input with check/mate suffixes stripped, and the
/// resulting position is the parent position with the move appended.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRules {
    illegal: HashSet<String>,
}

impl ScriptedRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject `san` wherever it is played.
    pub fn with_illegal(mut self, san: &str) -> Self {
        self.illegal.insert(canonical(san));
        self
    }
}

fn canonical(text: &str) -> String {
    text.trim().trim_end_matches(['+', '#']).to_string()
}

impl Rules for ScriptedRules {
    fn play(&self, fen: &str, input: &MoveInput) -> Result<PlayedMove> {
        let san = canonical(&input.to_string());
        if san.is_empty() || self.illegal.contains(&san) {
            return Err(Error::IllegalMove {
                position: fen.to_string(),
                input: input.to_string(),
            });
        }
        Ok(PlayedMove {
            fen: format!("{fen} {san}"),
            mv: ChessMove::new(san.clone(), san),
        })
    }
}

/// Classifier that always returns the same verdict.
#[derive(Clone, Copy, Debug)]
pub struct FixedClassifier(pub Annotation);

impl Classifier for FixedClassifier {
    fn classify(&self, _prev: &Score, _cur: &Score, _side_to_move: Color) -> Annotation {
        self.0
    }
}

/// Classifier that records what it was asked, for asserting on the arguments.
#[derive(Debug, Default)]
pub struct RecordingClassifier {
    pub calls: std::cell::RefCell<Vec<(Score, Score, Color)>>,
}

impl Classifier for RecordingClassifier {
    fn classify(&self, prev: &Score, cur: &Score, side_to_move: Color) -> Annotation {
        self.calls.borrow_mut().push((*prev, *cur, side_to_move));
        Annotation::None
    }
}

pub fn make_move(san: &str) -> TreeAction {
    TreeAction::MakeMove(MoveInput::san(san))
}

/// Play each line from the root, e.g. `&[&["e4", "e5"], &["d4"]]`. The selection is left at
/// the end of the last line.
pub fn build_tree(lines: &[&[&str]]) -> TreeState {
    let rules = ScriptedRules::new();
    let mut state = TreeState::default();
    for line in lines {
        state.go_to_start();
        for san in *line {
            state.make_move(&rules, &MoveInput::san(*san));
        }
    }
    state
}

/// Every `(path, node fen)` pair of a tree in traversal order.
pub fn paths(state: &TreeState) -> Vec<(Vec<usize>, String)> {
    state
        .iter()
        .map(|(path, node)| (path, node.fen.clone()))
        .collect()
}
