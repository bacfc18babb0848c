#![forbid(unsafe_code)]
//! Core primitives for an editable, branching tree of chess positions.
//! Rule validation and score classification are pluggable collaborators, so the
//! crate stays independent of any particular chess engine and can be embedded
//! behind WASM or any host that can satisfy the traits defined here.

pub mod action;
pub mod editor;
pub mod error;
pub mod headers;
pub mod node;
pub mod path;
#[cfg(feature = "shakmaty")]
pub mod rules;
pub mod score;
pub mod traits;
pub mod traversal;
pub mod tree;
#[cfg(feature = "serde")]
mod wire;

pub use action::{AnalysisEntry, TreeAction};
pub use editor::{reduce, Transition, TreeEditor};
pub use error::{Error, Result};
pub use headers::{GameHeaders, GameResult};
pub use node::{
    ChessMove, Comment, MoveInput, PlayedMove, Shape, TreeNode, DEFAULT_POSITION, NOVELTY_COMMENT,
};
pub use path::{
    is_prefix, resolve, resolve_mut, resolved_depth, try_resolve, try_resolve_mut, TreePath,
};
#[cfg(feature = "shakmaty")]
pub use rules::ShakmatyRules;
pub use score::{Annotation, Color, Evaluation, Score};
pub use traits::{Classifier, Rules, WinChanceClassifier};
pub use traversal::{Mainline, TreeIter};
pub use tree::{Ignored, Outcome, TreeState};
