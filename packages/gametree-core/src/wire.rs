//! Flat serde form of [`TreeNode`].
//!
//! A subtree is written as its nodes in pre-order, each row carrying the number of
//! children that follow it. Both directions run on explicit stacks, so a game of any
//! length stays within the nesting limits of `serde_json` and friends.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::node::{ChessMove, Comment, Shape, TreeNode};
use crate::score::{Annotation, Evaluation};

#[derive(Serialize)]
struct RowRef<'a> {
    fen: &'a str,
    #[serde(rename = "move")]
    mv: Option<&'a ChessMove>,
    children: usize,
    evaluation: Option<&'a Evaluation>,
    ply: u32,
    shapes: &'a [Shape],
    annotation: Annotation,
    comment: &'a Comment,
}

impl<'a> From<&'a TreeNode> for RowRef<'a> {
    fn from(node: &'a TreeNode) -> Self {
        Self {
            fen: &node.fen,
            mv: node.mv.as_ref(),
            children: node.children.len(),
            evaluation: node.evaluation.as_ref(),
            ply: node.ply,
            shapes: &node.shapes,
            annotation: node.annotation,
            comment: &node.comment,
        }
    }
}

#[derive(Deserialize)]
struct Row {
    fen: String,
    #[serde(rename = "move", default)]
    mv: Option<ChessMove>,
    #[serde(default)]
    children: usize,
    #[serde(default)]
    evaluation: Option<Evaluation>,
    ply: u32,
    #[serde(default)]
    shapes: Vec<Shape>,
    #[serde(default)]
    annotation: Annotation,
    #[serde(default)]
    comment: Comment,
}

impl Row {
    fn into_node(self) -> (TreeNode, usize) {
        let node = TreeNode {
            fen: self.fen,
            mv: self.mv,
            children: Vec::with_capacity(self.children.min(64)),
            evaluation: self.evaluation,
            ply: self.ply,
            shapes: self.shapes,
            annotation: self.annotation,
            comment: self.comment,
        };
        (node, self.children)
    }
}

struct PreOrder<'a> {
    pending: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = RowRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.pending.extend(node.children.iter().rev());
        Some(RowRef::from(node))
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(PreOrder {
            pending: vec![self],
        })
    }
}

impl<'de> Deserialize<'de> for TreeNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Row>::deserialize(deserializer)?;
        rebuild(rows).map_err(D::Error::custom)
    }
}

/// Reassemble a subtree from its pre-order rows. Each open node sits on the stack with the
/// number of children it still expects.
fn rebuild(rows: Vec<Row>) -> Result<TreeNode, &'static str> {
    let total = rows.len();
    let mut open: Vec<(TreeNode, usize)> = Vec::new();
    for (seen, row) in rows.into_iter().enumerate() {
        open.push(row.into_node());
        while let Some((_, 0)) = open.last() {
            let Some((done, _)) = open.pop() else {
                break;
            };
            match open.last_mut() {
                Some((parent, remaining)) => {
                    parent.children.push(done);
                    *remaining -= 1;
                }
                None if seen + 1 == total => return Ok(done),
                None => return Err("rows continue after the root subtree is complete"),
            }
        }
    }
    if total == 0 {
        Err("a tree needs at least one row")
    } else {
        Err("rows end before every node received its children")
    }
}
