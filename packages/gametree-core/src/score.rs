use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Side to move after `ply` half-moves from the tree root.
    pub fn to_move_at(ply: u32) -> Self {
        if ply % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Engine score from white's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "lowercase"))]
pub enum Score {
    /// Centipawns.
    Cp(i32),
    /// Moves to mate; negative when black mates.
    Mate(i32),
}

impl Default for Score {
    fn default() -> Self {
        Score::Cp(0)
    }
}

/// Engine assessment attached to a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    pub score: Option<Score>,
    pub depth: Option<u32>,
}

impl Evaluation {
    pub fn new(score: Score, depth: u32) -> Self {
        Self {
            score: Some(score),
            depth: Some(depth),
        }
    }
}

/// Symbolic move-quality marker. A node carries at most one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Annotation {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = ""))]
    None,
    #[cfg_attr(feature = "serde", serde(rename = "!!"))]
    Brilliant,
    #[cfg_attr(feature = "serde", serde(rename = "!"))]
    Good,
    #[cfg_attr(feature = "serde", serde(rename = "!?"))]
    Interesting,
    #[cfg_attr(feature = "serde", serde(rename = "?!"))]
    Dubious,
    #[cfg_attr(feature = "serde", serde(rename = "?"))]
    Mistake,
    #[cfg_attr(feature = "serde", serde(rename = "??"))]
    Blunder,
}

impl Annotation {
    pub fn symbol(self) -> &'static str {
        match self {
            Annotation::None => "",
            Annotation::Brilliant => "!!",
            Annotation::Good => "!",
            Annotation::Interesting => "!?",
            Annotation::Dubious => "?!",
            Annotation::Mistake => "?",
            Annotation::Blunder => "??",
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Annotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" => Annotation::None,
            "!!" => Annotation::Brilliant,
            "!" => Annotation::Good,
            "!?" => Annotation::Interesting,
            "?!" => Annotation::Dubious,
            "?" => Annotation::Mistake,
            "??" => Annotation::Blunder,
            other => return Err(Error::InvalidAnnotation(other.to_string())),
        })
    }
}
