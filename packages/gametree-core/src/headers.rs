//! Game metadata and its tag-pair rendering.

use std::fmt::Write;

use crate::node::DEFAULT_POSITION;
use crate::path::TreePath;
use crate::score::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Final result of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    #[cfg_attr(feature = "serde", serde(rename = "1-0"))]
    WhiteWins,
    #[cfg_attr(feature = "serde", serde(rename = "0-1"))]
    BlackWins,
    #[cfg_attr(feature = "serde", serde(rename = "1/2-1/2"))]
    Draw,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "*"))]
    Unknown,
}

impl GameResult {
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unknown => "*",
        }
    }
}

/// Metadata for one tree session. Empty strings mean "not set".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameHeaders {
    pub id: u64,
    pub event: String,
    pub site: String,
    pub date: String,
    pub round: String,
    pub white: String,
    pub white_elo: Option<u32>,
    pub black: String,
    pub black_elo: Option<u32>,
    pub result: GameResult,
    pub time_control: String,
    pub eco: String,
    /// Starting position of the game.
    pub fen: String,
    /// Repertoire only: path the board opens at.
    pub start: Option<TreePath>,
    /// Repertoire only: side shown at the bottom of the board.
    pub orientation: Option<Color>,
}

impl Default for GameHeaders {
    fn default() -> Self {
        Self {
            id: 0,
            event: String::new(),
            site: String::new(),
            date: String::new(),
            round: String::new(),
            white: String::new(),
            white_elo: None,
            black: String::new(),
            black_elo: None,
            result: GameResult::Unknown,
            time_control: String::new(),
            eco: String::new(),
            fen: DEFAULT_POSITION.to_string(),
            start: None,
            orientation: None,
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

impl GameHeaders {
    /// Render as `[Tag "value"]` lines: the seven required tags in their fixed order with
    /// placeholders for missing values, then optional tags only when set.
    pub fn to_tag_pairs(&self) -> String {
        let mut out = String::new();
        let required = [
            ("Event", or_placeholder(&self.event, "?")),
            ("Site", or_placeholder(&self.site, "?")),
            ("Date", or_placeholder(&self.date, "????.??.??")),
            ("Round", or_placeholder(&self.round, "?")),
            ("White", or_placeholder(&self.white, "?")),
            ("Black", or_placeholder(&self.black, "?")),
            ("Result", self.result.as_str()),
        ];
        for (tag, value) in required {
            push_tag(&mut out, tag, value);
        }
        if let Some(elo) = self.white_elo {
            push_tag(&mut out, "WhiteElo", &elo.to_string());
        }
        if let Some(elo) = self.black_elo {
            push_tag(&mut out, "BlackElo", &elo.to_string());
        }
        if let Some(start) = &self.start {
            let indices: Vec<String> = start.iter().map(usize::to_string).collect();
            push_tag(&mut out, "Start", &format!("[{}]", indices.join(",")));
        }
        if let Some(orientation) = self.orientation {
            push_tag(&mut out, "Orientation", orientation.as_str());
        }
        if self.fen != DEFAULT_POSITION {
            push_tag(&mut out, "SetUp", "1");
            push_tag(&mut out, "FEN", &self.fen);
        }
        out
    }
}

fn push_tag(out: &mut String, tag: &str, value: &str) {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    // writing to a String cannot fail
    let _ = writeln!(out, "[{tag} \"{escaped}\"]");
}
