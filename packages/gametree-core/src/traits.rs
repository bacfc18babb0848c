use crate::error::Result;
use crate::node::{MoveInput, PlayedMove};
use crate::score::{Annotation, Color, Score};

/// Chess rule validation. Given a position and a proposed move, returns the canonical move
/// and the resulting position, or [`crate::Error::IllegalMove`].
pub trait Rules {
    fn play(&self, fen: &str, input: &MoveInput) -> Result<PlayedMove>;
}

/// Judges the move that led to a position by comparing the evaluation before and after it.
pub trait Classifier {
    fn classify(&self, prev: &Score, cur: &Score, side_to_move: Color) -> Annotation;
}

impl<T: Rules + ?Sized> Rules for &T {
    fn play(&self, fen: &str, input: &MoveInput) -> Result<PlayedMove> {
        (**self).play(fen, input)
    }
}

impl<T: Classifier + ?Sized> Classifier for &T {
    fn classify(&self, prev: &Score, cur: &Score, side_to_move: Color) -> Annotation {
        (**self).classify(prev, cur, side_to_move)
    }
}

/// Default classifier: measures the drop in winning chances, in percentage points, for the
/// player who just moved.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinChanceClassifier;

impl WinChanceClassifier {
    pub const BLUNDER: f64 = 20.0;
    pub const MISTAKE: f64 = 10.0;
    pub const DUBIOUS: f64 = 5.0;

    /// Winning chance for white in `[0, 100]`.
    pub fn win_chance(score: &Score) -> f64 {
        match *score {
            Score::Cp(cp) => {
                let cp = f64::from(cp.clamp(-1000, 1000));
                50.0 + 50.0 * (2.0 / (1.0 + (-0.003_682_08 * cp).exp()) - 1.0)
            }
            Score::Mate(moves) if moves > 0 => 100.0,
            Score::Mate(_) => 0.0,
        }
    }

    fn win_chance_for(score: &Score, color: Color) -> f64 {
        match color {
            Color::White => Self::win_chance(score),
            Color::Black => 100.0 - Self::win_chance(score),
        }
    }
}

impl Classifier for WinChanceClassifier {
    fn classify(&self, prev: &Score, cur: &Score, side_to_move: Color) -> Annotation {
        let mover = side_to_move.other();
        let loss = Self::win_chance_for(prev, mover) - Self::win_chance_for(cur, mover);
        if loss > Self::BLUNDER {
            Annotation::Blunder
        } else if loss > Self::MISTAKE {
            Annotation::Mistake
        } else if loss > Self::DUBIOUS {
            Annotation::Dubious
        } else {
            Annotation::None
        }
    }
}
