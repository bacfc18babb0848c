//! [`Rules`] backed by the `shakmaty` move generator.

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{CastlingMode, Chess, EnPassantMode, File, Move, Position, Role, Square};

use crate::error::{Error, Result};
use crate::node::{ChessMove, MoveInput, PlayedMove};
use crate::traits::Rules;

/// Standard chess rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShakmatyRules;

impl ShakmatyRules {
    fn position(fen: &str) -> Result<Chess> {
        let setup: Fen = fen
            .parse()
            .map_err(|err| Error::InvalidPosition(format!("{fen}: {err}")))?;
        setup
            .into_position(CastlingMode::Standard)
            .map_err(|err| Error::InvalidPosition(format!("{fen}: {err}")))
    }

    fn find_move(pos: &Chess, input: &MoveInput) -> Option<Move> {
        match input {
            MoveInput::San(text) => {
                let san: SanPlus = text.trim().parse().ok()?;
                san.san.to_move(pos).ok()
            }
            MoveInput::Squares {
                from,
                to,
                promotion,
            } => {
                let from: Square = from.parse().ok()?;
                let to: Square = to.parse().ok()?;
                let promotion = match promotion {
                    Some(ch) => Some(Role::from_char(ch.to_ascii_lowercase())?),
                    None => None,
                };
                pos.legal_moves().into_iter().find(|m| {
                    m.from() == Some(from)
                        && (m.to() == to || king_target(m) == to)
                        && m.promotion() == promotion
                })
            }
        }
    }
}

/// Square the king lands on for castling moves (which shakmaty encodes as king takes
/// rook); the plain destination otherwise.
fn king_target(m: &Move) -> Square {
    match *m {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            Square::from_coords(file, king.rank())
        }
        _ => m.to(),
    }
}

impl Rules for ShakmatyRules {
    fn play(&self, fen: &str, input: &MoveInput) -> Result<PlayedMove> {
        let pos = Self::position(fen)?;
        let m = Self::find_move(&pos, input).ok_or_else(|| Error::IllegalMove {
            position: fen.to_string(),
            input: input.to_string(),
        })?;
        let uci = m.to_uci(CastlingMode::Standard).to_string();
        let mut next = pos;
        let san = SanPlus::from_move_and_play_unchecked(&mut next, &m).to_string();
        Ok(PlayedMove {
            mv: ChessMove { san, uci },
            fen: Fen::from_position(next, EnPassantMode::Legal).to_string(),
        })
    }
}
