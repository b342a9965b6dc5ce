//! USI move notation

use std::fmt;
use std::str::FromStr;

use super::NotationError;
use crate::types::{PieceType, Square};

/// USI 形式の指し手
///
/// 盤上の移動（`7g7f`、成りは `8h2b+`）と駒打ち（`P*5e`）の 2 種類。
/// 表記として正しいかだけを扱い、局面に対する合法性は見ない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsiMove {
    Move {
        from: Square,
        to: Square,
        promote: bool,
    },
    Drop {
        piece_type: PieceType,
        to: Square,
    },
}

impl fmt::Display for UsiMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            UsiMove::Move { from, to, promote } => {
                write!(f, "{from}{to}")?;
                if promote {
                    f.write_str("+")?;
                }
                Ok(())
            }
            UsiMove::Drop { piece_type, to } => write!(f, "{}*{to}", piece_type.usi_char()),
        }
    }
}

impl FromStr for UsiMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NotationError::InvalidMove(s.to_string());

        // Drop move (e.g., "P*5e")
        if let Some((piece, to)) = s.split_once('*') {
            let mut chars = piece.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(invalid());
            };
            // 駒打ちは大文字の生駒（玉を除く）
            let piece_type = match PieceType::from_usi_char(c) {
                Some(pt) if c.is_ascii_uppercase() && pt != PieceType::King => pt,
                _ => return Err(NotationError::InvalidPiece(c)),
            };
            let to = to.parse::<Square>()?;
            return Ok(UsiMove::Drop { piece_type, to });
        }

        // Normal move or promotion
        let (body, promote) = match s.strip_suffix('+') {
            Some(stripped) => (stripped, true),
            None => (s, false),
        };

        let chars: Vec<char> = body.chars().collect();
        if chars.len() != 4 {
            return Err(invalid());
        }
        let from = Square::from_usi_chars(chars[0], chars[1])
            .ok_or_else(|| NotationError::InvalidSquare(chars[..2].iter().collect()))?;
        let to = Square::from_usi_chars(chars[2], chars[3])
            .ok_or_else(|| NotationError::InvalidSquare(chars[2..].iter().collect()))?;

        Ok(UsiMove::Move { from, to, promote })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normal_move() {
        let mv: UsiMove = "7g7f".parse().unwrap();
        assert_eq!(
            mv,
            UsiMove::Move {
                from: Square::new(2, 6),
                to: Square::new(2, 5),
                promote: false,
            }
        );
        assert_eq!(mv.to_string(), "7g7f");
    }

    #[test]
    fn test_parse_promotion() {
        let mv: UsiMove = "8h2b+".parse().unwrap();
        assert_eq!(
            mv,
            UsiMove::Move {
                from: Square::new(1, 7),
                to: Square::new(7, 1),
                promote: true,
            }
        );
        assert_eq!(mv.to_string(), "8h2b+");
    }

    #[test]
    fn test_parse_drop() {
        let mv: UsiMove = "P*5e".parse().unwrap();
        assert_eq!(
            mv,
            UsiMove::Drop {
                piece_type: PieceType::Pawn,
                to: Square::new(4, 4),
            }
        );
        assert_eq!(mv.to_string(), "P*5e");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("7g7".parse::<UsiMove>(), Err(NotationError::InvalidMove("7g7".to_string())));
        assert_eq!("".parse::<UsiMove>(), Err(NotationError::InvalidMove(String::new())));
        assert_eq!("7g0f".parse::<UsiMove>(), Err(NotationError::InvalidSquare("0f".to_string())));
        assert_eq!("K*5e".parse::<UsiMove>(), Err(NotationError::InvalidPiece('K')));
        assert_eq!("p*5e".parse::<UsiMove>(), Err(NotationError::InvalidPiece('p')));
        assert_eq!("X*5e".parse::<UsiMove>(), Err(NotationError::InvalidPiece('X')));
        assert_eq!("PP*5e".parse::<UsiMove>(), Err(NotationError::InvalidMove("PP*5e".to_string())));
        assert!("P*5z".parse::<UsiMove>().is_err());
    }
}
