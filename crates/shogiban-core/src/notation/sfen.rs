//! SFEN形式の解析・出力
//!
//! 盤面部分は上（0 段）から下（8 段）へ、各段は 9 筋（file 0）から 1 筋（file 8）へ
//! 並ぶ。大文字が先手、小文字が後手。

use super::NotationError;
use crate::board::Board;
use crate::types::{Color, Hand, Piece, PieceType, Square};

/// 平手初期局面のSFEN
pub const SFEN_HIRATE: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

/// 手駒の出力順
const HAND_ORDER: [PieceType; 7] = [
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Gold,
    PieceType::Silver,
    PieceType::Knight,
    PieceType::Lance,
    PieceType::Pawn,
];

/// SFEN から読み取った局面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfenPosition {
    pub board: Board,
    pub side_to_move: Color,
    /// `[先手, 後手]`
    pub hands: [Hand; Color::NUM],
    /// 手数（省略時は 1）
    pub ply: u32,
}

/// SFEN文字列を解析する
pub fn parse_sfen(sfen: &str) -> Result<SfenPosition, NotationError> {
    let parts: Vec<&str> = sfen.split_whitespace().collect();
    if parts.len() < 3 || parts.len() > 4 {
        return Err(NotationError::InvalidSfen(format!(
            "expected 3 or 4 fields, got {}",
            parts.len()
        )));
    }

    // 1. 盤面
    let board = parse_board(parts[0])?;

    // 2. 手番
    let side_to_move = match parts[1] {
        "b" => Color::Black,
        "w" => Color::White,
        other => {
            return Err(NotationError::InvalidSfen(format!(
                "expected 'b' or 'w', got '{other}'"
            )));
        }
    };

    // 3. 手駒
    let hands = parse_hands(parts[2])?;

    // 4. 手数（オプション）
    let ply = match parts.get(3) {
        Some(s) => s
            .parse()
            .map_err(|_| NotationError::InvalidSfen(format!("invalid ply: {s}")))?,
        None => 1,
    };

    Ok(SfenPosition {
        board,
        side_to_move,
        hands,
        ply,
    })
}

/// 局面をSFEN文字列にする
pub fn format_sfen(
    board: &Board,
    side_to_move: Color,
    hands: &[Hand; Color::NUM],
    ply: u32,
) -> String {
    let mut result = String::new();

    // 1. 盤面
    for rank in 0..Square::SIZE {
        let mut empty_count = 0;
        for file in 0..Square::SIZE {
            match board.piece_on(Square::new(file, rank)) {
                Some(pc) => {
                    if empty_count > 0 {
                        result.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    result.push_str(&pc.to_sfen());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            result.push_str(&empty_count.to_string());
        }
        if rank + 1 < Square::SIZE {
            result.push('/');
        }
    }

    // 2. 手番
    result.push(' ');
    result.push(match side_to_move {
        Color::Black => 'b',
        Color::White => 'w',
    });

    // 3. 手駒
    result.push(' ');
    let hand_str = hands_to_sfen(hands);
    if hand_str.is_empty() {
        result.push('-');
    } else {
        result.push_str(&hand_str);
    }

    // 4. 手数
    result.push(' ');
    result.push_str(&ply.to_string());

    result
}

/// 盤面部分をパース
fn parse_board(board_str: &str) -> Result<Board, NotationError> {
    let rows: Vec<&str> = board_str.split('/').collect();
    if rows.len() != Square::SIZE as usize {
        return Err(NotationError::InvalidSfen(format!("expected 9 ranks, got {}", rows.len())));
    }

    let mut board = Board::empty();
    for (row_idx, row) in rows.iter().enumerate() {
        let rank = row_idx as u8;
        let mut file_idx = 0i32; // 9筋から開始
        let mut promoted = false;

        for c in row.chars() {
            if c == '+' {
                if promoted {
                    return Err(NotationError::InvalidSfen(format!("double '+' in row {row}")));
                }
                promoted = true;
                continue;
            }

            if let Some(digit) = c.to_digit(10) {
                if promoted || digit == 0 {
                    return Err(NotationError::InvalidSfen(format!("unexpected '{c}' in row {row}")));
                }
                file_idx += digit as i32;
                if file_idx > 9 {
                    return Err(NotationError::InvalidSfen(format!("too many squares in row {row}")));
                }
                continue;
            }

            let Some(sq) = Square::from_coords(file_idx, rank as i32) else {
                return Err(NotationError::InvalidSfen(format!("too many pieces in row {row}")));
            };
            board.put_piece(sq, sfen_char_to_piece(c, promoted)?);
            promoted = false;
            file_idx += 1;
        }

        if promoted || file_idx != 9 {
            return Err(NotationError::InvalidSfen(format!("row {row} has wrong number of squares")));
        }
    }

    Ok(board)
}

/// SFEN文字を駒に変換
fn sfen_char_to_piece(c: char, promoted: bool) -> Result<Piece, NotationError> {
    let base = PieceType::from_usi_char(c).ok_or(NotationError::InvalidPiece(c))?;
    let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };

    if !promoted {
        return Ok(Piece::new(base, color));
    }
    if !base.can_promote() {
        return Err(NotationError::InvalidSfen(format!("cannot promote: {c}")));
    }
    Ok(Piece::new(base.promote(), color))
}

/// 手駒部分をパース（例: "2P3l4n" や "-"）
fn parse_hands(hands_str: &str) -> Result<[Hand; Color::NUM], NotationError> {
    let mut hands = [Hand::new(Color::Black), Hand::new(Color::White)];
    if hands_str == "-" {
        return Ok(hands);
    }

    let mut count = 0u32;
    for c in hands_str.chars() {
        if let Some(digit) = c.to_digit(10) {
            count = count.saturating_mul(10).saturating_add(digit);
            continue;
        }

        let pt = match PieceType::from_usi_char(c) {
            Some(PieceType::King) | None => return Err(NotationError::InvalidPiece(c)),
            Some(pt) => pt,
        };
        let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
        // 1 種類あたり盤上の総数（歩 18 枚）を超えることはない
        if count > 18 {
            return Err(NotationError::InvalidSfen(format!("too many pieces in hand: {count}{c}")));
        }

        let actual_count = if count == 0 { 1 } else { count };
        for _ in 0..actual_count {
            hands[color.index()].push(Piece::new(pt, color));
        }
        count = 0;
    }

    if count != 0 {
        return Err(NotationError::InvalidSfen(format!("dangling count in hand: {hands_str}")));
    }
    Ok(hands)
}

/// 手駒をSFEN文字列に変換（先手大文字 → 後手小文字、飛角金銀桂香歩の順）
fn hands_to_sfen(hands: &[Hand; Color::NUM]) -> String {
    let mut result = String::new();
    for hand in hands {
        for pt in HAND_ORDER {
            let cnt = hand.count(pt);
            if cnt == 0 {
                continue;
            }
            if cnt > 1 {
                result.push_str(&cnt.to_string());
            }
            result.push_str(&Piece::new(pt, hand.owner()).to_sfen());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hirate() {
        let pos = parse_sfen(SFEN_HIRATE).unwrap();
        assert_eq!(pos.board, Board::hirate());
        assert_eq!(pos.side_to_move, Color::Black);
        assert!(pos.hands.iter().all(Hand::is_empty));
        assert_eq!(pos.ply, 1);
    }

    #[test]
    fn test_format_hirate() {
        let hands = [Hand::new(Color::Black), Hand::new(Color::White)];
        assert_eq!(format_sfen(&Board::hirate(), Color::Black, &hands, 1), SFEN_HIRATE);
    }

    #[test]
    fn test_promoted_pieces_and_hands() {
        let sfen = "8k/9/9/9/4+R4/9/9/9/K8 w RB2Gs3p 42";
        let pos = parse_sfen(sfen).unwrap();
        assert_eq!(pos.side_to_move, Color::White);
        assert_eq!(pos.ply, 42);
        assert_eq!(
            pos.board.piece_on(Square::new(4, 4)),
            Some(Piece::new(PieceType::Dragon, Color::Black))
        );
        assert_eq!(
            pos.board.piece_on(Square::new(8, 0)),
            Some(Piece::new(PieceType::King, Color::White))
        );
        assert_eq!(
            pos.board.piece_on(Square::new(0, 8)),
            Some(Piece::new(PieceType::King, Color::Black))
        );

        let black = &pos.hands[Color::Black.index()];
        assert_eq!(black.count(PieceType::Rook), 1);
        assert_eq!(black.count(PieceType::Gold), 2);
        let white = &pos.hands[Color::White.index()];
        assert_eq!(white.count(PieceType::Silver), 1);
        assert_eq!(white.count(PieceType::Pawn), 3);
        assert!(white.iter().all(|p| p.color == Color::White));

        assert_eq!(format_sfen(&pos.board, pos.side_to_move, &pos.hands, pos.ply), sfen);
    }

    #[test]
    fn test_missing_ply_defaults_to_one() {
        let pos = parse_sfen("9/9/9/9/9/9/9/9/9 b -").unwrap();
        assert_eq!(pos.ply, 1);
        assert_eq!(pos.board.count(), 0);
    }

    #[test]
    fn test_invalid_sfen() {
        assert!(parse_sfen("").is_err());
        assert!(parse_sfen("9/9/9/9/9/9/9/9 b - 1").is_err());
        assert!(parse_sfen("9/9/9/9/9/9/9/9/8 b - 1").is_err());
        assert!(parse_sfen("9/9/9/9/9/9/9/9/91 b - 1").is_err());
        assert!(parse_sfen("9/9/9/9/9/9/9/9/9 x - 1").is_err());
        assert!(parse_sfen("9/9/9/9/9/9/9/9/9 b - one").is_err());
        assert!(parse_sfen("9/9/9/9/9/9/9/9/+G8 b - 1").is_err());
        assert!(parse_sfen("9/9/9/9/9/9/9/9/9 b K 1").is_err());
        assert!(parse_sfen("9/9/9/9/9/9/9/9/9 b 2 1").is_err());
        assert_eq!(
            parse_sfen("9/9/9/9/9/9/9/9/X8 b - 1"),
            Err(NotationError::InvalidPiece('X'))
        );
    }
}
