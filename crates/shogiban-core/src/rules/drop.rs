//! 駒打ちの判定

use crate::board::Board;
use crate::types::{Color, Piece, Square};

/// `color` が `piece` を `to` に打てるか
///
/// - 駒のある升には打てない
/// - 歩（と金を含む）: 同じ筋に自分の歩・と金があれば不可（二歩）、最奥の段は不可
/// - それ以外の駒種に制限はない（桂・香の行き所のない駒も打てる）
pub fn can_drop(piece: Piece, to: Square, board: &Board, color: Color) -> bool {
    if !board.is_empty_at(to) {
        return false;
    }

    if piece.piece_type.is_pawn_kind() {
        if has_pawn_in_file(board, to.file(), color) {
            return false;
        }
        if to.rank() == color.last_rank() {
            return false;
        }
    }

    true
}

/// 指定した筋に `color` の歩（と金を含む）があるか
pub fn has_pawn_in_file(board: &Board, file: u8, color: Color) -> bool {
    (0..Square::SIZE).any(|rank| {
        board
            .piece_on(Square::new(file, rank))
            .is_some_and(|p| p.color == color && p.piece_type.is_pawn_kind())
    })
}

/// `color` が `piece` を打てる升を全て列挙する
pub fn drop_targets(piece: Piece, board: &Board, color: Color) -> Vec<Square> {
    Square::all().filter(|&to| can_drop(piece, to, board, color)).collect()
}
