//! Attack detection
//!
//! 盤上の全升を走査し、`can_move` で利きを判定する（1 回あたり 81 升）。

use super::movement::can_move;
use crate::board::Board;
use crate::types::{Color, Square};

/// Check if a square is attacked by a given color
pub fn is_attacked(sq: Square, by_color: Color, board: &Board) -> bool {
    board.pieces(by_color).any(|(from, piece)| can_move(piece, from, sq, board))
}

/// Get all squares holding pieces of `by_color` that attack `sq`
pub fn attackers_to(sq: Square, by_color: Color, board: &Board) -> Vec<Square> {
    board
        .pieces(by_color)
        .filter(|&(from, piece)| can_move(piece, from, sq, board))
        .map(|(from, _)| from)
        .collect()
}

/// Check if specific color is in check
///
/// 玉が盤上にない場合は false。
pub fn is_in_check(color: Color, board: &Board) -> bool {
    match board.king_square(color) {
        Some(king_sq) => is_attacked(king_sq, color.opponent(), board),
        None => false,
    }
}
