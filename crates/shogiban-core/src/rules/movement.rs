//! 駒の移動判定
//!
//! 盤面のスナップショットに対する純粋な述語。自玉の安全（王手放置）は
//! ここでは見ない（擬似合法手）。

use crate::board::Board;
use crate::types::{Color, Piece, PieceType, Square};

/// `piece` が `from` から `to` へ動けるか
///
/// `piece` は `from` に置かれている前提だが、盤上の内容とは照合しない。
/// 同じ升への移動と、味方の駒がある升への移動は常に不可。
pub fn can_move(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }
    if let Some(dest) = board.piece_on(to) {
        if dest.color == piece.color {
            return false;
        }
    }

    let dx = to.file() as i32 - from.file() as i32;
    let dy = to.rank() as i32 - from.rank() as i32;
    let (adx, ady) = (dx.abs(), dy.abs());
    let fwd = piece.color.forward();
    let step = adx <= 1 && ady <= 1;

    match piece.piece_type {
        PieceType::King => step,

        // 金と金の動きをする成駒。後ろ斜めも除外しない（隣接 8 升）
        PieceType::Gold
        | PieceType::ProSilver
        | PieceType::ProKnight
        | PieceType::ProLance
        | PieceType::ProPawn => step,

        // 前 3 方向と真横
        PieceType::Silver => step && (dy == fwd || (dy == 0 && adx == 1)),

        // 前方への跳躍のみ。途中の駒は無関係
        PieceType::Knight => {
            dy.signum() == fwd && ((adx == 1 && ady == 2) || (adx == 2 && ady == 1))
        }

        PieceType::Lance => dx == 0 && dy.signum() == fwd && board.clear_path(from, to),

        PieceType::Pawn => dx == 0 && dy == fwd,

        PieceType::Bishop => adx == ady && board.clear_path(from, to),

        PieceType::Rook => (dx == 0 || dy == 0) && board.clear_path(from, to),

        PieceType::Horse => {
            (adx == ady && board.clear_path(from, to)) || (adx + ady == 1)
        }

        PieceType::Dragon => {
            ((dx == 0 || dy == 0) && board.clear_path(from, to)) || (adx == 1 && ady == 1)
        }
    }
}

/// 未検証の符号付き座標への移動判定。盤外は不可
pub fn can_move_to_coords(piece: Piece, from: Square, file: i32, rank: i32, board: &Board) -> bool {
    match Square::from_coords(file, rank) {
        Some(to) => can_move(piece, from, to, board),
        None => false,
    }
}

/// 成れるか（成るかどうかの決定は呼び出し側）
///
/// 成れる駒種で、移動元か移動先の段が `color` の敵陣にあれば true。
pub fn can_promote(piece_type: PieceType, from_rank: u8, to_rank: u8, color: Color) -> bool {
    if !piece_type.can_promote() {
        return false;
    }
    color.in_promotion_zone(from_rank) || color.in_promotion_zone(to_rank)
}

/// `from` にある駒の移動先を全て列挙する（盤上に駒がなければ空）
pub fn move_targets(from: Square, board: &Board) -> Vec<Square> {
    match board.piece_on(from) {
        Some(piece) => Square::all().filter(|&to| can_move(piece, from, to, board)).collect(),
        None => Vec::new(),
    }
}
