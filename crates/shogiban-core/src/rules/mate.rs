//! 詰み判定
//!
//! 王手がかかっている前提で、受けの手を総当たりで試す。
//!
//! 1. 玉の移動: 周囲 8 升（味方の駒がない升）へ玉を仮に動かし、利きがなければ詰みではない
//! 2. 合駒・駒取り: 受け方の全駒・全移動先を仮に指し、元の玉の升に利きがなければ詰みではない
//! 3. どちらも見つからなければ詰み
//!
//! 2 の判定は玉自身を動かした場合も呼び出し時の `king_sq` で行う。
//! 持ち駒を打つ受けは試さない。仮指しは `Trial` で必ず巻き戻すので、
//! 呼び出し前後で盤面は完全に一致する。

use log::trace;

use super::attack::{attackers_to, is_attacked};
use super::movement::{can_move, can_move_to_coords};
use crate::board::Board;
use crate::types::{Color, Square};

/// 玉の 8 近傍
const KING_STEPS: [(i32, i32); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// `defender` の `king_sq` の玉が詰んでいるか
pub fn is_checkmate(king_sq: Square, board: &mut Board, defender: Color) -> bool {
    let attacker = defender.opponent();

    if let Some(escape) = find_king_escape(king_sq, board, defender) {
        trace!("mate search: king escapes {king_sq} -> {escape}");
        return false;
    }

    if let Some((from, to)) = find_block_or_capture(king_sq, board, defender) {
        trace!("mate search: {defender} answers with {from}{to}");
        return false;
    }

    trace!(
        "mate search: {defender} king on {king_sq} has no answer to {attacker} ({:?})",
        attackers_to(king_sq, attacker, board)
    );
    true
}

/// 玉の移動で王手を回避できる升
fn find_king_escape(king_sq: Square, board: &mut Board, defender: Color) -> Option<Square> {
    let attacker = defender.opponent();
    let king = board.piece_on(king_sq)?;

    for (df, dr) in KING_STEPS {
        let file = king_sq.file() as i32 + df;
        let rank = king_sq.rank() as i32 + dr;
        // 盤外・味方の駒がある升は can_move が弾く
        if !can_move_to_coords(king, king_sq, file, rank, board) {
            continue;
        }
        let Some(to) = Square::from_coords(file, rank) else {
            continue;
        };

        let trial = board.trial_move(king_sq, to);
        if !is_attacked(to, attacker, &trial) {
            return Some(to);
        }
    }
    None
}

/// 受け方の駒を動かして `king_sq` への利きを消せる手（合駒・王手駒の捕獲）
fn find_block_or_capture(
    king_sq: Square,
    board: &mut Board,
    defender: Color,
) -> Option<(Square, Square)> {
    let attacker = defender.opponent();
    let defenders: Vec<_> = board.pieces(defender).collect();

    for (from, piece) in defenders {
        for to in Square::all() {
            if !can_move(piece, from, to, board) {
                continue;
            }
            let trial = board.trial_move(from, to);
            if !is_attacked(king_sq, attacker, &trial) {
                return Some((from, to));
            }
        }
    }
    None
}
