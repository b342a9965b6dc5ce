//! 仮指し（Trial）
//!
//! 詰み探索などで盤面を一時的に動かし、スコープを抜けた時点で必ず元に戻す。
//! 触る升は移動元と移動先の 2 升だけなので、その 2 升の直前の内容を保存して
//! `Drop` で書き戻す。早期 return や panic の巻き戻しでも復元される。

use std::ops::Deref;

use super::Board;
use crate::types::{Piece, Square};

/// 仮指し中の盤面への排他参照
///
/// `Deref` で `&Board` として読める。書き込みは `Drop` での復元のみ。
pub struct Trial<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    saved_from: Option<Piece>,
    saved_to: Option<Piece>,
}

impl Board {
    /// `from` の駒を `to` へ仮に動かす（`to` の駒は一時的に取り除かれる）
    pub fn trial_move(&mut self, from: Square, to: Square) -> Trial<'_> {
        let saved_from = self.piece_on(from);
        let saved_to = self.piece_on(to);
        self.set(from, None);
        self.set(to, saved_from);
        Trial {
            board: self,
            from,
            to,
            saved_from,
            saved_to,
        }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        // to → from の順に戻す。from == to でも保存値は同一なので結果は同じ。
        self.board.set(self.to, self.saved_to);
        self.board.set(self.from, self.saved_from);
    }
}
