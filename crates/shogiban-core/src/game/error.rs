//! Error types for match operations

use crate::notation::NotationError;
use crate::types::{Color, PieceType, Square};

/// 対局操作の拒否理由
///
/// どのエラーでも局面は変わらない。保留中の選択だけは解除される
/// （選択中の持ち駒は元の位置へ戻る）。
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// 対局は終了している
    #[error("The game is over")]
    GameOver,

    /// 選択した升に駒がない
    #[error("No piece to select on {0}")]
    NotSelectable(Square),

    /// 手番でない側の駒・持ち駒を選んだ
    #[error("It is {expected}'s turn")]
    WrongSide { expected: Color },

    /// 持ち駒のインデックスが範囲外
    #[error("Hand index {index} out of range (hand holds {len} pieces)")]
    HandIndexOutOfRange { index: usize, len: usize },

    /// 指定した駒種を持っていない
    #[error("No {0:?} in hand")]
    NotInHand(PieceType),

    /// 駒も持ち駒も選ばれていない
    #[error("Nothing selected")]
    NothingSelected,

    /// 盤上の駒の移動として不正
    #[error("Illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// 駒打ちとして不正
    #[error("Illegal drop: {piece_type:?} to {to}")]
    IllegalDrop { piece_type: PieceType, to: Square },
}

/// `Match::play_usi` のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Result type for match operations
pub type MatchResult<T> = Result<T, MatchError>;
