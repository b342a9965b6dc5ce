//! 局面のスナップショットと JSON 表現
//!
//! `MatchSnapshot` は `Match::snapshot` が返す読み取り専用のコピー。
//! 表示側（CLI や UI）へ渡すときは `to_json` で serde 用の DTO に変換する。

use serde::{Deserialize, Serialize};

use super::state::Phase;
use crate::board::Board;
use crate::types::{Color, Hand, Piece, PieceType, Square};

/// 対局状態のコピー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSnapshot {
    pub board: Board,
    /// `[先手, 後手]`
    pub hands: [Hand; Color::NUM],
    pub side_to_move: Color,
    pub phase: Phase,
    pub ply: u32,
}

impl MatchSnapshot {
    #[inline]
    pub fn hand(&self, color: Color) -> &Hand {
        &self.hands[color.index()]
    }

    /// JSON 用 DTO に変換する
    pub fn to_json(&self) -> BoardStateJson {
        // 上段（9a〜1a）から下段へ、表示と同じ並び
        let cells = (0..Square::SIZE)
            .map(|rank| {
                (0..Square::SIZE)
                    .map(|file| {
                        let sq = Square::new(file, rank);
                        CellJson {
                            square: sq.to_string(),
                            piece: self.board.piece_on(sq).map(PieceJson::from),
                        }
                    })
                    .collect()
            })
            .collect();

        let (phase, winner) = match self.phase {
            Phase::AwaitingSelection => ("awaiting_selection".to_string(), None),
            Phase::PieceSelected { from } => (format!("piece_selected:{from}"), None),
            Phase::DropSelected { piece, .. } => {
                (format!("drop_selected:{}", piece.piece_type.usi_char()), None)
            }
            Phase::GameOver { winner, reason } => {
                (format!("game_over:{reason}"), Some(color_name(winner).to_string()))
            }
        };

        BoardStateJson {
            cells,
            hands: HandsJson {
                sente: HandJson::from(self.hand(Color::Black)),
                gote: HandJson::from(self.hand(Color::White)),
            },
            turn: color_name(self.side_to_move).to_string(),
            ply: self.ply,
            phase,
            winner,
        }
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "sente",
        Color::White => "gote",
    }
}

/// 駒のJSON表現
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceJson {
    /// "sente" | "gote"
    pub owner: String,
    /// "K" | "R" | "B" | "G" | "S" | "N" | "L" | "P"
    #[serde(rename = "type")]
    pub piece_type: String,
    /// 成駒かどうか
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub promoted: bool,
}

impl From<Piece> for PieceJson {
    fn from(piece: Piece) -> Self {
        PieceJson {
            owner: color_name(piece.color).to_string(),
            piece_type: piece.piece_type.usi_char().to_string(),
            promoted: piece.is_promoted(),
        }
    }
}

/// 盤面の1マス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellJson {
    /// "9a" ~ "1i" 形式
    pub square: String,
    /// 駒（存在しない場合はnull）
    pub piece: Option<PieceJson>,
}

/// 持ち駒（枚数 0 の駒種は省略）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HandJson {
    #[serde(rename = "R", skip_serializing_if = "Option::is_none")]
    pub rook: Option<u32>,
    #[serde(rename = "B", skip_serializing_if = "Option::is_none")]
    pub bishop: Option<u32>,
    #[serde(rename = "G", skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(rename = "S", skip_serializing_if = "Option::is_none")]
    pub silver: Option<u32>,
    #[serde(rename = "N", skip_serializing_if = "Option::is_none")]
    pub knight: Option<u32>,
    #[serde(rename = "L", skip_serializing_if = "Option::is_none")]
    pub lance: Option<u32>,
    #[serde(rename = "P", skip_serializing_if = "Option::is_none")]
    pub pawn: Option<u32>,
}

impl From<&Hand> for HandJson {
    fn from(hand: &Hand) -> Self {
        let count = |pt| match hand.count(pt) {
            0 => None,
            n => Some(n as u32),
        };
        HandJson {
            rook: count(PieceType::Rook),
            bishop: count(PieceType::Bishop),
            gold: count(PieceType::Gold),
            silver: count(PieceType::Silver),
            knight: count(PieceType::Knight),
            lance: count(PieceType::Lance),
            pawn: count(PieceType::Pawn),
        }
    }
}

/// 両者の持ち駒
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandsJson {
    pub sente: HandJson,
    pub gote: HandJson,
}

/// 盤面全体の状態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardStateJson {
    /// 9x9のセル配列（上段から、各段は9筋から1筋へ）
    pub cells: Vec<Vec<CellJson>>,
    /// 持ち駒
    pub hands: HandsJson,
    /// 手番: "sente" | "gote"
    pub turn: String,
    /// 手数
    pub ply: u32,
    /// 操作の段階（例: "awaiting_selection", "game_over:checkmate"）
    pub phase: String,
    /// 勝者: "sente" | "gote"（対局中は省略）
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub winner: Option<String>,
}
