//! USI / SFEN notation
//!
//! - `usi`: 指し手の USI 表記（`7g7f`, `8h2b+`, `P*5e`）
//! - `sfen`: 局面の SFEN 表記
//!
//! 升の表記は `Square` 自身が `Display` / `FromStr` を持つ。

mod sfen;
mod usi;

pub use sfen::{SFEN_HIRATE, SfenPosition, format_sfen, parse_sfen};
pub use usi::UsiMove;

/// Error type for USI/SFEN parsing
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// 升の表記が不正（`1a`〜`9i` 以外）
    #[error("Invalid square notation: {0}")]
    InvalidSquare(String),

    /// 指し手の形式が不正
    #[error("Invalid move format: {0}")]
    InvalidMove(String),

    /// 駒文字が不正
    #[error("Invalid piece character: {0}")]
    InvalidPiece(char),

    /// SFEN の形式が不正
    #[error("Invalid SFEN: {0}")]
    InvalidSfen(String),
}
