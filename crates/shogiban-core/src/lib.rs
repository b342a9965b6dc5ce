//! # shogiban-core
//!
//! 将棋のルールエンジン。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, PieceType, Piece, Hand）
//! - `board`: 盤面表現と仮指し（Trial）
//! - `rules`: 駒の移動・駒打ち・王手・詰みの判定
//! - `game`: 対局の状態管理（選択 → 確定の操作、棋譜、スナップショット）
//! - `notation`: USI / SFEN 表記
//!
//! ```
//! use shogiban_core::{Color, Match};
//!
//! let mut game = Match::new();
//! game.play_usi("7g7f").unwrap();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

pub mod board;
pub mod game;
pub mod notation;
pub mod rules;
pub mod types;

pub use board::Board;
pub use game::{GameOverReason, Match, MatchError, MatchSnapshot, MoveOutcome, Phase, PlayError};
pub use notation::{NotationError, SFEN_HIRATE, UsiMove};
pub use types::{Color, Hand, Piece, PieceType, Square};
