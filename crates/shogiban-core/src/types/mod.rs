//! 基本型モジュール
//!
//! 将棋の盤面・ルール判定で使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! Square
//!   ↓
//! PieceType
//!   ↓
//! Piece
//!   ↓
//! Hand
//! ```

mod color;
mod hand;
mod piece;
mod piece_type;
mod square;

pub use color::Color;
pub use hand::Hand;
pub use piece::Piece;
pub use piece_type::PieceType;
pub use square::Square;
