//! ルール判定
//!
//! いずれも盤面を借用する純粋な判定関数。`mate` だけは仮指しのために
//! `&mut Board` を取るが、呼び出し前後で盤面は変わらない。

pub mod attack;
pub mod drop;
pub mod mate;
pub mod movement;

pub use attack::{attackers_to, is_attacked, is_in_check};
pub use drop::{can_drop, drop_targets, has_pawn_in_file};
pub use mate::is_checkmate;
pub use movement::{can_move, can_move_to_coords, can_promote, move_targets};
