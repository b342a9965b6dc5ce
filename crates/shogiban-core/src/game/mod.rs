//! 対局管理
//!
//! `Match` が盤面・持ち駒・手番・棋譜を所有し、UI などの表示側からの
//! 操作（選択・確定）を受けてルール判定を行い、状態を更新する。

mod error;
mod snapshot;
mod state;

pub use error::{MatchError, MatchResult, PlayError};
pub use snapshot::{BoardStateJson, CellJson, HandJson, HandsJson, MatchSnapshot, PieceJson};
pub use state::{GameOverReason, Match, MoveOutcome, MoveRecord, Phase};
