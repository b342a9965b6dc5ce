//! 対局の状態管理
//!
//! 盤面・両者の持ち駒・手番・棋譜を所有し、選択 → 確定の 2 段階操作を
//! `Phase` で管理する。ルール判定は全て `rules` に委ね、ここでは判定結果に
//! 従って状態を更新するだけ。

use std::fmt;

use log::{debug, info};

use super::error::{MatchError, MatchResult, PlayError};
use super::snapshot::MatchSnapshot;
use crate::board::Board;
use crate::notation::{self, NotationError, UsiMove};
use crate::rules::{can_drop, can_move, can_promote, is_attacked, is_checkmate};
use crate::types::{Color, Hand, Piece, PieceType, Square};

/// 終局理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// 詰み
    Checkmate,
    /// 玉を取った
    KingCaptured,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::Checkmate => f.write_str("checkmate"),
            GameOverReason::KingCaptured => f.write_str("king captured"),
        }
    }
}

/// 操作の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 駒・持ち駒の選択待ち
    AwaitingSelection,
    /// 盤上の駒を選択中
    PieceSelected { from: Square },
    /// 持ち駒を選択中。駒は手駒から取り出されており、取消時に `index` へ戻る
    DropSelected { index: usize, piece: Piece },
    /// 終局
    GameOver {
        winner: Color,
        reason: GameOverReason,
    },
}

impl Phase {
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }
}

/// 着手の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// 着手後の段階
    pub phase: Phase,
    /// 終局していれば勝者
    pub winner: Option<Color>,
    /// 取った駒（盤上にあったときの状態）
    pub captured: Option<Piece>,
    /// 成ったかどうか
    pub promoted: bool,
    /// 相手玉に王手がかかったか
    pub check: bool,
}

/// 棋譜の 1 手
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub usi: UsiMove,
    pub captured: Option<Piece>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.usi, f)
    }
}

/// 対局
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    hands: [Hand; Color::NUM],
    side_to_move: Color,
    /// 手数（初期局面は 1）
    ply: u32,
    phase: Phase,
    history: Vec<MoveRecord>,
}

impl Default for Match {
    fn default() -> Self {
        Match::new()
    }
}

impl Match {
    /// 平手で対局を始める（先手番・持ち駒なし）
    pub fn new() -> Self {
        Match {
            board: Board::hirate(),
            hands: [Hand::new(Color::Black), Hand::new(Color::White)],
            side_to_move: Color::Black,
            ply: 1,
            phase: Phase::AwaitingSelection,
            history: Vec::new(),
        }
    }

    /// SFEN の局面から対局を始める
    pub fn from_sfen(sfen: &str) -> Result<Self, NotationError> {
        let pos = notation::parse_sfen(sfen)?;
        debug!("match from sfen: {sfen}");
        Ok(Match {
            board: pos.board,
            hands: pos.hands,
            side_to_move: pos.side_to_move,
            ply: pos.ply,
            phase: Phase::AwaitingSelection,
            history: Vec::new(),
        })
    }

    /// 現局面の SFEN（選択中の持ち駒は手駒に含める）
    pub fn to_sfen(&self) -> String {
        match self.phase {
            Phase::DropSelected { index, piece } => {
                let mut hands = self.hands.clone();
                hands[self.side_to_move.index()].insert(index, piece);
                notation::format_sfen(&self.board, self.side_to_move, &hands, self.ply)
            }
            _ => notation::format_sfen(&self.board, self.side_to_move, &self.hands, self.ply),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn hand(&self, color: Color) -> &Hand {
        &self.hands[color.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// 指された手（古い順）
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            Phase::GameOver { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// 手番側に王手がかかっているか
    pub fn is_in_check(&self) -> bool {
        crate::rules::is_in_check(self.side_to_move, &self.board)
    }

    /// 現在の状態のコピー
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            board: self.board.clone(),
            hands: self.hands.clone(),
            side_to_move: self.side_to_move,
            phase: self.phase,
            ply: self.ply,
        }
    }

    /// 盤上の駒を選択する
    ///
    /// 選択中の駒・持ち駒があれば取り消してから選び直す。
    pub fn select_square(&mut self, sq: Square) -> MatchResult<Phase> {
        self.ensure_in_progress()?;
        self.cancel_selection();

        match self.board.piece_on(sq) {
            Some(piece) if piece.color == self.side_to_move => {
                debug!("{} selects {:?} on {sq}", self.side_to_move, piece.piece_type);
                self.phase = Phase::PieceSelected { from: sq };
                Ok(self.phase)
            }
            Some(_) => Err(MatchError::WrongSide {
                expected: self.side_to_move,
            }),
            None => Err(MatchError::NotSelectable(sq)),
        }
    }

    /// 持ち駒を選択する（駒は手駒から取り出される）
    pub fn select_hand_piece(&mut self, color: Color, index: usize) -> MatchResult<Phase> {
        self.ensure_in_progress()?;
        self.cancel_selection();

        if color != self.side_to_move {
            return Err(MatchError::WrongSide {
                expected: self.side_to_move,
            });
        }

        let hand = &mut self.hands[color.index()];
        let len = hand.len();
        let piece = hand.take(index).ok_or(MatchError::HandIndexOutOfRange { index, len })?;
        debug!("{color} picks {:?} from hand[{index}]", piece.piece_type);
        self.phase = Phase::DropSelected { index, piece };
        Ok(self.phase)
    }

    /// 選択中の駒で `to` へ成れるか（成るかどうかを尋ねる判断材料）
    pub fn promotion_available(&self, to: Square) -> bool {
        let Phase::PieceSelected { from } = self.phase else {
            return false;
        };
        match self.board.piece_on(from) {
            Some(piece) => {
                can_move(piece, from, to, &self.board)
                    && can_promote(piece.piece_type, from.rank(), to.rank(), piece.color)
            }
            None => false,
        }
    }

    /// 選択中の駒を `to` へ動かす
    ///
    /// `promote` は成りの希望。成れない移動では無視される。
    pub fn confirm_move(&mut self, to: Square, promote: bool) -> MatchResult<MoveOutcome> {
        self.ensure_in_progress()?;

        let Phase::PieceSelected { from } = self.phase else {
            self.cancel_selection();
            return Err(MatchError::NothingSelected);
        };
        self.phase = Phase::AwaitingSelection;

        let Some(piece) = self.board.piece_on(from) else {
            return Err(MatchError::NothingSelected);
        };
        if !can_move(piece, from, to, &self.board) {
            debug!("rejected move {from}{to}");
            return Err(MatchError::IllegalMove { from, to });
        }

        let mover = self.side_to_move;
        let captured = self.board.piece_on(to);

        // 玉を取った場合は成らずにそのまま終局
        if let Some(king) = captured.filter(|p| p.piece_type == PieceType::King) {
            self.board.set(from, None);
            self.board.put_piece(to, piece);
            self.advance(UsiMove::Move { from, to, promote: false }, Some(king));
            self.phase = Phase::GameOver {
                winner: mover,
                reason: GameOverReason::KingCaptured,
            };
            info!("{mover} wins: king captured on {to}");
            return Ok(MoveOutcome {
                phase: self.phase,
                winner: Some(mover),
                captured,
                promoted: false,
                check: false,
            });
        }

        let promoted = promote && can_promote(piece.piece_type, from.rank(), to.rank(), mover);
        let moved = if promoted { piece.promote() } else { piece };
        self.board.set(from, None);
        self.board.put_piece(to, moved);
        if let Some(taken) = captured {
            self.hands[mover.index()].push(taken);
        }

        self.advance(UsiMove::Move { from, to, promote: promoted }, captured);
        Ok(self.conclude_turn(captured, promoted))
    }

    /// 選択中の持ち駒を `to` に打つ
    ///
    /// 打てない升を指定すると、駒は元の位置の手駒に戻る。
    pub fn confirm_drop(&mut self, to: Square) -> MatchResult<MoveOutcome> {
        self.ensure_in_progress()?;

        let Phase::DropSelected { index, piece } = self.phase else {
            self.cancel_selection();
            return Err(MatchError::NothingSelected);
        };
        self.phase = Phase::AwaitingSelection;

        let dropper = self.side_to_move;
        if !can_drop(piece, to, &self.board, dropper) {
            self.hands[dropper.index()].insert(index, piece);
            debug!("rejected drop {:?} to {to}", piece.piece_type);
            return Err(MatchError::IllegalDrop {
                piece_type: piece.piece_type,
                to,
            });
        }

        self.board.put_piece(to, piece);
        self.advance(
            UsiMove::Drop {
                piece_type: piece.piece_type,
                to,
            },
            None,
        );
        Ok(self.conclude_turn(None, false))
    }

    /// USI 形式の指し手を 1 手指す（選択と確定をまとめて行う）
    pub fn play_usi(&mut self, usi: &str) -> Result<MoveOutcome, PlayError> {
        let mv: UsiMove = usi.parse()?;
        self.play(mv).map_err(PlayError::from)
    }

    /// 指し手を 1 手指す
    pub fn play(&mut self, mv: UsiMove) -> MatchResult<MoveOutcome> {
        match mv {
            UsiMove::Move { from, to, promote } => {
                self.select_square(from)?;
                self.confirm_move(to, promote)
            }
            UsiMove::Drop { piece_type, to } => {
                self.ensure_in_progress()?;
                self.cancel_selection();
                let color = self.side_to_move;
                let index = self.hands[color.index()]
                    .position(piece_type)
                    .ok_or(MatchError::NotInHand(piece_type))?;
                self.select_hand_piece(color, index)?;
                self.confirm_drop(to)
            }
        }
    }

    fn ensure_in_progress(&self) -> MatchResult<()> {
        if self.phase.is_game_over() {
            return Err(MatchError::GameOver);
        }
        Ok(())
    }

    /// 保留中の選択を取り消す（持ち駒は元の位置へ）
    fn cancel_selection(&mut self) {
        if let Phase::DropSelected { index, piece } = self.phase {
            self.hands[self.side_to_move.index()].insert(index, piece);
        }
        if !self.phase.is_game_over() {
            self.phase = Phase::AwaitingSelection;
        }
    }

    /// 棋譜に記録し、手番を渡す
    fn advance(&mut self, usi: UsiMove, captured: Option<Piece>) {
        debug!("{} plays {usi}", self.side_to_move);
        self.history.push(MoveRecord {
            color: self.side_to_move,
            usi,
            captured,
        });
        self.side_to_move = self.side_to_move.opponent();
        self.ply += 1;
    }

    /// 手番を渡した後の王手・詰み判定
    fn conclude_turn(&mut self, captured: Option<Piece>, promoted: bool) -> MoveOutcome {
        let defender = self.side_to_move;
        let attacker = defender.opponent();

        let check = match self.board.king_square(defender) {
            Some(king_sq) if is_attacked(king_sq, attacker, &self.board) => {
                if is_checkmate(king_sq, &mut self.board, defender) {
                    self.phase = Phase::GameOver {
                        winner: attacker,
                        reason: GameOverReason::Checkmate,
                    };
                    info!("{attacker} wins: checkmate at ply {}", self.ply);
                }
                true
            }
            _ => false,
        };

        MoveOutcome {
            phase: self.phase,
            winner: self.winner(),
            captured,
            promoted,
            check,
        }
    }
}
