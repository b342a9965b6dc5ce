//! Board representation and basic manipulation
//!
//! This module contains the Board struct which manages piece placement on a
//! plain 81-square array.

use std::fmt;

#[cfg(debug_assertions)]
use log::warn;

use crate::types::{Color, Piece, PieceType, Square};

/// Board representation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Piece on each square (index = file * 9 + rank)
    squares: [Option<Piece>; Square::NUM],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// Create empty board
    pub const fn empty() -> Self {
        Board {
            squares: [None; Square::NUM],
        }
    }

    /// 平手の初期配置
    ///
    /// 先手は 8 段に香桂銀金玉金銀桂香、(1,7) に角、(7,7) に飛、6 段に歩。
    /// 後手は 0/1/2 段に同様に並べ、飛 (1,1)・角 (7,1) と左右が入れ替わる。
    pub fn hirate() -> Self {
        const BACK_RANK: [PieceType; 9] = [
            PieceType::Lance,
            PieceType::Knight,
            PieceType::Silver,
            PieceType::Gold,
            PieceType::King,
            PieceType::Gold,
            PieceType::Silver,
            PieceType::Knight,
            PieceType::Lance,
        ];

        let mut board = Board::empty();
        for (file, &pt) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.put_piece(Square::new(file, 8), Piece::new(pt, Color::Black));
            board.put_piece(Square::new(file, 0), Piece::new(pt, Color::White));
            board.put_piece(Square::new(file, 6), Piece::new(PieceType::Pawn, Color::Black));
            board.put_piece(Square::new(file, 2), Piece::new(PieceType::Pawn, Color::White));
        }
        board.put_piece(Square::new(1, 7), Piece::new(PieceType::Bishop, Color::Black));
        board.put_piece(Square::new(7, 7), Piece::new(PieceType::Rook, Color::Black));
        board.put_piece(Square::new(1, 1), Piece::new(PieceType::Rook, Color::White));
        board.put_piece(Square::new(7, 1), Piece::new(PieceType::Bishop, Color::White));
        board
    }

    /// Get piece on square
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Overwrite a square (None clears it)
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Place piece on board
    #[inline]
    pub fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// Remove piece from board
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Check whether a square is empty
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// `from` と `to` の間（両端を含まない）が全て空いているか
    ///
    /// 方向は筋・段の差の符号で決まる。同じ升、または縦横斜めの直線上に
    /// ない組み合わせは false。
    pub fn clear_path(&self, from: Square, to: Square) -> bool {
        let df = to.file() as i32 - from.file() as i32;
        let dr = to.rank() as i32 - from.rank() as i32;
        if (df == 0 && dr == 0) || (df != 0 && dr != 0 && df.abs() != dr.abs()) {
            return false;
        }

        let (sf, sr) = (df.signum(), dr.signum());
        let mut cur = from.offset(sf, sr);
        while let Some(sq) = cur {
            if sq == to {
                return true;
            }
            if !self.is_empty_at(sq) {
                return false;
            }
            cur = sq.offset(sf, sr);
        }
        // 直線上にあるので盤外に出る前に to に到達する
        false
    }

    /// Iterate over all pieces of one color
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_on(sq) {
            Some(p) if p.color == color => Some((sq, p)),
            _ => None,
        })
    }

    /// Number of pieces on the board
    pub fn count(&self) -> usize {
        self.squares.iter().filter(|p| p.is_some()).count()
    }

    /// Find king square
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let mut kings = self.pieces(color).filter(|(_, p)| p.piece_type == PieceType::King);
        let king_sq = kings.next().map(|(sq, _)| sq);

        #[cfg(debug_assertions)]
        {
            if king_sq.is_none() {
                warn!("No king found for {color:?}");
            }
            if kings.next().is_some() {
                warn!("Multiple kings found for {color:?}");
            }
        }

        king_sq
    }

    /// 段を反転し先後を入れ替えた盤面（対称性の検査用）
    pub fn flipped(&self) -> Board {
        let mut board = Board::empty();
        for sq in Square::all() {
            if let Some(p) = self.piece_on(sq) {
                board.put_piece(sq.flip_rank(), p.flip_color());
            }
        }
        board
    }
}

/// 後手陣を上にしたテキスト表示（左上が file 0 / rank 0 = 9a）
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  9  8  7  6  5  4  3  2  1")?;
        for rank in 0..9u8 {
            write!(f, " ")?;
            for file in 0..9u8 {
                match self.piece_on(Square::new(file, rank)) {
                    Some(p) => write!(f, "{:>3}", p.to_sfen())?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f, "  {}", (b'a' + rank) as char)?;
        }
        Ok(())
    }
}
