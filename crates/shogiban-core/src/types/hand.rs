//! 手駒（Hand）

use super::{Color, Piece, PieceType};

/// 手駒（取った順に並ぶ駒のリスト）
///
/// 格納される駒は常に生駒で、持ち主は `owner` に揃えられる。
/// 打つ駒はインデックスで選ぶので、並び順は取得順のまま保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    owner: Color,
    pieces: Vec<Piece>,
}

impl Hand {
    /// 空の手駒
    pub const fn new(owner: Color) -> Hand {
        Hand {
            owner,
            pieces: Vec::new(),
        }
    }

    /// 持ち主
    #[inline]
    pub const fn owner(&self) -> Color {
        self.owner
    }

    /// 末尾に1枚追加（生駒・持ち主に正規化する）
    pub fn push(&mut self, piece: Piece) {
        self.pieces.push(piece.captured_by(self.owner));
    }

    /// 指定位置の駒を取り出す（範囲外は None）
    pub fn take(&mut self, index: usize) -> Option<Piece> {
        if index < self.pieces.len() {
            Some(self.pieces.remove(index))
        } else {
            None
        }
    }

    /// 指定位置へ戻す（範囲外なら末尾）
    pub fn insert(&mut self, index: usize, piece: Piece) {
        let index = index.min(self.pieces.len());
        self.pieces.insert(index, piece.captured_by(self.owner));
    }

    /// 指定位置の駒
    #[inline]
    pub fn get(&self, index: usize) -> Option<Piece> {
        self.pieces.get(index).copied()
    }

    /// 枚数
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.pieces.iter().copied()
    }

    /// 指定駒種の枚数
    pub fn count(&self, pt: PieceType) -> usize {
        self.pieces.iter().filter(|p| p.piece_type == pt).count()
    }

    /// 指定駒種の最初の位置
    pub fn position(&self, pt: PieceType) -> Option<usize> {
        self.pieces.iter().position(|p| p.piece_type == pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_empty() {
        let hand = Hand::new(Color::Black);
        assert!(hand.is_empty());
        assert_eq!(hand.count(PieceType::Pawn), 0);
        assert_eq!(hand.position(PieceType::Pawn), None);
    }

    #[test]
    fn test_hand_push_normalizes() {
        let mut hand = Hand::new(Color::Black);
        hand.push(Piece::new(PieceType::Dragon, Color::White));
        assert_eq!(hand.get(0), Some(Piece::new(PieceType::Rook, Color::Black)));
        assert_eq!(hand.count(PieceType::Rook), 1);
        assert_eq!(hand.count(PieceType::Dragon), 0);
    }

    #[test]
    fn test_hand_keeps_insertion_order() {
        let mut hand = Hand::new(Color::White);
        hand.push(Piece::new(PieceType::Pawn, Color::Black));
        hand.push(Piece::new(PieceType::Silver, Color::Black));
        hand.push(Piece::new(PieceType::Pawn, Color::Black));

        let kinds: Vec<_> = hand.iter().map(|p| p.piece_type).collect();
        assert_eq!(kinds, vec![PieceType::Pawn, PieceType::Silver, PieceType::Pawn]);
        assert_eq!(hand.count(PieceType::Pawn), 2);
        assert_eq!(hand.position(PieceType::Silver), Some(1));
    }

    #[test]
    fn test_hand_take_and_insert() {
        let mut hand = Hand::new(Color::Black);
        hand.push(Piece::new(PieceType::Pawn, Color::White));
        hand.push(Piece::new(PieceType::Gold, Color::White));
        hand.push(Piece::new(PieceType::Lance, Color::White));

        let taken = hand.take(1).unwrap();
        assert_eq!(taken.piece_type, PieceType::Gold);
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.take(5), None);

        // 元の位置へ戻す
        hand.insert(1, taken);
        assert_eq!(hand.get(1), Some(taken));
        assert_eq!(hand.len(), 3);
    }
}
