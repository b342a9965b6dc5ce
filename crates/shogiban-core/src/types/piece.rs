//! 駒（Piece）

use super::{Color, PieceType};

/// 駒（先後の区別あり）
///
/// 同じ駒種・手番の駒はルール上区別しない。成り・取られた時の持ち主の変化は
/// 新しい値への置き換えで表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    /// 駒種と手番から生成
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Piece {
        Piece { piece_type, color }
    }

    /// 成駒かどうか
    #[inline]
    pub const fn is_promoted(self) -> bool {
        self.piece_type.is_promoted()
    }

    /// 成った駒を返す（成れない駒はそのまま）
    #[inline]
    pub const fn promote(self) -> Piece {
        Piece::new(self.piece_type.promote(), self.color)
    }

    /// 生駒を返す
    #[inline]
    pub const fn unpromote(self) -> Piece {
        Piece::new(self.piece_type.unpromote(), self.color)
    }

    /// `color` 側に取られた後の駒（持ち主を変えて生駒に戻す）
    #[inline]
    pub const fn captured_by(self, color: Color) -> Piece {
        Piece::new(self.piece_type.unpromote(), color)
    }

    /// 手番を反転
    #[inline]
    pub const fn flip_color(self) -> Piece {
        Piece::new(self.piece_type, self.color.opponent())
    }

    /// SFEN の駒表記（先手は大文字、成駒は '+' 付き）
    pub fn to_sfen(self) -> String {
        let c = self.piece_type.usi_char();
        let c = match self.color {
            Color::Black => c,
            Color::White => c.to_ascii_lowercase(),
        };
        if self.is_promoted() { format!("+{c}") } else { c.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_promote() {
        let pawn = Piece::new(PieceType::Pawn, Color::Black);
        assert_eq!(pawn.promote(), Piece::new(PieceType::ProPawn, Color::Black));
        let gold = Piece::new(PieceType::Gold, Color::White);
        assert_eq!(gold.promote(), gold);
    }

    #[test]
    fn test_piece_unpromote() {
        let horse = Piece::new(PieceType::Horse, Color::White);
        assert_eq!(horse.unpromote(), Piece::new(PieceType::Bishop, Color::White));
    }

    #[test]
    fn test_piece_captured_by() {
        let dragon = Piece::new(PieceType::Dragon, Color::White);
        let captured = dragon.captured_by(Color::Black);
        assert_eq!(captured, Piece::new(PieceType::Rook, Color::Black));
    }

    #[test]
    fn test_piece_flip_color() {
        let lance = Piece::new(PieceType::Lance, Color::Black);
        assert_eq!(lance.flip_color().color, Color::White);
        assert_eq!(lance.flip_color().piece_type, PieceType::Lance);
    }

    #[test]
    fn test_piece_to_sfen() {
        assert_eq!(Piece::new(PieceType::Pawn, Color::Black).to_sfen(), "P");
        assert_eq!(Piece::new(PieceType::Knight, Color::White).to_sfen(), "n");
        assert_eq!(Piece::new(PieceType::Dragon, Color::Black).to_sfen(), "+R");
        assert_eq!(Piece::new(PieceType::ProPawn, Color::White).to_sfen(), "+p");
    }
}
