//! 手番（Color）

use std::fmt;

/// 手番（先手/後手）
///
/// 盤の向きは固定で、先手は 6〜8 段から段が減る方向へ、
/// 後手は 0〜2 段から段が増える方向へ進む。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 全ての手番
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 前進方向の段の増分（先手 -1、後手 +1）
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }

    /// 敵陣（成れる段）かどうか。先手は 0〜2 段、後手は 6〜8 段。
    #[inline]
    pub const fn in_promotion_zone(self, rank: u8) -> bool {
        match self {
            Color::Black => rank <= 2,
            Color::White => matches!(rank, 6..=8),
        }
    }

    /// 最奥の段（先手 0 段、後手 8 段）
    #[inline]
    pub const fn last_rank(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::White => 8,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
    }

    #[test]
    fn test_color_not() {
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(!Color::White, Color::Black);
    }

    #[test]
    fn test_color_index() {
        assert_eq!(Color::Black.index(), 0);
        assert_eq!(Color::White.index(), 1);
    }

    #[test]
    fn test_promotion_zone() {
        // 先手: 0-2段で成れる
        assert!(Color::Black.in_promotion_zone(0));
        assert!(Color::Black.in_promotion_zone(2));
        assert!(!Color::Black.in_promotion_zone(3));

        // 後手: 6-8段で成れる
        assert!(!Color::White.in_promotion_zone(5));
        assert!(Color::White.in_promotion_zone(6));
        assert!(Color::White.in_promotion_zone(8));
    }

    #[test]
    fn test_forward_and_last_rank() {
        // 先手は段が減る方向へ進む
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.last_rank(), 0);
        assert_eq!(Color::White.last_rank(), 8);
    }
}
