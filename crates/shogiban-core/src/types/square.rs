//! 升目（Square）

use std::fmt;
use std::str::FromStr;

use crate::notation::NotationError;

/// 升目（0-80）
///
/// 配置: index = file * 9 + rank（file, rank とも 0-8）。
/// 先手の初期配置は 6〜8 段、後手は 0〜2 段。
///
/// USI表記との対応（先手から見た盤面、左上が file 0 / rank 0）:
/// - 筋: file 0 → '9', file 8 → '1'
/// - 段: rank 0 → 'a', rank 8 → 'i'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 81;

    /// 盤の一辺の長さ
    pub const SIZE: u8 = 9;

    /// file と rank から Square を生成
    ///
    /// 範囲外の値は呼び出し側の契約違反（debug ビルドで検出）。
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Square {
        debug_assert!(file < 9 && rank < 9);
        Square(file * 9 + rank)
    }

    /// 符号付き座標から生成（盤外なら None）
    #[inline]
    pub const fn from_coords(file: i32, rank: i32) -> Option<Square> {
        if file >= 0 && file < 9 && rank >= 0 && rank < 9 {
            Some(Square((file * 9 + rank) as u8))
        } else {
            None
        }
    }

    /// 筋（0-8）
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 / 9
    }

    /// 段（0-8）
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 % 9
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if n < 81 { Some(Square(n)) } else { None }
    }

    /// (df, dr) だけずらした升。盤外なら None
    #[inline]
    pub const fn offset(self, df: i32, dr: i32) -> Option<Square> {
        Square::from_coords(self.file() as i32 + df, self.rank() as i32 + dr)
    }

    /// 段を反転した升（先後の対称性検査用）
    #[inline]
    pub const fn flip_rank(self) -> Square {
        Square::new(self.file(), 8 - self.rank())
    }

    /// USI形式の文字列（"7g"等）に変換
    pub fn to_usi(self) -> String {
        self.to_string()
    }

    /// USI形式の文字列からSquareに変換
    pub fn from_usi(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let sq = Square::from_usi_chars(chars.next()?, chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(sq)
    }

    /// USI形式の筋・段の文字から生成
    pub fn from_usi_chars(file: char, rank: char) -> Option<Square> {
        let file = match file {
            '1'..='9' => b'9' - file as u8,
            _ => return None,
        };
        let rank = match rank {
            'a'..='i' => rank as u8 - b'a',
            _ => return None,
        };
        Some(Square::new(file, rank))
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..81).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'9' - self.file()) as char;
        let rank = (b'a' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_usi(s).ok_or_else(|| NotationError::InvalidSquare(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_new() {
        let sq = Square::new(3, 7);
        assert_eq!(sq.file(), 3);
        assert_eq!(sq.rank(), 7);
        assert_eq!(sq.index(), 34);
    }

    #[test]
    fn test_square_from_coords() {
        assert_eq!(Square::from_coords(0, 0), Some(Square::new(0, 0)));
        assert_eq!(Square::from_coords(8, 8), Some(Square::new(8, 8)));
        assert_eq!(Square::from_coords(-1, 0), None);
        assert_eq!(Square::from_coords(0, 9), None);
        assert_eq!(Square::from_coords(9, 4), None);
    }

    #[test]
    fn test_square_offset() {
        let sq = Square::new(4, 4);
        assert_eq!(sq.offset(1, -1), Some(Square::new(5, 3)));
        assert_eq!(Square::new(0, 0).offset(-1, 0), None);
        assert_eq!(Square::new(8, 8).offset(0, 1), None);
    }

    #[test]
    fn test_square_from_u8() {
        assert_eq!(Square::from_u8(0), Some(Square::new(0, 0)));
        assert_eq!(Square::from_u8(80), Some(Square::new(8, 8)));
        assert_eq!(Square::from_u8(81), None);
    }

    #[test]
    fn test_square_usi() {
        // 先手の 1 筋の歩 (8,6) は "1g"
        assert_eq!(Square::new(8, 6).to_usi(), "1g");
        assert_eq!(Square::new(4, 4).to_string(), "5e");
        assert_eq!(Square::new(0, 0).to_string(), "9a");
        assert_eq!(Square::new(8, 8).to_string(), "1i");

        assert_eq!(Square::from_usi("7g"), Some(Square::new(2, 6)));
        assert_eq!(Square::from_usi("9a"), Some(Square::new(0, 0)));
        assert_eq!(Square::from_usi(""), None);
        assert_eq!(Square::from_usi("0a"), None);
        assert_eq!(Square::from_usi("5j"), None);
        assert_eq!(Square::from_usi("5ee"), None);

        let sq: Square = "5e".parse().unwrap();
        assert_eq!(sq, Square::new(4, 4));
        assert!("x".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_flip_rank() {
        assert_eq!(Square::new(2, 0).flip_rank(), Square::new(2, 8));
        assert_eq!(Square::new(4, 4).flip_rank(), Square::new(4, 4));
    }

    #[test]
    fn test_square_all() {
        let all: Vec<_> = Square::all().collect();
        assert_eq!(all.len(), 81);
        assert_eq!(all[0], Square::new(0, 0));
        assert_eq!(all[80], Square::new(8, 8));
    }
}
