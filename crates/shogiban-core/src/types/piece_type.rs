//! 駒種（PieceType）

/// 駒種（先後の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    // 生駒
    King = 0,
    Gold = 1,
    Silver = 2,
    Knight = 3,
    Lance = 4,
    Bishop = 5,
    Rook = 6,
    Pawn = 7,
    // 成駒
    ProSilver = 8,
    ProKnight = 9,
    ProLance = 10,
    Horse = 11,  // 成角
    Dragon = 12, // 成飛
    ProPawn = 13,
}

impl PieceType {
    /// 駒種の数
    pub const NUM: usize = 14;

    /// 全ての駒種
    pub const ALL: [PieceType; 14] = [
        PieceType::King,
        PieceType::Gold,
        PieceType::Silver,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Pawn,
        PieceType::ProSilver,
        PieceType::ProKnight,
        PieceType::ProLance,
        PieceType::Horse,
        PieceType::Dragon,
        PieceType::ProPawn,
    ];

    /// 成れるかどうか
    #[inline]
    pub const fn can_promote(self) -> bool {
        matches!(
            self,
            PieceType::Silver
                | PieceType::Knight
                | PieceType::Lance
                | PieceType::Bishop
                | PieceType::Rook
                | PieceType::Pawn
        )
    }

    /// 成り駒を返す（成れない駒はそのまま）
    #[inline]
    pub const fn promote(self) -> PieceType {
        match self {
            PieceType::Silver => PieceType::ProSilver,
            PieceType::Knight => PieceType::ProKnight,
            PieceType::Lance => PieceType::ProLance,
            PieceType::Bishop => PieceType::Horse,
            PieceType::Rook => PieceType::Dragon,
            PieceType::Pawn => PieceType::ProPawn,
            _ => self,
        }
    }

    /// 生駒を返す（既に生駒の場合はそのまま）
    #[inline]
    pub const fn unpromote(self) -> PieceType {
        match self {
            PieceType::ProSilver => PieceType::Silver,
            PieceType::ProKnight => PieceType::Knight,
            PieceType::ProLance => PieceType::Lance,
            PieceType::Horse => PieceType::Bishop,
            PieceType::Dragon => PieceType::Rook,
            PieceType::ProPawn => PieceType::Pawn,
            _ => self,
        }
    }

    /// 成駒かどうか
    #[inline]
    pub const fn is_promoted(self) -> bool {
        self as u8 >= PieceType::ProSilver as u8
    }

    /// 歩または と金か（二歩判定の対象）
    #[inline]
    pub const fn is_pawn_kind(self) -> bool {
        matches!(self, PieceType::Pawn | PieceType::ProPawn)
    }

    /// インデックス（0-13）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// u8から変換（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<PieceType> {
        if (n as usize) < PieceType::NUM {
            Some(PieceType::ALL[n as usize])
        } else {
            None
        }
    }

    /// SFEN/USIの駒文字（生駒部分、大文字）
    #[inline]
    pub const fn usi_char(self) -> char {
        match self.unpromote() {
            PieceType::King => 'K',
            PieceType::Gold => 'G',
            PieceType::Silver => 'S',
            PieceType::Knight => 'N',
            PieceType::Lance => 'L',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            _ => 'P',
        }
    }

    /// 駒文字（大文字小文字は問わない）から生駒を得る
    #[inline]
    pub const fn from_usi_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceType::King),
            'G' => Some(PieceType::Gold),
            'S' => Some(PieceType::Silver),
            'N' => Some(PieceType::Knight),
            'L' => Some(PieceType::Lance),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}
