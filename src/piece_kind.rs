//! Piece kinds, their material values, and capability flags.

use std::fmt;

/// The kind of a piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Relative material value of this kind.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    /// Return `true` for the king.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King)
    }

    /// Return `true` for a rook.
    #[inline]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceKind::Rook)
    }

    /// Notation letter for this kind (uppercase).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn values_are_ordered() {
        assert_eq!(PieceKind::Pawn.value(), 100);
        assert_eq!(PieceKind::Knight.value(), PieceKind::Bishop.value());
        assert!(PieceKind::Rook.value() > PieceKind::Bishop.value());
        assert!(PieceKind::Queen.value() > PieceKind::Rook.value());
        assert!(PieceKind::King.value() > PieceKind::Queen.value());
    }

    #[test]
    fn capability_flags() {
        assert!(PieceKind::King.is_king());
        assert!(PieceKind::Rook.is_rook());
        for kind in PieceKind::ALL {
            assert_eq!(kind.is_king(), kind == PieceKind::King);
            assert_eq!(kind.is_rook(), kind == PieceKind::Rook);
        }
    }

    #[test]
    fn letters_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in PieceKind::ALL {
            assert!(seen.insert(kind.letter()), "duplicate letter for {kind:?}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Knight), "N");
        assert_eq!(format!("{}", PieceKind::Pawn), "P");
    }

    #[test]
    fn index_values() {
        for (i, kind) in PieceKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(PieceKind::ALL.len(), PieceKind::COUNT);
    }
}
