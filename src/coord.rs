//! Board coordinates: ranks, files, and the 64 square indices.

use std::fmt;

/// A rank (row) on the board, from Rank1 (White's back rank) to Rank8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// Total number of ranks.
    pub const COUNT: usize = 8;

    /// All ranks in index order.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        if (index as usize) < Rank::COUNT {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// A file (column) on the board, from FileA to FileH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// Total number of files.
    pub const COUNT: usize = 8;

    /// All files in index order.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a zero-based index (0 = FileA, 7 = FileH).
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if (index as usize) < File::COUNT {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = (b'a' + self.index() as u8) as char;
        write!(f, "{c}")
    }
}

/// A board coordinate, encoded as a `u8` in [0, 64).
///
/// Index = rank * 8 + file, so a1 = 0, b1 = 1, ..., h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(u8);

impl Coord {
    /// Total number of coordinates.
    pub const COUNT: usize = 64;

    /// Create a coordinate from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Coord {
        Coord(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Create a coordinate from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Coord> {
        if index < 64 { Some(Coord(index)) } else { None }
    }

    /// Parse an algebraic label (e.g. "e4") into a coordinate.
    pub fn from_algebraic(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        if !bytes[0].is_ascii_lowercase() || !bytes[1].is_ascii_digit() {
            return None;
        }
        let file = File::from_index(bytes[0].wrapping_sub(b'a'))?;
        let rank = Rank::from_index(bytes[1].wrapping_sub(b'1'))?;
        Some(Coord::new(rank, file))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the rank of this coordinate.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Return the file of this coordinate.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Step by a file and rank delta, returning `None` when the step would
    /// leave the 8x8 grid.
    ///
    /// This is the edge guard for offset and sliding movement: a step off the
    /// a- or h-file does not wrap onto the neighbouring rank, it vanishes.
    #[inline]
    pub fn offset_by(self, df: i8, dr: i8) -> Option<Coord> {
        let file = self.file().index() as i8 + df;
        let rank = self.rank().index() as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Coord((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 coordinates in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Coord> {
        (0u8..64).map(Coord)
    }

    // Named coordinate constants
    pub const A1: Coord = Coord(0);
    pub const B1: Coord = Coord(1);
    pub const C1: Coord = Coord(2);
    pub const D1: Coord = Coord(3);
    pub const E1: Coord = Coord(4);
    pub const F1: Coord = Coord(5);
    pub const G1: Coord = Coord(6);
    pub const H1: Coord = Coord(7);
    pub const A2: Coord = Coord(8);
    pub const B2: Coord = Coord(9);
    pub const C2: Coord = Coord(10);
    pub const D2: Coord = Coord(11);
    pub const E2: Coord = Coord(12);
    pub const F2: Coord = Coord(13);
    pub const G2: Coord = Coord(14);
    pub const H2: Coord = Coord(15);
    pub const A3: Coord = Coord(16);
    pub const B3: Coord = Coord(17);
    pub const C3: Coord = Coord(18);
    pub const D3: Coord = Coord(19);
    pub const E3: Coord = Coord(20);
    pub const F3: Coord = Coord(21);
    pub const G3: Coord = Coord(22);
    pub const H3: Coord = Coord(23);
    pub const A4: Coord = Coord(24);
    pub const B4: Coord = Coord(25);
    pub const C4: Coord = Coord(26);
    pub const D4: Coord = Coord(27);
    pub const E4: Coord = Coord(28);
    pub const F4: Coord = Coord(29);
    pub const G4: Coord = Coord(30);
    pub const H4: Coord = Coord(31);
    pub const A5: Coord = Coord(32);
    pub const B5: Coord = Coord(33);
    pub const C5: Coord = Coord(34);
    pub const D5: Coord = Coord(35);
    pub const E5: Coord = Coord(36);
    pub const F5: Coord = Coord(37);
    pub const G5: Coord = Coord(38);
    pub const H5: Coord = Coord(39);
    pub const A6: Coord = Coord(40);
    pub const B6: Coord = Coord(41);
    pub const C6: Coord = Coord(42);
    pub const D6: Coord = Coord(43);
    pub const E6: Coord = Coord(44);
    pub const F6: Coord = Coord(45);
    pub const G6: Coord = Coord(46);
    pub const H6: Coord = Coord(47);
    pub const A7: Coord = Coord(48);
    pub const B7: Coord = Coord(49);
    pub const C7: Coord = Coord(50);
    pub const D7: Coord = Coord(51);
    pub const E7: Coord = Coord(52);
    pub const F7: Coord = Coord(53);
    pub const G7: Coord = Coord(54);
    pub const H7: Coord = Coord(55);
    pub const A8: Coord = Coord(56);
    pub const B8: Coord = Coord(57);
    pub const C8: Coord = Coord(58);
    pub const D8: Coord = Coord(59);
    pub const E8: Coord = Coord(60);
    pub const F8: Coord = Coord(61);
    pub const G8: Coord = Coord(62);
    pub const H8: Coord = Coord(63);
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self)
    }
}
