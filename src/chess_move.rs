//! The closed hierarchy of move kinds and their application to a board.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Which wing a castle move heads toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Short,
    Long,
}

/// A move, tagged by kind.
///
/// A move is a pure value describing a transformation of one specific board:
/// the board it was generated against. Applying it to any other board is
/// undefined; the orchestrator enforces this by re-checking membership in the
/// current player's legal-move set before committing (see
/// [`Board::make_move`](crate::board::Board)).
///
/// Equality and hashing are structural over the destination, the moved
/// piece's identity, and (for capturing kinds) the captured piece's identity,
/// which is what legal-move-set membership tests rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// A non-capturing move to an empty square.
    Quiet { piece: Piece, dest: Coord },
    /// A capture of the piece standing on the destination.
    Attack {
        piece: Piece,
        dest: Coord,
        captured: Piece,
    },
    /// A pawn's initial two-square advance, opening an en-passant window.
    PawnJump { piece: Piece, dest: Coord },
    /// A pawn capturing a jumped pawn in passing; the captured pawn does not
    /// stand on the destination square.
    EnPassant {
        piece: Piece,
        dest: Coord,
        captured: Piece,
    },
    /// A pawn reaching its promotion rank, replaced by the chosen kind.
    Promotion {
        piece: Piece,
        dest: Coord,
        captured: Option<Piece>,
        replacement: PieceKind,
    },
    /// King and rook moving together.
    Castle {
        king: Piece,
        dest: Coord,
        rook: Piece,
        rook_dest: Coord,
        side: CastleSide,
    },
    /// The "no move" sentinel. Applying it returns the board unchanged.
    Invalid,
}

impl Move {
    /// Return the moved piece, or `None` for the invalid sentinel.
    pub const fn moved_piece(&self) -> Option<Piece> {
        match *self {
            Move::Quiet { piece, .. }
            | Move::Attack { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::EnPassant { piece, .. }
            | Move::Promotion { piece, .. } => Some(piece),
            Move::Castle { king, .. } => Some(king),
            Move::Invalid => None,
        }
    }

    /// Return the origin coordinate, or `None` for the invalid sentinel.
    pub const fn origin(&self) -> Option<Coord> {
        match self.moved_piece() {
            Some(piece) => Some(piece.coord()),
            None => None,
        }
    }

    /// Return the destination coordinate, or `None` for the invalid sentinel.
    pub const fn destination(&self) -> Option<Coord> {
        match *self {
            Move::Quiet { dest, .. }
            | Move::Attack { dest, .. }
            | Move::PawnJump { dest, .. }
            | Move::EnPassant { dest, .. }
            | Move::Promotion { dest, .. }
            | Move::Castle { dest, .. } => Some(dest),
            Move::Invalid => None,
        }
    }

    /// Return the captured piece, if this move captures one.
    pub const fn captured_piece(&self) -> Option<Piece> {
        match *self {
            Move::Attack { captured, .. } | Move::EnPassant { captured, .. } => Some(captured),
            Move::Promotion { captured, .. } => captured,
            _ => None,
        }
    }

    /// Return `true` if this move captures a piece.
    pub const fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    /// Return `true` for either castle kind.
    pub const fn is_castle(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    /// Return `true` for the invalid sentinel.
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Move::Invalid)
    }

    /// Apply this move to the board it was generated against, producing the
    /// successor board.
    ///
    /// The origin square becomes empty, the destination holds the advanced
    /// (or replacement) piece, captured pieces vanish, the side to move
    /// flips, and a pawn jump records its pawn as en-passant-eligible for
    /// exactly the next reply. The invalid sentinel returns the board
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if applied to a board other than the one it was generated
    /// against, should that produce a structurally invalid position. The
    /// orchestrator rules this out by validating membership first.
    pub fn apply(&self, board: &Board) -> Board {
        let Some(moved) = self.moved_piece() else {
            return board.clone();
        };
        let captured = self.captured_piece();
        let castle_rook = match *self {
            Move::Castle { rook, .. } => Some(rook),
            _ => None,
        };

        let mut builder = Board::builder();
        for piece in board
            .pieces(Color::White)
            .iter()
            .chain(board.pieces(Color::Black))
        {
            if *piece == moved || Some(*piece) == captured || Some(*piece) == castle_rook {
                continue;
            }
            builder = builder.piece(*piece);
        }

        builder = match *self {
            Move::Promotion {
                piece,
                dest,
                replacement,
                ..
            } => builder.piece(Piece::new(replacement, piece.color(), dest).having_moved()),
            Move::Castle {
                king,
                rook,
                rook_dest,
                ..
            } => builder
                .piece(king.advanced(self))
                .piece(Piece::new(PieceKind::Rook, rook.color(), rook_dest).having_moved()),
            _ => builder.piece(moved.advanced(self)),
        };

        if let Move::PawnJump { piece, .. } = *self {
            builder = builder.en_passant_pawn(piece.advanced(self));
        }

        builder
            .side_to_move(moved.color().flip())
            .transition(*self)
            .build()
            .expect("applying a generated move must produce a valid board")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Quiet { piece, dest } => {
                if piece.kind() == PieceKind::Pawn {
                    write!(f, "{dest}")
                } else {
                    write!(f, "{}{dest}", piece.kind().letter())
                }
            }
            Move::PawnJump { dest, .. } => write!(f, "{dest}"),
            Move::Attack { piece, dest, .. } => {
                if piece.kind() == PieceKind::Pawn {
                    write!(f, "{}x{dest}", piece.coord().file())
                } else {
                    write!(f, "{}x{dest}", piece.kind().letter())
                }
            }
            Move::EnPassant { piece, dest, .. } => {
                write!(f, "{}x{dest}", piece.coord().file())
            }
            Move::Promotion {
                piece,
                dest,
                captured,
                replacement,
            } => {
                if captured.is_some() {
                    write!(f, "{}x{dest}={}", piece.coord().file(), replacement.letter())
                } else {
                    write!(f, "{dest}={}", replacement.letter())
                }
            }
            Move::Castle { side, .. } => match side {
                CastleSide::Short => write!(f, "O-O"),
                CastleSide::Long => write!(f, "O-O-O"),
            },
            Move::Invalid => write!(f, "--"),
        }
    }
}
