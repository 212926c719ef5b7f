//! Structural errors raised when assembling a board.

use crate::coord::Coord;

/// Errors from structural validation of a [`Board`](crate::board::Board).
///
/// Boards that violate these invariants are rejected at construction time
/// and never exist as values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Two pieces were placed on the same square.
    #[error("two pieces placed on {coord}")]
    DuplicateSquare {
        /// The doubly-occupied coordinate.
        coord: Coord,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on a promotion rank.
    #[error("pawn on back rank at {coord}")]
    PawnOnBackRank {
        /// The offending coordinate.
        coord: Coord,
    },
    /// The builder was never told which side moves next.
    #[error("side to move is not set")]
    NoSideToMove,
}
