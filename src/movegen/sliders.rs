//! Sliding-piece candidates: bishop, rook, and queen rays.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

pub(super) const ROOK_DIRECTIONS: &[(i8, i8)] = &[(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(super) const BISHOP_DIRECTIONS: &[(i8, i8)] = &[(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(super) const QUEEN_DIRECTIONS: &[(i8, i8)] = &[
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walk each direction one step at a time, stopping at the first occupied
/// square and capturing there when the occupant is hostile. Steps off the
/// board edge simply end the ray.
pub(super) fn candidates(board: &Board, piece: &Piece, directions: &[(i8, i8)]) -> Vec<Move> {
    let mut moves = Vec::new();
    for &(df, dr) in directions {
        let mut current = piece.coord();
        while let Some(dest) = current.offset_by(df, dr) {
            match board.square(dest).piece() {
                None => {
                    moves.push(Move::Quiet {
                        piece: *piece,
                        dest,
                    });
                    current = dest;
                }
                Some(occupant) => {
                    if occupant.color() != piece.color() {
                        moves.push(Move::Attack {
                            piece: *piece,
                            dest,
                            captured: occupant,
                        });
                    }
                    break;
                }
            }
        }
    }
    moves
}
