//! King candidates: single steps plus the two castle moves.

use crate::board::Board;
use crate::chess_move::{CastleSide, Move};
use crate::color::Color;
use crate::coord::{Coord, File};
use crate::piece::Piece;

use super::{attacks_on, step_candidate};

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(super) fn candidates(board: &Board, piece: &Piece) -> Vec<Move> {
    OFFSETS
        .into_iter()
        .filter_map(|(df, dr)| step_candidate(board, piece, df, dr))
        .collect()
}

/// Castle candidates for one side.
///
/// A castle requires the king and the wing's rook to still carry their
/// first-move flags, every square between them to be empty, and none of the
/// squares the king stands on or crosses to be attacked by `enemy_moves`.
pub(crate) fn castle_candidates(board: &Board, color: Color, enemy_moves: &[Move]) -> Vec<Move> {
    let mut moves = Vec::new();
    let king = board.king(color);
    let back = color.back_rank();
    let at = |file| Coord::new(back, file);

    if !king.is_first_move() || king.coord() != at(File::FileE) {
        return moves;
    }
    if attacks_on(king.coord(), enemy_moves) {
        return moves;
    }

    // short wing: f and g empty and safe, h-rook untouched
    if !board.square(at(File::FileF)).is_occupied() && !board.square(at(File::FileG)).is_occupied()
    {
        if let Some(rook) = board.piece_on(at(File::FileH)) {
            if rook.color() == color
                && rook.kind().is_rook()
                && rook.is_first_move()
                && !attacks_on(at(File::FileF), enemy_moves)
                && !attacks_on(at(File::FileG), enemy_moves)
            {
                moves.push(Move::Castle {
                    king,
                    dest: at(File::FileG),
                    rook,
                    rook_dest: at(File::FileF),
                    side: CastleSide::Short,
                });
            }
        }
    }

    // long wing: b, c, d empty, c and d safe, a-rook untouched
    if !board.square(at(File::FileB)).is_occupied()
        && !board.square(at(File::FileC)).is_occupied()
        && !board.square(at(File::FileD)).is_occupied()
    {
        if let Some(rook) = board.piece_on(at(File::FileA)) {
            if rook.color() == color
                && rook.kind().is_rook()
                && rook.is_first_move()
                && !attacks_on(at(File::FileC), enemy_moves)
                && !attacks_on(at(File::FileD), enemy_moves)
            {
                moves.push(Move::Castle {
                    king,
                    dest: at(File::FileC),
                    rook,
                    rook_dest: at(File::FileD),
                    side: CastleSide::Long,
                });
            }
        }
    }

    moves
}
