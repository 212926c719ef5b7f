//! Knight candidates from a fixed offset set.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

use super::step_candidate;

const OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(super) fn candidates(board: &Board, piece: &Piece) -> Vec<Move> {
    OFFSETS
        .into_iter()
        .filter_map(|(df, dr)| step_candidate(board, piece, df, dr))
        .collect()
}
