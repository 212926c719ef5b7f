//! Candidate move generation, one module per piece family.
//!
//! Candidates ignore king safety; the per-player filter and the orchestrator
//! decide legality on top of them.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

pub(crate) use king::castle_candidates;

/// Candidate moves for every active piece of one side.
pub(crate) fn side_candidates(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in board.pieces(color) {
        moves.extend(piece_candidates(board, piece));
    }
    moves
}

/// Candidate moves for a single piece.
pub(crate) fn piece_candidates(board: &Board, piece: &Piece) -> Vec<Move> {
    match piece.kind() {
        PieceKind::Pawn => pawns::candidates(board, piece),
        PieceKind::Knight => knights::candidates(board, piece),
        PieceKind::Bishop => sliders::candidates(board, piece, sliders::BISHOP_DIRECTIONS),
        PieceKind::Rook => sliders::candidates(board, piece, sliders::ROOK_DIRECTIONS),
        PieceKind::Queen => sliders::candidates(board, piece, sliders::QUEEN_DIRECTIONS),
        PieceKind::King => king::candidates(board, piece),
    }
}

/// Return `true` if any of `moves` lands on `coord`.
pub(crate) fn attacks_on(coord: Coord, moves: &[Move]) -> bool {
    moves.iter().any(|mv| mv.destination() == Some(coord))
}

/// Single-step candidate shared by the fixed-offset pieces: a quiet move to
/// an empty square, a capture of a hostile occupant, nothing otherwise.
fn step_candidate(board: &Board, piece: &Piece, df: i8, dr: i8) -> Option<Move> {
    let dest = piece.coord().offset_by(df, dr)?;
    match board.square(dest).piece() {
        None => Some(Move::Quiet {
            piece: *piece,
            dest,
        }),
        Some(occupant) if occupant.color() != piece.color() => Some(Move::Attack {
            piece: *piece,
            dest,
            captured: occupant,
        }),
        Some(_) => None,
    }
}
