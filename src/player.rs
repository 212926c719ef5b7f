//! Per-side legality: the filter between candidate moves and legal moves.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen;
use crate::piece::Piece;

/// A side's view of one board: its candidate moves, its legal moves, and its
/// game-state predicates.
///
/// Players are borrowed views recomputed from a board on demand; they carry
/// no state of their own and are never mutated.
#[derive(Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    color: Color,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, color: Color) -> Player<'a> {
        Player { board, color }
    }

    /// Return this player's color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Return the board this view reads.
    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Return the opposing player's view of the same board.
    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.color.flip())
    }

    /// Return this player's king.
    pub fn king(&self) -> Piece {
        self.board.king(self.color)
    }

    /// Return `true` once this side has castled.
    pub fn has_castled(&self) -> bool {
        self.king().has_castled()
    }

    /// This side's candidate moves: every move its pieces could make,
    /// ignoring king safety.
    pub fn candidate_moves(&self) -> &'a [Move] {
        self.board.candidates(self.color)
    }

    /// This side's legal moves: candidates (plus available castles) that do
    /// not leave the own king attacked, verified by applying each move and
    /// inspecting the resulting board.
    pub fn legal_moves(&self) -> Vec<Move> {
        let enemy_moves = self.board.candidates(self.color.flip());
        let mut moves = self.candidate_moves().to_vec();
        moves.extend(movegen::castle_candidates(self.board, self.color, enemy_moves));
        moves.retain(|mv| self.keeps_own_king_safe(mv));
        moves
    }

    fn keeps_own_king_safe(&self, mv: &Move) -> bool {
        // a candidate landing on the enemy king measures check, it is never
        // itself playable
        if mv.captured_piece().is_some_and(|piece| piece.kind().is_king()) {
            return false;
        }
        let next = mv.apply(self.board);
        let king = next.king(self.color);
        !movegen::attacks_on(king.coord(), next.candidates(self.color.flip()))
    }

    /// Return `true` if this side's king is attacked on the current board.
    pub fn is_in_check(&self) -> bool {
        movegen::attacks_on(self.king().coord(), self.board.candidates(self.color.flip()))
    }

    /// Checkmate: in check with no legal move left.
    pub fn is_mated(&self) -> bool {
        self.is_in_check() && self.legal_moves().is_empty()
    }

    /// Stalemate: not in check, but no legal move left.
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.legal_moves().is_empty()
    }

    /// Membership test against this side's legal moves.
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves().contains(mv)
    }
}
