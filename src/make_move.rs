//! Move execution: the single gate through which a board transition is
//! accepted.

use std::fmt;

use tracing::warn;

use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen;

/// Terminal status of a move submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// The move was legal and has been applied.
    Done,
    /// The move is not in the current player's legal set; nothing changed.
    IllegalMove,
    /// The move would leave the mover's own king attacked; nothing changed.
    InCheck,
}

impl MoveStatus {
    /// Return `true` only for [`MoveStatus::Done`].
    #[inline]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::IllegalMove => write!(f, "illegal move"),
            MoveStatus::InCheck => write!(f, "leaves the king in check"),
        }
    }
}

/// The result of submitting a move: the resulting board (the original one
/// when the submission was rejected), the submitted move, and the status.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    board: Board,
    played: Move,
    status: MoveStatus,
}

impl MoveOutcome {
    /// Return the status.
    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    /// Return the resulting board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the outcome and take the resulting board.
    #[inline]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Return the submitted move.
    #[inline]
    pub fn played_move(&self) -> Move {
        self.played
    }
}

impl Board {
    /// Submit a move for the side to move.
    ///
    /// The move must belong to the current player's legal set on this exact
    /// board; anything else is rejected as [`MoveStatus::IllegalMove`] with
    /// the board unchanged. A move that passes membership is applied and the
    /// mover's king is re-verified on the candidate board; if it is attacked
    /// the transition is refused as [`MoveStatus::InCheck`]. Only a
    /// [`MoveStatus::Done`] outcome carries a new board.
    pub fn make_move(&self, mv: &Move) -> MoveOutcome {
        if !self.current_player().is_move_legal(mv) {
            return MoveOutcome {
                board: self.clone(),
                played: *mv,
                status: MoveStatus::IllegalMove,
            };
        }

        let mover = self.side_to_move();
        let next = mv.apply(self);
        let king = next.king(mover);
        if movegen::attacks_on(king.coord(), next.candidates(mover.flip())) {
            // the legality filter must have prevented this; refuse the
            // transition and flag the inconsistency
            warn!(%mv, %mover, "legal move left the mover's king attacked");
            return MoveOutcome {
                board: self.clone(),
                played: *mv,
                status: MoveStatus::InCheck,
            };
        }

        MoveOutcome {
            board: next,
            played: *mv,
            status: MoveStatus::Done,
        }
    }
}
