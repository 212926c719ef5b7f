//! The board: an immutable 64-cell snapshot with derived per-side state.

use std::fmt;

use tracing::debug;

use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::{Coord, File, Rank};
use crate::error::BoardError;
use crate::movegen;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::player::Player;
use crate::square::Square;

/// A complete position: 64 squares, per-side piece sets and candidate moves,
/// the side to move, the pending en-passant pawn, and the move that produced
/// this snapshot.
///
/// Boards are immutable; every transformation yields a fresh board, so
/// callers may hold and compare any number of snapshots.
#[derive(Clone)]
pub struct Board {
    squares: [Square; 64],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    white_candidates: Vec<Move>,
    black_candidates: Vec<Move>,
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
    transition: Move,
}

impl Board {
    /// Return a fresh staged builder.
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// Assemble the standard starting position, White to move.
    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut builder = Board::builder();
        for color in Color::ALL {
            let pawn_rank = match color {
                Color::White => Rank::Rank2,
                Color::Black => Rank::Rank7,
            };
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
                builder = builder
                    .piece(Piece::new(kind, color, Coord::new(color.back_rank(), file)))
                    .piece(Piece::new(
                        PieceKind::Pawn,
                        color,
                        Coord::new(pawn_rank, file),
                    ));
            }
        }
        let board = builder
            .side_to_move(Color::White)
            .build()
            .expect("the standard starting position is structurally valid");
        debug!("standard starting position assembled");
        board
    }

    /// Return the square at the given coordinate.
    #[inline]
    pub fn square(&self, coord: Coord) -> Square {
        self.squares[coord.index()]
    }

    /// Return the piece at the given coordinate, if any.
    #[inline]
    pub fn piece_on(&self, coord: Coord) -> Option<Piece> {
        self.square(coord).piece()
    }

    /// Return the active pieces of one side.
    #[inline]
    pub fn pieces(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_pieces,
            Color::Black => &self.black_pieces,
        }
    }

    /// Return the cached candidate moves of one side.
    #[inline]
    pub(crate) fn candidates(&self, color: Color) -> &[Move] {
        match color {
            Color::White => &self.white_candidates,
            Color::Black => &self.black_candidates,
        }
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the pawn that just jumped two squares, if the en-passant
    /// window is open.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// Return the move that produced this board (the invalid sentinel for
    /// factory-built positions).
    #[inline]
    pub fn transition_move(&self) -> Move {
        self.transition
    }

    /// Return the king of the given side.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king for the side, which construction
    /// validation rules out.
    pub fn king(&self, color: Color) -> Piece {
        self.pieces(color)
            .iter()
            .copied()
            .find(|piece| piece.kind().is_king())
            .expect("each side has exactly one king")
    }

    /// Return `true` once the given side has castled.
    pub fn has_castled(&self, color: Color) -> bool {
        self.king(color).has_castled()
    }

    /// Return the player view for one side.
    pub fn player(&self, color: Color) -> Player<'_> {
        Player::new(self, color)
    }

    /// Return the White player view.
    pub fn white_player(&self) -> Player<'_> {
        self.player(Color::White)
    }

    /// Return the Black player view.
    pub fn black_player(&self) -> Player<'_> {
        self.player(Color::Black)
    }

    /// Return the player whose turn it is.
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    /// Union of both sides' legal moves.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        let mut moves = self.white_player().legal_moves();
        moves.extend(self.black_player().legal_moves());
        moves
    }

    /// Find the legal move from `from` to `to`, searching both sides.
    ///
    /// Returns the invalid sentinel when no such move exists. Promotion
    /// lookups resolve to the queen replacement.
    pub fn find_move(&self, from: Coord, to: Coord) -> Move {
        self.all_legal_moves()
            .into_iter()
            .find(|mv| mv.origin() == Some(from) && mv.destination() == Some(to))
            .unwrap_or(Move::Invalid)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board({} pieces, {} to move)",
            self.white_pieces.len() + self.black_pieces.len(),
            self.side_to_move
        )
    }
}

/// Staged board constructor: collects pieces and metadata, validates every
/// structural invariant at a single terminal [`build`](BoardBuilder::build).
#[derive(Clone, Default)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    side_to_move: Option<Color>,
    en_passant_pawn: Option<Piece>,
    transition: Option<Move>,
}

impl BoardBuilder {
    /// Create an empty builder.
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: None,
            en_passant_pawn: None,
            transition: None,
        }
    }

    /// Place a piece.
    pub fn piece(mut self, piece: Piece) -> BoardBuilder {
        self.pieces.push(piece);
        self
    }

    /// Set the side to move. Required.
    pub fn side_to_move(mut self, color: Color) -> BoardBuilder {
        self.side_to_move = Some(color);
        self
    }

    /// Mark a pawn as having just jumped, opening its en-passant window.
    pub fn en_passant_pawn(mut self, pawn: Piece) -> BoardBuilder {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Record the move that produces the board under construction.
    pub(crate) fn transition(mut self, mv: Move) -> BoardBuilder {
        self.transition = Some(mv);
        self
    }

    /// Validate and assemble the board.
    ///
    /// Rejects duplicate occupancy, a missing or doubled king on either
    /// side, pawns on either back rank, and a missing side to move.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut squares = [Square::Empty; 64];
        for piece in &self.pieces {
            let cell = &mut squares[piece.coord().index()];
            if cell.is_occupied() {
                return Err(BoardError::DuplicateSquare {
                    coord: piece.coord(),
                });
            }
            *cell = Square::Occupied(*piece);
        }

        for color in Color::ALL {
            let kings = self
                .pieces
                .iter()
                .filter(|piece| piece.color() == color && piece.kind().is_king())
                .count();
            if kings != 1 {
                let color = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount {
                    color,
                    count: kings,
                });
            }
        }

        for piece in &self.pieces {
            let rank = piece.coord().rank();
            if piece.kind() == PieceKind::Pawn && (rank == Rank::Rank1 || rank == Rank::Rank8) {
                return Err(BoardError::PawnOnBackRank {
                    coord: piece.coord(),
                });
            }
        }

        let side_to_move = self.side_to_move.ok_or(BoardError::NoSideToMove)?;

        let mut white_pieces = Vec::new();
        let mut black_pieces = Vec::new();
        for coord in Coord::all() {
            if let Some(piece) = squares[coord.index()].piece() {
                match piece.color() {
                    Color::White => white_pieces.push(piece),
                    Color::Black => black_pieces.push(piece),
                }
            }
        }

        let mut board = Board {
            squares,
            white_pieces,
            black_pieces,
            white_candidates: Vec::new(),
            black_candidates: Vec::new(),
            side_to_move,
            en_passant_pawn: self.en_passant_pawn,
            transition: self.transition.unwrap_or(Move::Invalid),
        };
        board.white_candidates = movegen::side_candidates(&board, Color::White);
        board.black_candidates = movegen::side_candidates(&board, Color::Black);
        Ok(board)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let square = self.0.square(Coord::new(rank, file));
                if file == File::FileH {
                    write!(f, "{square}")?;
                } else {
                    write!(f, "{square} ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
