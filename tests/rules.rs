//! Game-level scenarios exercising the rules engine end to end.

use scacco::{Board, CastleSide, Color, Coord, Move, MoveStatus, Piece, PieceKind};

fn coord(label: &str) -> Coord {
    Coord::from_algebraic(label).unwrap_or_else(|| panic!("bad square label {label}"))
}

/// Find and execute the move between two squares, asserting it succeeds.
fn play(board: Board, from: &str, to: &str) -> Board {
    let mv = board.find_move(coord(from), coord(to));
    assert!(!mv.is_invalid(), "no legal move from {from} to {to}");
    let outcome = board.make_move(&mv);
    assert_eq!(
        outcome.status(),
        MoveStatus::Done,
        "move {from}{to} was rejected"
    );
    outcome.into_board()
}

#[test]
fn fools_mate() {
    let board = Board::starting_position();
    let board = play(board, "f2", "f3");
    let board = play(board, "e7", "e5");
    let board = play(board, "g2", "g4");
    let board = play(board, "d8", "h4");

    let white = board.white_player();
    assert!(white.is_in_check());
    assert!(white.is_mated());
    assert!(!white.is_stalemate());
    assert!(!board.black_player().is_mated());
    assert!(!board.black_player().is_in_check());
}

#[test]
fn every_opening_move_leaves_black_a_quiet_reply() {
    let board = Board::starting_position();
    let openers = board.white_player().legal_moves();
    assert_eq!(openers.len(), 20);
    for mv in openers {
        let outcome = board.make_move(&mv);
        assert!(outcome.status().is_done(), "opener {mv} rejected");
        let next = outcome.board();
        assert!(!next.black_player().is_in_check(), "after {mv}");
        assert!(!next.black_player().legal_moves().is_empty(), "after {mv}");
    }
}

#[test]
fn legal_moves_never_leave_the_mover_in_check() {
    let mut boards = vec![Board::starting_position()];
    boards.push(play(Board::starting_position(), "e2", "e4"));
    for board in boards {
        let mover = board.side_to_move();
        for mv in board.current_player().legal_moves() {
            let outcome = board.make_move(&mv);
            assert!(outcome.status().is_done(), "{mv} rejected");
            assert!(
                !outcome.board().player(mover).is_in_check(),
                "{mv} left the mover in check"
            );
        }
    }
}

fn en_passant_setup() -> Board {
    Board::builder()
        .piece(Piece::new(PieceKind::King, Color::White, Coord::E1))
        .piece(Piece::new(PieceKind::King, Color::Black, Coord::E8))
        .piece(Piece::new(PieceKind::Pawn, Color::White, Coord::E5).having_moved())
        .piece(Piece::new(PieceKind::Pawn, Color::White, Coord::H2))
        .piece(Piece::new(PieceKind::Pawn, Color::Black, Coord::D7))
        .piece(Piece::new(PieceKind::Pawn, Color::Black, Coord::H7))
        .side_to_move(Color::Black)
        .build()
        .unwrap()
}

#[test]
fn en_passant_is_open_for_exactly_one_reply() {
    let board = play(en_passant_setup(), "d7", "d5");

    // the window is open now
    let capture = board.find_move(coord("e5"), coord("d6"));
    assert!(matches!(capture, Move::EnPassant { .. }));

    // but closes after any other reply
    let board = play(board, "h2", "h3");
    let board = play(board, "h7", "h6");
    assert!(board.find_move(coord("e5"), coord("d6")).is_invalid());
}

#[test]
fn en_passant_capture_clears_the_jumped_pawn() {
    let board = play(en_passant_setup(), "d7", "d5");
    let board = play(board, "e5", "d6");

    assert!(board.piece_on(coord("d5")).is_none());
    assert!(board.piece_on(coord("e5")).is_none());
    let pawn = board.piece_on(coord("d6")).unwrap();
    assert_eq!(pawn.kind(), PieceKind::Pawn);
    assert_eq!(pawn.color(), Color::White);
    assert_eq!(board.pieces(Color::Black).len(), 2);
}

fn castling_setup(kingside_rook_moved: bool) -> Board {
    let h_rook = Piece::new(PieceKind::Rook, Color::White, Coord::H1);
    Board::builder()
        .piece(Piece::new(PieceKind::King, Color::White, Coord::E1))
        .piece(Piece::new(PieceKind::Rook, Color::White, Coord::A1))
        .piece(if kingside_rook_moved {
            h_rook.having_moved()
        } else {
            h_rook
        })
        .piece(Piece::new(PieceKind::King, Color::Black, Coord::E8))
        .side_to_move(Color::White)
        .build()
        .unwrap()
}

#[test]
fn short_castle_moves_king_and_rook_together() {
    let board = castling_setup(false);
    let castle = board.find_move(coord("e1"), coord("g1"));
    assert!(matches!(
        castle,
        Move::Castle {
            side: CastleSide::Short,
            ..
        }
    ));

    let board = board.make_move(&castle).into_board();
    assert_eq!(board.piece_on(coord("g1")).unwrap().kind(), PieceKind::King);
    assert_eq!(board.piece_on(coord("f1")).unwrap().kind(), PieceKind::Rook);
    assert!(board.piece_on(coord("e1")).is_none());
    assert!(board.piece_on(coord("h1")).is_none());
    assert!(board.has_castled(Color::White));
    assert!(board.white_player().has_castled());
    assert!(!board.has_castled(Color::Black));
}

#[test]
fn long_castle_is_also_available() {
    let board = castling_setup(false);
    let castle = board.find_move(coord("e1"), coord("c1"));
    assert!(matches!(
        castle,
        Move::Castle {
            side: CastleSide::Long,
            ..
        }
    ));
    let board = board.make_move(&castle).into_board();
    assert_eq!(board.piece_on(coord("c1")).unwrap().kind(), PieceKind::King);
    assert_eq!(board.piece_on(coord("d1")).unwrap().kind(), PieceKind::Rook);
}

#[test]
fn castling_is_denied_after_the_rook_moved() {
    let board = castling_setup(true);
    assert!(board.find_move(coord("e1"), coord("g1")).is_invalid());
    // the other wing is unaffected
    assert!(!board.find_move(coord("e1"), coord("c1")).is_invalid());
}

#[test]
fn castling_is_denied_after_the_king_moved() {
    // walk the king out and back: both wings are gone for good
    let board = castling_setup(false);
    let board = play(board, "e1", "e2");
    let board = play(board, "e8", "e7");
    let board = play(board, "e2", "e1");
    let board = play(board, "e7", "e8");
    assert!(board.find_move(coord("e1"), coord("g1")).is_invalid());
    assert!(board.find_move(coord("e1"), coord("c1")).is_invalid());
}

#[test]
fn castling_is_denied_through_an_attacked_square() {
    let board = Board::builder()
        .piece(Piece::new(PieceKind::King, Color::White, Coord::E1))
        .piece(Piece::new(PieceKind::Rook, Color::White, Coord::A1))
        .piece(Piece::new(PieceKind::Rook, Color::White, Coord::H1))
        .piece(Piece::new(PieceKind::King, Color::Black, Coord::E8))
        .piece(Piece::new(PieceKind::Rook, Color::Black, Coord::F8).having_moved())
        .side_to_move(Color::White)
        .build()
        .unwrap();
    assert!(board.find_move(coord("e1"), coord("g1")).is_invalid());
    assert!(!board.find_move(coord("e1"), coord("c1")).is_invalid());
}

#[test]
fn promotion_replaces_the_pawn_with_the_chosen_kind() {
    let board = Board::builder()
        .piece(Piece::new(PieceKind::King, Color::White, Coord::E1))
        .piece(Piece::new(PieceKind::King, Color::Black, Coord::H8))
        .piece(Piece::new(PieceKind::Pawn, Color::White, Coord::B7).having_moved())
        .side_to_move(Color::White)
        .build()
        .unwrap();

    let choices: Vec<Move> = board
        .white_player()
        .legal_moves()
        .into_iter()
        .filter(|mv| matches!(mv, Move::Promotion { .. }))
        .collect();
    assert_eq!(choices.len(), 4);

    // the lookup default is the queen
    let default = board.find_move(coord("b7"), coord("b8"));
    assert!(matches!(
        default,
        Move::Promotion {
            replacement: PieceKind::Queen,
            ..
        }
    ));

    // but the mover may select another replacement
    let underpromotion = choices
        .iter()
        .find(|mv| {
            matches!(
                mv,
                Move::Promotion {
                    replacement: PieceKind::Knight,
                    ..
                }
            )
        })
        .unwrap();
    let board = board.make_move(underpromotion).into_board();
    let knight = board.piece_on(coord("b8")).unwrap();
    assert_eq!(knight.kind(), PieceKind::Knight);
    assert_eq!(knight.color(), Color::White);
}

#[test]
fn promoted_piece_moves_as_its_new_kind() {
    let board = Board::builder()
        .piece(Piece::new(PieceKind::King, Color::White, Coord::E1))
        .piece(Piece::new(PieceKind::King, Color::Black, Coord::H7).having_moved())
        .piece(Piece::new(PieceKind::Pawn, Color::White, Coord::B7).having_moved())
        .piece(Piece::new(PieceKind::Pawn, Color::Black, Coord::G7))
        .side_to_move(Color::White)
        .build()
        .unwrap();

    let board = play(board, "b7", "b8");
    let board = play(board, "g7", "g6");

    // the new queen ranges over rank and diagonal alike
    let queen_moves: Vec<Move> = board
        .white_player()
        .legal_moves()
        .into_iter()
        .filter(|mv| mv.origin() == Some(coord("b8")))
        .collect();
    assert!(!queen_moves.is_empty());
    let dests: Vec<Coord> = queen_moves
        .iter()
        .map(|mv| mv.destination().unwrap())
        .collect();
    assert!(dests.contains(&coord("a7")), "diagonal reach");
    assert!(dests.contains(&coord("g8")), "rank reach");
    assert!(dests.contains(&coord("b1")), "file reach");
}

#[test]
fn rejected_submissions_leave_the_board_alone() {
    let board = Board::starting_position();
    let fabricated = Move::Quiet {
        piece: board.piece_on(coord("e2")).unwrap(),
        dest: coord("e5"),
    };
    let outcome = board.make_move(&fabricated);
    assert_eq!(outcome.status(), MoveStatus::IllegalMove);
    assert!(!outcome.status().is_done());
    assert_eq!(outcome.board().side_to_move(), Color::White);
    assert!(outcome.board().piece_on(coord("e2")).is_some());
    assert!(outcome.board().piece_on(coord("e5")).is_none());
}

#[test]
fn the_move_log_reads_naturally() {
    let board = Board::starting_position();
    let jump = board.find_move(coord("e2"), coord("e4"));
    assert_eq!(format!("{jump}"), "e4");
    let board = board.make_move(&jump).into_board();
    let board = play(board, "d7", "d5");
    let capture = board.find_move(coord("e4"), coord("d5"));
    assert_eq!(format!("{capture}"), "exd5");
    let board = board.make_move(&capture).into_board();
    let recapture = board.find_move(coord("d8"), coord("d5"));
    assert_eq!(format!("{recapture}"), "Qxd5");
}
