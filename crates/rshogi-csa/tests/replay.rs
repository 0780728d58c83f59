use rshogi_core::{Board, BoardPos, Piece, PieceSort, Player};
use rshogi_csa::{parse_move_line, replay_line, replay_lines, GameError};

#[test]
fn replay_line_moves_a_pawn_forward() {
    let mut board = Board::initial();
    let csa = parse_move_line("+7776FU").unwrap();
    replay_line(&mut board, Player::Black, csa).unwrap();
    assert_eq!(board.get(BoardPos::new(2, 6)), None);
    assert_eq!(
        board.get(BoardPos::new(2, 5)),
        Some(Piece::new(Player::Black, PieceSort::Pawn))
    );
}

#[test]
fn replay_lines_skips_non_matching_lines() {
    let mut board = Board::initial();
    let game = "\
V2.2
N+sente
N-gote
+7776FU
# a comment line
-3334FU
";
    replay_lines(&mut board, game).unwrap();
    assert_eq!(board.get(BoardPos::new(2, 6)), None);
    assert_eq!(board.get(BoardPos::new(6, 2)), None);
}

#[test]
fn replay_line_rejects_move_from_empty_square() {
    let mut board = Board::empty();
    board.set(
        BoardPos::new(4, 8),
        Some(Piece::new(Player::Black, PieceSort::King)),
    );
    board.set(
        BoardPos::new(4, 0),
        Some(Piece::new(Player::White, PieceSort::King)),
    );
    let csa = parse_move_line("+7776FU").unwrap();
    let err = replay_line(&mut board, Player::Black, csa).unwrap_err();
    assert!(matches!(err, GameError::InvalidMove(_)));
}

#[test]
fn replay_line_infers_promotion_for_a_bishop() {
    let mut board = Board::empty();
    board.set(
        BoardPos::new(4, 8),
        Some(Piece::new(Player::Black, PieceSort::King)),
    );
    board.set(
        BoardPos::new(4, 0),
        Some(Piece::new(Player::White, PieceSort::King)),
    );
    board.set(
        BoardPos::new(4, 3),
        Some(Piece::new(Player::Black, PieceSort::Bishop)),
    );
    // from internal (4,3) to internal (2,1): a diagonal ray into the promotion zone
    let csa = parse_move_line("+5472UM").unwrap();
    replay_line(&mut board, Player::Black, csa).unwrap();
    assert_eq!(
        board.get(BoardPos::new(2, 1)),
        Some(Piece::new(Player::Black, PieceSort::PromotedBishop))
    );
}
