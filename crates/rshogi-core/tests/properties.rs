use proptest::prelude::*;
use rshogi_core::{is_in_check, motions_from, Board, BoardPos, Hand, Motion, Move, Piece, PieceSort, Player};

fn any_piece_sort() -> impl Strategy<Value = PieceSort> {
    (0usize..PieceSort::NUM).prop_map(|i| PieceSort::ALL[i])
}

fn droppable_sort() -> impl Strategy<Value = PieceSort> {
    (0usize..PieceSort::DROPPABLE.len()).prop_map(|i| PieceSort::DROPPABLE[i])
}

fn board_coord() -> impl Strategy<Value = i8> {
    0i8..9
}

proptest! {
    #[test]
    fn promote_then_demote_is_identity_for_promotable(sort in any_piece_sort()) {
        if sort.can_promote() {
            prop_assert_eq!(sort.promote().demote(), sort);
        } else {
            prop_assert_eq!(sort.promote(), sort);
        }
    }

    #[test]
    fn promote_is_idempotent(sort in any_piece_sort()) {
        prop_assert_eq!(sort.promote().promote(), sort.promote());
    }

    #[test]
    fn demote_is_idempotent(sort in any_piece_sort()) {
        prop_assert_eq!(sort.demote().demote(), sort.demote());
    }

    #[test]
    fn apply_motion_is_some_iff_destination_in_bounds(
        x in -3i8..12, y in -3i8..12, dx in -4i8..5, dy in -4i8..5,
    ) {
        let pos = BoardPos::new(x, y);
        let motion = Motion::new(dx, dy);
        let dest = BoardPos::new(x + dx, y + dy);
        prop_assert_eq!(pos.apply_motion(motion).is_some(), dest.in_bounds());
    }

    #[test]
    fn hand_bookkeeping_round_trips_through_add_and_remove(
        sort in droppable_sort(), count in 0u8..8,
    ) {
        let mut hand = Hand::empty();
        for _ in 0..count {
            hand.add(sort);
        }
        prop_assert_eq!(hand.count(sort), count);
        for _ in 0..count {
            hand.remove(sort);
        }
        prop_assert_eq!(hand.count(sort), 0);
    }

    #[test]
    fn hand_never_holds_a_promoted_sort(sort in droppable_sort()) {
        let mut hand = Hand::empty();
        hand.add(sort.promote());
        prop_assert_eq!(hand.count(sort.promote().demote()), 1);
    }

    #[test]
    fn no_motion_generated_with_test_check_leaves_the_mover_in_check(
        king_x in board_coord(), king_y in board_coord(),
        rook_x in board_coord(), rook_y in board_coord(),
    ) {
        prop_assume!((king_x, king_y) != (rook_x, rook_y));
        let king_pos = BoardPos::new(king_x, king_y);
        let mut board = Board::empty();
        board.set(king_pos, Some(Piece::new(Player::Black, PieceSort::King)));
        board.set(
            BoardPos::new(rook_x, rook_y),
            Some(Piece::new(Player::White, PieceSort::Rook)),
        );

        for m in motions_from(&board, king_pos, true) {
            let mut sim = board.clone();
            let applied = sim.apply_move_basic(Move::basic(king_pos, m.motion, false));
            prop_assert!(applied);
            prop_assert!(!is_in_check(Player::Black, &sim));
        }
    }
}
