//! 駒打ちルール: 打てる場所の列挙（二歩・打ち歩詰めを含む）

use crate::board::{Board, BOARD_SIZE};
use crate::check::{is_in_check, is_in_checkmate};
use crate::promotion::must_promote_at_rank;
use crate::types::{BoardPos, Move, Piece, PieceSort};

fn leaves_mover_in_check_after_drop(board: &Board, pos: BoardPos, piece: Piece) -> bool {
    let mut sim = board.clone();
    let applied = sim.apply_move_drop(Move::drop(pos, piece));
    debug_assert!(applied, "drop must be applicable on a copy of the board");
    is_in_check(piece.player, &sim)
}

fn general_drops(piece: Piece, board: &Board, test_check: bool) -> Vec<BoardPos> {
    let mut out = Vec::new();
    for y in 0..BOARD_SIZE as i8 {
        if must_promote_at_rank(piece, y) {
            continue;
        }
        for x in 0..BOARD_SIZE as i8 {
            let pos = BoardPos::new(x, y);
            if board.get(pos).is_some() {
                continue;
            }
            if test_check && leaves_mover_in_check_after_drop(board, pos, piece) {
                continue;
            }
            out.push(pos);
        }
    }
    out
}

/// 歩の打てる場所: 二歩・行き所のない段・打ち歩詰めを除く
fn pawn_drops(piece: Piece, board: &Board, test_check: bool) -> Vec<BoardPos> {
    let files_with_pawn = board.files_have_pawn_for(piece.player);
    let mut out = Vec::new();
    for y in 0..BOARD_SIZE as i8 {
        if must_promote_at_rank(piece, y) {
            continue;
        }
        for x in 0..BOARD_SIZE as i8 {
            if files_with_pawn.contains(x as usize) {
                continue;
            }
            let pos = BoardPos::new(x, y);
            if board.get(pos).is_some() {
                continue;
            }
            if test_check && leaves_mover_in_check_after_drop(board, pos, piece) {
                continue;
            }
            let mut sim = board.clone();
            let applied = sim.apply_move_drop(Move::drop(pos, piece));
            debug_assert!(applied);
            if is_in_checkmate(piece.player.opponent(), &sim) {
                continue;
            }
            out.push(pos);
        }
    }
    out
}

/// `piece`（手駒、常に生駒・非王）を打てる場所を列挙する
pub fn possible_drops_of(piece: Piece, board: &Board, test_check: bool) -> Vec<BoardPos> {
    debug_assert!(piece.sort != PieceSort::King);
    debug_assert_eq!(piece.sort, piece.sort.demote());
    match piece.sort {
        PieceSort::Pawn => pawn_drops(piece, board, test_check),
        _ => general_drops(piece, board, test_check),
    }
}
