//! 王手・詰みの判定

use crate::board::{Board, BOARD_SIZE};
use crate::movegen::motions_from;
use crate::types::{BoardPos, Piece, PieceSort, Player};
use crate::validate;

/// `player` の玉が、相手の手番なら取られうる状態かどうか
pub fn is_in_check(player: Player, board: &Board) -> bool {
    let Some(king_pos) = board.find(Piece::new(player, PieceSort::King)) else {
        return false;
    };
    let attacker = player.opponent();
    for y in 0..BOARD_SIZE as i8 {
        for x in 0..BOARD_SIZE as i8 {
            let pos = BoardPos::new(x, y);
            match board.get(pos) {
                Some(piece) if piece.player == attacker => {}
                _ => continue,
            }
            let movements = motions_from(board, pos, false);
            if movements
                .iter()
                .any(|m| pos.apply_motion(m.motion) == Some(king_pos))
            {
                return true;
            }
        }
    }
    false
}

/// `player` が王手されていて、かつそれを解消する手が一つもないかどうか
pub fn is_in_checkmate(player: Player, board: &Board) -> bool {
    is_in_check(player, board) && validate::moves_for(player, board, true).is_empty()
}
