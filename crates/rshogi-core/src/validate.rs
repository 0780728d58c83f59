//! 合法手判定: 盤上の全ての手・打てる手の列挙と、個別の手の合法性判定

use std::collections::HashMap;

use crate::board::{Board, BOARD_SIZE};
use crate::check::is_in_check;
use crate::drop_rules::possible_drops_of;
use crate::movegen::{motions_from, Movement};
use crate::promotion::AbleToPromote;
use crate::types::{BoardPos, Move, Piece, Player};

/// ある局面で手番側が指せる全ての手
#[derive(Debug, Clone, Default)]
pub struct Valid {
    pub basics: HashMap<BoardPos, Vec<Movement>>,
    pub drops: HashMap<Piece, Vec<BoardPos>>,
}

impl Valid {
    pub fn is_empty(&self) -> bool {
        self.basics.values().all(|m| m.is_empty()) && self.drops.values().all(|d| d.is_empty())
    }

    /// 成れる手を2通り（不成・成り）と数えた、指せる具体的な手の総数
    pub fn total_move_count(&self) -> usize {
        let basic_count: usize = self
            .basics
            .values()
            .flat_map(|movements| movements.iter())
            .map(|m| {
                if m.promotion == AbleToPromote::CanPromote {
                    2
                } else {
                    1
                }
            })
            .sum();
        let drop_count: usize = self.drops.values().map(|positions| positions.len()).sum();
        basic_count + drop_count
    }
}

/// 盤上の駒を動かす手を全て列挙する（非空のものだけ登録する）
pub fn moves_basic_for(
    player: Player,
    board: &Board,
    test_check: bool,
) -> HashMap<BoardPos, Vec<Movement>> {
    let mut basics = HashMap::new();
    for y in 0..BOARD_SIZE as i8 {
        for x in 0..BOARD_SIZE as i8 {
            let pos = BoardPos::new(x, y);
            match board.get(pos) {
                Some(piece) if piece.player == player => {}
                _ => continue,
            }
            let movements = motions_from(board, pos, test_check);
            if !movements.is_empty() {
                basics.insert(pos, movements);
            }
        }
    }
    basics
}

/// 持ち駒を打つ手を全て列挙する（非空のものだけ登録する）
///
/// 最適化: 手番側が王手されていなければ、打つ手が王手を解消することは
/// ありえない（駒を打つだけでは自玉の利きを遮ることはあっても新たに
/// 王手を受けることはない）ので、高コストな自玉王手チェックを省略する。
pub fn moves_drop_for(
    player: Player,
    board: &Board,
    test_check: bool,
) -> HashMap<Piece, Vec<BoardPos>> {
    let effective_test_check = test_check && is_in_check(player, board);
    let mut drops = HashMap::new();
    for sort in board.hand_of(player).held_sorts() {
        let piece = Piece::new(player, sort);
        let positions = possible_drops_of(piece, board, effective_test_check);
        if !positions.is_empty() {
            drops.insert(piece, positions);
        }
    }
    drops
}

/// `player` が指せる全ての手（盤上の移動 + 持ち駒の駒打ち）
pub fn moves_for(player: Player, board: &Board, test_check: bool) -> Valid {
    Valid {
        basics: moves_basic_for(player, board, test_check),
        drops: moves_drop_for(player, board, test_check),
    }
}

/// `mv` が現在の局面で合法かどうか
pub fn is_valid(mv: Move, board: &Board) -> bool {
    match mv {
        Move::Basic {
            from,
            motion,
            promoted,
        } => {
            let movements = motions_from(board, from, true);
            movements.iter().any(|m| {
                m.motion == motion
                    && !(m.promotion == AbleToPromote::MustPromote && !promoted)
            })
        }
        Move::Drop { pos, piece } => {
            if board.hand_of(piece.player).count(piece.sort) == 0 {
                return false;
            }
            possible_drops_of(piece, board, true).contains(&pos)
        }
    }
}
