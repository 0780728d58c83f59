//! 成りルール: 強制成り・成り可能区域の判定

use crate::board::BOARD_SIZE;
use crate::types::{BoardPos, Piece, PieceSort, Player};

/// ある着手が不成のまま許されるか、成りが選べるか、成りが強制されるか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbleToPromote {
    CannotPromote,
    CanPromote,
    MustPromote,
}

/// `piece` が「その先には進めなくなる」段までの距離（先手視点のランク数）。
/// 0 = 強制なし、1 = 最終段のみ禁止（歩・香）、2 = 最終2段が禁止（桂）。
#[inline]
pub const fn must_promote_in_ranks(piece: Piece) -> i8 {
    match piece.sort {
        PieceSort::Pawn | PieceSort::Lance => 1,
        PieceSort::Knight => 2,
        _ => 0,
    }
}

fn must_promote_at_rank_with(player: Player, rank: i8, ranks: i8) -> bool {
    if ranks == 0 {
        return false;
    }
    match player {
        Player::Black => rank < ranks,
        Player::White => rank >= BOARD_SIZE as i8 - ranks,
    }
}

/// `rank` に着地すると、その駒がそれ以上動けなくなるかどうか
#[inline]
pub fn must_promote_at_rank(piece: Piece, rank: i8) -> bool {
    must_promote_at_rank_with(piece.player, rank, must_promote_in_ranks(piece))
}

/// `src` から `dest` への着手について成りの可否を判定する。
///
/// `ranks` は呼び出し側が `must_promote_in_ranks` で求めた値を渡す。
pub fn able_to_promote(
    src: BoardPos,
    dest: BoardPos,
    player: Player,
    ranks: i8,
) -> AbleToPromote {
    if must_promote_at_rank_with(player, dest.rank(), ranks) {
        AbleToPromote::MustPromote
    } else if src.in_promotion_zone_for(player) || dest.in_promotion_zone_for(player) {
        AbleToPromote::CanPromote
    } else {
        AbleToPromote::CannotPromote
    }
}
