//! 指し手生成器: 駒の移動候補を列挙する

use crate::board::Board;
use crate::check::is_in_check;
use crate::promotion::{able_to_promote, must_promote_in_ranks, AbleToPromote};
use crate::types::{BoardPos, Motion, Move, Piece, PieceSort, Player};

use super::tables;

/// 1つの着手候補。動きのベクトルと成りの可否を運ぶ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub motion: Motion,
    pub promotion: AbleToPromote,
}

/// 後手視点なら非対称な駒の移動表を鏡映する
fn perspective(player: Player, table: &[Motion]) -> Vec<Motion> {
    match player {
        Player::Black => table.to_vec(),
        Player::White => table.iter().map(|m| m.flip_horiz()).collect(),
    }
}

fn classify_promotion(piece: Piece, src: BoardPos, dest: BoardPos) -> AbleToPromote {
    if !piece.sort.can_promote() {
        return AbleToPromote::CannotPromote;
    }
    let ranks = must_promote_in_ranks(piece);
    able_to_promote(src, dest, piece.player, ranks)
}

/// `from` から `motion` だけ動かしたとき、手番側が王手されたままになるか
fn leaves_mover_in_check(board: &Board, from: BoardPos, motion: Motion, player: Player) -> bool {
    let mut sim = board.clone();
    let applied = sim.apply_move_basic(Move::basic(from, motion, false));
    debug_assert!(applied, "candidate motion must be applicable on a copy");
    is_in_check(player, &sim)
}

/// 盤上の1マスにある1種類の直接移動（ジャンプ含む）を列挙する
fn enumerate_direct(
    board: &Board,
    pos: BoardPos,
    piece: Piece,
    motions: &[Motion],
    test_check: bool,
    out: &mut Vec<Movement>,
) {
    for &motion in motions {
        let Some(dest) = pos.apply_motion(motion) else {
            continue;
        };
        match board.get(dest) {
            Some(occupant) if occupant.player == piece.player => continue,
            _ => {}
        }
        if test_check && leaves_mover_in_check(board, pos, motion, piece.player) {
            continue;
        }
        out.push(Movement {
            motion,
            promotion: classify_promotion(piece, pos, dest),
        });
    }
}

/// 1方向への遠隔移動（飛車・角・香）を列挙する
fn enumerate_ray(
    board: &Board,
    pos: BoardPos,
    piece: Piece,
    direction: Motion,
    test_check: bool,
    out: &mut Vec<Movement>,
) {
    let mut k: i8 = 1;
    loop {
        let motion = direction.scaled(k);
        let Some(dest) = pos.apply_motion(motion) else {
            break;
        };
        let occupant = board.get(dest);
        if let Some(piece_at_dest) = occupant {
            if piece_at_dest.player == piece.player {
                break;
            }
        }
        let rejected_by_check =
            test_check && leaves_mover_in_check(board, pos, motion, piece.player);
        if !rejected_by_check {
            out.push(Movement {
                motion,
                promotion: classify_promotion(piece, pos, dest),
            });
        }
        match occupant {
            Some(_) => break,
            None => k += 1,
        }
    }
}

/// `pos` にある駒が取りうる `Movement` を全て返す。`test_check` を `false` にすると
/// 自玉が王手されたままになる手も含める（`is_in_check` からの再帰を断ち切るために使う）。
pub fn motions_from(board: &Board, pos: BoardPos, test_check: bool) -> Vec<Movement> {
    let Some(piece) = board.get(pos) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let player = piece.player;

    match piece.sort {
        PieceSort::King => {
            enumerate_direct(board, pos, piece, tables::KING, test_check, &mut out);
        }
        PieceSort::Gold
        | PieceSort::PromotedSilver
        | PieceSort::PromotedKnight
        | PieceSort::PromotedLance
        | PieceSort::PromotedPawn => {
            let motions = perspective(player, tables::GOLD_LIKE);
            enumerate_direct(board, pos, piece, &motions, test_check, &mut out);
        }
        PieceSort::Silver => {
            let motions = perspective(player, tables::SILVER);
            enumerate_direct(board, pos, piece, &motions, test_check, &mut out);
        }
        PieceSort::Knight => {
            let motions = perspective(player, tables::KNIGHT);
            enumerate_direct(board, pos, piece, &motions, test_check, &mut out);
        }
        PieceSort::Pawn => {
            let motions = perspective(player, tables::PAWN);
            enumerate_direct(board, pos, piece, &motions, test_check, &mut out);
        }
        PieceSort::Lance => {
            for &direction in &perspective(player, tables::LANCE_RAYS) {
                enumerate_ray(board, pos, piece, direction, test_check, &mut out);
            }
        }
        PieceSort::Rook => {
            for &direction in tables::ROOK_RAYS {
                enumerate_ray(board, pos, piece, direction, test_check, &mut out);
            }
        }
        PieceSort::Bishop => {
            for &direction in tables::BISHOP_RAYS {
                enumerate_ray(board, pos, piece, direction, test_check, &mut out);
            }
        }
        PieceSort::PromotedRook => {
            for &direction in tables::ROOK_RAYS {
                enumerate_ray(board, pos, piece, direction, test_check, &mut out);
            }
            enumerate_direct(
                board,
                pos,
                piece,
                tables::PROMOTED_ROOK_EXTRA_DIRECT,
                test_check,
                &mut out,
            );
        }
        PieceSort::PromotedBishop => {
            for &direction in tables::BISHOP_RAYS {
                enumerate_ray(board, pos, piece, direction, test_check, &mut out);
            }
            enumerate_direct(
                board,
                pos,
                piece,
                tables::PROMOTED_BISHOP_EXTRA_DIRECT,
                test_check,
                &mut out,
            );
        }
    }

    out
}
